//! Logging macros taking a message plus `key => value` context pairs.
//!
//! Context values accept any `Display` type and are rendered as
//! `key=value` pairs after the message.

/// Log error with Code type
macro_rules! log_error {
    ($code:expr, $message:expr) => {
        ::log::error!("[{}] {}", $code, $message)
    };

    ($code:expr, $message:expr, $($key:expr => $value:expr),+ $(,)?) => {
        {
            let context: Vec<(&str, String)> = vec![$(($key, format!("{}", $value))),+];
            ::log::error!(
                "[{}] {}{}",
                $code,
                $message,
                $crate::logging::format_context(&context)
            )
        }
    };
}

/// Log warning, optionally with a Code
macro_rules! log_warning {
    ($message:expr) => {
        ::log::warn!("{}", $message)
    };

    ($message:expr, $($key:expr => $value:expr),+ $(,)?) => {
        {
            let context: Vec<(&str, String)> = vec![$(($key, format!("{}", $value))),+];
            ::log::warn!("{}{}", $message, $crate::logging::format_context(&context))
        }
    };
}

/// Log success with Code type
macro_rules! log_success {
    ($code:expr, $message:expr) => {
        ::log::info!("[{}] {}", $code, $message)
    };

    ($code:expr, $message:expr, $($key:expr => $value:expr),+ $(,)?) => {
        {
            let context: Vec<(&str, String)> = vec![$(($key, format!("{}", $value))),+];
            ::log::info!(
                "[{}] {}{}",
                $code,
                $message,
                $crate::logging::format_context(&context)
            )
        }
    };
}

/// Log debug message
macro_rules! log_debug {
    ($message:expr) => {
        ::log::debug!("{}", $message)
    };

    ($message:expr, $($key:expr => $value:expr),+ $(,)?) => {
        if ::log::log_enabled!(::log::Level::Debug) {
            let context: Vec<(&str, String)> = vec![$(($key, format!("{}", $value))),+];
            ::log::debug!("{}{}", $message, $crate::logging::format_context(&context))
        }
    };
}

/// Log trace message, used on hot comparison paths
macro_rules! log_trace {
    ($message:expr, $($key:expr => $value:expr),+ $(,)?) => {
        if ::log::log_enabled!(::log::Level::Trace) {
            let context: Vec<(&str, String)> = vec![$(($key, format!("{}", $value))),+];
            ::log::trace!("{}{}", $message, $crate::logging::format_context(&context))
        }
    };
}
