//! Diagnostic codes attached to sorter log events and errors

// ============================================================================
// CODE WRAPPER TYPE
// ============================================================================

/// Universal code wrapper for both error and success codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code(&'static str);

impl Code {
    pub const fn new(code: &'static str) -> Self {
        Self(code)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// CODE CONSTANTS
// ============================================================================

/// Sort key validation codes
pub mod validation {
    use super::Code;

    pub const SORT_KEY_NOT_FOUND: Code = Code::new("MS001");
    pub const INVALID_SORT_SPEC: Code = Code::new("MS002");
}

/// Comparison codes
pub mod comparison {
    use super::Code;

    pub const INCOMPARABLE_VALUES: Code = Code::new("MS010");
}

/// Configuration codes
pub mod config {
    use super::Code;

    pub const CONFIG_LOAD_FAILURE: Code = Code::new("MS020");
}

/// Success codes
pub mod success {
    use super::Code;

    pub const COMPARATOR_BUILT: Code = Code::new("MS100");
    pub const SORT_COMPLETED: Code = Code::new("MS101");
    pub const VIEW_MATERIALIZED: Code = Code::new("MS102");
}

// ============================================================================
// METADATA LOOKUP
// ============================================================================

/// Get human readable description for a code
pub fn get_description(code: &str) -> &'static str {
    match code {
        "MS001" => "Sort key does not resolve to a field on the record type",
        "MS002" => "Sort specification text could not be parsed",
        "MS010" => "Values resolved for one sort key have incompatible types",
        "MS020" => "Sort configuration could not be loaded",
        "MS100" => "Comparator built",
        "MS101" => "Sort completed",
        "MS102" => "Ordered view materialized",
        _ => "Unknown code",
    }
}

/// Whether the code reports a failure
pub fn is_error_code(code: &str) -> bool {
    !code.starts_with("MS1")
}
