//! Logging for the sorter
//!
//! Events go through the `log` facade so the host application decides
//! where they end up. Macros mirror a message-plus-context shape:
//!
//! ```ignore
//! log_debug!("Validated sort key", "key" => key, "type" => type_name);
//! ```

#[macro_use]
mod macros;
pub mod codes;

pub use codes::Code;

/// Render context pairs as ` key=value key=value`
pub fn format_context(context: &[(&str, String)]) -> String {
    let mut rendered = String::new();
    for (key, value) in context {
        rendered.push(' ');
        rendered.push_str(key);
        rendered.push('=');
        if value.contains(char::is_whitespace) {
            rendered.push('"');
            rendered.push_str(value);
            rendered.push('"');
        } else {
            rendered.push_str(value);
        }
    }
    rendered
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_context() {
        let context = vec![
            ("key", "Address.City".to_string()),
            ("type", "Customer".to_string()),
        ];
        assert_eq!(format_context(&context), " key=Address.City type=Customer");
    }

    #[test]
    fn test_format_context_quotes_whitespace() {
        let context = vec![("reason", "no such field".to_string())];
        assert_eq!(format_context(&context), " reason=\"no such field\"");
        assert_eq!(format_context(&[]), "");
    }
}
