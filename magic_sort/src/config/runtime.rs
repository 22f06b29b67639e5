// RUNTIME PREFERENCES

use serde::{Deserialize, Serialize};
use std::env;

/// Environment variable toggling the homogeneity pre-pass
pub const ENV_CHECK_HOMOGENEOUS: &str = "MAGIC_SORT_CHECK_HOMOGENEOUS";

/// Environment variable toggling per-comparison trace logging
pub const ENV_LOG_COMPARISONS: &str = "MAGIC_SORT_LOG_COMPARISONS";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SorterConfig {
    /// Whether to reject mixed value kinds under one key before sorting
    pub check_homogeneous: bool,

    /// Whether to emit a trace event for every key comparison
    pub log_comparisons: bool,
}

impl Default for SorterConfig {
    fn default() -> Self {
        Self {
            check_homogeneous: env_flag(ENV_CHECK_HOMOGENEOUS, true),
            log_comparisons: env_flag(ENV_LOG_COMPARISONS, false),
        }
    }
}

impl SorterConfig {
    /// Defaults without consulting the environment
    pub fn baseline() -> Self {
        Self {
            check_homogeneous: true,
            log_comparisons: false,
        }
    }

    pub fn with_homogeneity_check(mut self, enabled: bool) -> Self {
        self.check_homogeneous = enabled;
        self
    }

    pub fn with_comparison_logging(mut self, enabled: bool) -> Self {
        self.log_comparisons = enabled;
        self
    }
}

fn env_flag(name: &str, default: bool) -> bool {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_baseline() {
        let config = SorterConfig::baseline();
        assert!(config.check_homogeneous);
        assert!(!config.log_comparisons);
    }

    #[test]
    fn test_builder() {
        let config = SorterConfig::baseline()
            .with_homogeneity_check(false)
            .with_comparison_logging(true);
        assert!(!config.check_homogeneous);
        assert!(config.log_comparisons);
    }

    #[test]
    fn test_env_flag_defaults_when_unset() {
        assert!(env_flag("MAGIC_SORT_TEST_UNSET_FLAG", true));
        assert!(!env_flag("MAGIC_SORT_TEST_UNSET_FLAG", false));
    }
}
