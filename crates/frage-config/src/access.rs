//! Role resolution configuration.
//!
//! # Environment Variables
//!
//! - `LEGACY_MASTER_TEACHER_EMAIL`: account that is always resolved as
//!   `master_teacher` when neither metadata nor the teacher registry names a
//!   role (default: `master_teacher@frage.com`, set empty to disable)
//! - `ACCESS_REGISTRY_TIMEOUT_MS`: upper bound for one teacher registry
//!   lookup during role resolution (default: 3000)

use std::env;
use std::time::Duration;

pub const DEFAULT_LEGACY_MASTER_TEACHER_EMAIL: &str = "master_teacher@frage.com";
pub const DEFAULT_REGISTRY_TIMEOUT_MS: u64 = 3000;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccessConfig {
    pub legacy_master_teacher_email: Option<String>,
    pub registry_timeout: Duration,
}

impl AccessConfig {
    pub fn from_env() -> Self {
        Self::from_values(
            env::var("LEGACY_MASTER_TEACHER_EMAIL").ok(),
            env::var("ACCESS_REGISTRY_TIMEOUT_MS").ok(),
        )
    }

    /// Build from raw variable values; `None` means the variable is unset.
    pub fn from_values(legacy_email: Option<String>, timeout_ms: Option<String>) -> Self {
        let legacy_master_teacher_email = match legacy_email {
            None => Some(DEFAULT_LEGACY_MASTER_TEACHER_EMAIL.to_string()),
            Some(value) if value.trim().is_empty() => None,
            Some(value) => Some(value.trim().to_string()),
        };

        let registry_timeout = timeout_ms
            .and_then(|s| s.parse().ok())
            .filter(|ms| *ms > 0)
            .map(Duration::from_millis)
            .unwrap_or(Duration::from_millis(DEFAULT_REGISTRY_TIMEOUT_MS));

        Self {
            legacy_master_teacher_email,
            registry_timeout,
        }
    }
}

impl Default for AccessConfig {
    fn default() -> Self {
        Self::from_values(None, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AccessConfig::default();
        assert_eq!(
            config.legacy_master_teacher_email.as_deref(),
            Some("master_teacher@frage.com")
        );
        assert_eq!(config.registry_timeout, Duration::from_millis(3000));
    }

    #[test]
    fn test_empty_email_disables_legacy_match() {
        let config = AccessConfig::from_values(Some("  ".to_string()), None);
        assert_eq!(config.legacy_master_teacher_email, None);
    }

    #[test]
    fn test_custom_values() {
        let config = AccessConfig::from_values(
            Some("head@school.kr".to_string()),
            Some("250".to_string()),
        );
        assert_eq!(
            config.legacy_master_teacher_email.as_deref(),
            Some("head@school.kr")
        );
        assert_eq!(config.registry_timeout, Duration::from_millis(250));
    }

    #[test]
    fn test_invalid_timeout_falls_back() {
        let config = AccessConfig::from_values(None, Some("soon".to_string()));
        assert_eq!(config.registry_timeout, Duration::from_millis(3000));
        let config = AccessConfig::from_values(None, Some("0".to_string()));
        assert_eq!(config.registry_timeout, Duration::from_millis(3000));
    }
}
