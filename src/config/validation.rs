//! Configuration validation for sbom-guard.
//!
//! Provides validation traits and implementations for all configuration types.

use super::types::{AppConfig, OutputConfig, PolicyConfig};
use crate::compliance::{LicenseCategory, LicensePolicy};

// ============================================================================
// Configuration Error
// ============================================================================

/// Error type for configuration validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
    /// Advisory issues are reported but do not make the config invalid
    pub advisory: bool,
}

impl ConfigError {
    pub fn error(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            advisory: false,
        }
    }

    pub fn advisory(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            advisory: true,
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Validation Trait
// ============================================================================

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any issues found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid. Advisory issues are ignored.
    fn is_valid(&self) -> bool {
        self.validate().iter().all(|e| e.advisory)
    }
}

// ============================================================================
// Validation Implementations
// ============================================================================

impl Validatable for AppConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        errors.extend(self.policy.validate());
        errors.extend(self.output.validate());

        if self.behavior.quiet && self.behavior.verbose {
            errors.push(ConfigError::advisory(
                "behavior",
                "Both 'quiet' and 'verbose' are set. 'verbose' takes precedence.",
            ));
        }

        errors
    }
}

impl Validatable for PolicyConfig {
    fn validate(&self) -> Vec<ConfigError> {
        match &self.file {
            Some(path) if !path.exists() => vec![ConfigError::error(
                "policy.file",
                format!("Policy file does not exist: {}", path.display()),
            )],
            // The inline sets are ignored when a file is configured
            Some(_) => Vec::new(),
            None => prefixed(self.licenses.validate(), "policy"),
        }
    }
}

impl Validatable for LicensePolicy {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        for category in LicenseCategory::ALL {
            let Some(set) = self.set_for(category) else {
                continue;
            };
            if set.iter().any(|id| id.trim().is_empty()) {
                errors.push(ConfigError::error(
                    category.name(),
                    "License identifiers must not be empty",
                ));
            }
        }

        for conflict in self.conflicts() {
            errors.push(ConfigError::advisory("conflicts", conflict.to_string()));
        }

        errors
    }
}

impl Validatable for OutputConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        // Validate output file path if specified
        if let Some(parent) = self.file.as_deref().and_then(std::path::Path::parent) {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                errors.push(ConfigError::error(
                    "output.file",
                    format!("Parent directory does not exist: {}", parent.display()),
                ));
            }
        }

        errors
    }
}

fn prefixed(errors: Vec<ConfigError>, prefix: &str) -> Vec<ConfigError> {
    errors
        .into_iter()
        .map(|mut e| {
            e.field = format!("{prefix}.{}", e.field);
            e
        })
        .collect()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_empty());
        assert!(config.is_valid());
    }

    #[test]
    fn test_empty_identifier_is_error() {
        let policy = LicensePolicy::new(["MIT", "  "], Vec::<String>::new(), Vec::<String>::new());
        let errors = policy.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "allowed");
        assert!(!policy.is_valid());
    }

    #[test]
    fn test_conflict_is_advisory() {
        let policy = LicensePolicy::new(["MIT"], ["MIT"], Vec::<String>::new());
        let errors = policy.validate();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].advisory);
        assert!(errors[0].message.contains("forbidden"));
        assert!(policy.is_valid());
    }

    #[test]
    fn test_policy_config_field_prefix() {
        let config = PolicyConfig {
            file: None,
            licenses: LicensePolicy::new([""], ["GPL"], ["GPL"]),
        };
        let fields: Vec<String> = config.validate().into_iter().map(|e| e.field).collect();
        assert_eq!(fields, ["policy.allowed", "policy.conflicts"]);
    }

    #[test]
    fn test_missing_policy_file() {
        let config = PolicyConfig {
            file: Some(PathBuf::from("/nonexistent/policy.yaml")),
            licenses: LicensePolicy::default(),
        };
        assert!(!config.is_valid());
    }

    #[test]
    fn test_output_parent_directory_must_exist() {
        let config = OutputConfig {
            file: Some(PathBuf::from("/nonexistent/dir/report.json")),
            ..Default::default()
        };
        let errors = config.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "output.file");

        let relative = OutputConfig {
            file: Some(PathBuf::from("report.json")),
            ..Default::default()
        };
        assert!(relative.validate().is_empty());
    }

    #[test]
    fn test_config_error_display() {
        let error = ConfigError::error("policy.allowed", "bad");
        assert_eq!(error.to_string(), "policy.allowed: bad");
    }
}
