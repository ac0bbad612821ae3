//! Configuration module for sbom-guard.
//!
//! This module provides:
//! - Type-safe configuration structures
//! - Validation for all configuration values
//! - YAML config file loading and discovery
//! - Standalone license policy files
//! - CLI argument merging
//!
//! # Configuration File
//!
//! Place a `.sbom-guard.yaml` file in your project root or `~/.config/sbom-guard/`:
//!
//! ```yaml
//! policy:
//!   forbidden: [GPL, AGPL, SSPL]
//! output:
//!   format: markdown
//! ```

pub mod file;
mod types;
mod validation;

// Re-export main types
pub use types::{
    AnalyzeConfig, AppConfig, AppConfigBuilder, BehaviorConfig, CompareConfig, ComparePaths,
    OutputConfig, PolicyConfig,
};
pub use validation::{ConfigError, Validatable};

// Re-export file utilities
pub use file::{
    default_config_path, discover_config_file, generate_example_config,
    generate_full_example_config, load_config_file, load_or_default, load_policy_file,
    ConfigFileError, CONFIG_FILE_NAMES,
};

/// Generate a JSON Schema for the `AppConfig` configuration format.
///
/// This schema documents all configuration options that can be set in
/// `.sbom-guard.yaml` config files. It can be used by editors for
/// validation and autocompletion.
pub fn generate_json_schema() -> crate::error::Result<String> {
    let schema = schemars::schema_for!(AppConfig);
    serde_json::to_string_pretty(&schema).map_err(|e| {
        crate::error::GuardError::config(format!("schema serialization failed: {e}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_schema_lists_sections() {
        let schema = generate_json_schema().unwrap();
        assert!(schema.contains("\"policy\""));
        assert!(schema.contains("\"output\""));
        assert!(schema.contains("\"review_required\""));
    }
}
