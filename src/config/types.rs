//! Configuration types for sbom-guard operations.
//!
//! Provides structured configuration for analyze and compare operations.

use crate::compliance::LicensePolicy;
use crate::reports::ReportFormat;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ============================================================================
// Unified Application Configuration
// ============================================================================

/// Unified application configuration that can be loaded from CLI args or config files.
///
/// This is the top-level configuration struct. It can be constructed from
/// CLI arguments, config files, or both (with CLI overriding file settings).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// License policy used by `analyze`
    pub policy: PolicyConfig,
    /// Output configuration (format, file, colors)
    pub output: OutputConfig,
    /// Behavior flags
    pub behavior: BehaviorConfig,
}

impl AppConfig {
    /// Create a new `AppConfig` with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an `AppConfig` builder.
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }
}

// ============================================================================
// Builder for AppConfig
// ============================================================================

/// Builder for constructing `AppConfig` with fluent API.
#[derive(Debug, Default)]
#[must_use]
pub struct AppConfigBuilder {
    config: AppConfig,
}

impl AppConfigBuilder {
    /// Set the policy file, replacing any inline policy.
    pub fn policy_file(mut self, file: Option<PathBuf>) -> Self {
        self.config.policy.file = file;
        self
    }

    /// Set the inline license policy.
    pub fn policy(mut self, licenses: LicensePolicy) -> Self {
        self.config.policy.licenses = licenses;
        self
    }

    /// Set the output format.
    pub const fn output_format(mut self, format: ReportFormat) -> Self {
        self.config.output.format = format;
        self
    }

    /// Set the output file.
    pub fn output_file(mut self, file: Option<PathBuf>) -> Self {
        self.config.output.file = file;
        self
    }

    /// Disable colored output.
    pub const fn no_color(mut self, no_color: bool) -> Self {
        self.config.output.no_color = no_color;
        self
    }

    /// Stamp reports with the generation time.
    pub const fn timestamp(mut self, timestamp: bool) -> Self {
        self.config.output.timestamp = timestamp;
        self
    }

    /// Enable quiet mode.
    pub const fn quiet(mut self, quiet: bool) -> Self {
        self.config.behavior.quiet = quiet;
        self
    }

    /// Enable verbose logging.
    pub const fn verbose(mut self, verbose: bool) -> Self {
        self.config.behavior.verbose = verbose;
        self
    }

    /// Build the configuration.
    pub fn build(self) -> AppConfig {
        self.config
    }
}

// ============================================================================
// Command-specific Configuration Types
// ============================================================================

/// Configuration for analyze operations
#[derive(Debug, Clone)]
pub struct AnalyzeConfig {
    /// Path to the SBOM to audit
    pub sbom_path: PathBuf,
    /// Resolved license policy
    pub policy: LicensePolicy,
    /// Output configuration
    pub output: OutputConfig,
    /// Behavior flags
    pub behavior: BehaviorConfig,
}

/// Configuration for compare operations
#[derive(Debug, Clone)]
pub struct CompareConfig {
    /// Paths to compare
    pub paths: ComparePaths,
    /// Output configuration
    pub output: OutputConfig,
    /// Behavior flags
    pub behavior: BehaviorConfig,
}

/// Paths for compare operation
#[derive(Debug, Clone)]
pub struct ComparePaths {
    /// Path to old/baseline SBOM
    pub old: PathBuf,
    /// Path to new SBOM
    pub new: PathBuf,
}

// ============================================================================
// Sub-configuration Types
// ============================================================================

/// License policy configuration.
///
/// The three identifier sets can be written inline; `file` points at a
/// standalone YAML or JSON policy that replaces them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct PolicyConfig {
    /// Standalone policy file, replacing the inline sets when present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    /// Inline license identifier sets
    #[serde(flatten)]
    pub licenses: LicensePolicy,
}

/// Output-related configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format
    pub format: ReportFormat,
    /// Output file path (None for stdout)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    /// Disable colored output
    pub no_color: bool,
    /// Include the generation time in reports
    pub timestamp: bool,
}

/// Behavior flags
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Only log warnings and errors
    pub quiet: bool,
    /// Log debug detail
    pub verbose: bool,
}
