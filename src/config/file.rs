//! Configuration file loading and discovery.
//!
//! Supports loading configuration from YAML files with automatic discovery,
//! and standalone license policy files in YAML or JSON.

use super::types::AppConfig;
use crate::compliance::LicensePolicy;
use crate::error::{GuardError, Result};
use crate::reports::ReportFormat;
use std::path::{Path, PathBuf};

// ============================================================================
// Configuration File Discovery
// ============================================================================

/// Standard config file names to search for.
pub const CONFIG_FILE_NAMES: &[&str] = &[
    ".sbom-guard.yaml",
    ".sbom-guard.yml",
    "sbom-guard.yaml",
    "sbom-guard.yml",
];

/// Discover a config file by searching standard locations.
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Current directory
/// 3. Git repository root (if in a repo)
/// 4. User config directory (~/.config/sbom-guard/)
/// 5. Home directory
#[must_use]
pub fn discover_config_file(explicit_path: Option<&Path>) -> Option<PathBuf> {
    // 1. Use explicit path if provided
    if let Some(path) = explicit_path {
        if path.exists() {
            return Some(path.to_path_buf());
        }
    }

    // 2. Search current directory
    if let Some(path) = std::env::current_dir()
        .ok()
        .and_then(|cwd| find_config_in_dir(&cwd))
    {
        return Some(path);
    }

    // 3. Search git root (if in a repo)
    if let Some(path) = find_git_root().and_then(|root| find_config_in_dir(&root)) {
        return Some(path);
    }

    // 4. Search user config directory
    if let Some(config_dir) = dirs::config_dir() {
        if let Some(path) = find_config_in_dir(&config_dir.join("sbom-guard")) {
            return Some(path);
        }
    }

    // 5. Search home directory
    dirs::home_dir().and_then(|home| find_config_in_dir(&home))
}

/// Find a config file in a specific directory.
fn find_config_in_dir(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.exists())
}

/// Find the git repository root by walking up the directory tree.
fn find_git_root() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    let mut current = cwd.as_path();

    loop {
        if current.join(".git").exists() {
            return Some(current.to_path_buf());
        }

        current = current.parent()?;
    }
}

/// Default location for `config init` and `config path`.
#[must_use]
pub fn default_config_path() -> PathBuf {
    std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(CONFIG_FILE_NAMES[0])
}

// ============================================================================
// Configuration File Loading
// ============================================================================

/// Error type for config file operations.
#[derive(Debug)]
pub enum ConfigFileError {
    /// File not found
    NotFound(PathBuf),
    /// IO error reading file
    Io(std::io::Error),
    /// YAML parsing error
    Parse(serde_yaml::Error),
}

impl std::fmt::Display for ConfigFileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(path) => {
                write!(f, "Config file not found: {}", path.display())
            }
            Self::Io(e) => write!(f, "Failed to read config file: {e}"),
            Self::Parse(e) => write!(f, "Failed to parse config file: {e}"),
        }
    }
}

impl std::error::Error for ConfigFileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NotFound(_) => None,
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for ConfigFileError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_yaml::Error> for ConfigFileError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Parse(err)
    }
}

impl From<ConfigFileError> for GuardError {
    fn from(err: ConfigFileError) -> Self {
        Self::config(err.to_string())
    }
}

/// Load an `AppConfig` from a YAML file.
pub fn load_config_file(path: &Path) -> std::result::Result<AppConfig, ConfigFileError> {
    if !path.exists() {
        return Err(ConfigFileError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    let config: AppConfig = serde_yaml::from_str(&content)?;
    Ok(config)
}

/// Load config from discovered file, or return default.
#[must_use]
pub fn load_or_default(explicit_path: Option<&Path>) -> (AppConfig, Option<PathBuf>) {
    discover_config_file(explicit_path).map_or_else(
        || (AppConfig::default(), None),
        |path| match load_config_file(&path) {
            Ok(config) => (config, Some(path)),
            Err(e) => {
                tracing::warn!("Failed to load config from {}: {}", path.display(), e);
                (AppConfig::default(), None)
            }
        },
    )
}

/// Load a standalone license policy.
///
/// Files ending in `.json` are read as JSON, anything else as YAML. Sets
/// missing from the file keep their built-in defaults.
pub fn load_policy_file(path: &Path) -> Result<LicensePolicy> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        GuardError::config(format!(
            "cannot read policy file {}: {e}",
            path.display()
        ))
    })?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let parsed = if is_json {
        serde_json::from_str(&content).map_err(|e| e.to_string())
    } else {
        LicensePolicy::from_yaml_str(&content).map_err(|e| e.to_string())
    };

    let policy = parsed.map_err(|e| {
        GuardError::config(format!(
            "cannot parse policy file {}: {e}",
            path.display()
        ))
    })?;

    tracing::debug!(
        "Loaded policy from {}: {} allowed, {} review required, {} forbidden",
        path.display(),
        policy.allowed.len(),
        policy.review_required.len(),
        policy.forbidden.len()
    );

    Ok(policy)
}

// ============================================================================
// Configuration Merging
// ============================================================================

impl AppConfig {
    /// Merge another config into this one, with `other` taking precedence.
    ///
    /// This is useful for layering CLI args over file config.
    pub fn merge(&mut self, other: &Self) {
        // Policy config: a policy file replaces the inline sets
        if other.policy.file.is_some() {
            self.policy.file.clone_from(&other.policy.file);
        }

        // Output config - only override if explicitly set
        if other.output.format != ReportFormat::default() {
            self.output.format = other.output.format;
        }
        if other.output.file.is_some() {
            self.output.file.clone_from(&other.output.file);
        }
        if other.output.no_color {
            self.output.no_color = true;
        }
        if other.output.timestamp {
            self.output.timestamp = true;
        }

        // Behavior config (booleans - if set to true, override)
        if other.behavior.quiet {
            self.behavior.quiet = true;
        }
        if other.behavior.verbose {
            self.behavior.verbose = true;
        }
    }

    /// Load from file and merge with CLI overrides.
    #[must_use]
    pub fn from_file_with_overrides(
        config_path: Option<&Path>,
        cli_overrides: &Self,
    ) -> (Self, Option<PathBuf>) {
        let (mut config, loaded_from) = load_or_default(config_path);
        config.merge(cli_overrides);
        (config, loaded_from)
    }

    /// The license policy to audit against.
    ///
    /// A configured policy file takes precedence over the inline sets.
    pub fn resolve_policy(&self) -> Result<LicensePolicy> {
        match &self.policy.file {
            Some(path) => load_policy_file(path),
            None => Ok(self.policy.licenses.clone()),
        }
    }
}

// ============================================================================
// Example Config Generation
// ============================================================================

/// Generate an example config file content.
#[must_use]
pub fn generate_example_config() -> String {
    let example = AppConfig::default();
    format!(
        r"# sbom-guard configuration
# Place this file at .sbom-guard.yaml in your project root or ~/.config/sbom-guard/

{}
",
        serde_yaml::to_string(&example).unwrap_or_default()
    )
}

/// Generate a commented example config with all options.
#[must_use]
pub fn generate_full_example_config() -> String {
    r"# sbom-guard configuration file
# ==============================
#
# Place it at:
#   - .sbom-guard.yaml in your project root
#   - ~/.config/sbom-guard/sbom-guard.yaml for global config
#
# CLI arguments always override file settings.

# License policy for `sbom-guard analyze`.
# Matching is exact; identifiers are also tried with any trailing
# parenthesized part removed. Sets left out keep the built-in defaults.
policy:
  # Standalone YAML/JSON policy file, replaces the sets below
  # file: ./license-policy.yaml
  allowed:
    - MIT
    - Apache-2.0
    - BSD
    - ISC
  review_required:
    - LGPL
    - Creative Commons
  forbidden:
    - GPL
    - AGPL

# Output configuration
output:
  # Format: summary, json, markdown, csv
  format: summary
  # Output file path (omit for stdout)
  # file: report.json
  # Disable colored output
  no_color: false
  # Include the generation time in reports
  timestamp: false

# Behavior flags
behavior:
  # Only log warnings and errors
  quiet: false
  # Log debug detail
  verbose: false
"
    .to_string()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_find_config_in_dir() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join(".sbom-guard.yaml");
        std::fs::write(&config_path, "output:\n  format: json\n").unwrap();

        let found = find_config_in_dir(tmp.path());
        assert_eq!(found, Some(config_path));
    }

    #[test]
    fn test_find_config_in_dir_not_found() {
        let tmp = TempDir::new().unwrap();
        let found = find_config_in_dir(tmp.path());
        assert_eq!(found, None);
    }

    #[test]
    fn test_load_config_file() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("config.yaml");

        let yaml = r#"
policy:
  allowed: [MIT]
output:
  format: markdown
behavior:
  quiet: true
"#;
        std::fs::write(&config_path, yaml).unwrap();

        let config = load_config_file(&config_path).unwrap();
        assert_eq!(config.output.format, ReportFormat::Markdown);
        assert!(config.behavior.quiet);
        assert_eq!(config.policy.licenses.allowed.len(), 1);
    }

    #[test]
    fn test_load_config_file_not_found() {
        let result = load_config_file(Path::new("/nonexistent/config.yaml"));
        assert!(matches!(result, Err(ConfigFileError::NotFound(_))));
    }

    #[test]
    fn test_config_merge() {
        let mut base = AppConfig::default();
        base.output.format = ReportFormat::Markdown;

        let overrides = AppConfig::builder()
            .output_format(ReportFormat::Json)
            .policy_file(Some(PathBuf::from("strict.yaml")))
            .no_color(true)
            .build();
        base.merge(&overrides);

        assert_eq!(base.output.format, ReportFormat::Json);
        assert_eq!(base.policy.file, Some(PathBuf::from("strict.yaml")));
        assert!(base.output.no_color);
    }

    #[test]
    fn test_merge_keeps_file_format_when_cli_uses_default() {
        let mut base = AppConfig::default();
        base.output.format = ReportFormat::Csv;
        base.merge(&AppConfig::default());
        assert_eq!(base.output.format, ReportFormat::Csv);
    }

    #[test]
    fn test_load_policy_file_yaml_and_json() {
        let tmp = TempDir::new().unwrap();

        let yaml_path = tmp.path().join("policy.yaml");
        std::fs::write(&yaml_path, "forbidden:\n  - SSPL\n").unwrap();
        let policy = load_policy_file(&yaml_path).unwrap();
        assert_eq!(policy.forbidden.len(), 1);
        assert!(policy.allowed.contains("MIT"));

        let json_path = tmp.path().join("policy.json");
        std::fs::write(&json_path, r#"{"allowed": ["Zlib"], "forbidden": [], "review_required": []}"#)
            .unwrap();
        let policy = load_policy_file(&json_path).unwrap();
        assert_eq!(policy.allowed.len(), 1);
        assert!(policy.forbidden.is_empty());
    }

    #[test]
    fn test_load_policy_file_errors_are_config_errors() {
        let missing = load_policy_file(Path::new("/nonexistent/policy.yaml")).unwrap_err();
        assert_eq!(missing.kind(), crate::error::ErrorKind::Config);

        let tmp = TempDir::new().unwrap();
        let bad = tmp.path().join("bad.json");
        std::fs::write(&bad, "{\"allowed\": 3}").unwrap();
        let err = load_policy_file(&bad).unwrap_err();
        assert!(err.to_string().contains("bad.json"));
    }

    #[test]
    fn test_resolve_policy_prefers_file() {
        let tmp = TempDir::new().unwrap();
        let policy_path = tmp.path().join("policy.yml");
        std::fs::write(&policy_path, "allowed: [Zlib]\n").unwrap();

        let mut config = AppConfig::default();
        assert_eq!(config.resolve_policy().unwrap(), LicensePolicy::default());

        config.policy.file = Some(policy_path);
        let policy = config.resolve_policy().unwrap();
        assert!(policy.allowed.contains("Zlib"));
        assert!(!policy.allowed.contains("MIT"));
    }

    #[test]
    fn test_example_configs_parse() {
        let example = generate_example_config();
        assert!(example.contains("policy:"));
        let parsed: AppConfig = serde_yaml::from_str(&example).unwrap();
        assert_eq!(parsed, AppConfig::default());

        let full: AppConfig = serde_yaml::from_str(&generate_full_example_config()).unwrap();
        assert!(full.policy.licenses.forbidden.contains("GPL"));
    }

    #[test]
    fn test_discover_explicit_path() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("custom-config.yaml");
        let mut file = std::fs::File::create(&config_path).unwrap();
        writeln!(file, "output:\n  format: csv").unwrap();

        let discovered = discover_config_file(Some(&config_path));
        assert_eq!(discovered, Some(config_path));
    }
}
