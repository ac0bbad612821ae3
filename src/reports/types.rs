//! Report type definitions.

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Output format for reports
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Sectioned terminal text
    #[default]
    Summary,
    /// Structured JSON output
    Json,
    /// Markdown tables for CI comments
    #[value(alias = "md")]
    Markdown,
    /// CSV for spreadsheet import
    Csv,
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Summary => write!(f, "summary"),
            Self::Json => write!(f, "json"),
            Self::Markdown => write!(f, "markdown"),
            Self::Csv => write!(f, "csv"),
        }
    }
}

/// Configuration for report generation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Title for the report, replacing the default heading
    pub title: Option<String>,
    /// Input paths and tool info
    pub metadata: ReportMetadata,
    /// Generation time to stamp into the report.
    ///
    /// Left unset, reports are byte-identical for identical input.
    pub timestamp: Option<DateTime<Utc>>,
}

impl ReportConfig {
    /// Config for an `analyze` run over `path`
    #[must_use]
    pub fn for_analyze(path: impl Into<String>) -> Self {
        Self {
            metadata: ReportMetadata {
                sbom_path: Some(path.into()),
                ..ReportMetadata::new()
            },
            ..Default::default()
        }
    }

    /// Config for a `compare` run between two paths
    #[must_use]
    pub fn for_compare(old_path: impl Into<String>, new_path: impl Into<String>) -> Self {
        Self {
            metadata: ReportMetadata {
                old_sbom_path: Some(old_path.into()),
                new_sbom_path: Some(new_path.into()),
                ..ReportMetadata::new()
            },
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub const fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// The timestamp formatted as RFC 3339, if set
    #[must_use]
    pub fn generated_at(&self) -> Option<String> {
        self.timestamp.map(|ts| ts.to_rfc3339())
    }
}

/// Metadata included in reports
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// Analyzed SBOM path
    pub sbom_path: Option<String>,
    /// Old SBOM file path
    pub old_sbom_path: Option<String>,
    /// New SBOM file path
    pub new_sbom_path: Option<String>,
    /// Tool version
    pub tool_version: String,
}

impl ReportMetadata {
    #[must_use]
    pub fn new() -> Self {
        Self {
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_display_matches_value_names() {
        for format in ReportFormat::value_variants() {
            let value = format
                .to_possible_value()
                .map(|v| v.get_name().to_string());
            assert_eq!(value, Some(format.to_string()));
        }
    }

    #[test]
    fn test_timestamp_is_opt_in() {
        let config = ReportConfig::for_analyze("bom.json");
        assert!(config.generated_at().is_none());
        assert_eq!(config.metadata.tool_version, env!("CARGO_PKG_VERSION"));

        let ts = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let config = config.with_timestamp(ts);
        assert_eq!(
            config.generated_at().as_deref(),
            Some("2024-05-01T12:00:00+00:00")
        );
    }
}
