//! JSON report generator.

use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::compliance::{CategoryCounts, ClassificationResult, ComplianceReport, LicenseCategory};
use crate::diff::{ChangeSet, DiffSummary};
use crate::model::Sbom;
use indexmap::IndexMap;
use serde::Serialize;
use std::collections::BTreeSet;

/// JSON report generator
pub struct JsonReporter {
    /// Pretty print output
    pretty: bool,
}

impl JsonReporter {
    /// Create a new JSON reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { pretty: true }
    }

    /// Set pretty printing
    #[must_use]
    pub const fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    fn render<T: Serialize>(&self, report: &T) -> Result<String, ReportError> {
        if self.pretty {
            serde_json::to_string_pretty(report)
        } else {
            serde_json::to_string(report)
        }
        .map_err(|e| ReportError::SerializationError(e.to_string()))
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for JsonReporter {
    fn generate_analyze_report(
        &self,
        sbom: &Sbom,
        report: &ComplianceReport,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        // Strictest category first, matching the classification order
        let components: IndexMap<&'static str, Vec<JsonClassifiedComponent<'_>>> =
            LicenseCategory::ALL
                .iter()
                .map(|category| {
                    let entries = report
                        .bucket(*category)
                        .iter()
                        .map(JsonClassifiedComponent::from)
                        .collect();
                    (category.name(), entries)
                })
                .collect();

        let verdict = report.verdict();
        let json_report = JsonAnalyzeReport {
            metadata: JsonAnalyzeMetadata {
                tool: ToolInfo::current(),
                title: config.title.as_deref(),
                generated_at: config.generated_at(),
                sbom: SbomInfo::new(sbom, config.metadata.sbom_path.as_deref()),
            },
            summary: JsonComplianceSummary {
                total: report.total(),
                counts: report.counts(),
            },
            passed: report.passed(),
            verdict: verdict.name(),
            message: verdict.message(),
            components,
        };

        self.render(&json_report)
    }

    fn generate_compare_report(
        &self,
        changes: &ChangeSet,
        old_sbom: &Sbom,
        new_sbom: &Sbom,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let json_report = JsonCompareReport {
            metadata: JsonCompareMetadata {
                tool: ToolInfo::current(),
                title: config.title.as_deref(),
                generated_at: config.generated_at(),
                old_sbom: SbomInfo::new(old_sbom, config.metadata.old_sbom_path.as_deref()),
                new_sbom: SbomInfo::new(new_sbom, config.metadata.new_sbom_path.as_deref()),
            },
            summary: changes.summary(),
            added: changes
                .added_sorted()
                .into_iter()
                .map(|(name, version)| JsonVersionedName { name, version })
                .collect(),
            removed: changes
                .removed_sorted()
                .into_iter()
                .map(|(name, version)| JsonVersionedName { name, version })
                .collect(),
            updated: changes
                .updated_sorted()
                .into_iter()
                .map(|(name, change)| JsonUpdatedComponent {
                    name,
                    old_version: change.old.as_deref(),
                    new_version: change.new.as_deref(),
                })
                .collect(),
            duplicates: if changes.has_duplicates() {
                Some(JsonDuplicates {
                    old: &changes.duplicates_old,
                    new: &changes.duplicates_new,
                })
            } else {
                None
            },
        };

        self.render(&json_report)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Json
    }
}

// JSON report structures

#[derive(Serialize)]
struct ToolInfo {
    name: &'static str,
    version: &'static str,
}

impl ToolInfo {
    const fn current() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

#[derive(Serialize)]
struct SbomInfo<'a> {
    format: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    file_path: Option<&'a str>,
    component_count: usize,
}

impl<'a> SbomInfo<'a> {
    fn new(sbom: &'a Sbom, file_path: Option<&'a str>) -> Self {
        Self {
            format: sbom.document.format_label(),
            name: sbom.document.name.as_deref(),
            file_path,
            component_count: sbom.component_count(),
        }
    }
}

#[derive(Serialize)]
struct JsonAnalyzeReport<'a> {
    metadata: JsonAnalyzeMetadata<'a>,
    summary: JsonComplianceSummary,
    passed: bool,
    verdict: &'static str,
    message: &'static str,
    components: IndexMap<&'static str, Vec<JsonClassifiedComponent<'a>>>,
}

#[derive(Serialize)]
struct JsonAnalyzeMetadata<'a> {
    tool: ToolInfo,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generated_at: Option<String>,
    sbom: SbomInfo<'a>,
}

#[derive(Serialize)]
struct JsonComplianceSummary {
    total: usize,
    #[serde(flatten)]
    counts: CategoryCounts,
}

#[derive(Serialize)]
struct JsonClassifiedComponent<'a> {
    name: &'a str,
    version: Option<&'a str>,
    license: &'a str,
    normalized_license: &'a str,
}

impl<'a> From<&'a ClassificationResult> for JsonClassifiedComponent<'a> {
    fn from(result: &'a ClassificationResult) -> Self {
        Self {
            name: &result.component.name,
            version: result.component.version.as_deref(),
            license: &result.component.license,
            normalized_license: &result.normalized_license,
        }
    }
}

#[derive(Serialize)]
struct JsonCompareReport<'a> {
    metadata: JsonCompareMetadata<'a>,
    summary: DiffSummary,
    added: Vec<JsonVersionedName<'a>>,
    removed: Vec<JsonVersionedName<'a>>,
    updated: Vec<JsonUpdatedComponent<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    duplicates: Option<JsonDuplicates<'a>>,
}

#[derive(Serialize)]
struct JsonCompareMetadata<'a> {
    tool: ToolInfo,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generated_at: Option<String>,
    old_sbom: SbomInfo<'a>,
    new_sbom: SbomInfo<'a>,
}

#[derive(Serialize)]
struct JsonVersionedName<'a> {
    name: &'a str,
    version: Option<&'a str>,
}

#[derive(Serialize)]
struct JsonUpdatedComponent<'a> {
    name: &'a str,
    old_version: Option<&'a str>,
    new_version: Option<&'a str>,
}

#[derive(Serialize)]
struct JsonDuplicates<'a> {
    old: &'a BTreeSet<String>,
    new: &'a BTreeSet<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance::{ComplianceEvaluator, LicensePolicy};
    use crate::diff::DiffEngine;
    use crate::model::Component;
    use serde_json::Value;

    fn analyze_json(sbom: &Sbom) -> Value {
        let policy = LicensePolicy::default();
        let report = ComplianceEvaluator::new(&policy).evaluate(sbom);
        let out = JsonReporter::new()
            .generate_analyze_report(sbom, &report, &ReportConfig::for_analyze("bom.json"))
            .unwrap();
        serde_json::from_str(&out).unwrap()
    }

    #[test]
    fn test_analyze_document_shape() {
        let sbom = Sbom::from_components([
            Component::new("foo").with_version("1.0").with_license("MIT"),
            Component::new("bar").with_license("LGPLv3"),
        ]);
        let json = analyze_json(&sbom);

        assert_eq!(json["passed"], true);
        assert_eq!(json["verdict"], "passed_with_warnings");
        assert_eq!(json["summary"]["total"], 2);
        assert_eq!(json["summary"]["review_required"], 1);
        assert_eq!(json["metadata"]["sbom"]["file_path"], "bom.json");
        assert!(json["metadata"].get("generated_at").is_none());
        assert_eq!(json["components"]["allowed"][0]["name"], "foo");
        assert_eq!(json["components"]["review_required"][0]["version"], Value::Null);
    }

    #[test]
    fn test_analyze_buckets_in_strictness_order() {
        let sbom = Sbom::from_components([Component::new("a")]);
        let policy = LicensePolicy::default();
        let report = ComplianceEvaluator::new(&policy).evaluate(&sbom);
        let out = JsonReporter::new()
            .generate_analyze_report(&sbom, &report, &ReportConfig::default())
            .unwrap();

        let forbidden = out.find("\"forbidden\": [").unwrap();
        let unknown = out.find("\"unknown\": [").unwrap();
        assert!(forbidden < unknown);
    }

    #[test]
    fn test_output_is_deterministic() {
        let sbom = Sbom::from_components([
            Component::new("x").with_license("GPL"),
            Component::new("y").with_license("MIT"),
        ]);
        assert_eq!(analyze_json(&sbom), analyze_json(&sbom));
    }

    #[test]
    fn test_compare_document_shape() {
        let old = Sbom::from_components([
            Component::new("A").with_version("1.0"),
            Component::new("B").with_version("2.0"),
        ]);
        let new = Sbom::from_components([
            Component::new("A").with_version("1.1"),
            Component::new("C"),
        ]);
        let changes = DiffEngine::new().diff(&old, &new);
        let out = JsonReporter::new()
            .pretty(false)
            .generate_compare_report(&changes, &old, &new, &ReportConfig::default())
            .unwrap();
        let json: Value = serde_json::from_str(&out).unwrap();

        assert_eq!(json["summary"]["total_changes"], 3);
        assert_eq!(json["added"][0]["name"], "C");
        assert_eq!(json["added"][0]["version"], Value::Null);
        assert_eq!(json["removed"][0]["version"], "2.0");
        assert_eq!(json["updated"][0]["old_version"], "1.0");
        assert_eq!(json["updated"][0]["new_version"], "1.1");
        assert!(json.get("duplicates").is_none());
    }
}
