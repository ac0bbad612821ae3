#![no_main]
use libfuzzer_sys::fuzz_target;

/// Fuzz the SBOM loading entry point.
///
/// Feeds arbitrary UTF-8 strings to `parse_sbom_str`. Any input must yield
/// either an SBOM or a tagged error, never a panic; when it loads, the
/// classifier and diff engine must accept the result too.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(sbom) = sbom_guard::parsers::parse_sbom_str(s) {
            let policy = sbom_guard::compliance::LicensePolicy::default();
            let report = sbom_guard::compliance::ComplianceEvaluator::new(&policy).evaluate(&sbom);
            assert_eq!(report.total(), sbom.component_count());
            assert!(sbom_guard::diff::DiffEngine::new().diff(&sbom, &sbom).is_empty());
        }
    }
});
