//! Validation report formatting

use crate::backup::ValidationReport;

/// Render a validation report with enough context to locate every problem
pub fn format_validation_report(report: &ValidationReport) -> String {
    let mut output = String::new();
    output.push_str(&format!("Backup set: {}\n", report.backup_root.display()));

    if !report.structurally_valid {
        output.push_str("  INVALID: missing manifests subtree or blobs directory\n");
        return output;
    }

    for problem in &report.manifest_problems {
        output.push_str(&format!(
            "  Manifest error: {} ({})\n",
            problem.path.display(),
            problem.reason
        ));
    }

    for digest in &report.missing_blobs {
        output.push_str(&format!("  Missing blob: {}\n", digest));
    }

    if report.hashes_verified {
        for digest in &report.verified_ok {
            output.push_str(&format!("  {} OK\n", digest.to_filename()));
        }
        for mismatch in &report.hash_mismatches {
            output.push_str(&format!(
                "  {} MISMATCH\n    Expected: {}\n    Actual:   {}\n",
                mismatch.digest.to_filename(),
                mismatch.expected,
                mismatch.actual,
            ));
        }
    } else if report.missing_blobs.is_empty() && report.manifest_problems.is_empty() {
        output.push_str("  All blobs present (hashes not verified)\n");
    }

    output.push_str(&format!(
        "  Result: {}\n",
        if report.is_passing() { "PASS" } else { "FAIL" }
    ));

    output
}
