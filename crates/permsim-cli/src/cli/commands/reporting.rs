use permsim_core::RunReport;

pub(crate) const NO_VIOLATIONS: &str = "No unauthorized grants detected.";

/// Console rendering: run log, injection hints (if any), summary.
pub(crate) fn render_text(report: &RunReport) -> String {
    let mut lines = vec!["=== RUN LOG ===".to_string()];
    lines.extend(report.log_lines());

    if !report.injection_hints.is_empty() {
        lines.push(String::new());
        lines.push("=== INJECTION HINTS ===".to_string());
        for index in &report.injection_hints {
            lines.push(format!("event #{} looks like an injection attempt", index));
        }
    }

    lines.push(String::new());
    lines.push("=== SUMMARY ===".to_string());
    if report.has_violations() {
        lines.push(format!("VIOLATIONS: {}", report.violations.len()));
        lines.extend(report.violations.iter().map(ToString::to_string));
    } else {
        lines.push(NO_VIOLATIONS.to_string());
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
