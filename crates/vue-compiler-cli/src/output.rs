//! Output formatting.

use crate::cli::OutputFormat;
use crate::orchestrator::{ElementReport, FileReport, RunSummary};
use std::path::Path;
use vue_diagnostics::Diagnostic;

/// Output formatter.
pub struct OutputFormatter {
    format: OutputFormat,
}

impl OutputFormatter {
    /// Create a new output formatter.
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Render the report for one file.
    pub fn format_file(&self, report: &FileReport) -> Vec<String> {
        let template = match &report.result {
            Ok(template) => template,
            // Load failures are printed by the caller through miette.
            Err(_) => return Vec::new(),
        };
        match self.format {
            OutputFormat::Human => {
                let mut lines = vec![format!("\x1b[1m{}\x1b[0m", report.path.display())];
                lines.extend(template.elements.iter().map(format_element_human));
                lines.extend(
                    template
                        .diagnostics
                        .iter()
                        .map(|d| format_diagnostic_human(&report.path, d)),
                );
                lines
            }
            OutputFormat::Json => {
                let mut lines: Vec<String> = template
                    .elements
                    .iter()
                    .map(|e| format_element_json(&report.path, e))
                    .collect();
                lines.extend(
                    template
                        .diagnostics
                        .iter()
                        .map(|d| format_diagnostic_json(&report.path, d)),
                );
                lines
            }
        }
    }

    /// Render the summary.
    pub fn format_summary(&self, summary: &RunSummary) -> String {
        match self.format {
            OutputFormat::Human => format_summary_human(summary),
            OutputFormat::Json => serde_json::json!({
                "type": "summary",
                "files": summary.file_count,
                "errors": summary.error_count,
                "warnings": summary.warning_count,
                "duration_ms": summary.duration_ms
            })
            .to_string(),
        }
    }
}

// Human format

fn format_element_human(element: &ElementReport) -> String {
    let indent = "  ".repeat(element.depth + 1);
    let condition = element
        .condition
        .as_ref()
        .map(|c| format!(" [{c}]"))
        .unwrap_or_default();
    let hoisted = if element.static_root { " (static)" } else { "" };
    let data = element.data.as_deref().unwrap_or("-");
    format!("{indent}<{}>{condition}{hoisted} {data}", element.tag)
}

fn format_diagnostic_human(file: &Path, diagnostic: &Diagnostic) -> String {
    format!(
        "{}: \x1b[33mwarning\x1b[0m[{}]: {}",
        file.display(),
        diagnostic.code,
        diagnostic
    )
}

fn format_summary_human(summary: &RunSummary) -> String {
    let mut out = String::from("\n");
    if summary.error_count == 0 && summary.warning_count == 0 {
        out.push_str(&format!(
            "\x1b[32m✓\x1b[0m Compiled {} file{} ({}ms)",
            summary.file_count,
            plural(summary.file_count),
            summary.duration_ms
        ));
        return out;
    }
    if summary.error_count > 0 {
        out.push_str(&format!(
            "\x1b[31m✗\x1b[0m {} file{} failed to load\n",
            summary.error_count,
            plural(summary.error_count)
        ));
    }
    if summary.warning_count > 0 {
        out.push_str(&format!(
            "\x1b[33m⚠\x1b[0m Found {} warning{}\n",
            summary.warning_count,
            plural(summary.warning_count)
        ));
    }
    out.push_str(&format!("Time: {}ms", summary.duration_ms));
    out
}

fn plural(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

// JSON format

fn format_element_json(file: &Path, element: &ElementReport) -> String {
    serde_json::json!({
        "type": "element",
        "file": file.to_string_lossy(),
        "tag": element.tag,
        "depth": element.depth,
        "condition": element.condition,
        "data": element.data,
        "staticRoot": element.static_root
    })
    .to_string()
}

fn format_diagnostic_json(file: &Path, diagnostic: &Diagnostic) -> String {
    serde_json::json!({
        "type": "warning",
        "file": file.to_string_lossy(),
        "code": diagnostic.code.as_str(),
        "message": diagnostic.message,
        "tag": diagnostic.tag.as_deref(),
        "attr": diagnostic.attr.as_deref()
    })
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orchestrator::TemplateReport;
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;
    use vue_diagnostics::DiagnosticCode;

    fn report() -> FileReport {
        FileReport {
            path: PathBuf::from("a.json"),
            result: Ok(TemplateReport {
                elements: vec![ElementReport {
                    tag: "div".into(),
                    depth: 0,
                    condition: Some("ok".into()),
                    data: Some("{staticClass:\"a\"}".into()),
                    static_root: false,
                }],
                diagnostics: vec![Diagnostic::warning("bad", DiagnosticCode::InvalidVFor).with_tag("li")],
            }),
        }
    }

    #[test]
    fn test_human_element_line() {
        let lines = OutputFormatter::new(OutputFormat::Human).format_file(&report());
        assert_eq!(lines[1], "  <div> [ok] {staticClass:\"a\"}");
        assert!(lines[2].ends_with("[invalid-v-for]: <li>: bad"));
    }

    #[test]
    fn test_json_lines() {
        let lines = OutputFormatter::new(OutputFormat::Json).format_file(&report());
        let element: serde_json::Value = serde_json::from_str(&lines[0]).unwrap();
        assert_eq!(element["tag"], "div");
        assert_eq!(element["condition"], "ok");
        let warning: serde_json::Value = serde_json::from_str(&lines[1]).unwrap();
        assert_eq!(warning["code"], "invalid-v-for");
        assert_eq!(warning["tag"], "li");
    }

    #[test]
    fn test_summary_json() {
        let summary = RunSummary {
            file_count: 2,
            warning_count: 1,
            ..RunSummary::default()
        };
        let json: serde_json::Value =
            serde_json::from_str(&OutputFormatter::new(OutputFormat::Json).format_summary(&summary))
                .unwrap();
        assert_eq!(json["files"], 2);
        assert_eq!(json["warnings"], 1);
    }
}
