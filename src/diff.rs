use crate::error::Result;
use crate::model::{LangMetrics, ReportRow, RESERVED_KEYS};
use crate::process;
use console::style;
use std::path::Path;

/// Parsed diff document from the line counter: category → language →
/// metrics, in the counter's own key order.
pub type DiffReport = serde_json::Map<String, serde_json::Value>;

/// Run the line counter between two revisions inside `repo`.
///
/// Every failure mode here is recoverable for the run as a whole: a launch
/// failure, a non-zero exit, empty output, or unparseable JSON each print
/// a warning and yield `None`, so the caller can move on to the next
/// branch.
pub fn diff_report(cloc: &str, base_rev: &str, rev: &str, repo: &Path) -> Option<DiffReport> {
    let result = match process::run(cloc, &["--diff", "--json", base_rev, rev], Some(repo)) {
        Ok(result) => result,
        Err(err) => {
            warn(&format!("skipping {base_rev}..{rev}: {err}"));
            return None;
        }
    };
    if !result.success() {
        warn(&format!("{cloc} failed for {base_rev}..{rev}, skipping"));
        return None;
    }
    if result.stdout.trim().is_empty() {
        warn(&format!(
            "{cloc} produced no output for {base_rev}..{rev}, skipping"
        ));
        return None;
    }
    match parse_report(&result.stdout) {
        Ok(report) => Some(report),
        Err(err) => {
            warn(&format!(
                "unparseable {cloc} output for {base_rev}..{rev}: {err}"
            ));
            None
        }
    }
}

/// Parse a diff JSON document into its nested mapping.
pub fn parse_report(stdout: &str) -> Result<DiffReport> {
    Ok(serde_json::from_str(stdout)?)
}

/// Flatten a report into output rows, skipping the reserved bookkeeping
/// keys. Row order follows the document's key order.
pub fn flatten(report: &DiffReport) -> Vec<ReportRow> {
    let mut rows = Vec::new();
    for (category, languages) in report {
        if RESERVED_KEYS.contains(&category.as_str()) {
            continue;
        }
        let Some(languages) = languages.as_object() else {
            continue;
        };
        for (language, metrics) in languages {
            if let Ok(metrics) = serde_json::from_value::<LangMetrics>(metrics.clone()) {
                rows.push(ReportRow {
                    category: category.clone(),
                    language: language.clone(),
                    metrics,
                });
            }
        }
    }
    rows
}

fn warn(msg: &str) {
    eprintln!("{} {msg}", style("warning:").yellow().bold());
}
