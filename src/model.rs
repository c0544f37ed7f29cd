use serde::Deserialize;
use std::collections::BTreeMap;

/// Branch name → tip revision, merged across ref namespaces. Sorted, so a
/// run's branch order is deterministic.
pub type BranchMap = BTreeMap<String, String>;

/// Top-level keys in the counter's diff JSON that are bookkeeping, not
/// change categories.
pub const RESERVED_KEYS: [&str; 2] = ["header", "SUM"];

/// Line metrics for one language within one change category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct LangMetrics {
    #[serde(rename = "nFiles", default)]
    pub n_files: u64,
    #[serde(default)]
    pub blank: u64,
    #[serde(default)]
    pub comment: u64,
    #[serde(default)]
    pub code: u64,
}

/// One flattened, output-ready row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub category: String,
    pub language: String,
    pub metrics: LangMetrics,
}

impl ReportRow {
    /// Field order matches the emitted CSV columns.
    pub fn fields(&self) -> Vec<String> {
        vec![
            self.category.clone(),
            self.language.clone(),
            self.metrics.n_files.to_string(),
            self.metrics.blank.to_string(),
            self.metrics.comment.to_string(),
            self.metrics.code.to_string(),
        ]
    }
}
