use crate::error::Result;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

/// Whether a write replaces the destination or extends it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    Create,
    Append,
}

/// Quote a single field: wrap in double quotes, doubling any embedded
/// quote, only when the field contains a comma, a quote, or a newline.
pub fn quote_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') || field.contains('\r') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Join fields into one CSV line, without a trailing newline.
pub fn format_row(fields: &[String]) -> String {
    fields
        .iter()
        .map(|field| quote_field(field))
        .collect::<Vec<_>>()
        .join(",")
}

/// Write one row to `path` as a full line, truncating or appending per
/// `mode`. Best-effort: no atomicity, the file is opened and closed per
/// call.
pub fn write_row(path: &Path, fields: &[String], mode: WriteMode) -> Result<()> {
    let mut file = match mode {
        WriteMode::Create => OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)?,
        WriteMode::Append => OpenOptions::new().append(true).create(true).open(path)?,
    };
    writeln!(file, "{}", format_row(fields))?;
    Ok(())
}
