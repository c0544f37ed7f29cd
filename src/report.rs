use crate::cli::Cli;
use crate::csv::{self, WriteMode};
use crate::diff;
use crate::git;
use crate::model::ReportRow;
use anyhow::{bail, Context};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

/// Drive the whole run: list branches, diff each against the base branch,
/// emit the flattened rows.
pub fn exec(cli: &Cli) -> anyhow::Result<()> {
    let repo = cli.repo_path().context("Failed to resolve repository path")?;
    let remote_prefix = format!("{}/", cli.remote);

    let mut branches = git::list_branches(&cli.git, &repo, &cli.remote)
        .context("Failed to list branches")?;

    let Some(base_rev) = branches.remove(&cli.base) else {
        bail!("Base branch {} not found in {}", cli.base, repo.display());
    };
    if cli.remote_only && !cli.base.starts_with(&remote_prefix) {
        bail!(
            "Base branch {} is not a {} branch but --remote-only is set",
            cli.base,
            cli.remote
        );
    }

    let pb = ProgressBar::new(branches.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{pos}/{len}] {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );

    let mut mode = WriteMode::Create;
    for (name, revision) in &branches {
        pb.set_message(name.clone());
        if let Some(reason) = skip_reason(name, revision, &base_rev, &remote_prefix, cli.remote_only)
        {
            eprintln!("{} {name}: {reason}, skipping", style("notice:").cyan().bold());
            pb.inc(1);
            continue;
        }
        if let Some(report) = diff::diff_report(&cli.cloc, &base_rev, revision, &repo) {
            for row in diff::flatten(&report) {
                emit(cli, &row, mode)
                    .with_context(|| format!("Failed to write report row for {name}"))?;
                mode = WriteMode::Append;
            }
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    Ok(())
}

/// Why a branch is left out of the report without diffing it, if it is.
pub fn skip_reason(
    name: &str,
    revision: &str,
    base_rev: &str,
    remote_prefix: &str,
    remote_only: bool,
) -> Option<String> {
    if remote_only && !name.starts_with(remote_prefix) {
        return Some(format!("not under {remote_prefix}"));
    }
    if revision == base_rev {
        return Some("same revision as base".to_string());
    }
    None
}

fn emit(cli: &Cli, row: &ReportRow, mode: WriteMode) -> crate::error::Result<()> {
    match &cli.output {
        Some(path) => csv::write_row(path, &row.fields(), mode),
        None => {
            println!("{}", csv::format_row(&row.fields()));
            Ok(())
        }
    }
}
