use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "branchloc")]
#[command(about = "Per-branch line-count diff reports for git repositories")]
#[command(version)]
pub struct Cli {
    #[arg(long, help = "Path to git repository (defaults to current directory)")]
    pub repo: Option<PathBuf>,

    #[arg(
        long,
        default_value = "origin/master",
        help = "Base branch every other branch is diffed against"
    )]
    pub base: String,

    #[arg(long, help = "Only report remote-tracking branches")]
    pub remote_only: bool,

    #[arg(
        long,
        default_value = "origin",
        help = "Remote whose branches count as remote-tracking"
    )]
    pub remote: String,

    #[arg(long, default_value = "git", help = "Version-control client binary")]
    pub git: String,

    #[arg(long, default_value = "cloc", help = "Line-counting utility binary")]
    pub cloc: String,

    #[arg(long, help = "Write rows to this CSV file instead of stdout")]
    pub output: Option<PathBuf>,
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn execute(self) -> Result<()> {
        crate::report::exec(&self)
    }

    /// Repository to operate on: `--repo` when given, else the current
    /// directory.
    pub fn repo_path(&self) -> std::io::Result<PathBuf> {
        match &self.repo {
            Some(path) => Ok(path.clone()),
            None => std::env::current_dir(),
        }
    }
}
