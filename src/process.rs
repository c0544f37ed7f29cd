use crate::error::{BranchlocError, Result};
use console::style;
use std::path::Path;
use std::process::{Command, Stdio};

/// Captured outcome of one external tool invocation.
#[derive(Debug, Clone)]
pub struct ProcessResult {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

impl ProcessResult {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Run `program` with `args`, blocking until it exits.
///
/// Both output streams are captured, never inherited. A non-zero exit is
/// reported as a warning and the result still returned so callers can
/// inspect the exit code; only a failure to launch the process at all is
/// an `Err`. There is no timeout: a hung child hangs the run.
pub fn run(program: &str, args: &[&str], cwd: Option<&Path>) -> Result<ProcessResult> {
    let mut cmd = Command::new(program);
    cmd.args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    if let Some(dir) = cwd {
        cmd.current_dir(dir);
    }

    let output = cmd.output().map_err(|source| BranchlocError::Launch {
        program: program.to_string(),
        source,
    })?;

    let result = ProcessResult {
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        // Killed-by-signal has no code; fold it into a non-zero value.
        exit_code: output.status.code().unwrap_or(-1),
    };

    if !result.success() {
        eprintln!(
            "{} {} exited with status {}",
            style("warning:").yellow().bold(),
            program,
            result.exit_code
        );
    }

    Ok(result)
}
