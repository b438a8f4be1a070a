//! Child-process plumbing shared by tmux queries and commands.

use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

use crate::error::ToolError;

/// Captured output of one finished tmux invocation.
#[derive(Debug, Clone)]
pub(crate) struct ExecOutput {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

/// Spawn `tmux <args>` and wait for it to finish.
///
/// Each call is its own short-lived child process; the caller suspends until
/// output (or failure) is available.
pub(crate) async fn run_tmux(args: &[&str]) -> Result<ExecOutput, ToolError> {
    debug!(?args, "invoking tmux");
    let mut cmd = Command::new("tmux");
    // A dropped future must not leave a tmux client behind.
    cmd.kill_on_drop(true);
    cmd.args(args).stdout(Stdio::piped()).stderr(Stdio::piped());

    let child = cmd
        .spawn()
        .map_err(|e| ToolError::ExecutionFailed(format!("tmux: {e}")))?;

    let output = child
        .wait_with_output()
        .await
        .map_err(|e| ToolError::ExecutionFailed(format!("tmux: {e}")))?;

    Ok(ExecOutput {
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    })
}

/// Convert non-zero tmux status into a contextual execution error.
pub(crate) fn ensure_success(output: ExecOutput, context: &str) -> Result<ExecOutput, ToolError> {
    if output.exit_code == 0 {
        return Ok(output);
    }

    let mut details = if output.stderr.trim().is_empty() {
        output.stdout.trim().to_string()
    } else {
        output.stderr.trim().to_string()
    };
    if details.is_empty() {
        details = format!("tmux exited with {}", output.exit_code);
    }

    Err(ToolError::ExecutionFailed(format!("{context}: {details}")))
}
