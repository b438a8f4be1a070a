//! Mutating tmux commands: key injection, interrupt, and server restart.
//!
//! Each operation is attempted exactly once; a failure is terminal for that
//! call and surfaces as a [`ToolError`] the tool layer renders into a
//! user-visible string.

use std::time::Duration;
use tokio::time::sleep;
use tracing::debug;

use super::invoke::{ensure_success, run_tmux};
use super::Target;
use crate::error::ToolError;

/// Build `tmux send-keys` argument vector for literal text, optionally
/// followed by Enter.
pub(crate) fn build_send_keys_args(target: &Target, text: &str, enter: bool) -> Vec<String> {
    let mut args = vec![
        "send-keys".to_string(),
        "-t".to_string(),
        target.to_string(),
        text.to_string(),
    ];
    if enter {
        args.push("Enter".to_string());
    }
    args
}

/// Build the argument vector that delivers Ctrl-C to a pane.
pub(crate) fn build_interrupt_args(target: &Target) -> Vec<String> {
    vec![
        "send-keys".to_string(),
        "-t".to_string(),
        target.to_string(),
        "C-c".to_string(),
    ]
}

/// Build the ordered invocation pair restart issues: interrupt first, then
/// the replacement command with Enter. The settle sleep happens between the
/// two; nothing may reorder them.
pub(crate) fn build_restart_sequence(target: &Target, command: &str) -> [Vec<String>; 2] {
    [
        build_interrupt_args(target),
        build_send_keys_args(target, command, true),
    ]
}

async fn run_send(args: &[String], context: &str) -> Result<(), ToolError> {
    let arg_refs: Vec<&str> = args.iter().map(String::as_str).collect();
    let output = run_tmux(&arg_refs).await?;
    ensure_success(output, context)?;
    Ok(())
}

/// Transmit `text` to the pane, optionally pressing Enter afterwards.
pub async fn send_keys(target: &Target, text: &str, enter: bool) -> Result<(), ToolError> {
    run_send(&build_send_keys_args(target, text, enter), "failed to send keys").await
}

/// Send an interrupt (Ctrl-C) to the pane's foreground process.
pub async fn interrupt(target: &Target) -> Result<(), ToolError> {
    run_send(&build_interrupt_args(target), "failed to send interrupt").await
}

/// Interrupt the pane's process, wait for the shell prompt to return, then
/// start `command`. The settle delay gives the interrupted process time to
/// release the terminal; ordering is guaranteed by sequential awaits.
pub async fn restart(target: &Target, command: &str, settle: Duration) -> Result<(), ToolError> {
    let [interrupt_args, start_args] = build_restart_sequence(target, command);
    run_send(&interrupt_args, "failed to send interrupt").await?;
    debug!(pane = %target, ?settle, "interrupt sent; waiting before replacement command");
    sleep(settle).await;
    run_send(&start_args, "failed to send keys").await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target() -> Target {
        Target::new("dev", 1, 0)
    }

    #[test]
    fn send_keys_args_append_enter_when_requested() {
        let args = build_send_keys_args(&target(), "npm run dev", true);
        assert_eq!(args, ["send-keys", "-t", "dev:1.0", "npm run dev", "Enter"]);
    }

    #[test]
    fn send_keys_args_omit_enter_when_disabled() {
        let args = build_send_keys_args(&target(), "ls", false);
        assert_eq!(args, ["send-keys", "-t", "dev:1.0", "ls"]);
        assert!(!args.contains(&"Enter".to_string()));
    }

    #[test]
    fn interrupt_args_send_ctrl_c() {
        let args = build_interrupt_args(&target());
        assert_eq!(args, ["send-keys", "-t", "dev:1.0", "C-c"]);
    }

    #[test]
    fn restart_interrupts_before_replacement_command() {
        let [first, second] = build_restart_sequence(&target(), "npm run dev");
        assert_eq!(first, ["send-keys", "-t", "dev:1.0", "C-c"]);
        assert_eq!(
            second,
            ["send-keys", "-t", "dev:1.0", "npm run dev", "Enter"]
        );
    }

    #[test]
    fn restart_replacement_always_presses_enter() {
        let [_, start] = build_restart_sequence(&target(), "cargo run");
        assert_eq!(start.last().map(String::as_str), Some("Enter"));
    }
}
