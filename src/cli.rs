//! CLI argument parsing via clap.
//!
//! The binary is a manual driver for the same tool surface the hosting
//! assistant calls: each subcommand maps onto one tool invocation.

use clap::{Parser, Subcommand, ValueEnum};
use serde_json::{json, Value};

/// Observe and control tmux panes the way the hosting assistant does.
#[derive(Debug, Parser)]
#[command(name = "muxpilot", version)]
pub struct Args {
    /// Path to config file (default: ./muxpilot.toml).
    #[arg(short = 'c', long = "config")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Listing scope for the `list` subcommand.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ScopeArg {
    #[default]
    Current,
    All,
}

impl ScopeArg {
    fn as_str(self) -> &'static str {
        match self {
            Self::Current => "current",
            Self::All => "all",
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List tmux sessions, windows, and panes.
    List {
        /// Scope: current session only, or all sessions.
        #[arg(long, value_enum, default_value_t = ScopeArg::Current)]
        scope: ScopeArg,
        /// Only show panes running recognized server processes.
        #[arg(long)]
        servers_only: bool,
    },
    /// Read the last N lines of a pane, with error highlighting.
    ReadLogs {
        /// Session name; defaults to the current session.
        #[arg(long)]
        session: Option<String>,
        /// Window index.
        #[arg(long)]
        window: u32,
        /// Pane index within the window; defaults to 0.
        #[arg(long)]
        pane: Option<u32>,
        /// Number of lines to capture.
        #[arg(long)]
        lines: Option<u32>,
    },
    /// Interrupt a pane's process and start a replacement command.
    Restart {
        /// Session name; defaults to the current session.
        #[arg(long)]
        session: Option<String>,
        /// Window index.
        #[arg(long)]
        window: u32,
        /// Pane index within the window; defaults to 0.
        #[arg(long)]
        pane: Option<u32>,
        /// Replacement command; defaults to the configured restart command.
        command: Option<String>,
    },
    /// Type a command into a pane.
    Send {
        /// Session name; defaults to the current session.
        #[arg(long)]
        session: Option<String>,
        /// Window index.
        #[arg(long)]
        window: u32,
        /// Pane index within the window; defaults to 0.
        #[arg(long)]
        pane: Option<u32>,
        /// Command text to type.
        command: String,
        /// Type the text without pressing Enter.
        #[arg(long)]
        no_enter: bool,
    },
    /// Print the session context block injected on lifecycle events.
    Context,
}

impl Command {
    /// Map a subcommand onto a (tool name, JSON arguments) pair.
    /// `Context` is handled outside the tool surface and maps to `None`.
    pub fn into_tool_call(self) -> Option<(&'static str, Value)> {
        match self {
            Self::List {
                scope,
                servers_only,
            } => Some((
                "tmux_list",
                json!({ "scope": scope.as_str(), "servers_only": servers_only }),
            )),
            Self::ReadLogs {
                session,
                window,
                pane,
                lines,
            } => Some((
                "tmux_read_logs",
                prune_nulls(json!({
                    "session": session,
                    "window": window,
                    "pane": pane,
                    "lines": lines,
                })),
            )),
            Self::Restart {
                session,
                window,
                pane,
                command,
            } => Some((
                "tmux_restart_server",
                prune_nulls(json!({
                    "session": session,
                    "window": window,
                    "pane": pane,
                    "command": command,
                })),
            )),
            Self::Send {
                session,
                window,
                pane,
                command,
                no_enter,
            } => Some((
                "tmux_send_command",
                prune_nulls(json!({
                    "session": session,
                    "window": window,
                    "pane": pane,
                    "command": command,
                    "enter": !no_enter,
                })),
            )),
            Self::Context => None,
        }
    }
}

/// Drop null members so tool-side serde defaults apply.
fn prune_nulls(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            Value::Object(map.into_iter().filter(|(_, v)| !v.is_null()).collect())
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn list_defaults_to_current_scope() {
        let args = Args::parse_from(["muxpilot", "list"]);
        let (name, payload) = args.command.into_tool_call().expect("tool call");
        assert_eq!(name, "tmux_list");
        assert_eq!(payload["scope"], "current");
        assert_eq!(payload["servers_only"], false);
    }

    #[test]
    fn read_logs_omits_unset_optionals() {
        let args = Args::parse_from(["muxpilot", "read-logs", "--window", "2"]);
        let (name, payload) = args.command.into_tool_call().expect("tool call");
        assert_eq!(name, "tmux_read_logs");
        assert_eq!(payload["window"], 2);
        assert!(payload.get("session").is_none());
        assert!(payload.get("lines").is_none());
    }

    #[test]
    fn send_maps_no_enter_to_enter_false() {
        let args = Args::parse_from([
            "muxpilot", "send", "--window", "1", "--pane", "1", "ls", "--no-enter",
        ]);
        let (name, payload) = args.command.into_tool_call().expect("tool call");
        assert_eq!(name, "tmux_send_command");
        assert_eq!(payload["command"], "ls");
        assert_eq!(payload["enter"], false);
        assert_eq!(payload["pane"], 1);
    }

    #[test]
    fn restart_carries_optional_command() {
        let args = Args::parse_from(["muxpilot", "restart", "--window", "3", "npm run dev"]);
        let (_, payload) = args.command.into_tool_call().expect("tool call");
        assert_eq!(payload["command"], "npm run dev");
    }

    #[test]
    fn context_has_no_tool_mapping() {
        let args = Args::parse_from(["muxpilot", "context"]);
        assert!(args.command.into_tool_call().is_none());
    }
}
