//! Server restart tool.
//!
//! Composite operation: interrupt the pane's foreground process, wait the
//! configured settle delay for the shell prompt to return, then start the
//! replacement command.

use async_trait::async_trait;
use serde::Deserialize;

use super::{resolve_session, MuxToolShared, Tool, SESSION_GUIDANCE};
use crate::error::ToolError;
use crate::tmux::{control, Target};
use crate::types::{FunctionDefinition, ToolDefinition};

/// Tool that restarts a server running in a tmux pane.
pub struct RestartServerTool {
    pub shared: MuxToolShared,
}

#[derive(Deserialize)]
struct Args {
    session: Option<String>,
    window: u32,
    pane: Option<u32>,
    /// Replacement command; falls back to the configured default.
    command: Option<String>,
}

/// Pick the replacement command: a non-blank request wins, anything else
/// (absent, empty, whitespace) falls back to the configured default.
fn resolve_command(requested: Option<String>, fallback: &str) -> String {
    requested
        .filter(|c| !c.trim().is_empty())
        .unwrap_or_else(|| fallback.to_string())
}

#[async_trait]
impl Tool for RestartServerTool {
    fn name(&self) -> &'static str {
        "tmux_restart_server"
    }

    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            tool_type: "function".into(),
            function: FunctionDefinition {
                name: self.name().into(),
                description: "Restart a server running in a tmux pane by sending Ctrl-C and then the specified command. If no command is specified, the configured default is used."
                    .into(),
                parameters: serde_json::json!({
                    "type": "object",
                    "properties": {
                        "session": {
                            "type": "string",
                            "description": "Tmux session name. Defaults to current session."
                        },
                        "window": {
                            "type": "integer",
                            "description": "Window index."
                        },
                        "pane": {
                            "type": "integer",
                            "description": "Pane index within the window. Defaults to 0."
                        },
                        "command": {
                            "type": "string",
                            "description": "Command to run after stopping the process. Defaults to the configured restart command."
                        }
                    },
                    "required": ["window"]
                }),
            },
        }
    }

    async fn execute(&self, arguments: &str) -> Result<String, ToolError> {
        let args: Args = serde_json::from_str(arguments)
            .map_err(|e| ToolError::InvalidArguments(e.to_string()))?;

        let Some(session) = resolve_session(args.session).await else {
            return Ok(SESSION_GUIDANCE.to_string());
        };
        let target = Target::new(session, args.window, args.pane.unwrap_or(0));
        let command = resolve_command(args.command, &self.shared.restart_command);

        match control::restart(&target, &command, self.shared.settle_delay).await {
            Ok(()) => Ok(format!(
                "Server in {target} restarted with command: {command}"
            )),
            Err(err) => Ok(format!("Error restarting server in {target}: {err}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[tokio::test]
    async fn malformed_arguments_are_rejected() {
        let tool = RestartServerTool {
            shared: MuxToolShared::from_config(&Config::default()),
        };
        let err = tool.execute("not json").await.unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments(_)));
    }

    #[test]
    fn shared_settings_carry_the_configured_fallback() {
        let shared = MuxToolShared::from_config(&Config::default());
        assert_eq!(shared.restart_command, "bun dev");
        assert!(shared.settle_delay > std::time::Duration::ZERO);
    }

    #[test]
    fn blank_commands_fall_back_to_the_default() {
        assert_eq!(resolve_command(None, "bun dev"), "bun dev");
        assert_eq!(resolve_command(Some(String::new()), "bun dev"), "bun dev");
        assert_eq!(resolve_command(Some("   ".into()), "bun dev"), "bun dev");
    }

    #[test]
    fn explicit_command_wins_over_the_default() {
        assert_eq!(
            resolve_command(Some("npm run dev".into()), "bun dev"),
            "npm run dev"
        );
    }
}
