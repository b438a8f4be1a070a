//! Arbitrary keystroke injection tool.

use async_trait::async_trait;
use serde::Deserialize;

use super::{resolve_session, MuxToolShared, Tool, SESSION_GUIDANCE};
use crate::error::ToolError;
use crate::tmux::{control, Target};
use crate::types::{FunctionDefinition, ToolDefinition};

/// Tool that types a command into a tmux pane.
pub struct SendCommandTool {
    pub shared: MuxToolShared,
}

#[derive(Deserialize)]
struct Args {
    session: Option<String>,
    window: u32,
    pane: Option<u32>,
    /// Text to send to the pane.
    command: String,
    /// Whether to press Enter afterwards; defaults to true.
    enter: Option<bool>,
}

#[async_trait]
impl Tool for SendCommandTool {
    fn name(&self) -> &'static str {
        "tmux_send_command"
    }

    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            tool_type: "function".into(),
            function: FunctionDefinition {
                name: self.name().into(),
                description:
                    "Send a command to a tmux pane. The command will be typed and executed with Enter unless enter=false."
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
                            "description": "Command to send to the pane."
                        },
                        "enter": {
                            "type": "boolean",
                            "description": "Whether to press Enter after the command. Defaults to true."
                        }
                    },
                    "required": ["window", "command"]
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
        let enter = args.enter.unwrap_or(true);

        match control::send_keys(&target, &args.command, enter).await {
            Ok(()) => Ok(format!("Sent command to {target}: {}", args.command)),
            Err(err) => Ok(format!("Error sending command to {target}: {err}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[tokio::test]
    async fn missing_command_is_an_argument_error() {
        let tool = SendCommandTool {
            shared: MuxToolShared::from_config(&Config::default()),
        };
        let err = tool.execute("{\"window\": 1}").await.unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments(_)));
    }
}
