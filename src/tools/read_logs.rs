//! Pane log reading tool.
//!
//! Captures the tail of a pane's scrollback and annotates error-looking
//! lines so the model can triage server output quickly.

use async_trait::async_trait;
use serde::Deserialize;

use super::{resolve_session, MuxToolShared, Tool, SESSION_GUIDANCE};
use crate::annotate::{count_error_lines, highlight_errors};
use crate::error::ToolError;
use crate::tmux::{inspect, Target};
use crate::types::{FunctionDefinition, ToolDefinition};

/// Tool that reads the last N lines of a tmux pane.
pub struct ReadLogsTool {
    pub shared: MuxToolShared,
}

#[derive(Deserialize)]
struct Args {
    /// Session name; defaults to the current session.
    session: Option<String>,
    /// Window index.
    window: u32,
    /// Pane index within the window; defaults to 0.
    pane: Option<u32>,
    /// Number of scrollback lines to capture.
    lines: Option<u32>,
}

/// Pick the capture depth: zero is as meaningless as absent (the schema
/// declares a minimum of 1), so both take the configured default.
fn resolve_lines(requested: Option<u32>, default: u32) -> u32 {
    match requested {
        Some(lines) if lines > 0 => lines,
        _ => default,
    }
}

/// Assemble the report: header with target, requested line count, and the
/// flagged-error count (stated even when zero), then the annotated capture.
fn format_report(target: &Target, lines: u32, annotated: &str) -> String {
    let error_count = count_error_lines(annotated);
    let mut header = format!("=== Logs from {target} (last {lines} lines) ===\n");
    header.push_str(&format!("Found {error_count} potential error(s)\n"));
    header.push_str("---\n");
    header + annotated
}

#[async_trait]
impl Tool for ReadLogsTool {
    fn name(&self) -> &'static str {
        "tmux_read_logs"
    }

    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            tool_type: "function".into(),
            function: FunctionDefinition {
                name: self.name().into(),
                description: "Read the last N lines of output from a tmux pane. Useful for checking server logs, errors, and output. Error patterns are automatically highlighted."
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
                        "lines": {
                            "type": "integer",
                            "minimum": 1,
                            "description": "Number of lines to capture. Defaults to 50."
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
        let lines = resolve_lines(args.lines, self.shared.default_lines);

        match inspect::capture_pane(&target, lines).await {
            Ok(raw) => {
                let annotated = highlight_errors(&raw);
                Ok(format_report(&target, lines, &annotated))
            }
            Err(err) => Ok(format!("Error reading logs from {target}: {err}")),
        }
    }
}
