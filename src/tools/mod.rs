//! Pluggable tool system.
//!
//! Tools are async trait objects the hosting assistant can invoke. Each tool
//! provides its own function definition and an async execute method. Tool
//! failures that concern the end user (bad target, unreachable tmux) are
//! returned as descriptive `Ok` strings so the host can display them
//! verbatim; `Err` is reserved for malformed arguments.

pub mod list;
pub mod read_logs;
pub mod restart_server;
pub mod send_command;

use async_trait::async_trait;
use std::time::Duration;

use crate::classify::ServerCatalog;
use crate::config::Config;
use crate::error::ToolError;
use crate::tmux::inspect;
use crate::types::ToolDefinition;

/// Guidance returned by every session-scoped tool when no session argument
/// was supplied and no current session can be detected.
pub const SESSION_GUIDANCE: &str =
    "Error: Could not determine tmux session. Specify session parameter.";

/// A tool that can be invoked by the hosting assistant.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Unique name matching what the host will call.
    fn name(&self) -> &'static str;

    /// Function definition published to the host.
    fn definition(&self) -> ToolDefinition;

    /// Execute the tool with the given JSON arguments string.
    /// Returns a text result to send back to the host.
    async fn execute(&self, arguments: &str) -> Result<String, ToolError>;
}

/// Registry of available tools.
///
/// The host learns the tool surface from [`ToolRegistry::definitions`] and
/// dispatches calls through [`ToolRegistry::execute`].
pub struct ToolRegistry {
    tools: Vec<Box<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self { tools: Vec::new() }
    }

    /// Register a tool.
    pub fn register(&mut self, tool: impl Tool + 'static) {
        self.tools.push(Box::new(tool));
    }

    /// Get tool definitions for the host.
    pub fn definitions(&self) -> Vec<ToolDefinition> {
        self.tools.iter().map(|t| t.definition()).collect()
    }

    /// Find a tool by name and execute it.
    pub async fn execute(&self, name: &str, arguments: &str) -> Result<String, ToolError> {
        let tool = self
            .tools
            .iter()
            .find(|t| t.name() == name)
            .ok_or_else(|| ToolError::ExecutionFailed(format!("unknown tool: {name}")))?;
        tool.execute(arguments).await
    }

    /// True if no tools are registered.
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Shared settings handed to every tmux tool at construction time.
#[derive(Debug, Clone)]
pub struct MuxToolShared {
    /// Server-process classification (builtin allow-list plus config extras).
    pub catalog: ServerCatalog,
    /// Fallback command for restart when the host supplies none.
    pub restart_command: String,
    /// Delay between interrupt and replacement command.
    pub settle_delay: Duration,
    /// Scrollback lines captured when the host supplies no count.
    pub default_lines: u32,
}

impl MuxToolShared {
    pub fn from_config(config: &Config) -> Self {
        Self {
            catalog: config.server_catalog(),
            restart_command: config.restart.default_command.clone(),
            settle_delay: config.restart.settle_delay(),
            default_lines: config.logs.default_lines,
        }
    }
}

/// Registry preloaded with the four tmux tools.
pub fn default_registry(config: &Config) -> ToolRegistry {
    let shared = MuxToolShared::from_config(config);
    let mut registry = ToolRegistry::new();
    registry.register(read_logs::ReadLogsTool {
        shared: shared.clone(),
    });
    registry.register(restart_server::RestartServerTool {
        shared: shared.clone(),
    });
    registry.register(send_command::SendCommandTool {
        shared: shared.clone(),
    });
    registry.register(list::ListTool { shared });
    registry
}

/// Resolve the session to address: the explicit argument wins, otherwise the
/// session this process is attached to. `None` means neither is available
/// and the caller should return [`SESSION_GUIDANCE`].
pub(crate) async fn resolve_session(explicit: Option<String>) -> Option<String> {
    match explicit {
        Some(session) if !session.trim().is_empty() => Some(session),
        _ => inspect::current_session().await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FunctionDefinition;
    use async_trait::async_trait;

    struct EchoTool;

    #[async_trait]
    impl Tool for EchoTool {
        fn name(&self) -> &'static str {
            "echo"
        }
        fn definition(&self) -> ToolDefinition {
            ToolDefinition {
                tool_type: "function".into(),
                function: FunctionDefinition {
                    name: "echo".into(),
                    description: "echoes arguments back".into(),
                    parameters: serde_json::json!({}),
                },
            }
        }
        async fn execute(&self, arguments: &str) -> Result<String, ToolError> {
            Ok(arguments.to_string())
        }
    }

    #[test]
    fn new_registry_is_empty() {
        assert!(ToolRegistry::new().is_empty());
    }

    #[test]
    fn register_makes_nonempty() {
        let mut r = ToolRegistry::new();
        r.register(EchoTool);
        assert!(!r.is_empty());
    }

    #[tokio::test]
    async fn execute_known_tool_returns_output() {
        let mut r = ToolRegistry::new();
        r.register(EchoTool);
        let out = r.execute("echo", r#"{"x":1}"#).await.unwrap();
        assert_eq!(out, r#"{"x":1}"#);
    }

    #[tokio::test]
    async fn execute_unknown_tool_returns_error() {
        let r = ToolRegistry::new();
        let err = r.execute("nonexistent", "{}").await.unwrap_err();
        assert!(err.to_string().contains("unknown tool"));
    }

    #[test]
    fn default_registry_publishes_all_four_tools() {
        let registry = default_registry(&Config::default());
        let names: Vec<String> = registry
            .definitions()
            .into_iter()
            .map(|d| d.function.name)
            .collect();
        assert_eq!(
            names,
            [
                "tmux_read_logs",
                "tmux_restart_server",
                "tmux_send_command",
                "tmux_list"
            ]
        );
    }

    #[tokio::test]
    async fn explicit_session_wins_over_lookup() {
        let resolved = resolve_session(Some("dev".into())).await;
        assert_eq!(resolved.as_deref(), Some("dev"));
    }
}
