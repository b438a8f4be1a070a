//! Session/window/pane discovery tool.
//!
//! Renders the enumeration tree as indented text the model can use to pick
//! targets for the other tmux tools.

use async_trait::async_trait;
use serde::Deserialize;

use super::{MuxToolShared, Tool};
use crate::classify::ServerCatalog;
use crate::error::ToolError;
use crate::tmux::inspect::{self, Session, Window};
use crate::types::{FunctionDefinition, ToolDefinition};

/// Guidance returned for scope=current when not inside a tmux session.
const NOT_IN_SESSION: &str = "Not in a tmux session. Use scope='all' to list all sessions.";

/// Tool that lists tmux sessions, windows, and panes.
pub struct ListTool {
    pub shared: MuxToolShared,
}

#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
enum Scope {
    #[default]
    Current,
    All,
}

#[derive(Deserialize)]
struct Args {
    /// 'current' for the attached session only, 'all' for every session.
    #[serde(default)]
    scope: Scope,
    /// Only show panes running recognized server processes.
    #[serde(default)]
    servers_only: bool,
}

fn server_tag(catalog: &ServerCatalog, command: &str) -> &'static str {
    if catalog.is_server_process(command) {
        " [SERVER]"
    } else {
        ""
    }
}

/// Render the attached session's windows and panes.
fn render_current(
    session: &str,
    windows: &[Window],
    servers_only: bool,
    catalog: &ServerCatalog,
) -> String {
    let mut output = format!("## Session: {session}\n\n");
    for win in windows {
        output.push_str(&format!("### Window {}: {}\n", win.index, win.name));
        for pane in &win.panes {
            if servers_only && !catalog.is_server_process(&pane.command) {
                continue;
            }
            let tag = server_tag(catalog, &pane.command);
            output.push_str(&format!("  - Pane {}: {}{}\n", pane.pane, pane.command, tag));
            output.push_str(&format!("    Path: {}\n", pane.path));
        }
    }
    output
}

/// Render every session, marking whichever matches the current one.
fn render_all(
    sessions: &[Session],
    current: Option<&str>,
    servers_only: bool,
    catalog: &ServerCatalog,
) -> String {
    let mut output = String::from("## All tmux sessions\n\n");
    for session in sessions {
        let marker = if current == Some(session.name.as_str()) {
            " (current)"
        } else {
            ""
        };
        output.push_str(&format!("### Session: {}{}\n", session.name, marker));
        for win in &session.windows {
            output.push_str(&format!("  Window {}: {}\n", win.index, win.name));
            for pane in &win.panes {
                if servers_only && !catalog.is_server_process(&pane.command) {
                    continue;
                }
                let tag = server_tag(catalog, &pane.command);
                output.push_str(&format!(
                    "    - Pane {}: {}{}\n",
                    pane.pane, pane.command, tag
                ));
            }
        }
        output.push('\n');
    }
    output
}

#[async_trait]
impl Tool for ListTool {
    fn name(&self) -> &'static str {
        "tmux_list"
    }

    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            tool_type: "function".into(),
            function: FunctionDefinition {
                name: self.name().into(),
                description: "List tmux sessions, windows, and panes. Useful for discovering available targets for other tmux commands."
                    .into(),
                parameters: serde_json::json!({
                    "type": "object",
                    "properties": {
                        "scope": {
                            "type": "string",
                            "enum": ["current", "all"],
                            "description": "'current' for current session only, 'all' for all sessions. Defaults to 'current'."
                        },
                        "servers_only": {
                            "type": "boolean",
                            "description": "Only show panes running server processes (bun, node, docker, etc.)."
                        }
                    }
                }),
            },
        }
    }

    async fn execute(&self, arguments: &str) -> Result<String, ToolError> {
        let args: Args = serde_json::from_str(arguments)
            .map_err(|e| ToolError::InvalidArguments(e.to_string()))?;

        let current = inspect::current_session().await;

        match args.scope {
            Scope::Current => {
                let Some(session) = current else {
                    return Ok(NOT_IN_SESSION.to_string());
                };
                let windows = inspect::list_windows(&session).await;
                Ok(render_current(
                    &session,
                    &windows,
                    args.servers_only,
                    &self.shared.catalog,
                ))
            }
            Scope::All => {
                let sessions = inspect::list_sessions().await;
                Ok(render_all(
                    &sessions,
                    current.as_deref(),
                    args.servers_only,
                    &self.shared.catalog,
                ))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tmux::inspect::Pane;

    fn pane(window: u32, pane_idx: u32, command: &str) -> Pane {
        Pane {
            session: "dev".into(),
            window,
            pane: pane_idx,
            command: command.into(),
            path: "/srv/app".into(),
            window_name: None,
        }
    }

    fn windows() -> Vec<Window> {
        vec![
            Window {
                index: 0,
                name: "shell".into(),
                panes: vec![pane(0, 0, "bash")],
            },
            Window {
                index: 1,
                name: "app".into(),
                panes: vec![pane(1, 0, "node"), pane(1, 1, "vim")],
            },
        ]
    }

    #[test]
    fn current_render_tags_servers() {
        let out = render_current("dev", &windows(), false, &ServerCatalog::builtin());
        assert!(out.starts_with("## Session: dev\n"));
        assert!(out.contains("### Window 1: app"));
        assert!(out.contains("  - Pane 0: node [SERVER]\n"));
        assert!(out.contains("  - Pane 1: vim\n"));
        assert!(out.contains("    Path: /srv/app"));
    }

    #[test]
    fn servers_only_filters_non_server_panes() {
        let out = render_current("dev", &windows(), true, &ServerCatalog::builtin());
        assert!(out.contains("node [SERVER]"));
        assert!(!out.contains("bash"));
        assert!(!out.contains("vim"));
    }

    #[test]
    fn servers_only_renders_zero_panes_when_none_qualify() {
        let windows = vec![Window {
            index: 0,
            name: "shell".into(),
            panes: vec![pane(0, 0, "bash")],
        }];
        let out = render_current("dev", &windows, true, &ServerCatalog::builtin());
        assert!(out.contains("### Window 0: shell"));
        assert!(!out.contains("- Pane"));
    }

    #[test]
    fn all_render_marks_current_session() {
        let sessions = vec![
            Session {
                name: "dev".into(),
                windows: windows(),
            },
            Session {
                name: "scratch".into(),
                windows: vec![],
            },
        ];
        let out = render_all(&sessions, Some("dev"), false, &ServerCatalog::builtin());
        assert!(out.contains("### Session: dev (current)\n"));
        assert!(out.contains("### Session: scratch\n"));
        assert!(!out.contains("scratch (current)"));
    }

    #[test]
    fn scope_defaults_to_current() {
        let args: Args = serde_json::from_str("{}").expect("parse");
        assert_eq!(args.scope, Scope::Current);
        assert!(!args.servers_only);
    }

    #[test]
    fn unknown_scope_is_rejected() {
        let parsed: Result<Args, _> = serde_json::from_str("{\"scope\": \"everything\"}");
        assert!(parsed.is_err());
    }
}
