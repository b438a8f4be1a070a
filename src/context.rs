//! Session context block assembly.
//!
//! Pure formatting over already-fetched enumeration data: a window summary
//! plus a "Running Servers" section for every server-classified pane, ending
//! with the list of control tools the host can call.

use crate::classify::ServerCatalog;
use crate::tmux::inspect::{Pane, Window};

/// Render the context block for one session.
///
/// A window with no panes reports its main command as `unknown`; a server
/// pane whose window is missing from `windows` falls back to a generated
/// `window-<index>` name.
pub fn build_context(
    session: &str,
    windows: &[Window],
    panes: &[Pane],
    catalog: &ServerCatalog,
) -> String {
    let server_panes: Vec<&Pane> = panes
        .iter()
        .filter(|p| p.session == session && catalog.is_server_process(&p.command))
        .collect();

    let mut context = String::from("## tmux Context\n");
    context.push_str(&format!("**Session:** {session}\n\n"));

    context.push_str("**Windows:**\n");
    for win in windows {
        let command = win
            .panes
            .first()
            .map(|p| p.command.as_str())
            .unwrap_or("unknown");
        context.push_str(&format!("{}. {} - {}\n", win.index, win.name, command));
    }

    if !server_panes.is_empty() {
        context.push_str("\n**Running Servers:**\n");
        for pane in server_panes {
            let win_name = windows
                .iter()
                .find(|w| w.index == pane.window)
                .map(|w| w.name.clone())
                .unwrap_or_else(|| format!("window-{}", pane.window));
            context.push_str(&format!(
                "- Window {} ({}): {} (path: {})\n",
                pane.window, win_name, pane.command, pane.path
            ));
        }
    }

    context.push_str(
        "\n**Available tmux tools:** tmux_read_logs, tmux_restart_server, tmux_send_command, tmux_list\n",
    );

    context
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pane(session: &str, window: u32, pane_idx: u32, command: &str) -> Pane {
        Pane {
            session: session.into(),
            window,
            pane: pane_idx,
            command: command.into(),
            path: "/home/user/app".into(),
            window_name: None,
        }
    }

    fn window(index: u32, name: &str, panes: Vec<Pane>) -> Window {
        Window {
            index,
            name: name.into(),
            panes,
        }
    }

    #[test]
    fn lists_every_window_with_main_pane_command() {
        let windows = vec![
            window(0, "shell", vec![pane("dev", 0, 0, "bash")]),
            window(1, "app", vec![pane("dev", 1, 0, "node"), pane("dev", 1, 1, "vim")]),
        ];
        let out = build_context("dev", &windows, &[], &ServerCatalog::builtin());
        assert!(out.contains("**Session:** dev"));
        assert!(out.contains("0. shell - bash"));
        assert!(out.contains("1. app - node"));
    }

    #[test]
    fn empty_window_reports_unknown_command() {
        let windows = vec![window(3, "ghost", vec![])];
        let out = build_context("dev", &windows, &[], &ServerCatalog::builtin());
        assert!(out.contains("3. ghost - unknown"));
    }

    #[test]
    fn server_section_lists_only_classified_panes_of_the_session() {
        let windows = vec![window(1, "app", vec![])];
        let panes = vec![
            pane("dev", 1, 0, "node"),
            pane("dev", 1, 1, "vim"),
            pane("other", 2, 0, "postgres"),
        ];
        let out = build_context("dev", &windows, &panes, &ServerCatalog::builtin());
        assert!(out.contains("**Running Servers:**"));
        assert!(out.contains("- Window 1 (app): node (path: /home/user/app)"));
        assert!(!out.contains("vim"));
        assert!(!out.contains("postgres"));
    }

    #[test]
    fn server_section_omitted_when_no_servers_run() {
        let out = build_context(
            "dev",
            &[window(0, "shell", vec![])],
            &[pane("dev", 0, 0, "bash")],
            &ServerCatalog::builtin(),
        );
        assert!(!out.contains("Running Servers"));
    }

    #[test]
    fn server_window_name_falls_back_when_window_is_missing() {
        let panes = vec![pane("dev", 7, 0, "cargo")];
        let out = build_context("dev", &[], &panes, &ServerCatalog::builtin());
        assert!(out.contains("- Window 7 (window-7): cargo"));
    }

    #[test]
    fn trailing_line_names_all_four_tools() {
        let out = build_context("dev", &[], &[], &ServerCatalog::builtin());
        assert!(out.contains(
            "**Available tmux tools:** tmux_read_logs, tmux_restart_server, tmux_send_command, tmux_list"
        ));
    }
}
