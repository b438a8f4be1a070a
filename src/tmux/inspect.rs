//! Read-only tmux queries: availability, session discovery, pane
//! enumeration, and scrollback capture.
//!
//! Failure policy: every enumeration degrades to an empty result instead of
//! propagating infrastructure errors. The tool surface decides whether an
//! empty result deserves a user-visible message. The one exception is
//! [`capture_pane`], whose error the read-logs tool reports verbatim.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use super::invoke::{ensure_success, run_tmux};
use super::Target;
use crate::error::ToolError;

/// Format string handed to `tmux list-panes`; [`parse_pane_line`] is its
/// inverse. Changing one without the other breaks enumeration.
const PANE_FORMAT: &str =
    "#{session_name}:#{window_index}.#{pane_index} #{pane_current_command} #{pane_current_path} #{window_name}";

const WINDOW_FORMAT: &str = "#{window_index}:#{window_name}";

/// One tmux pane as reported by a single enumeration snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pane {
    pub session: String,
    pub window: u32,
    pub pane: u32,
    /// Current foreground command name.
    pub command: String,
    /// Current working directory path.
    pub path: String,
    pub window_name: Option<String>,
}

/// One tmux window with its panes, in the order tmux reports them.
/// The first pane is treated as the window's "main" pane in summaries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Window {
    pub index: u32,
    pub name: String,
    pub panes: Vec<Pane>,
}

/// One tmux session with its windows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub name: String,
    pub windows: Vec<Window>,
}

static PANE_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(.+):(\d+)\.(\d+)\s+(\S+)\s+(\S+)\s*(.*)$").expect("pane pattern must compile")
});

/// Parse one [`PANE_FORMAT`] output line. Malformed lines yield `None` and
/// are dropped by the caller rather than failing the enumeration.
pub(crate) fn parse_pane_line(line: &str) -> Option<Pane> {
    let caps = PANE_LINE.captures(line)?;
    let window = caps[2].parse().ok()?;
    let pane = caps[3].parse().ok()?;
    let window_name = caps[6].trim();
    Some(Pane {
        session: caps[1].to_string(),
        window,
        pane,
        command: caps[4].to_string(),
        path: caps[5].to_string(),
        window_name: if window_name.is_empty() {
            None
        } else {
            Some(window_name.to_string())
        },
    })
}

/// Parse one `index:name` window line; the name may itself contain colons.
pub(crate) fn parse_window_line(line: &str) -> Option<(u32, String)> {
    let (index_str, name) = line.split_once(':')?;
    let index = index_str.parse().ok()?;
    let name = if name.is_empty() {
        format!("window-{index}")
    } else {
        name.to_string()
    };
    Some((index, name))
}

/// Attach to each window exactly the panes whose (session, window index)
/// match it, keeping the pane order tmux reported.
pub(crate) fn assemble_windows(
    session: &str,
    window_entries: Vec<(u32, String)>,
    panes: &[Pane],
) -> Vec<Window> {
    window_entries
        .into_iter()
        .map(|(index, name)| Window {
            index,
            name,
            panes: panes
                .iter()
                .filter(|p| p.session == session && p.window == index)
                .cloned()
                .collect(),
        })
        .collect()
}

/// Whether the tmux binary is installed and answers at all. Never errors.
pub async fn is_tmux_available() -> bool {
    matches!(run_tmux(&["-V"]).await, Ok(out) if out.exit_code == 0)
}

/// Whether this process runs inside a tmux session (`$TMUX` is set).
pub fn in_tmux_session() -> bool {
    std::env::var_os("TMUX").is_some()
}

/// Name of the session this process is attached to, or `None` when it
/// cannot be determined (not inside tmux, or the query fails).
pub async fn current_session() -> Option<String> {
    let output = run_tmux(&["display-message", "-p", "#S"]).await.ok()?;
    if output.exit_code != 0 {
        return None;
    }
    let name = output.stdout.trim();
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}

/// List panes, optionally restricted to one session. Any failure and any
/// malformed output line degrade silently.
pub async fn list_panes(session_filter: Option<&str>) -> Vec<Pane> {
    let output = match session_filter {
        Some(session) => run_tmux(&["list-panes", "-s", "-t", session, "-F", PANE_FORMAT]).await,
        None => run_tmux(&["list-panes", "-a", "-F", PANE_FORMAT]).await,
    };
    let output = match output {
        Ok(out) if out.exit_code == 0 => out,
        Ok(out) => {
            debug!(stderr = %out.stderr.trim(), "list-panes failed; returning no panes");
            return Vec::new();
        }
        Err(err) => {
            debug!(%err, "list-panes invocation failed; returning no panes");
            return Vec::new();
        }
    };
    output
        .stdout
        .lines()
        .filter(|line| !line.is_empty())
        .filter_map(parse_pane_line)
        .collect()
}

/// List the windows of `session`, each carrying the panes that belong to it.
pub async fn list_windows(session: &str) -> Vec<Window> {
    let output = match run_tmux(&["list-windows", "-t", session, "-F", WINDOW_FORMAT]).await {
        Ok(out) if out.exit_code == 0 => out,
        _ => return Vec::new(),
    };
    let panes = list_panes(Some(session)).await;
    let entries = output
        .stdout
        .lines()
        .filter(|line| !line.is_empty())
        .filter_map(parse_window_line)
        .collect();
    assemble_windows(session, entries, &panes)
}

/// List every session with its full window/pane tree. One `list-windows`
/// call per session, issued sequentially.
pub async fn list_sessions() -> Vec<Session> {
    let output = match run_tmux(&["list-sessions", "-F", "#{session_name}"]).await {
        Ok(out) if out.exit_code == 0 => out,
        _ => return Vec::new(),
    };
    let mut sessions = Vec::new();
    for name in output.stdout.lines().filter(|line| !line.is_empty()) {
        let windows = list_windows(name).await;
        sessions.push(Session {
            name: name.to_string(),
            windows,
        });
    }
    sessions
}

/// Capture the last `lines` lines of a pane's scrollback as raw text.
pub async fn capture_pane(target: &Target, lines: u32) -> Result<String, ToolError> {
    let target_str = target.to_string();
    let start = format!("-{lines}");
    let output = run_tmux(&["capture-pane", "-t", &target_str, "-p", "-S", &start]).await?;
    let output = ensure_success(output, "failed to capture pane")?;
    Ok(output.stdout)
}
