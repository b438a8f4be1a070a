//! Thin wrappers around the tmux command-line interface.
//!
//! Everything tmux-related goes through one child-process invocation per
//! operation; nothing is cached between calls. [`inspect`] holds the
//! read-only queries, [`control`] the mutating commands.

pub mod control;
pub mod inspect;
pub(crate) mod invoke;

use std::fmt;

/// Address of a single pane: `session:window.pane` in tmux target syntax.
///
/// Built per call from host-supplied or defaulted values, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub session: String,
    pub window: u32,
    pub pane: u32,
}

impl Target {
    pub fn new(session: impl Into<String>, window: u32, pane: u32) -> Self {
        Self {
            session: session.into(),
            window,
            pane,
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}.{}", self.session, self.window, self.pane)
    }
}
