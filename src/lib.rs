//! Muxpilot — tmux observation and control tools for an AI coding assistant.
//!
//! A thin shim over the tmux command-line interface: read pane output with
//! error highlighting, restart detected server processes, send keystrokes,
//! and enumerate sessions/windows/panes. Every operation is one awaited tmux
//! child-process call plus light parsing and formatting; nothing is cached
//! or persisted between calls.
//!
//! # Quick start
//!
//! ```no_run
//! use muxpilot::config::load_config;
//! use muxpilot::tools::default_registry;
//!
//! # async fn example() {
//! let config = load_config(None).unwrap();
//! let registry = default_registry(&config);
//! let report = registry
//!     .execute("tmux_list", r#"{"scope": "all"}"#)
//!     .await
//!     .unwrap();
//! println!("{report}");
//! # }
//! ```

pub mod annotate;
pub mod build_info;
pub mod classify;
pub mod config;
pub mod context;
pub mod error;
pub mod hooks;
pub mod tmux;
pub mod tools;
pub mod types;
