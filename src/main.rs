//! CLI entry point for muxpilot.

mod cli;

use clap::Parser;
use muxpilot::build_info;
use muxpilot::config::load_config;
use muxpilot::hooks::{LifecycleHooks, SessionEvent};
use muxpilot::tmux::inspect;
use muxpilot::tools::default_registry;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = cli::Args::parse();
    debug!("{}", build_info::startup_metadata_line());

    let config = match load_config(args.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };

    let Some((tool_name, payload)) = args.command.into_tool_call() else {
        // `context` previews the block the lifecycle hooks would inject.
        let hooks = LifecycleHooks::new(config.server_catalog());
        match hooks.on_session_event(SessionEvent::Created).await {
            Some(block) => println!("{block}"),
            None => println!("No tmux context available (not inside a tmux session)."),
        }
        return;
    };

    if !inspect::is_tmux_available().await {
        eprintln!("error: tmux binary not found in PATH");
        std::process::exit(1);
    }

    let registry = default_registry(&config);
    match registry.execute(tool_name, &payload.to_string()).await {
        Ok(text) => println!("{text}"),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}
