//! Server-process classification.
//!
//! A pane's foreground command is either a long-running service (worth
//! surfacing in summaries and restartable) or a one-shot command. The
//! distinction is a fixed allow-list, optionally extended through config.

/// Built-in names of long-running service processes: interpreters, package
/// managers, web/app servers, databases, containers, and tunnels.
pub const SERVER_PROCESSES: &[&str] = &[
    "bun",
    "node",
    "npm",
    "pnpm",
    "yarn",
    "docker",
    "docker-compose",
    "ngrok",
    "python",
    "python3",
    "uvicorn",
    "gunicorn",
    "flask",
    "django",
    "cargo",
    "rustc",
    "go",
    "ruby",
    "rails",
    "php",
    "java",
    "gradle",
    "mvn",
    "dotnet",
    "nginx",
    "apache",
    "redis-server",
    "postgres",
    "mysql",
    "mongod",
];

/// The resolved set of recognized server-process names.
///
/// Matching is case-sensitive and exact; `Node` or `node-helper` are not
/// servers even though `node` is.
#[derive(Debug, Clone, Default)]
pub struct ServerCatalog {
    extras: Vec<String>,
}

impl ServerCatalog {
    /// Catalog containing only the built-in allow-list.
    pub fn builtin() -> Self {
        Self::default()
    }

    /// Catalog extended with operator-configured process names.
    pub fn with_extras(extras: Vec<String>) -> Self {
        Self { extras }
    }

    /// Whether `command` names a recognized long-running server process.
    pub fn is_server_process(&self, command: &str) -> bool {
        SERVER_PROCESSES.contains(&command) || self.extras.iter().any(|name| name == command)
    }
}
