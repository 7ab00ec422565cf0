use std::path::{Path, PathBuf};

/// Relative location of the web app's env file inside the project.
pub const WEB_ENV_PATH: &str = "apps/web/.env";
/// Relative location of the API's env file inside the project.
pub const API_ENV_PATH: &str = "apps/api/.env";

/// Tool configuration loaded from environment variables.
/// Command-line flags override these values in the binaries.
#[derive(Debug, Clone)]
pub struct Config {
    pub project_root: PathBuf,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Self {
        Config {
            project_root: optional_env("INTERVIEWSPARK_ROOT")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(".")),
            rust_log: optional_env("RUST_LOG").unwrap_or_else(|| "warn".to_string()),
        }
    }

    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.project_root = root.into();
        self
    }

    pub fn web_env_path(&self) -> PathBuf {
        self.project_root.join(WEB_ENV_PATH)
    }

    pub fn api_env_path(&self) -> PathBuf {
        self.project_root.join(API_ENV_PATH)
    }

    /// Both env files, in merge order (web first, API second).
    pub fn env_paths(&self) -> [PathBuf; 2] {
        [self.web_env_path(), self.api_env_path()]
    }

    pub fn root(&self) -> &Path {
        &self.project_root
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
