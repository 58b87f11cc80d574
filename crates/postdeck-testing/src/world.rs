//! TestWorld pattern for declarative CLI test setup.
//!
//! Provides a fluent interface for:
//! - Creating isolated config and log locations
//! - Writing config files
//! - Executing CLI commands with proper context

use anyhow::Result;
use assert_cmd::Command;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Proxy settings that would divert requests away from a local `TestServer`
const PROXY_VARS: [&str; 6] = [
    "HTTP_PROXY",
    "http_proxy",
    "HTTPS_PROXY",
    "https_proxy",
    "ALL_PROXY",
    "all_proxy",
];

/// Declarative test environment builder.
///
/// # Example
/// ```no_run
/// use postdeck_testing::{TestServer, TestWorld};
///
/// let server = TestServer::json("[]").unwrap();
/// let world = TestWorld::new();
///
/// let result = world.run(&["--endpoint", &server.url("/posts"), "list"]).unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    config_path: PathBuf,
    log_path: PathBuf,
    env_vars: HashMap<String, String>,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// Create a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("config.toml");
        let log_path = temp_dir.path().join("postdeck.log");

        Self {
            temp_dir,
            config_path,
            log_path,
            env_vars: HashMap::new(),
        }
    }

    /// Get the log file path passed via `--log-file`.
    pub fn log_path(&self) -> &Path {
        &self.log_path
    }

    /// Write the config file used by every command in this world.
    pub fn with_config(self, contents: &str) -> Self {
        std::fs::write(&self.config_path, contents).expect("Failed to write config");
        self
    }

    /// Set an environment variable for command execution.
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    /// Configure a CLI command with this test environment's settings.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.arg("--config")
            .arg(&self.config_path)
            .arg("--log-file")
            .arg(&self.log_path);

        cmd.current_dir(self.temp_dir.path());
        cmd.env_remove("POSTDECK_ENDPOINT");
        cmd.env_remove("RUST_LOG");
        for proxy in PROXY_VARS {
            cmd.env_remove(proxy);
        }

        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }

        cmd
    }

    /// Execute a CLI command in this world.
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("postdeck")
            .map_err(|e| anyhow::anyhow!("Failed to find postdeck binary: {}", e))?;

        self.configure_command(&mut cmd);
        cmd.args(args);

        let output = cmd.output()?;

        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

/// Result of a CLI command execution.
#[derive(Debug)]
pub struct CliResult {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    /// Check if the command succeeded.
    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// Parse stdout as JSON.
    pub fn json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::from_str(&self.stdout)?)
    }

    /// Get stdout as a string.
    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    /// Get stderr as a string.
    pub fn stderr(&self) -> &str {
        &self.stderr
    }
}
