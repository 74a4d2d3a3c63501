//! TestWorld pattern for declarative integration test setup.
//!
//! Provides a fluent interface for:
//! - Creating isolated config and data directories
//! - Pointing the CLI at a stub backend
//! - Executing CLI commands with proper context

use anyhow::Result;
use assert_cmd::Command;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::stub::StubServer;

/// Declarative test environment builder.
///
/// # Example
/// ```no_run
/// use blogdeck_testing::{StubServer, TestWorld, fixtures};
///
/// let server = StubServer::start(fixtures::sample_backend()).unwrap();
/// let world = TestWorld::new().with_server(&server);
///
/// let result = world.run(&["list"]).unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    config_path: PathBuf,
    data_dir: PathBuf,
    base_url: Option<String>,
    format: &'static str,
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
        let base_path = temp_dir.path().to_path_buf();
        let data_dir = base_path.join("data");
        std::fs::create_dir_all(&data_dir).expect("Failed to create data dir");

        Self {
            config_path: base_path.join("config").join("config.toml"),
            data_dir,
            temp_dir,
            base_url: None,
            format: "plain",
            env_vars: HashMap::new(),
        }
    }

    /// Path of the isolated config file (may not exist yet).
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Get the temp directory root.
    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Pass `--base-url` for this server to every command.
    pub fn with_server(mut self, server: &StubServer) -> Self {
        self.base_url = Some(server.base_url());
        self
    }

    /// Pass an arbitrary `--base-url` (e.g. an unreachable one).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Render output as JSON instead of plain text.
    pub fn json(mut self) -> Self {
        self.format = "json";
        self
    }

    /// Set an environment variable for CLI execution.
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    /// Write a config file before running commands.
    pub fn with_config(self, toml: &str) -> Self {
        if let Some(parent) = self.config_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create config dir");
        }
        std::fs::write(&self.config_path, toml).expect("Failed to write config");
        self
    }

    /// Configure a CLI command with this test environment's settings.
    ///
    /// The caller must provide the base command (e.g., from `Command::cargo_bin("blogdeck")`).
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.arg("--config")
            .arg(&self.config_path)
            .arg("--format")
            .arg(self.format);

        if let Some(url) = &self.base_url {
            cmd.arg("--base-url").arg(url);
        }

        cmd.current_dir(self.temp_dir.path());
        cmd.env_remove("BLOGDECK_API_URL");
        cmd.env_remove("BLOGDECK_CONFIG");
        cmd.env_remove("RUST_LOG");
        cmd.env("BLOGDECK_DATA_DIR", &self.data_dir);

        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }

        cmd
    }

    /// Execute a command using the project's binary and return the result.
    ///
    /// # Note
    /// This method uses `Command::cargo_bin()` which requires the binary to be
    /// built (which cargo test does automatically for the `blogdeck` package).
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        self.run_with_stdin(args, "")
    }

    /// Execute a command feeding `input` on stdin.
    #[allow(deprecated)]
    pub fn run_with_stdin(&self, args: &[&str], input: &str) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("blogdeck")
            .map_err(|e| anyhow::anyhow!("Failed to find blogdeck binary: {}", e))?;

        self.configure_command(&mut cmd);
        cmd.args(args);
        cmd.write_stdin(input.to_string());

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
