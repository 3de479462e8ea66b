//! TestWorld pattern for declarative integration test setup.
//!
//! Each world owns a temp directory holding the folio data dir and any input
//! files (images) a test needs to hand to the CLI.

use anyhow::Result;
use assert_cmd::Command;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::fixtures;

/// Declarative test environment builder.
///
/// # Example
/// ```no_run
/// use folio_testing::TestWorld;
///
/// let world = TestWorld::new().with_style("minimal", "#111827", "#6b7280");
///
/// let result = world.run(&["open", "/portfolio/home"]).unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    data_dir: PathBuf,
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
        let data_dir = temp_dir.path().join(".folio");
        std::fs::create_dir_all(&data_dir).expect("Failed to create data dir");

        Self {
            temp_dir,
            data_dir,
            env_vars: HashMap::new(),
        }
    }

    /// Get the data directory path (.folio).
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Directory holding one file per stored key.
    pub fn storage_dir(&self) -> PathBuf {
        folio_core::storage_dir(&self.data_dir)
    }

    /// Get the temp directory root.
    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Set an environment variable for CLI execution.
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    /// Seed a raw (already JSON-encoded) value for `key`.
    pub fn with_raw_value(self, key: &str, raw: &str) -> Self {
        fixtures::write_raw_value(&self.storage_dir(), key, raw)
            .expect("Failed to seed storage value");
        self
    }

    /// Seed a finished style and color choice.
    pub fn with_style(self, style: &str, primary: &str, secondary: &str) -> Self {
        self.with_raw_value(folio_types::keys::PORTFOLIO_STYLE, &json_string(style))
            .with_raw_value(folio_types::keys::PRIMARY_COLOR, &json_string(primary))
            .with_raw_value(folio_types::keys::SECONDARY_COLOR, &json_string(secondary))
    }

    /// Write `config.toml` into the data dir.
    pub fn with_config(self, toml: &str) -> Self {
        std::fs::write(folio_core::config_path(&self.data_dir), toml)
            .expect("Failed to write config");
        self
    }

    /// Raw stored value for `key`, if any.
    pub fn raw_value(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.storage_dir().join(key)).ok()
    }

    /// Stored value for `key` parsed as JSON.
    pub fn stored_json(&self, key: &str) -> Option<serde_json::Value> {
        self.raw_value(key)
            .and_then(|raw| serde_json::from_str(&raw).ok())
    }

    /// Path of a file inside the temp root.
    pub fn path(&self, name: &str) -> PathBuf {
        self.temp_dir.path().join(name)
    }

    /// Configure a CLI command with this test environment's settings.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command, format: &str) -> &'a mut Command {
        cmd.arg("--data-dir")
            .arg(self.data_dir())
            .arg("--format")
            .arg(format);

        cmd.current_dir(self.temp_dir.path());
        cmd.env_remove(folio_core::DATA_DIR_ENV);
        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }

        cmd
    }

    /// Execute a command using the project's binary and return the result.
    ///
    /// Uses `Command::cargo_bin()`, which relies on the `CARGO_BIN_EXE_`
    /// variables cargo sets for integration tests.
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        self.run_with_format(args, "plain")
    }

    #[allow(deprecated)]
    fn run_with_format(&self, args: &[&str], format: &str) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("folio")
            .map_err(|e| anyhow::anyhow!("Failed to find folio binary: {}", e))?;

        self.configure_command(&mut cmd, format);
        cmd.args(args);

        let output = cmd.output()?;

        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }

    /// Same as [`TestWorld::run`] with `--format json`, parsed.
    pub fn run_json(&self, args: &[&str]) -> Result<serde_json::Value> {
        let result = self.run_with_format(args, "json")?;
        if !result.success() {
            anyhow::bail!("command failed: {}", result.stderr);
        }
        result.json()
    }
}

fn json_string(value: &str) -> String {
    serde_json::Value::String(value.to_string()).to_string()
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
