//! Common test utilities for CLI testing.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::{tempdir, TempDir};

/// Test context with a temporary project directory
pub struct TestContext {
    pub temp_dir: TempDir,
    pub config_path: PathBuf,
}

impl TestContext {
    pub fn new() -> Self {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("glossa.yaml");

        Self {
            temp_dir,
            config_path,
        }
    }

    /// Write the config file
    pub fn with_config(self, config: &str) -> Self {
        std::fs::write(&self.config_path, config).expect("Failed to write config");
        self
    }

    /// Point the config at `i18n/nls` and write the default bundles
    pub fn with_default_bundles(self) -> Self {
        self.with_bundle("nls.properties", "Key=Value.\nargs=Accepts {0} arguments. {1}!\nmenu.title=Menu\n")
            .with_bundle("nls_de.properties", "Key=Wert.\nmenu.title=Men\\u00fc\n")
            .with_config("bundle:\n  base_path: i18n/nls\n  fallback_locale: \"\"\n")
    }

    /// Write a bundle file under `i18n/`
    pub fn with_bundle(self, name: &str, content: &str) -> Self {
        let dir = self.path().join("i18n");
        std::fs::create_dir_all(&dir).expect("Failed to create bundle dir");
        std::fs::write(dir.join(name), content).expect("Failed to write bundle");
        self
    }

    /// Get path to temp directory
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Create a command configured for this context
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("glossa").expect("Binary not found");
        cmd.current_dir(self.path())
            .env("GLOSSA_CONFIG", &self.config_path)
            .env("NO_COLOR", "1");
        for var in [
            "GLOSSA_LOCALE",
            "LC_ALL",
            "LC_MESSAGES",
            "LANG",
            "GLOSSA_LOG_LEVEL",
            "RUST_LOG",
            "GLOSSA_LOG_FILE",
        ] {
            cmd.env_remove(var);
        }
        cmd
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

/// JSON output assertions
pub mod json {
    use serde_json::Value;

    pub fn parse_output(output: &[u8]) -> Value {
        serde_json::from_slice(output).expect("Failed to parse JSON output")
    }
}
