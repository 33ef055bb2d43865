//! Test helpers for behavioral specifications.
//!
//! Provides high-level DSL for testing reengage CLI behavior.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, dead_code)]

use std::cell::Cell;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// 2026-01-01T00:00:00Z
pub const START_MS: u64 = 1_767_225_600_000;
pub const HOUR_MS: u64 = 60 * 60 * 1000;

/// Returns the path to a binary, checking llvm-cov target directory first.
fn binary_path(name: &str) -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));

    let llvm_cov_path = manifest_dir.join("target/llvm-cov-target/debug").join(name);
    if llvm_cov_path.exists() {
        return llvm_cov_path;
    }

    let standard = manifest_dir.join("target/debug").join(name);
    if standard.exists() {
        return standard;
    }

    // Shared or relocated target directory
    assert_cmd::cargo::cargo_bin(name)
}

/// Returns a Command configured to run the reengage binary
pub fn reengage_cmd() -> Command {
    Command::new(binary_path("reengage"))
}

/// Create a CLI builder for reengage commands
pub fn cli() -> CliBuilder {
    CliBuilder::new()
}

/// High-level CLI builder for fluent test assertions
pub struct CliBuilder {
    args: Vec<String>,
    envs: Vec<(String, String)>,
}

impl CliBuilder {
    fn new() -> Self {
        Self {
            args: Vec::new(),
            envs: Vec::new(),
        }
    }

    /// Add CLI arguments
    pub fn args(mut self, args: &[&str]) -> Self {
        self.args.extend(args.iter().map(|s| s.to_string()));
        self
    }

    /// Set environment variable
    pub fn env(mut self, key: &str, value: impl AsRef<Path>) -> Self {
        self.envs.push((
            key.to_string(),
            value.as_ref().to_string_lossy().to_string(),
        ));
        self
    }

    /// Build the command without running it
    pub fn command(self) -> Command {
        let mut cmd = reengage_cmd();
        cmd.args(&self.args);

        // Keep the parent's settings out of the sandbox.
        cmd.env_remove("REENGAGE_STATE_DIR");
        cmd.env_remove("REENGAGE_NOW_MS");
        cmd.env_remove("RUST_LOG");

        for (key, value) in self.envs {
            cmd.env(key, value);
        }

        cmd
    }

    /// Run and expect success (exit code 0)
    pub fn passes(self) -> RunAssert {
        let mut cmd = self.command();
        let output = cmd.output().expect("command should run");
        assert!(
            output.status.success(),
            "expected command to pass, got exit code {:?}\nstdout: {}\nstderr: {}",
            output.status.code(),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );
        RunAssert { output }
    }

    /// Run and expect failure (non-zero exit code)
    pub fn fails(self) -> RunAssert {
        let mut cmd = self.command();
        let output = cmd.output().expect("command should run");
        assert!(
            !output.status.success(),
            "expected command to fail, but it passed\nstdout: {}\nstderr: {}",
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );
        RunAssert { output }
    }
}

/// Result of a CLI run for chaining assertions
pub struct RunAssert {
    output: Output,
}

impl RunAssert {
    /// Get stdout as string
    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).into_owned()
    }

    /// Get stderr as string
    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).into_owned()
    }

    /// Parse stdout as JSON.
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.stdout())
            .unwrap_or_else(|e| panic!("stdout is not JSON ({e}):\n{}", self.stdout()))
    }

    /// Assert stdout equals expected exactly (with diff on failure).
    /// **Prefer this for format specs** - catches format regressions.
    pub fn stdout_eq(self, expected: &str) -> Self {
        let stdout = self.stdout();
        similar_asserts::assert_eq!(stdout, expected);
        self
    }

    /// Assert stdout contains substring.
    /// Use when exact comparison isn't practical.
    pub fn stdout_has(self, expected: &str) -> Self {
        let stdout = self.stdout();
        assert!(
            stdout.contains(expected),
            "stdout does not contain '{}'\nstdout: {}",
            expected,
            stdout
        );
        self
    }

    /// Assert stdout does not contain substring.
    pub fn stdout_lacks(self, unexpected: &str) -> Self {
        let stdout = self.stdout();
        assert!(
            !stdout.contains(unexpected),
            "stdout should not contain '{}'\nstdout: {}",
            unexpected,
            stdout
        );
        self
    }

    /// Assert stderr contains substring.
    pub fn stderr_has(self, expected: &str) -> Self {
        let stderr = self.stderr();
        assert!(
            stderr.contains(expected),
            "stderr does not contain '{}'\nstderr: {}",
            expected,
            stderr
        );
        self
    }
}

// =============================================================================
// Device
// =============================================================================

/// One install of the host app: an isolated state directory and a clock.
pub struct Device {
    state_dir: tempfile::TempDir,
    now_ms: Cell<u64>,
}

impl Device {
    /// Fresh install at [`START_MS`].
    pub fn new() -> Self {
        Self {
            state_dir: tempfile::tempdir().unwrap(),
            now_ms: Cell::new(START_MS),
        }
    }

    /// Fresh install with notification permission already granted.
    pub fn authorized() -> Self {
        let device = Self::new();
        device
            .reengage()
            .args(&["permission", "set", "authorized"])
            .passes();
        device
    }

    pub fn state_path(&self) -> &Path {
        self.state_dir.path()
    }

    /// Hours since [`START_MS`] (the first launch in most specs).
    pub fn at_hours(&self, hours: u64) -> &Self {
        self.now_ms.set(START_MS + hours * HOUR_MS);
        self
    }

    /// Write a file into the state directory.
    pub fn file(&self, name: &str, content: &str) {
        std::fs::write(self.state_path().join(name), content).unwrap();
    }

    /// Run reengage against this device
    pub fn reengage(&self) -> CliBuilder {
        cli()
            .env("REENGAGE_STATE_DIR", self.state_path())
            .env("REENGAGE_NOW_MS", self.now_ms.get().to_string())
    }

    /// Run reengage with JSON output and parse the result.
    pub fn json(&self, args: &[&str]) -> serde_json::Value {
        let mut full = vec!["-o", "json"];
        full.extend_from_slice(args);
        self.reengage().args(&full).passes().json()
    }

    /// Read the log file contents (for debugging test failures)
    pub fn log(&self) -> String {
        std::fs::read_to_string(self.state_path().join("reengage.log"))
            .unwrap_or_else(|_| "(no log)".to_string())
    }
}
