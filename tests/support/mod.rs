//! Test support utilities for passkeep integration tests.
//!
//! Provides reusable test environment setup and helper commands.

#![allow(dead_code)]

pub mod assertions;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;

use std::path::PathBuf;

use tempfile::TempDir;

/// Test environment with isolated temp directories.
///
/// Each test gets its own working dir and home dir. No process-global state
/// is mutated; child processes use `.current_dir()` so tests can run in
/// parallel.
pub struct Test {
    /// Working directory, where `passwords.csv` lands by default
    pub dir: TempDir,
    /// Temporary home directory (config lookups stay in here)
    pub home: TempDir,
}

impl Test {
    /// Create a new empty test environment.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        let home = TempDir::new().expect("failed to create temp home");

        Self { dir, home }
    }

    /// Create a test environment with credentials already added.
    pub fn with_credentials(creds: &[(&str, &str, &str, &str)]) -> Self {
        let t = Self::new();
        for (kind, identity, secret, target) in creds {
            let output = t.add(kind, identity, secret, target);
            assert!(
                output.status.success(),
                "Failed to add {} {}: {}",
                kind,
                target,
                String::from_utf8_lossy(&output.stderr)
            );
        }
        t
    }

    /// Default backing file for this environment.
    pub fn vault_path(&self) -> PathBuf {
        self.dir.path().join("passwords.csv")
    }

    /// Config file location the binary will look at.
    pub fn config_path(&self) -> PathBuf {
        self.home.path().join("config.toml")
    }

    /// Backing file contents, empty if it does not exist.
    pub fn vault_contents(&self) -> String {
        std::fs::read_to_string(self.vault_path()).unwrap_or_default()
    }

    /// Seed the backing file directly.
    pub fn write_vault(&self, contents: &str) {
        std::fs::write(self.vault_path(), contents).expect("failed to write vault");
    }
}
