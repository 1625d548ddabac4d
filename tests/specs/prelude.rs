// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Tarmac Contributors

//! Fluent spec harness around the compiled binary.

use assert_cmd::Command;
use std::path::PathBuf;

/// Start a `tarmac` invocation. Color is disabled so assertions see
/// plain text.
pub fn cli() -> SpecCmd {
    let mut cmd = Command::cargo_bin("tarmac").unwrap();
    cmd.env("NO_COLOR", "1");
    SpecCmd { cmd }
}

/// Absolute path of a fixture file.
pub fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/specs/fixtures")
        .join(name)
}

pub struct SpecCmd {
    cmd: Command,
}

impl SpecCmd {
    pub fn args(mut self, args: &[&str]) -> Self {
        self.cmd.args(args);
        self
    }

    pub fn passes(mut self) -> SpecOutput {
        SpecOutput(self.cmd.assert().success())
    }

    pub fn fails(mut self) -> SpecOutput {
        SpecOutput(self.cmd.assert().failure())
    }
}

pub struct SpecOutput(assert_cmd::assert::Assert);

impl SpecOutput {
    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.0.get_output().stdout).into_owned()
    }

    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.0.get_output().stderr).into_owned()
    }

    pub fn stdout_has(self, needle: &str) -> Self {
        let out = self.stdout();
        assert!(out.contains(needle), "stdout missing {needle:?}:\n{out}");
        self
    }

    pub fn stdout_lacks(self, needle: &str) -> Self {
        let out = self.stdout();
        assert!(!out.contains(needle), "stdout unexpectedly has {needle:?}:\n{out}");
        self
    }

    pub fn stderr_has(self, needle: &str) -> Self {
        let err = self.stderr();
        assert!(err.contains(needle), "stderr missing {needle:?}:\n{err}");
        self
    }

    pub fn stdout_json(&self) -> serde_json::Value {
        serde_json::from_str(&self.stdout()).unwrap()
    }
}
