// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Tarmac Contributors

//! CLI help output specs

use crate::prelude::*;

#[test]
fn no_args_shows_usage_and_fails() {
    cli().fails().stderr_has("Usage:");
}

#[test]
fn help_shows_subcommands() {
    cli()
        .args(&["--help"])
        .passes()
        .stdout_has("Usage:")
        .stdout_has("graph")
        .stdout_has("show")
        .stdout_has("log");
}

#[test]
fn version_shows_version() {
    cli().args(&["--version"]).passes().stdout_has("0.1");
}

#[test]
fn graph_help_shows_source_flags() {
    cli()
        .args(&["graph", "--help"])
        .passes()
        .stdout_has("--config")
        .stdout_has("--target")
        .stdout_has("--pipeline");
}

#[test]
fn log_help_shows_walk_flags() {
    cli()
        .args(&["log", "--help"])
        .passes()
        .stdout_has("--commits")
        .stdout_has("--strip-prefix");
}

#[test]
fn graph_without_source_is_an_error() {
    cli()
        .args(&["graph", "git-src"])
        .fails()
        .stderr_has("either --config or --target is required");
}
