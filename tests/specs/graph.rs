// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Tarmac Contributors

//! `tarmac graph` specs

use crate::prelude::*;

fn config_arg() -> String {
    fixture("pipeline.yml").display().to_string()
}

#[test]
fn graph_prints_resource_job_tree() {
    cli()
        .args(&["graph", "git-src", "--config", &config_arg()])
        .passes()
        .stdout_has("resource git-src")
        .stdout_has("job unit")
        .stdout_has("(passed: unit)")
        .stdout_has("job integration")
        .stdout_has("resource report");
}

#[test]
fn graph_annotates_also_needs() {
    cli()
        .args(&["graph", "git-src", "--config", &config_arg()])
        .passes()
        .stdout_has("(also needs: ci-image)");
}

#[test]
fn produced_resource_is_not_reexpanded() {
    // report has a canonical producer (integration), so publish hangs
    // off report's own graph, not this one.
    cli()
        .args(&["graph", "git-src", "--config", &config_arg()])
        .passes()
        .stdout_lacks("publish");
}

#[test]
fn leaf_resource_graph_is_bare() {
    cli()
        .args(&["graph", "ci-image", "--config", &config_arg()])
        .passes()
        .stdout_has("resource ci-image")
        .stdout_lacks("job");
}

#[test]
fn graph_json_nests_shadow_resource() {
    let out = cli()
        .args(&["graph", "git-src", "--config", &config_arg(), "--format", "json"])
        .passes();
    let json = out.stdout_json();

    assert_eq!(json["name"], "git-src");
    let unit = &json["triggered_jobs"][0];
    assert_eq!(unit["name"], "unit");
    assert_eq!(unit["also_needs"][0], "ci-image");

    let shadow = &unit["outputs"][0];
    assert_eq!(shadow["name"], "git-src");
    assert_eq!(shadow["passed"][0], "unit");
    assert_eq!(shadow["triggered_jobs"][0]["name"], "integration");
}

#[test]
fn missing_config_file_is_an_error() {
    cli()
        .args(&["graph", "git-src", "--config", "/nonexistent.yml"])
        .fails()
        .stderr_has("/nonexistent.yml");
}
