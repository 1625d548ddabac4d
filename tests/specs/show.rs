// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Tarmac Contributors

//! `tarmac show` specs

use crate::prelude::*;

fn config_arg() -> String {
    fixture("pipeline.yml").display().to_string()
}

#[test]
fn show_lists_classified_indices() {
    cli()
        .args(&["show", "--config", &config_arg()])
        .passes()
        .stdout_has("pipeline pipeline")
        .stdout_has("entrypoints:")
        .stdout_has("git-src -> unit")
        .stdout_has("midtriggers:")
        .stdout_has("git-src -> integration (passed: unit)")
        .stdout_has("products:")
        .stdout_has("report <- integration")
        .stdout_has("inputs:")
        .stdout_has("unit: git-src, ci-image");
}

#[test]
fn show_honors_pipeline_name_flag() {
    cli()
        .args(&["show", "--config", &config_arg(), "--pipeline", "main"])
        .passes()
        .stdout_has("pipeline main");
}

#[test]
fn show_json_exposes_index_maps() {
    let out = cli()
        .args(&["show", "--config", &config_arg(), "--format", "json"])
        .passes();
    let json = out.stdout_json();

    assert_eq!(json["entrypoints"]["git-src"][0]["triggered_job"], "unit");
    assert_eq!(json["midtriggers"]["git-src"][0]["passed"][0], "unit");
    assert_eq!(json["products"]["report"], "integration");
    assert_eq!(json["byproducts"]["integration"][0], "report");
    assert_eq!(json["all_inputs_of_job"]["unit"][1], "ci-image");
}
