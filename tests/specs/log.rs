// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Tarmac Contributors

//! `tarmac log` specs

use crate::prelude::*;
use git2::Repository;
use std::path::Path;
use tempfile::TempDir;

fn config_arg() -> String {
    fixture("pipeline.yml").display().to_string()
}

fn commit_files(repo: &Repository, files: &[(&str, &str)], message: &str) {
    let workdir = repo.workdir().unwrap();
    for (path, content) in files {
        let full = workdir.join(path);
        if let Some(parent) = full.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(full, content).unwrap();
    }
    let mut index = repo.index().unwrap();
    index
        .add_all(["*"], git2::IndexAddOption::DEFAULT, None)
        .unwrap();
    index.write().unwrap();
    let tree_id = index.write_tree().unwrap();
    let tree = repo.find_tree(tree_id).unwrap();
    let sig = git2::Signature::now("spec", "spec@example.com").unwrap();
    match repo.head().ok().and_then(|h| h.peel_to_commit().ok()) {
        Some(parent) => {
            repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &[&parent])
                .unwrap();
        }
        None => {
            repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &[])
                .unwrap();
        }
    }
}

/// Repo matching the fixture's uri, with three commits: initial, a src
/// change, and a docs change marked [skip ci].
fn fixture_repo(dir: &Path) -> Repository {
    let repo = Repository::init(dir).unwrap();
    repo.remote("origin", "https://example.com/app.git").unwrap();
    let mut config = repo.config().unwrap();
    config.set_str("user.name", "spec").unwrap();
    config.set_str("user.email", "spec@example.com").unwrap();
    drop(config);
    commit_files(
        &repo,
        &[("src/main.go", "package main"), ("docs/index.md", "# docs")],
        "initial",
    );
    commit_files(&repo, &[("src/main.go", "package main // v2")], "change src");
    commit_files(&repo, &[("docs/index.md", "# docs v2")], "docs [skip ci]");
    repo
}

#[test]
fn log_reports_triggered_resources_per_commit() {
    let dir = TempDir::new().unwrap();
    fixture_repo(dir.path());

    let out = cli()
        .args(&[
            "log",
            &dir.path().display().to_string(),
            "--config",
            &config_arg(),
            "--format",
            "json",
            "-n",
            "2",
        ])
        .passes();
    let json = out.stdout_json();

    let entries = json.as_array().unwrap();
    assert_eq!(entries.len(), 2);

    // HEAD carries the skip marker: nothing triggered.
    assert_eq!(entries[0]["summary"], "docs [skip ci]");
    assert!(entries[0]["resources"].as_array().unwrap().is_empty());

    assert_eq!(entries[1]["summary"], "change src");
    assert_eq!(entries[1]["resources"][0], "git-src");
}

#[test]
fn log_strips_resource_name_prefixes() {
    let dir = TempDir::new().unwrap();
    fixture_repo(dir.path());

    let out = cli()
        .args(&[
            "log",
            &dir.path().display().to_string(),
            "--config",
            &config_arg(),
            "--strip-prefix",
            "^git-",
            "--format",
            "json",
            "-n",
            "2",
        ])
        .passes();
    let json = out.stdout_json();
    assert_eq!(json[1]["resources"][0], "src");
}

#[test]
fn log_walk_stops_at_root_commit() {
    let dir = TempDir::new().unwrap();
    fixture_repo(dir.path());

    let out = cli()
        .args(&[
            "log",
            &dir.path().display().to_string(),
            "--config",
            &config_arg(),
            "--format",
            "json",
            "-n",
            "10",
        ])
        .passes();
    // Three commits, but the root has no parent to diff against.
    assert_eq!(out.stdout_json().as_array().unwrap().len(), 2);
}

#[test]
fn log_text_output_shows_sha_and_resources() {
    let dir = TempDir::new().unwrap();
    fixture_repo(dir.path());

    cli()
        .args(&[
            "log",
            &dir.path().display().to_string(),
            "--config",
            &config_arg(),
            "-n",
            "2",
        ])
        .passes()
        .stdout_has("change src")
        .stdout_has("[git-src]");
}
