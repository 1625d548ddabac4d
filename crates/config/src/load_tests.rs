// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Tarmac Contributors

use super::*;
use tarmac_core::Pipeline;

const PIPELINE_YAML: &str = r#"
resources:
  - name: src
    type: git
    source:
      uri: https://example.com/app.git
      paths: [src/**]
  - name: ci-image
    type: registry-image
    source:
      repository: busybox
jobs:
  - name: unit
    plan:
      - get: src
        trigger: true
  - name: integration
    plan:
      - get: src
        trigger: true
        passed: [unit]
      - put: report
"#;

#[test]
fn to_decl_flattens_jobs_in_order() {
    let cfg: RawConfig = serde_yaml::from_str(PIPELINE_YAML).unwrap();
    let decl = cfg.to_decl("main");
    assert_eq!(decl.name, "main");
    assert_eq!(decl.jobs.len(), 2);
    assert_eq!(decl.jobs[0].name, "unit");
    assert!(decl.jobs[0].inputs[0].trigger);
    assert!(decl.jobs[0].inputs[0].passed.is_empty());
    assert_eq!(decl.jobs[1].inputs[0].passed.len(), 1);
    assert_eq!(decl.jobs[1].outputs[0].resource, "report");
}

#[test]
fn decl_classifies_end_to_end() {
    let cfg: RawConfig = serde_yaml::from_str(PIPELINE_YAML).unwrap();
    let pipeline = Pipeline::new(cfg.to_decl("main"));
    let graph = pipeline.graph_starting_from("src");
    assert!(graph.job_named(&"unit".into()).is_some());
    assert!(graph.job_named(&"integration".into()).is_some());
}

#[test]
fn repo_index_collects_git_resources_only() {
    let cfg: RawConfig = serde_yaml::from_str(PIPELINE_YAML).unwrap();
    let index = cfg.repo_index().unwrap();
    let uri = tarmac_core::RepoUri::new("https://example.com/app.git");
    let paths = index.paths_for(&uri).unwrap();
    assert_eq!(paths.len(), 1);
    assert_eq!(
        paths.get("src").map(Vec::as_slice),
        Some(&["src/**".to_string()][..])
    );
}

#[test]
fn missing_paths_means_match_all() {
    let yaml = r#"
resources:
  - name: src
    type: git
    source:
      uri: https://example.com/app.git
"#;
    let cfg: RawConfig = serde_yaml::from_str(yaml).unwrap();
    let index = cfg.repo_index().unwrap();
    let uri = tarmac_core::RepoUri::new("https://example.com/app.git");
    assert_eq!(
        index.paths_for(&uri).unwrap().get("src").map(Vec::len),
        Some(0)
    );
}

#[test]
fn git_resource_without_uri_is_an_error() {
    let yaml = r#"
resources:
  - name: broken
    type: git
    source:
      branch: main
"#;
    let cfg: RawConfig = serde_yaml::from_str(yaml).unwrap();
    let err = cfg.repo_index().unwrap_err();
    assert!(matches!(
        err,
        ConfigError::UnrecognizedSource { resource } if resource == "broken"
    ));
}

#[test]
fn malformed_paths_list_is_an_error() {
    let yaml = r#"
resources:
  - name: broken
    type: git
    source:
      uri: https://example.com/app.git
      paths: [1, 2]
"#;
    let cfg: RawConfig = serde_yaml::from_str(yaml).unwrap();
    assert!(cfg.repo_index().is_err());
}

#[test]
fn two_resources_one_repo_share_an_index_entry() {
    let yaml = r#"
resources:
  - name: app-src
    type: git
    source:
      uri: https://example.com/app.git
      paths: [src/**]
  - name: app-docs
    type: git
    source:
      uri: https://example.com/app.git
      paths: [docs/**]
"#;
    let cfg: RawConfig = serde_yaml::from_str(yaml).unwrap();
    let index = cfg.repo_index().unwrap();
    let uri = tarmac_core::RepoUri::new("https://example.com/app.git");
    assert_eq!(index.paths_for(&uri).unwrap().len(), 2);
}

#[test]
fn load_file_decodes_yaml_and_json() {
    let dir = tempfile::tempdir().unwrap();

    let yaml_path = dir.path().join("pipeline.yml");
    std::fs::write(&yaml_path, PIPELINE_YAML).unwrap();
    let from_yaml = load_file(&yaml_path).unwrap();
    assert_eq!(from_yaml.jobs.len(), 2);

    let json_path = dir.path().join("pipeline.json");
    let json = r#"{"jobs": [{"name": "unit", "plan": [{"get": "src", "trigger": true}]}]}"#;
    std::fs::write(&json_path, json).unwrap();
    let from_json = load_file(&json_path).unwrap();
    assert_eq!(from_json.jobs.len(), 1);
}

#[test]
fn load_file_missing_is_io_error() {
    let err = load_file(std::path::Path::new("/nonexistent/pipeline.yml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}
