// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Tarmac Contributors

//! Pipeline config loading and conversion to the core declaration model.

use crate::model::RawConfig;
use std::path::Path;
use tarmac_core::{
    InputDecl, JobDecl, JobName, OutputDecl, PipelineDecl, RepoIndex, RepoUri, ResourceName,
};
use thiserror::Error;

/// Errors from reading or converting a raw pipeline config.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unrecognized source shape for resource '{resource}'")]
    UnrecognizedSource { resource: String },
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Read a pipeline config from disk; `.json` decodes as JSON, anything
/// else as YAML.
pub fn load_file(path: &Path) -> Result<RawConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;
    if path.extension().is_some_and(|ext| ext == "json") {
        Ok(serde_json::from_str(&content)?)
    } else {
        Ok(serde_yaml::from_str(&content)?)
    }
}

impl RawConfig {
    /// Flatten the job plans into the core declaration model.
    pub fn to_decl(&self, pipeline_name: &str) -> PipelineDecl {
        PipelineDecl {
            name: pipeline_name.to_string(),
            jobs: self
                .jobs
                .iter()
                .map(|job| JobDecl {
                    name: JobName::new(&job.name),
                    inputs: job
                        .inputs()
                        .into_iter()
                        .map(|input| InputDecl {
                            resource: ResourceName::new(&input.resource),
                            trigger: input.trigger,
                            passed: input.passed.iter().map(JobName::new).collect(),
                        })
                        .collect(),
                    outputs: job
                        .outputs()
                        .into_iter()
                        .map(|output| OutputDecl {
                            resource: ResourceName::new(&output.resource),
                        })
                        .collect(),
                })
                .collect(),
        }
    }

    /// Build the repository-URI → resource path whitelist index from
    /// the config's git-backed resources.
    ///
    /// Resources with no `paths` entry match every file; non-git
    /// resources are skipped. A git resource without a string `uri` or
    /// with a malformed `paths` list is a terminal decode failure.
    pub fn repo_index(&self) -> Result<RepoIndex, ConfigError> {
        let mut index = RepoIndex::new();
        for resource in &self.resources {
            if resource.resource_type != "git" {
                tracing::debug!(
                    resource = %resource.name,
                    kind = %resource.resource_type,
                    "skipping non-git resource"
                );
                continue;
            }
            let Some(uri) = resource.source.get("uri").and_then(|v| v.as_str()) else {
                return Err(ConfigError::UnrecognizedSource {
                    resource: resource.name.clone(),
                });
            };
            // TODO: honor ignore_paths once the delta boundary grows
            // exclusion support.
            let paths = match resource.source.get("paths") {
                None => Vec::new(),
                Some(value) => value
                    .as_array()
                    .and_then(|items| {
                        items
                            .iter()
                            .map(|item| item.as_str().map(str::to_string))
                            .collect::<Option<Vec<_>>>()
                    })
                    .ok_or_else(|| ConfigError::UnrecognizedSource {
                        resource: resource.name.clone(),
                    })?,
            };
            index.insert(
                RepoUri::new(uri),
                ResourceName::new(&resource.name),
                paths,
            );
        }
        Ok(index)
    }
}

#[cfg(test)]
#[path = "load_tests.rs"]
mod tests;
