// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Tarmac Contributors

//! Shared `--config` / `--target` pipeline source flags.

use anyhow::{bail, Context, Result};
use clap::Args;
use std::path::PathBuf;
use tarmac_config::{load_file, load_target, AtcClient, RawConfig};
use tarmac_core::{Pipeline, RepoIndex};

#[derive(Args)]
pub struct SourceArgs {
    /// Pipeline config file (YAML, or JSON with a .json extension)
    #[arg(short, long, value_name = "FILE", conflicts_with = "target")]
    pub config: Option<PathBuf>,

    /// Fly target to fetch the pipeline from
    #[arg(short, long)]
    pub target: Option<String>,

    /// Pipeline name (defaults to the config file stem)
    #[arg(short, long)]
    pub pipeline: Option<String>,
}

impl SourceArgs {
    /// Load and classify the pipeline plus its repository path index.
    pub async fn load(&self) -> Result<(Pipeline, RepoIndex)> {
        let (raw, name) = self.load_raw().await?;
        let index = raw.repo_index()?;
        let decl = raw.to_decl(&name);
        let pipeline = Pipeline::new(decl);
        tracing::debug!(
            pipeline = %pipeline.name(),
            jobs = pipeline.decl().jobs.len(),
            "classified pipeline"
        );
        Ok((pipeline, index))
    }

    async fn load_raw(&self) -> Result<(RawConfig, String)> {
        if let Some(path) = &self.config {
            let raw =
                load_file(path).with_context(|| format!("loading {}", path.display()))?;
            let name = self
                .pipeline
                .clone()
                .or_else(|| {
                    path.file_stem()
                        .map(|stem| stem.to_string_lossy().into_owned())
                })
                .unwrap_or_else(|| "pipeline".to_string());
            return Ok((raw, name));
        }

        let Some(target) = &self.target else {
            bail!("either --config or --target is required");
        };
        let Some(pipeline) = &self.pipeline else {
            bail!("--pipeline is required with --target");
        };
        let fly = load_target(target)?;
        let raw = AtcClient::new(fly)
            .fetch_pipeline_config(pipeline)
            .await
            .with_context(|| format!("fetching pipeline '{pipeline}' from target '{target}'"))?;
        Ok((raw, pipeline.clone()))
    }
}
