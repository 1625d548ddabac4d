// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Tarmac Contributors

//! Minimal ATC control-plane client: fetch one pipeline's config.

use crate::flyrc::FlyTarget;
use crate::model::RawConfig;
use serde::Deserialize;
use thiserror::Error;

/// Errors from target resolution or the config fetch.
#[derive(Debug, Error)]
pub enum AtcError {
    #[error("no such fly target: {0}")]
    UnknownTarget(String),
    #[error("could not determine home directory")]
    NoHome,
    #[error("failed to read {path}: {source}")]
    FlyrcRead {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Flyrc(#[from] serde_yaml::Error),
    #[error("{api} returned {status} for pipeline '{pipeline}'")]
    Status {
        api: String,
        status: u16,
        pipeline: String,
    },
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Envelope of the pipeline config endpoint.
#[derive(Deserialize)]
struct ConfigResponse {
    config: RawConfig,
}

/// Client bound to one fly target.
pub struct AtcClient {
    http: reqwest::Client,
    target: FlyTarget,
}

impl AtcClient {
    pub fn new(target: FlyTarget) -> Self {
        Self {
            http: reqwest::Client::new(),
            target,
        }
    }

    pub fn target(&self) -> &FlyTarget {
        &self.target
    }

    /// Fetch a pipeline's config from the control plane.
    ///
    /// No retries, no caching; a non-success status is a terminal
    /// error.
    pub async fn fetch_pipeline_config(&self, pipeline: &str) -> Result<RawConfig, AtcError> {
        let url = format!(
            "{}/api/v1/teams/{}/pipelines/{}/config",
            self.target.api, self.target.team, pipeline
        );
        tracing::debug!(%url, "fetching pipeline config");

        let mut request = self.http.get(&url);
        if let Some(token) = &self.target.token {
            request = request.bearer_auth(token);
        }
        let response = request.send().await?;
        if !response.status().is_success() {
            return Err(AtcError::Status {
                api: self.target.api.clone(),
                status: response.status().as_u16(),
                pipeline: pipeline.to_string(),
            });
        }
        Ok(response.json::<ConfigResponse>().await?.config)
    }
}
