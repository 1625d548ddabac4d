// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Tarmac Contributors

//! Declared shape of one pipeline: jobs with ordered inputs and outputs.
//!
//! This is the boundary contract with whatever supplies the raw config:
//! per job, an ordered input list (resource, trigger flag, ordered
//! passed-job list) and an ordered output list. Immutable once built.

use crate::name::{JobName, ResourceName};
use serde::{Deserialize, Serialize};

/// One declared job input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputDecl {
    pub resource: ResourceName,
    /// Whether a new version of the resource fires the job.
    #[serde(default)]
    pub trigger: bool,
    /// Upstream jobs the resource version must already have passed
    /// through before this input fires. Empty means ungated.
    #[serde(default)]
    pub passed: Vec<JobName>,
}

/// One declared job output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputDecl {
    pub resource: ResourceName,
}

/// One declared job: ordered inputs, ordered outputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobDecl {
    pub name: JobName,
    #[serde(default)]
    pub inputs: Vec<InputDecl>,
    #[serde(default)]
    pub outputs: Vec<OutputDecl>,
}

/// A pipeline's full declaration, in declared job order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineDecl {
    pub name: String,
    pub jobs: Vec<JobDecl>,
}
