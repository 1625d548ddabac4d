// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Tarmac Contributors

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! tarmac-core: pipeline classification and graph resolution
//!
//! Turns a pipeline's declared jobs and resources into trigger/product
//! indices, resolves the dependency graph reachable from a chosen
//! resource, and correlates a commit's changed paths against resource
//! path whitelists. Purely static: nothing here runs a job.

pub mod macros;

pub mod classify;
pub mod correlate;
pub mod decl;
pub mod graph;
pub mod name;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use classify::{Entrypoint, Indices, Midtrigger, Pipeline};
pub use correlate::{
    resources_triggered, CommitDelta, CorrelateError, DeltaError, RepoIndex, ResourcePaths,
    SKIP_MARKERS,
};
pub use decl::{InputDecl, JobDecl, OutputDecl, PipelineDecl};
pub use graph::{Graph, JobNode, JobNodeId, ResourceNode, ResourceNodeId};
pub use name::{JobName, RepoUri, ResourceName};
