// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Tarmac Contributors

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! tarmac-config: raw pipeline configuration plumbing
//!
//! Decodes Concourse-style pipeline configs (YAML files or control-plane
//! JSON) into the core declaration model, and builds the repository path
//! index from git-backed resource declarations.

pub mod atc;
pub mod flyrc;
pub mod load;
pub mod model;

pub use atc::{AtcClient, AtcError};
pub use flyrc::{load_target, load_target_from, FlyTarget};
pub use load::{load_file, ConfigError};
pub use model::{InParallel, JobInput, JobOutput, RawConfig, RawJob, RawResource, RawStep};
