// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Tarmac Contributors

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! tarmac-git: repository plumbing behind the commit correlator
//!
//! Opens repositories, walks commits, and implements the core's
//! [`CommitDelta`](tarmac_core::CommitDelta) boundary with
//! pathspec-scoped tree-to-tree diffs.

mod commit;
mod range;

pub use commit::{head_commit, open_repo, GitCommit};
pub use range::GitRange;

use tarmac_core::CorrelateError;
use thiserror::Error;

/// Errors from repository access or correlation.
#[derive(Debug, Error)]
pub enum GitError {
    /// The two commits of a range belong to different repositories;
    /// comparing their trees is meaningless.
    #[error("commits belong to different repositories")]
    MismatchedRepos,
    #[error(transparent)]
    Git(#[from] git2::Error),
    #[error(transparent)]
    Correlate(#[from] CorrelateError),
}
