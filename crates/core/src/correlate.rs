// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Tarmac Contributors

//! Correlation of commit path changes against resource path whitelists.
//!
//! Given the repository-URI-indexed path whitelists of a pipeline's
//! git-backed resources and a pair of tree snapshots, determine which
//! resources saw a changed file. The snapshot/diff plumbing lives
//! behind [`CommitDelta`]; the correlator itself never touches a
//! repository.

use crate::name::{RepoUri, ResourceName};
use indexmap::IndexMap;
use thiserror::Error;

/// Commit-message markers that suppress all triggering.
pub const SKIP_MARKERS: [&str; 2] = ["[skip ci]", "[ci skip]"];

/// Path whitelists per resource, for one repository. An empty list
/// means the resource matches every file in the repository.
pub type ResourcePaths = IndexMap<ResourceName, Vec<String>>;

/// Repository-URI-indexed path whitelists for a pipeline's git
/// resources.
#[derive(Debug, Clone, Default)]
pub struct RepoIndex {
    repos: IndexMap<RepoUri, ResourcePaths>,
}

impl RepoIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `resource` as tracking `paths` under `uri`.
    pub fn insert(&mut self, uri: RepoUri, resource: ResourceName, paths: Vec<String>) {
        self.repos.entry(uri).or_default().insert(resource, paths);
    }

    /// Path whitelists of the repository behind `uri`, if any pipeline
    /// resource references it.
    pub fn paths_for(&self, uri: &RepoUri) -> Option<&ResourcePaths> {
        self.repos.get(uri)
    }

    pub fn is_empty(&self) -> bool {
        self.repos.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&RepoUri, &ResourcePaths)> {
        self.repos.iter()
    }
}

/// Failure at the snapshot/diff boundary.
#[derive(Debug, Error)]
pub enum DeltaError {
    #[error("repository has no '{0}' remote")]
    MissingRemote(String),
    #[error("tree diff failed: {0}")]
    Diff(String),
}

/// Terminal failures of a correlation call. No retries, no partial
/// results: a call produces either a complete set or one error.
#[derive(Debug, Error)]
pub enum CorrelateError {
    /// The repository's remote is not referenced by any pipeline
    /// resource.
    #[error("no resources in pipeline reference uri: {0}")]
    UnknownRepo(RepoUri),
    #[error(transparent)]
    Delta(#[from] DeltaError),
}

/// Two tree snapshots of one repository plus a path-scoped diff
/// between them.
///
/// Implementations must pair every derived snapshot with an owning
/// handle to the underlying repository, so a snapshot can never outlive
/// the resource it was derived from.
pub trait CommitDelta {
    /// URI of the repository's primary remote, used to look the
    /// repository up in the resource index.
    fn remote_uri(&self) -> Result<RepoUri, DeltaError>;

    /// Free-text message of the newer commit.
    fn message(&self) -> &str;

    /// Changed-file count between the snapshots, restricted to `paths`.
    /// An empty `paths` slice matches the whole repository.
    fn files_changed(&self, paths: &[String]) -> Result<usize, DeltaError>;
}

/// Resources whose path whitelist saw a change between the snapshots.
///
/// A commit whose message carries a skip marker triggers nothing, and
/// no diff is computed for it.
pub fn resources_triggered(
    index: &RepoIndex,
    delta: &impl CommitDelta,
) -> Result<Vec<ResourceName>, CorrelateError> {
    let message = delta.message();
    if SKIP_MARKERS.iter().any(|marker| message.contains(marker)) {
        tracing::debug!("skip marker present, nothing triggered");
        return Ok(Vec::new());
    }

    let uri = delta.remote_uri()?;
    let Some(paths) = index.paths_for(&uri) else {
        return Err(CorrelateError::UnknownRepo(uri));
    };

    let mut triggered = Vec::new();
    for (resource, globs) in paths {
        if delta.files_changed(globs)? != 0 {
            triggered.push(resource.clone());
        }
    }
    Ok(triggered)
}

#[cfg(test)]
#[path = "correlate_tests.rs"]
mod tests;
