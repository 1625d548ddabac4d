// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Tarmac Contributors

//! Tree-to-tree snapshot pairs and the pathspec-scoped diff.

use crate::commit::GitCommit;
use crate::GitError;
use git2::DiffOptions;
use tarmac_core::{CommitDelta, DeltaError, RepoUri};

/// Two commits of one repository, diffed old → new.
pub struct GitRange<'repo, 'a> {
    old: &'a GitCommit<'repo>,
    new: &'a GitCommit<'repo>,
}

impl std::fmt::Debug for GitRange<'_, '_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitRange").finish_non_exhaustive()
    }
}

impl<'repo, 'a> GitRange<'repo, 'a> {
    /// Pair two commits for diffing. Refused when they come from
    /// different repository handles.
    pub fn new(
        old: &'a GitCommit<'repo>,
        new: &'a GitCommit<'repo>,
    ) -> Result<Self, GitError> {
        if !std::ptr::eq(old.repo, new.repo) {
            return Err(GitError::MismatchedRepos);
        }
        Ok(Self { old, new })
    }
}

impl CommitDelta for GitRange<'_, '_> {
    fn remote_uri(&self) -> Result<RepoUri, DeltaError> {
        let remote = self
            .new
            .repo
            .find_remote("origin")
            .map_err(|_| DeltaError::MissingRemote("origin".to_string()))?;
        let Some(url) = remote.url() else {
            return Err(DeltaError::MissingRemote("origin".to_string()));
        };
        Ok(RepoUri::new(url))
    }

    fn message(&self) -> &str {
        self.new.message()
    }

    fn files_changed(&self, paths: &[String]) -> Result<usize, DeltaError> {
        let repo = self.new.repo;
        let old_tree = self
            .old
            .commit
            .tree()
            .map_err(|e| DeltaError::Diff(e.to_string()))?;
        let new_tree = self
            .new
            .commit
            .tree()
            .map_err(|e| DeltaError::Diff(e.to_string()))?;

        // An empty pathspec matches every file, which is exactly the
        // contract for a resource with no path whitelist.
        let mut opts = DiffOptions::new();
        for path in paths {
            opts.pathspec(path);
        }

        let diff = repo
            .diff_tree_to_tree(Some(&old_tree), Some(&new_tree), Some(&mut opts))
            .map_err(|e| DeltaError::Diff(e.to_string()))?;
        let stats = diff.stats().map_err(|e| DeltaError::Diff(e.to_string()))?;
        Ok(stats.files_changed())
    }
}

#[cfg(test)]
#[path = "range_tests.rs"]
mod tests;
