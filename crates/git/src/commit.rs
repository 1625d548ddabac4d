// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Tarmac Contributors

//! Commit handles paired with their owning repository.

use crate::range::GitRange;
use crate::GitError;
use git2::{Commit, Repository};
use std::path::Path;
use tarmac_core::{resources_triggered, RepoIndex, ResourceName};

/// Open the repository at `path` or any ancestor containing `.git`.
pub fn open_repo(path: &Path) -> Result<Repository, GitError> {
    Ok(Repository::discover(path)?)
}

/// The commit HEAD points at.
pub fn head_commit(repo: &Repository) -> Result<GitCommit<'_>, GitError> {
    let commit = repo.head()?.peel_to_commit()?;
    Ok(GitCommit::new(repo, commit))
}

/// A commit paired with the repository that owns it.
///
/// Everything git2 derives from a `Repository` borrows it, so the
/// pairing is enforced by lifetime: a `GitCommit` cannot outlive the
/// handle it was derived from.
pub struct GitCommit<'repo> {
    pub(crate) repo: &'repo Repository,
    pub(crate) commit: Commit<'repo>,
}

impl<'repo> GitCommit<'repo> {
    pub fn new(repo: &'repo Repository, commit: Commit<'repo>) -> Self {
        Self { repo, commit }
    }

    /// The `n`th parent of this commit, in the same repository.
    pub fn parent(&self, n: usize) -> Result<GitCommit<'repo>, GitError> {
        let commit = self.commit.parent(n)?;
        Ok(Self {
            repo: self.repo,
            commit,
        })
    }

    pub fn id(&self) -> git2::Oid {
        self.commit.id()
    }

    /// Abbreviated hex id.
    pub fn short_id(&self) -> String {
        let id = self.commit.id().to_string();
        let end = id.len().min(7);
        id[..end].to_string()
    }

    /// Full commit message; empty if not valid UTF-8.
    pub fn message(&self) -> &str {
        self.commit.message().unwrap_or("")
    }

    /// First line of the commit message.
    pub fn summary(&self) -> &str {
        self.commit.summary().unwrap_or("")
    }

    /// Resources this commit would trigger, relative to its first
    /// parent.
    pub fn resources_triggered_in(
        &self,
        index: &RepoIndex,
    ) -> Result<Vec<ResourceName>, GitError> {
        tracing::debug!(commit = %self.short_id(), "correlating commit against path index");
        let parent = self.parent(0)?;
        let range = GitRange::new(&parent, self)?;
        Ok(resources_triggered(index, &range)?)
    }
}
