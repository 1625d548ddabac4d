// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Tarmac Contributors

//! `tarmac log` — commit-by-commit triggered-resource report.

use super::source::SourceArgs;
use crate::color;
use crate::output::{format_or_json, OutputFormat};
use anyhow::{Context, Result};
use clap::Args;
use regex::Regex;
use serde::Serialize;
use std::path::PathBuf;
use tarmac_git::{head_commit, open_repo};

#[derive(Args)]
pub struct LogArgs {
    /// Path to a local clone of the repository
    pub repo: PathBuf,

    /// Number of commits to walk back from HEAD
    #[arg(short = 'n', long = "commits", default_value_t = 10)]
    pub commits: u32,

    /// Regex stripped from the front of resource names in the report
    /// (e.g. '^(?:git-|src-)')
    #[arg(long, value_name = "REGEX")]
    pub strip_prefix: Option<String>,

    #[command(flatten)]
    pub source: SourceArgs,
}

#[derive(Debug, Serialize)]
struct LogEntry {
    sha: String,
    summary: String,
    resources: Vec<String>,
}

pub async fn handle(args: LogArgs, format: OutputFormat) -> Result<()> {
    let (_, index) = args.source.load().await?;
    let strip = args
        .strip_prefix
        .as_deref()
        .map(Regex::new)
        .transpose()
        .context("invalid --strip-prefix regex")?;

    let repo = open_repo(&args.repo)?;
    let mut commit = head_commit(&repo)?;

    let mut entries = Vec::new();
    for _ in 0..args.commits {
        // The walk ends at the root commit: there is no parent tree to
        // diff against.
        let Ok(parent) = commit.parent(0) else {
            break;
        };
        let triggered = commit.resources_triggered_in(&index)?;
        let resources: Vec<String> = triggered
            .iter()
            .map(|resource| match &strip {
                Some(re) => re.replace(resource.as_str(), "").into_owned(),
                None => resource.as_str().to_string(),
            })
            .collect();
        entries.push(LogEntry {
            sha: commit.short_id(),
            summary: commit.summary().to_string(),
            resources,
        });
        commit = parent;
    }

    format_or_json(format, &entries, || {
        for entry in &entries {
            println!(
                "{} {} {}",
                color::header(&entry.sha),
                entry.summary,
                color::literal(&format!("[{}]", entry.resources.join(", ")))
            );
        }
    })
}
