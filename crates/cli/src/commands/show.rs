// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Tarmac Contributors

//! `tarmac show` — print a pipeline's classified indices.

use super::source::SourceArgs;
use crate::output::{self, OutputFormat};
use anyhow::Result;
use clap::Args;

#[derive(Args)]
pub struct ShowArgs {
    #[command(flatten)]
    pub source: SourceArgs,
}

pub async fn handle(args: ShowArgs, format: OutputFormat) -> Result<()> {
    let (pipeline, _) = args.source.load().await?;
    output::format_or_json(format, pipeline.indices(), || {
        output::print_indices(pipeline.name(), pipeline.indices());
    })
}
