// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Tarmac Contributors

//! `tarmac graph` — resolve and print the graph reachable from a resource.

use super::source::SourceArgs;
use crate::output::{self, OutputFormat};
use anyhow::Result;
use clap::Args;

#[derive(Args)]
pub struct GraphArgs {
    /// Resource to start from
    pub resource: String,

    #[command(flatten)]
    pub source: SourceArgs,
}

pub async fn handle(args: GraphArgs, format: OutputFormat) -> Result<()> {
    let (pipeline, _) = args.source.load().await?;
    let graph = pipeline.graph_starting_from(args.resource.as_str());
    output::print_graph(&graph, format)
}
