// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Tarmac Contributors

//! Output formatting: graph trees, classified-index listings, JSON DTOs.

use crate::color;
use clap::ValueEnum;
use serde::Serialize;
use std::collections::HashSet;
use tarmac_core::{Graph, Indices, JobNodeId, ResourceNodeId};

#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Format-branch helper: render `data` as JSON when `format` is `Json`,
/// otherwise call `text_fn`.
pub fn format_or_json<T: Serialize>(
    format: OutputFormat,
    data: &T,
    text_fn: impl FnOnce(),
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(data)?);
        }
        OutputFormat::Text => {
            text_fn();
        }
    }
    Ok(())
}

/// Nested DTO of a resolved graph for `--format json`.
///
/// Jobs reached through more than one resource are expanded at their
/// first occurrence only; later occurrences carry `repeated: true`.
#[derive(Debug, Serialize)]
pub struct ResourceDto {
    pub name: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub passed: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub triggered_jobs: Vec<JobDto>,
}

#[derive(Debug, Serialize)]
pub struct JobDto {
    pub name: String,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub repeated: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub also_needs: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub outputs: Vec<ResourceDto>,
}

/// Build the nested DTO rooted at the graph's start node.
pub fn graph_dto(graph: &Graph) -> ResourceDto {
    let mut seen = HashSet::new();
    resource_dto(graph, graph.start(), &mut seen)
}

fn resource_dto(graph: &Graph, id: ResourceNodeId, seen: &mut HashSet<JobNodeId>) -> ResourceDto {
    let node = graph.resource(id);
    ResourceDto {
        name: node.name.to_string(),
        passed: node.passed.iter().map(|p| p.to_string()).collect(),
        triggered_jobs: node
            .triggered_jobs
            .iter()
            .map(|&jid| job_dto(graph, jid, seen))
            .collect(),
    }
}

fn job_dto(graph: &Graph, id: JobNodeId, seen: &mut HashSet<JobNodeId>) -> JobDto {
    let node = graph.job(id);
    let repeated = !seen.insert(id);
    JobDto {
        name: node.name.to_string(),
        repeated,
        also_needs: node.also_needs.iter().map(|n| n.to_string()).collect(),
        outputs: if repeated {
            Vec::new()
        } else {
            node.outputs
                .iter()
                .map(|&rid| resource_dto(graph, rid, seen))
                .collect()
        },
    }
}

/// Pretty-print the graph as an indented resource/job tree.
pub fn print_graph(graph: &Graph, format: OutputFormat) -> anyhow::Result<()> {
    format_or_json(format, &graph_dto(graph), || {
        let mut seen = HashSet::new();
        print_resource(graph, graph.start(), 0, &mut seen);
    })
}

fn print_resource(graph: &Graph, id: ResourceNodeId, depth: usize, seen: &mut HashSet<JobNodeId>) {
    let node = graph.resource(id);
    let indent = "  ".repeat(depth);
    let mut line = format!("{}resource {}", indent, color::header(node.name.as_str()));
    if !node.passed.is_empty() {
        let passed: Vec<&str> = node.passed.iter().map(|p| p.as_str()).collect();
        line.push(' ');
        line.push_str(&color::context(&format!("(passed: {})", passed.join(", "))));
    }
    println!("{line}");
    for &jid in &node.triggered_jobs {
        print_job(graph, jid, depth + 1, seen);
    }
}

fn print_job(graph: &Graph, id: JobNodeId, depth: usize, seen: &mut HashSet<JobNodeId>) {
    let node = graph.job(id);
    let indent = "  ".repeat(depth);
    let mut line = format!("{}job {}", indent, color::literal(node.name.as_str()));
    if !node.also_needs.is_empty() {
        let needs: Vec<&str> = node.also_needs.iter().map(|n| n.as_str()).collect();
        line.push(' ');
        line.push_str(&color::context(&format!("(also needs: {})", needs.join(", "))));
    }
    if !seen.insert(id) {
        println!("{line} {}", color::context("(shown above)"));
        return;
    }
    println!("{line}");
    for &rid in &node.outputs {
        print_resource(graph, rid, depth + 1, seen);
    }
}

/// Pretty-print the classified indices of a pipeline.
pub fn print_indices(name: &str, indices: &Indices) {
    println!("pipeline {}", color::header(name));

    println!("\nentrypoints:");
    for (resource, entries) in indices.all_entrypoints() {
        for entry in entries {
            println!(
                "  {} -> {}",
                color::header(resource.as_str()),
                color::literal(entry.triggered_job.as_str())
            );
        }
    }

    println!("\nmidtriggers:");
    for (resource, entries) in indices.all_midtriggers() {
        for entry in entries {
            let passed: Vec<&str> = entry.passed.iter().map(|p| p.as_str()).collect();
            println!(
                "  {} -> {} {}",
                color::header(resource.as_str()),
                color::literal(entry.triggered_job.as_str()),
                color::context(&format!("(passed: {})", passed.join(", ")))
            );
        }
    }

    println!("\nproducts:");
    for (resource, job) in indices.all_products() {
        println!(
            "  {} <- {}",
            color::header(resource.as_str()),
            color::literal(job.as_str())
        );
    }

    println!("\nbyproducts:");
    for (job, resources) in indices.all_byproducts() {
        let names: Vec<&str> = resources.iter().map(|r| r.as_str()).collect();
        println!("  {}: {}", color::literal(job.as_str()), names.join(", "));
    }

    println!("\ninputs:");
    for (job, resources) in indices.all_inputs() {
        let names: Vec<&str> = resources.iter().map(|r| r.as_str()).collect();
        println!("  {}: {}", color::literal(job.as_str()), names.join(", "));
    }
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
