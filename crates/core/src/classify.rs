// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Tarmac Contributors

//! Classification of declared inputs and outputs into trigger and
//! product indices.
//!
//! Inputs split into entrypoints (trigger, no gate) and midtriggers
//! (trigger gated on upstream jobs); outputs split into byproducts
//! (every declared output) and products (the canonical producer of a
//! resource, recorded only when nothing consumes the resource through a
//! gate). All indices are derived once and read-only thereafter.

use crate::decl::PipelineDecl;
use crate::graph::{self, Graph};
use crate::name::{JobName, ResourceName};
use indexmap::IndexMap;
use serde::Serialize;

/// A resource-to-job trigger with no gating condition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entrypoint {
    pub resource: ResourceName,
    pub triggered_job: JobName,
}

/// A resource-to-job trigger gated by upstream jobs the resource
/// version must already have passed through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Midtrigger {
    pub resource: ResourceName,
    pub passed: Vec<JobName>,
    pub triggered_job: JobName,
}

/// Index structures derived once from a pipeline declaration.
///
/// Absent keys are not errors: a name with no entry reads as an empty
/// collection. A resource that appears nowhere in the declaration is
/// indistinguishable from one that is never triggered, and both yield
/// empty results without diagnostic.
#[derive(Debug, Default, Serialize)]
pub struct Indices {
    all_inputs_of_job: IndexMap<JobName, Vec<ResourceName>>,
    entrypoints: IndexMap<ResourceName, Vec<Entrypoint>>,
    midtriggers: IndexMap<ResourceName, Vec<Midtrigger>>,
    byproducts: IndexMap<JobName, Vec<ResourceName>>,
    products: IndexMap<ResourceName, JobName>,
}

impl Indices {
    /// Derive all indices from a declaration. Pure; no error conditions.
    pub fn classify(decl: &PipelineDecl) -> Self {
        let mut indices = Self::default();
        indices.fill_inputs(decl);
        indices.fill_outputs(decl);
        indices
    }

    fn fill_inputs(&mut self, decl: &PipelineDecl) {
        for job in &decl.jobs {
            let mut all_inputs = Vec::with_capacity(job.inputs.len());
            for input in &job.inputs {
                all_inputs.push(input.resource.clone());
                if !input.trigger {
                    // Consumed but never fires anything.
                    continue;
                }
                if input.passed.is_empty() {
                    self.entrypoints
                        .entry(input.resource.clone())
                        .or_default()
                        .push(Entrypoint {
                            resource: input.resource.clone(),
                            triggered_job: job.name.clone(),
                        });
                } else {
                    self.midtriggers
                        .entry(input.resource.clone())
                        .or_default()
                        .push(Midtrigger {
                            resource: input.resource.clone(),
                            passed: input.passed.clone(),
                            triggered_job: job.name.clone(),
                        });
                }
            }
            self.all_inputs_of_job.insert(job.name.clone(), all_inputs);
        }
    }

    fn fill_outputs(&mut self, decl: &PipelineDecl) {
        for job in &decl.jobs {
            for output in &job.outputs {
                // A gated resource re-appears downstream of its gate, not
                // as a flat product; keeping it out of the product index
                // leaves its gated consumers eligible for expansion.
                // Identity is name-only, so two jobs declaring the same
                // output collide: last writer wins.
                if !self.midtriggers.contains_key(&output.resource) {
                    self.products
                        .insert(output.resource.clone(), job.name.clone());
                }
                self.byproducts
                    .entry(job.name.clone())
                    .or_default()
                    .push(output.resource.clone());
            }
        }
    }

    /// Every declared input of `job`, triggering or not, in declaration
    /// order. Empty for an unknown job.
    pub fn inputs_of(&self, job: &JobName) -> &[ResourceName] {
        self.all_inputs_of_job
            .get(job)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Ungated triggers keyed by `resource`. Empty for an unknown name.
    pub fn entrypoints_of(&self, resource: &ResourceName) -> &[Entrypoint] {
        self.entrypoints
            .get(resource)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Gated triggers keyed by `resource`. Empty for an unknown name.
    pub fn midtriggers_of(&self, resource: &ResourceName) -> &[Midtrigger] {
        self.midtriggers
            .get(resource)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Every declared output of `job`, in declaration order.
    pub fn byproducts_of(&self, job: &JobName) -> &[ResourceName] {
        self.byproducts
            .get(job)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// The canonical producing job of `resource`, if it has one.
    pub fn producer_of(&self, resource: &ResourceName) -> Option<&JobName> {
        self.products.get(resource)
    }

    pub fn all_inputs(&self) -> &IndexMap<JobName, Vec<ResourceName>> {
        &self.all_inputs_of_job
    }

    pub fn all_entrypoints(&self) -> &IndexMap<ResourceName, Vec<Entrypoint>> {
        &self.entrypoints
    }

    pub fn all_midtriggers(&self) -> &IndexMap<ResourceName, Vec<Midtrigger>> {
        &self.midtriggers
    }

    pub fn all_byproducts(&self) -> &IndexMap<JobName, Vec<ResourceName>> {
        &self.byproducts
    }

    pub fn all_products(&self) -> &IndexMap<ResourceName, JobName> {
        &self.products
    }
}

/// A classified pipeline: the declaration plus its derived indices.
///
/// Built once per query; read-only for the rest of the process. Multiple
/// resolution runs may share one `Pipeline` without synchronization.
#[derive(Debug)]
pub struct Pipeline {
    name: String,
    decl: PipelineDecl,
    indices: Indices,
}

impl Pipeline {
    pub fn new(decl: PipelineDecl) -> Self {
        let indices = Indices::classify(&decl);
        Self {
            name: decl.name.clone(),
            decl,
            indices,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn decl(&self) -> &PipelineDecl {
        &self.decl
    }

    pub fn indices(&self) -> &Indices {
        &self.indices
    }

    /// Resolve the dependency graph reachable from `resource`.
    ///
    /// The graph is built fresh per call and owned by the caller.
    pub fn graph_starting_from(&self, resource: impl Into<ResourceName>) -> Graph {
        graph::resolve(&self.indices, resource.into())
    }
}

#[cfg(test)]
#[path = "classify_tests.rs"]
mod tests;
