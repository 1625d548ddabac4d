// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Tarmac Contributors

//! Reachability graph resolved from a classified pipeline.
//!
//! Nodes live in arenas owned by the [`Graph`]; `output_by` and
//! `triggered_by` are id back-references resolved through the arena,
//! never owning links. Resolution is single-threaded depth-first
//! descent over the read-only indices and always terminates: jobs are
//! deduplicated through the job index, and a resource with a canonical
//! producer is not re-expanded once it has been reached as an output.

use crate::classify::Indices;
use crate::name::{JobName, ResourceName};
use serde::Serialize;
use std::collections::HashMap;

/// Handle to a resource node in a [`Graph`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ResourceNodeId(usize);

/// Handle to a job node in a [`Graph`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct JobNodeId(usize);

/// An instance of a resource in the resolved graph.
#[derive(Debug, Serialize)]
pub struct ResourceNode {
    pub name: ResourceName,
    /// Job that produced this instance, if it was reached as an output.
    pub output_by: Option<JobNodeId>,
    /// Gate this instance has cleared; non-empty only on passthrough
    /// nodes synthesized behind a satisfied midtrigger.
    pub passed: Vec<JobName>,
    pub triggered_jobs: Vec<JobNodeId>,
}

/// A job reachable in the resolved graph. At most one node per job name.
#[derive(Debug, Serialize)]
pub struct JobNode {
    pub name: JobName,
    /// Resource instances that fired this job on some path. Lookups
    /// only; never followed during traversal.
    pub triggered_by: Vec<ResourceNodeId>,
    /// Inputs the job consumes beyond the ones that fired it.
    pub also_needs: Vec<ResourceName>,
    pub outputs: Vec<ResourceNodeId>,
}

/// Dependency graph rooted at one resource.
#[derive(Debug, Serialize)]
pub struct Graph {
    start: ResourceNodeId,
    resources: Vec<ResourceNode>,
    jobs: Vec<JobNode>,
    job_index: HashMap<JobName, JobNodeId>,
}

impl Graph {
    /// The root resource node resolution started from.
    pub fn start(&self) -> ResourceNodeId {
        self.start
    }

    pub fn resource(&self, id: ResourceNodeId) -> &ResourceNode {
        &self.resources[id.0]
    }

    pub fn job(&self, id: JobNodeId) -> &JobNode {
        &self.jobs[id.0]
    }

    /// Look a job up by name; every reachable job is registered exactly
    /// once.
    pub fn job_named(&self, name: &JobName) -> Option<JobNodeId> {
        self.job_index.get(name).copied()
    }

    pub fn jobs(&self) -> impl Iterator<Item = (JobNodeId, &JobNode)> {
        self.jobs.iter().enumerate().map(|(i, j)| (JobNodeId(i), j))
    }

    pub fn resources(&self) -> impl Iterator<Item = (ResourceNodeId, &ResourceNode)> {
        self.resources
            .iter()
            .enumerate()
            .map(|(i, r)| (ResourceNodeId(i), r))
    }

    pub fn job_count(&self) -> usize {
        self.jobs.len()
    }

    pub fn resource_count(&self) -> usize {
        self.resources.len()
    }
}

/// Resolve the graph reachable from `start` against `indices`.
pub(crate) fn resolve(indices: &Indices, start: ResourceName) -> Graph {
    tracing::debug!(resource = %start, "resolving graph");
    let mut resolver = Resolver {
        indices,
        resources: Vec::new(),
        jobs: Vec::new(),
        job_index: HashMap::new(),
    };
    let root = resolver.alloc_resource(start, None, Vec::new());
    resolver.resolve_resource(root);
    resolver.finish(root)
}

struct Resolver<'a> {
    indices: &'a Indices,
    resources: Vec<ResourceNode>,
    jobs: Vec<JobNode>,
    job_index: HashMap<JobName, JobNodeId>,
}

impl Resolver<'_> {
    fn alloc_resource(
        &mut self,
        name: ResourceName,
        output_by: Option<JobNodeId>,
        passed: Vec<JobName>,
    ) -> ResourceNodeId {
        let id = ResourceNodeId(self.resources.len());
        self.resources.push(ResourceNode {
            name,
            output_by,
            passed,
            triggered_jobs: Vec::new(),
        });
        id
    }

    fn resolve_resource(&mut self, rid: ResourceNodeId) {
        let name = self.resources[rid.0].name.clone();

        // A resource with a canonical producer that was itself reached
        // as an output is already explained elsewhere in the graph;
        // expanding it again would recurse forever on cyclic
        // declarations.
        if self.indices.producer_of(&name).is_some() && self.resources[rid.0].output_by.is_some() {
            return;
        }

        let entrypoints = self.indices.entrypoints_of(&name).to_vec();
        for entrypoint in entrypoints {
            let jid = self.resolve_job(entrypoint.triggered_job, rid);
            self.resources[rid.0].triggered_jobs.push(jid);
        }

        // Decide which midtriggers are satisfied by a job already
        // attached to this node before applying any of them, so one
        // gate's passthrough does not feed another gate on the same
        // resource.
        let midtriggers = self.indices.midtriggers_of(&name).to_vec();
        let satisfied: Vec<Option<JobNodeId>> = midtriggers
            .iter()
            .map(|mt| {
                self.resources[rid.0]
                    .triggered_jobs
                    .iter()
                    .copied()
                    .find(|jid| mt.passed.iter().any(|p| *p == self.jobs[jid.0].name))
            })
            .collect();

        for (mt, satisfying) in midtriggers.into_iter().zip(satisfied) {
            match satisfying {
                Some(gate) => {
                    // The resource re-appears, annotated with the gate it
                    // cleared, as an output of the gating job.
                    let shadow = self.alloc_resource(name.clone(), Some(gate), mt.passed.clone());
                    self.jobs[gate.0].outputs.push(shadow);
                    let jid = self.resolve_job(mt.triggered_job, shadow);
                    self.resources[shadow.0].triggered_jobs.push(jid);
                }
                None => {
                    // None of this node's own jobs clears the gate: it
                    // must be satisfied upstream. Attach the gated job
                    // here instead. Exact for single-stage gates only;
                    // deeper chains are approximated.
                    let jid = self.resolve_job(mt.triggered_job, rid);
                    self.resources[rid.0].triggered_jobs.push(jid);
                }
            }
        }
    }

    fn resolve_job(&mut self, name: JobName, triggered_by: ResourceNodeId) -> JobNodeId {
        if let Some(&jid) = self.job_index.get(&name) {
            // Outputs are expanded once; a rediscovered job only gains
            // the new incoming edge.
            if !self.jobs[jid.0].triggered_by.contains(&triggered_by) {
                self.jobs[jid.0].triggered_by.push(triggered_by);
            }
            return jid;
        }

        let jid = JobNodeId(self.jobs.len());
        self.jobs.push(JobNode {
            name: name.clone(),
            triggered_by: vec![triggered_by],
            also_needs: Vec::new(),
            outputs: Vec::new(),
        });
        // Register before expanding outputs: a byproduct that re-triggers
        // this job must find it in the index.
        self.job_index.insert(name.clone(), jid);

        let byproducts = self.indices.byproducts_of(&name).to_vec();
        for resource in byproducts {
            let rid = self.alloc_resource(resource, Some(jid), Vec::new());
            self.jobs[jid.0].outputs.push(rid);
            self.resolve_resource(rid);
        }
        jid
    }

    fn finish(mut self, start: ResourceNodeId) -> Graph {
        // also_needs falls out of the final triggered_by sets: everything
        // the job consumes minus whatever fired it on some path, in
        // input declaration order.
        for jid in 0..self.jobs.len() {
            let fired_by: Vec<ResourceName> = self.jobs[jid]
                .triggered_by
                .iter()
                .map(|rid| self.resources[rid.0].name.clone())
                .collect();
            let also_needs: Vec<ResourceName> = self
                .indices
                .inputs_of(&self.jobs[jid].name)
                .iter()
                .filter(|input| !fired_by.contains(*input))
                .cloned()
                .collect();
            self.jobs[jid].also_needs = also_needs;
        }
        Graph {
            start,
            resources: self.resources,
            jobs: self.jobs,
            job_index: self.job_index,
        }
    }
}

#[cfg(test)]
#[path = "graph_tests.rs"]
mod tests;
