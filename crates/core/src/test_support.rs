// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Tarmac Contributors

//! Declaration builders shared across crates' tests.

use crate::decl::{InputDecl, JobDecl, OutputDecl, PipelineDecl};
use crate::name::{JobName, ResourceName};

/// Start a job declaration builder.
pub fn job(name: &str) -> JobDeclBuilder {
    JobDeclBuilder {
        name: JobName::new(name),
        inputs: Vec::new(),
        outputs: Vec::new(),
    }
}

/// Assemble a pipeline declaration from jobs.
pub fn pipeline(name: &str, jobs: Vec<JobDecl>) -> PipelineDecl {
    PipelineDecl {
        name: name.to_string(),
        jobs,
    }
}

pub struct JobDeclBuilder {
    name: JobName,
    inputs: Vec<InputDecl>,
    outputs: Vec<OutputDecl>,
}

impl JobDeclBuilder {
    /// Non-triggering input.
    pub fn get(mut self, resource: &str) -> Self {
        self.inputs.push(InputDecl {
            resource: ResourceName::new(resource),
            trigger: false,
            passed: Vec::new(),
        });
        self
    }

    /// Triggering input with no gate.
    pub fn trigger(mut self, resource: &str) -> Self {
        self.inputs.push(InputDecl {
            resource: ResourceName::new(resource),
            trigger: true,
            passed: Vec::new(),
        });
        self
    }

    /// Triggering input gated on `passed` jobs.
    pub fn gated(mut self, resource: &str, passed: &[&str]) -> Self {
        self.inputs.push(InputDecl {
            resource: ResourceName::new(resource),
            trigger: true,
            passed: passed.iter().map(JobName::new).collect(),
        });
        self
    }

    /// Declared output.
    pub fn put(mut self, resource: &str) -> Self {
        self.outputs.push(OutputDecl {
            resource: ResourceName::new(resource),
        });
        self
    }

    pub fn build(self) -> JobDecl {
        JobDecl {
            name: self.name,
            inputs: self.inputs,
            outputs: self.outputs,
        }
    }
}
