// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Tarmac Contributors

//! Serde model of a raw Concourse-style pipeline configuration.
//!
//! Only the structure the analyzer cares about is modeled: resource
//! declarations and each job's plan, flattened into ordered input
//! (`get`) and output (`put`) lists. Everything else in a config
//! decodes inertly.

use serde::Deserialize;

/// Raw pipeline configuration as fetched or read from disk.
#[derive(Debug, Clone, Deserialize)]
pub struct RawConfig {
    #[serde(default)]
    pub resources: Vec<RawResource>,
    #[serde(default)]
    pub jobs: Vec<RawJob>,
}

/// One declared resource.
#[derive(Debug, Clone, Deserialize)]
pub struct RawResource {
    pub name: String,
    #[serde(rename = "type")]
    pub resource_type: String,
    /// Type-specific source configuration; opaque to the decoder.
    #[serde(default)]
    pub source: serde_json::Map<String, serde_json::Value>,
}

/// One declared job: a name and its plan.
#[derive(Debug, Clone, Deserialize)]
pub struct RawJob {
    pub name: String,
    #[serde(default)]
    pub plan: Vec<RawStep>,
}

/// One step of a job plan.
///
/// Concourse steps are maps distinguished by which key is present;
/// modeling them as one struct with optional fields keeps unknown step
/// types (task, set_pipeline, ...) inert instead of failing the decode.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawStep {
    pub get: Option<String>,
    pub put: Option<String>,
    /// Resource backing the step when it differs from the step name.
    pub resource: Option<String>,
    pub passed: Vec<String>,
    pub trigger: bool,
    #[serde(rename = "do")]
    pub do_steps: Option<Vec<RawStep>>,
    pub aggregate: Option<Vec<RawStep>>,
    pub in_parallel: Option<InParallel>,
    #[serde(rename = "try")]
    pub try_step: Option<Box<RawStep>>,
    pub on_success: Option<Box<RawStep>>,
    pub on_failure: Option<Box<RawStep>>,
    pub ensure: Option<Box<RawStep>>,
}

/// `in_parallel` accepts either a bare step list or a config object.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum InParallel {
    Steps(Vec<RawStep>),
    Config {
        #[serde(default)]
        steps: Vec<RawStep>,
    },
}

/// A `get` step flattened out of a job plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobInput {
    pub resource: String,
    pub trigger: bool,
    pub passed: Vec<String>,
}

/// A `put` step flattened out of a job plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobOutput {
    pub resource: String,
}

impl RawJob {
    /// Every `get` step of the plan, in declared order, recursing
    /// through aggregate steps and hooks.
    pub fn inputs(&self) -> Vec<JobInput> {
        let mut inputs = Vec::new();
        for step in &self.plan {
            step.collect_inputs(&mut inputs);
        }
        inputs
    }

    /// Every `put` step of the plan, in declared order.
    pub fn outputs(&self) -> Vec<JobOutput> {
        let mut outputs = Vec::new();
        for step in &self.plan {
            step.collect_outputs(&mut outputs);
        }
        outputs
    }
}

impl RawStep {
    fn collect_inputs(&self, acc: &mut Vec<JobInput>) {
        if let Some(name) = &self.get {
            acc.push(JobInput {
                resource: self.resource.clone().unwrap_or_else(|| name.clone()),
                trigger: self.trigger,
                passed: self.passed.clone(),
            });
        }
        for step in self.nested() {
            step.collect_inputs(acc);
        }
    }

    fn collect_outputs(&self, acc: &mut Vec<JobOutput>) {
        if let Some(name) = &self.put {
            acc.push(JobOutput {
                resource: self.resource.clone().unwrap_or_else(|| name.clone()),
            });
        }
        for step in self.nested() {
            step.collect_outputs(acc);
        }
    }

    /// Child steps in declaration order: aggregates first, then hooks.
    fn nested(&self) -> Vec<&RawStep> {
        let mut steps = Vec::new();
        if let Some(children) = &self.do_steps {
            steps.extend(children.iter());
        }
        if let Some(children) = &self.aggregate {
            steps.extend(children.iter());
        }
        match &self.in_parallel {
            Some(InParallel::Steps(children)) | Some(InParallel::Config { steps: children }) => {
                steps.extend(children.iter());
            }
            None => {}
        }
        for hook in [&self.try_step, &self.on_success, &self.on_failure, &self.ensure]
            .into_iter()
            .flatten()
        {
            steps.push(hook.as_ref());
        }
        steps
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
