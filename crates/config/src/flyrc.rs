// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Tarmac Contributors

//! Fly CLI target configuration (`~/.flyrc`).
//!
//! Targets name a control-plane endpoint, a team, and an optional
//! bearer token. Only the fields the fetch needs are decoded.

use crate::atc::AtcError;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

/// One resolved fly target.
#[derive(Debug, Clone)]
pub struct FlyTarget {
    pub name: String,
    pub api: String,
    pub team: String,
    pub token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct FlyRc {
    #[serde(default)]
    targets: BTreeMap<String, RawTarget>,
}

#[derive(Debug, Deserialize)]
struct RawTarget {
    api: String,
    #[serde(default = "default_team")]
    team: String,
    token: Option<RawToken>,
}

#[derive(Debug, Deserialize)]
struct RawToken {
    value: String,
}

fn default_team() -> String {
    "main".to_string()
}

/// Resolve `name` against `~/.flyrc`.
pub fn load_target(name: &str) -> Result<FlyTarget, AtcError> {
    let Some(home) = dirs::home_dir() else {
        return Err(AtcError::NoHome);
    };
    load_target_from(&home.join(".flyrc"), name)
}

/// Resolve `name` against an explicit flyrc file.
pub fn load_target_from(path: &Path, name: &str) -> Result<FlyTarget, AtcError> {
    let content = std::fs::read_to_string(path).map_err(|source| AtcError::FlyrcRead {
        path: path.display().to_string(),
        source,
    })?;
    let rc: FlyRc = serde_yaml::from_str(&content)?;
    let Some(target) = rc.targets.get(name) else {
        return Err(AtcError::UnknownTarget(name.to_string()));
    };
    Ok(FlyTarget {
        name: name.to_string(),
        api: target.api.trim_end_matches('/').to_string(),
        team: target.team.clone(),
        token: target.token.as_ref().map(|t| t.value.clone()),
    })
}

#[cfg(test)]
#[path = "flyrc_tests.rs"]
mod tests;
