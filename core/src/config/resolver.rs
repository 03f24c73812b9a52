//! Named-input resolution for a gate run.
//!
//! Inputs are declared per gate as an [`InputSpec`] table and resolved from
//! an explicit environment snapshot, never from ambient `std::env` reads.
//! Blank values count as absent. An input without a default is required; a
//! missing required input aborts the run before any probe executes.

use std::collections::BTreeMap;

use crate::errors::ConfigError;

pub type EnvMap = BTreeMap<String, String>;

#[derive(Clone, Copy, Debug)]
pub struct InputSpec {
    /// Report-facing name, the key in the report's `inputs` mapping.
    pub name: &'static str,
    /// Environment variable (and `gatecheck.toml` `[inputs]` key).
    pub key: &'static str,
    /// `None` makes the input required.
    pub default: Option<&'static str>,
}

pub fn snapshot_env() -> EnvMap {
    std::env::vars().collect()
}

/// Layer the optional `gatecheck.toml` `[inputs]` table under the
/// environment snapshot. Environment wins.
pub fn layered(env: &EnvMap) -> Result<EnvMap, ConfigError> {
    let mut merged = super::file_defaults()?;
    for (k, v) in env {
        merged.insert(k.clone(), v.clone());
    }
    Ok(merged)
}

pub fn resolve(specs: &[InputSpec], env: &EnvMap) -> Result<BTreeMap<String, String>, ConfigError> {
    let mut resolved = BTreeMap::new();
    for spec in specs {
        let value = env
            .get(spec.key)
            .map(String::as_str)
            .filter(|v| !v.trim().is_empty())
            .or(spec.default);
        match value {
            Some(v) => {
                resolved.insert(spec.name.to_string(), v.to_string());
            }
            None => return Err(ConfigError::Missing(spec.key.to_string())),
        }
    }
    Ok(resolved)
}

/// Usage text for the error stream when configuration fails.
pub fn usage(gate: &str, specs: &[InputSpec]) -> String {
    let mut out = format!(
        "usage: gatecheck {gate}\n\ninputs (environment, or [inputs] in gatecheck.toml):\n"
    );
    for spec in specs {
        match spec.default {
            Some(default) => {
                out.push_str(&format!("  {:<24} optional, default \"{}\"\n", spec.key, default));
            }
            None => {
                out.push_str(&format!("  {:<24} required\n", spec.key));
            }
        }
    }
    out
}
