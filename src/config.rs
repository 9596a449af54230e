//! Runner configuration descriptor.
//!
//! The descriptor is a read-only snapshot of the options declared for a run.
//! It is loaded from JSON once at the boundary, so scalar-versus-list
//! decisions are made by serde and never by the builders.
use crate::error::OptionsError;
use crate::options::plugins::PluginSpec;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

/// A declared option value.
///
/// JSON `null` (or a missing field) is `Absent`, a string is `Scalar` and an
/// array of strings is `List`.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
#[serde(untagged)]
pub enum OptionValue {
    #[default]
    Absent,
    Scalar(String),
    List(Vec<String>),
}

impl OptionValue {
    pub fn is_absent(&self) -> bool {
        matches!(self, OptionValue::Absent)
    }

    /// Declared values in order; empty for `Absent`.
    pub fn values(&self) -> Vec<&str> {
        match self {
            OptionValue::Absent => Vec::new(),
            OptionValue::Scalar(value) => vec![value.as_str()],
            OptionValue::List(values) => values.iter().map(String::as_str).collect(),
        }
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        OptionValue::Scalar(value.to_string())
    }
}

impl From<Vec<&str>> for OptionValue {
    fn from(values: Vec<&str>) -> Self {
        OptionValue::List(values.into_iter().map(str::to_string).collect())
    }
}

/// Declared runner options for one overall invocation.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConfigDescriptor {
    #[serde(default, skip_serializing_if = "OptionValue::is_absent")]
    pub glue: OptionValue,
    #[serde(default, skip_serializing_if = "OptionValue::is_absent")]
    pub tags: OptionValue,
    #[serde(default, skip_serializing_if = "OptionValue::is_absent")]
    pub plugin: OptionValue,
    #[serde(default, skip_serializing_if = "OptionValue::is_absent")]
    pub format: OptionValue,
    #[serde(default, skip_serializing_if = "OptionValue::is_absent")]
    pub name: OptionValue,
    #[serde(default, skip_serializing_if = "OptionValue::is_absent")]
    pub junit: OptionValue,
    #[serde(default, skip_serializing_if = "OptionValue::is_absent")]
    pub snippets: OptionValue,
    #[serde(default, skip_serializing_if = "OptionValue::is_absent")]
    pub features: OptionValue,
}

impl ConfigDescriptor {
    /// Target of the first `rerun:` plugin declared in the descriptor.
    pub fn declared_rerun_file(&self) -> Option<String> {
        self.plugin
            .values()
            .into_iter()
            .map(PluginSpec::parse)
            .find(PluginSpec::is_rerun)
            .and_then(|spec| spec.target)
            .map(str::to_string)
    }
}

/// One independently schedulable feature file.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ExecutionUnit {
    /// Feature path as reported by feature discovery.
    pub path: String,
    /// Identifier unique within the session; used in artifact file names.
    pub id: String,
}

impl ExecutionUnit {
    pub fn new(path: impl Into<String>, id: impl Into<String>) -> Result<Self, OptionsError> {
        let unit = Self {
            path: path.into(),
            id: id.into(),
        };
        validate_unit(&unit)?;
        Ok(unit)
    }
}

/// Namespace for the temp artifacts of one overall invocation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionId(String);

impl SessionId {
    pub fn new(value: impl Into<String>) -> Result<Self, OptionsError> {
        let value = value.into();
        validate_file_token(&value, "session id")?;
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Load a descriptor from a JSON file.
pub fn load_config(path: &Path) -> Result<ConfigDescriptor> {
    let bytes = fs::read(path).with_context(|| format!("read config {}", path.display()))?;
    let config: ConfigDescriptor =
        serde_json::from_slice(&bytes).context("parse runner config JSON")?;
    validate_config(&config).with_context(|| format!("validate {}", path.display()))?;
    Ok(config)
}

/// Reject descriptors the runner could not make sense of.
pub fn validate_config(config: &ConfigDescriptor) -> Result<(), OptionsError> {
    for (label, value) in [("plugin", &config.plugin), ("format", &config.format)] {
        for raw in value.values() {
            if raw.trim().is_empty() {
                return Err(OptionsError::invalid_config(format!(
                    "{label} entries must be non-empty"
                )));
            }
            let spec = PluginSpec::parse(raw);
            if raw.contains(':') && spec.kind.is_empty() {
                return Err(OptionsError::invalid_config(format!(
                    "{label} entry {raw:?} has an empty kind"
                )));
            }
            if spec.is_rerun() && spec.target.is_none_or(|target| target.trim().is_empty()) {
                return Err(OptionsError::invalid_config(format!(
                    "{label} entry {raw:?} needs a rerun file target"
                )));
            }
            if spec.has_report_kind() && spec.target.is_some_and(|target| target.trim().is_empty())
            {
                return Err(OptionsError::invalid_config(format!(
                    "{label} entry {raw:?} needs a report target"
                )));
            }
        }
    }
    if config
        .features
        .values()
        .iter()
        .any(|feature| feature.trim().is_empty())
    {
        return Err(OptionsError::invalid_config(
            "features entries must be non-empty",
        ));
    }
    Ok(())
}

fn validate_unit(unit: &ExecutionUnit) -> Result<(), OptionsError> {
    if unit.path.trim().is_empty() {
        return Err(OptionsError::invalid_config("unit path must be non-empty"));
    }
    validate_file_token(&unit.id, "unit id")
}

// Session and unit ids are spliced into temp file names.
fn validate_file_token(value: &str, label: &str) -> Result<(), OptionsError> {
    if value.trim().is_empty() {
        return Err(OptionsError::invalid_config(format!(
            "{label} must be non-empty"
        )));
    }
    if value.contains(['/', '\\']) {
        return Err(OptionsError::invalid_config(format!(
            "{label} must not contain path separators (got {value:?})"
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
