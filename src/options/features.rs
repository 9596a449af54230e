//! Feature path resolution and scenario references.
use crate::error::{OptionsError, Result};
use regex::Regex;
use std::fmt;

/// Resolve a unit's feature reference against the configured feature paths.
///
/// `reference` looks like `<dirFragment>/<rest>`. The first configured path
/// containing `dirFragment` replaces the fragment and the caller's `/<rest>`
/// is kept as-is. A trailing `:<line>` selector on the configured path is
/// dropped. References with no leading directory fragment are already
/// resolved and come back unchanged.
pub fn resolve_feature_path(reference: &str, configured: &[&str]) -> Result<String> {
    let Some((fragment, rest)) = reference.split_once('/') else {
        return Ok(reference.to_string());
    };
    if fragment.is_empty() {
        return Ok(reference.to_string());
    }

    let selector = Regex::new(r"(?::\d+)+$").expect("regex for line selectors");
    for candidate in configured {
        if candidate.contains(fragment) {
            let prefix = selector.replace(candidate, "");
            let prefix = prefix.trim_end_matches('/');
            let resolved = format!("{prefix}/{rest}");
            tracing::debug!(reference, resolved = %resolved, "resolved feature path");
            return Ok(resolved);
        }
    }

    Err(OptionsError::UnresolvedFeature {
        reference: reference.to_string(),
        fragment: fragment.to_string(),
    })
}

/// A `<featurePath>:<line>[:<line>...]` selector for specific scenarios.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioRef {
    pub path: String,
    pub lines: Vec<u32>,
    literal: String,
}

impl ScenarioRef {
    pub fn parse(raw: &str) -> Result<Self> {
        let pattern = Regex::new(r"^(?P<path>.+?)(?P<lines>(?::\d+)+)$")
            .expect("regex for scenario references");
        let raw = raw.trim();
        let caps = pattern
            .captures(raw)
            .ok_or_else(|| OptionsError::InvalidScenarioRef(raw.to_string()))?;

        let path = caps["path"].to_string();
        let mut lines = Vec::new();
        for line in caps["lines"].split(':').filter(|part| !part.is_empty()) {
            let line: u32 = line
                .parse()
                .map_err(|_| OptionsError::InvalidScenarioRef(raw.to_string()))?;
            lines.push(line);
        }
        Ok(Self {
            path,
            lines,
            literal: raw.to_string(),
        })
    }

    /// The reference exactly as supplied, minus surrounding whitespace.
    pub fn as_str(&self) -> &str {
        &self.literal
    }
}

impl fmt::Display for ScenarioRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.literal)
    }
}

#[cfg(test)]
#[path = "features_tests.rs"]
mod tests;
