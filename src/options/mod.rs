//! Runner argument synthesis.
//!
//! Builds the ordered option entries for one run from a descriptor and a run
//! scope, then flattens them into the argument vector handed to the runner.
//! Unit-scoped runs get per-unit report and rerun artifacts so many units can
//! execute concurrently against one temp directory.
pub mod features;
pub mod parser;
pub mod paths;
pub mod plugins;
pub mod reports;
pub mod rerun;

use crate::config::{ConfigDescriptor, ExecutionUnit, SessionId};
use crate::error::Result;
use features::resolve_feature_path;
use parser::{parse_option, parse_values};
use paths::ArtifactPaths;
use plugins::{rewrite_formats, rewrite_plugins};
use std::path::PathBuf;

/// Option slots in flattening order. `Features` is positional.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum OptionKey {
    Glue,
    Tags,
    Plugin,
    Format,
    Name,
    Junit,
    Snippets,
    Features,
}

impl OptionKey {
    /// Runner flag for this slot; `None` for the positional feature paths.
    pub fn flag(self) -> Option<&'static str> {
        match self {
            OptionKey::Glue => Some("--glue"),
            OptionKey::Tags => Some("--tags"),
            OptionKey::Plugin => Some("--plugin"),
            OptionKey::Format => Some("--format"),
            OptionKey::Name => Some("--name"),
            OptionKey::Junit => Some("--junit"),
            OptionKey::Snippets => Some("--snippets"),
            OptionKey::Features => None,
        }
    }
}

/// One flattened option slot: its key and the tokens it contributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionEntry {
    pub key: OptionKey,
    pub tokens: Vec<String>,
}

/// Where a run executes: one process for everything, or a single unit.
#[derive(Debug, Clone)]
pub struct RunScope {
    session: SessionId,
    unit: Option<ExecutionUnit>,
    temp_dir: PathBuf,
}

impl RunScope {
    /// Scope for a run that covers every feature in one process.
    pub fn single_process(session: SessionId) -> Self {
        Self {
            session,
            unit: None,
            temp_dir: std::env::temp_dir(),
        }
    }

    /// Scope for a run restricted to one execution unit.
    pub fn unit(session: SessionId, unit: ExecutionUnit) -> Self {
        Self {
            session,
            unit: Some(unit),
            temp_dir: std::env::temp_dir(),
        }
    }

    /// Place per-unit artifacts under `temp_dir` instead of the system default.
    pub fn with_temp_dir(mut self, temp_dir: PathBuf) -> Self {
        self.temp_dir = temp_dir;
        self
    }

    pub fn session(&self) -> &SessionId {
        &self.session
    }

    pub fn execution_unit(&self) -> Option<&ExecutionUnit> {
        self.unit.as_ref()
    }

    /// Per-unit artifact paths; `None` outside unit scope.
    pub fn artifact_paths(&self) -> Option<ArtifactPaths> {
        self.unit
            .as_ref()
            .map(|unit| ArtifactPaths::new(&self.temp_dir, &self.session, &unit.id))
    }
}

/// Runner options synthesized for one scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeOptions {
    entries: Vec<OptionEntry>,
    rerun_file: String,
}

impl RuntimeOptions {
    /// Build the full option set for a fresh run.
    pub fn build(config: &ConfigDescriptor, scope: &RunScope) -> Result<Self> {
        let unit_paths = scope.artifact_paths();
        let plugins = rewrite_plugins(&config.plugin.values(), unit_paths.as_ref());
        let formats = rewrite_formats(&config.format.values(), unit_paths.as_ref());

        let features = match scope.execution_unit() {
            Some(unit) => vec![resolve_feature_path(&unit.path, &config.features.values())?],
            None => config
                .features
                .values()
                .into_iter()
                .map(str::to_string)
                .collect(),
        };

        let slots = [
            (OptionKey::Glue, parse_option(OptionKey::Glue.flag(), &config.glue)),
            (OptionKey::Tags, parse_option(OptionKey::Tags.flag(), &config.tags)),
            (
                OptionKey::Plugin,
                parse_values(OptionKey::Plugin.flag(), &plugins.plugins),
            ),
            (
                OptionKey::Format,
                parse_values(OptionKey::Format.flag(), &formats),
            ),
            (OptionKey::Name, parse_option(OptionKey::Name.flag(), &config.name)),
            (OptionKey::Junit, parse_option(OptionKey::Junit.flag(), &config.junit)),
            (
                OptionKey::Snippets,
                parse_option(OptionKey::Snippets.flag(), &config.snippets),
            ),
            (OptionKey::Features, parse_values(None, &features)),
        ];

        let entries = slots
            .into_iter()
            .filter(|(_, tokens)| !tokens.is_empty())
            .map(|(key, tokens)| OptionEntry { key, tokens })
            .collect();

        tracing::debug!(
            session = %scope.session(),
            unit = scope.execution_unit().map(|unit| unit.id.as_str()),
            rerun_file = %plugins.rerun_file,
            "built runtime options"
        );

        Ok(Self {
            entries,
            rerun_file: plugins.rerun_file,
        })
    }

    pub fn entries(&self) -> &[OptionEntry] {
        &self.entries
    }

    /// File the runner records failed scenarios in for this scope.
    pub fn rerun_file(&self) -> &str {
        &self.rerun_file
    }

    /// Flattened argument vector for the runner.
    pub fn argv(&self) -> Vec<String> {
        flatten(&self.entries)
    }

    /// Report artifacts this run will produce, in declaration order.
    pub fn report_files(&self) -> Vec<String> {
        reports::collect_report_files(&self.argv())
    }
}

/// Concatenate entry tokens in key order.
pub fn flatten(entries: &[OptionEntry]) -> Vec<String> {
    let mut ordered: Vec<&OptionEntry> = entries.iter().collect();
    ordered.sort_by_key(|entry| entry.key);
    ordered
        .into_iter()
        .flat_map(|entry| entry.tokens.iter().cloned())
        .collect()
}

#[cfg(test)]
#[path = "options_tests.rs"]
mod tests;
