//! Rerun invocations for failed scenarios.
//!
//! A rerun targets explicit scenarios instead of a tag expression, and must
//! not write another rerun file that would reference itself.
use super::features::ScenarioRef;
use super::plugins::PluginSpec;
use super::{flatten, OptionEntry, OptionKey, RuntimeOptions};
use crate::error::Result;

impl RuntimeOptions {
    /// Option entries for rerunning `scenario` with this run's settings.
    pub fn rerun_entries(&self, scenario: &str) -> Vec<OptionEntry> {
        let mut entries = Vec::with_capacity(self.entries().len());
        for entry in self.entries() {
            match entry.key {
                OptionKey::Tags | OptionKey::Features => {}
                OptionKey::Plugin => {
                    let tokens = without_rerun_plugin(&entry.tokens);
                    if !tokens.is_empty() {
                        entries.push(OptionEntry {
                            key: OptionKey::Plugin,
                            tokens,
                        });
                    }
                }
                _ => entries.push(entry.clone()),
            }
        }
        entries.push(OptionEntry {
            key: OptionKey::Features,
            tokens: vec![scenario.to_string()],
        });
        entries
    }

    /// Flattened argument vector for rerunning `scenario`.
    pub fn rerun_argv(&self, scenario: &str) -> Vec<String> {
        flatten(&self.rerun_entries(scenario))
    }
}

// Drops the rerun plugin value together with the flag token preceding it.
// Without a rerun plugin nothing is removed.
fn without_rerun_plugin(tokens: &[String]) -> Vec<String> {
    let position = tokens
        .iter()
        .position(|token| PluginSpec::parse(token).is_rerun());
    match position {
        Some(index) if index > 0 => tokens
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != index && *i != index - 1)
            .map(|(_, token)| token.clone())
            .collect(),
        _ => {
            tracing::debug!("no rerun plugin to remove");
            tokens.to_vec()
        }
    }
}

/// Parse rerun file content into scenario references.
///
/// Entries are separated by whitespace; blank content yields no scenarios.
pub fn parse_rerun_file(content: &str) -> Result<Vec<ScenarioRef>> {
    content.split_whitespace().map(ScenarioRef::parse).collect()
}

#[cfg(test)]
#[path = "rerun_tests.rs"]
mod tests;
