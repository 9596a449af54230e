//! Plugin and format rewriting.
//!
//! Report plugins write to a fixed file, so units running side by side would
//! overwrite each other's output. Unit-scoped runs get a per-unit copy of
//! every report plugin and a per-unit rerun file.
use super::paths::ArtifactPaths;

/// Runner's default rerun target when nothing else is declared.
pub const DEFAULT_RERUN_FILE: &str = "target/courgette-rerun.txt";

const REPORT_KINDS: [&str; 2] = ["html", "json"];
const RERUN_KIND: &str = "rerun";

/// A `<kind>:<target>` plugin specification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PluginSpec<'a> {
    pub kind: &'a str,
    pub target: Option<&'a str>,
}

impl<'a> PluginSpec<'a> {
    pub fn parse(raw: &'a str) -> Self {
        match raw.split_once(':') {
            Some((kind, target)) => Self {
                kind,
                target: Some(target),
            },
            None => Self {
                kind: raw,
                target: None,
            },
        }
    }

    /// `html:` and `json:` plugins write report files.
    pub fn is_report(&self) -> bool {
        self.target.is_some() && self.has_report_kind()
    }

    pub fn has_report_kind(&self) -> bool {
        REPORT_KINDS.contains(&self.kind)
    }

    pub fn is_rerun(&self) -> bool {
        self.kind == RERUN_KIND
    }
}

/// Rewritten plugin list plus the rerun file it now points at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginRewrite {
    pub plugins: Vec<String>,
    pub rerun_file: String,
}

/// Rewrite `--plugin` values so the result carries exactly one rerun plugin.
///
/// `unit_paths` is set for unit-scoped runs. A single-process run keeps the
/// first declared rerun plugin and falls back to [`DEFAULT_RERUN_FILE`].
/// Applying the rewrite to its own output returns the same list.
pub fn rewrite_plugins(declared: &[&str], unit_paths: Option<&ArtifactPaths>) -> PluginRewrite {
    let mut plugins = inject_report_paths(declared, unit_paths);

    let existing = plugins
        .iter()
        .map(|raw| PluginSpec::parse(raw))
        .find(PluginSpec::is_rerun)
        .map(|spec| spec.target.unwrap_or_default().to_string());

    let rerun_file = match existing {
        Some(target) => target,
        None => {
            let target = match unit_paths {
                Some(paths) => paths.rerun_file(),
                None => DEFAULT_RERUN_FILE.to_string(),
            };
            tracing::debug!(rerun_file = %target, "adding rerun plugin");
            plugins.push(format!("{RERUN_KIND}:{target}"));
            target
        }
    };

    PluginRewrite {
        plugins,
        rerun_file,
    }
}

/// Rewrite `--format` values. Formats get per-unit report copies but never a
/// synthesized rerun entry.
pub fn rewrite_formats(declared: &[&str], unit_paths: Option<&ArtifactPaths>) -> Vec<String> {
    inject_report_paths(declared, unit_paths)
}

fn inject_report_paths(declared: &[&str], unit_paths: Option<&ArtifactPaths>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(declared.len() + 1);
    let mut seen_rerun = false;

    for raw in declared {
        let raw = raw.trim();
        let spec = PluginSpec::parse(raw);

        if spec.is_rerun() {
            if seen_rerun {
                tracing::debug!(plugin = raw, "dropping duplicate rerun plugin");
                continue;
            }
            if let Some(paths) = unit_paths {
                if spec.target != Some(paths.rerun_file().as_str()) {
                    tracing::debug!(plugin = raw, "dropping shared rerun plugin for unit run");
                    continue;
                }
            }
            seen_rerun = true;
        }

        push_unique(&mut out, raw.to_string());

        if let Some(paths) = unit_paths.filter(|_| spec.is_report()) {
            let unit_report = format!("{}:{}", spec.kind, paths.report_file(spec.kind));
            push_unique(&mut out, unit_report);
        }
    }

    out
}

fn push_unique(out: &mut Vec<String>, entry: String) {
    if !out.contains(&entry) {
        out.push(entry);
    }
}

#[cfg(test)]
#[path = "plugins_tests.rs"]
mod tests;
