//! Report artifact discovery from a finished argument vector.
use super::plugins::PluginSpec;

/// Sub-path of an html report directory holding the generated report script.
pub const HTML_REPORT_SCRIPT: &str = "report.js";

/// Report files produced by the runner for `argv`, in declaration order.
///
/// `html` targets are directories, so the report script inside them is
/// returned; `json` targets are returned as-is.
pub fn collect_report_files(argv: &[String]) -> Vec<String> {
    argv.iter()
        .map(|token| PluginSpec::parse(token))
        .filter(PluginSpec::is_report)
        .filter_map(|spec| {
            let target = spec.target?;
            Some(match spec.kind {
                "html" => format!("{}/{HTML_REPORT_SCRIPT}", target.trim_end_matches('/')),
                _ => target.to_string(),
            })
        })
        .collect()
}
