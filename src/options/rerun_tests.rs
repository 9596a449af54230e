use super::{parse_rerun_file, without_rerun_plugin};
use crate::config::{ConfigDescriptor, ExecutionUnit, OptionValue, SessionId};
use crate::options::{OptionKey, RunScope, RuntimeOptions};
use std::path::PathBuf;

fn unit_options() -> RuntimeOptions {
    let config = ConfigDescriptor {
        glue: OptionValue::from("steps"),
        tags: OptionValue::from("@smoke"),
        plugin: OptionValue::from(vec!["html:out"]),
        features: OptionValue::from(vec!["dir/a.feature"]),
        ..ConfigDescriptor::default()
    };
    let session = SessionId::new("S1").expect("session id");
    let unit = ExecutionUnit::new("/abs/dir/a.feature", "F1").expect("unit");
    let scope = RunScope::unit(session, unit).with_temp_dir(PathBuf::from("/tmp"));
    RuntimeOptions::build(&config, &scope).expect("build")
}

fn strings(tokens: &[&str]) -> Vec<String> {
    tokens.iter().map(|token| token.to_string()).collect()
}

#[test]
fn rerun_drops_tags_and_rerun_plugin() {
    let argv = unit_options().rerun_argv("/abs/dir/a.feature:12");
    assert_eq!(
        argv,
        vec![
            "--glue",
            "steps",
            "--plugin",
            "html:out",
            "--plugin",
            "html:/tmp/S1_thread_report_F1.html",
            "/abs/dir/a.feature:12",
        ]
    );
}

#[test]
fn rerun_has_exactly_one_positional_scenario() {
    let options = unit_options();
    let entries = options.rerun_entries("/abs/dir/a.feature:3:9");
    let features: Vec<_> = entries
        .iter()
        .filter(|entry| entry.key == OptionKey::Features)
        .collect();
    assert_eq!(features.len(), 1);
    assert_eq!(features[0].tokens, vec!["/abs/dir/a.feature:3:9"]);
    assert!(!entries.iter().any(|entry| entry.key == OptionKey::Tags));
}

#[test]
fn rerun_leaves_full_run_untouched() {
    let options = unit_options();
    let before = options.argv();
    let _ = options.rerun_argv("/abs/dir/a.feature:12");
    assert_eq!(options.argv(), before);
    assert!(before.iter().any(|token| token == "--tags"));
}

#[test]
fn missing_rerun_plugin_removes_nothing() {
    let tokens = strings(&["--plugin", "pretty", "--plugin", "html:out"]);
    assert_eq!(without_rerun_plugin(&tokens), tokens);
}

#[test]
fn rerun_plugin_pair_is_removed_wherever_it_sits() {
    let tokens = strings(&["--plugin", "rerun:r.txt", "--plugin", "pretty"]);
    assert_eq!(without_rerun_plugin(&tokens), strings(&["--plugin", "pretty"]));

    let only = strings(&["--plugin", "rerun:r.txt"]);
    assert!(without_rerun_plugin(&only).is_empty());
}

#[test]
fn rerun_without_plugins_emits_no_plugin_flag() {
    let config = ConfigDescriptor {
        features: OptionValue::from("features"),
        ..ConfigDescriptor::default()
    };
    let session = SessionId::new("S1").expect("session id");
    let options =
        RuntimeOptions::build(&config, &RunScope::single_process(session)).expect("build");
    assert_eq!(
        options.argv(),
        vec!["--plugin", "rerun:target/courgette-rerun.txt", "features"]
    );
    assert_eq!(options.rerun_argv("features/a.feature:4"), vec!["features/a.feature:4"]);
}

#[test]
fn rerun_file_content_splits_on_whitespace() {
    let scenarios = parse_rerun_file("features/a.feature:3:7\nfeatures/b.feature:2 features/c.feature:9\n\n")
        .expect("parse rerun file");
    let rendered: Vec<String> = scenarios.iter().map(ToString::to_string).collect();
    assert_eq!(
        rendered,
        vec![
            "features/a.feature:3:7",
            "features/b.feature:2",
            "features/c.feature:9",
        ]
    );
    assert!(parse_rerun_file("  \n").expect("empty").is_empty());
    assert!(parse_rerun_file("features/a.feature").is_err());
}
