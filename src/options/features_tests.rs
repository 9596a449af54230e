use super::{resolve_feature_path, ScenarioRef};
use crate::error::OptionsError;

#[test]
fn replaces_directory_fragment_with_configured_path() {
    let configured = ["src/test/resources/features"];
    assert_eq!(
        resolve_feature_path("features/login.feature", &configured).expect("resolve"),
        "src/test/resources/features/login.feature"
    );
}

#[test]
fn keeps_line_selector_suffix() {
    let configured = ["src/test/resources/features"];
    assert_eq!(
        resolve_feature_path("features/login.feature:12:30", &configured).expect("resolve"),
        "src/test/resources/features/login.feature:12:30"
    );
}

#[test]
fn first_matching_configured_path_wins() {
    let configured = ["other/specs", "a/features", "b/features"];
    assert_eq!(
        resolve_feature_path("features/x.feature", &configured).expect("resolve"),
        "a/features/x.feature"
    );
}

#[test]
fn whole_configured_path_is_the_prefix() {
    let configured = ["classpath:features/smoke"];
    assert_eq!(
        resolve_feature_path("features/login.feature", &configured).expect("resolve"),
        "classpath:features/smoke/login.feature"
    );
}

#[test]
fn line_selector_on_configured_path_is_dropped() {
    let configured = ["src/features:4", "src/features/"];
    assert_eq!(
        resolve_feature_path("features/a.feature", &configured).expect("resolve"),
        "src/features/a.feature"
    );
    assert_eq!(
        resolve_feature_path("features/a.feature", &configured[1..]).expect("resolve"),
        "src/features/a.feature"
    );
}

#[test]
fn absolute_and_bare_references_are_already_resolved() {
    let configured = ["dir/a.feature"];
    assert_eq!(
        resolve_feature_path("/abs/dir/a.feature", &configured).expect("resolve"),
        "/abs/dir/a.feature"
    );
    assert_eq!(
        resolve_feature_path("a.feature", &configured).expect("resolve"),
        "a.feature"
    );
}

#[test]
fn unmatched_fragment_is_an_error() {
    let err = resolve_feature_path("specs/a.feature", &["features"]).expect_err("no match");
    assert_eq!(
        err,
        OptionsError::UnresolvedFeature {
            reference: "specs/a.feature".to_string(),
            fragment: "specs".to_string(),
        }
    );
    assert!(resolve_feature_path("specs/a.feature", &[]).is_err());
}

#[test]
fn scenario_ref_parses_path_and_lines() {
    let scenario = ScenarioRef::parse("features/a.feature:3:17").expect("parse");
    assert_eq!(scenario.path, "features/a.feature");
    assert_eq!(scenario.lines, vec![3, 17]);
    assert_eq!(scenario.to_string(), "features/a.feature:3:17");
}

#[test]
fn scenario_ref_allows_colons_in_path() {
    let scenario = ScenarioRef::parse("C:/suite/a.feature:9").expect("parse");
    assert_eq!(scenario.path, "C:/suite/a.feature");
    assert_eq!(scenario.lines, vec![9]);
}

#[test]
fn scenario_ref_requires_a_line_number() {
    for raw in ["features/a.feature", "features/a.feature:", ":12", "a.feature:x"] {
        assert!(
            matches!(
                ScenarioRef::parse(raw),
                Err(OptionsError::InvalidScenarioRef(_))
            ),
            "{raw} should be rejected"
        );
    }
}

#[test]
fn scenario_ref_renders_the_literal_reference() {
    let scenario = ScenarioRef::parse("  features/a.feature:012 ").expect("parse");
    assert_eq!(scenario.lines, vec![12]);
    assert_eq!(scenario.as_str(), "features/a.feature:012");
    assert_eq!(scenario.to_string(), "features/a.feature:012");
}
