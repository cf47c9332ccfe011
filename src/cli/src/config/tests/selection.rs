/* src/cli/src/config/tests/selection.rs */

use super::{FULL, parse};

const TWO_SETS: &str = r#"
[project]
name = "multi"

[[set]]
label = "Dashboard"
base = "EN"
locales = ["EN", "FR"]

[set.paths]
EN = "dashboard/en.json"
FR = "dashboard/fr.json"

[[set]]
label = "Portal"
base = "EN"
locales = ["EN", "NL"]

[set.paths]
EN = "portal/en.json"
NL = "portal/nl.json"
"#;

#[test]
fn lone_set_is_default() {
  let config = parse(FULL);
  let set = config.select_set(None).unwrap();
  assert_eq!(set.label, "Dashboard");
}

#[test]
fn label_selects_among_multiple() {
  let config = parse(TWO_SETS);
  assert_eq!(config.select_set(Some("Portal")).unwrap().label, "Portal");
  assert_eq!(config.select_set(Some("Dashboard")).unwrap().label, "Dashboard");
}

#[test]
fn multiple_sets_require_explicit_label() {
  let config = parse(TWO_SETS);
  let err = config.select_set(None).unwrap_err();
  assert!(err.to_string().contains("Dashboard, Portal"));
}

#[test]
fn unknown_label_lists_available() {
  let config = parse(TWO_SETS);
  let err = config.select_set(Some("Store")).unwrap_err();
  assert!(err.to_string().contains("available sets"));
}
