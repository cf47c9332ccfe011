/* src/catalog/src/lib.rs */

// Core synchronization engine for locsync: nested-document codec, flat
// dotted-key catalogs, divergence detection, change staging, and
// placeholder-safe machine translation support. No I/O lives here; the CLI
// crate owns files, prompts, and the provider call.

mod diff;
mod error;
mod keypath;
mod merge;
mod placeholder;
mod store;

pub mod sheet;

pub use diff::{DiffReport, diff};
pub use error::CatalogError;
pub use keypath::{flatten, unflatten};
pub use merge::{GapFill, StagedImport, plan_gap_fill, stage_reviewed};
pub use placeholder::{PlaceholderMap, protect, restore, translate_with};
pub use store::{Catalog, CatalogSet, ChangeSet, ReviewRow};

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  // -- Integration tests spanning multiple sub-modules --

  #[test]
  fn gap_fill_pipeline_end_to_end() {
    // Base catalog owns a.b; FR lacks it entirely.
    let en = flatten(&json!({ "a": { "b": "Hello" } })).unwrap();
    let mut set = CatalogSet::new("EN", vec!["EN".into(), "FR".into()]).unwrap();
    set.set_catalog("EN", en).unwrap();

    let report = diff(&set);
    assert!(report.ensure_base_owns_all().is_ok());
    assert_eq!(report.missing_per_locale.get("a.b"), Some(&vec!["FR".to_string()]));

    // Plan, "translate" through the placeholder adapter, stage, apply.
    let plan = plan_gap_fill(&set, &report);
    assert_eq!(plan.len(), 1);
    let mut changes = ChangeSet::default();
    for item in &plan {
      let translated =
        translate_with(&item.source, |_| Ok::<_, ()>("Bonjour".to_string())).unwrap();
      changes.stage(&item.locale, &item.key, translated);
    }
    assert_eq!(
      changes.for_locale("FR").and_then(|c| c.get("a.b")).map(String::as_str),
      Some("Bonjour")
    );
    set.apply(&changes);

    // Catalogs converge and the FR document rebuilds nested.
    assert!(diff(&set).is_clean());
    let fr_doc = unflatten(set.catalog("FR").unwrap()).unwrap();
    assert_eq!(fr_doc, json!({ "a": { "b": "Bonjour" } }));
  }

  #[test]
  fn reviewed_sheet_pipeline_end_to_end() {
    let mut set =
      CatalogSet::new("EN", vec!["EN".into(), "FR".into(), "NL".into()]).unwrap();
    set.set_catalog("EN", flatten(&json!({ "a": { "b": "Hello" } })).unwrap()).unwrap();
    set.set_catalog("NL", flatten(&json!({ "a": { "b": "Hoi" } })).unwrap()).unwrap();

    // Sheet round trip: render what we have, parse it back as reviewed.
    let csv = sheet::render(&sheet::to_rows(&set), set.locales());
    let mut rows = sheet::parse(&csv, set.locales()).unwrap();
    rows[0].set_value("NL", "Hallo");

    let staged = stage_reviewed(&rows, &set);
    assert!(staged.unknown_keys.is_empty());
    assert_eq!(staged.changes.count("EN"), 0);
    assert_eq!(staged.changes.count("FR"), 0);
    assert_eq!(staged.changes.count("NL"), 1);

    set.apply(&staged.changes);
    assert_eq!(set.value("NL", "a.b"), Some("Hallo"));

    // Idempotence: the same rows stage nothing the second time.
    assert!(stage_reviewed(&rows, &set).changes.is_empty());
  }
}
