/* src/catalog/src/merge.rs */

// Change staging. Updates are staged only where a value actually differs,
// which makes both operations idempotent: running the same input twice
// stages nothing the second time.

use crate::diff::DiffReport;
use crate::store::{CatalogSet, ChangeSet, ReviewRow};

/// Result of staging reviewed rows against the current catalogs.
#[derive(Debug, Clone, Default)]
pub struct StagedImport {
  pub changes: ChangeSet,
  /// Reviewed keys the base catalog does not own. Skipped, never staged.
  pub unknown_keys: Vec<String>,
}

/// Stage reviewed rows: an update is recorded iff the reviewed value is
/// non-empty and differs from the catalog's current value (a missing key
/// differs from any non-empty value). Empty reviewed values and equal
/// values never generate an update.
pub fn stage_reviewed(rows: &[ReviewRow], set: &CatalogSet) -> StagedImport {
  let mut staged = StagedImport::default();
  for row in rows {
    let base_owns = set.catalog(set.base()).is_some_and(|c| c.contains_key(&row.key));
    if !base_owns {
      staged.unknown_keys.push(row.key.clone());
      continue;
    }
    for locale in set.locales() {
      let reviewed = row.value(locale);
      if reviewed.is_empty() {
        continue;
      }
      if set.value(locale, &row.key) != Some(reviewed) {
        staged.changes.stage(locale, &row.key, reviewed);
      }
    }
  }
  staged.unknown_keys.sort();
  staged
}

/// One value to machine-translate: the base locale's text for a key that a
/// target locale is missing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GapFill {
  pub key: String,
  pub locale: String,
  pub source: String,
}

/// Plan gap-fill work from a diff report. Pairs where the locale is the base
/// locale, or where the base value is absent or empty, are left out; such
/// keys stay missing and the caller reports them as unresolved.
pub fn plan_gap_fill(set: &CatalogSet, report: &DiffReport) -> Vec<GapFill> {
  let mut plan = Vec::new();
  for (key, locales) in &report.missing_per_locale {
    let Some(source) = set.value(set.base(), key) else { continue };
    if source.is_empty() {
      continue;
    }
    for locale in locales {
      if locale != set.base() {
        plan.push(GapFill { key: key.clone(), locale: locale.clone(), source: source.to_string() });
      }
    }
  }
  plan
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::diff::diff;
  use crate::store::Catalog;

  fn set_from(base: &str, catalogs: &[(&str, &[(&str, &str)])]) -> CatalogSet {
    let locales = catalogs.iter().map(|(l, _)| (*l).to_string()).collect();
    let mut set = CatalogSet::new(base, locales).unwrap();
    for (locale, entries) in catalogs {
      let catalog: Catalog =
        entries.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect();
      set.set_catalog(locale, catalog).unwrap();
    }
    set
  }

  fn row(key: &str, values: &[(&str, &str)]) -> ReviewRow {
    let mut row = ReviewRow::new(key);
    for (locale, value) in values {
      row.set_value(locale, *value);
    }
    row
  }

  #[test]
  fn stages_only_real_differences() {
    // Reviewed row: EN unchanged, FR empty, NL differs.
    let set = set_from(
      "EN",
      &[("EN", &[("a.b", "Hello")]), ("FR", &[]), ("NL", &[("a.b", "Hoi")])],
    );
    let rows = vec![row("a.b", &[("EN", "Hello"), ("FR", ""), ("NL", "Hallo")])];

    let staged = stage_reviewed(&rows, &set);
    assert_eq!(staged.changes.count("EN"), 0);
    assert_eq!(staged.changes.count("FR"), 0);
    assert_eq!(
      staged.changes.for_locale("NL").and_then(|c| c.get("a.b")).map(String::as_str),
      Some("Hallo")
    );
  }

  #[test]
  fn missing_key_differs_from_any_value() {
    let set = set_from("EN", &[("EN", &[("a.b", "Hello")]), ("FR", &[])]);
    let rows = vec![row("a.b", &[("FR", "Bonjour")])];
    let staged = stage_reviewed(&rows, &set);
    assert_eq!(staged.changes.count("FR"), 1);
  }

  #[test]
  fn unknown_keys_are_recorded_not_staged() {
    let set = set_from("EN", &[("EN", &[("a.b", "Hello")]), ("FR", &[])]);
    let rows = vec![row("ghost.key", &[("FR", "Fantome")])];
    let staged = stage_reviewed(&rows, &set);
    assert!(staged.changes.is_empty());
    assert_eq!(staged.unknown_keys, vec!["ghost.key".to_string()]);
  }

  #[test]
  fn staging_is_idempotent() {
    let mut set = set_from(
      "EN",
      &[("EN", &[("a.b", "Hello")]), ("NL", &[("a.b", "Hoi")])],
    );
    let rows = vec![row("a.b", &[("EN", "Hello"), ("NL", "Hallo")])];

    let first = stage_reviewed(&rows, &set);
    assert_eq!(first.changes.total(), 1);
    set.apply(&first.changes);

    let second = stage_reviewed(&rows, &set);
    assert!(second.changes.is_empty());
  }

  #[test]
  fn gap_fill_plans_non_base_pairs_only() {
    let set = set_from("EN", &[("EN", &[("a.b", "Hello")]), ("FR", &[]), ("NL", &[])]);
    let plan = plan_gap_fill(&set, &diff(&set));
    assert_eq!(
      plan,
      vec![
        GapFill { key: "a.b".into(), locale: "FR".into(), source: "Hello".into() },
        GapFill { key: "a.b".into(), locale: "NL".into(), source: "Hello".into() },
      ]
    );
  }

  #[test]
  fn gap_fill_skips_empty_base_values() {
    let set = set_from("EN", &[("EN", &[("a.b", "")]), ("FR", &[])]);
    let plan = plan_gap_fill(&set, &diff(&set));
    assert!(plan.is_empty());
  }

  #[test]
  fn gap_fill_skips_keys_without_base_value() {
    // Orphan key: present in FR only. Also flagged by the diff as a base
    // violation, but the planner must not invent work for it either way.
    let set = set_from("EN", &[("EN", &[]), ("FR", &[("orphan", "Seul")]), ("NL", &[])]);
    let plan = plan_gap_fill(&set, &diff(&set));
    assert!(plan.is_empty());
  }
}
