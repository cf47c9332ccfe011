/* src/catalog/src/store.rs */

// In-memory store for one synchronization run. Catalogs are loaded in full,
// mutated only by applying a ChangeSet, and persisted in full by the caller.

use std::collections::{BTreeMap, BTreeSet};

use anyhow::{Result, bail};

/// One locale's flat key-path -> text mapping.
///
/// Absence of a key means "not yet translated"; an empty string is never
/// stored to mean absence.
pub type Catalog = BTreeMap<String, String>;

/// All locale catalogs for one run, in configured locale order, with one
/// designated base locale that is authoritative for key existence.
#[derive(Debug, Clone)]
pub struct CatalogSet {
  base: String,
  locales: Vec<String>,
  catalogs: BTreeMap<String, Catalog>,
}

impl CatalogSet {
  /// Build a set of empty catalogs. The base locale must be one of `locales`.
  pub fn new(base: impl Into<String>, locales: Vec<String>) -> Result<Self> {
    let base = base.into();
    if locales.is_empty() {
      bail!("locale list must not be empty");
    }
    if !locales.contains(&base) {
      bail!("base locale \"{base}\" is not in the locale list {locales:?}");
    }
    let catalogs = locales.iter().map(|l| (l.clone(), Catalog::new())).collect();
    Ok(Self { base, locales, catalogs })
  }

  pub fn base(&self) -> &str {
    &self.base
  }

  /// Locales in configured order (the base locale included).
  pub fn locales(&self) -> &[String] {
    &self.locales
  }

  /// Replace one locale's catalog wholesale.
  pub fn set_catalog(&mut self, locale: &str, catalog: Catalog) -> Result<()> {
    if !self.catalogs.contains_key(locale) {
      bail!("unknown locale \"{locale}\"");
    }
    self.catalogs.insert(locale.to_string(), catalog);
    Ok(())
  }

  pub fn catalog(&self, locale: &str) -> Option<&Catalog> {
    self.catalogs.get(locale)
  }

  pub fn value(&self, locale: &str, key: &str) -> Option<&str> {
    self.catalogs.get(locale).and_then(|c| c.get(key)).map(String::as_str)
  }

  /// Union of key paths across all locale catalogs, sorted.
  pub fn key_union(&self) -> BTreeSet<String> {
    self.catalogs.values().flat_map(|c| c.keys().cloned()).collect()
  }

  /// Overlay staged changes. Only keys present in the change set are touched.
  pub fn apply(&mut self, changes: &ChangeSet) {
    for (locale, entries) in changes.iter() {
      if let Some(catalog) = self.catalogs.get_mut(locale) {
        for (key, value) in entries {
          catalog.insert(key.clone(), value.clone());
        }
      }
    }
  }
}

/// Computed, not-yet-applied updates: per locale, key path -> new value.
/// Contains only entries whose value is non-empty and differs from the
/// existing catalog value.
#[derive(Debug, Clone, Default)]
pub struct ChangeSet {
  changes: BTreeMap<String, Catalog>,
}

impl ChangeSet {
  pub fn stage(&mut self, locale: &str, key: impl Into<String>, value: impl Into<String>) {
    self.changes.entry(locale.to_string()).or_default().insert(key.into(), value.into());
  }

  pub fn is_empty(&self) -> bool {
    self.changes.values().all(BTreeMap::is_empty)
  }

  pub fn total(&self) -> usize {
    self.changes.values().map(BTreeMap::len).sum()
  }

  pub fn count(&self, locale: &str) -> usize {
    self.changes.get(locale).map_or(0, BTreeMap::len)
  }

  pub fn for_locale(&self, locale: &str) -> Option<&Catalog> {
    self.changes.get(locale)
  }

  pub fn iter(&self) -> impl Iterator<Item = (&String, &Catalog)> {
    self.changes.iter()
  }
}

/// One review-sheet row: a key path plus one value per locale.
/// An empty value means "no reviewed value", not a stored empty string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewRow {
  pub key: String,
  values: BTreeMap<String, String>,
}

impl ReviewRow {
  pub fn new(key: impl Into<String>) -> Self {
    Self { key: key.into(), values: BTreeMap::new() }
  }

  pub fn value(&self, locale: &str) -> &str {
    self.values.get(locale).map_or("", String::as_str)
  }

  pub fn set_value(&mut self, locale: &str, value: impl Into<String>) {
    self.values.insert(locale.to_string(), value.into());
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn set_with(base: &str, locales: &[&str]) -> CatalogSet {
    CatalogSet::new(base, locales.iter().map(|l| (*l).to_string()).collect()).unwrap()
  }

  #[test]
  fn base_must_be_a_member() {
    let result = CatalogSet::new("DE", vec!["EN".into(), "FR".into()]);
    assert!(result.is_err());
  }

  #[test]
  fn empty_locale_list_rejected() {
    assert!(CatalogSet::new("EN", vec![]).is_err());
  }

  #[test]
  fn set_catalog_rejects_unknown_locale() {
    let mut set = set_with("EN", &["EN", "FR"]);
    assert!(set.set_catalog("NL", Catalog::new()).is_err());
  }

  #[test]
  fn key_union_spans_all_locales() {
    let mut set = set_with("EN", &["EN", "FR"]);
    set.set_catalog("EN", Catalog::from([("a".into(), "x".into())])).unwrap();
    set.set_catalog("FR", Catalog::from([("b".into(), "y".into())])).unwrap();
    let union: Vec<_> = set.key_union().into_iter().collect();
    assert_eq!(union, vec!["a".to_string(), "b".to_string()]);
  }

  #[test]
  fn apply_touches_only_staged_keys() {
    let mut set = set_with("EN", &["EN", "FR"]);
    set
      .set_catalog("FR", Catalog::from([("a".into(), "vieux".into()), ("b".into(), "reste".into())]))
      .unwrap();

    let mut changes = ChangeSet::default();
    changes.stage("FR", "a", "neuf");
    set.apply(&changes);

    assert_eq!(set.value("FR", "a"), Some("neuf"));
    assert_eq!(set.value("FR", "b"), Some("reste"));
    assert_eq!(set.value("EN", "a"), None);
  }

  #[test]
  fn changeset_counts() {
    let mut changes = ChangeSet::default();
    assert!(changes.is_empty());
    changes.stage("FR", "a", "x");
    changes.stage("FR", "b", "y");
    changes.stage("NL", "a", "z");
    assert_eq!(changes.total(), 3);
    assert_eq!(changes.count("FR"), 2);
    assert_eq!(changes.count("EN"), 0);
  }

  #[test]
  fn review_row_defaults_to_empty_value() {
    let mut row = ReviewRow::new("a.b");
    assert_eq!(row.value("FR"), "");
    row.set_value("FR", "Bonjour");
    assert_eq!(row.value("FR"), "Bonjour");
  }
}
