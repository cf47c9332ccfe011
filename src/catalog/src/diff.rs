/* src/catalog/src/diff.rs */

use std::collections::BTreeMap;

use crate::error::CatalogError;
use crate::store::CatalogSet;

/// Divergence report across a catalog set.
///
/// Key collections are lexicographically sorted; locale subsets follow the
/// run's configured locale order, so output is independent of map iteration.
#[derive(Debug, Clone, Default)]
pub struct DiffReport {
  /// Keys present in a non-base catalog but absent from the base catalog.
  /// Always an authoring error that halts downstream processing.
  pub missing_in_base: Vec<String>,
  /// For every key in the union of all catalogs, the locales lacking it.
  pub missing_per_locale: BTreeMap<String, Vec<String>>,
}

impl DiffReport {
  /// True when every locale has every key.
  pub fn is_clean(&self) -> bool {
    self.missing_per_locale.is_empty()
  }

  /// Total number of missing (key, locale) pairs.
  pub fn missing_pairs(&self) -> usize {
    self.missing_per_locale.values().map(Vec::len).sum()
  }

  /// The base locale must lexically own every key.
  pub fn ensure_base_owns_all(&self) -> Result<(), CatalogError> {
    if self.missing_in_base.is_empty() {
      Ok(())
    } else {
      Err(CatalogError::Consistency { keys: self.missing_in_base.clone() })
    }
  }
}

/// Compute missing-key sets and cross-catalog consistency violations.
pub fn diff(set: &CatalogSet) -> DiffReport {
  let mut report = DiffReport::default();
  for key in set.key_union() {
    let lacking: Vec<String> =
      set.locales().iter().filter(|l| set.value(l, &key).is_none()).cloned().collect();
    if lacking.is_empty() {
      continue;
    }
    if lacking.iter().any(|l| l == set.base()) {
      report.missing_in_base.push(key.clone());
    }
    report.missing_per_locale.insert(key, lacking);
  }
  report
}
