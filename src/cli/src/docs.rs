/* src/cli/src/docs.rs */

// JSON document store: one nested document per locale on disk, flattened
// into a CatalogSet on load and rebuilt through the codec on save. A locale
// is persisted in full or not at all.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde_json::Value;

use locsync_catalog::{CatalogSet, flatten, unflatten};

use crate::config::SetSection;
use crate::ui;

/// Load one nested locale document. A missing file is an empty document
/// (first run); malformed JSON is an error, never silently replaced.
pub fn load_document(path: &Path) -> Result<Value> {
  if !path.is_file() {
    ui::warn(&format!("{} not found, starting from an empty catalog", path.display()));
    return Ok(Value::Object(serde_json::Map::new()));
  }
  let content =
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
  serde_json::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))
}

pub fn save_document(path: &Path, document: &Value) -> Result<()> {
  if let Some(parent) = path.parent()
    && !parent.as_os_str().is_empty()
  {
    std::fs::create_dir_all(parent)
      .with_context(|| format!("failed to create {}", parent.display()))?;
  }
  let mut json = serde_json::to_string_pretty(document)?;
  json.push('\n');
  std::fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))
}

pub fn document_path(base_dir: &Path, set: &SetSection, locale: &str) -> Result<PathBuf> {
  let path = set
    .paths
    .get(locale)
    .with_context(|| format!("no document path configured for locale \"{locale}\""))?;
  Ok(base_dir.join(path))
}

/// Load every locale document of a set into a catalog set.
pub fn load_set(base_dir: &Path, set: &SetSection) -> Result<CatalogSet> {
  let mut catalogs = CatalogSet::new(set.base.clone(), set.locales.clone())?;
  for locale in &set.locales {
    let path = document_path(base_dir, set, locale)?;
    let document = load_document(&path)?;
    let catalog =
      flatten(&document).with_context(|| format!("in {}", path.display()))?;
    catalogs.set_catalog(locale, catalog)?;
  }
  Ok(catalogs)
}

/// Rebuild one locale's nested document from its catalog and write it out.
pub fn persist_locale(
  base_dir: &Path,
  set: &SetSection,
  catalogs: &CatalogSet,
  locale: &str,
) -> Result<()> {
  let catalog = catalogs
    .catalog(locale)
    .with_context(|| format!("no catalog loaded for locale \"{locale}\""))?;
  let document = unflatten(catalog)?;
  let path = document_path(base_dir, set, locale)?;
  save_document(&path, &document)?;
  ui::ok(&format!("saved {}", path.display()));
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;
  use std::collections::BTreeMap;

  fn one_locale_set(dir: &Path) -> SetSection {
    SetSection {
      label: "Test".into(),
      base: "EN".into(),
      locales: vec!["EN".into()],
      paths: BTreeMap::from([("EN".to_string(), dir.join("en.json").display().to_string())]),
    }
  }

  #[test]
  fn missing_document_loads_empty() {
    let dir = tempfile::tempdir().unwrap();
    let doc = load_document(&dir.path().join("absent.json")).unwrap();
    assert_eq!(doc, json!({}));
  }

  #[test]
  fn malformed_document_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("en.json");
    std::fs::write(&path, "{ not json").unwrap();
    assert!(load_document(&path).is_err());
  }

  #[test]
  fn save_creates_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("src").join("i18n").join("en.json");
    save_document(&path, &json!({ "a": "x" })).unwrap();
    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.ends_with('\n'));
    assert_eq!(serde_json::from_str::<Value>(&written).unwrap(), json!({ "a": "x" }));
  }

  #[test]
  fn load_then_persist_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let set = one_locale_set(dir.path());
    let original = json!({ "menu": { "open": "Open" }, "title": "Dashboard" });
    save_document(&dir.path().join("en.json"), &original).unwrap();

    let catalogs = load_set(dir.path(), &set).unwrap();
    assert_eq!(catalogs.value("EN", "menu.open"), Some("Open"));

    persist_locale(dir.path(), &set, &catalogs, "EN").unwrap();
    let reloaded = load_document(&dir.path().join("en.json")).unwrap();
    assert_eq!(reloaded, original);
  }
}
