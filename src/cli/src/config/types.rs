/* src/cli/src/config/types.rs */

use std::collections::BTreeMap;

use anyhow::{Result, bail};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct LocsyncConfig {
  pub project: ProjectConfig,
  #[serde(default)]
  pub provider: ProviderSection,
  #[serde(default)]
  pub sheet: SheetSection,
  #[serde(rename = "set", default)]
  pub sets: Vec<SetSection>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProjectConfig {
  pub name: String,
}

/// Machine-translation provider endpoint. The auth key itself is never in
/// the config file; only the name of the environment variable holding it.
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderSection {
  #[serde(default = "default_endpoint")]
  pub endpoint: String,
  #[serde(default = "default_key_env")]
  pub key_env: String,
}

impl Default for ProviderSection {
  fn default() -> Self {
    Self { endpoint: default_endpoint(), key_env: default_key_env() }
  }
}

fn default_endpoint() -> String {
  "https://api-free.deepl.com".to_string()
}

fn default_key_env() -> String {
  "DEEPL_FREE_SECRET".to_string()
}

/// Review-sheet locations, relative to the config file.
#[derive(Debug, Clone, Deserialize)]
pub struct SheetSection {
  /// The sheet currently with the translators; export diffs new keys
  /// against it.
  #[serde(default = "default_sheet_path")]
  pub path: String,
  /// Default reviewed sheet consumed by `import`.
  #[serde(default = "default_reviewed_path")]
  pub reviewed: String,
  /// Directory timestamped export sheets are written to.
  #[serde(default = "default_export_dir")]
  pub export_dir: String,
}

impl Default for SheetSection {
  fn default() -> Self {
    Self {
      path: default_sheet_path(),
      reviewed: default_reviewed_path(),
      export_dir: default_export_dir(),
    }
  }
}

fn default_sheet_path() -> String {
  "translations.csv".to_string()
}

fn default_reviewed_path() -> String {
  "translations-reviewed.csv".to_string()
}

fn default_export_dir() -> String {
  ".".to_string()
}

/// One named translation set: a base locale, the locale order, and one
/// document path per locale.
#[derive(Debug, Clone, Deserialize)]
pub struct SetSection {
  pub label: String,
  pub base: String,
  pub locales: Vec<String>,
  pub paths: BTreeMap<String, String>,
}

impl SetSection {
  pub fn validate(&self) -> Result<()> {
    if self.locales.is_empty() {
      bail!("set \"{}\": locales must not be empty", self.label);
    }
    if !self.locales.contains(&self.base) {
      bail!("set \"{}\": base \"{}\" is not in locales {:?}", self.label, self.base, self.locales);
    }
    for locale in &self.locales {
      if !self.paths.contains_key(locale) {
        bail!("set \"{}\": no document path for locale \"{locale}\"", self.label);
      }
    }
    for locale in self.paths.keys() {
      if !self.locales.contains(locale) {
        bail!("set \"{}\": path given for unknown locale \"{locale}\"", self.label);
      }
    }
    Ok(())
  }
}

impl LocsyncConfig {
  pub fn validate(&self) -> Result<()> {
    if self.sets.is_empty() {
      bail!("at least one [[set]] is required");
    }
    let mut seen = std::collections::HashSet::new();
    for set in &self.sets {
      if !seen.insert(set.label.as_str()) {
        bail!("duplicate set label \"{}\"", set.label);
      }
      set.validate()?;
    }
    Ok(())
  }

  /// Pick a translation set by label; a lone set is the default.
  pub fn select_set(&self, label: Option<&str>) -> Result<&SetSection> {
    match label {
      Some(wanted) => self.sets.iter().find(|s| s.label == wanted).ok_or_else(|| {
        let available: Vec<_> = self.sets.iter().map(|s| s.label.as_str()).collect();
        anyhow::anyhow!("unknown set \"{wanted}\"\navailable sets: {}", available.join(", "))
      }),
      None if self.sets.len() == 1 => Ok(&self.sets[0]),
      None => {
        let available: Vec<_> = self.sets.iter().map(|s| s.label.as_str()).collect();
        bail!("--set is required when multiple sets are configured\navailable sets: {}",
          available.join(", "));
      }
    }
  }
}
