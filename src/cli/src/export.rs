/* src/cli/src/export.rs */

// Review-sheet export: one sheet with only the keys the translators have
// not seen yet, one full merged snapshot. Keys deleted from the base
// catalog since the last export are audited, not carried forward.

use std::collections::BTreeSet;
use std::path::Path;

use anyhow::{Result, bail};

use locsync_catalog::{diff, sheet};

use crate::config::{LocsyncConfig, SetSection};
use crate::{docs, prompt, sheets, status, ui};

pub fn run(base_dir: &Path, cfg: &LocsyncConfig, set_cfg: &SetSection, yes: bool) -> Result<()> {
  let sheet_cfg = &cfg.sheet;
  ui::banner("export");
  ui::arrow(&format!("{}: set \"{}\"", cfg.project.name, set_cfg.label));
  let set = docs::load_set(base_dir, set_cfg)?;
  let report = diff(&set);
  status::check_base_ownership(&set, &report)?;
  if !report.is_clean() {
    for (key, locales) in &report.missing_per_locale {
      ui::detail(&format!("{key}: missing in {}", locales.join(", ")));
    }
    bail!("catalogs diverge; run `locsync translate` before exporting for review");
  }

  let rows = sheet::to_rows(&set);
  let current_keys: BTreeSet<&str> = rows.iter().map(|r| r.key.as_str()).collect();

  // Keys already with the translators, from the sheet of record.
  let sheet_path = base_dir.join(&sheet_cfg.path);
  let old_keys: BTreeSet<String> = if sheet_path.is_file() {
    sheets::read_rows(&sheet_path, set.locales())?.into_iter().map(|r| r.key).collect()
  } else {
    ui::warn(&format!("no existing sheet at {}", sheet_path.display()));
    if !yes && !prompt::confirm("continue treating every key as new?")? {
      ui::fail("cancelled");
      return Ok(());
    }
    BTreeSet::new()
  };

  // Audit: keys the translators still have but the catalogs dropped.
  let removed: Vec<&str> =
    old_keys.iter().map(String::as_str).filter(|k| !current_keys.contains(k)).collect();
  if !removed.is_empty() {
    ui::warn(&format!(
      "{} key(s) exist in the sheet but were removed from the catalogs:",
      removed.len()
    ));
    for key in &removed {
      ui::detail(&format!("- {key}"));
    }
    ui::detail("they will not appear in the new sheets");
  }

  let new_rows: Vec<_> = rows.iter().filter(|r| !old_keys.contains(&r.key)).cloned().collect();
  ui::arrow(&format!("{} key(s) total, {} new", rows.len(), new_rows.len()));

  let timestamp = sheets::timestamp();
  let export_dir = base_dir.join(&sheet_cfg.export_dir);
  let new_path = export_dir.join(format!("new-keys-only-{timestamp}.csv"));
  let merged_path = export_dir.join(format!("all-keys-merged-{timestamp}.csv"));

  sheets::write_rows(&new_path, &new_rows, set.locales())?;
  ui::ok(&format!("wrote {} ({} keys)", new_path.display(), new_rows.len()));
  sheets::write_rows(&merged_path, &rows, set.locales())?;
  ui::ok(&format!("wrote {} ({} keys)", merged_path.display(), rows.len()));
  ui::detail(&format!("swap {} for the merged sheet once reviewed", sheet_cfg.path));
  Ok(())
}
