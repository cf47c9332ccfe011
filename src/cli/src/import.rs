/* src/cli/src/import.rs */

// Reviewed-sheet import: stage only genuinely changed, non-empty reviewed
// values, preview, confirm, persist the locales that changed, and write a
// merged snapshot sheet for the next review round.

use std::path::{Path, PathBuf};

use anyhow::Result;

use locsync_catalog::{sheet, stage_reviewed};

use crate::config::{LocsyncConfig, SetSection};
use crate::{docs, prompt, sheets, ui};

const PREVIEW_LIMIT: usize = 10;

pub fn run(
  base_dir: &Path,
  cfg: &LocsyncConfig,
  set_cfg: &SetSection,
  reviewed: Option<PathBuf>,
  yes: bool,
) -> Result<()> {
  let sheet_cfg = &cfg.sheet;
  ui::banner("import");
  ui::arrow(&format!("{}: set \"{}\"", cfg.project.name, set_cfg.label));
  let reviewed_path = reviewed.unwrap_or_else(|| base_dir.join(&sheet_cfg.reviewed));

  let mut set = docs::load_set(base_dir, set_cfg)?;
  let rows = sheets::read_rows(&reviewed_path, set.locales())?;
  ui::arrow(&format!("{} reviewed row(s) from {}", rows.len(), reviewed_path.display()));

  let staged = stage_reviewed(&rows, &set);
  if !staged.unknown_keys.is_empty() {
    ui::warn(&format!(
      "{} reviewed key(s) missing from the {} catalog (skipped):",
      staged.unknown_keys.len(),
      set.base()
    ));
    for key in staged.unknown_keys.iter().take(PREVIEW_LIMIT) {
      ui::detail(&format!("- {key}"));
    }
    if staged.unknown_keys.len() > PREVIEW_LIMIT {
      ui::detail("...");
    }
  }

  if staged.changes.is_empty() {
    ui::ok("no changes detected, nothing to apply");
    return Ok(());
  }

  ui::arrow("pending updates:");
  for locale in set.locales() {
    ui::detail(&format!("{locale}: {} change(s)", staged.changes.count(locale)));
  }

  if !yes && prompt::confirm("show a preview of the first changes per locale?")? {
    for locale in set.locales() {
      let Some(entries) = staged.changes.for_locale(locale) else { continue };
      ui::blank();
      ui::detail(&format!("[{locale}]"));
      for (key, value) in entries.iter().take(PREVIEW_LIMIT) {
        let old = set.value(locale, key).unwrap_or("");
        ui::detail(&format!("{key}: \"{old}\" \u{2192} \"{value}\""));
      }
      if entries.len() > PREVIEW_LIMIT {
        ui::detail("...");
      }
    }
    ui::blank();
  }

  if !yes && !prompt::confirm("apply these changes to the locale documents?")? {
    ui::fail("cancelled, no files were changed");
    return Ok(());
  }

  set.apply(&staged.changes);
  for locale in set.locales() {
    if staged.changes.count(locale) > 0 {
      docs::persist_locale(base_dir, set_cfg, &set, locale)?;
    }
  }

  // Snapshot for the next round: becomes the new sheet of record.
  let merged = sheet::to_rows(&set);
  let export_dir = base_dir.join(&sheet_cfg.export_dir);
  let snapshot = export_dir.join(format!("all-keys-merged-{}.csv", sheets::timestamp()));
  sheets::write_rows(&snapshot, &merged, set.locales())?;
  ui::ok(&format!("wrote {} ({} keys)", snapshot.display(), merged.len()));
  Ok(())
}
