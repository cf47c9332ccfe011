/* src/cli/src/status.rs */

use std::path::Path;

use anyhow::{Result, bail};

use locsync_catalog::{CatalogSet, DiffReport, diff};

use crate::config::{LocsyncConfig, SetSection};
use crate::{docs, ui};

/// Report divergence across a set's catalogs. Exits non-zero whenever the
/// catalogs are not fully in sync, so the command doubles as a CI check.
pub fn run(base_dir: &Path, cfg: &LocsyncConfig, set_cfg: &SetSection) -> Result<()> {
  ui::banner("status");
  ui::arrow(&format!("{}: set \"{}\"", cfg.project.name, set_cfg.label));
  let set = docs::load_set(base_dir, set_cfg)?;
  let report = diff(&set);
  check_base_ownership(&set, &report)?;

  if report.is_clean() {
    ui::ok(&format!("all {} locales carry the same keys", set.locales().len()));
    return Ok(());
  }

  ui::arrow(&format!("{} missing key/locale pair(s):", report.missing_pairs()));
  for (key, locales) in &report.missing_per_locale {
    ui::detail(&format!("{key}: missing in {}", locales.join(", ")));
  }
  ui::blank();
  bail!("catalogs diverge; run `locsync translate` to fill the gaps");
}

/// The base locale must own every key before any merge proceeds; print the
/// offenders and abort the run if it does not.
pub fn check_base_ownership(set: &CatalogSet, report: &DiffReport) -> Result<()> {
  if !report.missing_in_base.is_empty() {
    ui::fail(&format!(
      "{} key(s) exist in other locales but not in {}:",
      report.missing_in_base.len(),
      set.base()
    ));
    for key in &report.missing_in_base {
      ui::detail(&format!("- {key}"));
    }
    ui::detail(&format!("add these keys to the {} document before continuing", set.base()));
  }
  report.ensure_base_owns_all()?;
  Ok(())
}
