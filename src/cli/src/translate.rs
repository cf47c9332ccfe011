/* src/cli/src/translate.rs */

// Gap-fill run: machine-translate values missing from non-base locales,
// sourced from the base locale. Provider calls are strictly sequential;
// a failed call only loses that (key, locale) pair, but any pair left
// unresolved makes the whole run non-successful.

use std::path::Path;

use anyhow::{Result, bail};

use locsync_catalog::{ChangeSet, diff, plan_gap_fill, protect, restore};

use crate::config::{LocsyncConfig, SetSection};
use crate::provider::Provider;
use crate::{docs, prompt, status, ui};

pub async fn run(
  base_dir: &Path,
  cfg: &LocsyncConfig,
  set_cfg: &SetSection,
  yes: bool,
) -> Result<()> {
  ui::banner("translate");
  ui::arrow(&format!("{}: set \"{}\"", cfg.project.name, set_cfg.label));
  let mut set = docs::load_set(base_dir, set_cfg)?;
  let report = diff(&set);
  status::check_base_ownership(&set, &report)?;

  if report.is_clean() {
    ui::ok("all keys present in all locales, nothing to do");
    return Ok(());
  }

  let plan = plan_gap_fill(&set, &report);
  if plan.is_empty() {
    // Missing pairs exist but none has a non-empty base value to source.
    for (key, locales) in &report.missing_per_locale {
      ui::detail(&format!("{key}: missing in {}", locales.join(", ")));
    }
    bail!(
      "{} key/locale pair(s) are missing but the {} value is empty; fill the base values first",
      report.missing_pairs(),
      set.base()
    );
  }

  ui::arrow(&format!("{} value(s) to translate:", plan.len()));
  for item in &plan {
    ui::detail(&format!("{} \u{2192} {}", item.key, item.locale));
  }

  let provider = Provider::from_config(&cfg.provider)?;
  match provider.usage().await {
    Ok(usage) => ui::detail(&format!(
      "provider usage: {} / {} characters",
      usage.character_count, usage.character_limit
    )),
    Err(err) => ui::warn(&format!("could not fetch provider usage: {err:#}")),
  }

  if !yes && !prompt::confirm("translate the missing values with the provider?")? {
    ui::fail("cancelled, no files were changed");
    return Ok(());
  }

  let mut changes = ChangeSet::default();
  let mut unresolved: Vec<(String, String)> = Vec::new();
  for item in &plan {
    let (safe, placeholders) = protect(&item.source);
    match provider.translate(&safe, &item.locale).await {
      Ok(translated) => {
        let value = restore(&translated, &placeholders);
        ui::ok(&format!("[{}] {} \u{2192} \"{}\"", item.locale, item.key, value));
        changes.stage(&item.locale, &item.key, value);
      }
      Err(err) => {
        ui::fail(&format!("[{}] {}: {err:#}", item.locale, item.key));
        unresolved.push((item.key.clone(), item.locale.clone()));
      }
    }
  }

  set.apply(&changes);
  for locale in set.locales() {
    if changes.count(locale) > 0 {
      docs::persist_locale(base_dir, set_cfg, &set, locale)?;
    }
  }

  if !unresolved.is_empty() {
    ui::blank();
    ui::arrow("unresolved pairs:");
    for (key, locale) in &unresolved {
      ui::detail(&format!("{key} ({locale})"));
    }
    bail!("{} value(s) could not be translated", unresolved.len());
  }

  // Pairs the planner could not source (empty base value) are still missing.
  let remaining = diff(&set);
  if !remaining.is_clean() {
    ui::blank();
    for (key, locales) in &remaining.missing_per_locale {
      ui::detail(&format!("{key}: still missing in {}", locales.join(", ")));
    }
    bail!("{} key/locale pair(s) remain missing", remaining.missing_pairs());
  }

  ui::ok("catalogs are complete");
  Ok(())
}
