/* src/cli/src/sheets.rs */

// CSV review-sheet store over the catalog sheet codec. Export filenames
// carry a timestamp so successive exports never clobber each other.

use std::path::Path;

use anyhow::{Context, Result};

use locsync_catalog::{ReviewRow, sheet};

pub fn read_rows(path: &Path, locales: &[String]) -> Result<Vec<ReviewRow>> {
  let content =
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
  sheet::parse(&content, locales).with_context(|| format!("in {}", path.display()))
}

pub fn write_rows(path: &Path, rows: &[ReviewRow], locales: &[String]) -> Result<()> {
  if let Some(parent) = path.parent()
    && !parent.as_os_str().is_empty()
  {
    std::fs::create_dir_all(parent)
      .with_context(|| format!("failed to create {}", parent.display()))?;
  }
  let csv = sheet::render(rows, locales);
  std::fs::write(path, csv).with_context(|| format!("failed to write {}", path.display()))
}

pub fn timestamp() -> String {
  chrono::Local::now().format("%Y-%m-%d_%H-%M-%S").to_string()
}
