/* src/catalog/src/error.rs */

use std::fmt;

/// Errors surfaced by the catalog engine.
///
/// `Structural` aborts a single document's (re)construction; `Consistency`
/// aborts the whole run before any merge proceeds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
  /// A key path and the document shape disagree: a leaf sits where a nested
  /// node is required, a node where a leaf is expected, or a leaf holds a
  /// non-string value.
  Structural { path: String, detail: String },
  /// Keys exist in a non-base locale but are missing from the base locale,
  /// which must lexically own every key.
  Consistency { keys: Vec<String> },
}

impl CatalogError {
  pub(crate) fn structural(path: impl Into<String>, detail: impl Into<String>) -> Self {
    Self::Structural { path: path.into(), detail: detail.into() }
  }
}

impl fmt::Display for CatalogError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Structural { path, detail } => {
        write!(f, "structural conflict at \"{path}\": {detail}")
      }
      Self::Consistency { keys } => {
        write!(f, "{} key(s) missing from the base catalog: {}", keys.len(), keys.join(", "))
      }
    }
  }
}

impl std::error::Error for CatalogError {}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn structural_display_names_path() {
    let err = CatalogError::structural("a.b", "leaf where node expected");
    assert_eq!(err.to_string(), "structural conflict at \"a.b\": leaf where node expected");
  }

  #[test]
  fn consistency_display_lists_keys() {
    let err = CatalogError::Consistency { keys: vec!["a.b".into(), "c".into()] };
    assert_eq!(err.to_string(), "2 key(s) missing from the base catalog: a.b, c");
  }
}
