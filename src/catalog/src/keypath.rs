/* src/catalog/src/keypath.rs */

// Nested document <-> flat dotted-key catalog conversion. A key path never
// names both a leaf and a nested node within one document; detecting that
// during reconstruction is a hard error, never a silent overwrite.

use serde_json::{Map, Value};

use crate::error::CatalogError;
use crate::store::Catalog;

/// Flatten a nested JSON object into a dotted-key catalog.
///
/// Every string leaf is emitted under the dot-joined path of keys from the
/// root. Mapping nodes are never emitted themselves. Catalogs are text-only,
/// so a number, bool, array, or null leaf is a structural error.
pub fn flatten(document: &Value) -> Result<Catalog, CatalogError> {
  let Some(root) = document.as_object() else {
    return Err(CatalogError::structural("", "document root must be an object"));
  };
  let mut catalog = Catalog::new();
  flatten_into(root, "", &mut catalog)?;
  Ok(catalog)
}

fn flatten_into(
  node: &Map<String, Value>,
  prefix: &str,
  out: &mut Catalog,
) -> Result<(), CatalogError> {
  for (key, value) in node {
    let path = if prefix.is_empty() { key.clone() } else { format!("{prefix}.{key}") };
    match value {
      Value::Object(child) => flatten_into(child, &path, out)?,
      Value::String(text) => {
        out.insert(path, text.clone());
      }
      other => {
        return Err(CatalogError::structural(
          path,
          format!("leaf must be a string, found {}", kind_name(other)),
        ));
      }
    }
  }
  Ok(())
}

fn kind_name(value: &Value) -> &'static str {
  match value {
    Value::Null => "null",
    Value::Bool(_) => "bool",
    Value::Number(_) => "number",
    Value::String(_) => "string",
    Value::Array(_) => "array",
    Value::Object(_) => "object",
  }
}

/// Rebuild a nested JSON object from a dotted-key catalog.
///
/// Intermediate nodes are created only if absent. A path prefix that already
/// holds a leaf where a node is required (or the reverse) is a structural
/// error; no partial document is returned.
pub fn unflatten(catalog: &Catalog) -> Result<Value, CatalogError> {
  let mut root = Map::new();
  for (key, text) in catalog {
    insert_path(&mut root, key, text)?;
  }
  Ok(Value::Object(root))
}

fn insert_path(root: &mut Map<String, Value>, key: &str, text: &str) -> Result<(), CatalogError> {
  let segments: Vec<&str> = key.split('.').collect();
  let mut node = root;
  for (i, segment) in segments.iter().enumerate() {
    if segment.is_empty() {
      return Err(CatalogError::structural(key, "empty path segment"));
    }
    if i + 1 == segments.len() {
      if matches!(node.get(*segment), Some(Value::Object(_))) {
        return Err(CatalogError::structural(key, "a nested node already exists at this path"));
      }
      node.insert((*segment).to_string(), Value::String(text.to_string()));
    } else {
      node = match node.entry((*segment).to_string()).or_insert_with(|| Value::Object(Map::new()))
      {
        Value::Object(child) => child,
        _ => {
          let held = segments[..=i].join(".");
          return Err(CatalogError::structural(
            key,
            format!("\"{held}\" already holds a leaf value"),
          ));
        }
      };
    }
  }
  Ok(())
}
