/* src/catalog/src/sheet.rs */

// Row projection between a catalog set and the review sheet, plus the CSV
// text codec the sheet travels in. Header columns are located by name, not
// position; quoting follows the doubled-quote convention, and embedded
// newlines survive a round trip.

use std::collections::BTreeMap;

use anyhow::{Result, bail};

use crate::store::{Catalog, CatalogSet, ReviewRow};

pub const KEY_COLUMN: &str = "Key";

/// Project a catalog set onto review rows: union of all key paths, sorted
/// lexicographically, one row per key, empty string where a locale lacks
/// the key.
pub fn to_rows(set: &CatalogSet) -> Vec<ReviewRow> {
  set
    .key_union()
    .into_iter()
    .map(|key| {
      let mut row = ReviewRow::new(key.clone());
      for locale in set.locales() {
        row.set_value(locale, set.value(locale, &key).unwrap_or_default());
      }
      row
    })
    .collect()
}

/// Inverse projection. A row's empty value for a locale means "no value",
/// never a stored empty string.
pub fn from_rows(rows: &[ReviewRow], locales: &[String]) -> BTreeMap<String, Catalog> {
  let mut catalogs: BTreeMap<String, Catalog> =
    locales.iter().map(|l| (l.clone(), Catalog::new())).collect();
  for row in rows {
    for locale in locales {
      let value = row.value(locale);
      if value.is_empty() {
        continue;
      }
      if let Some(catalog) = catalogs.get_mut(locale) {
        catalog.insert(row.key.clone(), value.to_string());
      }
    }
  }
  catalogs
}

/// Render rows as CSV with the fixed header `Key,<L1>,<L2>,…` in the given
/// locale order.
pub fn render(rows: &[ReviewRow], locales: &[String]) -> String {
  let mut out = String::new();
  let mut header = vec![KEY_COLUMN];
  header.extend(locales.iter().map(String::as_str));
  write_record(&mut out, &header);
  for row in rows {
    let mut fields = vec![row.key.as_str()];
    fields.extend(locales.iter().map(|l| row.value(l)));
    write_record(&mut out, &fields);
  }
  out
}

fn write_record(out: &mut String, fields: &[&str]) {
  for (i, field) in fields.iter().enumerate() {
    if i > 0 {
      out.push(',');
    }
    out.push_str(&escape_field(field));
  }
  out.push('\n');
}

fn escape_field(field: &str) -> String {
  if field.contains(',') || field.contains('"') || field.contains('\n') || field.contains('\r') {
    format!("\"{}\"", field.replace('"', "\"\""))
  } else {
    field.to_string()
  }
}

/// Parse CSV text into review rows. The header must contain a `Key` column
/// and one column per expected locale; extra columns are ignored. Blank
/// records and records with an empty key cell are skipped.
pub fn parse(text: &str, expected_locales: &[String]) -> Result<Vec<ReviewRow>> {
  let records = split_records(text)?;
  let Some(header) = records.first() else {
    bail!("sheet is empty, expected a header row");
  };

  let Some(key_idx) = header.iter().position(|h| h.trim() == KEY_COLUMN) else {
    bail!("missing column(s) in sheet: {KEY_COLUMN}");
  };
  let mut locale_columns = Vec::new();
  let mut missing = Vec::new();
  for locale in expected_locales {
    match header.iter().position(|h| h.trim() == locale.as_str()) {
      Some(idx) => locale_columns.push((locale.clone(), idx)),
      None => missing.push(locale.as_str()),
    }
  }
  if !missing.is_empty() {
    bail!("missing column(s) in sheet: {}", missing.join(", "));
  }

  let mut rows = Vec::new();
  for record in &records[1..] {
    let key = record.get(key_idx).map(|k| k.trim()).unwrap_or_default();
    if key.is_empty() {
      continue;
    }
    let mut row = ReviewRow::new(key);
    for (locale, idx) in &locale_columns {
      row.set_value(locale, record.get(*idx).cloned().unwrap_or_default());
    }
    rows.push(row);
  }
  Ok(rows)
}

/// Quote-aware record split over the full text, so quoted fields may
/// contain delimiters and newlines.
fn split_records(text: &str) -> Result<Vec<Vec<String>>> {
  let mut records = Vec::new();
  let mut fields: Vec<String> = Vec::new();
  let mut field = String::new();
  let mut in_quotes = false;

  let mut chars = text.chars().peekable();
  while let Some(c) = chars.next() {
    if in_quotes {
      if c == '"' {
        if chars.peek() == Some(&'"') {
          chars.next();
          field.push('"');
        } else {
          in_quotes = false;
        }
      } else {
        field.push(c);
      }
      continue;
    }
    match c {
      '"' if field.is_empty() => in_quotes = true,
      ',' => fields.push(std::mem::take(&mut field)),
      // \r\n line endings collapse to the \n branch
      '\r' => {}
      '\n' => {
        fields.push(std::mem::take(&mut field));
        if fields.len() > 1 || !fields[0].is_empty() {
          records.push(std::mem::take(&mut fields));
        } else {
          fields.clear();
        }
      }
      _ => field.push(c),
    }
  }
  if in_quotes {
    bail!("unterminated quoted field");
  }
  if !field.is_empty() || !fields.is_empty() {
    fields.push(field);
    records.push(fields);
  }
  Ok(records)
}
