/* src/catalog/src/placeholder.rs */

// Protects interpolation markers ({{name}}) and inline markup spans
// (<b>..</b>) from the machine translator. One combined left-to-right
// non-overlapping scan; when candidate patterns overlap, whichever match
// starts first wins.

use std::sync::OnceLock;

use regex::Regex;

fn protected_re() -> &'static Regex {
  static RE: OnceLock<Regex> = OnceLock::new();
  RE.get_or_init(|| Regex::new(r"\{\{.*?\}\}|<.*?>.*?</.*?>").unwrap())
}

/// Ordered token -> original-substring map, scoped to a single translation
/// call and discarded after restoration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaceholderMap {
  entries: Vec<(String, String)>,
}

impl PlaceholderMap {
  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
    self.entries.iter().map(|(token, original)| (token.as_str(), original.as_str()))
  }
}

/// Replace each protected span with a positional `@@N@@` token, in order of
/// first occurrence, and record the originals.
pub fn protect(text: &str) -> (String, PlaceholderMap) {
  let mut map = PlaceholderMap::default();
  let mut safe = String::with_capacity(text.len());
  let mut last = 0;
  for (i, m) in protected_re().find_iter(text).enumerate() {
    let token = format!("@@{i}@@");
    safe.push_str(&text[last..m.start()]);
    safe.push_str(&token);
    map.entries.push((token, m.as_str().to_string()));
    last = m.end();
  }
  safe.push_str(&text[last..]);
  (safe, map)
}

/// Swap each token back for its original substring (first occurrence, in
/// recorded order). Tolerates a translator that reordered or dropped tokens;
/// adjacency of the originals is not guaranteed in that case.
pub fn restore(translated: &str, map: &PlaceholderMap) -> String {
  let mut out = translated.to_string();
  for (token, original) in &map.entries {
    out = out.replacen(token, original, 1);
  }
  out
}

/// Protect `text`, run `translate` on the safe form, restore on success.
/// Any failure from `translate` is returned unchanged; nothing is mutated.
pub fn translate_with<E, F>(text: &str, translate: F) -> Result<String, E>
where
  F: FnOnce(&str) -> Result<String, E>,
{
  let (safe, map) = protect(text);
  let translated = translate(&safe)?;
  Ok(restore(&translated, &map))
}
