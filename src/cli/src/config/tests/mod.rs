/* src/cli/src/config/tests/mod.rs */

mod selection;

use super::LocsyncConfig;

fn parse(content: &str) -> LocsyncConfig {
  toml::from_str(content).expect("config should parse")
}

const FULL: &str = r#"
[project]
name = "dashboard"

[provider]
endpoint = "https://api.deepl.com"
key_env = "DEEPL_SECRET"

[sheet]
path = "sheets/translations.csv"
reviewed = "sheets/reviewed.csv"
export_dir = "sheets"

[[set]]
label = "Dashboard"
base = "EN"
locales = ["EN", "FR", "NL"]

[set.paths]
EN = "src/i18n/en.json"
FR = "src/i18n/fr.json"
NL = "src/i18n/nl.json"
"#;
