/* src/cli/src/provider.rs */

// DeepL-shaped translation provider client. One request in flight at a
// time; any transport failure or non-2xx status surfaces as an error the
// caller records against its (key, locale) pair.

use anyhow::{Context, Result, bail};
use serde::Deserialize;

use crate::config::ProviderSection;

pub struct Provider {
  http: reqwest::Client,
  endpoint: String,
  auth_key: String,
}

#[derive(Debug, Deserialize)]
pub struct Usage {
  pub character_count: u64,
  pub character_limit: u64,
}

#[derive(Deserialize)]
struct TranslateResponse {
  translations: Vec<Translation>,
}

#[derive(Deserialize)]
struct Translation {
  text: String,
}

impl Provider {
  /// The auth key is read from the environment variable named in config.
  pub fn from_config(section: &ProviderSection) -> Result<Self> {
    let auth_key = std::env::var(&section.key_env)
      .with_context(|| format!("{} is not set (the provider auth key)", section.key_env))?;
    Ok(Self {
      http: reqwest::Client::new(),
      endpoint: section.endpoint.trim_end_matches('/').to_string(),
      auth_key,
    })
  }

  /// Character quota consumed / allowed.
  pub async fn usage(&self) -> Result<Usage> {
    let url = format!("{}/v2/usage", self.endpoint);
    let resp = self
      .http
      .get(&url)
      .query(&[("auth_key", self.auth_key.as_str())])
      .send()
      .await
      .with_context(|| format!("failed to reach {url}"))?;
    let status = resp.status();
    if !status.is_success() {
      bail!("provider returned HTTP {status}");
    }
    resp.json().await.context("failed to parse usage response")
  }

  /// Translate one already-protected text into the target locale.
  pub async fn translate(&self, text: &str, target_locale: &str) -> Result<String> {
    let url = format!("{}/v2/translate", self.endpoint);
    let params = [
      ("auth_key", self.auth_key.as_str()),
      ("text", text),
      ("target_lang", target_locale),
    ];
    let resp = self
      .http
      .post(&url)
      .form(&params)
      .send()
      .await
      .with_context(|| format!("failed to reach {url}"))?;
    let status = resp.status();
    if !status.is_success() {
      bail!("provider returned HTTP {status}");
    }
    let parsed: TranslateResponse =
      resp.json().await.context("failed to parse translate response")?;
    match parsed.translations.into_iter().next() {
      Some(translation) => Ok(translation.text),
      None => bail!("provider returned no translations"),
    }
  }
}
