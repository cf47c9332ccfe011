/* src/cli/src/main.rs */

mod config;
mod docs;
mod export;
mod import;
mod prompt;
mod provider;
mod sheets;
mod status;
mod translate;
mod ui;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use config::{LocsyncConfig, find_config, load_config};

#[derive(Parser)]
#[command(name = "locsync", about = "Locale catalog synchronizer")]
struct Cli {
  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand)]
enum Command {
  /// Check that every locale carries every key
  Status {
    /// Path to locsync.toml (auto-detected if omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Translation set label (the lone set if omitted)
    #[arg(short, long)]
    set: Option<String>,
  },
  /// Machine-translate values missing from non-base locales
  Translate {
    /// Path to locsync.toml (auto-detected if omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Translation set label (the lone set if omitted)
    #[arg(short, long)]
    set: Option<String>,
    /// Skip confirmation prompts
    #[arg(short, long)]
    yes: bool,
  },
  /// Write review sheets: new keys only, plus a full merged snapshot
  Export {
    /// Path to locsync.toml (auto-detected if omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Translation set label (the lone set if omitted)
    #[arg(short, long)]
    set: Option<String>,
    /// Skip confirmation prompts
    #[arg(short, long)]
    yes: bool,
  },
  /// Apply a reviewed sheet back onto the locale documents
  Import {
    /// Path to locsync.toml (auto-detected if omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Translation set label (the lone set if omitted)
    #[arg(short, long)]
    set: Option<String>,
    /// Reviewed sheet path (defaults to sheet.reviewed from config)
    #[arg(long)]
    sheet: Option<PathBuf>,
    /// Skip preview and confirmation prompts
    #[arg(short, long)]
    yes: bool,
  },
}

/// Resolve config path (explicit or auto-detected) and parse it.
fn resolve_config(explicit: Option<PathBuf>) -> Result<(PathBuf, LocsyncConfig)> {
  let path = match explicit {
    Some(p) => p,
    None => {
      let cwd = std::env::current_dir().context("failed to get cwd")?;
      find_config(&cwd)?
    }
  };
  let config = load_config(&path)?;
  Ok((path, config))
}

fn base_dir(config_path: &Path) -> &Path {
  config_path.parent().filter(|p| !p.as_os_str().is_empty()).unwrap_or_else(|| Path::new("."))
}

#[tokio::main]
async fn main() -> Result<()> {
  let cli = Cli::parse();

  match cli.command {
    Command::Status { config, set } => {
      let (config_path, cfg) = resolve_config(config)?;
      let set_cfg = cfg.select_set(set.as_deref())?;
      status::run(base_dir(&config_path), &cfg, set_cfg)?;
    }
    Command::Translate { config, set, yes } => {
      let (config_path, cfg) = resolve_config(config)?;
      let set_cfg = cfg.select_set(set.as_deref())?;
      translate::run(base_dir(&config_path), &cfg, set_cfg, yes).await?;
    }
    Command::Export { config, set, yes } => {
      let (config_path, cfg) = resolve_config(config)?;
      let set_cfg = cfg.select_set(set.as_deref())?;
      export::run(base_dir(&config_path), &cfg, set_cfg, yes)?;
    }
    Command::Import { config, set, sheet, yes } => {
      let (config_path, cfg) = resolve_config(config)?;
      let set_cfg = cfg.select_set(set.as_deref())?;
      import::run(base_dir(&config_path), &cfg, set_cfg, sheet, yes)?;
    }
  }

  Ok(())
}
