/* src/cli/src/prompt.rs */

use std::io::{self, Write};

use anyhow::{Context, Result};

/// Ask a y/n question on stdin. Anything other than "y"/"yes" declines.
pub fn confirm(question: &str) -> Result<bool> {
  print!("  {question} (y/n): ");
  io::stdout().flush().context("failed to flush stdout")?;
  let mut answer = String::new();
  io::stdin().read_line(&mut answer).context("failed to read from stdin")?;
  let answer = answer.trim().to_lowercase();
  Ok(answer == "y" || answer == "yes")
}
