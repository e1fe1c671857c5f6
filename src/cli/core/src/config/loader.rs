/* src/cli/core/src/config/loader.rs */

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use pagemeta::SiteConfig;

pub const CONFIG_FILE: &str = "pagemeta.toml";

/// Walk upward from `start` to find `pagemeta.toml`, like Cargo.toml discovery
pub fn find_config(start: &Path) -> Result<PathBuf> {
  let mut dir =
    start.canonicalize().with_context(|| format!("failed to canonicalize {}", start.display()))?;
  loop {
    let candidate = dir.join(CONFIG_FILE);
    if candidate.is_file() {
      return Ok(candidate);
    }
    if !dir.pop() {
      bail!("{CONFIG_FILE} not found (searched upward from {})", start.display());
    }
  }
}

/// Parse and validate config text. `origin` only labels error messages.
pub fn parse_config(content: &str, origin: &str) -> Result<SiteConfig> {
  let config: SiteConfig =
    toml::from_str(content).with_context(|| format!("failed to parse {origin}"))?;
  config.validate().with_context(|| format!("invalid config in {origin}"))?;
  Ok(config)
}

pub fn load_config(path: &Path) -> Result<SiteConfig> {
  let content =
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
  parse_config(&content, &path.display().to_string())
}
