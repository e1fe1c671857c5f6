/* src/cli/core/src/config/mod.rs */

mod loader;

#[cfg(test)]
mod tests;

pub use loader::{find_config, load_config};

#[cfg(test)]
pub use loader::{CONFIG_FILE, parse_config};
