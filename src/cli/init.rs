//! Configuration file scaffolding.
//!
//! Writes a commented default `priosort.toml`.

use anyhow::{Context, Result};
use std::{fs, path::Path};

use crate::log;

/// Generate priosort.toml content with comments
pub fn generate_config_template() -> String {
    format!(
        "\
# priosort configuration file (v{})
#
# Cause weights adjust a task's configured base priority, once per cause
# attached to its queuing event. Tasks with no configured priority always
# resolve to the default of 100, regardless of causes.

[weights]
user = 0  # per user-initiated cause
scm = 0   # per source-control change cause
timer = 0 # per timer cause
",
        env!("CARGO_PKG_VERSION")
    )
}

/// Write the default config file.
///
/// Refuses to overwrite an existing file unless `force` is set.
pub fn init_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        log!("error"; "{} already exists (use --force to overwrite)", path.display());
        std::process::exit(1);
    }

    fs::write(path, generate_config_template())
        .with_context(|| format!("Failed to write config file '{}'", path.display()))?;

    log!("init"; "wrote {}", path.display());
    Ok(())
}
