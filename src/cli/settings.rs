use std::io::{self, Write};

use crate::config::Config;

/// Prints the stored settings, or the defaults when none are stored.
pub fn print_settings(config: Config) -> anyhow::Result<()> {
    let mut planner = super::open_planner(&config)?;
    let settings = planner.settings().load();

    let mut out = io::stdout().lock();
    writeln!(out, "{}", serde_json::to_string_pretty(&settings)?)?;

    Ok(())
}
