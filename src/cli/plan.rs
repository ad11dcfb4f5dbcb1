use std::io;

use menuplan_shared::{DailyMode, Profile, Settings};

use crate::config::Config;
use crate::render;

/// Values given on the command line, taking precedence over stored settings.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub profile: Option<Profile>,
    pub calories: Option<u32>,
    pub exclude: Option<String>,
    pub daily_mode: Option<DailyMode>,
}

impl Overrides {
    pub fn apply(self, mut settings: Settings) -> Settings {
        if let Some(profile) = self.profile {
            settings.profile = profile;
        }
        if let Some(calories) = self.calories {
            settings.calories = calories;
        }
        if let Some(exclude) = self.exclude {
            settings.exclude = Settings::parse_exclude(&exclude);
        }
        if let Some(daily_mode) = self.daily_mode {
            settings.daily_mode = daily_mode;
        }

        settings.normalized()
    }
}

/// Draws and prints the week.
///
/// Changed settings discard the cached week, as the static slot does not
/// depend on them.
pub fn show(config: Config, overrides: Overrides, regenerate: bool) -> anyhow::Result<()> {
    let mut planner = super::open_planner(&config)?;
    let stored = planner.settings().load();
    let settings = overrides.apply(stored.clone());
    let changed = settings != stored.normalized();

    let draw = planner.draw(&settings, regenerate || changed)?;

    let mut out = io::stdout().lock();
    render::write_header(&mut out, &draw, &settings)?;
    render::write_week(&mut out, &draw.week, draw.today_index)?;
    if let Some(today) = draw.today() {
        render::write_today(&mut out, today)?;
    }

    Ok(())
}

/// Forgets cached weeks so the next draw derives anew.
///
/// Without `all` only the static week and today's week of the stored
/// profile go; with it every cached week does.
pub fn clear(config: Config, all: bool) -> anyhow::Result<()> {
    let mut planner = super::open_planner(&config)?;

    if all {
        let removed = planner.clear_all_weeks()?;
        tracing::info!(removed, "all cached weeks cleared");

        return Ok(());
    }

    let settings = planner.settings().load();
    planner.clear_cache(&settings)?;
    tracing::info!(profile = %settings.profile, "week cache cleared");

    Ok(())
}
