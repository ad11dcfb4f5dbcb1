use std::fmt;

use menuplan_shared::{DailyMode, DayEntry, Profile, Result, Settings, WeekPlan};
use time::Date;

use crate::{Clock, SettingsRepository, Storage, derive_week};

/// Prefix shared by every cached week, static or dated.
pub const WEEK_KEY_PREFIX: &str = "planner-week-";
pub const STATIC_WEEK_KEY: &str = "planner-week-static";

/// Storage key a generated week is cached under.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey(String);

impl CacheKey {
    pub fn new(settings: &Settings, today: Date) -> Self {
        match settings.daily_mode {
            DailyMode::Off => Self::fixed(),
            DailyMode::On => Self::dated(today, settings.profile),
        }
    }

    pub fn fixed() -> Self {
        Self(STATIC_WEEK_KEY.to_owned())
    }

    pub fn dated(date: Date, profile: Profile) -> Self {
        Self(format!("{WEEK_KEY_PREFIX}{date}-{profile}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Result of one draw: the week plus where "today" sits in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draw {
    pub week: WeekPlan,
    pub date: Date,
    pub today_index: usize,
}

impl Draw {
    pub fn today(&self) -> Option<&DayEntry> {
        self.week.day(self.today_index)
    }
}

pub struct Planner<S, C> {
    storage: S,
    clock: C,
}

impl<S: Storage, C: Clock> Planner<S, C> {
    pub fn new(storage: S, clock: C) -> Self {
        Self { storage, clock }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    pub fn settings(&mut self) -> SettingsRepository<&mut S> {
        SettingsRepository::new(&mut self.storage)
    }

    pub fn cache_key(&self, settings: &Settings) -> CacheKey {
        CacheKey::new(settings, self.clock.today())
    }

    /// Cached week under `key`, if any.
    ///
    /// Entries that do not decode to a complete week are reported as absent.
    pub fn cached_week(&self, key: &CacheKey) -> Result<Option<WeekPlan>> {
        let Some(raw) = self.storage.get(key.as_str())? else {
            return Ok(None);
        };

        match serde_json::from_str::<WeekPlan>(&raw) {
            Ok(week) if week.is_complete() => Ok(Some(week)),
            Ok(_) => {
                tracing::warn!(key = %key, "cached week is incomplete, ignoring");
                Ok(None)
            }
            Err(err) => {
                tracing::warn!(key = %key, "malformed cached week, ignoring: {err}");
                Ok(None)
            }
        }
    }

    /// Returns the cached week for `settings`, deriving and caching it when absent.
    pub fn generate_week(&mut self, settings: &Settings) -> Result<WeekPlan> {
        let key = self.cache_key(settings);

        if let Some(week) = self.cached_week(&key)? {
            tracing::debug!(key = %key, "week cache hit");
            return Ok(week);
        }

        let settings = settings.clone().normalized();
        let week = derive_week(&settings);
        self.storage.set(key.as_str(), serde_json::to_string(&week)?)?;

        tracing::debug!(
            key = %key,
            profile = %settings.profile,
            calories = settings.calories,
            "week derived"
        );

        Ok(week)
    }

    /// Drops the static week and today's week for the profile of `settings`.
    pub fn clear_cache(&mut self, settings: &Settings) -> Result<()> {
        let dated = CacheKey::dated(self.clock.today(), settings.profile);

        self.storage.remove(STATIC_WEEK_KEY)?;
        self.storage.remove(dated.as_str())?;

        tracing::debug!(key = %dated, "week cache cleared");

        Ok(())
    }

    /// Drops every cached week, whatever its date or profile. Settings are kept.
    pub fn clear_all_weeks(&mut self) -> Result<usize> {
        let removed = self.storage.remove_prefix(WEEK_KEY_PREFIX)?;
        tracing::debug!(removed, "all cached weeks cleared");

        Ok(removed)
    }

    pub fn regenerate_week(&mut self, settings: &Settings) -> Result<WeekPlan> {
        self.clear_cache(settings)?;
        self.generate_week(settings)
    }

    /// Generates the week for `settings` and persists them.
    pub fn draw(&mut self, settings: &Settings, force: bool) -> Result<Draw> {
        let week = if force {
            self.regenerate_week(settings)?
        } else {
            self.generate_week(settings)?
        };

        self.settings().save(settings)?;

        let draw = Draw {
            week,
            date: self.clock.today(),
            today_index: self.clock.today_index(),
        };

        tracing::info!(
            date = %draw.date,
            profile = %settings.profile,
            mode = %settings.daily_mode,
            force,
            "plan drawn"
        );

        Ok(draw)
    }
}
