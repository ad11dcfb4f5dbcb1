use menuplan_shared::{Result, Settings};

use crate::Storage;

pub const SETTINGS_KEY: &str = "planner-settings";

/// Reads and writes [`Settings`] under [`SETTINGS_KEY`].
pub struct SettingsRepository<S> {
    storage: S,
}

impl<S: Storage> SettingsRepository<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Stored settings merged over the defaults.
    ///
    /// Absent, unreadable or malformed records yield [`Settings::default`].
    pub fn load(&self) -> Settings {
        let raw = match self.storage.get(SETTINGS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Settings::default(),
            Err(err) => {
                tracing::warn!("failed to read settings, using defaults: {err}");
                return Settings::default();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(settings) => settings,
            Err(err) => {
                tracing::warn!("malformed settings, using defaults: {err}");
                Settings::default()
            }
        }
    }

    pub fn save(&mut self, settings: &Settings) -> Result<()> {
        let value = serde_json::to_string(settings)?;
        self.storage.set(SETTINGS_KEY, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStorage;
    use menuplan_shared::{DailyMode, Profile};

    #[test]
    fn test_load_absent_is_default() {
        let repository = SettingsRepository::new(MemoryStorage::new());
        assert_eq!(repository.load(), Settings::default());
    }

    #[test]
    fn test_save_then_load() {
        let settings = Settings {
            profile: Profile::Quick,
            calories: 3100,
            exclude: vec!["банан".to_owned(), "кефир".to_owned()],
            daily_mode: DailyMode::Off,
        };

        let mut repository = SettingsRepository::new(MemoryStorage::new());
        repository.save(&settings).unwrap();

        assert_eq!(repository.load(), settings);
    }

    #[test]
    fn test_malformed_record_falls_back() {
        let mut storage = MemoryStorage::new();
        storage.set(SETTINGS_KEY, "{not json".to_owned()).unwrap();
        assert_eq!(SettingsRepository::new(&mut storage).load(), Settings::default());

        storage
            .set(SETTINGS_KEY, r#"{"profile":"keto"}"#.to_owned())
            .unwrap();
        assert_eq!(SettingsRepository::new(&mut storage).load(), Settings::default());
    }

    #[test]
    fn test_stored_fields_override_defaults() {
        let mut storage = MemoryStorage::new();
        storage
            .set(SETTINGS_KEY, r#"{"profile":"vegetarian","dailyMode":"off"}"#.to_owned())
            .unwrap();

        let settings = SettingsRepository::new(storage).load();
        assert_eq!(settings.profile, Profile::Vegetarian);
        assert_eq!(settings.daily_mode, DailyMode::Off);
        assert_eq!(settings.calories, 2300);
    }
}
