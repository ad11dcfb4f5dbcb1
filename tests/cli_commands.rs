//! Tests for CLI commands (show, settings, clear)

use menuplan::Config;
use menuplan::cli::Overrides;
use menuplan::config::{LoggingConfig, PlannerConfig, StorageConfig};
use menuplan_mealplan::{
    FileStorage, SETTINGS_KEY, STATIC_WEEK_KEY, SettingsRepository, Storage, derive_week,
};
use menuplan_shared::{DailyMode, Profile, Settings, WeekPlan};
use temp_dir::TempDir;

fn config(dir: &TempDir) -> Config {
    Config {
        storage: StorageConfig {
            path: dir.child("storage.json").to_string_lossy().into_owned(),
        },
        planner: PlannerConfig::default(),
        logging: LoggingConfig::default(),
    }
}

#[test]
fn test_show_persists_settings_and_week() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let config = config(&dir);

    let overrides = Overrides {
        profile: Some(Profile::Vegetarian),
        calories: Some(2000),
        exclude: Some("Тофу".to_owned()),
        daily_mode: Some(DailyMode::Off),
    };
    menuplan::cli::show(config.clone(), overrides, false)?;

    let storage = FileStorage::open(&config.storage.path)?;
    assert!(storage.get(STATIC_WEEK_KEY)?.is_some());

    let settings = SettingsRepository::new(storage).load();
    assert_eq!(settings.profile, Profile::Vegetarian);
    assert_eq!(settings.calories, 2000);
    assert_eq!(settings.exclude, vec!["тофу".to_owned()]);
    assert_eq!(settings.daily_mode, DailyMode::Off);

    Ok(())
}

#[test]
fn test_show_reuses_stored_settings() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let config = config(&dir);

    let overrides = Overrides {
        profile: Some(Profile::Quick),
        ..Default::default()
    };
    menuplan::cli::show(config.clone(), overrides, false)?;
    menuplan::cli::show(config.clone(), Overrides::default(), true)?;

    let storage = FileStorage::open(&config.storage.path)?;
    assert_eq!(SettingsRepository::new(storage).load().profile, Profile::Quick);

    Ok(())
}

#[test]
fn test_clear_drops_static_week() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let config = config(&dir);

    let overrides = Overrides {
        daily_mode: Some(DailyMode::Off),
        ..Default::default()
    };
    menuplan::cli::show(config.clone(), overrides, false)?;
    menuplan::cli::clear(config.clone(), false)?;

    let storage = FileStorage::open(&config.storage.path)?;
    assert_eq!(storage.get(STATIC_WEEK_KEY)?, None);

    Ok(())
}

#[test]
fn test_show_with_changed_settings_replaces_static_week() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let config = config(&dir);

    let overrides = Overrides {
        daily_mode: Some(DailyMode::Off),
        ..Default::default()
    };
    menuplan::cli::show(config.clone(), overrides, false)?;

    let overrides = Overrides {
        profile: Some(Profile::Vegetarian),
        exclude: Some("рыба".to_owned()),
        ..Default::default()
    };
    menuplan::cli::show(config.clone(), overrides, false)?;

    let storage = FileStorage::open(&config.storage.path)?;
    let week: WeekPlan = serde_json::from_str(&storage.get(STATIC_WEEK_KEY)?.unwrap())?;
    let expected = derive_week(&Settings {
        profile: Profile::Vegetarian,
        exclude: vec!["рыба".to_owned()],
        daily_mode: DailyMode::Off,
        ..Default::default()
    });

    assert_eq!(week, expected);
    assert_eq!(week.day(0).unwrap().meals.lunch, "Паста с грибами и сливочным соусом");

    Ok(())
}

#[test]
fn test_show_with_same_settings_keeps_cached_week() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let config = config(&dir);

    let overrides = Overrides {
        daily_mode: Some(DailyMode::Off),
        ..Default::default()
    };
    menuplan::cli::show(config.clone(), overrides.clone(), false)?;

    let mut storage = FileStorage::open(&config.storage.path)?;
    let edited = storage.get(STATIC_WEEK_KEY)?.unwrap().replace("Омлет", "Сырники");
    storage.set(STATIC_WEEK_KEY, edited)?;

    menuplan::cli::show(config.clone(), overrides, false)?;

    let storage = FileStorage::open(&config.storage.path)?;
    assert!(storage.get(STATIC_WEEK_KEY)?.unwrap().contains("Сырники"));

    Ok(())
}

#[test]
fn test_clear_all_drops_every_week() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let config = config(&dir);

    let mut storage = FileStorage::open(&config.storage.path)?;
    storage.set("planner-week-2026-10-01-quick", "[]".to_owned())?;
    storage.set("planner-week-2026-10-02-balanced", "[]".to_owned())?;
    drop(storage);

    menuplan::cli::show(config.clone(), Overrides::default(), false)?;
    menuplan::cli::clear(config.clone(), true)?;

    let storage = FileStorage::open(&config.storage.path)?;
    assert_eq!(storage.keys()?, vec![SETTINGS_KEY]);

    Ok(())
}
