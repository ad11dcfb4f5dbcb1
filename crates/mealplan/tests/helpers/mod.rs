#![allow(dead_code)]

use menuplan_mealplan::{FixedClock, MemoryStorage, Planner};
use menuplan_shared::{DailyMode, Profile, Settings};
use time::Date;

pub fn planner(today: Date) -> Planner<MemoryStorage, FixedClock> {
    Planner::new(MemoryStorage::new(), FixedClock(today))
}

pub fn planner_with(storage: MemoryStorage, today: Date) -> Planner<MemoryStorage, FixedClock> {
    Planner::new(storage, FixedClock(today))
}

pub fn settings(profile: Profile, calories: u32, daily_mode: DailyMode) -> Settings {
    Settings {
        profile,
        calories,
        exclude: vec![],
        daily_mode,
    }
}
