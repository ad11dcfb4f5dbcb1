mod error;
pub mod mealplan;
pub mod settings;

pub use error::*;
pub use mealplan::{DAYS, DayEntry, MealSlot, Meals, WeekPlan};
pub use settings::{DailyMode, Profile, Settings};
