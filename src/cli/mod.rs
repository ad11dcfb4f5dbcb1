mod plan;
mod settings;

pub use plan::*;
pub use settings::*;

use menuplan_mealplan::{FileStorage, Planner, SystemClock};

use crate::config::Config;

pub(crate) fn open_planner(config: &Config) -> anyhow::Result<Planner<FileStorage, SystemClock>> {
    let storage = FileStorage::open(&config.storage.path)?;
    let clock = SystemClock::new(config.planner.timezone.to_owned());

    Ok(Planner::new(storage, clock))
}
