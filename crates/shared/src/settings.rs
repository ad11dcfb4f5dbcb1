use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, VariantArray};

use crate::Error;

/// Dietary preset selecting which dish pool a plan is drawn from.
#[derive(
    EnumString,
    Display,
    VariantArray,
    Default,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "camelCase")]
#[serde(rename_all = "camelCase")]
pub enum Profile {
    #[default]
    Balanced,
    HighProtein,
    Vegetarian,
    Quick,
}

impl Profile {
    pub fn parse(value: &str) -> crate::Result<Self> {
        value
            .trim()
            .parse()
            .map_err(|_| Error::UnknownProfile(value.to_owned()))
    }
}

/// `On` pins the cached plan to the current date, `Off` keeps a single static plan.
#[derive(
    EnumString,
    Display,
    VariantArray,
    Default,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum DailyMode {
    #[default]
    On,
    Off,
}

pub const DEFAULT_CALORIES: u32 = 2300;

/// User preferences as persisted under `planner-settings`.
///
/// Missing fields fall back to their defaults when deserializing, so a
/// partial record is merged over [`Settings::default`].
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    pub profile: Profile,
    pub calories: u32,
    pub exclude: Vec<String>,
    pub daily_mode: DailyMode,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            profile: Profile::default(),
            calories: DEFAULT_CALORIES,
            exclude: vec![],
            daily_mode: DailyMode::default(),
        }
    }
}

impl Settings {
    /// Splits a comma separated list of exclusion terms.
    pub fn parse_exclude(text: &str) -> Vec<String> {
        normalize_terms(text.split(','))
    }

    pub fn normalized(mut self) -> Self {
        self.exclude = normalize_terms(self.exclude.iter().map(String::as_str));
        self
    }
}

fn normalize_terms<'a>(terms: impl Iterator<Item = &'a str>) -> Vec<String> {
    terms
        .map(|term| term.trim().to_lowercase())
        .filter(|term| !term.is_empty())
        .collect()
}
