use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, IntoStaticStr, VariantArray};

/// Weekday labels, Monday first.
pub const DAYS: [&str; 7] = [
    "Понедельник",
    "Вторник",
    "Среда",
    "Четверг",
    "Пятница",
    "Суббота",
    "Воскресенье",
];

#[derive(
    EnumString,
    Display,
    VariantArray,
    IntoStaticStr,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Snack,
    Dinner,
}

impl MealSlot {
    pub fn name(&self) -> &'static str {
        (*self).into()
    }

    pub fn label(&self) -> &'static str {
        match self {
            MealSlot::Breakfast => "Завтрак",
            MealSlot::Lunch => "Обед",
            MealSlot::Snack => "Перекус",
            MealSlot::Dinner => "Ужин",
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Meals {
    pub breakfast: String,
    pub lunch: String,
    pub snack: String,
    pub dinner: String,
}

impl Meals {
    /// Builds the meals of a day by asking `f` for every slot, in slot order.
    pub fn from_fn(mut f: impl FnMut(MealSlot) -> String) -> Self {
        Self {
            breakfast: f(MealSlot::Breakfast),
            lunch: f(MealSlot::Lunch),
            snack: f(MealSlot::Snack),
            dinner: f(MealSlot::Dinner),
        }
    }

    pub fn get(&self, slot: MealSlot) -> &str {
        match slot {
            MealSlot::Breakfast => &self.breakfast,
            MealSlot::Lunch => &self.lunch,
            MealSlot::Snack => &self.snack,
            MealSlot::Dinner => &self.dinner,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (MealSlot, &str)> {
        MealSlot::VARIANTS
            .iter()
            .map(move |slot| (*slot, self.get(*slot)))
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct DayEntry {
    pub day: String,
    pub meals: Meals,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(transparent)]
pub struct WeekPlan {
    days: Vec<DayEntry>,
}

impl WeekPlan {
    pub fn new(days: Vec<DayEntry>) -> Self {
        Self { days }
    }

    pub fn days(&self) -> &[DayEntry] {
        &self.days
    }

    pub fn day(&self, index: usize) -> Option<&DayEntry> {
        self.days.get(index)
    }

    /// A full week has exactly one entry per weekday.
    pub fn is_complete(&self) -> bool {
        self.days.len() == DAYS.len()
    }
}
