use menuplan_shared::{DAYS, DayEntry, MealSlot, Meals, Settings, WeekPlan};

use crate::dish_pool;

/// Text shown instead of a dish that contains an excluded term.
pub const EXCLUDED_DISH: &str = "Блюдо заменено по фильтру: Салат + белок + сложные углеводы";

pub fn day_seed(day_index: usize, calories: u32) -> usize {
    day_index + (calories % 11) as usize
}

pub fn slot_seed(seed: usize, slot: MealSlot) -> usize {
    seed + slot.name().len() * 7
}

pub fn pick_rotating<'a>(items: &[&'a str], seed: usize) -> &'a str {
    items[seed % items.len()]
}

/// Replaces `dish` by [`EXCLUDED_DISH`] when any term is a case-insensitive substring of it.
pub fn apply_exclusions(dish: &str, exclude: &[String]) -> String {
    if exclude.is_empty() {
        return dish.to_owned();
    }

    let text = dish.to_lowercase();
    let blocked = exclude
        .iter()
        .any(|term| text.contains(term.to_lowercase().as_str()));

    if blocked {
        EXCLUDED_DISH.to_owned()
    } else {
        dish.to_owned()
    }
}

/// Derives a fresh week for `settings`, ignoring any cached plan.
pub fn derive_week(settings: &Settings) -> WeekPlan {
    let pool = dish_pool(settings.profile);

    let days = DAYS
        .iter()
        .enumerate()
        .map(|(index, day)| {
            let seed = day_seed(index, settings.calories);
            let meals = Meals::from_fn(|slot| {
                let dish = pick_rotating(pool.slot(slot), slot_seed(seed, slot));
                apply_exclusions(dish, &settings.exclude)
            });

            DayEntry {
                day: (*day).to_owned(),
                meals,
            }
        })
        .collect();

    WeekPlan::new(days)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeds() {
        assert_eq!(day_seed(0, 2300), 1);
        assert_eq!(day_seed(6, 2300), 7);
        assert_eq!(day_seed(2, 2299), 2);
        assert_eq!(slot_seed(1, MealSlot::Breakfast), 64);
        assert_eq!(slot_seed(1, MealSlot::Lunch), 36);
        assert_eq!(slot_seed(1, MealSlot::Snack), 36);
        assert_eq!(slot_seed(1, MealSlot::Dinner), 43);
    }

    #[test]
    fn test_pick_rotating_wraps() {
        let items = ["a", "b", "c", "d"];
        assert_eq!(pick_rotating(&items, 0), "a");
        assert_eq!(pick_rotating(&items, 6), "c");
        assert_eq!(pick_rotating(&items, 67), "d");
    }

    #[test]
    fn test_apply_exclusions() {
        let exclude = vec!["рыб".to_owned()];

        assert_eq!(
            apply_exclusions("Запечённая рыба с овощами", &exclude),
            EXCLUDED_DISH
        );
        assert_eq!(
            apply_exclusions("Рыба с картофелем и салатом", &exclude),
            EXCLUDED_DISH
        );
        assert_eq!(
            apply_exclusions("Индейка с гречкой", &exclude),
            "Индейка с гречкой"
        );
        assert_eq!(apply_exclusions("Индейка с гречкой", &[]), "Индейка с гречкой");
    }

    #[test]
    fn test_exclusion_is_substring_not_token() {
        let exclude = vec!["тост".to_owned()];
        assert_eq!(apply_exclusions("Омлет с томатами и тостом", &exclude), EXCLUDED_DISH);
    }

    #[test]
    fn test_derive_week_has_every_day() {
        let week = derive_week(&Settings::default());

        assert!(week.is_complete());
        let labels = week.days().iter().map(|d| d.day.as_str()).collect::<Vec<_>>();
        assert_eq!(labels, DAYS);
    }
}
