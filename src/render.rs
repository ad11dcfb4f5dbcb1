use std::io::{self, Write};

use menuplan_mealplan::Draw;
use menuplan_shared::{DAYS, DayEntry, Settings, WeekPlan};

const TODAY_MARKER: &str = " ← сегодня";

pub fn write_header(out: &mut impl Write, draw: &Draw, settings: &Settings) -> io::Result<()> {
    let day = DAYS.get(draw.today_index).copied().unwrap_or_default();

    writeln!(out, "Сегодня: {day}, дата: {}", draw.date)?;
    writeln!(
        out,
        "Профиль: {}, калории: {}, daily_mode: {}",
        settings.profile, settings.calories, settings.daily_mode
    )?;

    if !settings.exclude.is_empty() {
        writeln!(out, "Исключения: {}", settings.exclude.join(", "))?;
    }

    Ok(())
}

/// Week table, one block per day, with today's block marked.
pub fn write_week(out: &mut impl Write, week: &WeekPlan, today_index: usize) -> io::Result<()> {
    writeln!(out, "\n=== План питания на неделю ===")?;

    for (index, entry) in week.days().iter().enumerate() {
        let marker = if index == today_index { TODAY_MARKER } else { "" };

        writeln!(out, "\n{}{marker}", entry.day.to_uppercase())?;
        for (slot, dish) in entry.meals.iter() {
            writeln!(out, "  {}: {dish}", slot.label())?;
        }
    }

    Ok(())
}

/// Today's meals as cards.
pub fn write_today(out: &mut impl Write, today: &DayEntry) -> io::Result<()> {
    writeln!(out, "\n=== Меню на сегодня: {} ===", today.day)?;

    for (slot, dish) in today.meals.iter() {
        writeln!(out, "\n[{}]\n  {dish}", slot.label())?;
    }

    Ok(())
}
