use crate::config::STAGGER_STEP_MS;
use innisbrook_dashboard::content::Accent;
use innisbrook_dashboard::{CountdownStyle, TimeRemaining};

/// Units shown in the countdown hero, largest first.
/// Months only appear for [`CountdownStyle::MonthsAndDays`].
pub fn countdown_units(remaining: &TimeRemaining, style: CountdownStyle) -> Vec<(&'static str, String)> {
    let mut units = Vec::with_capacity(5);
    if style == CountdownStyle::MonthsAndDays {
        units.push(("Months", remaining.months.to_string()));
    }
    units.push(("Days", remaining.days.to_string()));
    units.push(("Hours", pad2(remaining.hours)));
    units.push(("Minutes", pad2(remaining.minutes)));
    units.push(("Seconds", pad2(remaining.seconds)));
    units
}

pub fn pad2(value: u64) -> String {
    format!("{:02}", value)
}

/// Inline style delaying the entrance animation of the `position`-th item.
pub fn stagger_style(position: usize) -> String {
    format!("animation-delay: {}ms;", position as u32 * STAGGER_STEP_MS)
}

pub fn accent_class(accent: Accent) -> &'static str {
    match accent {
        Accent::Copper => "accent-copper",
        Accent::Emerald => "accent-emerald",
        Accent::Blue => "accent-blue",
    }
}

/// Pick a glyph for a free-text forecast condition.
pub fn condition_glyph(condition: &str) -> &'static str {
    let condition = condition.to_lowercase();
    if condition.contains("storm") || condition.contains("thunder") {
        "⛈"
    } else if condition.contains("rain") || condition.contains("shower") {
        "🌧"
    } else if condition.contains("cloud") || condition.contains("overcast") {
        "⛅"
    } else {
        "☀"
    }
}

pub fn format_temp_range(high_f: i16, low_f: i16) -> String {
    format!("{}° / {}°", high_f, low_f)
}

/// `7340` -> `"7,340 yds"`
pub fn format_yardage(yards: u32) -> String {
    let digits = yards.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{} yds", grouped)
}
