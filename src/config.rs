//! Application-level configuration constants.

use innisbrook_dashboard::CountdownStyle;
use log::LevelFilter;

// Countdown
pub const TARGET_INSTANT: &str = "2026-05-16T08:00:00-04:00";
pub const COUNTDOWN_STYLE: CountdownStyle = CountdownStyle::DaysOnly;
pub const COUNTDOWN_TICK_MS: u32 = 1_000;

// Featured course rotation
pub const ROTATION_PERIOD_MS: u32 = 8_000;

// Entrance animation
pub const STAGGER_STEP_MS: u32 = 100;

pub const LOG_LEVEL: LevelFilter = LevelFilter::Info;
