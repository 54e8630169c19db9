use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // verbose console while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// How long each notification stays in front in the phone mockup.
pub const NOTIFICATION_PERIOD_MS: u32 = 3000;

/// Duration of the key-figure count-ups.
pub const COUNT_UP_DURATION_MS: i32 = 2000;

/// Scroll offset after which the navigation bar switches to its solid style.
pub const NAV_SOLID_AFTER_PX: f64 = 80.0;

pub const ORGANIZATION: &str = "MFR de Richerenches";
pub const PROJECT_LEAD: &str = "Maxime Chauvin";
pub const CONTACT_ADDRESS: &str = "Richerenches, Vaucluse";
