use log::Level;

/// Fraction of a region that has to be on screen before it reveals.
pub const REVEAL_THRESHOLD: f64 = 0.15;

/// Counter tick period in milliseconds.
pub const COUNTER_TICK_MS: u32 = 30;

/// Number of ticks a counter takes to reach its target, at most.
pub const COUNTER_STEPS: u32 = 40;

/// How long the contact form shows its "sent" acknowledgment.
pub const CONTACT_ACK_MS: u32 = 3_000;

pub const HERO_ENTRANCE_DELAY_MS: u32 = 100;

/// Scroll offset in pixels after which the nav bar turns opaque.
pub const NAV_SCROLL_THRESHOLD: f64 = 20.0;

pub const MOBILE_BREAKPOINT: f64 = 768.0;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose output while running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
