//! Animation timing for staggered entrances.
//!
//! Delays are plain values rendered into inline styles; the browser runs
//! the animations, nothing here schedules work.

use std::time::Duration;

/// Gap between consecutive grid cards.
pub const STAGGER_STEP: Duration = Duration::from_millis(100);

/// Hero subtitle entrance delay.
pub const HERO_SUBTITLE_DELAY: Duration = Duration::from_millis(200);

/// Hero call-to-action entrance delay.
pub const HERO_CTA_DELAY: Duration = Duration::from_millis(400);

/// Entrance delay of the card at `index` in the visible list.
pub fn stagger_delay(index: usize) -> Duration {
    STAGGER_STEP * u32::try_from(index).unwrap_or(u32::MAX)
}

/// CSS time value in seconds, e.g. `0.3s`.
pub fn css_seconds(delay: Duration) -> String {
    format!("{}s", delay.as_millis() as f64 / 1000.0)
}

/// Inline style delaying an element's entrance animation.
pub fn delay_style(delay: Duration) -> String {
    format!("animation-delay: {};", css_seconds(delay))
}

/// Inline style for the grid item at `index`.
pub fn stagger_style(index: usize) -> String {
    format!(
        "animation-delay: {}; animation-fill-mode: both;",
        css_seconds(stagger_delay(index))
    )
}
