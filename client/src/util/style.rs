//! CSS class and inline-style builders.

#[cfg(test)]
#[path = "style_test.rs"]
mod style_test;

use catalog::Tone;

/// `"{base} {base}--{tone}"`, e.g. `"stat-card__icon stat-card__icon--success"`.
pub fn tone_class(base: &str, tone: Tone) -> String {
    format!("{base} {base}--{}", tone.slug())
}

/// CSS custom property reference for a palette tone, usable as an SVG paint.
pub fn tone_color(tone: Tone) -> String {
    format!("var(--eco-{})", tone.slug())
}

/// Inline width for a percent progress bar, clamped to 100.
pub fn percent_width(percent: u8) -> String {
    format!("width: {}%", percent.min(100))
}

/// Class for a toggle button that is highlighted when `active`.
pub fn toggle_button_class(base: &str, active: bool) -> String {
    if active { format!("{base} {base}--active") } else { base.to_owned() }
}
