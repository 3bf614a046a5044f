//! Central UI style constants and helpers.
pub const COLOR_POKEDEX: u32 = 0xE3350D; // Pokedex red
pub const COLOR_ALERT: u32 = 0xE74C3C; // Red

pub const EMOJI_PREVIOUS: &str = "◀️";
pub const EMOJI_NEXT: &str = "▶️";

// Standard target width for padded button labels (approx char count before Discord trimming)
pub const BTN_W_NAV: usize = 4;

/// Pads a label to a target visible width using spaces so action bars align better.
/// Discord strips excessive trailing spaces, so padding is capped at 2.
pub fn pad_label(label: &str, target_min: usize) -> String {
    let len = label.chars().count();
    if len >= target_min {
        return label.to_string();
    }
    format!("{label}{pad}", pad = " ".repeat((target_min - len).min(2)))
}

pub fn pad_nav(label: &str) -> String {
    pad_label(label, BTN_W_NAV)
}

use serenity::builder::CreateEmbed;

/// Convenience builder for an alert/error-styled embed.
pub fn error_embed<T: Into<String>, U: Into<String>>(title: T, description: U) -> CreateEmbed {
    CreateEmbed::new()
        .title(title)
        .description(description)
        .color(COLOR_ALERT)
}
