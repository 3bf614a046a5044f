//! Shared UI building blocks (buttons, colors, error embeds).
pub mod buttons;
pub mod style;
