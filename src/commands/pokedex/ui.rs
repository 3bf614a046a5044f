//! Handles the UI creation for the `pokedex` command.

use crate::interactions::ids::{POKEDEX_NEXT, POKEDEX_PREV};
use crate::services::pokedex::PageResult;
use crate::ui::buttons::Btn;
use crate::ui::style::{COLOR_POKEDEX, EMOJI_NEXT, EMOJI_PREVIOUS};
use serenity::builder::{CreateActionRow, CreateEmbed};
use std::fmt::Write;

/// Embed body text. Split out from the embed because serenity builders can't be
/// inspected after construction.
pub fn describe(page: &PageResult) -> String {
    let mut out = format!(
        "{} has caught {} Pokemon and has {} Pokemon left.\n",
        page.player_name, page.caught, page.uncaught
    );
    if page.entries.is_empty() {
        return out;
    }
    let _ = writeln!(
        out,
        "Uncaught Pokemon Pages {}/{}:",
        page.current_page, page.total_pages
    );
    for entry in &page.entries {
        let _ = write!(out, "ID: {}, Name: {}", entry.id, entry.name);
        if let Some(evolve) = entry.evolve {
            let _ = write!(out, ", Evolve: {evolve}");
        }
        out.push('\n');
    }
    out
}

pub fn create_pokedex_embed(page: &PageResult) -> CreateEmbed {
    CreateEmbed::new()
        .title("Pokedex")
        .description(describe(page))
        .color(COLOR_POKEDEX)
}

/// The previous/next controls attached while a session is active.
pub fn create_nav_row() -> CreateActionRow {
    CreateActionRow::Buttons(vec![
        Btn::nav(POKEDEX_PREV, EMOJI_PREVIOUS),
        Btn::nav(POKEDEX_NEXT, EMOJI_NEXT),
    ])
}
