//! Centralized custom_id string constants for interaction components.
//! Every id in the pokedex family starts with `pokedex_` so the handler can route on
//! the first segment.

use crate::commands::pokedex::state::Direction;

pub const POKEDEX_FAMILY: &str = "pokedex";
pub const POKEDEX_PREV: &str = "pokedex_prev";
pub const POKEDEX_NEXT: &str = "pokedex_next";

/// Routing key: the part of a custom_id before the first underscore.
pub fn family(custom_id: &str) -> &str {
    custom_id.split('_').next().unwrap_or("")
}

pub fn nav_direction(custom_id: &str) -> Option<Direction> {
    match custom_id {
        POKEDEX_PREV => Some(Direction::Previous),
        POKEDEX_NEXT => Some(Direction::Next),
        _ => None,
    }
}
