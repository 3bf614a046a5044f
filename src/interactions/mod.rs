//! This module acts as a central router for all component interactions.
//!
//! The main `handler.rs` file delegates here based on the component's "family"
//! (the custom_id prefix before the first underscore).

pub mod ids;
pub mod pokedex_handler;
pub mod util;
