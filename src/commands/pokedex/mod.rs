//! The `pokedex` command: which Pokemon a player still has to catch, paged, with
//! previous/next buttons that stay live for one minute.

pub mod manager;
pub mod run;
pub mod state;
pub mod ui;
