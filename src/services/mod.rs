//! Service layer sitting between command/interaction handlers and the data sources.

pub mod pokedex;
