//! Contains the data structures that map to database rows.

/// One row of the `pokedex` reference table.
#[derive(sqlx::FromRow, Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    #[sqlx(rename = "pokemonid")]
    pub id: i32,
    pub name: String,
    /// Id of the evolution target. Not a foreign key; may point at nothing.
    pub evolve: Option<i32>,
}
