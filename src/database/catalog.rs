//! Catalog queries: every Pokemon a player has not caught yet.

use super::DbPool;
use super::models::CatalogEntry;
use crate::error::PokedexError;
use crate::saves::AcquisitionSet;
use async_trait::async_trait;
use sqlx::{Postgres, QueryBuilder};
use tracing::{debug, instrument};

/// Read-only access to the reference catalog.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Entries whose id is not in `acquired`, ascending by id. An empty set
    /// returns the whole catalog.
    async fn complement(
        &self,
        acquired: &AcquisitionSet,
    ) -> Result<Vec<CatalogEntry>, PokedexError>;
}

/// Builds the complement query. With no caught ids the `WHERE` clause is left out
/// entirely. The caught ids go in as a single array bind so the statement stays
/// under PostgreSQL's bind parameter limit however large the set is.
pub fn complement_query(acquired: &AcquisitionSet) -> QueryBuilder<'static, Postgres> {
    let mut qb = QueryBuilder::new("SELECT pokemonid, name, evolve FROM pokedex");
    if !acquired.is_empty() {
        qb.push(" WHERE pokemonid <> ALL(");
        qb.push_bind(acquired.iter().collect::<Vec<i32>>());
        qb.push(")");
    }
    qb.push(" ORDER BY pokemonid");
    qb
}

/// PostgreSQL-backed catalog.
#[derive(Clone)]
pub struct PgCatalog {
    pool: DbPool,
}

impl PgCatalog {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CatalogStore for PgCatalog {
    #[instrument(level = "debug", skip(self, acquired), fields(excluded = acquired.len()))]
    async fn complement(
        &self,
        acquired: &AcquisitionSet,
    ) -> Result<Vec<CatalogEntry>, PokedexError> {
        let mut qb = complement_query(acquired);
        debug!(target = "pokedex.query", sql = %qb.sql(), "fetching uncaught entries");
        let rows = qb
            .build_query_as::<CatalogEntry>()
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }
}
