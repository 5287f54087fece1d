//! Typed accessor over the `number_facts` table.
//!
//! One row per analyzed integer, keyed by the value itself. Reads are
//! existence-checked equality lookups; writes are insert-only (facts
//! for a value never change once computed, so there is no update path).

use sqlx::PgPool;
use syracuse_types::{NumberFacts, StoreKind};

use crate::coordinator::FactStore;
use crate::error::StoreError;

/// Operations on the `number_facts` table.
#[derive(Clone)]
pub struct RelationalFactStore {
    pool: PgPool,
}

impl RelationalFactStore {
    /// Create a new fact store bound to a connection pool.
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Single-row existence-checked read keyed on `value`.
    ///
    /// Absence is a normal outcome, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] on connection or transport
    /// failure.
    pub async fn get(&self, value: i64) -> Result<Option<NumberFacts>, StoreError> {
        let row = sqlx::query_as::<_, NumberFactsRow>(
            r"SELECT value, is_even, is_perfect, is_prime
              FROM number_facts
              WHERE value = $1",
        )
        .bind(value)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| StoreError::unavailable(StoreKind::Relational, e))?;

        Ok(row.map(NumberFactsRow::into_facts))
    }

    /// Insert a new facts row. Returns whether exactly one row was
    /// affected.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicateKey`] if a row for this value
    /// already exists. Returns [`StoreError::Unavailable`] on
    /// connection or transport failure.
    pub async fn put(&self, facts: &NumberFacts) -> Result<bool, StoreError> {
        let result = sqlx::query(
            r"INSERT INTO number_facts (value, is_even, is_perfect, is_prime)
              VALUES ($1, $2, $3, $4)",
        )
        .bind(facts.value)
        .bind(facts.is_even)
        .bind(facts.is_perfect)
        .bind(facts.is_prime)
        .execute(&self.pool)
        .await;

        match result {
            Ok(done) => Ok(done.rows_affected() == 1),
            Err(sqlx::Error::Database(db))
                if db.kind() == sqlx::error::ErrorKind::UniqueViolation =>
            {
                Err(StoreError::DuplicateKey(facts.value))
            }
            Err(e) => Err(StoreError::unavailable(StoreKind::Relational, e)),
        }
    }
}

#[async_trait::async_trait]
impl FactStore for RelationalFactStore {
    async fn get(&self, value: i64) -> Result<Option<NumberFacts>, StoreError> {
        Self::get(self, value).await
    }

    async fn put(&self, facts: &NumberFacts) -> Result<bool, StoreError> {
        Self::put(self, facts).await
    }
}

/// A row from the `number_facts` table.
///
/// Uses runtime types rather than compile-time checked types to avoid
/// requiring a live database during builds.
#[derive(Debug, Clone, sqlx::FromRow)]
struct NumberFactsRow {
    value: i64,
    is_even: bool,
    is_perfect: bool,
    is_prime: bool,
}

impl NumberFactsRow {
    /// Convert the raw row into the shared value object.
    const fn into_facts(self) -> NumberFacts {
        NumberFacts {
            value: self.value,
            is_even: self.is_even,
            is_perfect: self.is_perfect,
            is_prime: self.is_prime,
        }
    }
}
