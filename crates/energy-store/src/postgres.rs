//! PostgreSQL storage implementation.
//!
//! This module provides the `PgStore` implementation of the `Store` trait.

use async_trait::async_trait;
use futures::TryStreamExt;
use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::{PgPool, Row};

use energy_core::{
    interval_labels, AccountSummary, DateRange, Pagination, Readings, Substation, UsageRecord,
};

use crate::error::Result;
use crate::schema;
use crate::Store;

/// PostgreSQL-backed storage implementation.
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    /// Connect to the database at `url` with a pool of up to `max_connections`.
    ///
    /// # Errors
    ///
    /// Returns an error if the initial connection cannot be established.
    pub async fn connect(url: &str, max_connections: u32) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(url)
            .await?;

        tracing::debug!(max_connections, "PostgreSQL pool connected");

        Ok(Self { pool })
    }

    /// Wrap an existing pool.
    #[must_use]
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    /// LIMIT and OFFSET bind values.
    fn page_binds(page: Pagination) -> (i64, i64) {
        (
            i64::from(page.limit()),
            i64::try_from(page.offset()).unwrap_or(i64::MAX),
        )
    }
}

fn decode_account(row: &PgRow) -> Result<AccountSummary> {
    Ok(AccountSummary {
        account_no: row.try_get("account_no")?,
        account_type: row.try_get::<Option<String>, _>(schema::ACCOUNT_TYPE_ALIAS)?,
        substation: row.try_get::<Option<String>, _>("substation")?,
        transformer: row.try_get::<Option<String>, _>("transformer")?,
        zip_code: row.try_get::<Option<String>, _>("zip_code")?,
    })
}

fn decode_substation(row: &PgRow) -> Result<Substation> {
    Ok(Substation {
        substation: row.try_get::<Option<String>, _>("substation")?,
        transformer: row.try_get::<Option<String>, _>("transformer")?,
    })
}

fn decode_usage(row: &PgRow) -> Result<UsageRecord> {
    let values = interval_labels()
        .iter()
        .map(|label| row.try_get::<Option<f64>, _>(label.as_str()))
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok(UsageRecord {
        account_no: row.try_get("account_no")?,
        date: row.try_get("date")?,
        substation: row.try_get::<Option<String>, _>("substation")?,
        transformer: row.try_get::<Option<String>, _>("transformer")?,
        readings: Readings::from_vec(values)?,
    })
}

#[async_trait]
impl Store for PgStore {
    async fn list_accounts(&self, page: Pagination) -> Result<Vec<AccountSummary>> {
        let (limit, offset) = Self::page_binds(page);
        let rows = sqlx::query(schema::list_accounts_sql())
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(decode_account).collect()
    }

    async fn list_account_numbers(&self, page: Pagination) -> Result<Vec<String>> {
        let (limit, offset) = Self::page_binds(page);
        let numbers = sqlx::query_scalar::<_, String>(schema::list_account_numbers_sql())
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await?;

        Ok(numbers)
    }

    async fn list_substations(&self, page: Pagination) -> Result<Vec<Substation>> {
        let (limit, offset) = Self::page_binds(page);
        let rows = sqlx::query(schema::list_substations_sql())
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(decode_substation).collect()
    }

    async fn account_usage(
        &self,
        account_no: &str,
        range: DateRange,
        page: Pagination,
    ) -> Result<Vec<UsageRecord>> {
        let (limit, offset) = Self::page_binds(page);

        tracing::debug!(
            account_no,
            start = %range.start,
            end = %range.end,
            limit,
            offset,
            "Querying account usage"
        );

        let mut rows = sqlx::query(schema::account_usage_sql())
            .bind(account_no)
            .bind(range.start)
            .bind(range.end)
            .bind(limit)
            .bind(offset)
            .fetch(&self.pool);

        let mut records = Vec::new();
        while let Some(row) = rows.try_next().await? {
            records.push(decode_usage(&row)?);
        }

        Ok(records)
    }

    async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
