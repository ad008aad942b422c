//! In-memory storage implementation.
//!
//! Holds rows of the usage table in a `Vec` and answers queries with the same
//! paging rules as the PostgreSQL backend. Account numbers are compared as
//! strings, so ordering matches PostgreSQL only when `account_no` is stored as
//! text; a numeric column sorts `"987"` before `"1234567890"` there.

use std::collections::BTreeSet;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::NaiveDate;

use energy_core::{AccountSummary, DateRange, Pagination, Readings, Substation, UsageRecord};

use crate::error::{Result, StoreError};
use crate::Store;

/// One row of the usage table.
#[derive(Debug, Clone)]
struct Row {
    account: AccountSummary,
    date: NaiveDate,
    readings: Readings,
}

/// In-memory storage implementation.
#[derive(Debug, Default)]
pub struct MemoryStore {
    rows: Vec<Row>,
    failure: Option<String>,
    queries: AtomicUsize,
    usage_queries: AtomicUsize,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one day of readings for an account.
    #[must_use]
    pub fn with_row(mut self, account: AccountSummary, date: NaiveDate, readings: Readings) -> Self {
        self.rows.push(Row {
            account,
            date,
            readings,
        });
        self
    }

    /// Make every query fail with `message`.
    #[must_use]
    pub fn with_failure(mut self, message: impl Into<String>) -> Self {
        self.failure = Some(message.into());
        self
    }

    /// Number of queries served or rejected so far.
    #[must_use]
    pub fn query_count(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }

    /// Number of account usage queries served or rejected so far.
    #[must_use]
    pub fn usage_query_count(&self) -> usize {
        self.usage_queries.load(Ordering::SeqCst)
    }

    fn begin_query(&self) -> Result<()> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        match &self.failure {
            Some(message) => Err(StoreError::Unavailable(message.clone())),
            None => Ok(()),
        }
    }
}

fn paged<T>(items: impl IntoIterator<Item = T>, page: Pagination) -> Vec<T> {
    let offset = usize::try_from(page.offset()).unwrap_or(usize::MAX);
    let limit = usize::try_from(page.limit()).unwrap_or(usize::MAX);
    items.into_iter().skip(offset).take(limit).collect()
}

#[async_trait]
impl Store for MemoryStore {
    async fn list_accounts(&self, page: Pagination) -> Result<Vec<AccountSummary>> {
        self.begin_query()?;
        let distinct: BTreeSet<_> = self.rows.iter().map(|r| r.account.clone()).collect();
        Ok(paged(distinct, page))
    }

    async fn list_account_numbers(&self, page: Pagination) -> Result<Vec<String>> {
        self.begin_query()?;
        let distinct: BTreeSet<_> = self
            .rows
            .iter()
            .map(|r| r.account.account_no.clone())
            .collect();
        Ok(paged(distinct, page))
    }

    async fn list_substations(&self, page: Pagination) -> Result<Vec<Substation>> {
        self.begin_query()?;
        let distinct: BTreeSet<_> = self
            .rows
            .iter()
            .map(|r| Substation {
                substation: r.account.substation.clone(),
                transformer: r.account.transformer.clone(),
            })
            .collect();
        Ok(paged(distinct, page))
    }

    async fn account_usage(
        &self,
        account_no: &str,
        range: DateRange,
        page: Pagination,
    ) -> Result<Vec<UsageRecord>> {
        self.usage_queries.fetch_add(1, Ordering::SeqCst);
        self.begin_query()?;

        let mut matching: Vec<&Row> = self
            .rows
            .iter()
            .filter(|r| r.account.account_no == account_no && range.contains(r.date))
            .collect();
        matching.sort_by_key(|r| r.date);

        Ok(paged(matching, page)
            .into_iter()
            .map(|r| UsageRecord {
                account_no: r.account.account_no.clone(),
                date: r.date,
                substation: r.account.substation.clone(),
                transformer: r.account.transformer.clone(),
                readings: r.readings,
            })
            .collect())
    }

    async fn ping(&self) -> Result<()> {
        match &self.failure {
            Some(message) => Err(StoreError::Unavailable(message.clone())),
            None => Ok(()),
        }
    }
}
