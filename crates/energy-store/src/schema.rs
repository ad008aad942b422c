//! Table layout and SQL statements.
//!
//! Columns are cast to fixed SQL types in every statement so that textual and
//! numeric storage of identifiers decode the same way. Pagination happens on
//! the uncast values so ordering follows the stored type. Rows without an
//! account number are not listed, and NULL attributes sort first.

use std::sync::OnceLock;

use energy_core::interval_labels;

/// The usage table.
pub const TABLE: &str = "energy_data";

/// Column names on the usage table.
pub mod col {
    /// Account identifier.
    pub const ACCOUNT_NO: &str = "account_no";
    /// Account type.
    pub const TYPE: &str = "type";
    /// Substation identifier.
    pub const SUBSTATION: &str = "substation";
    /// Transformer identifier.
    pub const TRANSFORMER: &str = "transformer";
    /// Account location.
    pub const ZIP_CODE: &str = "zip_code";
    /// Day of the readings.
    pub const DATE: &str = "date";
}

/// Alias used for the account type, since `type` is a Rust keyword.
pub const ACCOUNT_TYPE_ALIAS: &str = "account_type";

/// Quote an identifier for PostgreSQL.
#[must_use]
pub fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

/// Distinct accounts, paged by account number. Binds: `$1` limit, `$2` offset.
#[must_use]
pub fn list_accounts_sql() -> &'static str {
    static SQL: OnceLock<String> = OnceLock::new();
    SQL.get_or_init(|| {
        let cols = [col::ACCOUNT_NO, col::TYPE, col::SUBSTATION, col::TRANSFORMER, col::ZIP_CODE]
            .map(quote_ident)
            .join(", ");
        format!(
            "SELECT page.{account}::text AS account_no, \
                    page.{ty}::text AS {alias}, \
                    page.{sub}::text AS substation, \
                    page.{tx}::text AS transformer, \
                    page.{zip}::text AS zip_code \
             FROM (SELECT DISTINCT {cols} FROM {table} WHERE {account} IS NOT NULL \
                   ORDER BY {account}, {ty} NULLS FIRST, {sub} NULLS FIRST, \
                            {tx} NULLS FIRST, {zip} NULLS FIRST \
                   LIMIT $1 OFFSET $2) AS page \
             ORDER BY page.{account}, page.{ty} NULLS FIRST, page.{sub} NULLS FIRST, \
                      page.{tx} NULLS FIRST, page.{zip} NULLS FIRST",
            account = quote_ident(col::ACCOUNT_NO),
            ty = quote_ident(col::TYPE),
            sub = quote_ident(col::SUBSTATION),
            tx = quote_ident(col::TRANSFORMER),
            zip = quote_ident(col::ZIP_CODE),
            alias = ACCOUNT_TYPE_ALIAS,
            table = quote_ident(TABLE),
        )
    })
}

/// Distinct account numbers. Binds: `$1` limit, `$2` offset.
#[must_use]
pub fn list_account_numbers_sql() -> &'static str {
    static SQL: OnceLock<String> = OnceLock::new();
    SQL.get_or_init(|| {
        format!(
            "SELECT page.{account}::text AS account_no \
             FROM (SELECT DISTINCT {account} FROM {table} WHERE {account} IS NOT NULL \
                   ORDER BY {account} LIMIT $1 OFFSET $2) AS page \
             ORDER BY page.{account}",
            account = quote_ident(col::ACCOUNT_NO),
            table = quote_ident(TABLE),
        )
    })
}

/// Distinct substation/transformer pairs. Binds: `$1` limit, `$2` offset.
#[must_use]
pub fn list_substations_sql() -> &'static str {
    static SQL: OnceLock<String> = OnceLock::new();
    SQL.get_or_init(|| {
        format!(
            "SELECT page.{sub}::text AS substation, page.{tx}::text AS transformer \
             FROM (SELECT DISTINCT {sub}, {tx} FROM {table} \
                   ORDER BY {sub} NULLS FIRST, {tx} NULLS FIRST LIMIT $1 OFFSET $2) AS page \
             ORDER BY page.{sub} NULLS FIRST, page.{tx} NULLS FIRST",
            sub = quote_ident(col::SUBSTATION),
            tx = quote_ident(col::TRANSFORMER),
            table = quote_ident(TABLE),
        )
    })
}

/// Comma-separated interval columns, each cast to `float8` and aliased to its label.
#[must_use]
pub fn interval_columns_sql() -> &'static str {
    static SQL: OnceLock<String> = OnceLock::new();
    SQL.get_or_init(|| {
        interval_labels()
            .iter()
            .map(|label| {
                let ident = quote_ident(label);
                format!("{ident}::float8 AS {ident}")
            })
            .collect::<Vec<_>>()
            .join(", ")
    })
}

/// Usage rows for one account and date range.
///
/// Binds: `$1` account number, `$2` start date, `$3` end date, `$4` limit, `$5` offset.
#[must_use]
pub fn account_usage_sql() -> &'static str {
    static SQL: OnceLock<String> = OnceLock::new();
    SQL.get_or_init(|| {
        format!(
            "SELECT {account}::text AS account_no, {date}::date AS date, {intervals}, \
                    {sub}::text AS substation, {tx}::text AS transformer \
             FROM {table} \
             WHERE {account}::text = $1 AND {date}::date >= $2 AND {date}::date <= $3 \
             ORDER BY {date} \
             LIMIT $4 OFFSET $5",
            account = quote_ident(col::ACCOUNT_NO),
            date = quote_ident(col::DATE),
            intervals = interval_columns_sql(),
            sub = quote_ident(col::SUBSTATION),
            tx = quote_ident(col::TRANSFORMER),
            table = quote_ident(TABLE),
        )
    })
}
