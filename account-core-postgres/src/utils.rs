use std::error::Error;
use std::net::IpAddr;
use std::str::FromStr;

use account_core_api::UniqueField;
use account_core_db::repository::UniqueViolation;
use heapless::String as HeaplessString;
use sqlx::{postgres::PgRow, Row};

/// A trait for converting a database row into a model.
pub trait TryFromRow<R>: Sized {
    /// Performs the conversion.
    fn try_from_row(row: &R) -> Result<Self, Box<dyn Error + Send + Sync>>;
}

/// Retrieves a required `HeaplessString` from a row.
pub fn get_heapless_string<const N: usize>(
    row: &PgRow,
    col_name: &str,
) -> Result<HeaplessString<N>, Box<dyn Error + Send + Sync>> {
    let s: String = row.try_get(col_name)?;
    HeaplessString::from_str(&s).map_err(|_| {
        format!("Value for column '{col_name}' is too long (max {N} bytes)").into()
    })
}

/// Retrieves an optional `HeaplessString` from a row.
pub fn get_optional_heapless_string<const N: usize>(
    row: &PgRow,
    col_name: &str,
) -> Result<Option<HeaplessString<N>>, Box<dyn Error + Send + Sync>> {
    let s: Option<String> = row.try_get(col_name)?;
    s.map(|val| HeaplessString::from_str(&val))
        .transpose()
        .map_err(|_| {
            format!("Value for column '{col_name}' is too long (max {N} bytes)").into()
        })
}

/// Retrieves an optional IP address stored as text.
pub fn get_optional_ip_address(
    row: &PgRow,
    col_name: &str,
) -> Result<Option<IpAddr>, Box<dyn Error + Send + Sync>> {
    let s: Option<String> = row.try_get(col_name)?;
    s.map(|val| {
        val.parse::<IpAddr>()
            .map_err(|e| format!("Invalid IP address in column '{col_name}': {e}").into())
    })
    .transpose()
}

/// Maps a unique index name of the `account` table to the field it guards.
pub fn unique_field_for_constraint(constraint: &str) -> Option<UniqueField> {
    match constraint {
        "account_email_unique" => Some(UniqueField::Email),
        "account_username_unique" => Some(UniqueField::Username),
        _ => None,
    }
}

/// Turns unique violations on `account` into [`UniqueViolation`]; other
/// errors pass through unchanged.
pub fn map_write_error(err: sqlx::Error) -> Box<dyn Error + Send + Sync> {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_unique_violation() {
            if let Some(field) = db_err.constraint().and_then(unique_field_for_constraint) {
                return Box::new(UniqueViolation::new(field));
            }
        }
    }
    Box::new(err)
}
