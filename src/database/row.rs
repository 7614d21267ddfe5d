//! Decoding of store rows into domain entities.
//!
//! The typed columns are decoded strictly. Every other column is carried over
//! as JSON according to the storage class SQLite reports for that value.

use crate::domain::{Circuit, Constructor, Driver, Race};
use serde_json::{Map, Number, Value};
use sqlx::sqlite::SqliteRow;
use sqlx::{Column, FromRow, Row, TypeInfo, ValueRef};

pub fn passthrough_columns(row: &SqliteRow, known: &[&str]) -> sqlx::Result<Map<String, Value>> {
    let mut extra = Map::new();
    for column in row.columns() {
        if known.contains(&column.name()) {
            continue;
        }
        extra.insert(column.name().to_owned(), column_value(row, column.ordinal())?);
    }
    Ok(extra)
}

fn column_value(row: &SqliteRow, index: usize) -> sqlx::Result<Value> {
    let raw = row.try_get_raw(index)?;
    if raw.is_null() {
        return Ok(Value::Null);
    }
    let storage_class = raw.type_info().name().to_owned();

    let value = match storage_class.as_str() {
        "INTEGER" | "BOOLEAN" => Value::from(row.try_get::<i64, _>(index)?),
        // NaN and infinities have no JSON form
        "REAL" => Number::from_f64(row.try_get::<f64, _>(index)?)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        "BLOB" => {
            let bytes = row.try_get::<Vec<u8>, _>(index)?;
            Value::from(String::from_utf8_lossy(&bytes).into_owned())
        }
        _ => Value::from(row.try_get::<String, _>(index)?),
    };
    Ok(value)
}

impl<'r> FromRow<'r, SqliteRow> for Circuit {
    fn from_row(row: &'r SqliteRow) -> sqlx::Result<Self> {
        Ok(Self {
            circuit_id: row.try_get("circuitId")?,
            circuit_ref: row.try_get("circuitRef")?,
            name: row.try_get("name")?,
            location: row.try_get("location")?,
            country: row.try_get("country")?,
            extra: passthrough_columns(row, Circuit::COLUMNS)?,
        })
    }
}

impl<'r> FromRow<'r, SqliteRow> for Race {
    fn from_row(row: &'r SqliteRow) -> sqlx::Result<Self> {
        Ok(Self {
            race_id: row.try_get("raceId")?,
            year: row.try_get("year")?,
            round: row.try_get("round")?,
            circuit_id: row.try_get("circuitId")?,
            circuit_name: row.try_get("circuitName")?,
            location: row.try_get("location")?,
            country: row.try_get("country")?,
            extra: passthrough_columns(row, Race::COLUMNS)?,
        })
    }
}

impl<'r> FromRow<'r, SqliteRow> for Driver {
    fn from_row(row: &'r SqliteRow) -> sqlx::Result<Self> {
        Ok(Self {
            driver_id: row.try_get("driverId")?,
            driver_ref: row.try_get("driverRef")?,
            forename: row.try_get("forename")?,
            surname: row.try_get("surname")?,
            extra: passthrough_columns(row, Driver::COLUMNS)?,
        })
    }
}

impl<'r> FromRow<'r, SqliteRow> for Constructor {
    fn from_row(row: &'r SqliteRow) -> sqlx::Result<Self> {
        Ok(Self {
            constructor_id: row.try_get("constructorId")?,
            constructor_ref: row.try_get("constructorRef")?,
            name: row.try_get("name")?,
            extra: passthrough_columns(row, Constructor::COLUMNS)?,
        })
    }
}
