//! Conversion of entity values into store documents.

use crate::StoreError;
use brvm_types::EntityData;
use chrono::NaiveDate;
use serde_json::{Value, json};

/// Builds the documents mirrored for `data`.
///
/// List entities give one document per record. Market status and indices give
/// a single document with a `date` field set to the run date.
///
/// # Errors
///
/// Returns an error if a value cannot be serialized.
pub fn documents_for(data: &EntityData, date: NaiveDate) -> Result<Vec<Value>, StoreError> {
    let documents = match data {
        EntityData::MarketStatus(status) => vec![dated(serde_json::to_value(status)?, date)],
        EntityData::Indices(board) => vec![dated(serde_json::to_value(board)?, date)],
        EntityData::Stocks(quotes) => to_values(quotes)?,
        EntityData::Bonds(quotes) => to_values(quotes)?,
        EntityData::News(items) => to_values(items)?,
    };
    Ok(documents)
}

fn dated(mut document: Value, date: NaiveDate) -> Value {
    if let Value::Object(fields) = &mut document {
        fields.insert("date".to_string(), json!(date.format("%Y-%m-%d").to_string()));
    }
    document
}

fn to_values<T: serde::Serialize>(records: &[T]) -> Result<Vec<Value>, StoreError> {
    records
        .iter()
        .map(|r| serde_json::to_value(r).map_err(StoreError::from))
        .collect()
}
