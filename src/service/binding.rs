//! Bind a JSON body onto an already-loaded record.
//!
//! Keys present in the body overwrite the loaded values, keys absent (or `null`) keep them.
//! An explicit empty string therefore clears a field while an omitted one does not.

use crate::error::AppError;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};

pub fn bind_onto<T>(current: &T, body: Value) -> Result<T, AppError>
where
    T: Serialize + DeserializeOwned,
{
    let Value::Object(patch) = body else {
        return Err(AppError::invalid_payload());
    };
    let mut merged = match serde_json::to_value(current) {
        Ok(Value::Object(map)) => map,
        _ => Map::new(),
    };
    for (key, value) in patch {
        if value.is_null() {
            continue;
        }
        merged.insert(key, value);
    }
    serde_json::from_value(Value::Object(merged)).map_err(|e| {
        tracing::debug!(error = %e, "payload does not bind onto record");
        AppError::invalid_payload()
    })
}
