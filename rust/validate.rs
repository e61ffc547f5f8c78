use serde_json::Value;

use crate::error::BotError;
use crate::models::ApiResponse;

/// Checks the shape of a review API answer.
///
/// Checks run in a fixed order and stop at the first failure, which is logged
/// before it is returned.
pub fn check_response(raw: Value) -> Result<ApiResponse, BotError> {
    let result = check_shape(raw);
    if let Err(err) = &result {
        tracing::error!(error = %err, "Review API response failed validation");
    }
    result
}

fn check_shape(raw: Value) -> Result<ApiResponse, BotError> {
    let Value::Object(mut map) = raw else {
        return Err(BotError::TypeMismatch {
            field: "response",
            expected: "mapping",
        });
    };

    if !map.contains_key("homeworks") {
        return Err(BotError::MissingField("homeworks"));
    }
    if !map.contains_key("current_date") {
        return Err(BotError::MissingField("current_date"));
    }

    let homeworks = match map.remove("homeworks") {
        Some(Value::Array(items)) => items,
        _ => {
            return Err(BotError::TypeMismatch {
                field: "homeworks",
                expected: "sequence",
            })
        }
    };

    let current_date = map
        .get("current_date")
        .and_then(Value::as_i64)
        .ok_or(BotError::TypeMismatch {
            field: "current_date",
            expected: "integer",
        })?;

    Ok(ApiResponse {
        homeworks,
        current_date,
    })
}
