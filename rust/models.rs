use serde_json::Value;

use crate::error::BotError;

/// A review API answer that passed structural validation.
///
/// Homework entries stay raw until one of them is picked for formatting.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub homeworks: Vec<Value>,
    pub current_date: i64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HomeworkRecord {
    pub homework_name: Option<String>,
    pub status: Option<String>,
}

impl HomeworkRecord {
    pub fn from_value(value: &Value) -> Result<Self, BotError> {
        let result = Self::extract(value);
        if let Err(err) = &result {
            tracing::error!(error = %err, "Malformed homework entry");
        }
        result
    }

    fn extract(value: &Value) -> Result<Self, BotError> {
        let map = value.as_object().ok_or(BotError::TypeMismatch {
            field: "homework",
            expected: "mapping",
        })?;

        Ok(Self {
            homework_name: string_field(map, "homework_name")?,
            status: string_field(map, "status")?,
        })
    }
}

fn string_field(
    map: &serde_json::Map<String, Value>,
    field: &'static str,
) -> Result<Option<String>, BotError> {
    match map.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(BotError::TypeMismatch {
            field,
            expected: "string",
        }),
    }
}
