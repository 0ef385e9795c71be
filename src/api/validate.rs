//! Payload validation for operation requests.
//!
//! Runs on the raw body so that every failure is reported as a 400 with the
//! offending field, instead of the extractor's generic rejection.

use std::collections::HashMap;

use serde_json::value::RawValue;
use serde_json::Value;
use thiserror::Error;

use crate::api::dto::OperationRequest;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationReason {
    /// Body is not JSON at all.
    Malformed,
    Missing,
    WrongType,
    NotANumber,
}

/// Rejected request payload. `field` is `"a"`, `"b"` or `"body"`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", self.message())]
pub struct ValidationError {
    pub field: &'static str,
    pub reason: ValidationReason,
}

impl ValidationError {
    pub fn new(field: &'static str, reason: ValidationReason) -> Self {
        Self { field, reason }
    }

    pub fn message(&self) -> String {
        match (self.field, self.reason) {
            ("body", ValidationReason::Malformed) => "Request body is not valid JSON".to_string(),
            ("body", _) => "Request body must be a JSON object".to_string(),
            (field, ValidationReason::Missing) => format!("Field '{field}' is required"),
            (field, ValidationReason::WrongType) => format!("Field '{field}' must be a number"),
            (field, ValidationReason::NotANumber) => {
                format!("Field '{field}' is not a valid finite number")
            }
            (field, ValidationReason::Malformed) => format!("Field '{field}' is malformed"),
        }
    }
}

/// Extracts `a` and `b` from a JSON body.
///
/// Numbers and numeric strings are accepted; `a` is checked before `b`.
///
/// Field values are kept raw until their own check, so a number outside the
/// `f64` range is reported against its field rather than the whole body.
pub fn validate_request(body: &[u8]) -> Result<OperationRequest, ValidationError> {
    let document: &RawValue = serde_json::from_slice(body)
        .map_err(|_| ValidationError::new("body", ValidationReason::Malformed))?;
    let fields: HashMap<String, &RawValue> = serde_json::from_str(document.get())
        .map_err(|_| ValidationError::new("body", ValidationReason::WrongType))?;

    Ok(OperationRequest {
        a: number_field(&fields, "a")?,
        b: number_field(&fields, "b")?,
    })
}

fn number_field(
    fields: &HashMap<String, &RawValue>,
    field: &'static str,
) -> Result<f64, ValidationError> {
    let raw = fields
        .get(field)
        .ok_or_else(|| ValidationError::new(field, ValidationReason::Missing))?;

    // Already known to be well-formed; only out-of-range numbers fail here
    let value: Value = serde_json::from_str(raw.get())
        .map_err(|_| ValidationError::new(field, ValidationReason::NotANumber))?;

    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => return Err(ValidationError::new(field, ValidationReason::WrongType)),
    };

    number
        .filter(|n| n.is_finite())
        .ok_or_else(|| ValidationError::new(field, ValidationReason::NotANumber))
}
