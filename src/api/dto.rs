//! Wire types for the HTTP API.

use serde::{Deserialize, Serialize};

use crate::calc::Operation;

/// Operands of a binary operation, as posted by clients.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OperationRequest {
    #[serde(serialize_with = "wire_number::serialize")]
    pub a: f64,
    #[serde(serialize_with = "wire_number::serialize")]
    pub b: f64,
}

/// Successful calculation envelope.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OperationResult {
    #[serde(serialize_with = "wire_number::serialize")]
    pub result: f64,
    pub operation: Operation,
    pub operands: OperationRequest,
}

/// Body of every non-2xx response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub service: String,
}

/// Integral values within the exact `f64` integer range go out as JSON
/// integers (`15`, not `15.0`).
mod wire_number {
    use serde::Serializer;

    const MAX_EXACT_INT: f64 = 9_007_199_254_740_992.0;

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.fract() == 0.0 && value.abs() <= MAX_EXACT_INT {
            serializer.serialize_i64(*value as i64)
        } else {
            serializer.serialize_f64(*value)
        }
    }
}
