use crate::api::dto::{OperationRequest, OperationResult};
use crate::calc::{DomainError, Operation};

/// Runs a validated request through the operation table and builds the
/// response envelope.
///
/// `NaN` and infinite results cannot be encoded in JSON and are reported
/// as [`DomainError::NonFiniteResult`].
pub fn dispatch(
    operation: Operation,
    request: OperationRequest,
) -> Result<OperationResult, DomainError> {
    let result = operation.apply(request.a, request.b)?;
    if !result.is_finite() {
        return Err(DomainError::NonFiniteResult);
    }

    Ok(OperationResult {
        result,
        operation,
        operands: request,
    })
}
