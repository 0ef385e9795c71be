//! HTTP surface of the calculator.
//!
//! ```text
//! POST /{operation} ──→ validate ──→ dispatch ──→ calc::Operation::apply
//!                          │             │
//!                          └── ApiError ─┴──→ {"detail": ...}
//! ```

pub mod dispatch;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod server;
pub mod shutdown;
pub mod tracing;
pub mod validate;

pub use dispatch::dispatch;
pub use dto::{ErrorBody, HealthStatus, OperationRequest, OperationResult};
pub use error::ApiError;
pub use handlers::AppState;
pub use router::build_router;
pub use server::{CalculatorServer, ServerError, ServerHandle};
pub use self::tracing::init_tracing;
pub use validate::{validate_request, ValidationError, ValidationReason};
