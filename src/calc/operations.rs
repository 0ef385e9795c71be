//! Pure arithmetic over `f64` operands.
//!
//! Every function is side-effect free. Division and modulo by zero are
//! domain errors rather than `inf`/`NaN`.

use thiserror::Error;

/// Largest integral exponent accepted by [`power`].
pub const MAX_INTEGRAL_EXPONENT: f64 = 1000.0;

/// Mathematically undefined or unrepresentable operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Division by zero is not allowed")]
    DivisionByZero,

    #[error("Modulo by zero is not allowed")]
    ModuloByZero,

    #[error("Exponent too large, potential overflow")]
    ExponentTooLarge,

    /// The operation itself is defined but the `f64` result is `NaN` or infinite.
    #[error("Result is not a finite number")]
    NonFiniteResult,
}

pub fn add(a: f64, b: f64) -> Result<f64, DomainError> {
    Ok(a + b)
}

pub fn subtract(a: f64, b: f64) -> Result<f64, DomainError> {
    Ok(a - b)
}

pub fn multiply(a: f64, b: f64) -> Result<f64, DomainError> {
    Ok(a * b)
}

pub fn divide(a: f64, b: f64) -> Result<f64, DomainError> {
    if b == 0.0 {
        return Err(DomainError::DivisionByZero);
    }
    Ok(a / b)
}

/// `a` raised to `b`.
///
/// Integral exponents beyond [`MAX_INTEGRAL_EXPONENT`] in magnitude are
/// rejected up front. Anything else is left to `f64::powf`, so overflow
/// and `NaN` (e.g. a negative base with a fractional exponent) come back
/// unchanged for the caller to report.
pub fn power(a: f64, b: f64) -> Result<f64, DomainError> {
    if b.fract() == 0.0 && b.abs() > MAX_INTEGRAL_EXPONENT {
        return Err(DomainError::ExponentTooLarge);
    }
    Ok(a.powf(b))
}

/// Floored remainder: the result takes the sign of the divisor.
///
/// `modulo(-10, 3) == 2`, `modulo(10, -3) == -2`, `modulo(-10, -3) == -1`.
pub fn modulo(a: f64, b: f64) -> Result<f64, DomainError> {
    if b == 0.0 {
        return Err(DomainError::ModuloByZero);
    }
    let rem = a % b;
    if rem != 0.0 && (rem < 0.0) != (b < 0.0) {
        Ok(rem + b)
    } else {
        Ok(rem)
    }
}
