use thiserror::Error;

/// The C++ demo defines its own PI literal; deliberately NOT
/// `std::f64::consts::PI`, so area results reproduce the demo's exact values.
pub const PI: f64 = 3.14159265359;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FactorialError {
    #[error("factorial is undefined for negative input {0}")]
    Negative(i64),

    #[error("factorial of {0} overflows u64")]
    Overflow(i64),
}

/// Recursive factorial. The C++ demo accepts any `int` and recurses without
/// bound on negative input; here both negative input and u64 overflow are
/// surfaced as explicit domain errors.
pub fn factorial(n: i64) -> Result<u64, FactorialError> {
    if n < 0 {
        return Err(FactorialError::Negative(n));
    }
    checked_factorial(n as u64).ok_or(FactorialError::Overflow(n))
}

fn checked_factorial(n: u64) -> Option<u64> {
    if n <= 1 {
        Some(1)
    } else {
        checked_factorial(n - 1)?.checked_mul(n)
    }
}
