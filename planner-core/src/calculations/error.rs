use thiserror::Error;

/// Reasons an income calculation or inverse solve cannot produce a result.
///
/// Every calculation entry point returns this as the `Err` arm instead of
/// panicking. Callers are expected to show a generic "unable to calculate"
/// state; the message text is informational only.
#[derive(Debug, Clone, Copy, Error, PartialEq)]
pub enum CalculationError {
    /// A config field is NaN or infinite.
    #[error("invalid input values")]
    InvalidInput,

    /// The target annual net income is non-finite or not positive.
    #[error("invalid target income {0}")]
    InvalidTarget(f64),

    /// Solving for a rate with zero hours per week.
    #[error("cannot calculate with zero hours per week")]
    ZeroHours,

    /// Solving for hours with a zero hourly rate.
    #[error("cannot calculate with a zero hourly rate")]
    ZeroRate,

    /// A 100% tax rate leaves no net income to solve against.
    #[error("cannot calculate with a 100% tax rate")]
    FullTaxRate,
}
