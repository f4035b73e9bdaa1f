use thiserror::Error;

/// Recoverable failures of the quantization routines.
///
/// Everything here is caller-recoverable by design: the order-entry form
/// disables its submit button on `InvalidPrice`, the data layer degrades to
/// placeholders on `Query`. Nothing in the engine panics on caller input.
/// The remaining failure modes in the taxonomy are deliberately fail-soft
/// and never surface as errors: unknown assets resolve to a sentinel scale,
/// overlong precision is clamped, and malformed volume text reduces to an
/// empty string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QuantError {
    #[error("Invalid price: {0}")]
    InvalidPrice(String),

    #[error("Ledger query failed: {0}")]
    Query(String),
}

pub type QuantResult<T> = std::result::Result<T, QuantError>;
