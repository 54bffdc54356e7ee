use thiserror::Error;

/// Precondition failures reported synchronously by
/// [`Relocator::start`][crate::Relocator::start].  No partial run state is
/// ever left behind: a failed `start` leaves the scheduler exactly as it was.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RelocateError {
    #[error("destination count {destinations} does not match movable count {movables}")]
    LengthMismatch {
        destinations: usize,
        movables:     usize,
    },

    #[error("nothing to relocate: destination and movable lists are empty")]
    EmptyInput,

    #[error("batch size must be > 0")]
    ZeroBatchSize,

    #[error("tick interval must be > 0")]
    ZeroInterval,

    #[error("a relocation run is already active")]
    AlreadyActive,
}

pub type RelocateResult<T> = Result<T, RelocateError>;
