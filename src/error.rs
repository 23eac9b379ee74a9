use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    #[error("Sample count must be positive, got {0}.")]
    NonPositiveSampleCount(i64),

    #[error("Cannot normalize a quaternion of zero or non-finite length.")]
    DegenerateAccumulator,
}

pub type Result<T> = std::result::Result<T, Error>;
