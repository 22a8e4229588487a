//! Error types for the generator.

/// Errors raised while configuring a generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LehmerError {
    /// The recurrence modulus `M` was zero.
    #[error("Lehmer modulus must be non-zero")]
    ZeroModulus,
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, LehmerError>;
