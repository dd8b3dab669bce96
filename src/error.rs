use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChainError {
    /// A linkage check failed during validation. The chain must be treated
    /// as corrupted from this block onward; there is no recovery.
    #[error("invalid chain: linkage broken at block #{index}")]
    ChainInvalid { index: u64 },

    #[error("index {index} out of range for chain of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, ChainError>;
