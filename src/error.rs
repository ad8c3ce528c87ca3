use std::collections::TryReserveError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HeapError {
    #[error("initial capacity must be at least 1")]
    ZeroCapacity,
    #[error("capacity overflow while growing from {current} slots")]
    CapacityOverflow { current: usize },
    #[error("failed to allocate heap storage")]
    AllocationFailed(#[from] TryReserveError),
}

pub type Result<T> = std::result::Result<T, HeapError>;
