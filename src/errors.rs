use crate::handle::Handle;

/// Errors that can occur when operating on a chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ChainError {
    #[error("invalid handle {}", .0.as_raw())]
    InvalidHandle(Handle),

    #[error("cycle detected at node {}", .at.as_raw())]
    Cycle { at: Handle },

    #[error("render depth limit of {limit} nodes exceeded")]
    DepthExceeded { limit: usize },
}
