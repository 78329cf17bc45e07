use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_CHAIN_ID: AtomicU64 = AtomicU64::new(0);

/// Fresh identity for a newly created [`Chain`](crate::Chain).
pub(crate) fn next_chain_id() -> u64 {
    NEXT_CHAIN_ID.fetch_add(1, Ordering::Relaxed)
}

/// Identifies a node inside the [`Chain`](crate::Chain) that created it.
///
/// A handle carries the identity of its chain, so it is rejected by any other
/// chain even when the index would be in range there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Handle {
    pub(crate) chain: u64,
    pub(crate) index: usize,
}

impl Handle {
    pub(crate) fn new(chain: u64, index: usize) -> Self {
        Self { chain, index }
    }

    /// Returns the raw numeric identifier for debugging or external maps.
    pub fn as_raw(&self) -> usize {
        self.index
    }
}
