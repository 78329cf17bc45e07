//! Singly-linked nodes stored in an arena.
//!
//! A [`Chain`] owns every [`Node`] and hands out [`Handle`]s; links between
//! nodes are handles, so shared tails and even cycles are representable
//! without reference counting. Rendering walks the links iteratively and
//! reports a cycle instead of looping forever.
mod chain;
mod errors;
mod handle;
mod node;
mod options;

pub use chain::Chain;
pub use errors::ChainError;
pub use handle::Handle;
pub use node::Node;
pub use options::RenderOptions;
