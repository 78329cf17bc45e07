use crate::{
    errors::ChainError,
    handle::{next_chain_id, Handle},
    node::Node,
    options::RenderOptions,
};
use std::collections::HashSet;
use std::fmt::{Display, Write};
use tracing::{debug, trace};

/// Arena owning a set of singly-linked nodes.
///
/// Every node is addressed by the [`Handle`] returned from [`Chain::insert`].
/// Any node can act as the head of a chain, and several nodes may share a
/// successor. Links are not checked for cycles when they are set; walking
/// operations detect them instead.
///
/// Handles are tied to the chain that issued them. A clone keeps the identity
/// of its source, so handles stay valid in both copies.
#[derive(Debug, Clone)]
pub struct Chain<T> {
    id: u64,
    nodes: Vec<Node<T>>,
}

impl<T> Default for Chain<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Chain<T> {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            id: next_chain_id(),
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// Number of nodes in the arena
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Create a node holding `value` with no successor.
    pub fn insert(&mut self, value: T) -> Handle {
        let h = Handle::new(self.id, self.nodes.len());
        self.nodes.push(Node::new(value));
        trace!(chain = self.id, node = h.index, "node created");
        h
    }

    /// Replace the successor of `node` with `next`, or clear it with `None`.
    ///
    /// Only `node`'s own link changes. Self-loops and cycles are accepted here;
    /// [`Chain::render`] and [`Chain::find_cycle`] report them.
    pub fn set_next(&mut self, node: Handle, next: Option<Handle>) -> Result<(), ChainError> {
        if let Some(n) = next {
            self.require(n)?;
        }
        let id = self.require(node)?;
        trace!(chain = self.id, node = id, next = ?next.map(|h| h.index), "link updated");
        self.nodes[id].set_next(next);
        Ok(())
    }

    /// Get a node by handle. `None` for handles issued by another chain.
    pub fn get(&self, h: Handle) -> Option<&Node<T>> {
        self.require(h).ok().map(|id| &self.nodes[id])
    }

    pub fn value(&self, h: Handle) -> Result<&T, ChainError> {
        self.node(h).map(Node::value)
    }

    pub fn next(&self, h: Handle) -> Result<Option<Handle>, ChainError> {
        self.node(h).map(Node::next)
    }

    pub fn has_next(&self, h: Handle) -> Result<bool, ChainError> {
        self.node(h).map(Node::has_next)
    }

    /// First node revisited when following links from `head`, if any.
    pub fn find_cycle(&self, head: Handle) -> Result<Option<Handle>, ChainError> {
        match self.walk(head, None, |_| {}) {
            Ok(()) => Ok(None),
            Err(ChainError::Cycle { at }) => Ok(Some(at)),
            Err(e) => Err(e),
        }
    }

    fn node(&self, h: Handle) -> Result<&Node<T>, ChainError> {
        self.require(h).map(|id| &self.nodes[id])
    }

    fn require(&self, h: Handle) -> Result<usize, ChainError> {
        if h.chain == self.id && h.index < self.nodes.len() {
            Ok(h.index)
        } else {
            Err(ChainError::InvalidHandle(h))
        }
    }

    /// Visit `head` and every reachable successor in chain order.
    fn walk<F>(
        &self,
        head: Handle,
        max_depth: Option<usize>,
        mut visit: F,
    ) -> Result<(), ChainError>
    where
        F: FnMut(&Node<T>),
    {
        let mut seen = HashSet::new();
        let mut depth = 0usize;
        let mut cur = Some(self.require(head)?);

        while let Some(id) = cur {
            if !seen.insert(id) {
                debug!(head = head.index, node = id, "cycle detected");
                return Err(ChainError::Cycle {
                    at: Handle::new(self.id, id),
                });
            }
            if let Some(limit) = max_depth {
                if depth == limit {
                    debug!(head = head.index, limit, "render depth exceeded");
                    return Err(ChainError::DepthExceeded { limit });
                }
            }
            depth += 1;

            // links are validated in `set_next` and nodes are never removed
            let node = &self.nodes[id];
            visit(node);
            cur = node.next().map(|h| h.index);
        }
        Ok(())
    }
}

impl<T: Display> Chain<T> {
    /// Render `head` and every reachable successor, joined by `"; "`.
    pub fn render(&self, head: Handle) -> Result<String, ChainError> {
        self.render_with(head, &RenderOptions::default())
    }

    pub fn render_with(
        &self,
        head: Handle,
        options: &RenderOptions,
    ) -> Result<String, ChainError> {
        let mut out = String::new();
        let mut first = true;
        self.walk(head, options.max_depth, |node| {
            if !first {
                out.push_str(&options.separator);
            }
            first = false;
            // writing into a String cannot fail
            let _ = write!(out, "{}", node.value());
        })?;
        Ok(out)
    }
}
