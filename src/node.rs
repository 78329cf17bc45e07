use crate::handle::Handle;

/// One link of a singly-linked chain: a value and an optional successor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<T> {
    value: T,
    next: Option<Handle>,
}

impl<T> Node<T> {
    pub(crate) fn new(value: T) -> Self {
        Self { value, next: None }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    /// The successor link. Does not traverse further.
    pub fn next(&self) -> Option<Handle> {
        self.next
    }

    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }

    pub(crate) fn set_next(&mut self, next: Option<Handle>) {
        self.next = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_node_has_no_successor() {
        let node = Node::new("x");
        assert_eq!(*node.value(), "x");
        assert_eq!(node.next(), None);
        assert!(!node.has_next());
    }

    #[test]
    fn relinking_replaces_and_clears() {
        let mut node = Node::new(1u8);
        node.set_next(Some(Handle::new(0, 4)));
        assert_eq!(node.next(), Some(Handle::new(0, 4)));
        assert!(node.has_next());

        node.set_next(Some(Handle::new(0, 7)));
        assert_eq!(node.next(), Some(Handle::new(0, 7)));

        node.set_next(None);
        assert!(!node.has_next());
    }
}
