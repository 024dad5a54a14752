use crate::arena::Slot;
use crate::treap::tree::{self, Nodes};
use std::fmt;
use std::ptr;

/// An opaque identifier of a node in a `Treap<T>`.
///
/// Identifiers stay valid for as long as the treap that issued them is not cleared, since nodes
/// are never removed or moved. An identifier is meaningless for any other treap.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct NodeId(pub(crate) Slot);

/// A borrowed view of a node in a `Treap<T>`.
///
/// A `NodeRef` can walk to neighboring nodes in key order without searching from the root again.
/// Two views are equal if they refer to the same node of the same treap.
pub struct NodeRef<'a, T> {
    nodes: &'a Nodes<T>,
    slot: Slot,
}

impl<'a, T> NodeRef<'a, T> {
    pub(crate) fn new(nodes: &'a Nodes<T>, slot: Slot) -> Self {
        NodeRef { nodes, slot }
    }

    fn wrap(&self, link: Option<Slot>) -> Option<NodeRef<'a, T>> {
        let nodes = self.nodes;
        link.map(|slot| NodeRef::new(nodes, slot))
    }

    /// Returns the value stored in this node, including everything merged into it so far.
    pub fn value(&self) -> &'a T {
        let nodes = self.nodes;
        &nodes[self.slot].value
    }

    /// Returns an identifier that can be used to look up this node again through
    /// `Treap::node`.
    pub fn id(&self) -> NodeId {
        NodeId(self.slot)
    }

    /// Returns the node with the least value greater than this node's value, or `None` if this
    /// node holds the maximum.
    ///
    /// # Examples
    ///
    /// ```
    /// use merge_treap::{Mergeable, Treap};
    /// # #[derive(Debug, Eq, Ord, PartialEq, PartialOrd)]
    /// # struct Key(u32);
    /// # impl Mergeable for Key { fn merge(&mut self, _: Key) {} }
    ///
    /// let mut treap = Treap::new();
    /// treap.insert(Key(1));
    /// treap.insert(Key(3));
    ///
    /// let min = treap.min().unwrap();
    /// assert_eq!(min.successor().map(|node| node.value()), Some(&Key(3)));
    /// assert!(treap.max().unwrap().successor().is_none());
    /// ```
    pub fn successor(&self) -> Option<NodeRef<'a, T>> {
        self.wrap(tree::successor(self.nodes, self.slot))
    }

    /// Returns the node with the greatest value less than this node's value, or `None` if this
    /// node holds the minimum.
    ///
    /// # Examples
    ///
    /// ```
    /// use merge_treap::{Mergeable, Treap};
    /// # #[derive(Debug, Eq, Ord, PartialEq, PartialOrd)]
    /// # struct Key(u32);
    /// # impl Mergeable for Key { fn merge(&mut self, _: Key) {} }
    ///
    /// let mut treap = Treap::new();
    /// treap.insert(Key(1));
    /// treap.insert(Key(3));
    ///
    /// let max = treap.max().unwrap();
    /// assert_eq!(max.predecessor().map(|node| node.value()), Some(&Key(1)));
    /// assert!(treap.min().unwrap().predecessor().is_none());
    /// ```
    pub fn predecessor(&self) -> Option<NodeRef<'a, T>> {
        self.wrap(tree::predecessor(self.nodes, self.slot))
    }

    /// Returns the parent of this node, or `None` for the root.
    pub fn parent(&self) -> Option<NodeRef<'a, T>> {
        self.wrap(self.nodes[self.slot].parent)
    }

    /// Returns the left child of this node.
    pub fn left(&self) -> Option<NodeRef<'a, T>> {
        self.wrap(self.nodes[self.slot].left)
    }

    /// Returns the right child of this node.
    pub fn right(&self) -> Option<NodeRef<'a, T>> {
        self.wrap(self.nodes[self.slot].right)
    }
}

impl<'a, T> Clone for NodeRef<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T> Copy for NodeRef<'a, T> {}

impl<'a, T> PartialEq for NodeRef<'a, T> {
    fn eq(&self, other: &NodeRef<'a, T>) -> bool {
        ptr::eq(self.nodes, other.nodes) && self.slot == other.slot
    }
}

impl<'a, T> Eq for NodeRef<'a, T> {}

impl<'a, T> fmt::Debug for NodeRef<'a, T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("value", self.value())
            .finish()
    }
}
