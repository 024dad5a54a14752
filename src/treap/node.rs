use crate::arena::Slot;

/// A link to another node in the same arena.
pub type Link = Option<Slot>;

/// A struct representing an internal node of a treap.
///
/// `left` and `right` own their subtrees; `parent` is only a back link used for upward
/// navigation. `value` and `priority` never move to another node after creation.
pub struct Node<T> {
    pub value: T,
    pub priority: u64,
    pub parent: Link,
    pub left: Link,
    pub right: Link,
}

impl<T> Node<T> {
    pub fn new(value: T, priority: u64, parent: Link) -> Self {
        Node {
            value,
            priority,
            parent,
            left: None,
            right: None,
        }
    }
}
