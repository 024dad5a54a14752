use crate::arena::{Arena, Slot};
use crate::mergeable::Mergeable;
use crate::treap::handle::{NodeId, NodeRef};
use crate::treap::tree::{self, Nodes};
use log::debug;
use rand::Rng;
use rand::XorShiftRng;

const DEFAULT_CHUNK_SIZE: usize = 1024;

/// An ordered collection of mergeable values implemented by a treap.
///
/// A treap is a tree that satisfies both the binary search tree property and a heap property.
/// Each node has a value and a priority. The value of any node is greater than all values in its
/// left subtree and less than all values in its right subtree. The priority of a node is greater
/// than or equal to the priority of all nodes in its subtrees. By randomly generating priorities,
/// the expected height of the tree is proportional to the logarithm of the number of values.
///
/// Inserting a value equal to one already stored merges it into the stored value through
/// `Mergeable::merge`, so every key is held by exactly one node. Nodes also keep a link to their
/// parent, which lets a `NodeRef` step to its in-order successor or predecessor directly.
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
/// treap.insert(Key(0));
/// treap.insert(Key(3));
///
/// assert_eq!(treap.len(), 2);
/// assert_eq!(treap.min().map(|node| node.value()), Some(&Key(0)));
/// assert_eq!(treap.least_gte(&Key(2)).map(|node| node.value()), Some(&Key(3)));
/// assert_eq!(treap.greatest_lte(&Key(2)).map(|node| node.value()), Some(&Key(0)));
/// ```
pub struct Treap<T, R = XorShiftRng> {
    nodes: Nodes<T>,
    root: Option<Slot>,
    rng: R,
}

impl<T> Treap<T> {
    /// Constructs a new, empty `Treap<T>` whose priorities come from an unseeded
    /// `XorShiftRng`.
    ///
    /// # Examples
    ///
    /// ```
    /// use merge_treap::{Mergeable, Treap};
    /// # #[derive(Eq, Ord, PartialEq, PartialOrd)]
    /// # struct Key(u32);
    /// # impl Mergeable for Key { fn merge(&mut self, _: Key) {} }
    ///
    /// let treap: Treap<Key> = Treap::new();
    /// assert!(treap.is_empty());
    /// ```
    pub fn new() -> Self {
        Treap::with_rng(XorShiftRng::new_unseeded())
    }
}

impl<T, R> Treap<T, R>
where
    R: Rng,
{
    /// Constructs a new, empty `Treap<T, R>` that draws node priorities from `rng`.
    ///
    /// # Examples
    ///
    /// ```
    /// use merge_treap::{Mergeable, Treap};
    /// use rand::{SeedableRng, XorShiftRng};
    /// # #[derive(Eq, Ord, PartialEq, PartialOrd)]
    /// # struct Key(u32);
    /// # impl Mergeable for Key { fn merge(&mut self, _: Key) {} }
    ///
    /// let rng: XorShiftRng = SeedableRng::from_seed([1, 2, 3, 4]);
    /// let treap: Treap<Key, XorShiftRng> = Treap::with_rng(rng);
    /// assert!(treap.is_empty());
    /// ```
    pub fn with_rng(rng: R) -> Self {
        Treap {
            nodes: Arena::new(DEFAULT_CHUNK_SIZE),
            root: None,
            rng,
        }
    }

    /// Inserts a value into the treap. If an equal value is already stored, `value` is merged
    /// into it and no node is created. Returns the node now holding the value, and `true` if that
    /// node was newly created.
    ///
    /// # Examples
    ///
    /// ```
    /// use merge_treap::{Mergeable, Treap};
    /// use std::cmp::Ordering;
    /// # #[derive(Debug)]
    /// # struct Counted { key: u32, count: usize }
    /// # impl Ord for Counted { fn cmp(&self, other: &Counted) -> Ordering { self.key.cmp(&other.key) } }
    /// # impl PartialOrd for Counted { fn partial_cmp(&self, other: &Counted) -> Option<Ordering> { Some(self.cmp(other)) } }
    /// # impl PartialEq for Counted { fn eq(&self, other: &Counted) -> bool { self.key == other.key } }
    /// # impl Eq for Counted {}
    /// # impl Mergeable for Counted { fn merge(&mut self, other: Counted) { self.count += other.count; } }
    ///
    /// let mut treap = Treap::new();
    /// assert!(treap.insert(Counted { key: 1, count: 1 }).1);
    ///
    /// let (node, is_new) = treap.insert(Counted { key: 1, count: 1 });
    /// assert!(!is_new);
    /// assert_eq!(node.value().count, 2);
    /// assert_eq!(treap.len(), 1);
    /// ```
    pub fn insert(&mut self, value: T) -> (NodeRef<'_, T>, bool)
    where
        T: Mergeable,
    {
        let &mut Treap {
            ref mut nodes,
            ref mut root,
            ref mut rng,
        } = self;
        let (slot, is_new) = tree::insert(nodes, root, value, rng);
        (NodeRef::new(&self.nodes, slot), is_new)
    }
}

impl<T, R> Treap<T, R> {
    fn wrap(&self, link: Option<Slot>) -> Option<NodeRef<'_, T>> {
        link.map(|slot| NodeRef::new(&self.nodes, slot))
    }

    /// Returns the node holding a value equal to `value`, or `None` if no such value is stored.
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
    /// assert_eq!(treap.get(&Key(1)).map(|node| node.value()), Some(&Key(1)));
    /// assert!(treap.get(&Key(0)).is_none());
    /// ```
    pub fn get(&self, value: &T) -> Option<NodeRef<'_, T>>
    where
        T: Ord,
    {
        match tree::neighbors(&self.nodes, self.root, value) {
            (Some(floor), Some(ceil)) if floor == ceil => self.wrap(Some(floor)),
            _ => None,
        }
    }

    /// Checks if a value equal to `value` is stored in the treap.
    pub fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        self.get(value).is_some()
    }

    /// Returns the node identified by `id`, or `None` if `id` does not refer to a node of this
    /// treap.
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
    /// let id = treap.insert(Key(1)).0.id();
    /// treap.insert(Key(2));
    /// assert_eq!(treap.node(id).map(|node| node.value()), Some(&Key(1)));
    /// ```
    pub fn node(&self, id: NodeId) -> Option<NodeRef<'_, T>> {
        let NodeId(slot) = id;
        self.nodes
            .get(slot)
            .map(|_| NodeRef::new(&self.nodes, slot))
    }

    /// Returns the number of distinct values in the treap.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the treap is empty.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Clears the treap, removing all values. Every previously issued `NodeId` is invalidated.
    ///
    /// # Examples
    ///
    /// ```
    /// use merge_treap::{Mergeable, Treap};
    /// # #[derive(Eq, Ord, PartialEq, PartialOrd)]
    /// # struct Key(u32);
    /// # impl Mergeable for Key { fn merge(&mut self, _: Key) {} }
    ///
    /// let mut treap = Treap::new();
    /// treap.insert(Key(1));
    /// treap.insert(Key(2));
    /// treap.clear();
    /// assert!(treap.is_empty());
    /// assert!(treap.min().is_none());
    /// ```
    pub fn clear(&mut self) {
        debug!("Clearing treap of {} nodes.", self.nodes.len());
        self.nodes.clear();
        self.root = None;
    }

    /// Returns the node with the minimum value in the treap, or `None` if the treap is empty.
    pub fn min(&self) -> Option<NodeRef<'_, T>> {
        self.wrap(tree::min(&self.nodes, self.root))
    }

    /// Returns the node with the maximum value in the treap, or `None` if the treap is empty.
    pub fn max(&self) -> Option<NodeRef<'_, T>> {
        self.wrap(tree::max(&self.nodes, self.root))
    }

    /// Returns the node with the least value greater than or equal to `value`, or `None` if every
    /// stored value is less than `value`.
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
    /// assert_eq!(treap.least_gte(&Key(0)).map(|node| node.value()), Some(&Key(1)));
    /// assert_eq!(treap.least_gte(&Key(1)).map(|node| node.value()), Some(&Key(1)));
    /// assert!(treap.least_gte(&Key(2)).is_none());
    /// ```
    pub fn least_gte(&self, value: &T) -> Option<NodeRef<'_, T>>
    where
        T: Ord,
    {
        self.neighbors(value).1
    }

    /// Returns the node with the greatest value less than or equal to `value`, or `None` if every
    /// stored value is greater than `value`.
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
    /// assert!(treap.greatest_lte(&Key(0)).is_none());
    /// assert_eq!(treap.greatest_lte(&Key(1)).map(|node| node.value()), Some(&Key(1)));
    /// assert_eq!(treap.greatest_lte(&Key(2)).map(|node| node.value()), Some(&Key(1)));
    /// ```
    pub fn greatest_lte(&self, value: &T) -> Option<NodeRef<'_, T>>
    where
        T: Ord,
    {
        self.neighbors(value).0
    }

    /// Returns the results of `greatest_lte` and `least_gte` for `value`, computed in a single
    /// descent from the root. If `value` is stored, both nodes are the node holding it.
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
    /// treap.insert(Key(5));
    ///
    /// let (floor, ceil) = treap.neighbors(&Key(3));
    /// assert_eq!(floor.map(|node| node.value()), Some(&Key(1)));
    /// assert_eq!(ceil.map(|node| node.value()), Some(&Key(5)));
    ///
    /// let (floor, ceil) = treap.neighbors(&Key(5));
    /// assert_eq!(floor, ceil);
    /// ```
    pub fn neighbors(&self, value: &T) -> (Option<NodeRef<'_, T>>, Option<NodeRef<'_, T>>)
    where
        T: Ord,
    {
        let (floor, ceil) = tree::neighbors(&self.nodes, self.root, value);
        (self.wrap(floor), self.wrap(ceil))
    }
}

impl<T> Default for Treap<T> {
    fn default() -> Self {
        Self::new()
    }
}
