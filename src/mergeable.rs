/// A trait for values that can be stored in a `Treap<T>`.
///
/// Values are ordered by `Ord`. Two values that compare `Ordering::Equal` are considered the same
/// key, and inserting the second one folds it into the stored one through `merge` instead of
/// adding another node.
///
/// `Ord` must be a total order that stays consistent for as long as the value is stored in the
/// treap, and `merge` must not change how the receiver compares to other values.
///
/// # Examples
///
/// ```
/// use merge_treap::Mergeable;
/// use std::cmp::Ordering;
///
/// #[derive(Debug)]
/// struct Counted {
///     key: u32,
///     count: usize,
/// }
///
/// impl Ord for Counted {
///     fn cmp(&self, other: &Counted) -> Ordering {
///         self.key.cmp(&other.key)
///     }
/// }
///
/// impl PartialOrd for Counted {
///     fn partial_cmp(&self, other: &Counted) -> Option<Ordering> {
///         Some(self.cmp(other))
///     }
/// }
///
/// impl PartialEq for Counted {
///     fn eq(&self, other: &Counted) -> bool {
///         self.key == other.key
///     }
/// }
///
/// impl Eq for Counted {}
///
/// impl Mergeable for Counted {
///     fn merge(&mut self, other: Counted) {
///         self.count += other.count;
///     }
/// }
///
/// let mut value = Counted { key: 1, count: 1 };
/// value.merge(Counted { key: 1, count: 2 });
/// assert_eq!(value.count, 3);
/// ```
pub trait Mergeable: Ord {
    /// Absorbs `other`, a value equal to `self` under `Ord`, into `self`.
    fn merge(&mut self, other: Self);
}
