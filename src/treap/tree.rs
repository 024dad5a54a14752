use crate::arena::{Arena, Slot};
use crate::mergeable::Mergeable;
use crate::treap::node::{Link, Node};
use log::trace;
use rand::Rng;
use std::cmp::Ordering;

pub type Nodes<T> = Arena<Node<T>>;

// Promotes `slot` above its parent `parent`, where `slot` is the left child of `parent`. The
// grandparent still points at `parent` afterwards.
fn rotate_right<T>(nodes: &mut Nodes<T>, slot: Slot, parent: Slot) {
    let right_child = nodes[slot].right;

    nodes[parent].parent = Some(slot);
    nodes[parent].left = right_child;
    nodes[slot].right = Some(parent);

    if let Some(right_child) = right_child {
        nodes[right_child].parent = Some(parent);
    }
}

// Mirror image of `rotate_right`.
fn rotate_left<T>(nodes: &mut Nodes<T>, slot: Slot, parent: Slot) {
    let left_child = nodes[slot].left;

    nodes[parent].parent = Some(slot);
    nodes[parent].right = left_child;
    nodes[slot].left = Some(parent);

    if let Some(left_child) = left_child {
        nodes[left_child].parent = Some(parent);
    }
}

// Rotates `slot` upwards until the heap property holds on priorities again. Returns the number
// of rotations performed.
fn heapify<T>(nodes: &mut Nodes<T>, slot: Slot) -> usize {
    let mut rotations = 0;
    while let Some(parent) = nodes[slot].parent {
        if nodes[parent].priority >= nodes[slot].priority {
            break;
        }

        let grandparent = nodes[parent].parent;
        if nodes[parent].left == Some(slot) {
            rotate_right(nodes, slot, parent);
        } else {
            rotate_left(nodes, slot, parent);
        }

        nodes[slot].parent = grandparent;
        if let Some(grandparent) = grandparent {
            let grandparent_node = &mut nodes[grandparent];
            if grandparent_node.left == Some(parent) {
                grandparent_node.left = Some(slot);
            } else {
                grandparent_node.right = Some(slot);
            }
        }
        rotations += 1;
    }
    rotations
}

/// Inserts `value` below `root`, merging it into an equal value if one exists. Returns the slot
/// holding the value and whether a new node was created.
pub fn insert<T, R>(nodes: &mut Nodes<T>, root: &mut Link, value: T, rng: &mut R) -> (Slot, bool)
where
    T: Mergeable,
    R: Rng,
{
    let mut curr = match *root {
        Some(slot) => slot,
        None => {
            let slot = nodes.allocate(Node::new(value, rng.next_u64(), None));
            *root = Some(slot);
            return (slot, true);
        },
    };

    loop {
        let ordering = value.cmp(&nodes[curr].value);
        let next = match ordering {
            Ordering::Less => nodes[curr].left,
            Ordering::Greater => nodes[curr].right,
            Ordering::Equal => {
                nodes[curr].value.merge(value);
                return (curr, false);
            },
        };

        match next {
            Some(next) => curr = next,
            None => {
                let slot = nodes.allocate(Node::new(value, rng.next_u64(), Some(curr)));
                if ordering == Ordering::Less {
                    nodes[curr].left = Some(slot);
                } else {
                    nodes[curr].right = Some(slot);
                }

                let rotations = heapify(nodes, slot);
                if nodes[slot].parent.is_none() {
                    trace!("New node promoted to root after {} rotations.", rotations);
                    *root = Some(slot);
                } else if rotations > 0 {
                    trace!("New node restored heap order after {} rotations.", rotations);
                }
                return (slot, true);
            },
        }
    }
}

/// Returns the greatest node less than or equal to `value` and the least node greater than or
/// equal to `value`, found in a single descent.
pub fn neighbors<T: Ord>(nodes: &Nodes<T>, root: Link, value: &T) -> (Link, Link) {
    let mut floor = None;
    let mut ceil = None;
    let mut curr = root;

    while let Some(slot) = curr {
        let node = &nodes[slot];
        match value.cmp(&node.value) {
            Ordering::Less => {
                ceil = Some(slot);
                curr = node.left;
            },
            Ordering::Greater => {
                floor = Some(slot);
                curr = node.right;
            },
            Ordering::Equal => return (Some(slot), Some(slot)),
        }
    }

    (floor, ceil)
}

pub fn leftmost<T>(nodes: &Nodes<T>, mut slot: Slot) -> Slot {
    while let Some(left) = nodes[slot].left {
        slot = left;
    }
    slot
}

pub fn rightmost<T>(nodes: &Nodes<T>, mut slot: Slot) -> Slot {
    while let Some(right) = nodes[slot].right {
        slot = right;
    }
    slot
}

pub fn min<T>(nodes: &Nodes<T>, root: Link) -> Link {
    root.map(|slot| leftmost(nodes, slot))
}

pub fn max<T>(nodes: &Nodes<T>, root: Link) -> Link {
    root.map(|slot| rightmost(nodes, slot))
}

pub fn successor<T>(nodes: &Nodes<T>, slot: Slot) -> Link {
    if let Some(right) = nodes[slot].right {
        return Some(leftmost(nodes, right));
    }

    let mut curr = slot;
    let mut parent = nodes[slot].parent;
    while let Some(parent_slot) = parent {
        if nodes[parent_slot].right != Some(curr) {
            break;
        }
        curr = parent_slot;
        parent = nodes[parent_slot].parent;
    }
    parent
}

pub fn predecessor<T>(nodes: &Nodes<T>, slot: Slot) -> Link {
    if let Some(left) = nodes[slot].left {
        return Some(rightmost(nodes, left));
    }

    let mut curr = slot;
    let mut parent = nodes[slot].parent;
    while let Some(parent_slot) = parent {
        if nodes[parent_slot].left != Some(curr) {
            break;
        }
        curr = parent_slot;
        parent = nodes[parent_slot].parent;
    }
    parent
}
