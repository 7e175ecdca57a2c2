//! Arena-backed binary search tree: the node store, the structural
//! operations (lookup, ordered insertion, the three deletion topologies,
//! transplant), and the rotation primitive shared by the balancing
//! strategies.
//!
//! Nodes live in a growable vector and are linked by index, so parent
//! back-references are plain integers rather than owning pointers. A node's
//! id is stable across rotations; only its parent/child wiring changes.

mod iter;

#[cfg(test)]
mod test;

use compare::Compare;
use std::cmp::Ordering::*;
use std::mem::replace;

pub use self::iter::{IntoIter, Iter};

/// Index of a node slot in the arena.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct NodeId(usize);

/// An optional node reference.
pub type Link = Option<NodeId>;

#[derive(Clone)]
struct Node<K, V, B> {
    parent: Link,
    left: Link,
    right: Link,
    balance: B,
    key: K,
    value: V,
}

#[derive(Clone)]
enum Slot<K, V, B> {
    Node(Node<K, V, B>),
    /// Entry moved out by a consuming iterator; the links are kept so
    /// successor and predecessor walks can still pass through this slot.
    Drained { parent: Link, left: Link, right: Link },
    Free,
}

/// The outcome of splicing a node out of the tree: everything a balancing
/// strategy needs to anchor its upward fix-up walk.
pub struct Removal<B> {
    /// Balance tag the physically detached node carried before splicing.
    pub spliced: B,
    /// Link that now occupies the vacated position (may be empty).
    pub child: Link,
    /// Parent of the vacated position (empty when the tree emptied).
    pub parent: Link,
}

#[derive(Clone)]
pub struct Tree<K, V, B> {
    slots: Vec<Slot<K, V, B>>,
    free: Vec<NodeId>,
    root: Link,
}

impl<K, V, B> Tree<K, V, B> {
    pub fn new() -> Self {
        Tree { slots: Vec::new(), free: Vec::new(), root: None }
    }

    pub fn root(&self) -> Link { self.root }

    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.root = None;
    }

    fn node(&self, id: NodeId) -> &Node<K, V, B> {
        match &self.slots[id.0] {
            Slot::Node(node) => node,
            _ => panic!("stale node id"),
        }
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node<K, V, B> {
        match &mut self.slots[id.0] {
            Slot::Node(node) => node,
            _ => panic!("stale node id"),
        }
    }

    pub fn key(&self, id: NodeId) -> &K { &self.node(id).key }

    pub fn value(&self, id: NodeId) -> &V { &self.node(id).value }

    pub fn value_mut(&mut self, id: NodeId) -> &mut V { &mut self.node_mut(id).value }

    pub fn key_value(&self, id: NodeId) -> (&K, &V) {
        let node = self.node(id);
        (&node.key, &node.value)
    }

    pub fn key_value_mut(&mut self, id: NodeId) -> (&K, &mut V) {
        let node = self.node_mut(id);
        (&node.key, &mut node.value)
    }

    /// Replaces the entry's value in place, leaving the node's identity and
    /// wiring untouched.
    pub fn replace_value(&mut self, id: NodeId, value: V) -> V {
        replace(&mut self.node_mut(id).value, value)
    }

    pub fn parent(&self, id: NodeId) -> Link {
        match &self.slots[id.0] {
            Slot::Node(node) => node.parent,
            Slot::Drained { parent, .. } => *parent,
            Slot::Free => panic!("stale node id"),
        }
    }

    pub fn left(&self, id: NodeId) -> Link {
        match &self.slots[id.0] {
            Slot::Node(node) => node.left,
            Slot::Drained { left, .. } => *left,
            Slot::Free => panic!("stale node id"),
        }
    }

    pub fn right(&self, id: NodeId) -> Link {
        match &self.slots[id.0] {
            Slot::Node(node) => node.right,
            Slot::Drained { right, .. } => *right,
            Slot::Free => panic!("stale node id"),
        }
    }

    pub fn balance(&self, id: NodeId) -> &B { &self.node(id).balance }

    pub fn balance_mut(&mut self, id: NodeId) -> &mut B { &mut self.node_mut(id).balance }

    fn set_parent(&mut self, id: NodeId, parent: Link) { self.node_mut(id).parent = parent; }

    fn set_left(&mut self, id: NodeId, left: Link) { self.node_mut(id).left = left; }

    fn set_right(&mut self, id: NodeId, right: Link) { self.node_mut(id).right = right; }

    fn alloc(&mut self, node: Node<K, V, B>) -> NodeId {
        match self.free.pop() {
            Some(id) => {
                self.slots[id.0] = Slot::Node(node);
                id
            }
            None => {
                self.slots.push(Slot::Node(node));
                NodeId(self.slots.len() - 1)
            }
        }
    }

    fn release(&mut self, id: NodeId) -> Node<K, V, B> {
        match replace(&mut self.slots[id.0], Slot::Free) {
            Slot::Node(node) => {
                self.free.push(id);
                node
            }
            _ => panic!("stale node id"),
        }
    }

    /// Moves the entry out of the node for a consuming iterator, keeping the
    /// links behind so in-order walks can still cross the slot.
    fn drain(&mut self, id: NodeId) -> (K, V) {
        match replace(&mut self.slots[id.0], Slot::Free) {
            Slot::Node(node) => {
                self.slots[id.0] =
                    Slot::Drained { parent: node.parent, left: node.left, right: node.right };
                (node.key, node.value)
            }
            _ => panic!("stale node id"),
        }
    }

    pub fn find<C, Q: ?Sized>(&self, cmp: &C, key: &Q) -> Link
        where C: Compare<Q, K> {

        let mut cur = self.root;

        while let Some(id) = cur {
            match cmp.compare(key, self.key(id)) {
                Equal => return cur,
                Less => cur = self.left(id),
                Greater => cur = self.right(id),
            }
        }

        None
    }

    /// Inserts an entry, returning the previous value, if any, and the id of
    /// the affected node. A fresh node is attached as a leaf under the last
    /// visited node; an existing node has its value replaced in place, with
    /// no structural change.
    pub fn insert<C>(&mut self, cmp: &C, key: K, value: V) -> (Option<V>, NodeId)
        where C: Compare<K>, B: Default {

        let mut parent = None;
        let mut went_left = false;
        let mut cur = self.root;

        while let Some(id) = cur {
            match cmp.compare(&key, self.key(id)) {
                Equal => return (Some(self.replace_value(id, value)), id),
                Less => {
                    parent = cur;
                    went_left = true;
                    cur = self.left(id);
                }
                Greater => {
                    parent = cur;
                    went_left = false;
                    cur = self.right(id);
                }
            }
        }

        let id = self.alloc(Node {
            parent,
            left: None,
            right: None,
            balance: B::default(),
            key,
            value,
        });

        match parent {
            None => self.root = Some(id),
            Some(p) if went_left => self.set_left(p, Some(id)),
            Some(p) => self.set_right(p, Some(id)),
        }

        (None, id)
    }

    /// Splices the node out of the tree and frees its slot, returning its
    /// entry and the anchor information for the balancing walk.
    ///
    /// The three topologies: a node missing a child is replaced by the other
    /// child; a node with two children is replaced by its in-order successor
    /// (the leftmost node of its right subtree, which has no left child by
    /// construction), and the successor takes over the removed node's
    /// balance tag along with its position.
    pub fn remove_at(&mut self, z: NodeId) -> ((K, V), Removal<B>)
        where B: Clone {

        let z_left = self.left(z);
        let z_right = self.right(z);

        let removal = match (z_left, z_right) {
            (None, _) => {
                let parent = self.parent(z);
                self.transplant(z, z_right);
                Removal { spliced: self.balance(z).clone(), child: z_right, parent }
            }
            (_, None) => {
                let parent = self.parent(z);
                self.transplant(z, z_left);
                Removal { spliced: self.balance(z).clone(), child: z_left, parent }
            }
            (Some(z_left), Some(z_right)) => {
                let y = self.min_in_subtree(z_right);
                let spliced = self.balance(y).clone();
                let child = self.right(y);

                let parent = if self.parent(y) == Some(z) {
                    // the successor keeps its right subtree; it is the
                    // vacated position's parent itself
                    Some(y)
                } else {
                    let parent = self.parent(y);
                    self.transplant(y, child);
                    self.set_right(y, Some(z_right));
                    self.set_parent(z_right, Some(y));
                    parent
                };

                self.transplant(z, Some(y));
                self.set_left(y, Some(z_left));
                self.set_parent(z_left, Some(y));

                let z_balance = self.balance(z).clone();
                *self.balance_mut(y) = z_balance;

                Removal { spliced, child, parent }
            }
        };

        let node = self.release(z);
        ((node.key, node.value), removal)
    }

    /// Replaces the subtree rooted at `u` with the subtree rooted at `v`
    /// (possibly empty), rewiring the parent's child link and `v`'s parent
    /// link. If `u` was the root, `v` becomes the root.
    pub fn transplant(&mut self, u: NodeId, v: Link) {
        let parent = self.parent(u);

        match parent {
            None => self.root = v,
            Some(p) => {
                if self.left(p) == Some(u) {
                    self.set_left(p, v);
                } else {
                    self.set_right(p, v);
                }
            }
        }

        if let Some(v) = v {
            self.set_parent(v, parent);
        }
    }

    /// Single left rotation at `z`: `z`'s right child takes `z`'s position,
    /// `z` becomes its left child, and the child's former left subtree
    /// becomes `z`'s new right subtree.
    pub fn rotate_left(&mut self, z: NodeId) {
        let y = match self.right(z) {
            Some(y) => y,
            None => panic!("rotate_left: node has no right child"),
        };
        let t = self.left(y);

        self.transplant(z, Some(y));
        self.set_left(y, Some(z));
        self.set_parent(z, Some(y));
        self.set_right(z, t);
        if let Some(t) = t {
            self.set_parent(t, Some(z));
        }
    }

    /// Mirror image of [`rotate_left`](Tree::rotate_left).
    pub fn rotate_right(&mut self, z: NodeId) {
        let y = match self.left(z) {
            Some(y) => y,
            None => panic!("rotate_right: node has no left child"),
        };
        let t = self.right(y);

        self.transplant(z, Some(y));
        self.set_right(y, Some(z));
        self.set_parent(z, Some(y));
        self.set_left(z, t);
        if let Some(t) = t {
            self.set_parent(t, Some(z));
        }
    }

    /// Tri-node restructure over `x`, its parent, and its grandparent: one
    /// rotation at the grandparent for the two outer configurations, two
    /// rotations (parent first, then grandparent) for the two zig-zag
    /// configurations. Returns the node left at the top of the subtree.
    pub fn restructure(&mut self, x: NodeId) -> NodeId {
        let y = self.parent(x).expect("restructure: node has no parent");
        let z = self.parent(y).expect("restructure: node has no grandparent");

        let y_is_left = self.left(z) == Some(y);
        let x_is_left = self.left(y) == Some(x);

        match (y_is_left, x_is_left) {
            (true, true) => {
                self.rotate_right(z);
                y
            }
            (false, false) => {
                self.rotate_left(z);
                y
            }
            (true, false) => {
                self.rotate_left(y);
                self.rotate_right(z);
                x
            }
            (false, true) => {
                self.rotate_right(y);
                self.rotate_left(z);
                x
            }
        }
    }

    pub fn min_in_subtree(&self, mut id: NodeId) -> NodeId {
        while let Some(left) = self.left(id) {
            id = left;
        }
        id
    }

    pub fn max_in_subtree(&self, mut id: NodeId) -> NodeId {
        while let Some(right) = self.right(id) {
            id = right;
        }
        id
    }

    pub fn first(&self) -> Link { self.root.map(|root| self.min_in_subtree(root)) }

    pub fn last(&self) -> Link { self.root.map(|root| self.max_in_subtree(root)) }

    /// In-order successor: the right subtree's leftmost node, or the first
    /// ancestor reached through a left-child edge.
    pub fn successor(&self, id: NodeId) -> Link {
        if let Some(right) = self.right(id) {
            return Some(self.min_in_subtree(right));
        }

        let mut cur = id;
        let mut parent = self.parent(cur);

        while let Some(p) = parent {
            if self.left(p) == Some(cur) {
                return Some(p);
            }
            cur = p;
            parent = self.parent(p);
        }

        None
    }

    /// Mirror image of [`successor`](Tree::successor).
    pub fn predecessor(&self, id: NodeId) -> Link {
        if let Some(left) = self.left(id) {
            return Some(self.max_in_subtree(left));
        }

        let mut cur = id;
        let mut parent = self.parent(cur);

        while let Some(p) = parent {
            if self.right(p) == Some(cur) {
                return Some(p);
            }
            cur = p;
            parent = self.parent(p);
        }

        None
    }
}
