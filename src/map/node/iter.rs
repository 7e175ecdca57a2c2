//! Double-ended in-order iterators over the tree, driven by the successor
//! and predecessor walks rather than an explicit stack.

use super::{Link, Tree};

pub struct Iter<'a, K, V, B> {
    tree: &'a Tree<K, V, B>,
    front: Link,
    back: Link,
    remaining: usize,
}

impl<'a, K, V, B> Iter<'a, K, V, B> {
    pub fn new(tree: &'a Tree<K, V, B>, len: usize) -> Self {
        Iter { tree, front: tree.first(), back: tree.last(), remaining: len }
    }
}

impl<'a, K, V, B> Clone for Iter<'a, K, V, B> {
    fn clone(&self) -> Self {
        Iter { tree: self.tree, front: self.front, back: self.back, remaining: self.remaining }
    }
}

impl<'a, K, V, B> Iterator for Iter<'a, K, V, B> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<(&'a K, &'a V)> {
        if self.remaining == 0 {
            return None;
        }
        let id = self.front?;
        self.remaining -= 1;
        self.front = if self.remaining == 0 { None } else { self.tree.successor(id) };
        Some(self.tree.key_value(id))
    }

    fn size_hint(&self) -> (usize, Option<usize>) { (self.remaining, Some(self.remaining)) }
}

impl<'a, K, V, B> DoubleEndedIterator for Iter<'a, K, V, B> {
    fn next_back(&mut self) -> Option<(&'a K, &'a V)> {
        if self.remaining == 0 {
            return None;
        }
        let id = self.back?;
        self.remaining -= 1;
        self.back = if self.remaining == 0 { None } else { self.tree.predecessor(id) };
        Some(self.tree.key_value(id))
    }
}

impl<'a, K, V, B> ExactSizeIterator for Iter<'a, K, V, B> {
    fn len(&self) -> usize { self.remaining }
}

/// A consuming in-order iterator. Yielded nodes leave their links behind in
/// the arena, so the cursor walks stay valid from both ends.
#[derive(Clone)]
pub struct IntoIter<K, V, B> {
    tree: Tree<K, V, B>,
    front: Link,
    back: Link,
    remaining: usize,
}

impl<K, V, B> IntoIter<K, V, B> {
    pub fn new(tree: Tree<K, V, B>, len: usize) -> Self {
        let front = tree.first();
        let back = tree.last();
        IntoIter { tree, front, back, remaining: len }
    }
}

impl<K, V, B> Iterator for IntoIter<K, V, B> {
    type Item = (K, V);

    fn next(&mut self) -> Option<(K, V)> {
        if self.remaining == 0 {
            return None;
        }
        let id = self.front?;
        self.remaining -= 1;
        self.front = if self.remaining == 0 { None } else { self.tree.successor(id) };
        Some(self.tree.drain(id))
    }

    fn size_hint(&self) -> (usize, Option<usize>) { (self.remaining, Some(self.remaining)) }
}

impl<K, V, B> DoubleEndedIterator for IntoIter<K, V, B> {
    fn next_back(&mut self) -> Option<(K, V)> {
        if self.remaining == 0 {
            return None;
        }
        let id = self.back?;
        self.remaining -= 1;
        self.back = if self.remaining == 0 { None } else { self.tree.predecessor(id) };
        Some(self.tree.drain(id))
    }
}

impl<K, V, B> ExactSizeIterator for IntoIter<K, V, B> {
    fn len(&self) -> usize { self.remaining }
}
