//! An ordered map based on a self-balancing binary search tree.

#[doc(hidden)]
pub mod node;

use compare::{Compare, Natural};
use std::cmp::Ordering::{self, Equal, Greater, Less};
use std::fmt::{self, Debug};
use std::hash::{Hash, Hasher};
use std::iter;
use std::marker::PhantomData;
use std::mem;
use std::ops;

use crate::balance::{Avl, Balance, RedBlack};
use self::node::NodeId;

/// An ordered map based on a self-balancing binary search tree.
///
/// The entries are kept sorted according to the comparator `C`, which
/// defaults to the keys' natural order, so iteration yields them in
/// ascending key order. The balancing strategy `B` keeps the tree's height
/// logarithmic in its size, so lookups, insertions, and removals all run in
/// O(log n) time; strategies are selected at compile time through the
/// [`AvlMap`] and [`RbMap`] aliases and expose identical behavior.
///
/// The behavior of this map is undefined if a key's ordering relative to
/// any other key changes while the key is in the map. This is normally only
/// possible through `Cell`, `RefCell`, or unsafe code.
///
/// # Examples
///
/// ```
/// use ordtree::AvlMap;
///
/// let mut map = AvlMap::new();
///
/// map.insert(2, "b");
/// map.insert(1, "a");
/// map.insert(3, "c");
///
/// assert_eq!(map.get(&1), Some(&"a"));
/// assert_eq!(map.min_entry(), Some((&1, &"a")));
/// assert_eq!(map.max_entry(), Some((&3, &"c")));
///
/// let keys: Vec<_> = map.iter().map(|e| *e.0).collect();
/// assert_eq!(keys, [1, 2, 3]);
/// ```
///
/// The same program runs unchanged on a red-black tree:
///
/// ```
/// use ordtree::RbMap;
///
/// let mut map = RbMap::new();
///
/// map.insert(2, "b");
/// map.insert(1, "a");
/// map.insert(3, "c");
///
/// assert_eq!(map.get(&1), Some(&"a"));
/// ```
#[derive(Clone)]
pub struct Map<K, V, C = Natural<K>, B = Avl>
    where C: Compare<K>, B: Balance {

    tree: node::Tree<K, V, B>,
    len: usize,
    cmp: C,
}

/// An ordered map balanced by subtree height (an AVL tree).
pub type AvlMap<K, V, C = Natural<K>> = Map<K, V, C, Avl>;

/// An ordered map balanced by node color (a red-black tree).
pub type RbMap<K, V, C = Natural<K>> = Map<K, V, C, RedBlack>;

impl<K, V, B> Map<K, V, Natural<K>, B>
    where K: Ord, B: Balance {

    /// Creates an empty map ordered according to the natural order of its
    /// keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    /// assert_eq!(map.min_entry(), Some((&1, &"a")));
    /// ```
    pub fn new() -> Self { Map::with_cmp(compare::natural()) }
}

impl<K, V, C, B> Map<K, V, C, B>
    where C: Compare<K>, B: Balance {

    /// Creates an empty map ordered according to `cmp`.
    ///
    /// # Examples
    ///
    /// ```
    /// use compare::{Compare, natural};
    /// use ordtree::AvlMap;
    ///
    /// let mut map = AvlMap::with_cmp(natural().rev());
    ///
    /// map.insert(1, "a");
    /// map.insert(2, "b");
    /// map.insert(3, "c");
    ///
    /// let keys: Vec<_> = map.iter().map(|e| *e.0).collect();
    /// assert_eq!(keys, [3, 2, 1]);
    /// ```
    pub fn with_cmp(cmp: C) -> Self {
        Map { tree: node::Tree::new(), len: 0, cmp }
    }

    /// Checks if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// assert!(map.is_empty());
    /// map.insert(1, "a");
    /// assert!(!map.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool { self.len == 0 }

    /// Returns the number of entries in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// assert_eq!(map.len(), 0);
    /// map.insert(1, "a");
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn len(&self) -> usize { self.len }

    /// Returns a reference to the map's comparator.
    pub fn cmp(&self) -> &C { &self.cmp }

    /// Removes all entries from the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(1, "a");
    /// map.clear();
    /// assert!(map.is_empty());
    /// ```
    pub fn clear(&mut self) {
        self.tree.clear();
        self.len = 0;
    }

    /// Returns a reference to the value associated with the given key, or
    /// `None` if the map does not contain the key.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(1, "a");
    /// assert_eq!(map.get(&1), Some(&"a"));
    /// assert_eq!(map.get(&2), None);
    /// ```
    pub fn get<Q: ?Sized>(&self, key: &Q) -> Option<&V>
        where C: Compare<Q, K> {

        let id = self.tree.find(&self.cmp, key)?;
        Some(self.tree.value(id))
    }

    /// Returns a mutable reference to the value associated with the given
    /// key, or `None` if the map does not contain the key.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(1, "a");
    ///
    /// if let Some(value) = map.get_mut(&1) {
    ///     *value = "b";
    /// }
    ///
    /// assert_eq!(map.get(&1), Some(&"b"));
    /// ```
    pub fn get_mut<Q: ?Sized>(&mut self, key: &Q) -> Option<&mut V>
        where C: Compare<Q, K> {

        let id = self.tree.find(&self.cmp, key)?;
        Some(self.tree.value_mut(id))
    }

    /// Checks if the map contains the given key.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(1, "a");
    /// assert!(map.contains_key(&1));
    /// assert!(!map.contains_key(&2));
    /// ```
    pub fn contains_key<Q: ?Sized>(&self, key: &Q) -> bool
        where C: Compare<Q, K> {

        self.tree.find(&self.cmp, key).is_some()
    }

    /// Inserts an entry into the map, returning the previous value, if any,
    /// associated with the key.
    ///
    /// If the key is already present, only its value is replaced; the key
    /// itself, the node's position, and the tree's shape are unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::RbMap;
    ///
    /// let mut map = RbMap::new();
    /// assert_eq!(map.insert(1, "a"), None);
    /// assert_eq!(map.insert(1, "b"), Some("a"));
    /// assert_eq!(map.get(&1), Some(&"b"));
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let (old, id) = self.tree.insert(&self.cmp, key, value);

        if old.is_none() {
            self.len += 1;
            B::rebalance_insert(&mut self.tree, id);
        }

        old
    }

    /// Removes and returns the entry with the given key, or `None` if the
    /// map does not contain the key, in which case the map is unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(1, "a");
    /// assert_eq!(map.remove(&1), Some((1, "a")));
    /// assert_eq!(map.remove(&1), None);
    /// ```
    pub fn remove<Q: ?Sized>(&mut self, key: &Q) -> Option<(K, V)>
        where C: Compare<Q, K> {

        let id = self.tree.find(&self.cmp, key)?;
        Some(self.remove_at(id))
    }

    fn remove_at(&mut self, id: NodeId) -> (K, V) {
        let (entry, removal) = self.tree.remove_at(id);
        B::rebalance_remove(&mut self.tree, removal);
        self.len -= 1;
        entry
    }

    /// Returns the map's entry with the least key, or `None` if the map is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// assert_eq!(map.min_entry(), None);
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    /// assert_eq!(map.min_entry(), Some((&1, &"a")));
    /// ```
    pub fn min_entry(&self) -> Option<(&K, &V)> {
        let id = self.tree.first()?;
        Some(self.tree.key_value(id))
    }

    /// Returns the map's entry with the greatest key, or `None` if the map
    /// is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// assert_eq!(map.max_entry(), None);
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    /// assert_eq!(map.max_entry(), Some((&2, &"b")));
    /// ```
    pub fn max_entry(&self) -> Option<(&K, &V)> {
        let id = self.tree.last()?;
        Some(self.tree.key_value(id))
    }

    /// Returns the map's entry with the least key, with a mutable reference
    /// to its value, or `None` if the map is empty.
    pub fn min_entry_mut(&mut self) -> Option<(&K, &mut V)> {
        let id = self.tree.first()?;
        Some(self.tree.key_value_mut(id))
    }

    /// Returns the map's entry with the greatest key, with a mutable
    /// reference to its value, or `None` if the map is empty.
    pub fn max_entry_mut(&mut self) -> Option<(&K, &mut V)> {
        let id = self.tree.last()?;
        Some(self.tree.key_value_mut(id))
    }

    /// Removes and returns the map's entry with the least key, or `None` if
    /// the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::RbMap;
    ///
    /// let mut map = RbMap::new();
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    /// assert_eq!(map.remove_min(), Some((1, "a")));
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn remove_min(&mut self) -> Option<(K, V)> {
        let id = self.tree.first()?;
        Some(self.remove_at(id))
    }

    /// Removes and returns the map's entry with the greatest key, or `None`
    /// if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::RbMap;
    ///
    /// let mut map = RbMap::new();
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    /// assert_eq!(map.remove_max(), Some((2, "b")));
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn remove_max(&mut self) -> Option<(K, V)> {
        let id = self.tree.last()?;
        Some(self.remove_at(id))
    }

    /// Returns the map's entry for the given key, which can then be
    /// inspected, modified, or removed without a second lookup.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::AvlMap;
    ///
    /// let mut counts: AvlMap<&str, u32> = AvlMap::new();
    ///
    /// for word in ["a", "b", "a"] {
    ///     *counts.entry(word).or_insert(0) += 1;
    /// }
    ///
    /// assert_eq!(counts[&"a"], 2);
    /// assert_eq!(counts[&"b"], 1);
    /// ```
    pub fn entry(&mut self, key: K) -> Entry<'_, K, V, C, B> {
        match self.tree.find(&self.cmp, &key) {
            Some(id) => Entry::Occupied(OccupiedEntry { map: self, id }),
            None => Entry::Vacant(VacantEntry { map: self, key }),
        }
    }

    /// Returns an iterator over the map's entries in ascending key order
    /// with immutable references to the values.
    ///
    /// The iterator yields exactly [`len`](Map::len) entries and can be
    /// consumed from both ends.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    ///
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    /// map.insert(3, "c");
    ///
    /// let entries: Vec<_> = map.iter().map(|(&k, &v)| (k, v)).collect();
    /// assert_eq!(entries, [(1, "a"), (2, "b"), (3, "c")]);
    ///
    /// let reversed: Vec<_> = map.iter().rev().map(|(&k, &v)| (k, v)).collect();
    /// assert_eq!(reversed, [(3, "c"), (2, "b"), (1, "a")]);
    /// ```
    pub fn iter(&self) -> Iter<'_, K, V, B> {
        Iter(node::Iter::new(&self.tree, self.len))
    }

    /// Returns an iterator over the map's entries in ascending key order
    /// with mutable references to the values.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    ///
    /// map.insert(1, 10);
    /// map.insert(2, 20);
    ///
    /// for (_, value) in map.iter_mut() {
    ///     *value *= 10;
    /// }
    ///
    /// assert_eq!(map[&1], 100);
    /// assert_eq!(map[&2], 200);
    /// ```
    pub fn iter_mut(&mut self) -> IterMut<'_, K, V, B> {
        IterMut { iter: node::Iter::new(&self.tree, self.len), _mut: PhantomData }
    }

    /// Returns an iterator that consumes the map, yielding its entries in
    /// ascending key order.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    ///
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    /// map.insert(3, "c");
    ///
    /// let entries: Vec<_> = map.into_iter().collect();
    /// assert_eq!(entries, [(1, "a"), (2, "b"), (3, "c")]);
    /// ```
    pub fn into_iter(self) -> IntoIter<K, V, B> {
        IntoIter(node::IntoIter::new(self.tree, self.len))
    }

    #[cfg(test)]
    pub fn as_tree(&self) -> &node::Tree<K, V, B> { &self.tree }
}

impl<K, V, C, B> Debug for Map<K, V, C, B>
    where K: Debug, V: Debug, C: Compare<K>, B: Balance {

    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V, C, B> Default for Map<K, V, C, B>
    where C: Compare<K> + Default, B: Balance {

    fn default() -> Self { Map::with_cmp(C::default()) }
}

impl<K, V, C, B> Extend<(K, V)> for Map<K, V, C, B>
    where C: Compare<K>, B: Balance {

    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, it: I) {
        for (key, value) in it {
            self.insert(key, value);
        }
    }
}

impl<K, V, C, B> iter::FromIterator<(K, V)> for Map<K, V, C, B>
    where C: Compare<K> + Default, B: Balance {

    fn from_iter<I: IntoIterator<Item = (K, V)>>(it: I) -> Self {
        let mut map = Map::default();
        map.extend(it);
        map
    }
}

impl<K, V, C, B> Hash for Map<K, V, C, B>
    where K: Hash, V: Hash, C: Compare<K>, B: Balance {

    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len.hash(state);
        for entry in self {
            entry.hash(state);
        }
    }
}

impl<'a, K, V, C, B, Q: ?Sized> ops::Index<&'a Q> for Map<K, V, C, B>
    where C: Compare<K> + Compare<Q, K>, B: Balance {

    type Output = V;

    fn index(&self, key: &Q) -> &V { self.get(key).expect("key not found") }
}

impl<K, V, C, B> IntoIterator for Map<K, V, C, B>
    where C: Compare<K>, B: Balance {

    type Item = (K, V);
    type IntoIter = IntoIter<K, V, B>;

    fn into_iter(self) -> IntoIter<K, V, B> { self.into_iter() }
}

impl<'a, K, V, C, B> IntoIterator for &'a Map<K, V, C, B>
    where C: Compare<K>, B: Balance {

    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V, B>;

    fn into_iter(self) -> Iter<'a, K, V, B> { self.iter() }
}

impl<'a, K, V, C, B> IntoIterator for &'a mut Map<K, V, C, B>
    where C: Compare<K>, B: Balance {

    type Item = (&'a K, &'a mut V);
    type IntoIter = IterMut<'a, K, V, B>;

    fn into_iter(self) -> IterMut<'a, K, V, B> { self.iter_mut() }
}

impl<K, V, C, B> PartialEq for Map<K, V, C, B>
    where V: PartialEq, C: Compare<K>, B: Balance {

    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() &&
            self.iter().zip(other.iter())
                .all(|(l, r)| self.cmp.compares_eq(&l.0, &r.0) && l.1 == r.1)
    }
}

impl<K, V, C, B> Eq for Map<K, V, C, B>
    where V: Eq, C: Compare<K>, B: Balance {}

impl<K, V, C, B> PartialOrd for Map<K, V, C, B>
    where V: PartialOrd, C: Compare<K>, B: Balance {

    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        let mut l = self.iter();
        let mut r = other.iter();

        loop {
            match (l.next(), r.next()) {
                (None, None) => return Some(Equal),
                (None, Some(_)) => return Some(Less),
                (Some(_), None) => return Some(Greater),
                (Some(l), Some(r)) => match self.cmp.compare(&l.0, &r.0) {
                    Equal => match l.1.partial_cmp(r.1) {
                        Some(Equal) => {}
                        non_eq => return non_eq,
                    },
                    non_eq => return Some(non_eq),
                },
            }
        }
    }
}

impl<K, V, C, B> Ord for Map<K, V, C, B>
    where V: Ord, C: Compare<K>, B: Balance {

    fn cmp(&self, other: &Self) -> Ordering {
        let mut l = self.iter();
        let mut r = other.iter();

        loop {
            match (l.next(), r.next()) {
                (None, None) => return Equal,
                (None, Some(_)) => return Less,
                (Some(_), None) => return Greater,
                (Some(l), Some(r)) => match self.cmp.compare(&l.0, &r.0) {
                    Equal => match l.1.cmp(r.1) {
                        Equal => {}
                        non_eq => return non_eq,
                    },
                    non_eq => return non_eq,
                },
            }
        }
    }
}

/// A view into a single entry in the map, either occupied or vacant.
pub enum Entry<'a, K, V, C = Natural<K>, B = Avl>
    where K: 'a, V: 'a, C: 'a + Compare<K>, B: Balance {

    /// An occupied entry.
    Occupied(OccupiedEntry<'a, K, V, C, B>),
    /// A vacant entry.
    Vacant(VacantEntry<'a, K, V, C, B>),
}

impl<'a, K, V, C, B> Entry<'a, K, V, C, B>
    where C: Compare<K>, B: Balance {

    /// Ensures the entry is occupied, inserting `default` if it is vacant,
    /// and returns a mutable reference to its value.
    pub fn or_insert(self, default: V) -> &'a mut V {
        match self {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert(default),
        }
    }

    /// Ensures the entry is occupied, inserting the result of `default` if
    /// it is vacant, and returns a mutable reference to its value.
    pub fn or_insert_with<F: FnOnce() -> V>(self, default: F) -> &'a mut V {
        match self {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert(default()),
        }
    }
}

/// An occupied entry.
pub struct OccupiedEntry<'a, K, V, C = Natural<K>, B = Avl>
    where K: 'a, V: 'a, C: 'a + Compare<K>, B: Balance {

    map: &'a mut Map<K, V, C, B>,
    id: NodeId,
}

impl<'a, K, V, C, B> OccupiedEntry<'a, K, V, C, B>
    where C: Compare<K>, B: Balance {

    /// Returns a reference to the entry's key.
    pub fn key(&self) -> &K { self.map.tree.key(self.id) }

    /// Returns a reference to the entry's value.
    pub fn get(&self) -> &V { self.map.tree.value(self.id) }

    /// Returns a mutable reference to the entry's value.
    pub fn get_mut(&mut self) -> &mut V { self.map.tree.value_mut(self.id) }

    /// Consumes the entry, returning a mutable reference to its value bound
    /// to the map's lifetime.
    pub fn into_mut(self) -> &'a mut V { self.map.tree.value_mut(self.id) }

    /// Replaces the entry's value with the given one, returning the
    /// previous value.
    pub fn insert(&mut self, value: V) -> V {
        self.map.tree.replace_value(self.id, value)
    }

    /// Removes the entry from the map, returning its key and value.
    pub fn remove(self) -> (K, V) { self.map.remove_at(self.id) }
}

/// A vacant entry.
pub struct VacantEntry<'a, K, V, C = Natural<K>, B = Avl>
    where K: 'a, V: 'a, C: 'a + Compare<K>, B: Balance {

    map: &'a mut Map<K, V, C, B>,
    key: K,
}

impl<'a, K, V, C, B> VacantEntry<'a, K, V, C, B>
    where C: Compare<K>, B: Balance {

    /// Inserts the entry into the map with the given value, returning a
    /// mutable reference to the value bound to the map's lifetime.
    pub fn insert(self, value: V) -> &'a mut V {
        let map = self.map;
        let (_, id) = map.tree.insert(&map.cmp, self.key, value);
        map.len += 1;
        B::rebalance_insert(&mut map.tree, id);
        map.tree.value_mut(id)
    }
}

/// An iterator over the map's entries in ascending key order with immutable
/// references to the values.
pub struct Iter<'a, K, V, B = Avl>(node::Iter<'a, K, V, B>);

impl<'a, K, V, B> Clone for Iter<'a, K, V, B> {
    fn clone(&self) -> Self { Iter(self.0.clone()) }
}

impl<'a, K, V, B> Iterator for Iter<'a, K, V, B> {
    type Item = (&'a K, &'a V);
    fn next(&mut self) -> Option<(&'a K, &'a V)> { self.0.next() }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<'a, K, V, B> DoubleEndedIterator for Iter<'a, K, V, B> {
    fn next_back(&mut self) -> Option<(&'a K, &'a V)> { self.0.next_back() }
}

impl<'a, K, V, B> ExactSizeIterator for Iter<'a, K, V, B> {
    fn len(&self) -> usize { self.0.len() }
}

/// An iterator over the map's entries in ascending key order with mutable
/// references to the values.
pub struct IterMut<'a, K, V, B = Avl> {
    iter: node::Iter<'a, K, V, B>,
    _mut: PhantomData<&'a mut V>,
}

impl<'a, K, V, B> Iterator for IterMut<'a, K, V, B> {
    type Item = (&'a K, &'a mut V);

    fn next(&mut self) -> Option<(&'a K, &'a mut V)> {
        let next = self.iter.next();
        // The iterator is constructed from a uniquely borrowed map, so no
        // two calls yield the same node.
        unsafe { mem::transmute(next) }
    }

    fn size_hint(&self) -> (usize, Option<usize>) { self.iter.size_hint() }
}

impl<'a, K, V, B> DoubleEndedIterator for IterMut<'a, K, V, B> {
    fn next_back(&mut self) -> Option<(&'a K, &'a mut V)> {
        let next_back = self.iter.next_back();
        unsafe { mem::transmute(next_back) }
    }
}

impl<'a, K, V, B> ExactSizeIterator for IterMut<'a, K, V, B> {
    fn len(&self) -> usize { self.iter.len() }
}

/// An iterator that consumes the map, yielding its entries in ascending key
/// order.
#[derive(Clone)]
pub struct IntoIter<K, V, B = Avl>(node::IntoIter<K, V, B>);

impl<K, V, B> Iterator for IntoIter<K, V, B> {
    type Item = (K, V);
    fn next(&mut self) -> Option<(K, V)> { self.0.next() }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<K, V, B> DoubleEndedIterator for IntoIter<K, V, B> {
    fn next_back(&mut self) -> Option<(K, V)> { self.0.next_back() }
}

impl<K, V, B> ExactSizeIterator for IntoIter<K, V, B> {
    fn len(&self) -> usize { self.0.len() }
}
