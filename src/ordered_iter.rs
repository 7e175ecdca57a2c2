use ::ordered_iter::OrderedMapIterator;

use crate::map;

impl<K, V, B> OrderedMapIterator for map::IntoIter<K, V, B> where K: Ord {
    type Key = K;
    type Val = V;
}

impl<'a, K, V, B> OrderedMapIterator for map::Iter<'a, K, V, B> where K: Ord {
    type Key = &'a K;
    type Val = &'a V;
}

impl<'a, K, V, B> OrderedMapIterator for map::IterMut<'a, K, V, B> where K: Ord {
    type Key = &'a K;
    type Val = &'a mut V;
}
