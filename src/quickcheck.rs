use ::quickcheck::{Arbitrary, Gen};
use compare::Compare;

use crate::balance::Balance;
use crate::map::Map;

impl<K, V, C, B> Arbitrary for Map<K, V, C, B>
    where K: Arbitrary + Send, V: Arbitrary + Send,
          C: 'static + Clone + Compare<K> + Default + Send,
          B: 'static + Balance + Send {

    fn arbitrary(gen: &mut Gen) -> Self {
        Vec::<(K, V)>::arbitrary(gen).into_iter().collect()
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let vec: Vec<(K, V)> = self.clone().into_iter().collect();
        Box::new(vec.shrink().map(|vec| vec.into_iter().collect()))
    }
}
