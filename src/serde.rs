//! Serialization as a plain map: entries are written in ascending key
//! order, and deserialization rebuilds the tree by repeated insertion.

use ::serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use ::serde::ser::{Serialize, SerializeMap, Serializer};
use compare::Compare;
use std::fmt;
use std::marker::PhantomData;

use crate::balance::Balance;
use crate::map::Map;

impl<K, V, C, B> Serialize for Map<K, V, C, B>
    where K: Serialize, V: Serialize, C: Compare<K>, B: Balance {

    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self {
            state.serialize_entry(key, value)?;
        }
        state.end()
    }
}

struct MapVisitor<K, V, C, B> {
    marker: PhantomData<fn() -> (K, V, C, B)>,
}

impl<'de, K, V, C, B> Visitor<'de> for MapVisitor<K, V, C, B>
    where K: Deserialize<'de>, V: Deserialize<'de>,
          C: Compare<K> + Default, B: Balance {

    type Value = Map<K, V, C, B>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut map = Map::default();

        while let Some((key, value)) = access.next_entry()? {
            map.insert(key, value);
        }

        Ok(map)
    }
}

impl<'de, K, V, C, B> Deserialize<'de> for Map<K, V, C, B>
    where K: Deserialize<'de>, V: Deserialize<'de>,
          C: Compare<K> + Default, B: Balance {

    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(MapVisitor { marker: PhantomData })
    }
}
