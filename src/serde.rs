use super::HashTable;

use serde::de::{Deserialize, Error as _, MapAccess, Visitor};
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde::Deserializer;

use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;

/// The size hint of a serialized map is not trusted beyond this many entries when pre-sizing.
const MAX_SIZE_HINT: usize = 4096;

pub struct HashTableVisitor<K: Eq + Hash, V> {
    marker: PhantomData<fn() -> HashTable<K, V>>,
}

impl<K, V> HashTableVisitor<K, V>
where
    K: Eq + Hash,
{
    fn new() -> Self {
        HashTableVisitor {
            marker: PhantomData,
        }
    }
}

impl<'de, K, V> Visitor<'de> for HashTableVisitor<K, V>
where
    K: Deserialize<'de> + Eq + Hash,
    V: Deserialize<'de>,
{
    type Value = HashTable<K, V>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a HashTable")
    }

    fn visit_map<M>(self, mut access: M) -> Result<Self::Value, M::Error>
    where
        M: MapAccess<'de>,
    {
        let capacity = access
            .size_hint()
            .map_or(1, |n| n.min(MAX_SIZE_HINT).saturating_mul(10))
            .max(1);
        let mut hashtable = HashTable::with_capacity(capacity).map_err(M::Error::custom)?;

        while let Some((key, value)) = access.next_entry()? {
            hashtable.set(key, value);
        }

        Ok(hashtable)
    }
}

impl<'de, K, V> Deserialize<'de> for HashTable<K, V>
where
    K: Deserialize<'de> + Eq + Hash,
    V: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(HashTableVisitor::<K, V>::new())
    }
}

impl<K, V> Serialize for HashTable<K, V>
where
    K: Serialize,
    V: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (k, v) in self.iter() {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}
