//! Serde support, behind the `serde` feature.
//!
//! `Option` and `Result` use the data model of their standard counterparts;
//! `HashMap` serializes as a map.

use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt;
use std::hash::{BuildHasher, Hash};
use std::marker::PhantomData;

use crate::hash_map::HashMap;
use crate::option::Option;
use crate::result::Result;

impl<T: Serialize> Serialize for Option<T> {
    fn serialize<Ser>(&self, ser: Ser) -> core::result::Result<Ser::Ok, Ser::Error>
    where
        Ser: Serializer,
    {
        match self {
            Option::Some(v) => ser.serialize_some(v),
            Option::None => ser.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Option<T> {
    fn deserialize<D>(des: D) -> core::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        core::option::Option::<T>::deserialize(des).map(Option::from)
    }
}

impl<T: Serialize, E: Serialize> Serialize for Result<T, E> {
    fn serialize<Ser>(&self, ser: Ser) -> core::result::Result<Ser::Ok, Ser::Error>
    where
        Ser: Serializer,
    {
        match self {
            Result::Ok(v) => ser.serialize_newtype_variant("Result", 0, "Ok", v),
            Result::Err(e) => ser.serialize_newtype_variant("Result", 1, "Err", e),
        }
    }
}

impl<'de, T: Deserialize<'de>, E: Deserialize<'de>> Deserialize<'de> for Result<T, E> {
    fn deserialize<D>(des: D) -> core::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        core::result::Result::<T, E>::deserialize(des).map(Result::from)
    }
}

struct MapVisitor<K, V, S> {
    marker: PhantomData<fn() -> HashMap<K, V, S>>,
}

impl<'de, K, V, S> Visitor<'de> for MapVisitor<K, V, S>
where
    K: Deserialize<'de> + Eq + Hash,
    V: Deserialize<'de>,
    S: BuildHasher + Default,
{
    type Value = HashMap<K, V, S>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a map")
    }

    fn visit_map<Access>(self, mut access: Access) -> core::result::Result<Self::Value, Access::Error>
    where
        Access: MapAccess<'de>,
    {
        let mut map =
            HashMap::with_capacity_and_hasher(access.size_hint().unwrap_or(0), S::default());
        while let Some((k, v)) = access.next_entry()? {
            map.insert(k, v);
        }
        Ok(map)
    }
}

impl<'de, K, V, S> Deserialize<'de> for HashMap<K, V, S>
where
    K: Deserialize<'de> + Eq + Hash,
    V: Deserialize<'de>,
    S: BuildHasher + Default,
{
    fn deserialize<D>(des: D) -> core::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        des.deserialize_map(MapVisitor {
            marker: PhantomData,
        })
    }
}

impl<K, V, S> Serialize for HashMap<K, V, S>
where
    K: Serialize,
    V: Serialize,
{
    fn serialize<Ser>(&self, ser: Ser) -> core::result::Result<Ser::Ok, Ser::Error>
    where
        Ser: Serializer,
    {
        let mut s = ser.serialize_map(Some(self.len()))?;
        for (k, v) in self.iter() {
            s.serialize_entry(k, v)?;
        }
        s.end()
    }
}
