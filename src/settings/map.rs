use core::fmt;

use indexmap::IndexMap;

use super::{Container, Value};

/// A map consisting of key-value pairs of [`Value`]s. Maps preserve the order
/// in which their keys were first inserted.
///
/// A map is also the default settings [`Container`]: every setting has a
/// string based key and a [`Value`]. Settings that are unmodified are usually
/// not stored in the map, so reading them through their descriptor yields the
/// default value instead.
#[derive(Clone, Default, PartialEq)]
pub struct Map(IndexMap<String, Value>);

impl fmt::Debug for Map {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl Map {
    /// Creates a new empty settings map.
    #[inline]
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    /// Inserts the value into the map based on the key. If the key already
    /// exists, it will be overwritten while keeping its position.
    #[inline]
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    /// Gets the value from the map based on the key. Returns [`None`] if the
    /// key does not exist.
    #[inline]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Removes the value stored under the key, preserving the order of the
    /// remaining keys. Returns the removed value.
    #[inline]
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.shift_remove(key)
    }

    /// Returns [`true`] if the map contains a value for the key.
    #[inline]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Returns the number of entries in the map.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns [`true`] if the map has no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the entries in insertion order.
    #[inline]
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (&str, &Value)> + ExactSizeIterator + '_ {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Returns an iterator over the keys in insertion order.
    #[inline]
    pub fn keys(&self) -> impl DoubleEndedIterator<Item = &str> + ExactSizeIterator + '_ {
        self.0.keys().map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Map {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl Container for Map {
    #[inline]
    fn get_raw(&self, name: &str) -> Option<&Value> {
        self.get(name)
    }

    #[inline]
    fn set_raw(&mut self, name: &str, value: Value) {
        self.insert(name, value)
    }

    #[inline]
    fn delete_raw(&mut self, name: &str) -> Option<Value> {
        self.remove(name)
    }
}
