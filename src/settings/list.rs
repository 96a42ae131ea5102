use core::fmt;

use super::Value;

/// A list of [`Value`]s that can itself be a [`Value`] and thus be stored in a
/// [`Map`](super::Map).
#[derive(Clone, Default, PartialEq)]
pub struct List(Vec<Value>);

impl fmt::Debug for List {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl List {
    /// Creates a new empty settings list.
    #[inline]
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Returns the number of values in the list.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns [`true`] if the list has a length of 0.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the value at the given index. Returns [`None`] if the index is
    /// out of bounds.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.0.get(index)
    }

    /// Pushes the value to the end of the list.
    #[inline]
    pub fn push(&mut self, value: impl Into<Value>) {
        self.0.push(value.into())
    }

    /// Returns [`true`] if the list contains the value.
    #[inline]
    pub fn contains(&self, value: &Value) -> bool {
        self.0.contains(value)
    }

    /// Returns an iterator over the values in the list. The iterator is
    /// double-ended, so it can be iterated backwards as well.
    #[inline]
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Value> + ExactSizeIterator + '_ {
        self.0.iter()
    }

    /// Returns the values as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[Value] {
        &self.0
    }
}

impl FromIterator<Value> for List {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for List {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a List {
    type Item = &'a Value;
    type IntoIter = core::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl From<Vec<Value>> for List {
    #[inline]
    fn from(values: Vec<Value>) -> Self {
        Self(values)
    }
}
