use core::fmt;

use indexmap::IndexMap;

use super::Value;

/// The key of an option in a [`ChoiceSet`]. This is the value that gets
/// stored when the user picks the option.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ChoiceKey {
    /// A boolean option, as used by checkboxes.
    Bool(bool),
    /// An integer option, as used by scales and integer comboboxes.
    Int(i64),
    /// A string option.
    Str(String),
}

impl fmt::Display for ChoiceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChoiceKey::Bool(v) => fmt::Display::fmt(v, f),
            ChoiceKey::Int(v) => fmt::Display::fmt(v, f),
            ChoiceKey::Str(v) => f.write_str(v),
        }
    }
}

impl ChoiceKey {
    /// Returns the key matching the value, if the value is a scalar that can
    /// act as a key.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Bool(v) => Some(ChoiceKey::Bool(*v)),
            Value::I64(v) => Some(ChoiceKey::Int(*v)),
            Value::String(v) => Some(ChoiceKey::Str(v.clone())),
            _ => None,
        }
    }
}

impl From<ChoiceKey> for Value {
    #[inline]
    fn from(key: ChoiceKey) -> Self {
        match key {
            ChoiceKey::Bool(v) => Value::Bool(v),
            ChoiceKey::Int(v) => Value::I64(v),
            ChoiceKey::Str(v) => Value::String(v),
        }
    }
}

impl From<&ChoiceKey> for Value {
    #[inline]
    fn from(key: &ChoiceKey) -> Self {
        key.clone().into()
    }
}

impl From<bool> for ChoiceKey {
    #[inline]
    fn from(v: bool) -> Self {
        ChoiceKey::Bool(v)
    }
}

impl From<i64> for ChoiceKey {
    #[inline]
    fn from(v: i64) -> Self {
        ChoiceKey::Int(v)
    }
}

impl From<i32> for ChoiceKey {
    #[inline]
    fn from(v: i32) -> Self {
        ChoiceKey::Int(v.into())
    }
}

impl From<&str> for ChoiceKey {
    #[inline]
    fn from(v: &str) -> Self {
        ChoiceKey::Str(v.to_owned())
    }
}

impl From<String> for ChoiceKey {
    #[inline]
    fn from(v: String) -> Self {
        ChoiceKey::Str(v)
    }
}

/// The ordered set of options a setting can choose from, together with the
/// labels that are displayed for them.
///
/// The declaration order is significant: it is the order options are shown
/// in, the order of the default random distribution and the index each option
/// is encoded with. An empty choice set means the setting takes free-form
/// values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChoiceSet {
    labels: IndexMap<ChoiceKey, String>,
    reverse: IndexMap<String, ChoiceKey>,
}

impl ChoiceSet {
    /// Creates an empty choice set.
    #[inline]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a choice set where every key is labeled with its own textual
    /// form.
    pub fn from_keys<K: Into<ChoiceKey>>(keys: impl IntoIterator<Item = K>) -> Self {
        Self::from_labeled(keys.into_iter().map(|key| {
            let key = key.into();
            let label = key.to_string();
            (key, label)
        }))
    }

    /// Creates a choice set from explicitly labeled keys.
    ///
    /// If two keys share a label, looking the label up yields the key that was
    /// declared last.
    pub fn from_labeled<K: Into<ChoiceKey>, L: Into<String>>(
        choices: impl IntoIterator<Item = (K, L)>,
    ) -> Self {
        let labels: IndexMap<ChoiceKey, String> = choices
            .into_iter()
            .map(|(key, label)| (key.into(), label.into()))
            .collect();
        let reverse = labels
            .iter()
            .map(|(key, label)| (label.clone(), key.clone()))
            .collect();
        Self { labels, reverse }
    }

    /// Returns the number of options.
    #[inline]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Returns [`true`] if there are no options.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Returns an iterator over the keys in declaration order.
    #[inline]
    pub fn keys(&self) -> impl ExactSizeIterator<Item = &ChoiceKey> + '_ {
        self.labels.keys()
    }

    /// Returns an iterator over the keys and their labels in declaration
    /// order.
    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&ChoiceKey, &str)> + '_ {
        self.labels.iter().map(|(k, v)| (k, v.as_str()))
    }

    /// Returns the label of the key.
    #[inline]
    pub fn label(&self, key: &ChoiceKey) -> Option<&str> {
        self.labels.get(key).map(String::as_str)
    }

    /// Returns the key that is displayed with the label.
    #[inline]
    pub fn key_for_label(&self, label: &str) -> Option<&ChoiceKey> {
        self.reverse.get(label)
    }

    /// Returns the position of the key in declaration order.
    #[inline]
    pub fn position(&self, key: &ChoiceKey) -> Option<usize> {
        self.labels.get_index_of(key)
    }

    /// Returns the key at the position in declaration order.
    #[inline]
    pub fn get_index(&self, index: usize) -> Option<&ChoiceKey> {
        self.labels.get_index(index).map(|(k, _)| k)
    }

    /// The default random distribution: every key with a weight of 1, in
    /// declaration order.
    pub fn uniform_distribution(&self) -> Vec<(Value, u32)> {
        self.keys().map(|key| (Value::from(key), 1)).collect()
    }

    /// A random distribution over every subset of the keys, for settings that
    /// select multiple options at once. Subsets are ordered by size and then
    /// by the positions of their keys, each with a weight of 1.
    ///
    /// The distribution has `2^n` entries for `n` keys.
    pub fn powerset_distribution(&self) -> Vec<(Value, u32)> {
        let keys: Vec<&ChoiceKey> = self.keys().collect();
        let mut distribution = Vec::with_capacity(1 << keys.len().min(16));
        for size in 0..=keys.len() {
            let mut indices: Vec<usize> = (0..size).collect();
            loop {
                let subset: Vec<Value> = indices.iter().map(|&i| Value::from(keys[i])).collect();
                distribution.push((Value::from(subset), 1));

                // Advance to the next combination in lexicographic order.
                let Some(pos) = (0..size).rev().find(|&i| indices[i] != i + keys.len() - size)
                else {
                    break;
                };
                indices[pos] += 1;
                for i in pos + 1..size {
                    indices[i] = indices[i - 1] + 1;
                }
            }
        }
        distribution
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn keys_keep_declaration_order() {
        let choices = ChoiceSet::from_keys(["c", "a", "b"]);
        let keys: Vec<String> = choices.keys().map(ToString::to_string).collect();
        assert_eq!(keys, ["c", "a", "b"]);
        assert_eq!(choices.position(&"a".into()), Some(1));
        assert_eq!(choices.label(&"b".into()), Some("b"));
    }

    #[test]
    fn reverse_lookup_is_inverse_of_labels() {
        let choices = ChoiceSet::from_labeled([("closed", "Closed Forest"), ("open", "Open Forest")]);
        for (key, label) in choices.iter() {
            assert_eq!(choices.key_for_label(label), Some(key));
        }
        assert_eq!(choices.key_for_label("closed"), None);
    }

    #[test]
    fn duplicate_labels_resolve_to_last_key() {
        let choices = ChoiceSet::from_labeled([("a", "Same"), ("b", "Same")]);
        assert_eq!(choices.len(), 2);
        assert_eq!(choices.key_for_label("Same"), Some(&ChoiceKey::from("b")));
    }

    #[test]
    fn uniform_distribution_follows_keys() {
        let choices = ChoiceSet::from_keys([3, 1, 2]);
        assert_eq!(
            choices.uniform_distribution(),
            vec![(Value::I64(3), 1), (Value::I64(1), 1), (Value::I64(2), 1)]
        );
        assert!(ChoiceSet::empty().uniform_distribution().is_empty());
    }

    #[test]
    fn powerset_is_ordered_by_size() {
        let choices = ChoiceSet::from_keys(["a", "b", "c"]);
        let subsets: Vec<Value> = choices
            .powerset_distribution()
            .into_iter()
            .map(|(subset, weight)| {
                assert_eq!(weight, 1);
                subset
            })
            .collect();
        let expected: Vec<Value> = [
            vec![],
            vec!["a"],
            vec!["b"],
            vec!["c"],
            vec!["a", "b"],
            vec!["a", "c"],
            vec!["b", "c"],
            vec!["a", "b", "c"],
        ]
        .into_iter()
        .map(Value::from)
        .collect();
        assert_eq!(subsets, expected);
    }
}
