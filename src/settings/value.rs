use core::fmt;

use super::{List, Map};

/// The type of a setting [`Value`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ValueType {
    /// Not a real setting. Descriptors of this type only carry GUI metadata
    /// for elements like buttons and static text.
    None,
    /// A boolean.
    Bool,
    /// A string.
    String,
    /// A 64-bit signed integer.
    Integer,
    /// A [`List`] of [`Value`]s.
    List,
    /// A [`Map`] of key-value pairs of [`Value`]s.
    Mapping,
}

impl ValueType {
    /// Returns the value a setting of this type has when no default is
    /// specified.
    pub fn default_value(self) -> Value {
        match self {
            ValueType::None => Value::None,
            ValueType::Bool => Value::Bool(false),
            ValueType::String => Value::String(String::new()),
            ValueType::Integer => Value::I64(0),
            ValueType::List => Value::List(List::new()),
            ValueType::Mapping => Value::Map(Map::new()),
        }
    }
}

/// A value of a setting. This can be a value of any type that a setting can
/// hold. Currently this is either nothing, a [`bool`], an [`i64`], a string, a
/// [`List`] or a [`Map`].
#[derive(Clone, PartialEq, Default)]
pub enum Value {
    /// No value.
    #[default]
    None,
    /// A boolean.
    Bool(bool),
    /// A 64-bit signed integer.
    I64(i64),
    /// A string.
    String(String),
    /// A list of values.
    List(List),
    /// A map of key-value pairs.
    Map(Map),
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::None => f.write_str("None"),
            Value::Bool(v) => fmt::Debug::fmt(v, f),
            Value::I64(v) => fmt::Debug::fmt(v, f),
            Value::String(v) => fmt::Debug::fmt(v, f),
            Value::List(v) => fmt::Debug::fmt(v, f),
            Value::Map(v) => fmt::Debug::fmt(v, f),
        }
    }
}

/// The textual form of a value. This is what a value turns into when it gets
/// coerced into a string.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::None => Ok(()),
            Value::Bool(v) => fmt::Display::fmt(v, f),
            Value::I64(v) => fmt::Display::fmt(v, f),
            Value::String(v) => f.write_str(v),
            Value::List(list) => {
                f.write_str("[")?;
                for (i, value) in list.iter().enumerate() {
                    if i != 0 {
                        f.write_str(", ")?;
                    }
                    fmt::Display::fmt(value, f)?;
                }
                f.write_str("]")
            }
            Value::Map(map) => {
                f.write_str("{")?;
                for (i, (key, value)) in map.iter().enumerate() {
                    if i != 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                f.write_str("}")
            }
        }
    }
}

impl Value {
    /// Creates a new setting value from a value of a supported type.
    #[inline]
    pub fn new(value: impl Into<Self>) -> Self {
        value.into()
    }

    /// Returns the type of the value.
    #[inline]
    pub fn get_type(&self) -> ValueType {
        match self {
            Value::None => ValueType::None,
            Value::Bool(_) => ValueType::Bool,
            Value::I64(_) => ValueType::Integer,
            Value::String(_) => ValueType::String,
            Value::List(_) => ValueType::List,
            Value::Map(_) => ValueType::Mapping,
        }
    }

    /// Returns the value as a [`bool`] if it is a boolean.
    #[inline]
    pub fn get_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the value as an [`i64`] if it is an integer.
    #[inline]
    pub fn get_i64(&self) -> Option<i64> {
        match self {
            Value::I64(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the value as a string slice if it is a string.
    #[inline]
    pub fn get_str(&self) -> Option<&str> {
        match self {
            Value::String(v) => Some(v),
            _ => None,
        }
    }

    /// Returns the value as a [`List`] if it is a list.
    #[inline]
    pub fn get_list(&self) -> Option<&List> {
        match self {
            Value::List(v) => Some(v),
            _ => None,
        }
    }

    /// Returns the value as a [`Map`] if it is a map.
    #[inline]
    pub fn get_map(&self) -> Option<&Map> {
        match self {
            Value::Map(v) => Some(v),
            _ => None,
        }
    }

    /// Returns [`true`] if the value is [`Value::None`].
    #[inline]
    pub fn is_none(&self) -> bool {
        matches!(self, Value::None)
    }
}

impl From<bool> for Value {
    #[inline]
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i64> for Value {
    #[inline]
    fn from(value: i64) -> Self {
        Value::I64(value)
    }
}

impl From<i32> for Value {
    #[inline]
    fn from(value: i32) -> Self {
        Value::I64(value.into())
    }
}

impl From<u32> for Value {
    #[inline]
    fn from(value: u32) -> Self {
        Value::I64(value.into())
    }
}

impl From<&str> for Value {
    #[inline]
    fn from(value: &str) -> Self {
        Value::String(value.to_owned())
    }
}

impl From<String> for Value {
    #[inline]
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<List> for Value {
    #[inline]
    fn from(value: List) -> Self {
        Value::List(value)
    }
}

impl From<Map> for Value {
    #[inline]
    fn from(value: Map) -> Self {
        Value::Map(value)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    #[inline]
    fn from(value: Vec<T>) -> Self {
        Value::List(value.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    #[inline]
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::None, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_textual_form() {
        let list: Value = vec![Value::from(1), Value::from("a"), Value::from(true)].into();
        assert_eq!(list.to_string(), "[1, a, true]");

        let mut map = Map::new();
        map.insert("x", 3);
        map.insert("y", "z");
        assert_eq!(Value::from(map).to_string(), "{x: 3, y: z}");
        assert_eq!(Value::None.to_string(), "");
    }

    #[test]
    fn type_defaults() {
        assert_eq!(ValueType::Bool.default_value(), Value::Bool(false));
        assert_eq!(ValueType::String.default_value(), Value::from(""));
        assert_eq!(ValueType::Integer.default_value(), Value::I64(0));
        assert_eq!(ValueType::List.default_value(), Value::List(List::new()));
        assert_eq!(ValueType::Mapping.default_value(), Value::Map(Map::new()));
        assert!(ValueType::None.default_value().is_none());
    }
}
