//! Normalization of raw values into the canonical representation of a
//! [`ValueType`].

use crate::Error;

use super::{List, Map, Value, ValueType};

/// Coerces a raw value into the canonical representation of the value type.
///
/// Coercion is idempotent: coercing an already coerced value returns it
/// unchanged. Values of [`ValueType::None`] are passed through as
/// [`Value::None`], as there is nothing to coerce them into.
pub fn coerce(value_type: ValueType, value: Value) -> Result<Value, Error> {
    Ok(match value_type {
        ValueType::None => Value::None,
        ValueType::Bool => Value::Bool(truthy(&value)),
        ValueType::String => match value {
            Value::String(v) => Value::String(v),
            other => Value::String(other.to_string()),
        },
        ValueType::Integer => Value::I64(to_integer(value)?),
        ValueType::List => Value::List(to_list(value)?),
        ValueType::Mapping => Value::Map(to_map(value)?),
    })
}

/// Returns whether the value counts as true. Nothing, `false`, zero, the empty
/// string and empty collections are false, everything else is true.
pub fn truthy(value: &Value) -> bool {
    match value {
        Value::None => false,
        Value::Bool(v) => *v,
        Value::I64(v) => *v != 0,
        Value::String(v) => !v.is_empty(),
        Value::List(v) => !v.is_empty(),
        Value::Map(v) => !v.is_empty(),
    }
}

fn to_integer(value: Value) -> Result<i64, Error> {
    match value {
        Value::Bool(v) => Ok(v.into()),
        Value::I64(v) => Ok(v),
        Value::String(v) => v.trim().parse().map_err(|err| {
            Error::conversion(
                ValueType::Integer,
                ValueType::String,
                format!("{v:?} is not a whole number ({err})"),
            )
        }),
        other => Err(Error::conversion(
            ValueType::Integer,
            other.get_type(),
            "value has no numeric representation",
        )),
    }
}

fn to_list(value: Value) -> Result<List, Error> {
    match value {
        Value::List(v) => Ok(v),
        Value::String(v) => Ok(v.chars().map(|c| Value::String(c.into())).collect()),
        Value::Map(v) => Ok(v.keys().map(Value::from).collect()),
        other => Err(Error::conversion(
            ValueType::List,
            other.get_type(),
            "value is not iterable",
        )),
    }
}

fn to_map(value: Value) -> Result<Map, Error> {
    match value {
        Value::Map(v) => Ok(v),
        Value::List(list) => {
            let mut map = Map::new();
            for entry in list {
                match entry {
                    Value::List(pair) if pair.len() == 2 => {
                        if let [key, value] = pair.as_slice() {
                            map.insert(key.to_string(), value.clone());
                        }
                    }
                    other => {
                        return Err(Error::conversion(
                            ValueType::Mapping,
                            ValueType::List,
                            format!("element {other} is not a key-value pair"),
                        ))
                    }
                }
            }
            Ok(map)
        }
        other => Err(Error::conversion(
            ValueType::Mapping,
            other.get_type(),
            "value is not a mapping",
        )),
    }
}

/// A type that can be extracted from a coerced setting [`Value`].
pub trait FromValue: Sized {
    /// Extracts the type from the value. Fails if the value is of a different
    /// type.
    fn from_value(value: Value) -> Result<Self, Error>;
}

impl FromValue for Value {
    #[inline]
    fn from_value(value: Value) -> Result<Self, Error> {
        Ok(value)
    }
}

macro_rules! impl_from_value {
    ($($ty:ty => $variant:ident as $value_type:ident),* $(,)?) => {
        $(
            impl FromValue for $ty {
                fn from_value(value: Value) -> Result<Self, Error> {
                    match value {
                        Value::$variant(v) => Ok(v),
                        other => Err(Error::conversion(
                            ValueType::$value_type,
                            other.get_type(),
                            "value has a different type",
                        )),
                    }
                }
            }
        )*
    };
}

impl_from_value! {
    bool => Bool as Bool,
    i64 => I64 as Integer,
    String => String as String,
    List => List as List,
    Map => Map as Mapping,
}

impl<T: FromValue> FromValue for Vec<T> {
    fn from_value(value: Value) -> Result<Self, Error> {
        List::from_value(value)?
            .into_iter()
            .map(T::from_value)
            .collect()
    }
}
