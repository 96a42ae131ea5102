use crate::settings::ValueType;

/// An error returned when accessing or assembling settings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The descriptor is a pure presentation element (a button or static
    /// text) and has no value to get, set or remove.
    #[error("{name} is not a setting and cannot be accessed")]
    InvalidAccess {
        /// The name of the descriptor.
        name: String,
    },
    /// A value could not be coerced into the requested type.
    #[error("cannot convert {found:?} value to {expected:?}: {reason}")]
    TypeConversion {
        /// The type that was requested.
        expected: ValueType,
        /// The type of the value that was provided.
        found: ValueType,
        /// Why the conversion failed.
        reason: String,
    },
    /// No setting is registered under the name.
    #[error("unknown setting: {name}")]
    KeyNotFound {
        /// The name that was looked up.
        name: String,
    },
    /// A setting with the same name has already been registered.
    #[error("setting {name} is already registered")]
    DuplicateSetting {
        /// The name that was registered twice.
        name: String,
    },
    /// Adding the dependency would make a setting transitively depend on
    /// itself.
    #[error("cyclic dependency: {}", .path.join(" -> "))]
    CyclicDependency {
        /// The settings forming the cycle, starting and ending with the same
        /// setting.
        path: Vec<String>,
    },
}

impl Error {
    pub(crate) fn conversion(expected: ValueType, found: ValueType, reason: impl Into<String>) -> Self {
        Self::TypeConversion {
            expected,
            found,
            reason: reason.into(),
        }
    }
}
