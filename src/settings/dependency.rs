use crate::Error;

use super::{coerce, Container, Registry, SettingInfo, Value};

/// A single reason for a setting to be disabled: another setting having (or,
/// if negated, not having) a specific value.
#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    setting: String,
    value: Value,
    negate: bool,
}

impl Condition {
    /// Creates a condition on the setting `on`. The expected value is coerced
    /// into the type of `on`, so it compares equal to what `on` returns.
    pub fn new(on: &SettingInfo, expected: impl Into<Value>, negate: bool) -> Result<Self, Error> {
        if !on.is_setting() {
            return Err(Error::InvalidAccess {
                name: on.name().to_owned(),
            });
        }
        Ok(Self {
            setting: on.name().to_owned(),
            value: coerce(on.value_type(), expected.into())?,
            negate,
        })
    }

    /// The name of the setting the condition looks at.
    #[inline]
    pub fn setting(&self) -> &str {
        &self.setting
    }

    /// The value the setting is compared against.
    #[inline]
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Whether the condition holds when the setting does **not** have the
    /// value.
    #[inline]
    pub fn is_negated(&self) -> bool {
        self.negate
    }

    /// Checks whether the condition holds for the values in the container.
    pub fn holds<C: Container + ?Sized>(
        &self,
        registry: &Registry,
        container: &C,
    ) -> Result<bool, Error> {
        let current = registry.get(&self.setting)?.get(container)?;
        Ok((current == self.value) != self.negate)
    }
}

/// The predicate deciding whether a setting is disabled. It is a list of
/// [`Condition`]s combined with a logical OR: the setting is disabled as soon
/// as any of them holds. Without any conditions, the setting is never
/// disabled.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dependency {
    conditions: Vec<Condition>,
}

impl Dependency {
    /// Returns [`true`] if there are no conditions.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    /// The conditions in the order they were added.
    #[inline]
    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    #[inline]
    pub(super) fn push(&mut self, condition: Condition) {
        self.conditions.push(condition);
    }

    /// Returns [`true`] if any of the conditions hold. Evaluation stops at the
    /// first condition that holds.
    pub fn evaluate<C: Container + ?Sized>(
        &self,
        registry: &Registry,
        container: &C,
    ) -> Result<bool, Error> {
        for condition in &self.conditions {
            if condition.holds(registry, container)? {
                tracing::trace!(
                    setting = condition.setting(),
                    value = %condition.value(),
                    negate = condition.is_negated(),
                    "condition holds"
                );
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Returns every condition that currently holds. This is why the setting
    /// is disabled.
    pub fn matching<C: Container + ?Sized>(
        &self,
        registry: &Registry,
        container: &C,
    ) -> Result<Vec<&Condition>, Error> {
        let mut matching = Vec::new();
        for condition in &self.conditions {
            if condition.holds(registry, container)? {
                matching.push(condition);
            }
        }
        Ok(matching)
    }
}
