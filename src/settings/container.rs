use super::Value;

/// The storage that settings are read from and written to. A container is
/// owned by a session or profile and maps setting names to raw [`Value`]s.
///
/// Descriptors are the only intended mediators of a container: they coerce
/// every value on the way in and out, so code going through a
/// [`SettingInfo`](super::SettingInfo) never observes a value of the wrong
/// type. The container itself performs no validation.
///
/// Containers are not synchronized. Sharing one across threads requires the
/// caller to serialize access.
pub trait Container {
    /// Returns the raw value stored under the name, if any.
    fn get_raw(&self, name: &str) -> Option<&Value>;

    /// Stores the value under the name, replacing any previous value.
    fn set_raw(&mut self, name: &str, value: Value);

    /// Removes the value stored under the name. Returns the removed value, or
    /// [`None`] if nothing was stored.
    fn delete_raw(&mut self, name: &str) -> Option<Value>;
}
