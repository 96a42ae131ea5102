#[cfg(feature = "derive")]
pub use settings_schema_derive::Snapshot;

use crate::Error;

use super::{Container, Registry};

/// A typed view of some settings, read through their descriptors. This can be
/// derived for structs with the derive macro [`Snapshot`](macro@Snapshot),
/// which reads every field from the setting of the same name.
///
/// ```ignore
/// #[derive(Snapshot)]
/// struct Logic {
///     open_forest: bool,
///     #[setting = "bridge"]
///     rainbow_bridge: String,
///     allowed_tricks: Vec<String>,
/// }
///
/// let logic = Logic::load(&registry, &map)?;
/// ```
pub trait Snapshot: Sized {
    /// Reads the settings from the container, falling back to their defaults.
    fn load<C: Container + ?Sized>(registry: &Registry, container: &C) -> Result<Self, Error>;

    /// Updates the settings with the values currently in the container.
    fn update_from<C: Container + ?Sized>(
        &mut self,
        registry: &Registry,
        container: &C,
    ) -> Result<(), Error> {
        *self = Self::load(registry, container)?;
        Ok(())
    }
}
