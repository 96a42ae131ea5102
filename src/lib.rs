//! A declarative schema for user-configurable settings.
//!
//! Every setting is described once by a [`SettingInfo`](settings::SettingInfo)
//! descriptor: its value type, default, GUI presentation and how many bits it
//! occupies in a compact settings string. Descriptors never hold values
//! themselves. They read and write through a
//! [`Container`](settings::Container) owned by the application, coercing every
//! value into its canonical type on the way in and out.
//!
//! ```
//! use settings_schema::settings::{gui, Map, Registry};
//!
//! # fn main() -> Result<(), settings_schema::Error> {
//! let mut registry = Registry::new();
//! registry.register(gui::checkbutton("open_forest", "Open Forest").shared().build()?)?;
//! registry.register(
//!     gui::combobox("forest_logic", "Forest Logic", ["closed", "open"], "closed")
//!         .shared()
//!         .build()?,
//! )?;
//! registry.create_dependency("forest_logic", "open_forest", false, false)?;
//!
//! let mut map = Map::new();
//! assert!(registry.is_disabled("forest_logic", &map)?);
//! registry.get("open_forest")?.set(&mut map, 1)?;
//! assert!(!registry.is_disabled("forest_logic", &map)?);
//! # Ok(())
//! # }
//! ```

mod error;
pub mod settings;

pub use error::Error;
