//! Support for describing settings and accessing their values.

pub mod bitwidth;
mod choices;
mod coerce;
mod container;
mod dependency;
mod encoding;
pub mod gui;
mod info;
mod list;
mod map;
mod registry;
mod snapshot;
mod value;

pub use choices::*;
pub use coerce::*;
pub use container::*;
pub use dependency::*;
pub use encoding::*;
pub use gui::{DisableMap, DisableOption, DisableTargets, GuiInfo, GuiParams, WidgetKind};
pub use info::*;
pub use list::*;
pub use map::*;
pub use registry::*;
pub use snapshot::*;
pub use value::*;
