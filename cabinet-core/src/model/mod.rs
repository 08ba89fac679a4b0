//! Data model types for cabinets, catalog items, and projects.

mod cabinet;
mod catalog_item;
mod dimensions;
mod piece;
mod project;

pub use cabinet::{AccessoryLine, Cabinet, MaterialLine};
pub use catalog_item::{AccessoryItem, MaterialItem};
pub use dimensions::{Dimensions, PanelSize};
pub use piece::Piece;
pub use project::{Project, ProjectStatus};
