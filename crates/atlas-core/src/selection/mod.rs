//! Selection coordinator and the map view derived from it.

mod coordinator;
pub mod map;

pub use coordinator::SelectionCoordinator;
pub use map::{MapMarker, MapViewport};
