//! The cycle wheel: radial day layout and selection state.

pub mod layout;
pub mod selection;

pub use layout::{ArcSegment, Point, WheelGeometry, WheelRadii};
pub use selection::WheelSelection;
