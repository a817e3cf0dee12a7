// Layout service module
// Turns stored events into the week grid's lanes and geometry

pub mod overlap;
pub mod week;

pub use overlap::{overlaps, pack_into_lanes};
pub use week::{hour_labels, WeekViewProjector};
