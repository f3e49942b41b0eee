//! Vehicles and the bounded field they drive on.
//!
//! This crate holds the mutable world state of a Gridlock scenario:
//! [`Vehicle`] (name, pose, FIFO command queue, immutable origin
//! record) and [`Field`] (dimensions plus the insertion-ordered fleet).
//! Both are deliberately passive. A vehicle applies one command at a
//! time with no idea where the field ends; a field answers bounds,
//! occupancy, and collision queries without ever moving anything. The
//! stepping policy that combines the two lives in `gridlock-engine`.
//!
//! Placement comes in two flavours: [`Field::place_vehicle`] validates
//! names, bounds, and occupancy the way scenario construction wants,
//! while [`Field::add_vehicle`] inserts raw state for tooling and
//! tests.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod field;
pub mod vehicle;

pub use error::{PlacementError, VehicleError};
pub use field::Field;
pub use vehicle::{Origin, Vehicle};
