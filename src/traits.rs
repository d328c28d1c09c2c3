//! Traits

mod corners;
mod geometry_map;
#[cfg(feature = "serde")]
mod io;
mod point;
mod reference_mapping;

pub use corners::Corners;
pub use geometry_map::GeometryMap;
#[cfg(feature = "serde")]
pub use io::{ConvertToSerializable, RONExport, RONImport};
pub use point::WeightedPoint;
pub use reference_mapping::ReferenceMapping;
