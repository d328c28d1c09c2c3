//! Geometry mappings
//!
//! A mapping sends points of a reference cell to physical space. Mappings are built from the
//! corners of an entity: if the corners are the image of the reference vertices under an affine
//! map, an [AffineMapping] is used, otherwise a [MultilinearMapping] interpolates the corners.
//! [GeometryMapping] selects between the two and caches derived quantities.
mod affine;
mod geometry_map;
pub(crate) mod linalg;
mod mapping;
mod multilinear;
mod newton;

pub use affine::AffineMapping;
pub use geometry_map::TabulatedGeometryMap;
#[cfg(feature = "serde")]
pub use mapping::SerializableGeometryMapping;
pub use mapping::{GeometryMapping, MappingVariant, SubMapping};
pub use multilinear::MultilinearMapping;
pub(crate) use newton::newton_local;

use crate::{
    reference_cell,
    traits::Corners,
    types::{cast, RealScalar, ReferenceCellType},
};

/// The number of Newton iterations used by [crate::traits::ReferenceMapping::local]
pub const DEFAULT_MAX_ITERATIONS: usize = 32;

/// The tolerance used by [crate::traits::ReferenceMapping::local] and
/// [crate::traits::ReferenceMapping::check_inside]
pub fn default_tolerance<T: RealScalar>() -> T {
    cast::<T>(1000.0) * T::epsilon()
}

/// The midpoint of a reference cell as a fixed size array
pub(crate) fn reference_midpoint<T: RealScalar, const D: usize>(cell: ReferenceCellType) -> [T; D] {
    let mut mid = [T::zero(); D];
    mid.copy_from_slice(&reference_cell::midpoint::<T>(cell));
    mid
}

/// Corners of an entity taken from a table of points
///
/// The points are stored in a column-major array of shape `[G, npoints]`; the corners are the
/// points whose indices are listed in `vertices`.
#[derive(Debug, Clone, Copy)]
pub struct IndexedCorners<'a, T: RealScalar, const G: usize> {
    points: &'a [T],
    vertices: &'a [usize],
}

impl<'a, T: RealScalar, const G: usize> IndexedCorners<'a, T, G> {
    /// Create new
    pub fn new(points: &'a [T], vertices: &'a [usize]) -> Self {
        assert!(
            G > 0 && points.len() % G == 0,
            "Points must be stored as an array with {G} rows"
        );
        Self { points, vertices }
    }
}

impl<T: RealScalar, const G: usize> Corners<G> for IndexedCorners<'_, T, G> {
    type T = T;

    fn corner_count(&self) -> usize {
        self.vertices.len()
    }

    fn corner(&self, index: usize) -> [T; G] {
        let v = self.vertices[index];
        let mut c = [T::zero(); G];
        c.copy_from_slice(&self.points[G * v..G * (v + 1)]);
        c
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_indexed_corners() {
        let points = [0.0, 0.0, 1.0, 0.0, 2.0, 0.5, 0.0, 1.0];
        let corners = IndexedCorners::<f64, 2>::new(&points, &[3, 0, 2]);
        assert_eq!(corners.corner_count(), 3);
        assert_eq!(corners.corner(0), [0.0, 1.0]);
        assert_eq!(corners.corner(1), [0.0, 0.0]);
        assert_eq!(corners.corner(2), [2.0, 0.5]);
    }

    #[test]
    fn test_reference_midpoint() {
        assert_eq!(
            reference_midpoint::<f64, 2>(ReferenceCellType::Quadrilateral),
            [0.5, 0.5]
        );
        assert_eq!(reference_midpoint::<f64, 0>(ReferenceCellType::Point), []);
    }
}
