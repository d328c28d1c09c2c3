//! Corner coordinates of an entity
use crate::types::RealScalar;

/// Indexable access to the corner coordinates of an entity
///
/// Corners are numbered in the vertex ordering of the entity's reference cell.
pub trait Corners<const G: usize> {
    /// Scalar type
    type T: RealScalar;

    /// The number of corners
    fn corner_count(&self) -> usize;

    /// The coordinates of the corner with index `index`
    fn corner(&self, index: usize) -> [Self::T; G];
}

impl<T: RealScalar, const G: usize> Corners<G> for [[T; G]] {
    type T = T;

    fn corner_count(&self) -> usize {
        self.len()
    }

    fn corner(&self, index: usize) -> [T; G] {
        self[index]
    }
}

impl<T: RealScalar, const G: usize> Corners<G> for Vec<[T; G]> {
    type T = T;

    fn corner_count(&self) -> usize {
        self.len()
    }

    fn corner(&self, index: usize) -> [T; G] {
        self[index]
    }
}

impl<T: RealScalar, const G: usize, const N: usize> Corners<G> for [[T; G]; N] {
    type T = T;

    fn corner_count(&self) -> usize {
        N
    }

    fn corner(&self, index: usize) -> [T; G] {
        self[index]
    }
}
