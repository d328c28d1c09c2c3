//! Affine maps
use super::multilinear::{axis_jacobian_transposed, corners_are_affine};
use crate::{
    traits::{Corners, ReferenceMapping},
    types::{RealScalar, ReferenceCellType},
};

/// A map with a constant Jacobian
///
/// The map sends reference vertex 0 to corner 0 and each reference axis to the edge from
/// corner 0 to the corner adjacent to it along that axis.
#[derive(Debug, Clone, PartialEq)]
pub struct AffineMapping<T: RealScalar, const D: usize, const G: usize> {
    cell_type: ReferenceCellType,
    corners: Vec<[T; G]>,
    jacobian_transposed: [[T; G]; D],
}

impl<T: RealScalar, const D: usize, const G: usize> AffineMapping<T, D, G> {
    /// Create new
    ///
    /// Returns `None` if the corners do not define an affine map.
    pub fn new<C: Corners<G, T = T> + ?Sized>(
        cell_type: ReferenceCellType,
        corners: &C,
    ) -> Option<Self> {
        let corners = (0..corners.corner_count())
            .map(|i| corners.corner(i))
            .collect::<Vec<_>>();
        assert_eq!(cell_type.dim(), D, "A {cell_type} has dimension {}", cell_type.dim());
        assert_eq!(
            corners.len(),
            cell_type.vertex_count(),
            "A {cell_type} has {} corners",
            cell_type.vertex_count()
        );
        if corners_are_affine::<T, D, G>(cell_type, &corners) {
            Some(Self::from_vec_unchecked(cell_type, corners))
        } else {
            None
        }
    }

    /// Create from corners that are already known to define an affine map
    pub(crate) fn from_vec_unchecked(cell_type: ReferenceCellType, corners: Vec<[T; G]>) -> Self {
        let jacobian_transposed = axis_jacobian_transposed(cell_type, &corners);
        Self {
            cell_type,
            corners,
            jacobian_transposed,
        }
    }

    /// The image of reference vertex 0
    pub fn origin(&self) -> [T; G] {
        self.corners[0]
    }

    /// The corners
    pub fn corners(&self) -> &[[T; G]] {
        &self.corners
    }
}

impl<T: RealScalar, const D: usize, const G: usize> ReferenceMapping<D, G>
    for AffineMapping<T, D, G>
{
    type T = T;

    fn cell_type(&self) -> ReferenceCellType {
        self.cell_type
    }

    fn is_affine(&self) -> bool {
        true
    }

    fn global(&self, local: &[T; D]) -> [T; G] {
        let mut x = self.origin();
        for (l, row) in local.iter().zip(&self.jacobian_transposed) {
            for (xg, j) in x.iter_mut().zip(row) {
                *xg += *l * *j;
            }
        }
        x
    }

    fn jacobian_transposed(&self, _local: &[T; D]) -> [[T; G]; D] {
        self.jacobian_transposed
    }
}
