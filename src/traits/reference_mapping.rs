//! Maps from a reference cell to physical space
use crate::{
    geometry::{default_tolerance, linalg, newton_local, DEFAULT_MAX_ITERATIONS},
    reference_cell,
    types::{InversionFailure, RealScalar, ReferenceCellType, Result},
};

pub trait ReferenceMapping<const D: usize, const G: usize> {
    //! A map from a reference cell of dimension `D` into physical space of dimension `G`

    /// Scalar type
    type T: RealScalar;

    /// The reference cell that is mapped
    fn cell_type(&self) -> ReferenceCellType;

    /// Is the Jacobian of the map constant?
    fn is_affine(&self) -> bool;

    /// Map a point in the reference cell to physical space
    fn global(&self, local: &[Self::T; D]) -> [Self::T; G];

    /// The transpose of the Jacobian at a point in the reference cell
    ///
    /// Row `i` is the derivative of the map with respect to the `i`th local coordinate.
    fn jacobian_transposed(&self, local: &[Self::T; D]) -> [[Self::T; G]; D];

    /// The integration element at a point in the reference cell
    ///
    /// If `D == G` this is the absolute value of the determinant of the Jacobian; otherwise it
    /// is `sqrt(det(J^T J))`, the norm of the cross product of the columns of the Jacobian for a
    /// surface in 3D.
    fn integration_element(&self, local: &[Self::T; D]) -> Self::T {
        linalg::integration_element(&self.jacobian_transposed(local))
    }

    /// The inverse transposed Jacobian at a point in the reference cell
    ///
    /// If `D < G` this is the transpose of the Moore-Penrose pseudo-inverse of the Jacobian.
    fn jacobian_inverse_transposed(&self, local: &[Self::T; D]) -> Result<[[Self::T; D]; G]> {
        linalg::pseudo_inverse_transposed(&self.jacobian_transposed(local))
            .ok_or(InversionFailure::SingularJacobian { iteration: 0 }.into())
    }

    /// Map a point in physical space to the reference cell
    ///
    /// If `D < G`, the point of the reference cell whose image is closest to `global` is found.
    fn local(&self, global: &[Self::T; G]) -> Result<[Self::T; D]> {
        newton_local(self, global, DEFAULT_MAX_ITERATIONS, default_tolerance())
    }

    /// Is a point inside the reference cell?
    fn check_inside(&self, local: &[Self::T; D]) -> bool {
        reference_cell::contains(self.cell_type(), local, default_tolerance())
    }
}
