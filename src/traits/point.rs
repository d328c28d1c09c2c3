//! Weighted points
use crate::types::RealScalar;

/// A point of a reference cell that carries a weight, such as a point of a quadrature rule
pub trait WeightedPoint {
    /// Scalar type
    type T: RealScalar;

    /// The dimension of the reference cell that the point lies in
    fn dim(&self) -> usize;

    /// Write the reference coordinates of the point into `data`
    fn coords(&self, data: &mut [Self::T]);

    /// The weight of the point
    fn weight(&self) -> Self::T;
}
