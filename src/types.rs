//! Types

mod caching;
mod error;
mod reference_cell_type;

pub use caching::{CacheState, CacheStates, CachingPolicy, EvaluationType, SuppliedValues};
pub use error::{Error, InversionFailure, Result};
pub use reference_cell_type::ReferenceCellType;

use num::{traits::NumAssignOps, Float};
use std::{fmt::Debug, iter::Sum};

/// Scalar type used for coordinates, weights and derived geometric quantities
pub trait RealScalar: Float + NumAssignOps + Sum + Debug + Send + Sync + 'static {}

impl<T: Float + NumAssignOps + Sum + Debug + Send + Sync + 'static> RealScalar for T {}

/// Family of quadrature rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum QuadratureFamily {
    /// Tabulated symmetric rules on simplices, with a conical product fallback above the tables
    Simplex,
    /// Tensor and conical products of one-dimensional Gauss-Jacobi rules
    GaussJacobi,
}

impl QuadratureFamily {
    /// The family used when none is requested explicitly
    pub fn default_for(cell: ReferenceCellType) -> Self {
        if cell.is_simplex() {
            Self::Simplex
        } else {
            Self::GaussJacobi
        }
    }
}

/// Where a geometry mapping reads its corners from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CornerMode {
    /// The corners are read from an element when the mapping is created or refreshed
    Element,
    /// The corners are owned by the mapping and can be changed individually
    Coordinates,
}

/// Convert an `f64` constant to the scalar type `T`
pub(crate) fn cast<T: RealScalar>(value: f64) -> T {
    // Casting between floating point types never fails: out of range values become infinite
    match T::from(value) {
        Some(v) => v,
        None => unreachable!(),
    }
}
