//! Reference cell geometry mappings and quadrature rules for finite element computations
#![cfg_attr(feature = "strict", deny(warnings), deny(unused_crate_dependencies))]
#![warn(missing_docs)]

#[macro_use]
extern crate lazy_static;

pub mod geometry;
mod io;
pub mod quadrature;
pub mod reference_cell;
pub mod traits;
pub mod types;

pub use geometry::{GeometryMapping, SubMapping};
pub use quadrature::QuadratureRule;
pub use types::{Error, ReferenceCellType, Result};
