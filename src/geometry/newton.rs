//! Newton iteration for the inverse of a map
use super::linalg::norm;
use crate::{
    traits::ReferenceMapping,
    types::{Error, InversionFailure, Result},
};
use log::trace;
use num::Zero;

/// Find the point of the reference cell that a map sends to `global`
///
/// The iteration starts at the midpoint of the reference cell and stops when a step is shorter
/// than `tolerance`. If the map goes into a higher dimensional space, the point whose image is
/// closest to `global` is found.
pub(crate) fn newton_local<M: ReferenceMapping<D, G> + ?Sized, const D: usize, const G: usize>(
    mapping: &M,
    global: &[M::T; G],
    max_iterations: usize,
    tolerance: M::T,
) -> Result<[M::T; D]> {
    let mut local = super::reference_midpoint::<M::T, D>(mapping.cell_type());
    for iteration in 0..max_iterations {
        let image = mapping.global(&local);
        let jit = mapping
            .jacobian_inverse_transposed(&local)
            .map_err(|_| Error::from(InversionFailure::SingularJacobian { iteration }))?;

        let mut step = [<M::T>::zero(); D];
        for (k, s) in step.iter_mut().enumerate() {
            for ((row, y), x) in jit.iter().zip(global).zip(&image) {
                *s += row[k] * (*y - *x);
            }
        }
        for (l, s) in local.iter_mut().zip(&step) {
            *l += *s;
        }

        let size = norm(&step);
        trace!("Newton iteration {iteration}: step size {size:?}");
        if size <= tolerance {
            return Ok(local);
        }
    }
    Err(InversionFailure::NotConverged {
        iterations: max_iterations,
    }
    .into())
}
