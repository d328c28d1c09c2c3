//! Geometry map
use super::linalg::{cross, flatten, norm};
use crate::{
    quadrature::QuadratureRule,
    traits::{GeometryMap as GeometryMapTrait, ReferenceMapping},
};
use itertools::izip;
use num::Zero;

/// A reference mapping evaluated at a fixed set of reference points
#[derive(Debug)]
pub struct TabulatedGeometryMap<'a, M: ReferenceMapping<D, G>, const D: usize, const G: usize> {
    mapping: &'a M,
    points: Vec<[M::T; D]>,
}

impl<'a, M: ReferenceMapping<D, G>, const D: usize, const G: usize>
    TabulatedGeometryMap<'a, M, D, G>
{
    /// Create new
    ///
    /// `points` should have shape [D, npts] and use column-major ordering. A reference vertex
    /// (`D == 0`) has a single point, so `points` must then be empty and the map is evaluated
    /// at that point.
    pub fn new(mapping: &'a M, points: &[M::T]) -> Self {
        assert!(
            (D > 0 && points.len() % D == 0) || (D == 0 && points.is_empty()),
            "Points must be stored as an array with {D} rows"
        );
        let points = if D == 0 {
            vec![[<M::T>::zero(); D]]
        } else {
            points
                .chunks_exact(D)
                .map(|p| {
                    let mut x = [<M::T>::zero(); D];
                    x.copy_from_slice(p);
                    x
                })
                .collect()
        };
        Self { mapping, points }
    }

    /// Create a map at the points of a quadrature rule
    pub fn from_rule(mapping: &'a M, rule: &QuadratureRule<M::T>) -> Self {
        assert_eq!(
            rule.cell_type(),
            mapping.cell_type(),
            "The quadrature rule is defined on a {}, not a {}",
            rule.cell_type(),
            mapping.cell_type()
        );
        let mut points = Vec::with_capacity(rule.npoints());
        for p in rule.iter() {
            let mut x = [<M::T>::zero(); D];
            x.copy_from_slice(p.position());
            points.push(x);
        }
        Self { mapping, points }
    }
}

impl<M: ReferenceMapping<D, G>, const D: usize, const G: usize> GeometryMapTrait
    for TabulatedGeometryMap<'_, M, D, G>
{
    type T = M::T;

    fn entity_topology_dimension(&self) -> usize {
        D
    }
    fn geometry_dimension(&self) -> usize {
        G
    }
    fn point_count(&self) -> usize {
        self.points.len()
    }
    fn points(&self, points: &mut [M::T]) {
        debug_assert!(points.len() == G * self.points.len());

        for (x, p) in izip!(points.chunks_exact_mut(G.max(1)), &self.points) {
            x.copy_from_slice(&self.mapping.global(p));
        }
    }
    fn jacobians(&self, jacobians: &mut [M::T]) {
        debug_assert!(jacobians.len() == G * D * self.points.len());

        if G * D > 0 {
            for (j, p) in izip!(jacobians.chunks_exact_mut(G * D), &self.points) {
                flatten(&self.mapping.jacobian_transposed(p), j);
            }
        }
    }
    fn integration_elements(&self, jdets: &mut [M::T]) {
        debug_assert!(jdets.len() == self.points.len());

        for (jdet, p) in izip!(jdets.iter_mut(), &self.points) {
            *jdet = self.mapping.integration_element(p);
        }
    }

    fn jacobians_dets_normals(
        &self,
        jacobians: &mut [M::T],
        jdets: &mut [M::T],
        normals: &mut [M::T],
    ) {
        if D + 1 != G {
            panic!("Can only compute normal for entities where tdim + 1 == gdim");
        }
        let npts = self.points.len();
        debug_assert!(jacobians.len() == G * D * npts);
        debug_assert!(jdets.len() == npts);
        debug_assert!(normals.len() == G * npts);

        self.jacobians(jacobians);

        for (point_index, jdet) in jdets.iter_mut().enumerate() {
            cross(
                &jacobians[G * D * point_index..G * D * (point_index + 1)],
                &mut normals[G * point_index..G * (point_index + 1)],
            );
            *jdet = norm(&normals[G * point_index..G * (point_index + 1)]);
            for gd in 0..G {
                normals[gd + G * point_index] /= *jdet;
            }
        }
    }
}
