//! Maps defined by interpolating the corners of an entity
//!
//! Each corner has a shape function that is one at that corner and zero at every other corner.
//! The shape functions are linear on simplices, bi/trilinear on quadrilaterals and hexahedra,
//! a product of the two on prisms, and rational on pyramids, where the bilinear term
//! `x y / (1 - z)` is collapsed towards the apex.
use crate::{
    reference_cell,
    traits::{Corners, ReferenceMapping},
    types::{cast, RealScalar, ReferenceCellType},
};

/// The largest number of corners of a reference cell
pub(crate) const MAX_CORNERS: usize = 8;

/// Evaluate the shape functions of each corner at a point
pub(crate) fn shape_functions<T: RealScalar>(
    cell: ReferenceCellType,
    local: &[T],
    values: &mut [T; MAX_CORNERS],
) {
    let one = T::one();
    match cell {
        ReferenceCellType::Point => {
            values[0] = one;
        }
        ReferenceCellType::Interval
        | ReferenceCellType::Quadrilateral
        | ReferenceCellType::Hexahedron => {
            for (i, v) in values.iter_mut().take(1 << local.len()).enumerate() {
                *v = local
                    .iter()
                    .enumerate()
                    .map(|(k, x)| if (i >> k) & 1 == 1 { *x } else { one - *x })
                    .fold(one, |a, b| a * b);
            }
        }
        ReferenceCellType::Triangle | ReferenceCellType::Tetrahedron => {
            values[0] = one - local.iter().copied().sum::<T>();
            values[1..=local.len()].copy_from_slice(local);
        }
        ReferenceCellType::Prism => {
            let t = [one - local[0] - local[1], local[0], local[1]];
            let f = [one - local[2], local[2]];
            for (i, v) in values.iter_mut().take(6).enumerate() {
                *v = t[i % 3] * f[i / 3];
            }
        }
        ReferenceCellType::Pyramid => {
            let (x, y, z) = (local[0], local[1], local[2]);
            let (q, _) = pyramid_bilinear_term(x, y, z);
            values[0] = one - z - x - y + q;
            values[1] = x - q;
            values[2] = y - q;
            values[3] = q;
            values[4] = z;
        }
    }
}

/// Evaluate the derivatives of the shape functions of each corner at a point
///
/// `derivatives[k][i]` is the derivative of the shape function of corner `i` with respect to
/// the `k`th local coordinate.
pub(crate) fn shape_derivatives<T: RealScalar>(
    cell: ReferenceCellType,
    local: &[T],
    derivatives: &mut [[T; MAX_CORNERS]; 3],
) {
    let one = T::one();
    let zero = T::zero();
    match cell {
        ReferenceCellType::Point => {}
        ReferenceCellType::Interval
        | ReferenceCellType::Quadrilateral
        | ReferenceCellType::Hexahedron => {
            let tdim = local.len();
            for (k, row) in derivatives.iter_mut().take(tdim).enumerate() {
                for (i, d) in row.iter_mut().take(1 << tdim).enumerate() {
                    *d = local
                        .iter()
                        .enumerate()
                        .map(|(j, x)| match ((i >> j) & 1 == 1, j == k) {
                            (true, true) => one,
                            (false, true) => -one,
                            (true, false) => *x,
                            (false, false) => one - *x,
                        })
                        .fold(one, |a, b| a * b);
                }
            }
        }
        ReferenceCellType::Triangle | ReferenceCellType::Tetrahedron => {
            let tdim = local.len();
            for (k, row) in derivatives.iter_mut().take(tdim).enumerate() {
                row[0] = -one;
                for (i, d) in row.iter_mut().enumerate().take(tdim + 1).skip(1) {
                    *d = if i == k + 1 { one } else { zero };
                }
            }
        }
        ReferenceCellType::Prism => {
            let (x, y, z) = (local[0], local[1], local[2]);
            let t = [one - x - y, x, y];
            let dt = [[-one, one, zero], [-one, zero, one]];
            let f = [one - z, z];
            let df = [-one, one];
            for i in 0..6 {
                derivatives[0][i] = dt[0][i % 3] * f[i / 3];
                derivatives[1][i] = dt[1][i % 3] * f[i / 3];
                derivatives[2][i] = t[i % 3] * df[i / 3];
            }
        }
        ReferenceCellType::Pyramid => {
            let (x, y, z) = (local[0], local[1], local[2]);
            let (_, dq) = pyramid_bilinear_term(x, y, z);
            for k in 0..3 {
                derivatives[k][0] = dq[k] - one;
                derivatives[k][1] = -dq[k];
                derivatives[k][2] = -dq[k];
                derivatives[k][3] = dq[k];
                derivatives[k][4] = zero;
            }
            derivatives[0][1] += one;
            derivatives[1][2] += one;
            derivatives[2][4] = one;
        }
    }
}

/// The term `x y / (1 - z)` of the pyramid shape functions and its derivatives
///
/// The term is zero at the apex.
fn pyramid_bilinear_term<T: RealScalar>(x: T, y: T, z: T) -> (T, [T; 3]) {
    let r = T::one() - z;
    if r == T::zero() {
        (T::zero(), [T::zero(); 3])
    } else {
        (x * y / r, [y / r, x / r, x * y / (r * r)])
    }
}

/// Check if the map defined by a set of corners has a constant Jacobian
///
/// The map is affine if every corner is the image of its reference vertex under the affine map
/// through corner 0 and the corners adjacent to it along each reference axis.
pub(crate) fn corners_are_affine<T: RealScalar, const D: usize, const G: usize>(
    cell: ReferenceCellType,
    corners: &[[T; G]],
) -> bool {
    let origin = corners[0];
    let jt = axis_jacobian_transposed::<T, D, G>(cell, corners);
    // Rounding in the corner differences grows with the size of the coordinates, not only with
    // the size of the entity
    let scale = corners
        .iter()
        .flat_map(|c| c.iter().zip(&origin).map(|(a, b)| (*a - *b).abs().max(a.abs())))
        .fold(T::zero(), |a, b| a.max(b));
    let tolerance = scale * T::epsilon() * cast(64.0);

    corners.iter().enumerate().all(|(i, c)| {
        let v = reference_cell::vertex::<T, D>(cell, i);
        (0..G).all(|g| {
            let predicted = v
                .iter()
                .zip(&jt)
                .map(|(x, row)| *x * row[g])
                .sum::<T>();
            (predicted - (c[g] - origin[g])).abs() <= tolerance
        })
    })
}

/// The transposed Jacobian of the affine map through corner 0 and its axis corners
pub(crate) fn axis_jacobian_transposed<T: RealScalar, const D: usize, const G: usize>(
    cell: ReferenceCellType,
    corners: &[[T; G]],
) -> [[T; G]; D] {
    let origin = corners[0];
    let mut jt = [[T::zero(); G]; D];
    for (row, a) in jt.iter_mut().zip(reference_cell::axis_vertices(cell)) {
        for ((j, c), o) in row.iter_mut().zip(&corners[*a]).zip(&origin) {
            *j = *c - *o;
        }
    }
    jt
}

/// A map that interpolates the corners of an entity
#[derive(Debug, Clone, PartialEq)]
pub struct MultilinearMapping<T: RealScalar, const D: usize, const G: usize> {
    cell_type: ReferenceCellType,
    corners: Vec<[T; G]>,
    affine: bool,
}

impl<T: RealScalar, const D: usize, const G: usize> MultilinearMapping<T, D, G> {
    /// Create new
    pub fn new<C: Corners<G, T = T> + ?Sized>(cell_type: ReferenceCellType, corners: &C) -> Self {
        Self::from_vec(
            cell_type,
            (0..corners.corner_count())
                .map(|i| corners.corner(i))
                .collect(),
        )
    }

    pub(crate) fn from_vec(cell_type: ReferenceCellType, corners: Vec<[T; G]>) -> Self {
        assert_eq!(cell_type.dim(), D, "A {cell_type} has dimension {}", cell_type.dim());
        assert_eq!(
            corners.len(),
            cell_type.vertex_count(),
            "A {cell_type} has {} corners",
            cell_type.vertex_count()
        );
        let affine = corners_are_affine::<T, D, G>(cell_type, &corners);
        Self {
            cell_type,
            corners,
            affine,
        }
    }

    /// The corners
    pub fn corners(&self) -> &[[T; G]] {
        &self.corners
    }
}

impl<T: RealScalar, const D: usize, const G: usize> ReferenceMapping<D, G>
    for MultilinearMapping<T, D, G>
{
    type T = T;

    fn cell_type(&self) -> ReferenceCellType {
        self.cell_type
    }

    fn is_affine(&self) -> bool {
        self.affine
    }

    fn global(&self, local: &[T; D]) -> [T; G] {
        let mut values = [T::zero(); MAX_CORNERS];
        shape_functions(self.cell_type, local, &mut values);
        let mut x = [T::zero(); G];
        for (c, v) in self.corners.iter().zip(&values) {
            for (xg, cg) in x.iter_mut().zip(c) {
                *xg += *v * *cg;
            }
        }
        x
    }

    fn jacobian_transposed(&self, local: &[T; D]) -> [[T; G]; D] {
        let mut derivatives = [[T::zero(); MAX_CORNERS]; 3];
        shape_derivatives(self.cell_type, local, &mut derivatives);
        let mut jt = [[T::zero(); G]; D];
        for (row, d) in jt.iter_mut().zip(&derivatives) {
            for (c, di) in self.corners.iter().zip(d) {
                for (j, cg) in row.iter_mut().zip(c) {
                    *j += *di * *cg;
                }
            }
        }
        jt
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_relative_eq;
    use paste::paste;

    macro_rules! test_shape_functions {

        ($(($cell:ident, $tdim:expr)),+) => {

        $(
            paste! {

                #[test]
                fn [<test_shape_functions_ $cell:lower>]() {
                    let cell = ReferenceCellType::[<$cell>];
                    let nvertices = cell.vertex_count();
                    let mut values = [0.0; MAX_CORNERS];
                    for i in 0..nvertices {
                        let v = reference_cell::vertex::<f64, $tdim>(cell, i);
                        shape_functions(cell, &v, &mut values);
                        for (j, value) in values.iter().take(nvertices).enumerate() {
                            assert_relative_eq!(*value, if i == j { 1.0 } else { 0.0 });
                        }
                    }

                    // Partition of unity and finite difference derivatives
                    let p = [0.21, 0.17, 0.3];
                    let p = &p[..$tdim];
                    shape_functions(cell, p, &mut values);
                    assert_relative_eq!(values.iter().take(nvertices).sum::<f64>(), 1.0, epsilon = 1e-14);
                    let mut derivatives = [[0.0; MAX_CORNERS]; 3];
                    shape_derivatives(cell, p, &mut derivatives);
                    let h = 1e-6;
                    for k in 0..$tdim {
                        let mut p0 = p.to_vec();
                        let mut p1 = p.to_vec();
                        p0[k] -= h;
                        p1[k] += h;
                        let mut v0 = [0.0; MAX_CORNERS];
                        let mut v1 = [0.0; MAX_CORNERS];
                        shape_functions(cell, &p0, &mut v0);
                        shape_functions(cell, &p1, &mut v1);
                        for i in 0..nvertices {
                            assert_relative_eq!(
                                derivatives[k][i],
                                (v1[i] - v0[i]) / (2.0 * h),
                                epsilon = 1e-8
                            );
                        }
                    }
                }

            }
        )*
        };
    }

    test_shape_functions!(
        (Interval, 1),
        (Triangle, 2),
        (Quadrilateral, 2),
        (Tetrahedron, 3),
        (Hexahedron, 3),
        (Prism, 3),
        (Pyramid, 3)
    );

    #[test]
    fn test_affinity() {
        let parallelogram = [[0.0, 0.0], [2.0, 0.5], [1.0, 1.0], [3.0, 1.5]];
        assert!(corners_are_affine::<f64, 2, 2>(
            ReferenceCellType::Quadrilateral,
            &parallelogram
        ));
        let trapezoid = [[0.0, 0.0], [2.0, 0.0], [0.0, 1.0], [1.0, 1.0]];
        assert!(!corners_are_affine::<f64, 2, 2>(
            ReferenceCellType::Quadrilateral,
            &trapezoid
        ));
        let triangle = [[3.0, 1.0, 0.0], [4.0, 2.0, 1.0], [2.0, 5.0, 0.0]];
        assert!(corners_are_affine::<f64, 2, 3>(
            ReferenceCellType::Triangle,
            &triangle
        ));
        let pyramid = [
            [0.0, 0.0, 0.0],
            [1.0, 0.0, 0.0],
            [0.0, 1.0, 0.0],
            [1.0, 1.0, 0.0],
            [0.3, 0.2, 2.0],
        ];
        assert!(corners_are_affine::<f64, 3, 3>(
            ReferenceCellType::Pyramid,
            &pyramid
        ));
    }

    #[test]
    fn test_affinity_away_from_origin() {
        for offset in [1000.0, 1e6 + 0.1] {
            let parallelogram = [[0.0, 0.0], [0.3, 0.1], [0.1, 0.7], [0.4, 0.8]]
                .map(|[x, y]| [x + offset, y - offset]);
            assert!(corners_are_affine::<f64, 2, 2>(
                ReferenceCellType::Quadrilateral,
                &parallelogram
            ));
            let trapezoid = [[0.0, 0.0], [2.0, 0.0], [0.0, 1.0], [1.0, 1.0]]
                .map(|[x, y]| [x + offset, y + offset]);
            assert!(!corners_are_affine::<f64, 2, 2>(
                ReferenceCellType::Quadrilateral,
                &trapezoid
            ));

            let axes = [[0.5, 0.1, 0.0], [0.2, 0.9, 0.1], [0.0, 0.3, 1.1]];
            let hexahedron = reference_cell::vertices::<f64>(ReferenceCellType::Hexahedron)
                .iter()
                .map(|v| {
                    let mut c = [offset, 2.0 * offset, -offset];
                    for (x, axis) in v.iter().zip(&axes) {
                        for (cg, a) in c.iter_mut().zip(axis) {
                            *cg += x * a;
                        }
                    }
                    c
                })
                .collect::<Vec<_>>();
            assert!(corners_are_affine::<f64, 3, 3>(
                ReferenceCellType::Hexahedron,
                &hexahedron
            ));
        }
    }

    #[test]
    fn test_bilinear_quadrilateral() {
        let m = MultilinearMapping::<f64, 2, 2>::new(
            ReferenceCellType::Quadrilateral,
            &[[0.0, 0.0], [2.0, 0.0], [0.0, 1.0], [1.0, 1.0]],
        );
        assert!(!m.is_affine());
        let x = m.global(&[0.5, 0.5]);
        assert_relative_eq!(x[0], 0.75);
        assert_relative_eq!(x[1], 0.5);
        let jt = m.jacobian_transposed(&[1.0, 0.0]);
        assert_relative_eq!(jt[0][0], 2.0);
        assert_relative_eq!(jt[0][1], 0.0);
        assert_relative_eq!(jt[1][0], -1.0);
        assert_relative_eq!(jt[1][1], 1.0);
    }

    #[test]
    #[should_panic]
    fn test_wrong_corner_count() {
        MultilinearMapping::<f64, 2, 2>::new(
            ReferenceCellType::Quadrilateral,
            &[[0.0, 0.0], [2.0, 0.0], [0.0, 1.0]],
        );
    }
}
