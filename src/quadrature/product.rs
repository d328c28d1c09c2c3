//! Product rules built from one-dimensional Gauss-Jacobi rules
//!
//! Simplices and pyramids use conical products: a tensor product rule on the unit cube is
//! collapsed onto the cell, and the Jacobian of the collapse is absorbed into the Jacobi weight
//! `(1 - x)^alpha` of the collapsed direction.
use super::{
    gauss_jacobi::{gauss_jacobi, gauss_legendre, npoints_for_order, order_for_npoints},
    QuadratureRule,
};
use crate::types::ReferenceCellType;
use itertools::iproduct;

/// Create the Gauss-Jacobi product rule of a given order on a reference cell
pub(crate) fn gauss_jacobi_rule(cell: ReferenceCellType, order: usize) -> QuadratureRule<f64> {
    if cell == ReferenceCellType::Point {
        let mut rule = QuadratureRule::new(cell, order, 1);
        rule.push(&[], 1.0);
        return rule;
    }
    let npoints = npoints_for_order(order);
    match cell {
        ReferenceCellType::Interval => interval(npoints),
        ReferenceCellType::Quadrilateral => quadrilateral(npoints),
        ReferenceCellType::Hexahedron => hexahedron(npoints),
        ReferenceCellType::Triangle => conical_triangle(npoints),
        ReferenceCellType::Tetrahedron => conical_tetrahedron(npoints),
        ReferenceCellType::Prism => prism(npoints),
        ReferenceCellType::Pyramid => pyramid(npoints),
        ReferenceCellType::Point => unreachable!(),
    }
}

fn interval(npoints: usize) -> QuadratureRule<f64> {
    let (pts, wts) = gauss_legendre(npoints);
    let mut rule = QuadratureRule::new(
        ReferenceCellType::Interval,
        order_for_npoints(npoints),
        npoints,
    );
    for (p, w) in pts.iter().zip(&wts) {
        rule.push(&[*p], *w);
    }
    rule
}

fn quadrilateral(npoints: usize) -> QuadratureRule<f64> {
    let (pts, wts) = gauss_legendre(npoints);
    let mut rule = QuadratureRule::new(
        ReferenceCellType::Quadrilateral,
        order_for_npoints(npoints),
        npoints.pow(2),
    );
    for ((x, wx), (y, wy)) in iproduct!(pts.iter().zip(&wts), pts.iter().zip(&wts)) {
        rule.push(&[*x, *y], wx * wy);
    }
    rule
}

fn hexahedron(npoints: usize) -> QuadratureRule<f64> {
    let (pts, wts) = gauss_legendre(npoints);
    let mut rule = QuadratureRule::new(
        ReferenceCellType::Hexahedron,
        order_for_npoints(npoints),
        npoints.pow(3),
    );
    for ((x, wx), (y, wy), (z, wz)) in iproduct!(
        pts.iter().zip(&wts),
        pts.iter().zip(&wts),
        pts.iter().zip(&wts)
    ) {
        rule.push(&[*x, *y, *z], wx * wy * wz);
    }
    rule
}

/// Conical product rule on the triangle
///
/// The point `(j, g(1 - j))` has weight `w_g w_j`, where `(g, w_g)` is a Gauss-Legendre point
/// and `(j, w_j)` is a Gauss-Jacobi point for the weight `1 - x`.
pub(crate) fn conical_triangle(npoints: usize) -> QuadratureRule<f64> {
    let (gpts, gwts) = gauss_legendre(npoints);
    let (jpts, jwts) = gauss_jacobi(npoints, 1);
    let mut rule = QuadratureRule::new(
        ReferenceCellType::Triangle,
        order_for_npoints(npoints),
        npoints.pow(2),
    );
    for ((g, gw), (j, jw)) in iproduct!(gpts.iter().zip(&gwts), jpts.iter().zip(&jwts)) {
        rule.push(&[*j, g * (1.0 - j)], gw * jw);
    }
    rule
}

/// Conical product rule on the tetrahedron
///
/// The point `(j2, j1(1 - j2), g(1 - j1)(1 - j2))` has weight `w_g w_j1 w_j2`, where `j1` and
/// `j2` are Gauss-Jacobi points for the weights `1 - x` and `(1 - x)^2`.
pub(crate) fn conical_tetrahedron(npoints: usize) -> QuadratureRule<f64> {
    let (gpts, gwts) = gauss_legendre(npoints);
    let (j1pts, j1wts) = gauss_jacobi(npoints, 1);
    let (j2pts, j2wts) = gauss_jacobi(npoints, 2);
    let mut rule = QuadratureRule::new(
        ReferenceCellType::Tetrahedron,
        order_for_npoints(npoints),
        npoints.pow(3),
    );
    for ((g, gw), (j1, j1w), (j2, j2w)) in iproduct!(
        gpts.iter().zip(&gwts),
        j1pts.iter().zip(&j1wts),
        j2pts.iter().zip(&j2wts)
    ) {
        rule.push(
            &[*j2, j1 * (1.0 - j2), g * (1.0 - j1) * (1.0 - j2)],
            gw * j1w * j2w,
        );
    }
    rule
}

/// Product of the conical triangle rule and a Gauss-Legendre rule
fn prism(npoints: usize) -> QuadratureRule<f64> {
    let triangle = conical_triangle(npoints);
    let (pts, wts) = gauss_legendre(npoints);
    let mut rule = QuadratureRule::new(
        ReferenceCellType::Prism,
        order_for_npoints(npoints),
        npoints.pow(3),
    );
    for (t, (z, wz)) in iproduct!(triangle.iter(), pts.iter().zip(&wts)) {
        let p = t.position();
        rule.push(&[p[0], p[1], *z], t.weight() * wz);
    }
    rule
}

/// Conical product rule on the pyramid
///
/// The point `(u(1 - w), v(1 - w), w)` has weight `w_u w_v w_w`, where `w` is a Gauss-Jacobi point
/// for the weight `(1 - x)^2`.
fn pyramid(npoints: usize) -> QuadratureRule<f64> {
    let (gpts, gwts) = gauss_legendre(npoints);
    let (jpts, jwts) = gauss_jacobi(npoints, 2);
    let mut rule = QuadratureRule::new(
        ReferenceCellType::Pyramid,
        order_for_npoints(npoints),
        npoints.pow(3),
    );
    for ((u, uw), (v, vw), (w, ww)) in iproduct!(
        gpts.iter().zip(&gwts),
        gpts.iter().zip(&gwts),
        jpts.iter().zip(&jwts)
    ) {
        rule.push(&[u * (1.0 - w), v * (1.0 - w), *w], uw * vw * ww);
    }
    rule
}
