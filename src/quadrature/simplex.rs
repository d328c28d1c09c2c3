//! Quadrature rules on simplices
//!
//! Triangles and tetrahedra use the smallest tabulated symmetric rule that is exact to the
//! requested order. Above the highest tabulated order, a conical product rule is used.
use super::{
    gauss_jacobi::npoints_for_order,
    product::{conical_tetrahedron, conical_triangle, gauss_jacobi_rule},
    tables::{
        tetrahedron_npoints, tetrahedron_rule, triangle_npoints, triangle_rule, TabulatedRule,
        TETRAHEDRON_HIGHEST_ORDER, TRIANGLE_HIGHEST_ORDER,
    },
    QuadratureRule,
};
use crate::types::ReferenceCellType;

fn from_table<const D: usize>(
    cell: ReferenceCellType,
    table: Option<&TabulatedRule<D>>,
) -> QuadratureRule<f64> {
    let Some(table) = table else {
        unreachable!("Every order up to the highest tabulated order has a table");
    };
    let mut rule = QuadratureRule::new(cell, table.order, table.points.len());
    for (p, w) in table.points.iter().zip(table.weights) {
        rule.push(p, *w);
    }
    rule
}

/// Create a quadrature rule on a simplex
pub(crate) fn simplex_rule(cell: ReferenceCellType, order: usize) -> QuadratureRule<f64> {
    match cell {
        ReferenceCellType::Point | ReferenceCellType::Interval => gauss_jacobi_rule(cell, order),
        ReferenceCellType::Triangle => {
            if order <= TRIANGLE_HIGHEST_ORDER {
                from_table(cell, triangle_rule(triangle_npoints(order)))
            } else {
                conical_triangle(npoints_for_order(order))
            }
        }
        ReferenceCellType::Tetrahedron => {
            if order <= TETRAHEDRON_HIGHEST_ORDER {
                from_table(cell, tetrahedron_rule(tetrahedron_npoints(order)))
            } else {
                conical_tetrahedron(npoints_for_order(order))
            }
        }
        _ => panic!("Simplex quadrature rules are not defined on a {cell}"),
    }
}
