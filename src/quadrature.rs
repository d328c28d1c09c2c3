//! Quadrature rules
//!
//! Rules are requested by reference cell, order and [QuadratureFamily]. Requested rules are
//! generated once and stored in a process-wide registry, so repeated requests share one rule.
pub mod gauss_jacobi;
pub(crate) mod product;
mod rule;
mod simplex;
mod tables;

#[cfg(feature = "serde")]
pub use rule::SerializableQuadratureRule;
pub use rule::{QuadraturePoint, QuadraturePointIter, QuadratureRule};

use crate::types::{Error, QuadratureFamily, ReferenceCellType, Result};
use log::debug;
use std::{
    collections::HashMap,
    sync::{Arc, Mutex, PoisonError},
};

type RuleKey = (ReferenceCellType, usize, QuadratureFamily);

lazy_static! {
    static ref RULES: Mutex<HashMap<RuleKey, Arc<QuadratureRule<f64>>>> =
        Mutex::new(HashMap::new());
}

/// The highest order of a rule of the given family on a reference cell
///
/// Panics if the simplex family is requested on a cell that is not a simplex.
pub fn max_order(cell: ReferenceCellType, family: QuadratureFamily) -> usize {
    match (family, cell) {
        (_, ReferenceCellType::Point) => usize::MAX,
        (QuadratureFamily::Simplex, ReferenceCellType::Triangle) => tables::TRIANGLE_HIGHEST_ORDER,
        (QuadratureFamily::Simplex, ReferenceCellType::Interval)
        | (QuadratureFamily::Simplex, ReferenceCellType::Tetrahedron) => gauss_jacobi::MAX_ORDER,
        (QuadratureFamily::Simplex, _) => {
            panic!("Simplex quadrature rules are not defined on a {cell}")
        }
        (QuadratureFamily::GaussJacobi, _) => gauss_jacobi::MAX_ORDER,
    }
}

/// Create a new quadrature rule without using the registry
pub fn create_rule(
    cell: ReferenceCellType,
    order: usize,
    family: QuadratureFamily,
) -> Result<QuadratureRule<f64>> {
    let max_order = max_order(cell, family);
    if order > max_order {
        return Err(Error::QuadratureOrderOutOfRange {
            cell,
            order,
            max_order,
        });
    }
    Ok(match family {
        QuadratureFamily::Simplex => simplex::simplex_rule(cell, order),
        QuadratureFamily::GaussJacobi => product::gauss_jacobi_rule(cell, order),
    })
}

/// Get a rule of the given family that integrates polynomials of degree `order` exactly
pub fn rule_of_family(
    cell: ReferenceCellType,
    order: usize,
    family: QuadratureFamily,
) -> Result<Arc<QuadratureRule<f64>>> {
    let key = (cell, order, family);
    let mut rules = RULES.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(rule) = rules.get(&key) {
        return Ok(Arc::clone(rule));
    }
    let rule = Arc::new(create_rule(cell, order, family)?);
    debug!(
        "Generated {family:?} quadrature rule of order {order} on a {cell} with {} points",
        rule.npoints()
    );
    rules.insert(key, Arc::clone(&rule));
    Ok(rule)
}

/// Get a rule that integrates polynomials of degree `order` exactly
///
/// Simplices use the [QuadratureFamily::Simplex] family; all other cells use
/// [QuadratureFamily::GaussJacobi].
pub fn rule(cell: ReferenceCellType, order: usize) -> Result<Arc<QuadratureRule<f64>>> {
    rule_of_family(cell, order, QuadratureFamily::default_for(cell))
}

/// The orders of the tabulated rules on a reference cell
pub fn tabulated_orders(cell: ReferenceCellType) -> Vec<usize> {
    match cell {
        ReferenceCellType::Triangle => tables::TRIANGLE_RULES.iter().map(|r| r.order).collect(),
        ReferenceCellType::Tetrahedron => {
            tables::TETRAHEDRON_RULES.iter().map(|r| r.order).collect()
        }
        _ => vec![],
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::reference_cell;
    use approx::assert_relative_eq;
    use paste::paste;
    use std::thread;

    fn factorial(n: usize) -> f64 {
        (1..=n).map(|i| i as f64).product()
    }

    /// The integral of x^a y^b z^c over a reference cell
    fn monomial_integral(cell: ReferenceCellType, powers: &[usize]) -> f64 {
        match cell {
            ReferenceCellType::Point => 1.0,
            ReferenceCellType::Interval
            | ReferenceCellType::Quadrilateral
            | ReferenceCellType::Hexahedron => {
                powers.iter().map(|a| 1.0 / (a + 1) as f64).product()
            }
            ReferenceCellType::Triangle | ReferenceCellType::Tetrahedron => {
                powers.iter().map(|a| factorial(*a)).product::<f64>()
                    / factorial(powers.iter().sum::<usize>() + powers.len())
            }
            ReferenceCellType::Prism => {
                factorial(powers[0]) * factorial(powers[1])
                    / factorial(powers[0] + powers[1] + 2)
                    / (powers[2] + 1) as f64
            }
            ReferenceCellType::Pyramid => {
                let (a, b, c) = (powers[0], powers[1], powers[2]);
                factorial(c) * factorial(a + b + 2)
                    / factorial(a + b + c + 3)
                    / ((a + 1) * (b + 1)) as f64
            }
        }
    }

    /// All exponents of monomials of total degree `degree` in `dim` variables
    fn monomials(dim: usize, degree: usize) -> Vec<Vec<usize>> {
        match dim {
            0 => vec![vec![]],
            1 => vec![vec![degree]],
            2 => (0..=degree).map(|a| vec![a, degree - a]).collect(),
            3 => (0..=degree)
                .flat_map(|a| (0..=degree - a).map(move |b| vec![a, b, degree - a - b]))
                .collect(),
            _ => unreachable!(),
        }
    }

    fn quadrature_error(rule: &QuadratureRule<f64>, powers: &[usize]) -> f64 {
        let approx = rule.integrate(|p| {
            p.iter()
                .zip(powers)
                .map(|(x, a)| x.powi(*a as i32))
                .product()
        });
        (approx - monomial_integral(rule.cell_type(), powers)).abs()
    }

    fn check_rule(rule: &QuadratureRule<f64>) {
        let cell = rule.cell_type();
        assert_relative_eq!(
            rule.weights().iter().sum::<f64>(),
            reference_cell::volume::<f64>(cell),
            epsilon = 1e-13
        );
        for i in 0..rule.npoints() {
            assert!(reference_cell::contains(cell, rule.point(i), 1e-14));
        }
        for degree in 0..=rule.order().min(24) {
            for powers in monomials(cell.dim(), degree) {
                assert!(
                    quadrature_error(rule, &powers) < 1e-12,
                    "Order {} rule on a {cell} is not exact for x^{powers:?}",
                    rule.order()
                );
            }
        }
    }

    macro_rules! test_cell {

        ($($cell:ident),+) => {

        $(
            paste! {

                #[test]
                fn [<test_gauss_jacobi_ $cell:lower>]() {
                    let cell = ReferenceCellType::[<$cell>];
                    for order in 0..12 {
                        let rule = create_rule(cell, order, QuadratureFamily::GaussJacobi).unwrap();
                        assert!(rule.order() >= order);
                        check_rule(&rule);
                    }
                }

            }
        )*
        };
    }

    test_cell!(
        Interval,
        Triangle,
        Quadrilateral,
        Tetrahedron,
        Hexahedron,
        Prism,
        Pyramid
    );

    #[test]
    fn test_simplex_triangle() {
        for order in 0..=12 {
            let rule = create_rule(ReferenceCellType::Triangle, order, QuadratureFamily::Simplex)
                .unwrap();
            assert!(rule.order() >= order);
            check_rule(&rule);
        }
    }

    #[test]
    fn test_simplex_tetrahedron() {
        for order in 0..=9 {
            let rule =
                create_rule(ReferenceCellType::Tetrahedron, order, QuadratureFamily::Simplex)
                    .unwrap();
            assert!(rule.order() >= order);
            check_rule(&rule);
        }
    }

    #[test]
    fn test_tabulated_exactness_boundary() {
        for cell in [ReferenceCellType::Triangle, ReferenceCellType::Tetrahedron] {
            for order in tabulated_orders(cell) {
                let rule = create_rule(cell, order, QuadratureFamily::Simplex).unwrap();
                assert_eq!(rule.order(), order);
                let max_error = monomials(cell.dim(), order + 1)
                    .iter()
                    .map(|powers| quadrature_error(&rule, powers))
                    .fold(0.0, f64::max);
                assert!(
                    max_error > 1e-10,
                    "Order {order} rule on a {cell} is exact to order {}",
                    order + 1
                );
            }
        }
    }

    #[test]
    fn test_point() {
        let rule = create_rule(ReferenceCellType::Point, 7, QuadratureFamily::Simplex).unwrap();
        assert_eq!(rule.npoints(), 1);
        assert_eq!(rule.dim(), 0);
        assert_relative_eq!(rule.weight(0), 1.0);
    }

    #[test]
    fn test_order_out_of_range() {
        assert!(matches!(
            create_rule(ReferenceCellType::Triangle, 13, QuadratureFamily::Simplex),
            Err(Error::QuadratureOrderOutOfRange {
                cell: ReferenceCellType::Triangle,
                order: 13,
                max_order: 12
            })
        ));
        assert!(create_rule(
            ReferenceCellType::Hexahedron,
            gauss_jacobi::MAX_ORDER + 1,
            QuadratureFamily::GaussJacobi
        )
        .is_err());
        assert!(create_rule(ReferenceCellType::Triangle, 13, QuadratureFamily::GaussJacobi).is_ok());
    }

    #[test]
    #[should_panic]
    fn test_simplex_family_on_hexahedron() {
        let _ = create_rule(ReferenceCellType::Hexahedron, 2, QuadratureFamily::Simplex);
    }

    #[test]
    fn test_registry_shares_rules() {
        let a = rule(ReferenceCellType::Triangle, 5).unwrap();
        let b = rule(ReferenceCellType::Triangle, 5).unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        let c = rule_of_family(ReferenceCellType::Triangle, 5, QuadratureFamily::GaussJacobi)
            .unwrap();
        assert!(!Arc::ptr_eq(&a, &c));
    }

    #[test]
    fn test_registry_threads() {
        let rules = (0..8)
            .map(|_| thread::spawn(|| rule(ReferenceCellType::Pyramid, 17).unwrap()))
            .collect::<Vec<_>>()
            .into_iter()
            .map(|h| h.join().unwrap())
            .collect::<Vec<_>>();
        for r in &rules {
            assert!(Arc::ptr_eq(r, &rules[0]));
        }
    }
}
