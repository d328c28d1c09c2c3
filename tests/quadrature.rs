//! Test quadrature rules
use approx::assert_relative_eq;
use ndgeometry::{
    quadrature::{self, create_rule, max_order, rule_of_family},
    reference_cell,
    types::{Error, QuadratureFamily, ReferenceCellType},
};
use paste::paste;

fn factorial(n: usize) -> f64 {
    (1..=n).map(|i| i as f64).product()
}

/// The integral of a monomial over the reference triangle or tetrahedron
fn simplex_monomial_integral(powers: &[usize]) -> f64 {
    powers.iter().map(|a| factorial(*a)).product::<f64>()
        / factorial(powers.iter().sum::<usize>() + powers.len())
}

fn monomials(dim: usize, degree: usize) -> Vec<Vec<usize>> {
    if dim == 2 {
        (0..=degree).map(|a| vec![a, degree - a]).collect()
    } else {
        (0..=degree)
            .flat_map(|a| (0..=degree - a).map(move |b| vec![a, b, degree - a - b]))
            .collect()
    }
}

fn max_error(cell: ReferenceCellType, order: usize, degree: usize) -> f64 {
    let rule = quadrature::rule(cell, order).unwrap();
    monomials(cell.dim(), degree)
        .iter()
        .map(|powers| {
            let approx = rule.integrate(|p| {
                p.iter()
                    .zip(powers)
                    .map(|(x, a)| x.powi(*a as i32))
                    .product()
            });
            (approx - simplex_monomial_integral(powers)).abs()
        })
        .fold(0.0, f64::max)
}

#[test]
fn test_triangle_order_2() {
    let rule = quadrature::rule(ReferenceCellType::Triangle, 2).unwrap();
    assert_eq!(rule.npoints(), 3);
    assert_eq!(rule.order(), 2);
    let expected = [[2.0 / 3.0, 1.0 / 6.0], [1.0 / 6.0, 2.0 / 3.0], [1.0 / 6.0, 1.0 / 6.0]];
    for p in rule.iter() {
        assert_relative_eq!(p.weight(), 0.5 / 3.0, epsilon = 1e-15);
        assert!(expected.iter().any(|e| (e[0] - p.position()[0]).abs() < 1e-15
            && (e[1] - p.position()[1]).abs() < 1e-15));
    }
}

macro_rules! test_simplex {

    ($(($cell:ident, $max:expr)),+) => {

    $(
        paste! {

            #[test]
            fn [<test_weight_sums_ $cell:lower>]() {
                let cell = ReferenceCellType::[<$cell>];
                for order in 0..=$max {
                    let rule = quadrature::rule(cell, order).unwrap();
                    assert_relative_eq!(
                        rule.weights().iter().sum::<f64>(),
                        reference_cell::volume::<f64>(cell),
                        epsilon = 1e-12
                    );
                }
            }

            #[test]
            fn [<test_exactness_ $cell:lower>]() {
                let cell = ReferenceCellType::[<$cell>];
                for order in 0..=$max {
                    let delivered = quadrature::rule(cell, order).unwrap().order();
                    assert!(delivered >= order);
                    for degree in 0..=delivered {
                        assert!(max_error(cell, order, degree) < 1e-12);
                    }
                }
            }

            #[test]
            fn [<test_exactness_boundary_ $cell:lower>]() {
                let cell = ReferenceCellType::[<$cell>];
                for order in quadrature::tabulated_orders(cell) {
                    assert!(max_error(cell, order, order + 1) > 1e-10);
                }
            }

        }
    )*
    };
}

test_simplex!((Triangle, 12), (Tetrahedron, 8));

#[test]
fn test_order_out_of_range() {
    let cell = ReferenceCellType::Triangle;
    assert_eq!(max_order(cell, QuadratureFamily::Simplex), 12);
    match quadrature::rule(cell, 13) {
        Err(Error::QuadratureOrderOutOfRange {
            cell: c,
            order,
            max_order,
        }) => {
            assert_eq!(c, cell);
            assert_eq!(order, 13);
            assert_eq!(max_order, 12);
        }
        _ => panic!("Expected an out of range error"),
    }
    let message = format!("{}", quadrature::rule(cell, 13).unwrap_err());
    assert!(message.contains("13"));
    assert!(message.contains("triangle"));
}

#[test]
fn test_conical_fallback() {
    let rule = create_rule(ReferenceCellType::Tetrahedron, 6, QuadratureFamily::Simplex).unwrap();
    assert_eq!(rule.npoints(), 64);
    assert_eq!(rule.order(), 7);

    let rule = rule_of_family(
        ReferenceCellType::Tetrahedron,
        9,
        QuadratureFamily::GaussJacobi,
    )
    .unwrap();
    assert_eq!(rule.npoints(), 125);
}

#[test]
fn test_rules_are_restartable() {
    let rule = quadrature::rule(ReferenceCellType::Tetrahedron, 3).unwrap();
    let first = rule.iter().map(|p| p.weight()).collect::<Vec<_>>();
    let second = rule.iter().map(|p| p.weight()).collect::<Vec<_>>();
    assert_eq!(first, second);
    assert_eq!(first.len(), rule.npoints());
}
