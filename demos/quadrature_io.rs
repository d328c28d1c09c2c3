use ndgeometry::{
    quadrature,
    traits::{RONExport, RONImport},
    types::{QuadratureFamily, ReferenceCellType},
    QuadratureRule,
};

/// Quadrature rule I/O
///
/// Demonstration of exporting and importing quadrature rules in RON format
fn main() {
    // Tabulated rules are used for low orders on triangles
    println!(
        "Tabulated triangle rules: {:?}",
        quadrature::tabulated_orders(ReferenceCellType::Triangle)
    );
    for order in [2, 6, 7, 12] {
        let rule = quadrature::rule(ReferenceCellType::Triangle, order).unwrap();
        println!(
            "order {order}: {} points integrating polynomials of degree {}",
            rule.npoints(),
            rule.order()
        );
    }

    // Above the tables, tetrahedron rules are conical products of Gauss-Jacobi rules
    let rule = quadrature::rule(ReferenceCellType::Tetrahedron, 8).unwrap();
    println!("order 8 on a tetrahedron: {} points", rule.npoints());

    // Requesting an order that is too high is an error
    if let Err(e) = quadrature::rule(ReferenceCellType::Triangle, 13) {
        println!("{e}");
    }
    let rule = quadrature::rule_of_family(
        ReferenceCellType::Triangle,
        13,
        QuadratureFamily::GaussJacobi,
    )
    .unwrap();
    println!("Gauss-Jacobi order 13 on a triangle: {} points", rule.npoints());

    // Export a rule as RON
    let rule = quadrature::rule(ReferenceCellType::Triangle, 4).unwrap();
    rule.export_as_ron("_triangle_rule.ron").unwrap();

    // A rule can be re-imported from RON data
    let rule2 = QuadratureRule::<f64>::import_from_ron("_triangle_rule.ron").unwrap();
    for (p, p2) in rule.iter().zip(rule2.iter()) {
        println!(
            "{:?} {:.16} | {:?} {:.16}",
            p.position(),
            p.weight(),
            p2.position(),
            p2.weight()
        );
    }
}
