use ndgeometry::{
    geometry::{GeometryMapping, IndexedCorners, TabulatedGeometryMap},
    quadrature,
    traits::{GeometryMap, ReferenceMapping},
    types::{CachingPolicy, EvaluationType, ReferenceCellType},
};

/// Integrating over mapped elements
///
/// A small mesh of two quadrilaterals is described by a table of points and the vertices of each
/// cell. A geometry mapping is created for each cell and used to integrate over it.
fn main() {
    // Points stored as a column-major array of shape [2, 6]
    let points = [
        0.0, 0.0, 1.0, 0.0, 2.5, 0.0, 0.0, 1.0, 1.0, 1.0, 2.0, 1.5,
    ];
    let cells = [[0, 1, 3, 4], [1, 2, 4, 5]];

    // Quantities of affine cells are computed once; for other cells they are computed on demand
    let policy = CachingPolicy::uniform(EvaluationType::PreCompute);
    let rule = quadrature::rule(ReferenceCellType::Quadrilateral, 4).unwrap();

    let mut total = 0.0;
    for (i, vertices) in cells.iter().enumerate() {
        let corners = IndexedCorners::<f64, 2>::new(&points, vertices);
        let m = GeometryMapping::<f64, 2, 2>::with_policy(
            ReferenceCellType::Quadrilateral,
            &corners,
            policy,
        );

        // The integral of x^2 + y over the cell
        let integral = m.integrate(&rule, |x| x[0] * x[0] + x[1]);
        total += integral;
        println!(
            "cell {i}: affine={}, area={:.6}, integral={integral:.6}",
            m.is_affine(),
            m.volume()
        );

        // A physical point can be mapped back to the reference cell
        let local = m.local(&m.center()).unwrap();
        println!("  the centre of the cell is at {local:?} in the reference cell");

        // The edges of the cell have their own mappings
        for edge in 0..4 {
            let s = m.sub_mapping::<1>(edge);
            println!(
                "  edge {edge}: length={:.6}, outer normal={:?}",
                s.volume(),
                s.unit_outer_normal(&[0.5]).unwrap()
            );
        }
    }
    println!("total: {total:.6}");

    // The integration elements at every quadrature point can be written into a buffer
    let corners = IndexedCorners::<f64, 2>::new(&points, &cells[1]);
    let m = GeometryMapping::<f64, 2, 2>::new(ReferenceCellType::Quadrilateral, &corners);
    let gmap = TabulatedGeometryMap::<_, 2, 2>::from_rule(&m, &rule);
    let mut jdets = vec![0.0; gmap.point_count()];
    gmap.integration_elements(&mut jdets);
    println!("integration elements of cell 1: {jdets:?}");
}
