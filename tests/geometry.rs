//! Test geometry mappings
use approx::assert_relative_eq;
use ndgeometry::{
    geometry::{GeometryMapping, IndexedCorners, MappingVariant},
    quadrature,
    traits::ReferenceMapping,
    types::{CacheState, CachingPolicy, Error, EvaluationType, InversionFailure, ReferenceCellType},
};

#[test]
fn test_affine_triangle() {
    for policy in [
        CachingPolicy::default(),
        CachingPolicy::uniform(EvaluationType::PreCompute),
    ] {
        let m = GeometryMapping::<f64, 2, 2>::with_policy(
            ReferenceCellType::Triangle,
            &[[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]],
            policy,
        );
        assert!(m.is_affine());
        let jt = m.jacobian_transposed(&[0.0, 0.0]);
        for x in [[0.3, 0.3], [1.0, 0.0], [0.1, 0.8]] {
            assert_eq!(m.jacobian_transposed(&x), jt);
            assert_relative_eq!(m.integration_element(&x), 1.0);
        }
        assert_eq!(m.cache_states().jacobian_transposed, CacheState::Valid);
    }
}

#[test]
fn test_non_affine_quadrilateral() {
    let m = GeometryMapping::<f64, 2, 2>::with_policy(
        ReferenceCellType::Quadrilateral,
        &[[0.0, 0.0], [2.0, 0.0], [0.0, 1.0], [1.0, 1.0]],
        CachingPolicy::uniform(EvaluationType::PreCompute),
    );
    assert!(!m.is_affine());
    assert!(matches!(m.variant(), MappingVariant::Multilinear(_)));
    let a = m.integration_element(&[0.2, 0.1]);
    let b = m.integration_element(&[0.2, 0.9]);
    assert!((a - b).abs() > 0.5);
    assert_eq!(m.cache_states().integration_element, CacheState::Stale);
}

#[test]
fn test_translated_parallelogram() {
    for offset in [0.0, 1000.0, 1e6 + 0.1] {
        let corners = [[0.0, 0.0], [0.3, 0.1], [0.1, 0.7], [0.4, 0.8]]
            .map(|[x, y]| [x + offset, y + offset]);
        let m = GeometryMapping::<f64, 2, 2>::with_policy(
            ReferenceCellType::Quadrilateral,
            &corners,
            CachingPolicy::uniform(EvaluationType::PreCompute),
        );
        assert!(m.is_affine());
        assert!(matches!(m.variant(), MappingVariant::Affine(_)));
        assert_eq!(m.cache_states().jacobian_transposed, CacheState::Valid);
        assert_eq!(m.cache_states().integration_element, CacheState::Valid);
        assert_relative_eq!(m.integration_element(&[0.9, 0.2]), 0.2, epsilon = 1e-6);

        let local = m.local(&m.global(&[0.25, 0.75])).unwrap();
        assert_relative_eq!(local[0], 0.25, epsilon = 1e-6);
        assert_relative_eq!(local[1], 0.75, epsilon = 1e-6);
    }
}

#[test]
fn test_round_trip_tetrahedron() {
    let m = GeometryMapping::<f64, 3, 3>::new(
        ReferenceCellType::Tetrahedron,
        &[
            [1.0, 0.0, 0.0],
            [2.0, 0.5, 0.0],
            [1.2, 1.5, 0.3],
            [0.9, 0.2, 2.0],
        ],
    );
    let rule = quadrature::rule(ReferenceCellType::Tetrahedron, 4).unwrap();
    for p in rule.iter() {
        let x = [p.position()[0], p.position()[1], p.position()[2]];
        let local = m.local(&m.global(&x)).unwrap();
        for (a, b) in local.iter().zip(&x) {
            assert_relative_eq!(*a, *b, epsilon = 1e-12);
        }
    }
}

#[test]
fn test_round_trip_hexahedron() {
    let m = GeometryMapping::<f64, 3, 3>::new(
        ReferenceCellType::Hexahedron,
        &[
            [0.0, 0.0, 0.0],
            [1.0, 0.1, 0.0],
            [0.0, 1.0, 0.1],
            [1.2, 1.1, 0.0],
            [0.0, 0.1, 1.0],
            [1.0, 0.0, 0.9],
            [0.1, 1.0, 1.0],
            [1.1, 0.9, 1.2],
        ],
    );
    assert!(!m.is_affine());
    let rule = quadrature::rule(ReferenceCellType::Hexahedron, 3).unwrap();
    for p in rule.iter() {
        let x = [p.position()[0], p.position()[1], p.position()[2]];
        assert!(m.check_inside(&x));
        let local = m.local(&m.global(&x)).unwrap();
        for (a, b) in local.iter().zip(&x) {
            assert_relative_eq!(*a, *b, epsilon = 1e-10);
        }
    }
}

#[test]
fn test_sub_mapping_composition() {
    let m = GeometryMapping::<f64, 3, 3>::new(
        ReferenceCellType::Prism,
        &[
            [0.0, 0.0, 0.0],
            [1.0, 0.0, 0.0],
            [0.0, 1.0, 0.0],
            [0.1, 0.0, 1.0],
            [1.2, 0.1, 1.1],
            [0.0, 1.1, 0.9],
        ],
    );
    for face in 0..5 {
        let s = m.sub_mapping::<2>(face);
        let x = if s.cell_type() == ReferenceCellType::Triangle {
            [0.2, 0.3]
        } else {
            [0.4, 0.7]
        };
        let direct = s.global(&x);
        let composed = m.global(&s.parent_local(&x));
        for (a, b) in direct.iter().zip(&composed) {
            assert_relative_eq!(*a, *b, epsilon = 1e-14);
        }
    }
}

#[test]
fn test_surface_mesh() {
    // Two triangles forming a unit square in the plane z = 1, stored as in a mesh
    let points = [
        0.0, 0.0, 1.0, 1.0, 0.0, 1.0, 0.0, 1.0, 1.0, 1.0, 1.0, 1.0,
    ];
    let cells = [[0, 1, 2], [1, 3, 2]];
    let rule = quadrature::rule(ReferenceCellType::Triangle, 2).unwrap();
    let mut area = 0.0;
    for vertices in &cells {
        let m = GeometryMapping::<f64, 2, 3>::new(
            ReferenceCellType::Triangle,
            &IndexedCorners::<f64, 3>::new(&points, vertices),
        );
        area += m.integrate(&rule, |_| 1.0);
        let n = m.unit_normal(&[0.2, 0.2]);
        assert_relative_eq!(n[2], 1.0, epsilon = 1e-14);
    }
    assert_relative_eq!(area, 1.0, epsilon = 1e-14);
}

#[test]
fn test_not_invertible() {
    let m = GeometryMapping::<f64, 2, 2>::new(
        ReferenceCellType::Quadrilateral,
        &[[0.0, 0.0], [1.0, 0.0], [0.0, 0.0], [1.0, 0.0]],
    );
    match m.local(&[0.5, 0.0]) {
        Err(Error::MappingNotInvertible(InversionFailure::SingularJacobian { .. })) => {}
        _ => panic!("Expected a singular Jacobian"),
    }
}

#[test]
#[should_panic]
fn test_corner_count_mismatch() {
    GeometryMapping::<f64, 3, 3>::new(
        ReferenceCellType::Tetrahedron,
        &[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
    );
}

#[test]
#[should_panic]
fn test_sub_mapping_index_out_of_range() {
    let m = GeometryMapping::<f64, 3, 3>::new(
        ReferenceCellType::Tetrahedron,
        &[
            [0.0, 0.0, 0.0],
            [1.0, 0.0, 0.0],
            [0.0, 1.0, 0.0],
            [0.0, 0.0, 1.0],
        ],
    );
    m.sub_mapping::<2>(4);
}

#[test]
fn test_f32() {
    let m = GeometryMapping::<f32, 2, 2>::new(
        ReferenceCellType::Quadrilateral,
        &[[0.0, 0.0], [2.0, 0.0], [0.0, 1.0], [1.0, 1.0]],
    );
    let local = m.local(&[1.0, 0.5]).unwrap();
    let x = m.global(&local);
    assert_relative_eq!(x[0], 1.0, epsilon = 1e-5);
    assert_relative_eq!(x[1], 0.5, epsilon = 1e-5);
    let rule = quadrature::rule(ReferenceCellType::Quadrilateral, 3)
        .unwrap()
        .cast::<f32>();
    assert_relative_eq!(m.integrate(&rule, |_| 1.0), 1.5, epsilon = 1e-5);
}
