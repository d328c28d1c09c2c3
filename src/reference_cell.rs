//! Reference cell definitions
//!
//! Every reference cell has a fixed vertex ordering. The sub-entities of each cell are stored in a
//! single static table per cell, indexed by sub-entity dimension and sub-entity number; each
//! sub-entity lists its vertices in the vertex ordering of its own reference cell.
use crate::types::{cast, RealScalar, ReferenceCellType};

type VertexTable = &'static [&'static [f64]];
type SubEntityTable = &'static [&'static [&'static [usize]]];

const POINT_VERTICES: VertexTable = &[&[]];
const INTERVAL_VERTICES: VertexTable = &[&[0.0], &[1.0]];
const TRIANGLE_VERTICES: VertexTable = &[&[0.0, 0.0], &[1.0, 0.0], &[0.0, 1.0]];
const QUADRILATERAL_VERTICES: VertexTable =
    &[&[0.0, 0.0], &[1.0, 0.0], &[0.0, 1.0], &[1.0, 1.0]];
const TETRAHEDRON_VERTICES: VertexTable = &[
    &[0.0, 0.0, 0.0],
    &[1.0, 0.0, 0.0],
    &[0.0, 1.0, 0.0],
    &[0.0, 0.0, 1.0],
];
const HEXAHEDRON_VERTICES: VertexTable = &[
    &[0.0, 0.0, 0.0],
    &[1.0, 0.0, 0.0],
    &[0.0, 1.0, 0.0],
    &[1.0, 1.0, 0.0],
    &[0.0, 0.0, 1.0],
    &[1.0, 0.0, 1.0],
    &[0.0, 1.0, 1.0],
    &[1.0, 1.0, 1.0],
];
const PRISM_VERTICES: VertexTable = &[
    &[0.0, 0.0, 0.0],
    &[1.0, 0.0, 0.0],
    &[0.0, 1.0, 0.0],
    &[0.0, 0.0, 1.0],
    &[1.0, 0.0, 1.0],
    &[0.0, 1.0, 1.0],
];
const PYRAMID_VERTICES: VertexTable = &[
    &[0.0, 0.0, 0.0],
    &[1.0, 0.0, 0.0],
    &[0.0, 1.0, 0.0],
    &[1.0, 1.0, 0.0],
    &[0.0, 0.0, 1.0],
];

const POINT_SUB_ENTITIES: SubEntityTable = &[&[&[0]]];
const INTERVAL_SUB_ENTITIES: SubEntityTable = &[&[&[0], &[1]], &[&[0, 1]]];
const TRIANGLE_SUB_ENTITIES: SubEntityTable = &[
    &[&[0], &[1], &[2]],
    &[&[1, 2], &[0, 2], &[0, 1]],
    &[&[0, 1, 2]],
];
const QUADRILATERAL_SUB_ENTITIES: SubEntityTable = &[
    &[&[0], &[1], &[2], &[3]],
    &[&[0, 1], &[0, 2], &[1, 3], &[2, 3]],
    &[&[0, 1, 2, 3]],
];
const TETRAHEDRON_SUB_ENTITIES: SubEntityTable = &[
    &[&[0], &[1], &[2], &[3]],
    &[&[2, 3], &[1, 3], &[1, 2], &[0, 3], &[0, 2], &[0, 1]],
    &[&[1, 2, 3], &[0, 2, 3], &[0, 1, 3], &[0, 1, 2]],
    &[&[0, 1, 2, 3]],
];
const HEXAHEDRON_SUB_ENTITIES: SubEntityTable = &[
    &[&[0], &[1], &[2], &[3], &[4], &[5], &[6], &[7]],
    &[
        &[0, 1],
        &[0, 2],
        &[0, 4],
        &[1, 3],
        &[1, 5],
        &[2, 3],
        &[2, 6],
        &[3, 7],
        &[4, 5],
        &[4, 6],
        &[5, 7],
        &[6, 7],
    ],
    &[
        &[0, 1, 2, 3],
        &[0, 1, 4, 5],
        &[0, 2, 4, 6],
        &[1, 3, 5, 7],
        &[2, 3, 6, 7],
        &[4, 5, 6, 7],
    ],
    &[&[0, 1, 2, 3, 4, 5, 6, 7]],
];
const PRISM_SUB_ENTITIES: SubEntityTable = &[
    &[&[0], &[1], &[2], &[3], &[4], &[5]],
    &[
        &[0, 1],
        &[0, 2],
        &[0, 3],
        &[1, 2],
        &[1, 4],
        &[2, 5],
        &[3, 4],
        &[3, 5],
        &[4, 5],
    ],
    &[
        &[0, 1, 2],
        &[0, 1, 3, 4],
        &[0, 2, 3, 5],
        &[1, 2, 4, 5],
        &[3, 4, 5],
    ],
    &[&[0, 1, 2, 3, 4, 5]],
];
const PYRAMID_SUB_ENTITIES: SubEntityTable = &[
    &[&[0], &[1], &[2], &[3], &[4]],
    &[
        &[0, 1],
        &[0, 2],
        &[0, 4],
        &[1, 3],
        &[1, 4],
        &[2, 3],
        &[2, 4],
        &[3, 4],
    ],
    &[
        &[0, 1, 2, 3],
        &[0, 1, 4],
        &[0, 2, 4],
        &[1, 3, 4],
        &[2, 3, 4],
    ],
    &[&[0, 1, 2, 3, 4]],
];

fn vertex_table(cell: ReferenceCellType) -> VertexTable {
    match cell {
        ReferenceCellType::Point => POINT_VERTICES,
        ReferenceCellType::Interval => INTERVAL_VERTICES,
        ReferenceCellType::Triangle => TRIANGLE_VERTICES,
        ReferenceCellType::Quadrilateral => QUADRILATERAL_VERTICES,
        ReferenceCellType::Tetrahedron => TETRAHEDRON_VERTICES,
        ReferenceCellType::Hexahedron => HEXAHEDRON_VERTICES,
        ReferenceCellType::Prism => PRISM_VERTICES,
        ReferenceCellType::Pyramid => PYRAMID_VERTICES,
    }
}

fn sub_entity_table(cell: ReferenceCellType) -> SubEntityTable {
    match cell {
        ReferenceCellType::Point => POINT_SUB_ENTITIES,
        ReferenceCellType::Interval => INTERVAL_SUB_ENTITIES,
        ReferenceCellType::Triangle => TRIANGLE_SUB_ENTITIES,
        ReferenceCellType::Quadrilateral => QUADRILATERAL_SUB_ENTITIES,
        ReferenceCellType::Tetrahedron => TETRAHEDRON_SUB_ENTITIES,
        ReferenceCellType::Hexahedron => HEXAHEDRON_SUB_ENTITIES,
        ReferenceCellType::Prism => PRISM_SUB_ENTITIES,
        ReferenceCellType::Pyramid => PYRAMID_SUB_ENTITIES,
    }
}

/// The topological dimension of the cell
pub fn dim(cell: ReferenceCellType) -> usize {
    cell.dim()
}

/// Is the cell a simplex?
pub fn is_simplex(cell: ReferenceCellType) -> bool {
    cell.is_simplex()
}

/// The vertices of the reference cell
pub fn vertices<T: RealScalar>(cell: ReferenceCellType) -> Vec<Vec<T>> {
    vertex_table(cell)
        .iter()
        .map(|v| v.iter().map(|x| cast(*x)).collect())
        .collect()
}

/// The vertex of the reference cell with index `index`
pub(crate) fn vertex<T: RealScalar, const D: usize>(cell: ReferenceCellType, index: usize) -> [T; D] {
    debug_assert!(cell.dim() == D);
    let mut v = [T::zero(); D];
    for (vi, x) in v.iter_mut().zip(vertex_table(cell)[index].iter()) {
        *vi = cast(*x);
    }
    v
}

/// The midpoint of the cell
///
/// This is the average of the vertices of the cell.
pub fn midpoint<T: RealScalar>(cell: ReferenceCellType) -> Vec<T> {
    let table = vertex_table(cell);
    let n = cast::<T>(table.len() as f64);
    (0..cell.dim())
        .map(|i| table.iter().map(|v| cast::<T>(v[i])).sum::<T>() / n)
        .collect()
}

/// The volume of the reference cell
pub fn volume<T: RealScalar>(cell: ReferenceCellType) -> T {
    cast(match cell {
        ReferenceCellType::Point => 1.0,
        ReferenceCellType::Interval => 1.0,
        ReferenceCellType::Triangle => 0.5,
        ReferenceCellType::Quadrilateral => 1.0,
        ReferenceCellType::Tetrahedron => 1.0 / 6.0,
        ReferenceCellType::Hexahedron => 1.0,
        ReferenceCellType::Prism => 0.5,
        ReferenceCellType::Pyramid => 1.0 / 3.0,
    })
}

/// The number of sub-entities of each dimension
pub fn entity_counts(cell: ReferenceCellType) -> Vec<usize> {
    let mut counts = vec![0; 4];
    for (c, e) in counts.iter_mut().zip(sub_entity_table(cell).iter()) {
        *c = e.len();
    }
    counts
}

/// The sub-entities of dimension `dim`, each given by its vertices
pub fn sub_entities(cell: ReferenceCellType, dim: usize) -> &'static [&'static [usize]] {
    let table = sub_entity_table(cell);
    if dim < table.len() {
        table[dim]
    } else {
        &[]
    }
}

/// The vertices of the sub-entity of dimension `dim` with index `index`
pub fn sub_entity(cell: ReferenceCellType, dim: usize, index: usize) -> &'static [usize] {
    let entities = sub_entities(cell, dim);
    assert!(
        index < entities.len(),
        "Sub-entity index {index} out of range: a {cell} has {} sub-entities of dimension {dim}",
        entities.len()
    );
    entities[index]
}

/// The edges of the reference cell
pub fn edges(cell: ReferenceCellType) -> Vec<Vec<usize>> {
    sub_entities(cell, 1).iter().map(|e| e.to_vec()).collect()
}

/// The faces of the reference cell
pub fn faces(cell: ReferenceCellType) -> Vec<Vec<usize>> {
    sub_entities(cell, 2).iter().map(|f| f.to_vec()).collect()
}

/// The cell type of the sub-entity of dimension `dim` with index `index`
pub fn sub_entity_type(cell: ReferenceCellType, dim: usize, index: usize) -> ReferenceCellType {
    let nvertices = sub_entity(cell, dim, index).len();
    match (dim, nvertices) {
        (0, _) => ReferenceCellType::Point,
        (1, _) => ReferenceCellType::Interval,
        (2, 3) => ReferenceCellType::Triangle,
        (2, 4) => ReferenceCellType::Quadrilateral,
        _ => cell,
    }
}

/// The types of the sub-entities of each dimension
pub fn entity_types(cell: ReferenceCellType) -> Vec<Vec<ReferenceCellType>> {
    (0..4)
        .map(|d| {
            (0..sub_entities(cell, d).len())
                .map(|i| sub_entity_type(cell, d, i))
                .collect()
        })
        .collect()
}

/// The vertices adjacent to vertex 0 along each reference axis
///
/// Vertex `axis_vertices(cell)[i]` is vertex 0 moved by one in the `i`th coordinate direction.
pub fn axis_vertices(cell: ReferenceCellType) -> &'static [usize] {
    match cell {
        ReferenceCellType::Point => &[],
        ReferenceCellType::Interval => &[1],
        ReferenceCellType::Triangle => &[1, 2],
        ReferenceCellType::Quadrilateral => &[1, 2],
        ReferenceCellType::Tetrahedron => &[1, 2, 3],
        ReferenceCellType::Hexahedron => &[1, 2, 4],
        ReferenceCellType::Prism => &[1, 2, 3],
        ReferenceCellType::Pyramid => &[1, 2, 4],
    }
}

/// Map a point on a sub-entity to the reference cell
///
/// `sub_local` is a point in the reference cell of the sub-entity of dimension `dim` with index
/// `index`; the corresponding point in the reference cell of `cell` is written into `parent_local`.
pub fn embed_sub_entity<T: RealScalar>(
    cell: ReferenceCellType,
    dim: usize,
    index: usize,
    sub_local: &[T],
    parent_local: &mut [T],
) {
    let sub_vertices = sub_entity(cell, dim, index);
    let sub_cell = sub_entity_type(cell, dim, index);
    let table = vertex_table(cell);
    debug_assert!(sub_local.len() == dim);
    debug_assert!(parent_local.len() == cell.dim());

    let origin = table[sub_vertices[0]];
    for (i, p) in parent_local.iter_mut().enumerate() {
        *p = cast(origin[i]);
    }
    for (x, a) in sub_local.iter().zip(axis_vertices(sub_cell)) {
        let v = table[sub_vertices[*a]];
        for (i, p) in parent_local.iter_mut().enumerate() {
            *p += *x * cast(v[i] - origin[i]);
        }
    }
}

/// The outward unit normal to the facet with index `facet` of the reference cell
pub fn reference_normal<T: RealScalar>(cell: ReferenceCellType, facet: usize) -> Vec<T> {
    let tdim = cell.dim();
    assert!(tdim > 0, "A point has no facets");
    let table = vertex_table(cell);
    let facet_vertices = sub_entity(cell, tdim - 1, facet);

    let mut normal = match tdim {
        1 => vec![1.0],
        2 => {
            let a = table[facet_vertices[0]];
            let b = table[facet_vertices[1]];
            vec![b[1] - a[1], a[0] - b[0]]
        }
        3 => {
            let a = table[facet_vertices[0]];
            let b = table[facet_vertices[1]];
            let c = table[facet_vertices[2]];
            let t0 = [b[0] - a[0], b[1] - a[1], b[2] - a[2]];
            let t1 = [c[0] - a[0], c[1] - a[1], c[2] - a[2]];
            vec![
                t0[1] * t1[2] - t0[2] * t1[1],
                t0[2] * t1[0] - t0[0] * t1[2],
                t0[0] * t1[1] - t0[1] * t1[0],
            ]
        }
        _ => unreachable!(),
    };

    // Orient away from the midpoint of the cell
    let cell_mid = midpoint::<f64>(cell);
    let direction = (0..tdim)
        .map(|i| {
            facet_vertices.iter().map(|v| table[*v][i]).sum::<f64>() / facet_vertices.len() as f64
                - cell_mid[i]
        })
        .zip(normal.iter())
        .map(|(d, n)| d * n)
        .sum::<f64>();
    let size = normal.iter().map(|n| n * n).sum::<f64>().sqrt();
    let scale = if direction < 0.0 { -1.0 / size } else { 1.0 / size };
    for n in normal.iter_mut() {
        *n *= scale;
    }
    normal.iter().map(|n| cast(*n)).collect()
}

/// Is a point inside the closed reference cell?
///
/// Points that are outside the cell by less than `tolerance` are considered inside.
pub fn contains<T: RealScalar>(cell: ReferenceCellType, point: &[T], tolerance: T) -> bool {
    debug_assert!(point.len() == cell.dim());
    let lower = -tolerance;
    let upper = T::one() + tolerance;
    match cell {
        ReferenceCellType::Point => true,
        ReferenceCellType::Interval
        | ReferenceCellType::Quadrilateral
        | ReferenceCellType::Hexahedron => point.iter().all(|x| *x >= lower && *x <= upper),
        ReferenceCellType::Triangle | ReferenceCellType::Tetrahedron => {
            point.iter().all(|x| *x >= lower) && point.iter().copied().sum::<T>() <= upper
        }
        ReferenceCellType::Prism => {
            point[0] >= lower
                && point[1] >= lower
                && point[0] + point[1] <= upper
                && point[2] >= lower
                && point[2] <= upper
        }
        ReferenceCellType::Pyramid => {
            point[2] >= lower
                && point[2] <= upper
                && point[0] >= lower
                && point[1] >= lower
                && point[0] + point[2] <= upper
                && point[1] + point[2] <= upper
        }
    }
}
