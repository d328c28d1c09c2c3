//! Reference cell types
use std::fmt;

/// The topology of a reference cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum ReferenceCellType {
    /// A point
    Point = 0,
    /// A line interval
    Interval = 1,
    /// A triangle
    Triangle = 2,
    /// A quadrilateral
    Quadrilateral = 3,
    /// A tetrahedron (whose faces are all triangles)
    Tetrahedron = 4,
    /// A hexahedron (whose faces are all quadrilaterals)
    Hexahedron = 5,
    /// A triangular prism
    Prism = 6,
    /// A square-based pyramid
    Pyramid = 7,
}

impl ReferenceCellType {
    /// Create a reference cell type from a u8
    pub fn from(i: u8) -> Option<ReferenceCellType> {
        match i {
            0 => Some(ReferenceCellType::Point),
            1 => Some(ReferenceCellType::Interval),
            2 => Some(ReferenceCellType::Triangle),
            3 => Some(ReferenceCellType::Quadrilateral),
            4 => Some(ReferenceCellType::Tetrahedron),
            5 => Some(ReferenceCellType::Hexahedron),
            6 => Some(ReferenceCellType::Prism),
            7 => Some(ReferenceCellType::Pyramid),
            _ => None,
        }
    }

    /// The topological dimension of the cell
    pub fn dim(&self) -> usize {
        match self {
            ReferenceCellType::Point => 0,
            ReferenceCellType::Interval => 1,
            ReferenceCellType::Triangle => 2,
            ReferenceCellType::Quadrilateral => 2,
            ReferenceCellType::Tetrahedron => 3,
            ReferenceCellType::Hexahedron => 3,
            ReferenceCellType::Prism => 3,
            ReferenceCellType::Pyramid => 3,
        }
    }

    /// Is the cell a simplex?
    pub fn is_simplex(&self) -> bool {
        matches!(
            self,
            ReferenceCellType::Point
                | ReferenceCellType::Interval
                | ReferenceCellType::Triangle
                | ReferenceCellType::Tetrahedron
        )
    }

    /// The number of vertices of the cell
    pub fn vertex_count(&self) -> usize {
        match self {
            ReferenceCellType::Point => 1,
            ReferenceCellType::Interval => 2,
            ReferenceCellType::Triangle => 3,
            ReferenceCellType::Quadrilateral => 4,
            ReferenceCellType::Tetrahedron => 4,
            ReferenceCellType::Hexahedron => 8,
            ReferenceCellType::Prism => 6,
            ReferenceCellType::Pyramid => 5,
        }
    }
}

impl fmt::Display for ReferenceCellType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ReferenceCellType::Point => "point",
            ReferenceCellType::Interval => "interval",
            ReferenceCellType::Triangle => "triangle",
            ReferenceCellType::Quadrilateral => "quadrilateral",
            ReferenceCellType::Tetrahedron => "tetrahedron",
            ReferenceCellType::Hexahedron => "hexahedron",
            ReferenceCellType::Prism => "prism",
            ReferenceCellType::Pyramid => "pyramid",
        };
        write!(f, "{name}")
    }
}
