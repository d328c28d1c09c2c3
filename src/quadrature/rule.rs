//! Quadrature rules
#[cfg(feature = "serde")]
use crate::traits::ConvertToSerializable;
#[cfg(feature = "serde")]
use crate::types::Error;
use crate::{
    traits::WeightedPoint,
    types::{cast, RealScalar, ReferenceCellType},
};

/// A quadrature rule on a reference cell
///
/// The points are stored consecutively: the first point starts at position zero, the second at
/// position `dim`, and so on.
#[derive(Debug, Clone, PartialEq)]
pub struct QuadratureRule<T: RealScalar> {
    cell_type: ReferenceCellType,
    order: usize,
    points: Vec<T>,
    weights: Vec<T>,
}

impl<T: RealScalar> QuadratureRule<T> {
    /// Create an empty rule
    pub(crate) fn new(cell_type: ReferenceCellType, order: usize, capacity: usize) -> Self {
        Self {
            cell_type,
            order,
            points: Vec::with_capacity(capacity * cell_type.dim()),
            weights: Vec::with_capacity(capacity),
        }
    }

    /// Create a rule from its points and weights
    ///
    /// `order` is the highest degree of polynomial that the rule integrates exactly.
    pub fn from_data(
        cell_type: ReferenceCellType,
        order: usize,
        points: Vec<T>,
        weights: Vec<T>,
    ) -> Self {
        assert_eq!(
            points.len(),
            weights.len() * cell_type.dim(),
            "A quadrature rule on a {cell_type} needs {} coordinates per point",
            cell_type.dim()
        );
        Self {
            cell_type,
            order,
            points,
            weights,
        }
    }

    /// Add a point to the rule
    pub(crate) fn push(&mut self, point: &[T], weight: T) {
        debug_assert!(point.len() == self.dim());
        self.points.extend_from_slice(point);
        self.weights.push(weight);
    }

    /// The reference cell that the rule is defined on
    pub fn cell_type(&self) -> ReferenceCellType {
        self.cell_type
    }

    /// The highest degree of polynomial that the rule integrates exactly
    ///
    /// This can be higher than the order that was requested.
    pub fn order(&self) -> usize {
        self.order
    }

    /// The dimension of a point
    pub fn dim(&self) -> usize {
        self.cell_type.dim()
    }

    /// The number of points
    pub fn npoints(&self) -> usize {
        self.weights.len()
    }

    /// The point with index `index`
    pub fn point(&self, index: usize) -> &[T] {
        let dim = self.dim();
        &self.points[dim * index..dim * (index + 1)]
    }

    /// The weight with index `index`
    pub fn weight(&self, index: usize) -> T {
        self.weights[index]
    }

    /// All the points
    pub fn points(&self) -> &[T] {
        &self.points
    }

    /// All the weights
    pub fn weights(&self) -> &[T] {
        &self.weights
    }

    /// Iterate through the points and weights
    ///
    /// Each call starts again from the first point.
    pub fn iter(&self) -> QuadraturePointIter<'_, T> {
        QuadraturePointIter::new(self)
    }

    /// Approximate the integral of `f` over the reference cell
    pub fn integrate<F: Fn(&[T]) -> T>(&self, f: F) -> T {
        self.iter().map(|p| f(p.position()) * p.weight()).sum()
    }

    /// Convert the rule to another scalar type
    pub fn cast<S: RealScalar>(&self) -> QuadratureRule<S> {
        let convert = |x: &T| match x.to_f64() {
            Some(v) => cast::<S>(v),
            None => S::nan(),
        };
        QuadratureRule {
            cell_type: self.cell_type,
            order: self.order,
            points: self.points.iter().map(convert).collect(),
            weights: self.weights.iter().map(convert).collect(),
        }
    }
}

impl<'a, T: RealScalar> IntoIterator for &'a QuadratureRule<T> {
    type Item = QuadraturePoint<'a, T>;
    type IntoIter = QuadraturePointIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A point of a quadrature rule and its weight
#[derive(Debug, Clone, Copy)]
pub struct QuadraturePoint<'a, T: RealScalar> {
    position: &'a [T],
    weight: T,
}

impl<'a, T: RealScalar> QuadraturePoint<'a, T> {
    /// Create new
    pub fn new(position: &'a [T], weight: T) -> Self {
        Self { position, weight }
    }

    /// The position of the point in the reference cell
    pub fn position(&self) -> &'a [T] {
        self.position
    }

    /// The weight of the point
    pub fn weight(&self) -> T {
        self.weight
    }
}

impl<T: RealScalar> WeightedPoint for QuadraturePoint<'_, T> {
    type T = T;

    fn dim(&self) -> usize {
        self.position.len()
    }

    fn coords(&self, data: &mut [T]) {
        data.copy_from_slice(self.position);
    }

    fn weight(&self) -> T {
        self.weight
    }
}

/// Iterator over the points of a quadrature rule
#[derive(Debug)]
pub struct QuadraturePointIter<'a, T: RealScalar> {
    rule: &'a QuadratureRule<T>,
    index: usize,
}

impl<'a, T: RealScalar> QuadraturePointIter<'a, T> {
    /// Create new
    pub fn new(rule: &'a QuadratureRule<T>) -> Self {
        Self { rule, index: 0 }
    }
}

impl<'a, T: RealScalar> Iterator for QuadraturePointIter<'a, T> {
    type Item = QuadraturePoint<'a, T>;

    fn next(&mut self) -> Option<QuadraturePoint<'a, T>> {
        if self.index < self.rule.npoints() {
            self.index += 1;
            Some(QuadraturePoint::new(
                self.rule.point(self.index - 1),
                self.rule.weight(self.index - 1),
            ))
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.rule.npoints() - self.index;
        (n, Some(n))
    }
}

impl<T: RealScalar> ExactSizeIterator for QuadraturePointIter<'_, T> {}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, Debug, serde::Deserialize)]
#[serde(bound = "for<'de2> T: serde::Deserialize<'de2>")]
/// Serializable form of a quadrature rule
pub struct SerializableQuadratureRule<T: RealScalar + serde::Serialize>
where
    for<'de2> T: serde::Deserialize<'de2>,
{
    cell_type: ReferenceCellType,
    order: usize,
    points: Vec<T>,
    weights: Vec<T>,
}

#[cfg(feature = "serde")]
impl<T: RealScalar + serde::Serialize + for<'de> serde::Deserialize<'de>> ConvertToSerializable
    for QuadratureRule<T>
{
    type SerializableType = SerializableQuadratureRule<T>;
    fn to_serializable(&self) -> SerializableQuadratureRule<T> {
        SerializableQuadratureRule {
            cell_type: self.cell_type,
            order: self.order,
            points: self.points.clone(),
            weights: self.weights.clone(),
        }
    }
    fn from_serializable(s: SerializableQuadratureRule<T>) -> Result<Self, Error> {
        if s.points.len() != s.weights.len() * s.cell_type.dim() {
            return Err(Error::InvalidData(format!(
                "{} coordinates do not describe {} points on a {}",
                s.points.len(),
                s.weights.len(),
                s.cell_type
            )));
        }
        Ok(Self::from_data(s.cell_type, s.order, s.points, s.weights))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{quadrature::create_rule, types::QuadratureFamily};
    use approx::assert_relative_eq;

    fn midpoint_rule() -> QuadratureRule<f64> {
        let mut rule = QuadratureRule::new(ReferenceCellType::Quadrilateral, 1, 4);
        for x in [0.25, 0.75] {
            for y in [0.25, 0.75] {
                rule.push(&[x, y], 0.25);
            }
        }
        rule
    }

    #[test]
    fn test_accessors() {
        let rule = midpoint_rule();
        assert_eq!(rule.npoints(), 4);
        assert_eq!(rule.dim(), 2);
        assert_eq!(rule.points().len(), 8);
        assert_eq!(rule.point(2), &[0.75, 0.25]);
        assert_relative_eq!(rule.weight(3), 0.25);
    }

    #[test]
    fn test_iteration_restarts() {
        let rule = midpoint_rule();
        let first = rule.iter().map(|p| p.weight()).sum::<f64>();
        let second = (&rule).into_iter().map(|p| p.weight()).sum::<f64>();
        assert_relative_eq!(first, 1.0);
        assert_relative_eq!(first, second);
        assert_eq!(rule.iter().len(), 4);

        let mut iter = rule.iter();
        iter.next();
        assert_eq!(iter.len(), 3);
        let p = iter.next().unwrap();
        assert_eq!(p.dim(), 2);
        let mut coords = [0.0; 2];
        p.coords(&mut coords);
        assert_eq!(coords, [0.25, 0.75]);
    }

    fn weighted_first_coordinate<P: WeightedPoint<T = f64>>(
        points: impl Iterator<Item = P>,
    ) -> f64 {
        points
            .map(|p| {
                let mut coords = vec![0.0; p.dim()];
                p.coords(&mut coords);
                WeightedPoint::weight(&p) * coords[0]
            })
            .sum()
    }

    #[test]
    fn test_weighted_points() {
        let rule =
            create_rule(ReferenceCellType::Triangle, 1, QuadratureFamily::Simplex).unwrap();
        // The integral of x over the reference triangle
        assert_relative_eq!(
            weighted_first_coordinate(rule.iter()),
            1.0 / 6.0,
            epsilon = 1e-14
        );
    }

    #[test]
    fn test_integrate() {
        let rule = midpoint_rule();
        assert_relative_eq!(rule.integrate(|p| p[0] + 2.0 * p[1]), 1.5);
    }

    #[test]
    fn test_cast() {
        let rule = midpoint_rule().cast::<f32>();
        assert_eq!(rule.npoints(), 4);
        assert_relative_eq!(rule.point(1)[1], 0.75f32);
    }

    #[test]
    #[should_panic]
    fn test_from_data_wrong_length() {
        QuadratureRule::from_data(ReferenceCellType::Triangle, 1, vec![0.3; 3], vec![0.5]);
    }
}
