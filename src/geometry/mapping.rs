//! Geometry mappings with cached derived quantities
use super::{
    affine::AffineMapping, default_tolerance, linalg, multilinear::corners_are_affine,
    multilinear::MultilinearMapping, newton_local, reference_midpoint, DEFAULT_MAX_ITERATIONS,
};
#[cfg(feature = "serde")]
use crate::traits::ConvertToSerializable;
#[cfg(feature = "serde")]
use crate::types::Error;
use crate::{
    quadrature::{product, QuadratureRule},
    reference_cell,
    traits::{Corners, ReferenceMapping},
    types::{
        CacheState, CacheStates, CachingPolicy, CornerMode, EvaluationType, InversionFailure,
        RealScalar, ReferenceCellType, Result, SuppliedValues,
    },
};
use log::debug;
#[cfg(feature = "serde")]
use log::warn;
use std::{cell::Cell, ops::Deref};

/// The map used by a [GeometryMapping]
#[derive(Debug, Clone, PartialEq)]
pub enum MappingVariant<T: RealScalar, const D: usize, const G: usize> {
    /// A map with a constant Jacobian
    Affine(AffineMapping<T, D, G>),
    /// A map that interpolates the corners
    Multilinear(MultilinearMapping<T, D, G>),
}

impl<T: RealScalar, const D: usize, const G: usize> MappingVariant<T, D, G> {
    /// Select the map for a set of corners
    pub fn new(cell_type: ReferenceCellType, corners: Vec<[T; G]>) -> Self {
        assert_eq!(
            corners.len(),
            cell_type.vertex_count(),
            "A {cell_type} has {} corners",
            cell_type.vertex_count()
        );
        if corners_are_affine::<T, D, G>(cell_type, &corners) {
            Self::Affine(AffineMapping::from_vec_unchecked(cell_type, corners))
        } else {
            Self::Multilinear(MultilinearMapping::from_vec(cell_type, corners))
        }
    }

    /// The corners
    pub fn corners(&self) -> &[[T; G]] {
        match self {
            Self::Affine(m) => m.corners(),
            Self::Multilinear(m) => m.corners(),
        }
    }
}

impl<T: RealScalar, const D: usize, const G: usize> ReferenceMapping<D, G>
    for MappingVariant<T, D, G>
{
    type T = T;

    fn cell_type(&self) -> ReferenceCellType {
        match self {
            Self::Affine(m) => m.cell_type(),
            Self::Multilinear(m) => m.cell_type(),
        }
    }

    fn is_affine(&self) -> bool {
        match self {
            Self::Affine(m) => m.is_affine(),
            Self::Multilinear(m) => m.is_affine(),
        }
    }

    fn global(&self, local: &[T; D]) -> [T; G] {
        match self {
            Self::Affine(m) => m.global(local),
            Self::Multilinear(m) => m.global(local),
        }
    }

    fn jacobian_transposed(&self, local: &[T; D]) -> [[T; G]; D] {
        match self {
            Self::Affine(m) => m.jacobian_transposed(local),
            Self::Multilinear(m) => m.jacobian_transposed(local),
        }
    }
}

/// A cached value
#[derive(Debug, Clone, Copy, PartialEq)]
enum Cached<V> {
    NotComputed,
    Valid(V),
    /// Computed at another point, or for other corners
    Stale(V),
}

impl<V: Copy> Cached<V> {
    fn state(&self) -> CacheState {
        match self {
            Self::NotComputed => CacheState::NotComputed,
            Self::Valid(_) => CacheState::Valid,
            Self::Stale(_) => CacheState::Stale,
        }
    }

    fn valid(&self) -> Option<V> {
        match self {
            Self::Valid(v) => Some(*v),
            _ => None,
        }
    }

    fn into_stale(self) -> Self {
        match self {
            Self::Valid(v) | Self::Stale(v) => Self::Stale(v),
            Self::NotComputed => Self::NotComputed,
        }
    }
}

fn invalidate<V: Copy>(slot: &Cell<Cached<V>>) {
    slot.set(slot.get().into_stale());
}

/// The geometry of an entity
///
/// The Jacobian transposed, the Jacobian inverse transposed, the integration element and the
/// unit normal are cached according to a [CachingPolicy]. A cached value is valid at every point
/// only if the map is affine, so for non-affine maps every quantity is recomputed when it is
/// requested and the cache only holds the most recent (stale) value.
///
/// The cache is filled through shared references, so a mapping must not be shared between
/// threads; separate threads should use separate mappings.
#[derive(Debug, Clone)]
pub struct GeometryMapping<T: RealScalar, const D: usize, const G: usize> {
    variant: MappingVariant<T, D, G>,
    mode: CornerMode,
    policy: CachingPolicy,
    jacobian_transposed: Cell<Cached<[[T; G]; D]>>,
    jacobian_inverse_transposed: Cell<Cached<[[T; D]; G]>>,
    integration_element: Cell<Cached<T>>,
    normal: Cell<Cached<[T; G]>>,
}

impl<T: RealScalar, const D: usize, const G: usize> GeometryMapping<T, D, G> {
    /// Create a mapping for the corners of an element, computing every quantity on demand
    pub fn new<C: Corners<G, T = T> + ?Sized>(cell_type: ReferenceCellType, corners: &C) -> Self {
        Self::with_policy(cell_type, corners, CachingPolicy::default())
    }

    /// Create a mapping for the corners of an element
    pub fn with_policy<C: Corners<G, T = T> + ?Sized>(
        cell_type: ReferenceCellType,
        corners: &C,
        policy: CachingPolicy,
    ) -> Self {
        Self::with_supplied_values(cell_type, corners, policy, &SuppliedValues::new())
    }

    /// Create a mapping for the corners of an element, with values for the quantities that the
    /// policy marks as [EvaluationType::IsComputed]
    ///
    /// Supplied values are assumed to be correct and are only used if the map is affine.
    pub fn with_supplied_values<C: Corners<G, T = T> + ?Sized>(
        cell_type: ReferenceCellType,
        corners: &C,
        policy: CachingPolicy,
        supplied: &SuppliedValues<T, D, G>,
    ) -> Self {
        let corners = (0..corners.corner_count())
            .map(|i| corners.corner(i))
            .collect();
        Self::build(cell_type, corners, CornerMode::Element, policy, supplied)
    }

    /// Create a mapping that owns its corners
    ///
    /// The corners of a mapping created this way can be moved with [GeometryMapping::set_corner].
    pub fn from_coordinates(
        cell_type: ReferenceCellType,
        corners: Vec<[T; G]>,
        policy: CachingPolicy,
    ) -> Self {
        Self::build(
            cell_type,
            corners,
            CornerMode::Coordinates,
            policy,
            &SuppliedValues::new(),
        )
    }

    fn build(
        cell_type: ReferenceCellType,
        corners: Vec<[T; G]>,
        mode: CornerMode,
        policy: CachingPolicy,
        supplied: &SuppliedValues<T, D, G>,
    ) -> Self {
        assert_eq!(
            cell_type.dim(),
            D,
            "A {cell_type} cannot be used by a mapping from dimension {D}"
        );
        assert!(G >= D, "Cannot map dimension {D} into dimension {G}");
        assert_eq!(
            corners.len(),
            cell_type.vertex_count(),
            "A {cell_type} has {} corners",
            cell_type.vertex_count()
        );
        let mapping = Self {
            variant: MappingVariant::new(cell_type, corners),
            mode,
            policy,
            jacobian_transposed: Cell::new(Cached::NotComputed),
            jacobian_inverse_transposed: Cell::new(Cached::NotComputed),
            integration_element: Cell::new(Cached::NotComputed),
            normal: Cell::new(Cached::NotComputed),
        };
        mapping.apply_policy(policy, supplied);
        mapping
    }

    fn apply_policy(&self, policy: CachingPolicy, supplied: &SuppliedValues<T, D, G>) {
        let cell = self.cell_type();
        if !self.is_affine() {
            if policy != CachingPolicy::uniform(EvaluationType::ComputeOnDemand) {
                debug!("Mapping of a {cell} is not affine: computing every quantity on demand");
            }
            return;
        }
        debug!("Mapping of a {cell} is affine");
        let mid = reference_midpoint::<T, D>(cell);

        match policy.jacobian_transposed {
            EvaluationType::IsComputed => self.jacobian_transposed.set(Cached::Valid(
                supplied
                    .jacobian_transposed
                    .unwrap_or_else(|| panic!("No Jacobian transposed was supplied")),
            )),
            EvaluationType::PreCompute => {
                self.jacobian_transposed(&mid);
            }
            EvaluationType::ComputeOnDemand => {}
        }
        match policy.jacobian_inverse_transposed {
            EvaluationType::IsComputed => self.jacobian_inverse_transposed.set(Cached::Valid(
                supplied
                    .jacobian_inverse_transposed
                    .unwrap_or_else(|| panic!("No Jacobian inverse transposed was supplied")),
            )),
            EvaluationType::PreCompute => {
                if self.jacobian_inverse_transposed(&mid).is_err() {
                    debug!("Jacobian of a {cell} mapping is singular");
                }
            }
            EvaluationType::ComputeOnDemand => {}
        }
        match policy.integration_element {
            EvaluationType::IsComputed => self.integration_element.set(Cached::Valid(
                supplied
                    .integration_element
                    .unwrap_or_else(|| panic!("No integration element was supplied")),
            )),
            EvaluationType::PreCompute => {
                self.integration_element(&mid);
            }
            EvaluationType::ComputeOnDemand => {}
        }
        if D + 1 == G {
            match policy.normal {
                EvaluationType::IsComputed => self.normal.set(Cached::Valid(
                    supplied
                        .normal
                        .unwrap_or_else(|| panic!("No normal was supplied")),
                )),
                EvaluationType::PreCompute => {
                    self.unit_normal(&mid);
                }
                EvaluationType::ComputeOnDemand => {}
            }
        }
    }

    /// Wrap a freshly computed value
    fn fresh<V>(&self, value: V) -> Cached<V> {
        if self.is_affine() {
            Cached::Valid(value)
        } else {
            Cached::Stale(value)
        }
    }

    /// Replace the corners after they have changed
    fn reset(&mut self, corners: Vec<[T; G]>) {
        let cell = self.cell_type();
        assert_eq!(
            corners.len(),
            cell.vertex_count(),
            "A {cell} has {} corners",
            cell.vertex_count()
        );
        self.variant = MappingVariant::new(cell, corners);
        invalidate(&self.jacobian_transposed);
        invalidate(&self.jacobian_inverse_transposed);
        invalidate(&self.integration_element);
        invalidate(&self.normal);
        self.apply_policy(self.policy.without_supplied_values(), &SuppliedValues::new());
    }

    /// Re-read the corners of the element
    ///
    /// Panics if the mapping owns its corners.
    pub fn refresh<C: Corners<G, T = T> + ?Sized>(&mut self, corners: &C) {
        assert_eq!(
            self.mode,
            CornerMode::Element,
            "Only a mapping that reads its corners from an element can be refreshed"
        );
        self.reset(
            (0..corners.corner_count())
                .map(|i| corners.corner(i))
                .collect(),
        );
    }

    /// Move one corner
    ///
    /// Panics if the mapping reads its corners from an element.
    pub fn set_corner(&mut self, index: usize, corner: [T; G]) {
        assert_eq!(
            self.mode,
            CornerMode::Coordinates,
            "Only a mapping that owns its corners can move a corner"
        );
        let mut corners = self.corners();
        assert!(
            index < corners.len(),
            "Corner index {index} out of range: the mapping has {} corners",
            corners.len()
        );
        corners[index] = corner;
        self.reset(corners);
    }

    /// The map used to evaluate the geometry
    pub fn variant(&self) -> &MappingVariant<T, D, G> {
        &self.variant
    }

    /// Where the corners are read from
    pub fn corner_mode(&self) -> CornerMode {
        self.mode
    }

    /// The caching policy
    pub fn policy(&self) -> CachingPolicy {
        self.policy
    }

    /// The number of corners
    pub fn corner_count(&self) -> usize {
        self.variant.corners().len()
    }

    /// The corner with index `index`
    pub fn corner(&self, index: usize) -> [T; G] {
        self.variant.corners()[index]
    }

    /// All the corners
    pub fn corners(&self) -> Vec<[T; G]> {
        self.variant.corners().to_vec()
    }

    /// The image of the midpoint of the reference cell
    pub fn center(&self) -> [T; G] {
        self.global(&reference_midpoint(self.cell_type()))
    }

    /// The volume of the entity
    ///
    /// This is exact for affine maps; for other maps it is computed using a Gauss-Jacobi
    /// quadrature rule.
    pub fn volume(&self) -> T {
        let cell = self.cell_type();
        if self.is_affine() {
            self.integration_element(&reference_midpoint(cell))
                * reference_cell::volume::<T>(cell)
        } else {
            let rule = product::gauss_jacobi_rule(cell, 2 * D + 1).cast::<T>();
            self.integrate(&rule, |_| T::one())
        }
    }

    /// Integrate a function of the physical coordinates over the entity
    pub fn integrate<F: Fn(&[T; G]) -> T>(&self, rule: &QuadratureRule<T>, f: F) -> T {
        assert_eq!(
            rule.cell_type(),
            self.cell_type(),
            "Cannot integrate over a {} using a rule on a {}",
            self.cell_type(),
            rule.cell_type()
        );
        let mut local = [T::zero(); D];
        rule.iter()
            .map(|p| {
                local.copy_from_slice(p.position());
                f(&self.global(&local)) * self.integration_element(&local) * p.weight()
            })
            .sum()
    }

    /// The unit normal at a point in the reference cell
    ///
    /// Panics unless `D + 1 == G`.
    pub fn unit_normal(&self, local: &[T; D]) -> [T; G] {
        if let Some(n) = self.normal.get().valid() {
            return n;
        }
        let n = linalg::unit_normal(&self.jacobian_transposed(local));
        self.normal.set(self.fresh(n));
        n
    }

    /// The outer normal to a facet of the reference cell, mapped to physical space
    ///
    /// This is the Jacobian inverse transposed applied to the outward unit normal of the facet
    /// of the reference cell; its length is not one.
    pub fn outer_normal(&self, facet: usize, local: &[T; D]) -> Result<[T; G]> {
        let reference_normal = reference_cell::reference_normal::<T>(self.cell_type(), facet);
        let jit = self.jacobian_inverse_transposed(local)?;
        let mut normal = [T::zero(); G];
        for (n, row) in normal.iter_mut().zip(&jit) {
            *n = row
                .iter()
                .zip(&reference_normal)
                .map(|(a, b)| *a * *b)
                .sum();
        }
        Ok(normal)
    }

    /// The outer unit normal to a facet of the reference cell, mapped to physical space
    pub fn unit_outer_normal(&self, facet: usize, local: &[T; D]) -> Result<[T; G]> {
        let mut normal = self.outer_normal(facet, local)?;
        let size = linalg::norm(&normal);
        for n in normal.iter_mut() {
            *n /= size;
        }
        Ok(normal)
    }

    /// The states of the cached quantities
    pub fn cache_states(&self) -> CacheStates {
        CacheStates {
            jacobian_transposed: self.jacobian_transposed.get().state(),
            jacobian_inverse_transposed: self.jacobian_inverse_transposed.get().state(),
            integration_element: self.integration_element.get().state(),
            normal: self.normal.get().state(),
        }
    }

    /// Map a point in physical space to the reference cell, with a given Newton iteration bound
    /// and tolerance
    ///
    /// Affine maps are inverted directly.
    pub fn local_with(
        &self,
        global: &[T; G],
        max_iterations: usize,
        tolerance: T,
    ) -> Result<[T; D]> {
        if self.is_affine() {
            let jit = self.jacobian_inverse_transposed(&reference_midpoint(self.cell_type()))?;
            let origin = self.corner(0);
            let mut local = [T::zero(); D];
            for (k, l) in local.iter_mut().enumerate() {
                for ((row, y), o) in jit.iter().zip(global).zip(&origin) {
                    *l += row[k] * (*y - *o);
                }
            }
            Ok(local)
        } else {
            newton_local(&self.variant, global, max_iterations, tolerance)
        }
    }

    /// The mapping of the sub-entity of dimension `SD` with index `index`
    pub fn sub_mapping<const SD: usize>(&self, index: usize) -> SubMapping<'_, T, SD, D, G> {
        SubMapping::new(self, index)
    }
}

impl<T: RealScalar, const D: usize, const G: usize> ReferenceMapping<D, G>
    for GeometryMapping<T, D, G>
{
    type T = T;

    fn cell_type(&self) -> ReferenceCellType {
        self.variant.cell_type()
    }

    fn is_affine(&self) -> bool {
        self.variant.is_affine()
    }

    fn global(&self, local: &[T; D]) -> [T; G] {
        self.variant.global(local)
    }

    fn jacobian_transposed(&self, local: &[T; D]) -> [[T; G]; D] {
        if let Some(jt) = self.jacobian_transposed.get().valid() {
            return jt;
        }
        let jt = self.variant.jacobian_transposed(local);
        self.jacobian_transposed.set(self.fresh(jt));
        jt
    }

    fn integration_element(&self, local: &[T; D]) -> T {
        if let Some(ie) = self.integration_element.get().valid() {
            return ie;
        }
        let ie = linalg::integration_element(&self.jacobian_transposed(local));
        self.integration_element.set(self.fresh(ie));
        ie
    }

    fn jacobian_inverse_transposed(&self, local: &[T; D]) -> Result<[[T; D]; G]> {
        if let Some(jit) = self.jacobian_inverse_transposed.get().valid() {
            return Ok(jit);
        }
        let jit = linalg::pseudo_inverse_transposed(&self.jacobian_transposed(local))
            .ok_or(InversionFailure::SingularJacobian { iteration: 0 })?;
        self.jacobian_inverse_transposed.set(self.fresh(jit));
        Ok(jit)
    }

    fn local(&self, global: &[T; G]) -> Result<[T; D]> {
        self.local_with(global, DEFAULT_MAX_ITERATIONS, default_tolerance())
    }
}

/// The geometry of a sub-entity of an entity
///
/// The mapping of the sub-entity uses the corners of the parent that belong to the sub-entity,
/// and the parent's caching policy with supplied values replaced by precomputed values.
#[derive(Debug)]
pub struct SubMapping<'a, T: RealScalar, const SD: usize, const D: usize, const G: usize> {
    parent: &'a GeometryMapping<T, D, G>,
    index: usize,
    mapping: GeometryMapping<T, SD, G>,
}

impl<'a, T: RealScalar, const SD: usize, const D: usize, const G: usize>
    SubMapping<'a, T, SD, D, G>
{
    /// Create new
    pub fn new(parent: &'a GeometryMapping<T, D, G>, index: usize) -> Self {
        assert!(
            SD <= D,
            "A sub-entity of dimension {SD} cannot belong to an entity of dimension {D}"
        );
        let cell = parent.cell_type();
        let sub_cell = reference_cell::sub_entity_type(cell, SD, index);
        let corners = reference_cell::sub_entity(cell, SD, index)
            .iter()
            .map(|v| parent.corner(*v))
            .collect();
        let mapping = GeometryMapping::build(
            sub_cell,
            corners,
            CornerMode::Element,
            parent.policy().without_supplied_values(),
            &SuppliedValues::new(),
        );
        Self {
            parent,
            index,
            mapping,
        }
    }

    /// The mapping of the sub-entity
    pub fn mapping(&self) -> &GeometryMapping<T, SD, G> {
        &self.mapping
    }

    /// The mapping of the parent entity
    pub fn parent(&self) -> &'a GeometryMapping<T, D, G> {
        self.parent
    }

    /// The index of the sub-entity in the parent's reference cell
    pub fn index(&self) -> usize {
        self.index
    }

    /// The co-dimension of the sub-entity
    pub fn codim(&self) -> usize {
        D - SD
    }

    /// Map a point in the reference cell of the sub-entity to the reference cell of the parent
    pub fn parent_local(&self, local: &[T; SD]) -> [T; D] {
        let mut parent_local = [T::zero(); D];
        reference_cell::embed_sub_entity(
            self.parent.cell_type(),
            SD,
            self.index,
            local,
            &mut parent_local,
        );
        parent_local
    }

    /// The outer normal of the parent at a point of this facet
    ///
    /// Panics unless the sub-entity is a facet.
    pub fn outer_normal(&self, local: &[T; SD]) -> Result<[T; G]> {
        assert!(SD + 1 == D, "Outer normals are only defined on facets");
        self.parent
            .outer_normal(self.index, &self.parent_local(local))
    }

    /// The outer unit normal of the parent at a point of this facet
    ///
    /// Panics unless the sub-entity is a facet.
    pub fn unit_outer_normal(&self, local: &[T; SD]) -> Result<[T; G]> {
        assert!(SD + 1 == D, "Outer normals are only defined on facets");
        self.parent
            .unit_outer_normal(self.index, &self.parent_local(local))
    }
}

impl<T: RealScalar, const SD: usize, const D: usize, const G: usize> Deref
    for SubMapping<'_, T, SD, D, G>
{
    type Target = GeometryMapping<T, SD, G>;

    fn deref(&self) -> &Self::Target {
        &self.mapping
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, Debug, serde::Deserialize)]
#[serde(bound = "for<'de2> T: serde::Deserialize<'de2>")]
/// Serializable form of a geometry mapping
pub struct SerializableGeometryMapping<T: RealScalar + serde::Serialize>
where
    for<'de2> T: serde::Deserialize<'de2>,
{
    cell_type: ReferenceCellType,
    corner_mode: CornerMode,
    corners: Vec<Vec<T>>,
    policy: CachingPolicy,
}

#[cfg(feature = "serde")]
impl<
        T: RealScalar + serde::Serialize + for<'de> serde::Deserialize<'de>,
        const D: usize,
        const G: usize,
    > ConvertToSerializable for GeometryMapping<T, D, G>
{
    type SerializableType = SerializableGeometryMapping<T>;
    fn to_serializable(&self) -> SerializableGeometryMapping<T> {
        if self.policy.uses_supplied_values() {
            warn!("Supplied values cannot be serialized: they will be precomputed when the mapping is imported");
        }
        SerializableGeometryMapping {
            cell_type: self.cell_type(),
            corner_mode: self.mode,
            corners: self.variant.corners().iter().map(|c| c.to_vec()).collect(),
            policy: self.policy.without_supplied_values(),
        }
    }
    fn from_serializable(s: SerializableGeometryMapping<T>) -> Result<Self> {
        if s.cell_type.dim() != D {
            return Err(Error::InvalidData(format!(
                "A {} cannot be used by a mapping from dimension {D}",
                s.cell_type
            )));
        }
        if s.corners.len() != s.cell_type.vertex_count() {
            return Err(Error::InvalidData(format!(
                "A {} has {} corners, not {}",
                s.cell_type,
                s.cell_type.vertex_count(),
                s.corners.len()
            )));
        }
        let mut corners = Vec::with_capacity(s.corners.len());
        for c in &s.corners {
            if c.len() != G {
                return Err(Error::InvalidData(format!(
                    "Corner with {} coordinates in a mapping into dimension {G}",
                    c.len()
                )));
            }
            let mut corner = [T::zero(); G];
            corner.copy_from_slice(c);
            corners.push(corner);
        }
        Ok(Self::build(
            s.cell_type,
            corners,
            s.corner_mode,
            s.policy.without_supplied_values(),
            &SuppliedValues::new(),
        ))
    }
}
