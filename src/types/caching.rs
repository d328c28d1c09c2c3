//! Caching policies for geometry mappings

/// How a geometric quantity is evaluated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EvaluationType {
    /// The value is supplied by the caller when the mapping is created
    IsComputed,
    /// The value is computed once when the mapping is created
    PreCompute,
    /// The value is computed when it is first requested
    #[default]
    ComputeOnDemand,
}

/// The evaluation type of each cached quantity of a geometry mapping
///
/// `PreCompute` and `IsComputed` are only honoured for affine mappings: for a
/// non-affine mapping every quantity is computed on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CachingPolicy {
    /// Evaluation of the transposed Jacobian
    pub jacobian_transposed: EvaluationType,
    /// Evaluation of the inverse transposed Jacobian
    pub jacobian_inverse_transposed: EvaluationType,
    /// Evaluation of the integration element
    pub integration_element: EvaluationType,
    /// Evaluation of the unit normal
    pub normal: EvaluationType,
}

impl CachingPolicy {
    /// Create a policy that uses the same evaluation type for every quantity
    pub fn uniform(evaluation: EvaluationType) -> Self {
        Self {
            jacobian_transposed: evaluation,
            jacobian_inverse_transposed: evaluation,
            integration_element: evaluation,
            normal: evaluation,
        }
    }

    /// Replace every `IsComputed` by `PreCompute`
    ///
    /// Used for mappings that are derived from another mapping, as supplied values only
    /// describe the mapping they were supplied for.
    pub fn without_supplied_values(&self) -> Self {
        let f = |e: EvaluationType| {
            if e == EvaluationType::IsComputed {
                EvaluationType::PreCompute
            } else {
                e
            }
        };
        Self {
            jacobian_transposed: f(self.jacobian_transposed),
            jacobian_inverse_transposed: f(self.jacobian_inverse_transposed),
            integration_element: f(self.integration_element),
            normal: f(self.normal),
        }
    }

    /// Does the policy use supplied values for any quantity?
    pub fn uses_supplied_values(&self) -> bool {
        [
            self.jacobian_transposed,
            self.jacobian_inverse_transposed,
            self.integration_element,
            self.normal,
        ]
        .contains(&EvaluationType::IsComputed)
    }
}

/// The state of a cached quantity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CacheState {
    /// No value has been computed
    NotComputed,
    /// The cached value is valid at every point
    Valid,
    /// A value is stored, but it was computed at another point or for other corners
    Stale,
}

/// The state of each cached quantity of a geometry mapping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CacheStates {
    /// State of the transposed Jacobian
    pub jacobian_transposed: CacheState,
    /// State of the inverse transposed Jacobian
    pub jacobian_inverse_transposed: CacheState,
    /// State of the integration element
    pub integration_element: CacheState,
    /// State of the unit normal
    pub normal: CacheState,
}

/// Values supplied by the caller for quantities with the `IsComputed` evaluation type
#[derive(Debug, Clone, Copy)]
pub struct SuppliedValues<T, const D: usize, const G: usize> {
    /// The transposed Jacobian
    pub jacobian_transposed: Option<[[T; G]; D]>,
    /// The inverse transposed Jacobian
    pub jacobian_inverse_transposed: Option<[[T; D]; G]>,
    /// The integration element
    pub integration_element: Option<T>,
    /// The unit normal
    pub normal: Option<[T; G]>,
}

impl<T, const D: usize, const G: usize> SuppliedValues<T, D, G> {
    /// Create new, with no values supplied
    pub fn new() -> Self {
        Self {
            jacobian_transposed: None,
            jacobian_inverse_transposed: None,
            integration_element: None,
            normal: None,
        }
    }
}

impl<T, const D: usize, const G: usize> Default for SuppliedValues<T, D, G> {
    fn default() -> Self {
        Self::new()
    }
}
