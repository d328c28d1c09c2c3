//! Errors
use super::ReferenceCellType;

/// Result type
pub type Result<T> = std::result::Result<T, Error>;

/// Reason why a point could not be mapped back to the reference cell
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InversionFailure {
    /// The Jacobian is singular at the current iterate
    #[error("singular Jacobian at iteration {iteration}")]
    SingularJacobian {
        /// The Newton iteration at which the singular Jacobian was found
        iteration: usize,
    },
    /// The Newton iteration did not reach the tolerance
    #[error("no convergence after {iterations} iterations")]
    NotConverged {
        /// The number of iterations that were run
        iterations: usize,
    },
}

/// Errors
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// No quadrature rule of the requested order can be generated
    #[error("quadrature of order {order} is not available on a {cell} (maximum order: {max_order})")]
    QuadratureOrderOutOfRange {
        /// The reference cell
        cell: ReferenceCellType,
        /// The requested order
        order: usize,
        /// The highest order available for this cell
        max_order: usize,
    },
    /// A point could not be mapped back to the reference cell
    #[error("mapping is not invertible: {0}")]
    MappingNotInvertible(InversionFailure),
    /// Input/output error
    #[cfg(feature = "serde")]
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// RON serialisation error
    #[cfg(feature = "serde")]
    #[error(transparent)]
    RonSerialize(#[from] ron::Error),
    /// RON deserialisation error
    #[cfg(feature = "serde")]
    #[error(transparent)]
    RonDeserialize(#[from] ron::error::SpannedError),
    /// Deserialised data that does not describe a valid object
    #[cfg(feature = "serde")]
    #[error("invalid data: {0}")]
    InvalidData(String),
}

impl From<InversionFailure> for Error {
    fn from(reason: InversionFailure) -> Self {
        Error::MappingNotInvertible(reason)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_error_display() {
        let e = Error::QuadratureOrderOutOfRange {
            cell: ReferenceCellType::Triangle,
            order: 13,
            max_order: 12,
        };
        let s = format!("{e}");
        assert!(s.contains("13"));
        assert!(s.contains("triangle"));
        assert!(s.contains("12"));

        let e: Error = InversionFailure::NotConverged { iterations: 4 }.into();
        assert!(format!("{e}").contains("4 iterations"));
        assert_eq!(
            format!("{}", InversionFailure::SingularJacobian { iteration: 2 }),
            "singular Jacobian at iteration 2"
        );
    }
}
