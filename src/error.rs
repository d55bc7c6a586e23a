// Copyright 2026 djsim Contributors
// SPDX-License-Identifier: Apache-2.0

//! Error types for the simulator.

use std::fmt;

/// Result type alias for simulator operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Simulator error types.
#[derive(Debug)]
pub enum Error {
    /// Configuration error
    Config(String),
    /// Validation error
    Validation(ValidationError),
    /// Numerical error during evolution
    Numerical(NumericalError),
    /// IO error
    Io(std::io::Error),
    /// Serialization error
    Serialization(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
            Error::Validation(e) => write!(f, "Validation error: {}", e),
            Error::Numerical(e) => write!(f, "Numerical error: {}", e),
            Error::Io(e) => write!(f, "IO error: {}", e),
            Error::Serialization(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            Error::Validation(e) => Some(e),
            Error::Numerical(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}

impl From<ValidationError> for Error {
    fn from(e: ValidationError) -> Self {
        Error::Validation(e)
    }
}

impl From<NumericalError> for Error {
    fn from(e: NumericalError) -> Self {
        Error::Numerical(e)
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(e: serde_yaml::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

/// Input validation errors.
#[derive(Debug)]
pub enum ValidationError {
    /// Field validation failed
    Field { field: String, message: String },
    /// Matrix has the wrong shape
    Shape {
        expected: (usize, usize),
        actual: (usize, usize),
    },
    /// Matrix contains a NaN or Inf entry
    NonFiniteEntry { row: usize, col: usize },
    /// Physics constraint violated
    PhysicsConstraint(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Field { field, message } => {
                write!(f, "Field '{}': {}", field, message)
            }
            ValidationError::Shape { expected, actual } => {
                write!(
                    f,
                    "Matrix shape mismatch: expected {} x {}, got {} x {}",
                    expected.0, expected.1, actual.0, actual.1
                )
            }
            ValidationError::NonFiniteEntry { row, col } => {
                write!(f, "Matrix entry ({}, {}) is not finite", row, col)
            }
            ValidationError::PhysicsConstraint(msg) => {
                write!(f, "Physics constraint violated: {}", msg)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Numerical failures during the evolution pipeline.
///
/// These indicate the simulated state left the regime where the discrete
/// model is meaningful; they abort the run before anything is reported.
#[derive(Debug)]
pub enum NumericalError {
    /// Trace of the density matrix vanished, renormalization would divide by ~0
    VanishingTrace { trace: f64 },
    /// A computed matrix picked up NaN/Inf entries
    NonFinite { stage: String },
}

impl fmt::Display for NumericalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericalError::VanishingTrace { trace } => {
                write!(
                    f,
                    "Density matrix trace {:.3e} too close to zero for renormalization",
                    trace
                )
            }
            NumericalError::NonFinite { stage } => {
                write!(f, "Non-finite values produced during {}", stage)
            }
        }
    }
}

impl std::error::Error for NumericalError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as StdError;

    #[test]
    fn test_error_display_config() {
        let e = Error::Config("bad coupling".into());
        assert_eq!(e.to_string(), "Configuration error: bad coupling");
    }

    #[test]
    fn test_error_display_validation() {
        let e = Error::Validation(ValidationError::PhysicsConstraint("gamma < 0".into()));
        assert_eq!(
            e.to_string(),
            "Validation error: Physics constraint violated: gamma < 0"
        );
    }

    #[test]
    fn test_error_display_numerical() {
        let e = Error::Numerical(NumericalError::VanishingTrace { trace: 1e-16 });
        assert_eq!(
            e.to_string(),
            "Numerical error: Density matrix trace 1.000e-16 too close to zero for renormalization"
        );
    }

    #[test]
    fn test_validation_error_display_shape() {
        let e = ValidationError::Shape {
            expected: (4, 4),
            actual: (2, 3),
        };
        assert_eq!(
            e.to_string(),
            "Matrix shape mismatch: expected 4 x 4, got 2 x 3"
        );
    }

    #[test]
    fn test_validation_error_display_non_finite() {
        let e = ValidationError::NonFiniteEntry { row: 1, col: 2 };
        assert_eq!(e.to_string(), "Matrix entry (1, 2) is not finite");
    }

    #[test]
    fn test_validation_error_display_field() {
        let e = ValidationError::Field {
            field: "steps".into(),
            message: "must be > 0".into(),
        };
        assert_eq!(e.to_string(), "Field 'steps': must be > 0");
    }

    #[test]
    fn test_numerical_error_display_non_finite() {
        let e = NumericalError::NonFinite {
            stage: "damping step 3".into(),
        };
        assert_eq!(
            e.to_string(),
            "Non-finite values produced during damping step 3"
        );
    }

    #[test]
    fn test_error_source_io() {
        let e = Error::Io(std::io::Error::other("disk"));
        assert!(e.source().is_some());
    }

    #[test]
    fn test_error_source_validation() {
        let e = Error::Validation(ValidationError::PhysicsConstraint("x".into()));
        assert!(e.source().is_some());
    }

    #[test]
    fn test_error_source_numerical() {
        let e = Error::Numerical(NumericalError::VanishingTrace { trace: 0.0 });
        assert!(e.source().is_some());
    }

    #[test]
    fn test_error_source_none_for_config() {
        let e = Error::Config("x".into());
        assert!(e.source().is_none());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let e: Error = io_err.into();
        assert!(matches!(e, Error::Io(_)));
    }

    #[test]
    fn test_from_validation_error() {
        let ve = ValidationError::NonFiniteEntry { row: 0, col: 0 };
        let e: Error = ve.into();
        assert!(matches!(e, Error::Validation(_)));
    }

    #[test]
    fn test_from_numerical_error() {
        let ne = NumericalError::VanishingTrace { trace: 0.0 };
        let e: Error = ne.into();
        assert!(matches!(e, Error::Numerical(_)));
    }

    #[test]
    fn test_from_serde_yaml_error() {
        let yaml_err = serde_yaml::from_str::<serde_yaml::Value>("{{{{").unwrap_err();
        let e: Error = yaml_err.into();
        assert!(matches!(e, Error::Serialization(_)));
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{bad}").unwrap_err();
        let e: Error = json_err.into();
        assert!(matches!(e, Error::Serialization(_)));
    }
}
