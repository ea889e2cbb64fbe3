use std::fmt;

/// Result type for lander-dqn operations
pub type Result<T> = std::result::Result<T, LanderError>;

/// Main error type for the crate
#[derive(Debug, Clone)]
pub enum LanderError {
    /// Observation or target does not match the configured shape
    DimensionMismatch {
        expected: String,
        actual: String,
    },

    /// Invalid configuration or constructor argument
    InvalidParameter {
        name: String,
        reason: String,
    },

    /// Action index outside the discrete action set
    InvalidAction {
        action: usize,
        num_actions: usize,
    },

    /// IO errors (file operations)
    IoError(String),

    /// Serialization/deserialization errors
    SerializationError(String),

    /// Numerical computation errors
    NumericalError(String),

    /// Failure reported by the environment collaborator
    EnvironmentError(String),
}

impl fmt::Display for LanderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LanderError::DimensionMismatch { expected, actual } => {
                write!(f, "Dimension mismatch: expected {}, got {}", expected, actual)
            }
            LanderError::InvalidParameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            }
            LanderError::InvalidAction { action, num_actions } => {
                write!(f, "Invalid action {}: must be less than {}", action, num_actions)
            }
            LanderError::IoError(msg) => write!(f, "IO error: {}", msg),
            LanderError::SerializationError(msg) => write!(f, "Serialization error: {}", msg),
            LanderError::NumericalError(msg) => write!(f, "Numerical error: {}", msg),
            LanderError::EnvironmentError(msg) => write!(f, "Environment error: {}", msg),
        }
    }
}

impl std::error::Error for LanderError {}

// Conversion from std::io::Error
impl From<std::io::Error> for LanderError {
    fn from(err: std::io::Error) -> Self {
        LanderError::IoError(err.to_string())
    }
}

// Conversion from bincode::Error
impl From<bincode::Error> for LanderError {
    fn from(err: bincode::Error) -> Self {
        LanderError::SerializationError(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for LanderError {
    fn from(err: serde_json::Error) -> Self {
        LanderError::SerializationError(err.to_string())
    }
}

// Helper functions for common error patterns
impl LanderError {
    pub fn dimension_mismatch<S: Into<String>>(expected: S, actual: S) -> Self {
        LanderError::DimensionMismatch {
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    pub fn invalid_parameter<S: Into<String>>(name: S, reason: S) -> Self {
        LanderError::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }
}
