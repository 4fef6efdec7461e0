//! Error types for the calculator

use thiserror::Error;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Errors raised by the calculator and its front ends
#[derive(Debug, Error)]
pub enum CalcError {
    /// Division by zero attempted during compute
    #[error("Cannot divide by zero")]
    DivisionByZero,

    /// An operand could not be read as a number
    #[error("Invalid operand: {0:?}")]
    InvalidOperand(String),

    /// Configuration could not be loaded or failed validation
    #[error("Configuration error: {message}")]
    Config {
        /// Error message
        message: String,
    },

    /// A view failed to render or notify
    #[error("View error: {message}")]
    View {
        /// Error message
        message: String,
    },

    /// IO error from the terminal front end
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CalcError {
    /// Create an invalid operand error
    #[must_use]
    pub fn invalid_operand(text: impl Into<String>) -> Self {
        Self::InvalidOperand(text.into())
    }

    /// Create a configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a view error
    #[must_use]
    pub fn view(message: impl Into<String>) -> Self {
        Self::View {
            message: message.into(),
        }
    }

    /// Whether the user must be told about this error
    ///
    /// Invalid operands are recovered silently by aborting the transition.
    #[must_use]
    pub const fn is_user_visible(&self) -> bool {
        matches!(self, Self::DivisionByZero)
    }
}
