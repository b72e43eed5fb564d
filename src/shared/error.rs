use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the `gc-orders` binary.
///
/// Scripts driving the CLI (e.g. the nightly shipping job) use these to tell
/// a missing record apart from a broken installation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Command completed
    Success = 0,
    /// The requested order or a referenced product does not exist
    NotFound = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Any other failure (storage, configuration, validation, ...)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Picks the exit code for an error surfaced by the application core.
    pub fn for_error(error: &anyhow::Error) -> Self {
        match error.downcast_ref::<OrderError>() {
            Some(order_error) if order_error.is_not_found() => ExitCode::NotFound,
            _ => ExitCode::ApplicationError,
        }
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::NotFound => write!(f, "Not Found (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Errors raised by the order slice.
///
/// Propagated inside `anyhow::Error` so adapters can attach context while the
/// binary can still recover the variant for exit-code mapping.
#[derive(Debug, Error)]
pub enum OrderError {
    #[error("Order not found: {order_id}")]
    OrderNotFound { order_id: String },

    #[error("Product not found: {product_id}\n\n💡 Hint: Check the product catalog with `gc-orders products`")]
    ProductNotFound { product_id: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Invalid shipping window: start {start} must be before end {end}")]
    InvalidShippingWindow { start: String, end: String },

    #[error("Storage error: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the data file is valid JSON and writable")]
    StorageError { path: PathBuf, details: String },

    #[error("Invalid config file: {path}\nDetails: {details}")]
    ConfigError { path: PathBuf, details: String },
}

impl OrderError {
    /// True for the NotFound family (missing order or missing product).
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            OrderError::OrderNotFound { .. } | OrderError::ProductNotFound { .. }
        )
    }

    pub fn validation(message: impl Into<String>) -> Self {
        OrderError::Validation {
            message: message.into(),
        }
    }
}
