use thiserror::Error;

/// Failures a lookup caller can see.
///
/// The `Display` text is the user-facing message the HTTP layer puts in its
/// `{"error": ...}` body, so it is worded for end users rather than operators.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// The input had fewer than 8 digits once non-digits were stripped.
    #[error("Invalid barcode format. Please provide a numeric barcode with at least 8 digits.")]
    InvalidBarcode { input: String },

    /// Every configured data source missed.
    #[error("Product not found. The barcode may not be in the Open Food Facts database.")]
    ProductNotFound { barcode: String },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
