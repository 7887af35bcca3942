//! Error types for the certificate provisioner.
//!
//! All errors implement `std::error::Error` and are designed to provide
//! clear, actionable error messages. Failures surface immediately to the
//! caller; there are no retries.

use std::path::PathBuf;

use thiserror::Error;

/// The main error type for provisioning operations.
#[derive(Error, Debug)]
pub enum CertGenError {
    /// The in-process cryptography backend failed or rejected the request.
    #[error("Crypto backend error: {0}")]
    CryptoError(String),

    /// An output file could not be written.
    #[error("Failed to write {}: {source}", path.display())]
    FileWriteError {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A configuration value is outside the accepted range.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Certificate construction or encoding failed.
    #[error("Certificate error: {0}")]
    CertificateError(String),

    /// PEM encoding/decoding error.
    #[error("PEM error: {0}")]
    PemError(String),
}

/// A specialized Result type for provisioning operations.
pub type Result<T> = std::result::Result<T, CertGenError>;
