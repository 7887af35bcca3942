//! bridgecert: self-signed TLS certificate provisioner.
//!
//! This library generates an RSA key pair and a self-signed X.509
//! certificate for serving the encoder bridge over HTTPS/WSS during local
//! development, and writes both as PEM files. It is the programmatic face of
//! the `bridgecert` CLI:
//!
//! - Configure subject fields, SAN entries, key size, and validity
//! - Generate the key with the pure-Rust `rsa` crate and self-sign with rcgen
//! - Write artifacts atomically, the key with restrictive permissions
//! - Parse the result back for verification and summaries
//!
//! All operations return `Result` types with comprehensive error handling -
//! no `unwrap()` or panic outside tests.
//!
//! # Example
//!
//! ```rust,no_run
//! use bridgecert::config::CertConfig;
//! use bridgecert::provision::generate_self_signed_cert;
//!
//! fn example() -> bridgecert::error::Result<()> {
//!     let files = generate_self_signed_cert(&CertConfig::default())?;
//!     println!("wrote {} and {}", files.key_path.display(), files.cert_path.display());
//!     Ok(())
//! }
//! ```

pub mod cert;
pub mod config;
pub mod error;
pub mod key;
pub mod output;
pub mod provision;

// Re-export commonly used types
pub use error::{CertGenError, Result};
