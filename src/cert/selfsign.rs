//! Self-signed certificate generation.
//!
//! Produces the in-memory key/certificate pair; writing the artifacts to
//! disk is handled by [`crate::provision`].

use rcgen::Certificate;

use crate::cert::builder::build_params;
use crate::config::CertConfig;
use crate::error::{CertGenError, Result};
use crate::key::{generate_rsa_key, key_to_pkcs8_pem, key_to_rcgen};

/// A freshly generated private key and its self-signed certificate.
pub struct SelfSignedPair {
    /// PKCS#8 PEM encoding of the private key.
    pub key_pem: String,

    /// PEM encoding of the certificate.
    pub cert_pem: String,

    /// DER encoding of the certificate, kept for fingerprinting.
    pub cert_der: Vec<u8>,
}

/// Generate an RSA key pair and a certificate self-signed with it.
///
/// The certificate's public key is by construction the public component of
/// the returned private key. Each call produces fresh key material.
///
/// # Example
///
/// ```rust,no_run
/// use bridgecert::cert::selfsign::create_self_signed;
/// use bridgecert::config::CertConfig;
///
/// # fn example() -> bridgecert::error::Result<()> {
/// let pair = create_self_signed(&CertConfig::default())?;
/// assert!(pair.cert_pem.contains("BEGIN CERTIFICATE"));
/// assert!(pair.key_pem.contains("BEGIN PRIVATE KEY"));
/// # Ok(())
/// # }
/// ```
pub fn create_self_signed(config: &CertConfig) -> Result<SelfSignedPair> {
    config.validate()?;

    let key = generate_rsa_key(config.key_bits)?;
    let key_pem = key_to_pkcs8_pem(&key)?;
    let key_pair = key_to_rcgen(&key)?;

    let mut params = build_params(config);
    params.key_pair = Some(key_pair);

    let cert = Certificate::from_params(params).map_err(|e| {
        CertGenError::CertificateError(format!("Failed to self-sign certificate: {}", e))
    })?;

    let cert_pem = cert.serialize_pem().map_err(|e| {
        CertGenError::CertificateError(format!("Failed to encode certificate: {}", e))
    })?;
    let cert_der = cert.serialize_der().map_err(|e| {
        CertGenError::CertificateError(format!("Failed to encode certificate: {}", e))
    })?;

    Ok(SelfSignedPair {
        key_pem,
        cert_pem,
        cert_der,
    })
}
