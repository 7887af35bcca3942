//! End-to-end provisioning: generate the key pair and certificate, then
//! write both artifacts to their configured paths.

use std::path::PathBuf;

use crate::cert::inspect::sha256_fingerprint;
use crate::cert::selfsign::create_self_signed;
use crate::config::CertConfig;
use crate::error::Result;
use crate::output::{write_key_pem_atomic, write_pem_atomic};

/// Where the artifacts landed, plus the certificate fingerprint for the
/// completion summary.
#[derive(Debug)]
pub struct ProvisionedFiles {
    pub key_path: PathBuf,
    pub cert_path: PathBuf,
    pub fingerprint_sha256: String,
}

/// Generate a self-signed certificate and write the key and certificate
/// files.
///
/// Each file is written atomically, but the pair is not transactional: if
/// the certificate write fails the key file has already been replaced.
///
/// # Example
///
/// ```rust,no_run
/// use bridgecert::config::CertConfig;
/// use bridgecert::provision::generate_self_signed_cert;
///
/// # fn example() -> bridgecert::error::Result<()> {
/// let files = generate_self_signed_cert(&CertConfig::default())?;
/// println!("key: {}", files.key_path.display());
/// println!("cert: {}", files.cert_path.display());
/// # Ok(())
/// # }
/// ```
pub fn generate_self_signed_cert(config: &CertConfig) -> Result<ProvisionedFiles> {
    let pair = create_self_signed(config)?;

    write_key_pem_atomic(&config.key_output_path, &pair.key_pem)?;
    write_pem_atomic(&config.cert_output_path, &pair.cert_pem)?;

    Ok(ProvisionedFiles {
        key_path: config.key_output_path.clone(),
        cert_path: config.cert_output_path.clone(),
        fingerprint_sha256: sha256_fingerprint(&pair.cert_der),
    })
}
