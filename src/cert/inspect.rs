//! Inspection of generated certificates.
//!
//! Parses a certificate back out of its PEM encoding with x509-parser and
//! extracts the fields the CLI summary and the test suite care about:
//! subject common name, SAN entries, and the validity window.

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use sha2::{Digest, Sha256};
use x509_parser::certificate::X509Certificate;
use x509_parser::extensions::GeneralName;
use x509_parser::oid_registry::OID_X509_COMMON_NAME;
use x509_parser::prelude::FromDer;

use crate::error::{CertGenError, Result};

/// The fields extracted from a parsed certificate.
#[derive(Debug)]
pub struct CertSummary {
    pub common_name: Option<String>,
    pub dns_names: Vec<String>,
    pub ip_addresses: Vec<IpAddr>,
    /// notBefore as a Unix timestamp in seconds.
    pub not_before: i64,
    /// notAfter as a Unix timestamp in seconds.
    pub not_after: i64,
}

/// Extract the DER-encoded certificate from a PEM string.
pub fn cert_der_from_pem(pem_str: &str) -> Result<Vec<u8>> {
    let pem = pem::parse(pem_str)
        .map_err(|e| CertGenError::PemError(format!("Failed to parse PEM: {}", e)))?;

    if pem.tag() != "CERTIFICATE" {
        return Err(CertGenError::PemError(format!(
            "Expected CERTIFICATE, got {}",
            pem.tag()
        )));
    }

    Ok(pem.contents().to_vec())
}

/// Parse a DER-encoded certificate and extract the summary fields.
pub fn summarize_der(der: &[u8]) -> Result<CertSummary> {
    let (_, cert) = X509Certificate::from_der(der)
        .map_err(|e| CertGenError::CertificateError(format!("Failed to parse certificate: {}", e)))?;

    let (dns_names, ip_addresses) = extract_san(&cert)?;

    Ok(CertSummary {
        common_name: extract_common_name(&cert),
        dns_names,
        ip_addresses,
        not_before: cert.validity().not_before.timestamp(),
        not_after: cert.validity().not_after.timestamp(),
    })
}

/// Convenience wrapper: parse a PEM certificate and summarize it.
pub fn summarize_pem(pem_str: &str) -> Result<CertSummary> {
    let der = cert_der_from_pem(pem_str)?;
    summarize_der(&der)
}

/// Hex-encoded SHA-256 fingerprint of a DER-encoded certificate.
pub fn sha256_fingerprint(der: &[u8]) -> String {
    hex::encode(Sha256::digest(der))
}

fn extract_common_name(cert: &X509Certificate) -> Option<String> {
    for rdn in cert.subject().iter() {
        for attr in rdn.iter() {
            if attr.attr_type() == &OID_X509_COMMON_NAME {
                if let Ok(cn) = attr.as_str() {
                    return Some(cn.to_string());
                }
            }
        }
    }
    None
}

fn extract_san(cert: &X509Certificate) -> Result<(Vec<String>, Vec<IpAddr>)> {
    let mut dns_names = Vec::new();
    let mut ip_addresses = Vec::new();

    let san_ext = cert
        .subject_alternative_name()
        .map_err(|e| CertGenError::CertificateError(format!("Malformed SAN extension: {}", e)))?;

    if let Some(san_ext) = san_ext {
        for name in &san_ext.value.general_names {
            match name {
                GeneralName::DNSName(dns) => dns_names.push((*dns).to_string()),
                GeneralName::IPAddress(octets) => ip_addresses.push(ip_from_octets(octets)?),
                // Other GeneralName forms are never produced here.
                _ => {}
            }
        }
    }

    Ok((dns_names, ip_addresses))
}

fn ip_from_octets(octets: &[u8]) -> Result<IpAddr> {
    match octets.len() {
        4 => {
            let bytes: [u8; 4] = octets.try_into().expect("length checked");
            Ok(IpAddr::V4(Ipv4Addr::from(bytes)))
        }
        16 => {
            let bytes: [u8; 16] = octets.try_into().expect("length checked");
            Ok(IpAddr::V6(Ipv6Addr::from(bytes)))
        }
        n => Err(CertGenError::CertificateError(format!(
            "SAN IP address has invalid length {}",
            n
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cert::selfsign::create_self_signed;
    use crate::config::CertConfig;

    fn generated_summary() -> CertSummary {
        let config = CertConfig {
            key_bits: 2048,
            ..CertConfig::default()
        };
        let pair = create_self_signed(&config).unwrap();
        summarize_pem(&pair.cert_pem).unwrap()
    }

    #[test]
    fn test_cert_der_from_pem_rejects_garbage() {
        let result = cert_der_from_pem("not a valid pem");
        assert!(matches!(result, Err(CertGenError::PemError(_))));
    }

    #[test]
    fn test_cert_der_from_pem_rejects_wrong_tag() {
        let pem = pem::encode(&pem::Pem::new("PRIVATE KEY", vec![0u8; 8]));
        let result = cert_der_from_pem(&pem);
        assert!(matches!(result, Err(CertGenError::PemError(_))));
    }

    #[test]
    fn test_summarize_common_name() {
        let summary = generated_summary();
        assert_eq!(summary.common_name.as_deref(), Some("localhost"));
    }

    #[test]
    fn test_summarize_san_entries() {
        let summary = generated_summary();

        assert_eq!(summary.dns_names, vec!["localhost".to_string()]);
        assert_eq!(summary.ip_addresses.len(), 2);
        assert!(summary
            .ip_addresses
            .contains(&IpAddr::from([127, 0, 0, 1])));
        assert!(summary.ip_addresses.contains(&IpAddr::from([0, 0, 0, 0])));
    }

    #[test]
    fn test_summarize_validity_window() {
        let summary = generated_summary();
        let window = summary.not_after - summary.not_before;
        assert_eq!(window, 365 * 24 * 60 * 60);
    }

    #[test]
    fn test_sha256_fingerprint() {
        let fp = sha256_fingerprint(b"test");
        assert_eq!(fp.len(), 64);
        // Deterministic
        assert_eq!(fp, sha256_fingerprint(b"test"));
    }
}
