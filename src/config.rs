//! Provisioning configuration.
//!
//! All parameters the provisioner accepts live in [`CertConfig`], each with a
//! default suitable for local development. The CLI overrides individual
//! fields; library callers can build the struct directly.

use std::fmt;
use std::net::IpAddr;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::{CertGenError, Result};

/// Default RSA modulus size in bits.
pub const DEFAULT_KEY_BITS: usize = 4096;

/// Default certificate validity in days.
pub const DEFAULT_VALIDITY_DAYS: u32 = 365;

/// Default private key output path.
pub const DEFAULT_KEY_OUT: &str = "key.pem";

/// Default certificate output path.
pub const DEFAULT_CERT_OUT: &str = "cert.pem";

const MIN_KEY_BITS: usize = 2048;
const MAX_KEY_BITS: usize = 8192;
const MAX_VALIDITY_DAYS: u32 = 36500;

/// A single subjectAltName entry: a DNS name or an IP address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SanEntry {
    Dns(String),
    Ip(IpAddr),
}

impl FromStr for SanEntry {
    type Err = CertGenError;

    /// Parse a SAN entry. Anything that parses as an IP address becomes an
    /// IP entry; everything else must be a plausible DNS name.
    ///
    /// # Example
    ///
    /// ```
    /// use bridgecert::config::SanEntry;
    ///
    /// let dns: SanEntry = "localhost".parse().unwrap();
    /// let ip: SanEntry = "127.0.0.1".parse().unwrap();
    /// assert!(matches!(dns, SanEntry::Dns(_)));
    /// assert!(matches!(ip, SanEntry::Ip(_)));
    /// ```
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(CertGenError::InvalidParameter(
                "SAN entry cannot be empty".to_string(),
            ));
        }

        if let Ok(ip) = s.parse::<IpAddr>() {
            return Ok(SanEntry::Ip(ip));
        }

        if !is_plausible_dns_name(s) {
            return Err(CertGenError::InvalidParameter(format!(
                "Invalid SAN entry: '{}' is neither an IP address nor a DNS name",
                s
            )));
        }

        Ok(SanEntry::Dns(s.to_string()))
    }
}

impl fmt::Display for SanEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SanEntry::Dns(name) => write!(f, "DNS:{}", name),
            SanEntry::Ip(addr) => write!(f, "IP:{}", addr),
        }
    }
}

/// Accepts hostname labels plus a leading wildcard label.
fn is_plausible_dns_name(name: &str) -> bool {
    if name.len() > 253 {
        return false;
    }
    name.split('.').enumerate().all(|(i, label)| {
        if label == "*" {
            return i == 0;
        }
        !label.is_empty()
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
    })
}

/// Subject distinguished-name fields embedded in the certificate.
#[derive(Debug, Clone)]
pub struct SubjectFields {
    pub country: String,
    pub state: String,
    pub locality: String,
    pub organization: String,
    pub common_name: String,
}

impl Default for SubjectFields {
    fn default() -> Self {
        Self {
            country: "US".to_string(),
            state: "Development".to_string(),
            locality: "Development".to_string(),
            organization: "Encoder Bridge".to_string(),
            common_name: "localhost".to_string(),
        }
    }
}

/// Full configuration for one provisioning run.
#[derive(Debug, Clone)]
pub struct CertConfig {
    /// RSA modulus size in bits.
    pub key_bits: usize,

    /// Certificate validity, counted from generation time.
    pub validity_days: u32,

    /// Subject distinguished-name fields.
    pub subject: SubjectFields,

    /// subjectAltName entries, in the order they will appear.
    pub subject_alt_names: Vec<SanEntry>,

    /// Where the PEM private key is written.
    pub key_output_path: PathBuf,

    /// Where the PEM certificate is written.
    pub cert_output_path: PathBuf,

    /// Whether to encrypt the private key on disk. Not supported;
    /// requesting it is rejected during validation.
    pub encrypt_key: bool,
}

impl Default for CertConfig {
    fn default() -> Self {
        Self {
            key_bits: DEFAULT_KEY_BITS,
            validity_days: DEFAULT_VALIDITY_DAYS,
            subject: SubjectFields::default(),
            subject_alt_names: default_san_list(),
            key_output_path: PathBuf::from(DEFAULT_KEY_OUT),
            cert_output_path: PathBuf::from(DEFAULT_CERT_OUT),
            encrypt_key: false,
        }
    }
}

/// The SAN entries a local development certificate needs: localhost plus the
/// loopback and wildcard bind addresses.
pub fn default_san_list() -> Vec<SanEntry> {
    vec![
        SanEntry::Dns("localhost".to_string()),
        SanEntry::Ip(IpAddr::from([127, 0, 0, 1])),
        SanEntry::Ip(IpAddr::from([0, 0, 0, 0])),
    ]
}

impl CertConfig {
    /// Check that every parameter is inside the range the crypto backend
    /// accepts. Called before any key material is generated.
    pub fn validate(&self) -> Result<()> {
        if self.key_bits < MIN_KEY_BITS || self.key_bits > MAX_KEY_BITS {
            return Err(CertGenError::InvalidParameter(format!(
                "key_bits must be between {} and {}, got {}",
                MIN_KEY_BITS, MAX_KEY_BITS, self.key_bits
            )));
        }

        if self.validity_days == 0 || self.validity_days > MAX_VALIDITY_DAYS {
            return Err(CertGenError::InvalidParameter(format!(
                "validity_days must be between 1 and {}, got {}",
                MAX_VALIDITY_DAYS, self.validity_days
            )));
        }

        if self.subject.common_name.trim().is_empty() {
            return Err(CertGenError::InvalidParameter(
                "common name cannot be empty".to_string(),
            ));
        }

        if self.subject_alt_names.is_empty() {
            return Err(CertGenError::InvalidParameter(
                "at least one SAN entry is required".to_string(),
            ));
        }

        if self.encrypt_key {
            return Err(CertGenError::InvalidParameter(
                "encrypted private keys are not supported".to_string(),
            ));
        }

        Ok(())
    }
}

/// Parse a comma-separated SAN list (e.g., "localhost,127.0.0.1,0.0.0.0").
///
/// # Example
///
/// ```
/// use bridgecert::config::parse_san_list;
///
/// let sans = parse_san_list("localhost,127.0.0.1").unwrap();
/// assert_eq!(sans.len(), 2);
/// ```
pub fn parse_san_list(spec: &str) -> Result<Vec<SanEntry>> {
    spec.split(',').map(|part| part.parse()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_san_entry_parse_ip() {
        let entry: SanEntry = "127.0.0.1".parse().unwrap();
        assert_eq!(entry, SanEntry::Ip(IpAddr::from([127, 0, 0, 1])));
    }

    #[test]
    fn test_san_entry_parse_ipv6() {
        let entry: SanEntry = "::1".parse().unwrap();
        assert!(matches!(entry, SanEntry::Ip(IpAddr::V6(_))));
    }

    #[test]
    fn test_san_entry_parse_dns() {
        let entry: SanEntry = "bridge.local".parse().unwrap();
        assert_eq!(entry, SanEntry::Dns("bridge.local".to_string()));
    }

    #[test]
    fn test_san_entry_parse_wildcard() {
        let entry: SanEntry = "*.bridge.local".parse().unwrap();
        assert_eq!(entry, SanEntry::Dns("*.bridge.local".to_string()));
    }

    #[test]
    fn test_san_entry_parse_empty() {
        let result = "".parse::<SanEntry>();
        assert!(matches!(result, Err(CertGenError::InvalidParameter(_))));
    }

    #[test]
    fn test_san_entry_parse_garbage() {
        let result = "not a hostname!".parse::<SanEntry>();
        assert!(matches!(result, Err(CertGenError::InvalidParameter(_))));
    }

    #[test]
    fn test_parse_san_list() {
        let sans = parse_san_list("localhost,127.0.0.1,0.0.0.0").unwrap();
        assert_eq!(sans.len(), 3);
        assert_eq!(sans[0], SanEntry::Dns("localhost".to_string()));
        assert_eq!(sans[1], SanEntry::Ip(IpAddr::from([127, 0, 0, 1])));
        assert_eq!(sans[2], SanEntry::Ip(IpAddr::from([0, 0, 0, 0])));
    }

    #[test]
    fn test_parse_san_list_rejects_bad_entry() {
        let result = parse_san_list("localhost,,0.0.0.0");
        assert!(result.is_err());
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = CertConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.key_bits, 4096);
        assert_eq!(config.validity_days, 365);
        assert_eq!(config.subject.common_name, "localhost");
        assert_eq!(config.subject_alt_names.len(), 3);
    }

    #[test]
    fn test_validate_rejects_small_key() {
        let config = CertConfig {
            key_bits: 512,
            ..CertConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(CertGenError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_validate_rejects_zero_validity() {
        let config = CertConfig {
            validity_days: 0,
            ..CertConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_san_list() {
        let config = CertConfig {
            subject_alt_names: vec![],
            ..CertConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_key_encryption() {
        let config = CertConfig {
            encrypt_key: true,
            ..CertConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(CertGenError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_san_entry_display() {
        assert_eq!(
            SanEntry::Dns("localhost".to_string()).to_string(),
            "DNS:localhost"
        );
        assert_eq!(
            SanEntry::Ip(IpAddr::from([127, 0, 0, 1])).to_string(),
            "IP:127.0.0.1"
        );
    }
}
