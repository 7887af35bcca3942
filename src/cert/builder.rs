//! Certificate parameter construction.
//!
//! Translates a [`CertConfig`](crate::config::CertConfig) into the rcgen
//! parameter set for a self-signed TLS server certificate.

use rcgen::{CertificateParams, DistinguishedName, DnType, IsCa, SanType};
use time::{Duration, OffsetDateTime};

use crate::config::{CertConfig, SanEntry, SubjectFields};

/// Build the subject distinguished name from the configured fields.
///
/// Blank fields are omitted rather than embedded as empty attributes.
pub fn build_distinguished_name(subject: &SubjectFields) -> DistinguishedName {
    let mut dn = DistinguishedName::new();

    for (dn_type, value) in [
        (DnType::CountryName, &subject.country),
        (DnType::StateOrProvinceName, &subject.state),
        (DnType::LocalityName, &subject.locality),
        (DnType::OrganizationName, &subject.organization),
        (DnType::CommonName, &subject.common_name),
    ] {
        if !value.trim().is_empty() {
            dn.push(dn_type, value.trim());
        }
    }

    dn
}

/// Convert the configured SAN entries into rcgen's representation,
/// preserving order.
pub fn build_san_list(sans: &[SanEntry]) -> Vec<SanType> {
    sans.iter()
        .map(|entry| match entry {
            SanEntry::Dns(name) => SanType::DnsName(name.clone()),
            SanEntry::Ip(addr) => SanType::IpAddress(*addr),
        })
        .collect()
}

/// Set the validity window: notBefore is now, notAfter is now plus the
/// configured day count.
pub fn set_validity(params: &mut CertificateParams, days: u32) {
    let not_before = OffsetDateTime::now_utc();
    params.not_before = not_before;
    params.not_after = not_before + Duration::days(i64::from(days));
}

/// Assemble the full parameter set for a self-signed TLS server certificate.
pub fn build_params(config: &CertConfig) -> CertificateParams {
    let mut params = CertificateParams::default();

    params.distinguished_name = build_distinguished_name(&config.subject);
    params.subject_alt_names = build_san_list(&config.subject_alt_names);
    params.is_ca = IsCa::NoCa;
    params.key_usages = vec![
        rcgen::KeyUsagePurpose::DigitalSignature,
        rcgen::KeyUsagePurpose::KeyEncipherment,
    ];
    params.extended_key_usages = vec![rcgen::ExtendedKeyUsagePurpose::ServerAuth];
    params.alg = &rcgen::PKCS_RSA_SHA256;

    set_validity(&mut params, config.validity_days);

    params
}
