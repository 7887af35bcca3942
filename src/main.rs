//! bridgecert CLI.
//!
//! Generates a self-signed TLS certificate and private key for local
//! encoder-bridge development. All flags have defaults, so a bare
//! `bridgecert` produces `key.pem` and `cert.pem` for localhost.

use std::path::PathBuf;

use clap::Parser;

use bridgecert::config::{
    default_san_list, CertConfig, SanEntry, SubjectFields, DEFAULT_CERT_OUT, DEFAULT_KEY_OUT,
};
use bridgecert::error::Result;
use bridgecert::provision::generate_self_signed_cert;

#[derive(Parser)]
#[command(name = "bridgecert")]
#[command(about = "Generate a self-signed TLS certificate for local development", long_about = None)]
struct Cli {
    /// Private key output path
    #[arg(long, default_value = DEFAULT_KEY_OUT)]
    key_out: PathBuf,

    /// Certificate output path
    #[arg(long, default_value = DEFAULT_CERT_OUT)]
    cert_out: PathBuf,

    /// Certificate validity in days
    #[arg(long, default_value_t = 365)]
    days: u32,

    /// RSA key size in bits
    #[arg(long, default_value_t = 4096)]
    key_bits: usize,

    /// Subject alternative names (DNS names or IP addresses); may be
    /// repeated or comma-separated. Default: localhost,127.0.0.1,0.0.0.0
    #[arg(long = "san", value_delimiter = ',')]
    sans: Vec<String>,

    /// Subject common name
    #[arg(long, default_value = "localhost")]
    common_name: String,

    /// Subject country
    #[arg(long, default_value = "US")]
    country: String,

    /// Subject state or province
    #[arg(long, default_value = "Development")]
    state: String,

    /// Subject locality
    #[arg(long, default_value = "Development")]
    locality: String,

    /// Subject organization
    #[arg(long, default_value = "Encoder Bridge")]
    organization: String,
}

impl Cli {
    fn into_config(self) -> Result<CertConfig> {
        let subject_alt_names = if self.sans.is_empty() {
            default_san_list()
        } else {
            self.sans
                .iter()
                .map(|s| s.parse::<SanEntry>())
                .collect::<Result<Vec<_>>>()?
        };

        Ok(CertConfig {
            key_bits: self.key_bits,
            validity_days: self.days,
            subject: SubjectFields {
                country: self.country,
                state: self.state,
                locality: self.locality,
                organization: self.organization,
                common_name: self.common_name,
            },
            subject_alt_names,
            key_output_path: self.key_out,
            cert_output_path: self.cert_out,
            encrypt_key: false,
        })
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.into_config()?;
    config.validate()?;

    for path in [&config.key_output_path, &config.cert_output_path] {
        if path.exists() {
            println!("Replacing existing file: {}", path.display());
        }
    }

    println!(
        "Generating {}-bit RSA key and self-signed certificate (CN={}, {} days)...",
        config.key_bits, config.subject.common_name, config.validity_days
    );

    let files = generate_self_signed_cert(&config)?;

    println!("✓ Private key: {}", files.key_path.display());
    println!("✓ Certificate: {}", files.cert_path.display());
    println!("  Subject alternative names:");
    for san in &config.subject_alt_names {
        println!("    {}", san);
    }
    println!("  SHA-256 fingerprint: {}", files.fingerprint_sha256);

    Ok(())
}
