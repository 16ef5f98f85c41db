//! Certificate export — pretty JSON written under the user data directory.

use std::path::{Path, PathBuf};

use anyhow::Result;
use museum_core::Certificate;

/// Default export path:
/// `<data_dir>/omsk-museum/certificate-<stamp>-<fingerprint>.json`.
pub fn default_certificate_path(cert: &Certificate) -> PathBuf {
    let stamp = cert.issued_at.format("%Y%m%d_%H%M%S");
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("omsk-museum")
        .join(format!("certificate-{stamp}-{}.json", cert.fingerprint.0))
}

/// Write the certificate to disk. Creates parent directories if needed.
pub fn write_certificate(path: &Path, cert: &Certificate) -> Result<PathBuf> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(cert)?;
    std::fs::write(path, json)?;
    Ok(path.to_path_buf())
}
