//! Researcher certificate — issued when every section has been visited.
//!
//! The certificate carries a deterministic fingerprint: canonical JSON of
//! the issue timestamp and visited sections, hashed with blake3. The same
//! visit at the same moment always produces the same fingerprint.

use crate::domain::SectionId;
use crate::exhibit::Exhibit;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Campaign hashtag printed on the certificate.
pub const QUEST_HASHTAG: &str = "#ОмскДостоевского";

/// Short hex fingerprint identifying a certificate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertificateFingerprint(pub String);

impl CertificateFingerprint {
    fn compute(issued_at: NaiveDateTime, sections: &[SectionId]) -> Self {
        // serde_json over fixed-shape values produces deterministic output
        let canonical = serde_json::json!({
            "issued_at": issued_at.format("%Y-%m-%dT%H:%M:%S").to_string(),
            "sections": sections,
        });
        let hash = blake3::hash(canonical.to_string().as_bytes());
        let hex = hash.to_hex();
        Self(hex.as_str()[..16].to_owned())
    }
}

/// Proof of a completed exploration of the exhibit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Certificate {
    pub title: String,
    pub issued_at: NaiveDateTime,
    pub sections: Vec<SectionId>,
    pub hashtag: String,
    pub fingerprint: CertificateFingerprint,
}

impl Certificate {
    /// Issue a certificate for a completed exhibit, stamped with the
    /// current local time. Returns `None` while any section is unvisited.
    pub fn issue(exhibit: &Exhibit) -> Option<Certificate> {
        Self::issue_at(exhibit, chrono::Local::now().naive_local())
    }

    /// Issue with an explicit timestamp.
    pub fn issue_at(exhibit: &Exhibit, issued_at: NaiveDateTime) -> Option<Certificate> {
        if !exhibit.is_complete() {
            return None;
        }
        let sections = exhibit.visited_sections();
        let fingerprint = CertificateFingerprint::compute(issued_at, &sections);
        Some(Certificate {
            title: "Сертификат исследователя литературного наследия Достоевского".into(),
            issued_at,
            sections,
            hashtag: QUEST_HASHTAG.into(),
            fingerprint,
        })
    }
}
