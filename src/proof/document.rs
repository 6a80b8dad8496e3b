//! Fake document and location-log producers.

use super::fakedata;
use chrono::{SecondsFormat, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Document kinds a proof can masquerade as.
const DOC_TYPES: &[&str] = &["Medical Certificate", "Official Letter", "Receipt"];

/// A fabricated "official document" supporting an excuse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentProof {
    /// Document kind, e.g. "Medical Certificate".
    pub title: String,
    /// Issue date, `YYYY-MM-DD`.
    pub date: String,
    /// Bearer name.
    pub name: String,
    /// Free-text body referencing the excuse context.
    pub details: String,
    /// Signing authority; medical certificates get an ", MD" suffix.
    pub signature: String,
}

/// A fabricated location-verification record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationLog {
    /// Capture instant, RFC 3339 in UTC.
    pub timestamp: String,
    pub latitude: f64,
    pub longitude: f64,
    pub address: String,
}

/// Builds a document proof for the given excuse context.
pub fn generate_document(rng: &mut impl Rng, excuse_type: &str) -> DocumentProof {
    let title = DOC_TYPES[rng.gen_range(0..DOC_TYPES.len())].to_string();
    let signer = fakedata::full_name(rng);
    let signature = if title == "Medical Certificate" {
        format!("{}, MD", signer)
    } else {
        signer
    };

    DocumentProof {
        date: Utc::now().format("%Y-%m-%d").to_string(),
        name: fakedata::full_name(rng),
        details: format!(
            "This document certifies that the bearer was unable to attend due to {}.",
            excuse_type
        ),
        signature,
        title,
    }
}

/// Builds a location log stamped with the current instant.
pub fn generate_location_log(rng: &mut impl Rng) -> LocationLog {
    LocationLog {
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true),
        latitude: fakedata::latitude(rng),
        longitude: fakedata::longitude(rng),
        address: fakedata::street_address(rng),
    }
}
