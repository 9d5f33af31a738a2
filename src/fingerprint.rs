use sha2::{Digest, Sha256};

/// Content fingerprint for a chart's dataset.
///
/// A SHA-256 digest over the serde_json serialization of both axes.
/// Identical inputs always yield identical fingerprints, and comparing
/// two fingerprints is a string equality, far cheaper than a rebuild.
pub fn fingerprint(labels: &[String], values: &[Option<f64>]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(serde_json::to_string(labels).unwrap_or_default());
    hasher.update(b":");
    hasher.update(serde_json::to_string(values).unwrap_or_default());
    let digest = hasher.finalize();
    let mut out = String::with_capacity(digest.len() * 2);
    for byte in digest {
        out.push_str(&format!("{byte:02x}"));
    }
    out
}
