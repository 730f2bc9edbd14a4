//! Cache key generation using SHA-256 hashes

use sha2::{Digest, Sha256};

/// Generate a deterministic cache key from a resource and its parameters.
///
/// The key is a SHA-256 hash of the resource name and sorted parameters, so
/// parameter order never produces a second entry for the same query, while
/// any parameter difference (a `productId`, a page number) does.
pub fn cache_key(resource: &str, params: &[(String, String)]) -> String {
    let mut hasher = Sha256::new();

    hasher.update(resource.as_bytes());
    hasher.update(b"|");

    let mut sorted_params: Vec<_> = params.iter().collect();
    sorted_params.sort();

    for (k, v) in sorted_params {
        hasher.update(k.as_bytes());
        hasher.update(b"=");
        hasher.update(v.as_bytes());
        hasher.update(b"&");
    }

    format!("{:x}", hasher.finalize())
}
