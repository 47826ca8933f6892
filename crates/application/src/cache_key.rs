use dnscheck_domain::RecordType;
use sha2::{Digest, Sha256};
use std::fmt::Write;
use std::net::SocketAddr;

/// Stable cache key over everything that can change a lookup's result:
/// domain (lowercased), record type, server list, timeout and retry
/// count. The system-resolver tier hashes an empty server list.
pub fn make_cache_key(
    prefix: &str,
    domain: &str,
    record_type: RecordType,
    servers: &[SocketAddr],
    timeout_ms: u64,
    retry_count: u32,
) -> String {
    let mut hasher = Sha256::new();
    hasher.update(domain.to_lowercase().as_bytes());
    hasher.update([0]);
    hasher.update(record_type.as_str().as_bytes());
    hasher.update([0]);
    for server in servers {
        hasher.update(server.to_string().as_bytes());
        hasher.update([0]);
    }
    hasher.update(timeout_ms.to_be_bytes());
    hasher.update(retry_count.to_be_bytes());

    let digest = hasher.finalize();
    let mut key = String::with_capacity(prefix.len() + 1 + digest.len() * 2);
    key.push_str(prefix);
    key.push(':');
    for byte in digest {
        // Writing to a String cannot fail.
        let _ = write!(key, "{:02x}", byte);
    }
    key
}
