/// Maximum total length of a hostname, excluding the trailing dot.
const MAX_HOSTNAME_LEN: usize = 253;

/// Maximum length of a single label (RFC 1035 §2.3.4).
const MAX_LABEL_LEN: usize = 63;

/// Normalize a domain for querying: trim whitespace, strip one trailing
/// dot, lowercase.
pub fn normalize_domain(domain: &str) -> String {
    let trimmed = domain.trim();
    let trimmed = trimmed.strip_suffix('.').unwrap_or(trimmed);
    trimmed.to_lowercase()
}

/// RFC 1035 hostname syntax check: labels of 1-63 octets made of
/// alphanumerics and hyphens (not leading or trailing), total length
/// at most 253 octets.
pub fn is_valid_hostname(domain: &str) -> bool {
    if domain.is_empty() || domain.len() > MAX_HOSTNAME_LEN {
        return false;
    }

    domain.split('.').all(is_valid_label)
}

fn is_valid_label(label: &str) -> bool {
    if label.is_empty() || label.len() > MAX_LABEL_LEN {
        return false;
    }
    if label.starts_with('-') || label.ends_with('-') {
        return false;
    }
    label
        .bytes()
        .all(|b| b.is_ascii_alphanumeric() || b == b'-')
}
