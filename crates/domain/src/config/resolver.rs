use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResolverConfig {
    /// Custom nameservers to probe, in order. Empty means "system
    /// resolver only".
    #[serde(default = "default_servers")]
    pub servers: Vec<String>,

    /// Per-attempt timeout in milliseconds, covering both the UDP and
    /// TCP legs of a single round trip.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Full passes over the server list (minimum 1).
    #[serde(default = "default_retry_count")]
    pub retry_count: u32,

    /// When custom servers yield nothing, try the system resolver next.
    #[serde(default = "default_true")]
    pub fallback_to_system: bool,

    /// Report NXDOMAIN failures as well. Off by default: a missing name
    /// is usually an answer, not an incident.
    #[serde(default = "default_false")]
    pub log_nxdomain: bool,

    /// Surface classified errors to the caller instead of swallowing
    /// them into an empty result.
    #[serde(default = "default_false")]
    pub strict_errors: bool,

    /// Apply RFC 1035 hostname syntax validation before any network
    /// call. Disabled means every domain goes to the wire.
    #[serde(default = "default_true")]
    pub validate_domains: bool,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            servers: default_servers(),
            timeout_ms: default_timeout_ms(),
            retry_count: default_retry_count(),
            fallback_to_system: true,
            log_nxdomain: false,
            strict_errors: false,
            validate_domains: true,
        }
    }
}

fn default_servers() -> Vec<String> {
    vec![
        "8.8.8.8:53".to_string(),
        "1.1.1.1:53".to_string(),
        "9.9.9.9:53".to_string(),
    ]
}

fn default_timeout_ms() -> u64 {
    2000
}

fn default_retry_count() -> u32 {
    1
}

fn default_true() -> bool {
    true
}

fn default_false() -> bool {
    false
}
