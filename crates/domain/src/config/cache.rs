use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    #[serde(default = "default_false")]
    pub enabled: bool,

    /// TTL for cached results, in seconds.
    #[serde(default = "default_ttl_secs")]
    pub ttl_secs: u64,

    #[serde(default = "default_prefix")]
    pub prefix: String,

    /// Also cache empty (NOERROR/NODATA) results. Errors are never
    /// cached regardless.
    #[serde(default = "default_false")]
    pub cache_empty: bool,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            ttl_secs: default_ttl_secs(),
            prefix: default_prefix(),
            cache_empty: false,
        }
    }
}

fn default_ttl_secs() -> u64 {
    60
}

fn default_prefix() -> String {
    "dnscheck".to_string()
}

fn default_false() -> bool {
    false
}
