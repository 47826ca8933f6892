use dnscheck_application::ports::SystemNameservers;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

const DNS_PORT: u16 = 53;

/// System resolver discovery backed by /etc/resolv.conf.
///
/// When the file is missing or lists no usable nameservers, a set of
/// well-known public resolvers stands in so system-tier lookups still
/// have somewhere to go.
pub struct SystemResolvConf {
    path: PathBuf,
}

impl SystemResolvConf {
    pub fn new() -> Self {
        Self {
            path: PathBuf::from("/etc/resolv.conf"),
        }
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn fallback() -> Vec<SocketAddr> {
        vec![
            SocketAddr::from(([8, 8, 8, 8], DNS_PORT)),
            SocketAddr::from(([1, 1, 1, 1], DNS_PORT)),
            SocketAddr::from(([9, 9, 9, 9], DNS_PORT)),
        ]
    }
}

impl Default for SystemResolvConf {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemNameservers for SystemResolvConf {
    fn nameservers(&self) -> Vec<SocketAddr> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) => {
                tracing::debug!(path = %self.path.display(), %err, "resolv.conf unreadable, using public resolvers");
                return Self::fallback();
            }
        };

        let servers = parse_nameservers(&contents);
        if servers.is_empty() {
            tracing::debug!(path = %self.path.display(), "no nameserver entries, using public resolvers");
            return Self::fallback();
        }
        servers
    }
}

fn parse_nameservers(contents: &str) -> Vec<SocketAddr> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.starts_with('#') && !line.starts_with(';'))
        .filter_map(|line| {
            let mut parts = line.split_whitespace();
            match (parts.next(), parts.next()) {
                (Some("nameserver"), Some(addr)) => addr.parse::<IpAddr>().ok(),
                _ => None,
            }
        })
        .map(|ip| SocketAddr::new(ip, DNS_PORT))
        .collect()
}
