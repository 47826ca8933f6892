use std::net::SocketAddr;

/// Discovery of the system-configured resolvers, used when no custom
/// servers are set or as the fallback tier.
pub trait SystemNameservers: Send + Sync {
    fn nameservers(&self) -> Vec<SocketAddr>;
}
