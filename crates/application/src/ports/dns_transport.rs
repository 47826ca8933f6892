use async_trait::async_trait;
use dnscheck_domain::{DnsResponse, LookupError, RecordType};
use std::net::SocketAddr;
use std::time::Duration;

/// One network round trip against a single nameserver.
///
/// Implementations own the full wire exchange: query encoding, UDP with
/// TCP fallback on truncation, transaction-id and source-address
/// matching, and response decoding. The timeout is the wall-clock budget
/// for the whole round trip, both legs included.
#[async_trait]
pub trait DnsTransport: Send + Sync {
    async fn query(
        &self,
        server: SocketAddr,
        domain: &str,
        record_type: RecordType,
        timeout: Duration,
    ) -> Result<DnsResponse, LookupError>;
}
