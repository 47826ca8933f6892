use crate::transport::{tcp, udp};
use crate::wire::{decode_response, encode_query, is_truncated};
use async_trait::async_trait;
use dnscheck_application::ports::DnsTransport;
use dnscheck_domain::{DnsResponse, LookupError, RecordType};
use std::net::SocketAddr;
use std::time::Duration;
use tokio::time::Instant;

/// Stub resolver speaking raw DNS over UDP, retrying over TCP when the
/// server sets the truncation bit.
#[derive(Debug, Default, Clone, Copy)]
pub struct WireResolver;

impl WireResolver {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl DnsTransport for WireResolver {
    async fn query(
        &self,
        server: SocketAddr,
        domain: &str,
        record_type: RecordType,
        timeout: Duration,
    ) -> Result<DnsResponse, LookupError> {
        let id = fastrand::u16(..);
        let query = encode_query(id, domain, record_type)?;
        let deadline = Instant::now() + timeout;

        let mut payload = udp::exchange(server, &query, id, deadline).await?;

        if is_truncated(&payload) {
            tracing::debug!(%server, domain, "response truncated, retrying over TCP");
            payload = tcp::exchange(server, &query, deadline).await?;
        }

        let response = decode_response(&payload)?;
        if response.id != id {
            return Err(LookupError::MalformedResponse(format!(
                "transaction id mismatch: sent {}, got {}",
                id, response.id
            )));
        }

        tracing::trace!(
            %server,
            domain,
            %record_type,
            code = response.code.as_str(),
            answers = response.answers.len(),
            "query complete"
        );

        Ok(response)
    }
}
