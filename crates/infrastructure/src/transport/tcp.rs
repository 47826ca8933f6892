use super::map_io_error;
use dnscheck_domain::LookupError;
use std::net::SocketAddr;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::time::Instant;

/// Run the whole TCP exchange under the remaining deadline. TCP carries
/// each message behind a two-octet big-endian length prefix
/// (RFC 1035 §4.2.2).
pub async fn exchange(
    server: SocketAddr,
    query: &[u8],
    deadline: Instant,
) -> Result<Vec<u8>, LookupError> {
    tokio::time::timeout_at(deadline, exchange_inner(server, query))
        .await
        .map_err(|_| LookupError::TransportTimeout {
            server: server.to_string(),
        })?
}

async fn exchange_inner(server: SocketAddr, query: &[u8]) -> Result<Vec<u8>, LookupError> {
    let mut stream = TcpStream::connect(server)
        .await
        .map_err(|e| map_io_error(e, server))?;

    let len = u16::try_from(query.len()).map_err(|_| LookupError::TransportIo {
        server: server.to_string(),
        message: "query exceeds 65535 octets".to_string(),
    })?;
    stream
        .write_all(&len.to_be_bytes())
        .await
        .map_err(|e| map_io_error(e, server))?;
    stream
        .write_all(query)
        .await
        .map_err(|e| map_io_error(e, server))?;

    let mut prefix = [0u8; 2];
    stream
        .read_exact(&mut prefix)
        .await
        .map_err(|e| map_io_error(e, server))?;
    let response_len = u16::from_be_bytes(prefix) as usize;

    let mut response = vec![0u8; response_len];
    stream
        .read_exact(&mut response)
        .await
        .map_err(|e| map_io_error(e, server))?;

    Ok(response)
}
