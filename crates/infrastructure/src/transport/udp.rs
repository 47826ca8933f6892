use super::map_io_error;
use dnscheck_domain::LookupError;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};
use tokio::net::UdpSocket;
use tokio::time::Instant;

/// Largest UDP payload we accept. Without EDNS the classic limit is
/// 512 octets, but some resolvers send more; the buffer is sized so an
/// oversized datagram is not silently cut short.
const MAX_UDP_PAYLOAD: usize = 4096;

/// Send one query datagram and wait for the matching response.
///
/// Datagrams from the wrong peer or carrying the wrong transaction id
/// are dropped and the wait continues until the deadline.
pub async fn exchange(
    server: SocketAddr,
    query: &[u8],
    expected_id: u16,
    deadline: Instant,
) -> Result<Vec<u8>, LookupError> {
    let bind_ip: IpAddr = if server.is_ipv4() {
        Ipv4Addr::UNSPECIFIED.into()
    } else {
        Ipv6Addr::UNSPECIFIED.into()
    };
    let bind_addr = SocketAddr::new(bind_ip, 0);

    let socket = UdpSocket::bind(bind_addr)
        .await
        .map_err(|e| map_io_error(e, server))?;
    socket
        .send_to(query, server)
        .await
        .map_err(|e| map_io_error(e, server))?;

    let mut buf = vec![0u8; MAX_UDP_PAYLOAD];
    loop {
        let recv = tokio::time::timeout_at(deadline, socket.recv_from(&mut buf))
            .await
            .map_err(|_| LookupError::TransportTimeout {
                server: server.to_string(),
            })?;
        let (len, peer) = recv.map_err(|e| map_io_error(e, server))?;

        if peer != server {
            tracing::debug!(%peer, %server, "discarding datagram from unexpected peer");
            continue;
        }
        if len < 2 || u16::from_be_bytes([buf[0], buf[1]]) != expected_id {
            tracing::debug!(%server, "discarding datagram with mismatched transaction id");
            continue;
        }

        return Ok(buf[..len].to_vec());
    }
}
