//! Socket plumbing for the wire resolver.

pub mod tcp;
pub mod udp;

use dnscheck_domain::LookupError;
use std::io;
use std::net::SocketAddr;

/// Map socket errors onto the transport error taxonomy, keeping the
/// server address for the log line.
pub(crate) fn map_io_error(err: io::Error, server: SocketAddr) -> LookupError {
    let server = server.to_string();
    match err.kind() {
        io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock => {
            LookupError::TransportTimeout { server }
        }
        io::ErrorKind::ConnectionRefused => LookupError::TransportConnectionRefused { server },
        io::ErrorKind::NetworkUnreachable | io::ErrorKind::HostUnreachable => {
            LookupError::TransportNetworkUnreachable { server }
        }
        _ => LookupError::TransportIo {
            server,
            message: err.to_string(),
        },
    }
}
