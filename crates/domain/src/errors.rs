use crate::record_type::RecordType;
use crate::response_code::ResponseCode;
use std::fmt;
use thiserror::Error;

/// Low-level failures produced while resolving against a single server
/// list. These never escape the lookup boundary directly; callers in
/// strict mode see a [`LookupFailure`] built from one of these.
#[derive(Error, Debug, Clone)]
pub enum LookupError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Invalid server address: {0}")]
    InvalidServerAddress(String),

    #[error("Malformed DNS response: {0}")]
    MalformedResponse(String),

    #[error("Transport timeout connecting to {server}")]
    TransportTimeout { server: String },

    #[error("Transport connection refused by {server}")]
    TransportConnectionRefused { server: String },

    #[error("Network unreachable sending to {server}")]
    TransportNetworkUnreachable { server: String },

    #[error("Transport I/O error talking to {server}: {message}")]
    TransportIo { server: String, message: String },

    #[error("Domain not found (NXDOMAIN)")]
    NxDomain,

    #[error("Server returned {code} response")]
    ServerFailure { code: ResponseCode },

    #[error("All configured servers failed")]
    AllServersFailed,

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl LookupError {
    pub fn is_nxdomain(&self) -> bool {
        matches!(self, LookupError::NxDomain)
    }

    pub fn is_timeout(&self) -> bool {
        match self {
            LookupError::TransportTimeout { .. } => true,
            LookupError::TransportIo { message, .. } => {
                let lower = message.to_lowercase();
                lower.contains("timed out") || lower.contains("timeout")
            }
            _ => false,
        }
    }
}

/// Classification of an unresolved failure at the lookup boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    RecordNotFound,
    Timeout,
    QueryFailed,
}

impl FailureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureKind::RecordNotFound => "record not found",
            FailureKind::Timeout => "timed out",
            FailureKind::QueryFailed => "query failed",
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Typed error surfaced to callers in strict mode, carrying the full
/// lookup context alongside the underlying cause.
#[derive(Error, Debug, Clone)]
#[error("DNS lookup {kind} for {domain} ({record_type}) via {resolver}: {source}")]
pub struct LookupFailure {
    pub kind: FailureKind,

    pub domain: String,

    pub record_type: RecordType,

    /// "system" or the comma-joined custom server list.
    pub resolver: String,

    #[source]
    pub source: LookupError,
}

impl LookupFailure {
    pub fn classify(
        source: LookupError,
        domain: &str,
        record_type: RecordType,
        resolver: &str,
    ) -> Self {
        let kind = if source.is_nxdomain() {
            FailureKind::RecordNotFound
        } else if source.is_timeout() {
            FailureKind::Timeout
        } else {
            FailureKind::QueryFailed
        };

        Self {
            kind,
            domain: domain.to_string(),
            record_type,
            resolver: resolver.to_string(),
            source,
        }
    }
}
