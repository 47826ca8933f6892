use super::name::pack_name;
use dnscheck_domain::{LookupError, RecordType};

/// QCLASS IN (RFC 1035 §3.2.4).
const CLASS_IN: u16 = 1;

/// Flags for a standard recursive query: RD set, everything else clear.
const FLAGS_RD: u16 = 0x0100;

/// Build a query message in wire format.
///
/// The caller supplies the transaction id so it can match the response;
/// one id per attempt, chosen randomly by the resolver.
pub fn encode_query(id: u16, domain: &str, record_type: RecordType) -> Result<Vec<u8>, LookupError> {
    let mut buf = Vec::with_capacity(512);

    buf.extend_from_slice(&id.to_be_bytes());
    buf.extend_from_slice(&FLAGS_RD.to_be_bytes());
    buf.extend_from_slice(&1u16.to_be_bytes()); // QDCOUNT
    buf.extend_from_slice(&0u16.to_be_bytes()); // ANCOUNT
    buf.extend_from_slice(&0u16.to_be_bytes()); // NSCOUNT
    buf.extend_from_slice(&0u16.to_be_bytes()); // ARCOUNT

    pack_name(&mut buf, domain)?;
    buf.extend_from_slice(&record_type.to_u16().to_be_bytes());
    buf.extend_from_slice(&CLASS_IN.to_be_bytes());

    Ok(buf)
}
