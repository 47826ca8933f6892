use dnscheck_domain::{RData, RecordType, ResourceRecord};

/// Maps a decoded resource record to the value surfaced for the
/// requested record type. Pure, no side effects.
pub struct RecordExtractor;

impl RecordExtractor {
    /// `None` drops the record silently: an answer section routinely
    /// carries records of other types (a CNAME in an A answer, OPT
    /// padding) that the requested type has no value for.
    ///
    /// MX preference is deliberately not surfaced; callers get the
    /// exchange hostname only.
    pub fn extract(record: &ResourceRecord, requested: RecordType) -> Option<String> {
        match requested {
            RecordType::A | RecordType::AAAA => match &record.rdata {
                RData::A(addr) => Some(addr.to_string()),
                RData::Aaaa(addr) => Some(addr.to_string()),
                _ => None,
            },
            RecordType::MX => match &record.rdata {
                RData::Mx { exchange, .. } => Some(exchange.clone()),
                _ => None,
            },
            RecordType::NS => match &record.rdata {
                RData::Ns(target) => Some(target.clone()),
                _ => None,
            },
            RecordType::CNAME => match &record.rdata {
                RData::Cname(target) => Some(target.clone()),
                _ => None,
            },
            RecordType::PTR => match &record.rdata {
                RData::Ptr(target) => Some(target.clone()),
                _ => None,
            },
            RecordType::TXT => match &record.rdata {
                RData::Txt(chunks) => Some(chunks.concat()),
                _ => None,
            },
            RecordType::SOA => match &record.rdata {
                RData::Soa {
                    mname,
                    rname,
                    serial,
                    refresh,
                    retry,
                    expire,
                    minimum,
                } => Some(format!(
                    "{mname} {rname} {serial} {refresh} {retry} {expire} {minimum}"
                )),
                _ => None,
            },
            RecordType::SRV => match &record.rdata {
                RData::Srv {
                    priority,
                    weight,
                    port,
                    target,
                } => Some(format!("{priority} {weight} {port} {target}")),
                _ => None,
            },
            RecordType::CAA => match &record.rdata {
                RData::Caa { flags, tag, value } => Some(format!("{flags} {tag} \"{value}\"")),
                _ => None,
            },
        }
    }

    /// Extract in answer order, keeping only non-empty values.
    pub fn extract_all(records: &[ResourceRecord], requested: RecordType) -> Vec<String> {
        records
            .iter()
            .filter_map(|record| Self::extract(record, requested))
            .filter(|value| !value.is_empty())
            .collect()
    }
}
