use crate::ports::DomainValidator;
use dnscheck_domain::is_valid_hostname;

/// RFC 1035 hostname syntax validation. The default capability.
pub struct RfcHostnameValidator;

impl DomainValidator for RfcHostnameValidator {
    fn is_valid(&self, domain: &str) -> bool {
        is_valid_hostname(domain)
    }
}

/// Accepts everything; used when validation is configured off.
pub struct AllowAllValidator;

impl DomainValidator for AllowAllValidator {
    fn is_valid(&self, _domain: &str) -> bool {
        true
    }
}
