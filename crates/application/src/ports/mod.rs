pub mod dns_lookup;
pub mod dns_transport;
pub mod domain_validator;
pub mod failure_reporter;
pub mod record_cache;
pub mod system_nameservers;

pub use dns_lookup::DnsLookup;
pub use dns_transport::DnsTransport;
pub use domain_validator::DomainValidator;
pub use failure_reporter::FailureReporter;
pub use record_cache::RecordCache;
pub use system_nameservers::SystemNameservers;
