//! dnscheck domain layer
pub mod config;
pub mod errors;
pub mod hostname;
pub mod record_type;
pub mod resource_record;
pub mod response_code;

pub use config::{CacheConfig, CliOverrides, Config, ConfigError, ResolverConfig};
pub use errors::{FailureKind, LookupError, LookupFailure};
pub use hostname::{is_valid_hostname, normalize_domain};
pub use record_type::RecordType;
pub use resource_record::{DnsResponse, RData, ResourceRecord};
pub use response_code::ResponseCode;
