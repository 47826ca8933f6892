//! dnscheck application layer: ports and the lookup use case.
pub mod cache_key;
pub mod client;
pub mod ports;
pub mod services;
pub mod use_cases;

pub use client::LookupClient;
pub use use_cases::lookup_records::LookupService;
