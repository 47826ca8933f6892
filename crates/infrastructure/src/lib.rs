//! dnscheck infrastructure layer: wire codec, transports and adapters.
pub mod cache;
pub mod reporting;
pub mod resolver;
pub mod system;
pub mod transport;
pub mod wire;

pub use cache::MemoryRecordCache;
pub use reporting::TracingReporter;
pub use resolver::WireResolver;
pub use system::SystemResolvConf;
