use dnscheck_application::ports::RecordCache;
use dnscheck_application::LookupClient;
use dnscheck_domain::Config;
use dnscheck_infrastructure::{MemoryRecordCache, SystemResolvConf, TracingReporter, WireResolver};
use std::sync::Arc;

/// Assemble the lookup client from the production adapters.
pub fn build_client(config: Config) -> LookupClient {
    let cache: Option<Arc<dyn RecordCache>> = if config.cache.enabled {
        Some(Arc::new(MemoryRecordCache::new()))
    } else {
        None
    };

    LookupClient::new(
        config,
        Arc::new(WireResolver::new()),
        cache,
        Arc::new(TracingReporter),
        Arc::new(SystemResolvConf::new()),
    )
}
