use async_trait::async_trait;
use dnscheck_domain::{LookupFailure, RecordType};

/// The narrow public lookup entry point.
///
/// Returns the extracted record values in answer order. In swallow mode
/// (the default) unresolved failures come back as an empty list; in
/// strict mode they surface as a classified [`LookupFailure`].
#[async_trait]
pub trait DnsLookup: Send + Sync {
    async fn get_records(
        &self,
        domain: &str,
        record_type: RecordType,
    ) -> Result<Vec<String>, LookupFailure>;
}
