use async_trait::async_trait;
use std::time::Duration;

/// Result cache keyed by the stable lookup digest.
///
/// Per-key get/put linearizability is all that is assumed; get-then-put
/// is not atomic and a cold-key stampede across concurrent callers is
/// acceptable.
#[async_trait]
pub trait RecordCache: Send + Sync {
    async fn get(&self, key: &str) -> Option<Vec<String>>;

    async fn put(&self, key: &str, records: &[String], ttl: Duration);
}
