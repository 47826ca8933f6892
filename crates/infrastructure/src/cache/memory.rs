use async_trait::async_trait;
use dashmap::DashMap;
use dnscheck_application::ports::RecordCache;
use std::time::Duration;
use tokio::time::Instant;

struct Entry {
    records: Vec<String>,
    expires_at: Instant,
}

/// In-process cache with lazy expiry: stale entries are dropped on the
/// get that finds them, there is no sweeper task.
#[derive(Default)]
pub struct MemoryRecordCache {
    entries: DashMap<String, Entry>,
}

impl MemoryRecordCache {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.entries.len()
    }
}

#[async_trait]
impl RecordCache for MemoryRecordCache {
    async fn get(&self, key: &str) -> Option<Vec<String>> {
        if let Some(entry) = self.entries.get(key) {
            if entry.expires_at > Instant::now() {
                return Some(entry.records.clone());
            }
        }
        // Remove outside the read guard to avoid deadlocking the shard.
        self.entries
            .remove_if(key, |_, entry| entry.expires_at <= Instant::now());
        None
    }

    async fn put(&self, key: &str, records: &[String], ttl: Duration) {
        self.entries.insert(
            key.to_string(),
            Entry {
                records: records.to_vec(),
                expires_at: Instant::now() + ttl,
            },
        );
    }
}
