/// Syntax gate applied before any network call.
pub trait DomainValidator: Send + Sync {
    fn is_valid(&self, domain: &str) -> bool;
}
