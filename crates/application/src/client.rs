use crate::ports::{DnsTransport, DomainValidator, FailureReporter, RecordCache, SystemNameservers};
use crate::services::RfcHostnameValidator;
use crate::use_cases::LookupService;
use dnscheck_domain::{Config, LookupError, LookupFailure, RecordType};
use std::sync::Arc;

/// Fluent lookup client: a reconfigurable front over [`LookupService`].
///
/// Builder calls adjust a working copy of the configuration; each query
/// assembles a fresh service from it, so client state never leaks
/// between lookups.
pub struct LookupClient {
    config: Config,
    base_config: Config,
    transport: Arc<dyn DnsTransport>,
    cache: Option<Arc<dyn RecordCache>>,
    reporter: Arc<dyn FailureReporter>,
    custom_validator: Option<Arc<dyn DomainValidator>>,
    system: Arc<dyn SystemNameservers>,
}

impl LookupClient {
    pub fn new(
        config: Config,
        transport: Arc<dyn DnsTransport>,
        cache: Option<Arc<dyn RecordCache>>,
        reporter: Arc<dyn FailureReporter>,
        system: Arc<dyn SystemNameservers>,
    ) -> Self {
        Self {
            base_config: config.clone(),
            config,
            transport,
            cache,
            reporter,
            custom_validator: None,
            system,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Drop all adjustments and return to the construction-time config.
    pub fn reset_config(mut self) -> Self {
        self.config = self.base_config.clone();
        self.custom_validator = None;
        self
    }

    pub fn using_server(mut self, server: impl Into<String>) -> Self {
        self.config.resolver.servers = vec![server.into()];
        self
    }

    pub fn using_servers(mut self, servers: Vec<String>) -> Self {
        self.config.resolver.servers = servers;
        self
    }

    pub fn add_server(mut self, server: impl Into<String>) -> Self {
        self.config.resolver.servers.push(server.into());
        self
    }

    pub fn clear_servers(mut self) -> Self {
        self.config.resolver.servers.clear();
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.config.resolver.timeout_ms = timeout_ms;
        self
    }

    pub fn with_retries(mut self, count: u32) -> Self {
        self.config.resolver.retry_count = count;
        self
    }

    pub fn fallback_to_system(mut self, enabled: bool) -> Self {
        self.config.resolver.fallback_to_system = enabled;
        self
    }

    pub fn log_nxdomain(mut self, enabled: bool) -> Self {
        self.config.resolver.log_nxdomain = enabled;
        self
    }

    pub fn strict_errors(mut self, enabled: bool) -> Self {
        self.config.resolver.strict_errors = enabled;
        self
    }

    pub fn with_validator(mut self, validator: Arc<dyn DomainValidator>) -> Self {
        self.config.resolver.validate_domains = true;
        self.custom_validator = Some(validator);
        self
    }

    pub fn without_domain_validation(mut self) -> Self {
        self.config.resolver.validate_domains = false;
        self.custom_validator = None;
        self
    }

    pub async fn query(
        &self,
        domain: &str,
        record_type: RecordType,
    ) -> Result<Vec<String>, LookupFailure> {
        let validator: Option<Arc<dyn DomainValidator>> = if self.config.resolver.validate_domains {
            Some(
                self.custom_validator
                    .clone()
                    .unwrap_or_else(|| Arc::new(RfcHostnameValidator)),
            )
        } else {
            None
        };

        let service = LookupService::new(
            &self.config,
            self.transport.clone(),
            self.cache.clone(),
            self.reporter.clone(),
            validator,
            self.system.clone(),
        )
        .map_err(|e| {
            LookupFailure::classify(
                LookupError::ConfigError(e.to_string()),
                domain,
                record_type,
                "config",
            )
        })?;

        service.get_records(domain, record_type).await
    }

    pub async fn get_records(
        &self,
        domain: &str,
        record_type: RecordType,
    ) -> Result<Vec<String>, LookupFailure> {
        self.query(domain, record_type).await
    }

    pub async fn a(&self, domain: &str) -> Result<Vec<String>, LookupFailure> {
        self.query(domain, RecordType::A).await
    }

    pub async fn aaaa(&self, domain: &str) -> Result<Vec<String>, LookupFailure> {
        self.query(domain, RecordType::AAAA).await
    }

    pub async fn mx(&self, domain: &str) -> Result<Vec<String>, LookupFailure> {
        self.query(domain, RecordType::MX).await
    }

    pub async fn ns(&self, domain: &str) -> Result<Vec<String>, LookupFailure> {
        self.query(domain, RecordType::NS).await
    }

    pub async fn txt(&self, domain: &str) -> Result<Vec<String>, LookupFailure> {
        self.query(domain, RecordType::TXT).await
    }

    pub async fn cname(&self, domain: &str) -> Result<Vec<String>, LookupFailure> {
        self.query(domain, RecordType::CNAME).await
    }
}
