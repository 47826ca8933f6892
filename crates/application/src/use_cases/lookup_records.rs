use crate::cache_key::make_cache_key;
use crate::ports::{
    DnsLookup, DnsTransport, DomainValidator, FailureReporter, RecordCache, SystemNameservers,
};
use crate::services::RecordExtractor;
use async_trait::async_trait;
use dnscheck_domain::config::{CacheConfig, ConfigError, ResolverConfig};
use dnscheck_domain::{normalize_domain, Config, LookupError, LookupFailure, RecordType};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// One logical lookup: validation, custom-server probing, fallback to
/// the system resolver, caching and the swallow-vs-strict error
/// boundary.
///
/// Stateless between calls; every call owns its own transaction ids and
/// sockets via the transport port.
pub struct LookupService {
    resolver: ResolverConfig,
    cache_config: CacheConfig,
    custom_servers: Vec<SocketAddr>,
    transport: Arc<dyn DnsTransport>,
    cache: Option<Arc<dyn RecordCache>>,
    reporter: Arc<dyn FailureReporter>,
    validator: Option<Arc<dyn DomainValidator>>,
    system: Arc<dyn SystemNameservers>,
}

impl LookupService {
    /// Server addresses are parsed once here, not per call.
    pub fn new(
        config: &Config,
        transport: Arc<dyn DnsTransport>,
        cache: Option<Arc<dyn RecordCache>>,
        reporter: Arc<dyn FailureReporter>,
        validator: Option<Arc<dyn DomainValidator>>,
        system: Arc<dyn SystemNameservers>,
    ) -> Result<Self, ConfigError> {
        let custom_servers = config.server_addrs()?;

        Ok(Self {
            resolver: config.resolver.clone(),
            cache_config: config.cache.clone(),
            custom_servers,
            transport,
            cache,
            reporter,
            validator,
            system,
        })
    }

    pub async fn get_records(
        &self,
        domain: &str,
        record_type: RecordType,
    ) -> Result<Vec<String>, LookupFailure> {
        let domain = normalize_domain(domain);
        if !self.is_valid(&domain) {
            debug!(domain = %domain, "Domain failed validation, skipping lookup");
            return Ok(Vec::new());
        }

        if !self.custom_servers.is_empty() {
            let records = self
                .resolve(&domain, record_type, &self.custom_servers, false)
                .await?;
            if !records.is_empty() {
                return Ok(records);
            }

            if !self.resolver.fallback_to_system {
                return Ok(Vec::new());
            }
        }

        let system_servers = self.system.nameservers();
        self.resolve(&domain, record_type, &system_servers, true)
            .await
    }

    /// An empty domain never validates, even with validation disabled.
    fn is_valid(&self, domain: &str) -> bool {
        if domain.is_empty() {
            return false;
        }
        match &self.validator {
            Some(validator) => validator.is_valid(domain),
            None => true,
        }
    }

    /// Resolve against one server list: cache check, the retry walk,
    /// extraction, cache fill, and the error boundary.
    async fn resolve(
        &self,
        domain: &str,
        record_type: RecordType,
        servers: &[SocketAddr],
        system: bool,
    ) -> Result<Vec<String>, LookupFailure> {
        // The system tier is keyed by an empty server list so the same
        // domain via explicit servers and via the system resolver never
        // collide.
        let cache_key = self
            .cache
            .as_ref()
            .filter(|_| self.cache_config.enabled)
            .map(|_| {
                make_cache_key(
                    &self.cache_config.prefix,
                    domain,
                    record_type,
                    if system { &[] } else { servers },
                    self.resolver.timeout_ms,
                    self.resolver.retry_count,
                )
            });

        if let (Some(cache), Some(key)) = (&self.cache, &cache_key) {
            if let Some(records) = cache.get(key).await {
                debug!(domain = %domain, record_type = %record_type, "Cache hit");
                return Ok(records);
            }
        }

        match self.attempt_servers(domain, record_type, servers).await {
            Ok(records) => {
                if let (Some(cache), Some(key)) = (&self.cache, &cache_key) {
                    if !records.is_empty() || self.cache_config.cache_empty {
                        cache
                            .put(
                                key,
                                &records,
                                Duration::from_secs(self.cache_config.ttl_secs),
                            )
                            .await;
                    }
                }
                Ok(records)
            }
            Err(err) => {
                let resolver_desc = if system {
                    "system".to_string()
                } else {
                    servers
                        .iter()
                        .map(|s| s.to_string())
                        .collect::<Vec<_>>()
                        .join(", ")
                };

                if self.resolver.strict_errors {
                    return Err(LookupFailure::classify(
                        err,
                        domain,
                        record_type,
                        &resolver_desc,
                    ));
                }

                if !err.is_nxdomain() || self.resolver.log_nxdomain {
                    self.reporter.report(&format!(
                        "DNS lookup failed ({}): {}",
                        resolver_desc, err
                    ));
                }

                Ok(Vec::new())
            }
        }
    }

    /// Walk the server list in order, `retry_count` full passes. The
    /// first decodable response wins; connectivity failures move on to
    /// the next server, while an explicit error response code is the
    /// answer and ends the walk.
    async fn attempt_servers(
        &self,
        domain: &str,
        record_type: RecordType,
        servers: &[SocketAddr],
    ) -> Result<Vec<String>, LookupError> {
        let timeout = Duration::from_millis(self.resolver.timeout_ms);
        let passes = self.resolver.retry_count.max(1);
        let mut last_error = None;

        for pass in 0..passes {
            for server in servers {
                match self
                    .transport
                    .query(*server, domain, record_type, timeout)
                    .await
                {
                    Ok(response) => {
                        if response.is_nxdomain() {
                            return Err(LookupError::NxDomain);
                        }
                        if response.code.is_error() {
                            return Err(LookupError::ServerFailure {
                                code: response.code,
                            });
                        }
                        return Ok(RecordExtractor::extract_all(&response.answers, record_type));
                    }
                    Err(err) => {
                        warn!(
                            server = %server,
                            domain = %domain,
                            pass = pass,
                            error = %err,
                            "Server attempt failed"
                        );
                        last_error = Some(err);
                    }
                }
            }
        }

        Err(last_error.unwrap_or(LookupError::AllServersFailed))
    }
}

#[async_trait]
impl DnsLookup for LookupService {
    async fn get_records(
        &self,
        domain: &str,
        record_type: RecordType,
    ) -> Result<Vec<String>, LookupFailure> {
        LookupService::get_records(self, domain, record_type).await
    }
}
