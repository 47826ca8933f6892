use async_trait::async_trait;
use dnscheck_application::ports::{
    DnsTransport, FailureReporter, RecordCache, SystemNameservers,
};
use dnscheck_domain::{DnsResponse, LookupError, RData, RecordType, ResourceRecord, ResponseCode};
use std::collections::HashMap;
use std::net::{Ipv4Addr, SocketAddr};
use std::sync::Mutex;
use std::time::Duration;

/// Transport stub with per-server scripted replies. Unscripted servers
/// panic so tests catch unexpected probes.
pub struct MockTransport {
    replies: HashMap<SocketAddr, Result<DnsResponse, LookupError>>,
    pub calls: Mutex<Vec<(SocketAddr, String, RecordType)>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self {
            replies: HashMap::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn reply(mut self, server: &str, reply: Result<DnsResponse, LookupError>) -> Self {
        self.replies.insert(server.parse().unwrap(), reply);
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn calls_to(&self, server: &str) -> usize {
        let addr: SocketAddr = server.parse().unwrap();
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|(s, _, _)| *s == addr)
            .count()
    }

    pub fn queried_domains(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|(_, d, _)| d.clone())
            .collect()
    }
}

#[async_trait]
impl DnsTransport for MockTransport {
    async fn query(
        &self,
        server: SocketAddr,
        domain: &str,
        record_type: RecordType,
        _timeout: Duration,
    ) -> Result<DnsResponse, LookupError> {
        self.calls
            .lock()
            .unwrap()
            .push((server, domain.to_string(), record_type));

        match self.replies.get(&server) {
            Some(reply) => reply.clone(),
            None => panic!("unexpected query to unscripted server {}", server),
        }
    }
}

pub struct MemoryCacheMock {
    entries: Mutex<HashMap<String, Vec<String>>>,
    pub puts: Mutex<Vec<(String, Vec<String>)>>,
}

impl MemoryCacheMock {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            puts: Mutex::new(Vec::new()),
        }
    }

    pub fn put_count(&self) -> usize {
        self.puts.lock().unwrap().len()
    }
}

#[async_trait]
impl RecordCache for MemoryCacheMock {
    async fn get(&self, key: &str) -> Option<Vec<String>> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    async fn put(&self, key: &str, records: &[String], _ttl: Duration) {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), records.to_vec());
        self.puts
            .lock()
            .unwrap()
            .push((key.to_string(), records.to_vec()));
    }
}

pub struct CountingReporter {
    pub messages: Mutex<Vec<String>>,
}

impl CountingReporter {
    pub fn new() -> Self {
        Self {
            messages: Mutex::new(Vec::new()),
        }
    }

    pub fn count(&self) -> usize {
        self.messages.lock().unwrap().len()
    }
}

impl FailureReporter for CountingReporter {
    fn report(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}

pub struct FixedSystemServers(pub Vec<SocketAddr>);

impl SystemNameservers for FixedSystemServers {
    fn nameservers(&self) -> Vec<SocketAddr> {
        self.0.clone()
    }
}

pub fn system_server() -> &'static str {
    "127.0.0.9:53"
}

pub fn a_record(ip: [u8; 4]) -> ResourceRecord {
    ResourceRecord {
        name: "example.com".to_string(),
        type_code: RecordType::A.to_u16(),
        ttl: 300,
        rdata: RData::A(Ipv4Addr::from(ip)),
    }
}

pub fn mx_record(preference: u16, exchange: &str) -> ResourceRecord {
    ResourceRecord {
        name: "example.com".to_string(),
        type_code: RecordType::MX.to_u16(),
        ttl: 300,
        rdata: RData::Mx {
            preference,
            exchange: exchange.to_string(),
        },
    }
}

pub fn soa_record(mname: &str, rname: &str) -> ResourceRecord {
    ResourceRecord {
        name: "example.com".to_string(),
        type_code: RecordType::SOA.to_u16(),
        ttl: 3600,
        rdata: RData::Soa {
            mname: mname.to_string(),
            rname: rname.to_string(),
            serial: 2024010101,
            refresh: 7200,
            retry: 900,
            expire: 1209600,
            minimum: 300,
        },
    }
}

pub fn response_with(answers: Vec<ResourceRecord>) -> DnsResponse {
    DnsResponse {
        id: 1,
        code: ResponseCode::NoError,
        truncated: false,
        answers,
    }
}

pub fn empty_response() -> DnsResponse {
    response_with(Vec::new())
}

pub fn nxdomain_response() -> DnsResponse {
    DnsResponse {
        id: 1,
        code: ResponseCode::NxDomain,
        truncated: false,
        answers: Vec::new(),
    }
}

pub fn servfail_response() -> DnsResponse {
    DnsResponse {
        id: 1,
        code: ResponseCode::ServFail,
        truncated: false,
        answers: Vec::new(),
    }
}
