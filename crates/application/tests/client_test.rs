use dnscheck_application::ports::FailureReporter;
use dnscheck_application::services::AllowAllValidator;
use dnscheck_application::LookupClient;
use dnscheck_domain::{Config, FailureKind, RecordType};
use std::sync::Arc;

mod helpers;
use helpers::mocks::*;

struct SilentReporter;

impl FailureReporter for SilentReporter {
    fn report(&self, _message: &str) {}
}

fn client_with(transport: MockTransport, config: Config) -> (LookupClient, Arc<MockTransport>) {
    let transport = Arc::new(transport);
    let client = LookupClient::new(
        config,
        transport.clone(),
        None,
        Arc::new(SilentReporter),
        Arc::new(FixedSystemServers(vec![system_server().parse().unwrap()])),
    );
    (client, transport)
}

#[tokio::test]
async fn test_using_server_replaces_list() {
    let transport = MockTransport::new().reply(
        "127.0.0.5:53",
        Ok(response_with(vec![a_record([1, 2, 3, 4])])),
    );
    let (client, transport) = client_with(transport, Config::default());

    let client = client.using_server("127.0.0.5:53");
    let records = client.a("example.com").await.unwrap();

    assert_eq!(records, vec!["1.2.3.4"]);
    assert_eq!(transport.calls_to("127.0.0.5:53"), 1);
}

#[tokio::test]
async fn test_add_and_clear_servers() {
    let mut config = Config::default();
    config.resolver.servers = vec!["127.0.0.1:53".to_string()];
    config.resolver.fallback_to_system = true;
    let transport = MockTransport::new().reply(
        system_server(),
        Ok(response_with(vec![a_record([9, 9, 9, 9])])),
    );
    let (client, transport) = client_with(transport, config);

    // With servers cleared, resolution goes straight to system.
    let client = client.clear_servers();
    let records = client.a("example.com").await.unwrap();

    assert_eq!(records, vec!["9.9.9.9"]);
    assert_eq!(transport.call_count(), 1);

    let client = client.add_server("127.0.0.7:53");
    assert_eq!(client.config().resolver.servers, vec!["127.0.0.7:53"]);
}

#[tokio::test]
async fn test_without_domain_validation_lets_anything_through() {
    let mut config = Config::default();
    config.resolver.servers = vec!["127.0.0.1:53".to_string()];
    config.resolver.fallback_to_system = false;
    let transport = MockTransport::new().reply("127.0.0.1:53", Ok(empty_response()));
    let (client, transport) = client_with(transport, config);

    // Underscores fail RFC 1035 validation but are queried once
    // validation is off.
    let records = client.a("under_score.example.com").await.unwrap();
    assert!(records.is_empty());
    assert_eq!(transport.call_count(), 0);

    let client = client.without_domain_validation();
    client.a("under_score.example.com").await.unwrap();
    assert_eq!(transport.call_count(), 1);
}

#[tokio::test]
async fn test_with_validator_swaps_the_syntax_gate() {
    let mut config = Config::default();
    config.resolver.servers = vec!["127.0.0.1:53".to_string()];
    config.resolver.fallback_to_system = false;
    let transport = MockTransport::new().reply("127.0.0.1:53", Ok(empty_response()));
    let (client, transport) = client_with(transport, config);

    let client = client.with_validator(Arc::new(AllowAllValidator));
    client.a("under_score.example.com").await.unwrap();
    assert_eq!(transport.call_count(), 1);

    // Empty input is still rejected before the custom validator runs.
    client.a("  ").await.unwrap();
    assert_eq!(transport.call_count(), 1);
}

#[tokio::test]
async fn test_strict_errors_via_builder() {
    let transport = MockTransport::new().reply("127.0.0.1:53", Ok(nxdomain_response()));
    let mut config = Config::default();
    config.resolver.servers = vec!["127.0.0.1:53".to_string()];
    let (client, _transport) = client_with(transport, config);

    let client = client.strict_errors(true);
    let failure = client.a("missing.example.com").await.unwrap_err();

    assert_eq!(failure.kind, FailureKind::RecordNotFound);
}

#[tokio::test]
async fn test_reset_config_restores_base() {
    let (client, _transport) = client_with(MockTransport::new(), Config::default());

    let client = client
        .using_server("127.0.0.5:53")
        .with_timeout_ms(100)
        .with_retries(5);
    assert_eq!(client.config().resolver.timeout_ms, 100);

    let client = client.reset_config();
    assert_eq!(client.config().resolver.timeout_ms, 2000);
    assert_eq!(client.config().resolver.retry_count, 1);
    assert_eq!(client.config().resolver.servers.len(), 3);
}

#[tokio::test]
async fn test_typed_shortcuts_use_matching_record_type() {
    let transport = MockTransport::new().reply(
        "127.0.0.1:53",
        Ok(response_with(vec![mx_record(5, "mail.example.com")])),
    );
    let mut config = Config::default();
    config.resolver.servers = vec!["127.0.0.1:53".to_string()];
    let (client, transport) = client_with(transport, config);

    let records = client.mx("example.com").await.unwrap();
    assert_eq!(records, vec!["mail.example.com"]);

    let calls = transport.calls.lock().unwrap();
    assert_eq!(calls[0].2, RecordType::MX);
}
