use clap::Parser;
use dnscheck_domain::{CliOverrides, RecordType};
use std::process::ExitCode;
use tracing::error;

mod bootstrap;
mod di;

#[derive(Parser)]
#[command(name = "dnscheck")]
#[command(version)]
#[command(about = "Query DNS records against custom or system nameservers")]
struct Cli {
    /// Domain name to look up
    domain: String,

    /// Record type (A, AAAA, CNAME, MX, NS, TXT, PTR, SOA, SRV, CAA)
    #[arg(default_value = "A")]
    record_type: RecordType,

    /// Nameserver to query, ip or ip:port (repeatable, ordered)
    #[arg(short = 's', long = "server")]
    servers: Vec<String>,

    /// Per-server timeout in milliseconds
    #[arg(long)]
    timeout_ms: Option<u64>,

    /// Passes over the server list before giving up
    #[arg(long)]
    retries: Option<u32>,

    /// Do not fall back to the system resolvers when custom servers
    /// return nothing
    #[arg(long)]
    no_fallback: bool,

    /// Report NXDOMAIN results instead of silently returning nothing
    #[arg(long)]
    log_nxdomain: bool,

    /// Fail with an error instead of returning an empty result
    #[arg(long)]
    strict: bool,

    /// Emit the result as JSON
    #[arg(long)]
    json: bool,

    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let overrides = CliOverrides {
        servers: (!cli.servers.is_empty()).then(|| cli.servers.clone()),
        timeout_ms: cli.timeout_ms,
        retry_count: cli.retries,
        fallback_to_system: cli.no_fallback.then_some(false),
        log_nxdomain: cli.log_nxdomain.then_some(true),
        strict_errors: cli.strict.then_some(true),
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), overrides)?;

    bootstrap::init_logging(&config);

    let client = di::build_client(config);

    match client.query(&cli.domain, cli.record_type).await {
        Ok(records) => {
            if cli.json {
                let payload = serde_json::json!({
                    "domain": cli.domain,
                    "type": cli.record_type.as_str(),
                    "records": records,
                });
                println!("{payload}");
            } else {
                for record in &records {
                    println!("{record}");
                }
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(failure) => {
            error!(
                domain = %failure.domain,
                record_type = %failure.record_type,
                kind = %failure.kind,
                "lookup failed"
            );
            if cli.json {
                let payload = serde_json::json!({
                    "domain": failure.domain,
                    "type": failure.record_type.as_str(),
                    "error": failure.kind.to_string(),
                    "detail": failure.source.to_string(),
                });
                println!("{payload}");
            } else {
                eprintln!("{failure}");
            }
            Ok(ExitCode::FAILURE)
        }
    }
}
