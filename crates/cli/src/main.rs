use clap::Parser;
use hearth_dns_domain::CliOverrides;
use hearth_dns_jobs::{DirectoryExpiryJob, JobRunner};
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "hearth-dns")]
#[command(version)]
#[command(about = "Hearth DNS - split-horizon DNS stub with a local directory")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// DNS server port
    #[arg(short = 'd', long)]
    dns_port: Option<u16>,

    /// Web server port
    #[arg(short = 'w', long)]
    web_port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Database path
    #[arg(long)]
    database: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Upstream resolver (host:port)
    #[arg(short = 'u', long)]
    upstream: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        dns_port: cli.dns_port,
        web_port: cli.web_port,
        bind_address: cli.bind.clone(),
        database_path: cli.database.clone(),
        log_level: cli.log_level.clone(),
        upstream: cli.upstream.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config.logging);

    info!("Starting Hearth DNS v{}", env!("CARGO_PKG_VERSION"));

    let pool = bootstrap::init_database(&config.database).await?;

    let repos = di::Repositories::new(pool);
    let use_cases = di::UseCases::new(&repos);

    let loaded = use_cases
        .load_directory
        .execute(&config.dns.records)
        .await?;
    info!(entries = loaded, "Directory ready");

    let shutdown = CancellationToken::new();

    JobRunner::new()
        .with_directory_expiry(
            DirectoryExpiryJob::new(use_cases.purge_expired.clone())
                .with_interval(config.database.purge_interval_secs),
        )
        .with_shutdown_token(shutdown.clone())
        .start()
        .await;

    let bind_ip: IpAddr = config.server.bind_address.parse()?;

    let dns_addr = SocketAddr::new(bind_ip, config.server.dns_port);
    let dns_socket = server::bind_dns_socket(dns_addr)?;
    let dns_handler = di::build_dns_handler(&config.dns, &repos)?;
    let listener = di::build_udp_listener(dns_socket, dns_handler, &config.dns);
    let dns_task = tokio::spawn(listener.run(shutdown.clone()));

    tokio::spawn(server::cancel_on_signal(shutdown.clone()));

    let app_state = use_cases.app_state(config.server.api_key.as_deref().map(Arc::from));
    let web_addr = SocketAddr::new(bind_ip, config.server.web_port);
    let web_result =
        server::start_web_server(web_addr, app_state, &config.server, shutdown.clone()).await;

    // The web server may have failed on its own; stop the DNS side either way.
    shutdown.cancel();
    if let Err(e) = dns_task.await {
        error!(error = %e, "DNS listener task failed");
    }

    web_result?;

    info!("Server shutdown complete");
    Ok(())
}
