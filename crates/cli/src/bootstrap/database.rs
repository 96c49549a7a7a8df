use hearth_dns_domain::config::DatabaseConfig;
use hearth_dns_infrastructure::database::create_pool;
use sqlx::SqlitePool;
use tracing::{error, info};

pub async fn init_database(cfg: &DatabaseConfig) -> anyhow::Result<SqlitePool> {
    info!(path = %cfg.path, "Initializing database");

    let pool = create_pool(&cfg.path, cfg.max_connections)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to initialize database");
            anyhow::anyhow!(e)
        })?;

    info!(max_connections = cfg.max_connections, "Database initialized");

    Ok(pool)
}
