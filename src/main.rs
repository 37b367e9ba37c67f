//! Order service binary.
//!
//! Configuration comes from the YAML file named by `ORDER_SERVICE_CONFIG`
//! (defaults otherwise), with `DATABASE_URL` overriding the storage URL.
//! Log output follows `RUST_LOG`, falling back to `logging.filter`.

use anyhow::Result;
use orders::config::{LoggingConfig, ServiceConfig, StorageBackend, StorageConfig};
use orders::server::ServerBuilder;
use orders::storage::InMemoryOrderRepository;
use tracing_subscriber::EnvFilter;

fn init_tracing(logging: &LoggingConfig) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.filter));

    tracing_subscriber::fmt().with_env_filter(env_filter).init();
}

async fn with_storage(builder: ServerBuilder, storage: &StorageConfig) -> Result<ServerBuilder> {
    match storage.backend {
        StorageBackend::InMemory => {
            tracing::info!("Using in-memory order storage");
            Ok(builder.with_repository(InMemoryOrderRepository::new()))
        }
        #[cfg(feature = "postgres")]
        StorageBackend::Postgres => {
            use orders::storage::postgres::{PostgresOrderRepository, connect, ensure_schema};

            let pool = connect(&storage.database_url, storage.max_connections).await?;
            ensure_schema(&pool).await?;
            tracing::info!("Using PostgreSQL order storage");
            Ok(builder.with_repository(PostgresOrderRepository::new(pool)))
        }
        #[cfg(not(feature = "postgres"))]
        StorageBackend::Postgres => anyhow::bail!(
            "storage.backend is 'postgres' but this binary was built without the `postgres` feature"
        ),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = ServiceConfig::load()?;
    init_tracing(&config.logging);

    if !config.validation.validate_updates {
        tracing::info!("Order updates are applied without validation (validation.validate_updates = false)");
    }

    let builder = ServerBuilder::new().with_validation(config.validation);
    let builder = with_storage(builder, &config.storage).await?;

    builder.serve(&config.server.address()).await
}
