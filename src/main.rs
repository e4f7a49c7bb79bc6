use anyhow::Context;
use dashboard_seeder::{config::Config, create_router, db, seed_data::SeedData};
use tracing_subscriber::EnvFilter;

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let config = Config::from_args();

    if config.once {
        let options = config.connect_options()?;
        db::seed_database(&options, &SeedData::placeholder())
            .await
            .context("Seeding failed")?;
        return Ok(());
    }

    let app = create_router(&config)?;

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!("Listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
