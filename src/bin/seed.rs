//! Loads the sample authors and articles into the configured database.
//! Safe to rerun: every insert skips rows that already exist.
use anyhow::{Context, Result};
use article_api::{config::AppConfig, infrastructure::database};

const SAMPLE_DATA: &str = include_str!("../../seeds/sample_data.sql");

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,sqlx=warn")),
        )
        .init();

    let config = AppConfig::from_env()?;
    let pool = database::init_pool(config.database_url(), 1)
        .await
        .context("connecting to database")?;
    database::run_migrations(&pool)
        .await
        .context("applying migrations")?;

    let result = sqlx::raw_sql(SAMPLE_DATA)
        .execute(&pool)
        .await
        .context("loading sample data")?;
    tracing::info!(rows = result.rows_affected(), "sample data loaded");

    pool.close().await;
    Ok(())
}
