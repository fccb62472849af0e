use anyhow::Context;

use crate::cli::utils::output_success;
use crate::cli::OutputFormat;
use crate::config;
use crate::database::DatabaseManager;

pub async fn handle(output_format: OutputFormat) -> anyhow::Result<()> {
    let config = config::config();

    let pool = DatabaseManager::connect(&config.database)
        .await
        .context("failed to connect to database")?;
    let result = DatabaseManager::health_check(&pool).await;
    DatabaseManager::close(pool).await;
    result.context("database health check failed")?;

    output_success(&output_format, "Database is reachable", None)
}
