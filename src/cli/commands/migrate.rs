use anyhow::Context;
use serde_json::json;

use crate::cli::utils::output_success;
use crate::cli::OutputFormat;
use crate::config;
use crate::database::DatabaseManager;

pub async fn handle(output_format: OutputFormat) -> anyhow::Result<()> {
    let config = config::config();

    let pool = DatabaseManager::connect(&config.database)
        .await
        .context("failed to connect to database")?;
    DatabaseManager::ensure_schema(&pool).await?;
    DatabaseManager::close(pool).await;

    output_success(
        &output_format,
        &format!("Schema ready in database '{}'", config.database.name),
        Some(json!({ "database": config.database.name })),
    )
}
