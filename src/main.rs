use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use sqlx::PgPool;

use inotebook_api::auth::TokenAuthority;
use inotebook_api::database::{DatabaseManager, MemoryNoteRepository, NoteRepository, PgNoteRepository};
use inotebook_api::{app, config, logging, AppState};

#[derive(Parser)]
#[command(name = "inotebook-api")]
#[command(about = "iNotebook notes API server")]
#[command(version)]
struct Args {
    #[arg(long, help = "Keep notes in process memory instead of PostgreSQL")]
    memory: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up DATABASE_URL, JWT_SECRET, etc.
    let _ = dotenvy::dotenv();
    logging::init_tracing();

    let args = Args::parse();
    let config = config::config();
    tracing::info!("Starting iNotebook API in {:?} mode", config.environment);

    let authority = TokenAuthority::new(&config.security.jwt_secret)
        .context("JWT_SECRET must be set to verify caller tokens")?;

    let use_memory = args.memory || matches!(std::env::var("NOTES_STORE").as_deref(), Ok("memory"));

    let (repo, pool): (Arc<dyn NoteRepository>, Option<PgPool>) = if use_memory {
        tracing::warn!("Using in-memory note store; notes are lost on shutdown");
        (Arc::new(MemoryNoteRepository::new()), None)
    } else {
        let pool = DatabaseManager::connect(&config.database)
            .await
            .context("failed to connect to database")?;
        DatabaseManager::ensure_schema(&pool).await?;
        (Arc::new(PgNoteRepository::new(pool.clone())), Some(pool))
    };

    let router = app(AppState::new(repo, authority), config);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    tracing::info!("iNotebook API listening on http://{}", bind_addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    if let Some(pool) = pool {
        DatabaseManager::close(pool).await;
    }

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
