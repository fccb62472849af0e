use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "inotebook_api=info,tower_http=info";

/// Install the fmt subscriber; `RUST_LOG` overrides the default filter
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
