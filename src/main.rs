use anyhow::Result;
use kanbo::commands::Cli;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Structured logging only when explicitly requested; normal runs keep
    // the console clean for table output.
    if std::env::var("KANBO_DEBUG").is_ok() || std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
            .init();
    }

    Cli::menu()
}
