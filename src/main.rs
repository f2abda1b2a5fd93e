use bucket_mirror::{cli, errors};
use errors::AppResult;
use tracing_subscriber::EnvFilter;

fn main() -> AppResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    // Pages and objects are fetched one at a time, on a single thread.
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| errors::AppError::IoError(e.to_string()))?;

    rt.block_on(cli::run_with_shutdown(cli::cli(), async {
        let _ = tokio::signal::ctrl_c().await;
    }))
}
