use crate::config::MirrorConfig;
use crate::constants::{DEFAULT_BUCKET_URL, DEFAULT_DOWNLOAD_ROOT};
use crate::errors::{AppError, AppResult};
use crate::listing::{enumerate_keys, HttpPageFetcher};
use crate::mirror::{sync_keys, HttpObjectDownloader};
use clap::{Arg, ArgAction, Command};
use std::future::Future;
use std::path::PathBuf;
use tracing::info;

// CLI metadata constants
const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
const APP_ABOUT: &str = env!("CARGO_PKG_DESCRIPTION");

/// Parses command-line arguments and executes the mirror command.
///
/// This function handles two subcommands:
/// - `sync`: Manual CLI with default configuration
/// - `toml`: Run using a TOML configuration file
///
/// Both subcommands execute the same workflow for mirroring a bucket:
/// 1. Parses CLI arguments (bucket URL, download root, page delay)
/// 2. Walks the paginated bucket listing and collects every object key
/// 3. Downloads each object that is missing from the local tree
/// 4. Reports how many objects were downloaded, skipped, and failed
///
/// # Returns
///
/// Returns `Ok(())` if the run completes, including runs where individual
/// objects failed to download. Returns an error if:
/// - The configured bucket URL is invalid
/// - A listing page request fails
/// - The listing pagination stops making progress
///
pub async fn cli() -> AppResult<()> {
    let cmd = Command::new("bucket-mirror")
        .version(APP_VERSION)
        .about(APP_ABOUT)
        .subcommand(
            Command::new("sync")
                .about("Mirror a public bucket into a local directory")
                .after_help("Already-present files are skipped, so re-running resumes an interrupted mirror.\nExample:\n  bucket-mirror sync -b https://kicad-downloads.s3.cern.ch -d /storage/kicad/")
                .arg(
                    Arg::new("bucket_url")
                        .short('b')
                        .long("bucket-url")
                        .help("Base URL of the bucket listing endpoint")
                        .default_value(DEFAULT_BUCKET_URL)
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("download_root")
                        .short('d')
                        .long("download-root")
                        .help("Local directory the bucket is mirrored into")
                        .default_value(DEFAULT_DOWNLOAD_ROOT)
                        .value_parser(clap::value_parser!(PathBuf))
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("page_delay_ms")
                        .long("page-delay-ms")
                        .help("Delay between listing page fetches, in milliseconds")
                        .value_parser(clap::value_parser!(u64))
                        .action(ArgAction::Set),
                ),
        )
        .subcommand(
            Command::new("toml")
                .about("Run using a TOML configuration file")
                .arg(
                    Arg::new("config")
                        .help("Path to the TOML config file")
                        .required(true)
                        .value_parser(clap::value_parser!(PathBuf)),
                ),
        );

    let mut cmd_for_help = cmd.clone();
    let matches = cmd.get_matches();

    match matches.subcommand() {
        Some(("sync", sub)) => {
            let mut config = MirrorConfig::default();
            config.bucket_url = sub
                .get_one::<String>("bucket_url")
                .expect("bucket_url has default_value")
                .clone();
            config.download_root = sub
                .get_one::<PathBuf>("download_root")
                .expect("download_root has default_value")
                .clone();
            if let Some(&delay) = sub.get_one::<u64>("page_delay_ms") {
                config.page_delay_ms = delay;
            }
            config.validate()?;

            run_mirror(&config).await?;
        }
        Some(("toml", sub)) => {
            let config_path = sub
                .get_one::<PathBuf>("config")
                .expect("config is required");

            let config = MirrorConfig::from_toml_file(config_path)?;

            run_mirror(&config).await?;
        }
        _ => {
            cmd_for_help
                .print_help()
                .map_err(|e| AppError::IoError(format!("Failed to print help: {e}")))?;
        }
    }

    Ok(())
}

/// Races the application future against a shutdown signal.
///
/// When `shutdown` resolves first the in-flight run is dropped and the
/// interrupt is acknowledged with a clean `Ok`.
pub async fn run_with_shutdown<R, S>(run: R, shutdown: S) -> AppResult<()>
where
    R: Future<Output = AppResult<()>>,
    S: Future<Output = ()>,
{
    tokio::select! {
        result = run => result,
        _ = shutdown => {
            info!("Interrupted, exiting");
            Ok(())
        }
    }
}

async fn run_mirror(config: &MirrorConfig) -> AppResult<()> {
    print_run_info(config);

    let client = reqwest::Client::new();

    let fetcher = HttpPageFetcher::new(client.clone());
    let keys = enumerate_keys(&fetcher, config).await?;

    let downloader = HttpObjectDownloader::new(client);
    let report = sync_keys(&downloader, &keys, config).await?;

    info!(
        total = report.total(),
        failed = report.failed,
        "All operations completed successfully"
    );

    Ok(())
}

fn print_run_info(config: &MirrorConfig) {
    info!(
        bucket_url = config.bucket_url.as_str(),
        download_root = %config.download_root.display(),
        page_delay_ms = config.page_delay_ms,
        "Starting bucket mirror"
    );
}
