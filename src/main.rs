use clap::Parser;
use readnext_api::RestApi;
use readnext_engine::Recommender;
use readnext_ingest::load_catalog;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// A hybrid book recommendation engine
#[derive(Parser, Debug)]
#[command(name = "readnext")]
#[command(about = "A hybrid book recommendation engine", long_about = None)]
struct Args {
    /// Path to the data directory (books.csv, users.csv, ratings.csv)
    #[arg(short, long, default_value = "./data")]
    data_dir: PathBuf,

    /// HTTP API port
    #[arg(long, default_value_t = 3000)]
    http_port: u16,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting readnext v{}", env!("CARGO_PKG_VERSION"));
    info!("Data directory: {:?}", args.data_dir);
    info!("HTTP API port: {}", args.http_port);

    // Ingestion completes before any scoring call is possible
    let catalog = load_catalog(&args.data_dir)?;
    info!(
        "Catalog loaded: {} items, {} users, {} ratings",
        catalog.item_count(),
        catalog.user_count(),
        catalog.rating_count()
    );

    let recommender = Arc::new(Recommender::new(catalog));

    let recommender_http = recommender.clone();
    let http_port = args.http_port;
    let http_handle = std::thread::spawn(move || {
        info!("Starting HTTP server on port {}", http_port);
        let sys = actix_web::rt::System::new();
        sys.block_on(async {
            if let Err(e) = RestApi::start(recommender_http, http_port).await {
                eprintln!("HTTP server error: {}", e);
            }
        })
    });

    info!("readnext started successfully");
    info!("HTTP API: http://localhost:{}/", args.http_port);

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            info!("Shutdown signal received");
        }
        _ = tokio::task::spawn_blocking(move || {
            http_handle.join().ok();
        }) => {
            info!("HTTP server stopped");
        }
    }

    info!("Shutting down...");
    Ok(())
}
