use std::sync::Arc;

use cache::{Cache, MemoryCache};
use presence_sync_service::{processor::Worker, Config, Result};
use tokio::fs::File;
use tokio::io::{stdin, BufReader};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = Config::from_env()?;

    let cache = Arc::new(MemoryCache::new(config.cache_options()));
    let worker = Worker::new(Arc::clone(&cache));

    let summary = match &config.input_path {
        Some(path) => {
            info!(path = %path.display(), "Reading frames from file");
            worker.run(BufReader::new(File::open(path).await?)).await?
        }
        None => {
            info!("Reading frames from stdin");
            worker.run(BufReader::new(stdin())).await?
        }
    };

    info!(
        frames = summary.frames,
        applied = summary.applied,
        skipped = summary.skipped,
        unresolved = summary.unresolved,
        malformed = summary.malformed,
        guilds = cache.get_guild_count()?,
        "Finished processing input"
    );

    #[cfg(feature = "metrics")]
    if config.print_metrics {
        print_metrics()?;
    }

    Ok(())
}

#[cfg(feature = "metrics")]
fn print_metrics() -> Result<()> {
    use prometheus::{Encoder, TextEncoder};

    let mut buffer = Vec::new();
    TextEncoder::new().encode(&prometheus::gather(), &mut buffer)?;
    println!("{}", String::from_utf8_lossy(&buffer));

    Ok(())
}
