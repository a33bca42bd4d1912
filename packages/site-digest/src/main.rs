// Entry point: prompt for a URL, run the pipeline once, exit.

use anyhow::{Context, Result};
use site_digest::{input, pipeline, Config, PipelineDeps};
use tokio::io::BufReader;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Config first: it loads .env, which may carry RUST_LOG
    let config = Config::from_env().context("Failed to load configuration")?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let deps = PipelineDeps::from_config(&config)?;

    let mut stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = tokio::io::stdout();
    let url = input::read_website_url(&mut stdin, &mut stdout).await?;

    let outcome = pipeline::run(&deps, &url).await?;
    tracing::info!(
        website = %outcome.record.website,
        saved_to = ?outcome.sinks,
        "Done"
    );

    Ok(())
}
