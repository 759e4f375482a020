use ai_news_digest::{pipeline, Config};
use tracing::error;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config = Config::from_env();

    if let Err(e) = pipeline::run(&config).await {
        error!("Run failed: {e}");
        return Err(e.into());
    }

    Ok(())
}
