use std::path::Path;

use chrono::{Duration, Utc};
use tracing::{info, warn};

use crate::collector::{Collector, FEED_URLS};
use crate::composer::{Composer, Summarizer};
use crate::config::Config;
use crate::gemini::GeminiClient;
use crate::publisher::{PublishOutcome, Publisher};
use crate::types::{NewsItem, Result};

/// Where the latest digest is persisted. Plain overwrite, no history.
pub const DIGEST_PATH: &str = "latest_digest.txt";

/// How a single run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    NoNews,
    NoDigest,
    Completed(PublishOutcome),
}

/// Write the digest to disk, replacing whatever a previous run left there.
pub fn write_digest(path: impl AsRef<Path>, text: &str) -> std::io::Result<()> {
    std::fs::write(path, text)
}

/// Run the whole pipeline once: collect, compose, persist, publish.
///
/// "No news" and "no digest" are handled paths that end the run cleanly;
/// collaborator errors bubble up to the caller.
pub async fn run(config: &Config) -> Result<()> {
    info!("Collecting news...");
    let cutoff = Utc::now() - Duration::hours(24);
    let collector = Collector::new();
    let items = collector.collect(FEED_URLS, cutoff).await?;
    info!("Found {} news items", items.len());

    let summarizer = GeminiClient::new(config.gemini_api_key.clone().unwrap_or_default());
    let composer = Composer::new(summarizer);
    let publisher = Publisher::new(config);

    match run_stages(&items, &composer, &publisher, Path::new(DIGEST_PATH)).await? {
        RunOutcome::NoNews => info!("No news in the last 24 hours, nothing to publish"),
        RunOutcome::NoDigest => warn!("Digest was not generated"),
        RunOutcome::Completed(_) => {}
    }

    Ok(())
}

/// Post-collect stages: compose, persist, publish.
///
/// Split out of [`run`] with the collaborators as parameters so the
/// short-circuit paths can be exercised without the network. With empty
/// `items` nothing later runs: no LLM call, no file write, no publish.
pub async fn run_stages<S: Summarizer>(
    items: &[NewsItem],
    composer: &Composer<S>,
    publisher: &Publisher,
    digest_path: &Path,
) -> Result<RunOutcome> {
    if items.is_empty() {
        return Ok(RunOutcome::NoNews);
    }

    info!("Generating digest...");
    let Some(digest) = composer.compose(items).await? else {
        return Ok(RunOutcome::NoDigest);
    };

    info!("--- DIGEST ---\n{digest}");

    write_digest(digest_path, &digest)?;
    info!("Digest written to {}", digest_path.display());

    let outcome = publisher.publish(&digest).await?;
    Ok(RunOutcome::Completed(outcome))
}
