use chrono::{DateTime, Utc};
use feed_rs::model::Feed;
use feed_rs::parser;
use tracing::{debug, info};

use crate::types::{DigestError, NewsItem, Result};

/// RSS feeds the digest is built from.
pub const FEED_URLS: &[&str] = &[
    "https://techcrunch.com/category/artificial-intelligence/feed/",
    "https://www.theverge.com/ai-artificial-intelligence/rss/index.xml",
    "https://news.google.com/rss/search?q=artificial+intelligence&hl=en-US&gl=US&ceid=US:en",
];

pub struct Collector {
    client: reqwest::Client,
}

impl Collector {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Fetch every feed and keep entries published strictly after `cutoff`.
    ///
    /// Output preserves feed order, then entry order within each feed; no
    /// cross-feed sorting or deduplication. A feed that cannot be fetched
    /// or parsed aborts the whole collection.
    pub async fn collect(
        &self,
        feed_urls: &[&str],
        cutoff: DateTime<Utc>,
    ) -> Result<Vec<NewsItem>> {
        let mut items = Vec::new();

        for url in feed_urls {
            debug!("Fetching feed: {url}");

            let body = self
                .client
                .get(*url)
                .send()
                .await?
                .error_for_status()?
                .bytes()
                .await?;

            let feed = parser::parse(body.as_ref())
                .map_err(|e| DigestError::Parse(format!("{url}: {e}")))?;

            let recent = filter_recent(&feed, cutoff);
            info!("{url}: {} recent entries", recent.len());
            items.extend(recent);
        }

        Ok(items)
    }
}

impl Default for Collector {
    fn default() -> Self {
        Self::new()
    }
}

/// Keep entries whose publication timestamp is strictly later than
/// `cutoff`. Entries without a parseable timestamp are silently skipped,
/// as are entries missing a title or link. Missing summaries become empty
/// strings.
pub fn filter_recent(feed: &Feed, cutoff: DateTime<Utc>) -> Vec<NewsItem> {
    feed.entries
        .iter()
        .filter(|entry| matches!(entry.published, Some(ts) if ts > cutoff))
        .filter_map(|entry| {
            let title = entry.title.as_ref()?.content.clone();
            let link = entry.links.first()?.href.clone();
            let summary = entry
                .summary
                .as_ref()
                .map(|s| s.content.clone())
                .unwrap_or_default();

            Some(NewsItem {
                title,
                link,
                summary,
            })
        })
        .collect()
}
