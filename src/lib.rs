pub mod collector;
pub mod composer;
pub mod config;
pub mod gemini;
pub mod pipeline;
pub mod publisher;
pub mod types;

pub use collector::{filter_recent, Collector, FEED_URLS};
pub use composer::{build_prompt, Composer, Summarizer, MAX_PROMPT_ITEMS};
pub use config::Config;
pub use gemini::GeminiClient;
pub use pipeline::{run, run_stages, write_digest, RunOutcome, DIGEST_PATH};
pub use publisher::{PublishOutcome, Publisher};
pub use types::{DigestError, NewsItem, Result};
