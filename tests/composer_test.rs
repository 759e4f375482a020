use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use ai_news_digest::{build_prompt, Composer, NewsItem, Result, Summarizer, MAX_PROMPT_ITEMS};
use async_trait::async_trait;

/// Test double that records whether and with what it was called.
struct MockSummarizer {
    called: Arc<AtomicBool>,
    last_prompt: Arc<Mutex<Option<String>>>,
    response: String,
}

impl MockSummarizer {
    fn new(response: &str) -> (Self, Arc<AtomicBool>, Arc<Mutex<Option<String>>>) {
        let called = Arc::new(AtomicBool::new(false));
        let last_prompt = Arc::new(Mutex::new(None));
        let mock = Self {
            called: called.clone(),
            last_prompt: last_prompt.clone(),
            response: response.to_string(),
        };
        (mock, called, last_prompt)
    }
}

#[async_trait]
impl Summarizer for MockSummarizer {
    async fn generate(&self, prompt: &str) -> Result<String> {
        self.called.store(true, Ordering::SeqCst);
        *self.last_prompt.lock().unwrap() = Some(prompt.to_string());
        Ok(self.response.clone())
    }
}

fn items(count: usize) -> Vec<NewsItem> {
    (1..=count)
        .map(|i| NewsItem {
            title: format!("Headline {i}"),
            link: format!("https://example.com/{i}"),
            summary: format!("Summary {i}"),
        })
        .collect()
}

#[tokio::test]
async fn empty_input_yields_no_digest_and_no_llm_call() {
    let (mock, called, _) = MockSummarizer::new("unused");
    let composer = Composer::new(mock);

    let digest = composer.compose(&[]).await.unwrap();

    assert!(digest.is_none());
    assert!(!called.load(Ordering::SeqCst));
}

#[tokio::test]
async fn compose_returns_the_llm_text_verbatim() {
    let (mock, called, last_prompt) = MockSummarizer::new("<b>digest</b>");
    let composer = Composer::new(mock);

    let digest = composer.compose(&items(3)).await.unwrap();

    assert_eq!(digest.as_deref(), Some("<b>digest</b>"));
    assert!(called.load(Ordering::SeqCst));

    let prompt = last_prompt.lock().unwrap().clone().unwrap();
    assert!(prompt.contains("Headline 1"));
    assert!(prompt.contains("https://example.com/3"));
}

#[test]
fn prompt_is_capped_at_fifteen_items() {
    let prompt = build_prompt(&items(20));

    assert!(prompt.contains("Headline 15"));
    assert!(!prompt.contains("Headline 16"));
    assert_eq!(prompt.matches("Title: ").count(), MAX_PROMPT_ITEMS);
}

#[test]
fn prompt_keeps_collector_order() {
    let prompt = build_prompt(&items(3));

    let first = prompt.find("Headline 1").unwrap();
    let second = prompt.find("Headline 2").unwrap();
    let third = prompt.find("Headline 3").unwrap();
    assert!(first < second && second < third);
}

#[test]
fn prompt_carries_the_fixed_template() {
    let prompt = build_prompt(&items(1));

    assert!(prompt.contains("ONE NEWS AI"));
    assert!(prompt.contains("Title: Headline 1\nSummary: Summary 1\nLink: https://example.com/1"));
    assert!(prompt.contains("#AI #Money #Future #Automation"));
    // Markup constraint: only <b>, <i>, <a>, and no <br>.
    assert!(prompt.contains("Только разрешенные теги: <b>, <i>, <a>."));
    assert!(prompt.contains("НЕ ИСПОЛЬЗУЙ тег <br>"));
}
