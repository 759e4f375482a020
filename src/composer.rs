use async_trait::async_trait;
use tracing::debug;

use crate::types::{NewsItem, Result};

/// At most this many items are folded into the prompt, however many the
/// collector produced.
pub const MAX_PROMPT_ITEMS: usize = 15;

/// Seam between the composer and the LLM backend.
#[async_trait]
pub trait Summarizer: Send + Sync {
    /// Single generation call: prompt in, raw text out. No streaming,
    /// no retries.
    async fn generate(&self, prompt: &str) -> Result<String>;
}

pub struct Composer<S> {
    summarizer: S,
}

impl<S: Summarizer> Composer<S> {
    pub fn new(summarizer: S) -> Self {
        Self { summarizer }
    }

    /// Build the digest from collected items. `Ok(None)` when there is
    /// nothing to digest; the LLM is not called in that case.
    pub async fn compose(&self, items: &[NewsItem]) -> Result<Option<String>> {
        if items.is_empty() {
            return Ok(None);
        }

        let prompt = build_prompt(items);
        debug!("Prompt assembled ({} chars)", prompt.len());

        let digest = self.summarizer.generate(&prompt).await?;
        Ok(Some(digest))
    }
}

/// Render the first [`MAX_PROMPT_ITEMS`] items into the fixed instruction
/// template for the "One News AI" channel.
pub fn build_prompt(items: &[NewsItem]) -> String {
    let mut news_block = String::new();
    for item in items.iter().take(MAX_PROMPT_ITEMS) {
        news_block.push_str(&format!(
            "Title: {}\nSummary: {}\nLink: {}\n\n",
            item.title, item.summary, item.link
        ));
    }

    format!(
        r#"Ты - AI-Orchestrator и Digital Entrepreneur. Твоя задача - превратить скучный список новостей в мощный дайджест для Telegram-канала "One News AI". Твоя аудитория - люди, которые хотят делать деньги и строить будущее с помощью ИИ.

Используй следующий список новостей:
{news_block}
СТРУКТУРА ПОСТА (ИСПОЛЬЗУЙ ТОЛЬКО HTML):
1. <b>Заголовок:</b> ⚡️ <b>ONE NEWS AI | ТВОЙ ПРЕДЕЛЬНЫЙ ДАЙДЖЕСТ</b>
Добавь текущую дату и короткую, дерзкую фразу о состоянии рынка сегодня.

2. <b>Новости (3-4 самых денежных или технологичных):</b>
🔹 <a href="..."><b>ЗАГОЛОВОК НОВОСТИ</b></a>
📝 <b>Суть:</b> Кратко, что произошло.
💰 <b>Impact:</b> Как на этом заработать, сэкономить или какой бизнес запустить на этой базе. Будь прагматичен.
────────────────────

3. <b>🛠 ИНСТРУМЕНТ / ПРОМПТ ДНЯ:</b>
Найди среди новостей или предложи сам один конкретный ИИ-инструмент или "золотой промпт", который можно протестировать прямо сейчас. Опиши его ценность.

4. <b>🎙 МНЕНИЕ ХАЙЗЕНБЕРГА:</b>
Добавь 1-2 ироничных, глубоких или циничных предложения от лица "Доктора Хайзенберга" (твоего внутреннего AI-директора) по поводу сегодняшней повестки. Это должна быть "база", которая заставит задуматься.

5. <b>Футер:</b> #AI #Money #Future #Automation

ВАЖНО:
- НЕ ИСПОЛЬЗУЙ тег <br>. Используй обычные переносы строк.
- Только разрешенные теги: <b>, <i>, <a>.
- Будь острым на язык, избегай корпоративного булшита."#
    )
}
