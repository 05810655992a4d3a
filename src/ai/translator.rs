//! AI-assisted translation over an OpenAI-compatible chat-completion API.
//!
//! One request per record with untranslated cells. The model is asked to
//! answer with a bare JSON object mapping each missing locale to its
//! translation; anything else is an Api error. Batch translation is
//! strictly sequential with a fixed inter-call delay to stay under burst
//! rate limits, and a failed record keeps its original values rather than
//! aborting the batch.

use std::collections::BTreeMap;
use std::thread;
use std::time::Duration;

use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::AiConfig;
use crate::core::record::LocalizationRecord;
use crate::error::{AppError, Result};

use super::prompt::user_prompt;

/// Delay between consecutive chat-completion calls in a batch.
const RATE_LIMIT_DELAY: Duration = Duration::from_millis(100);

const DEFAULT_TEMPERATURE: f32 = 0.3;
const DEFAULT_MAX_TOKENS: u32 = 1000;

/// HTTP request timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Result of a batch run.
#[derive(Debug, Default)]
pub struct BatchOutcome {
    /// One record per input, translated where the call succeeded and the
    /// original where it failed or needed nothing.
    pub records: Vec<LocalizationRecord>,
    /// Keys whose translation call failed, with the error.
    pub failures: Vec<(String, AppError)>,
}

/// Client for AI translation suggestions.
pub struct Translator {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
    system_prompt: String,
}

impl Translator {
    /// Build a translator from settings plus the API key.
    ///
    /// A missing key is an Authentication error up front, before any
    /// request is attempted.
    pub fn new(settings: &AiConfig, api_key: Option<String>) -> Result<Self> {
        let api_key = api_key
            .filter(|key| !key.is_empty())
            .ok_or_else(|| AppError::Authentication("AI API key is required".to_string()))?;

        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|err| AppError::Network(err.to_string()))?;

        Ok(Self {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            api_key,
            model: settings.model.clone(),
            system_prompt: settings.system_prompt.clone(),
        })
    }

    /// Fill the untranslated cells of one record.
    ///
    /// A record with no empty cells is returned unchanged without a call.
    /// Only previously-empty locales are overwritten; existing translations
    /// are never touched.
    pub fn suggest(&self, record: &LocalizationRecord) -> Result<LocalizationRecord> {
        if record.key.is_empty() {
            return Err(AppError::validation("localization record must have a key"));
        }
        let missing = record.untranslated_locales();
        if missing.is_empty() {
            return Ok(record.clone());
        }

        debug!(key = %record.key, missing = missing.len(), "requesting AI suggestion");
        let content = self.complete(vec![
            ChatMessage {
                role: "system",
                content: self.system_prompt.clone(),
            },
            ChatMessage {
                role: "user",
                content: user_prompt(record),
            },
        ])?;

        let translations = parse_translations(&content)?;
        let mut translated = record.clone();
        for locale in missing {
            if let Some(value) = translations.get(locale) {
                translated.values.insert(locale.to_string(), value.clone());
            }
        }
        Ok(translated)
    }

    /// Translate a batch of records, strictly sequentially.
    ///
    /// Each record's failure is recorded and its original values kept; the
    /// batch always runs to the end.
    pub fn batch(&self, records: &[LocalizationRecord]) -> BatchOutcome {
        let mut outcome = BatchOutcome::default();
        for record in records {
            match self.suggest(record) {
                Ok(translated) => {
                    outcome.records.push(translated);
                    thread::sleep(RATE_LIMIT_DELAY);
                }
                Err(err) => {
                    warn!(key = %record.key, %err, "keeping record untranslated");
                    outcome.failures.push((record.key.clone(), err));
                    outcome.records.push(record.clone());
                }
            }
        }
        outcome
    }

    /// Check that the endpoint, key, and model can answer at all, with a
    /// minimal one-message completion.
    pub fn validate(&self) -> bool {
        let result = self.complete_with(
            vec![ChatMessage {
                role: "user",
                content: "Test".to_string(),
            }],
            5,
        );
        result.is_ok()
    }

    fn complete(&self, messages: Vec<ChatMessage>) -> Result<String> {
        self.complete_with(messages, DEFAULT_MAX_TOKENS)
    }

    fn complete_with(&self, messages: Vec<ChatMessage>, max_tokens: u32) -> Result<String> {
        let request = ChatRequest {
            model: self.model.clone(),
            messages,
            temperature: DEFAULT_TEMPERATURE,
            max_tokens,
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()?;

        let status = response.status();
        if status.as_u16() == 401 {
            return Err(AppError::Authentication("invalid AI API key".to_string()));
        }
        if status.as_u16() == 429 {
            return Err(AppError::api(
                Some(429),
                "AI API rate limit exceeded".to_string(),
            ));
        }
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(AppError::api(Some(status.as_u16()), body));
        }

        let completion: ChatResponse = response
            .json()
            .map_err(|err| AppError::api(None, format!("malformed completion: {}", err)))?;
        completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.is_empty())
            .ok_or_else(|| AppError::api(None, "empty response from AI API"))
    }
}

impl std::fmt::Debug for Translator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Translator")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .finish()
    }
}

/// Parse the model's answer into `locale → translation`.
///
/// Code fences are tolerated and stripped; any other deviation from a JSON
/// object of strings is an Api error carrying the raw response.
fn parse_translations(content: &str) -> Result<BTreeMap<String, String>> {
    let trimmed = strip_code_fence(content.trim());
    serde_json::from_str::<BTreeMap<String, String>>(trimmed).map_err(|_| {
        AppError::api(
            None,
            format!("AI response is not a JSON object of strings: {}", content),
        )
    })
}

fn strip_code_fence(content: &str) -> &str {
    let Some(rest) = content.strip_prefix("```") else {
        return content;
    };
    // Drop the info string ("json") up to the first newline, and the
    // closing fence.
    let rest = rest.split_once('\n').map(|(_, body)| body).unwrap_or(rest);
    rest.rsplit_once("```").map(|(body, _)| body).unwrap_or(rest).trim()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_parse_translations_plain_object() {
        let parsed = parse_translations(r#"{"vi": "xin chao", "fr": "bonjour"}"#).unwrap();
        assert_eq!(parsed["vi"], "xin chao");
        assert_eq!(parsed["fr"], "bonjour");
    }

    #[test]
    fn test_parse_translations_strips_code_fence() {
        let parsed = parse_translations("```json\n{\"vi\": \"xin chao\"}\n```").unwrap();
        assert_eq!(parsed["vi"], "xin chao");
    }

    #[test]
    fn test_parse_translations_rejects_prose() {
        let err = parse_translations("Sure! Here are the translations: vi=...").unwrap_err();
        assert!(matches!(err, AppError::Api { .. }));
    }

    #[test]
    fn test_missing_api_key_is_authentication_error() {
        let err = Translator::new(&AiConfig::default(), None).unwrap_err();
        assert!(matches!(err, AppError::Authentication(_)));

        let err = Translator::new(&AiConfig::default(), Some(String::new())).unwrap_err();
        assert!(matches!(err, AppError::Authentication(_)));
    }
}
