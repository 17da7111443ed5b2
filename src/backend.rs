//! Generation backend abstraction and implementations.
//!
//! Defines the [`GenerationBackend`] trait and concrete adapters:
//! - **[`GeminiBackend`]** — Google Gemini `generateContent` API.
//! - **[`OpenAiBackend`]** — OpenAI chat completions API.
//! - **[`GroqBackend`]** — Groq, which speaks the OpenAI-compatible format.
//! - **[`OllamaBackend`]** — local Ollama server; the fallback when no
//!   remote credential is configured.
//!
//! # Backend Selection
//!
//! [`select_backend`] walks a fixed precedence list (Gemini, OpenAI, Groq)
//! and picks the first backend with a configured credential, falling back
//! to Ollama. Exactly one backend is invoked per run.
//!
//! # Error Contract
//!
//! Every adapter returns `Result<String>`: HTTP errors, undecodable
//! responses, and absent or empty completions all fail the call. There is
//! no retry; one call yields one terminal result.

use anyhow::{bail, Context, Result};
use serde_json::{json, Value};

use crate::config::GenerationConfig;

const OPENAI_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";
const GROQ_ENDPOINT: &str = "https://api.groq.com/openai/v1/chat/completions";
const GEMINI_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// One text-generation provider.
///
/// `generate` sends the fixed system instruction plus the assembled prompt
/// as user content and returns the textual completion.
pub trait GenerationBackend {
    /// Short identifier, used in status output (e.g. `"gemini"`).
    fn name(&self) -> &'static str;
    /// Run one completion. Blocking; no retry.
    fn generate(&self, system_instruction: &str, user_content: &str) -> Result<String>;
}

/// Provider API keys, in precedence order.
///
/// Each key comes from its CLI flag, falling back to the matching
/// environment variable.
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    pub gemini_api_key: Option<String>,
    pub openai_api_key: Option<String>,
    pub groq_api_key: Option<String>,
}

impl Credentials {
    pub fn resolve(
        gemini: Option<String>,
        openai: Option<String>,
        groq: Option<String>,
    ) -> Self {
        Self {
            gemini_api_key: gemini.or_else(|| env_key("GEMINI_API_KEY")),
            openai_api_key: openai.or_else(|| env_key("OPENAI_API_KEY")),
            groq_api_key: groq.or_else(|| env_key("GROQ_API_KEY")),
        }
    }
}

fn env_key(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

/// Pick the backend for this run: first configured credential wins, in the
/// order Gemini, OpenAI, Groq; otherwise the local Ollama fallback.
pub fn select_backend(
    creds: &Credentials,
    config: &GenerationConfig,
) -> Box<dyn GenerationBackend> {
    let candidates: Vec<Option<Box<dyn GenerationBackend>>> = vec![
        creds
            .gemini_api_key
            .clone()
            .map(|key| Box::new(GeminiBackend::new(key, config)) as Box<dyn GenerationBackend>),
        creds
            .openai_api_key
            .clone()
            .map(|key| Box::new(OpenAiBackend::new(key, config)) as Box<dyn GenerationBackend>),
        creds
            .groq_api_key
            .clone()
            .map(|key| Box::new(GroqBackend::new(key, config)) as Box<dyn GenerationBackend>),
    ];

    candidates
        .into_iter()
        .flatten()
        .next()
        .unwrap_or_else(|| Box::new(OllamaBackend::new(config)))
}

// ============ Gemini ============

/// Backend using the Google Gemini `generateContent` endpoint.
pub struct GeminiBackend {
    api_key: String,
    model: String,
}

impl GeminiBackend {
    pub fn new(api_key: String, config: &GenerationConfig) -> Self {
        Self {
            api_key,
            model: config.gemini_model.clone(),
        }
    }
}

impl GenerationBackend for GeminiBackend {
    fn name(&self) -> &'static str {
        "gemini"
    }

    fn generate(&self, system_instruction: &str, user_content: &str) -> Result<String> {
        let url = format!(
            "{}/{}:generateContent?key={}",
            GEMINI_BASE, self.model, self.api_key
        );
        let body = json!({
            "systemInstruction": {
                "parts": [{ "text": system_instruction }]
            },
            "contents": [{
                "role": "user",
                "parts": [{ "text": user_content }]
            }]
        });

        let response = reqwest::blocking::Client::new()
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .context("Gemini request failed")?;

        let status = response.status();
        if !status.is_success() {
            let body_text = response.text().unwrap_or_default();
            bail!("Gemini API error {}: {}", status, body_text);
        }

        let json: Value = response.json().context("Failed to decode Gemini response")?;
        parse_gemini_response(&json)
    }
}

/// Extract the completion from a `generateContent` response:
/// `candidates[0].content.parts[].text`, concatenated.
fn parse_gemini_response(json: &Value) -> Result<String> {
    let parts = json
        .get("candidates")
        .and_then(|c| c.get(0))
        .and_then(|c| c.get("content"))
        .and_then(|c| c.get("parts"))
        .and_then(|p| p.as_array())
        .ok_or_else(|| anyhow::anyhow!("Invalid Gemini response: missing candidates"))?;

    let text: String = parts
        .iter()
        .filter_map(|p| p.get("text").and_then(|t| t.as_str()))
        .collect();

    if text.is_empty() {
        bail!("Gemini returned an empty completion");
    }
    Ok(text)
}

// ============ OpenAI-compatible (OpenAI, Groq) ============

/// Backend using the OpenAI chat completions API.
pub struct OpenAiBackend {
    api_key: String,
    model: String,
}

impl OpenAiBackend {
    pub fn new(api_key: String, config: &GenerationConfig) -> Self {
        Self {
            api_key,
            model: config.openai_model.clone(),
        }
    }
}

impl GenerationBackend for OpenAiBackend {
    fn name(&self) -> &'static str {
        "openai"
    }

    fn generate(&self, system_instruction: &str, user_content: &str) -> Result<String> {
        chat_completion(
            OPENAI_ENDPOINT,
            &self.api_key,
            &self.model,
            system_instruction,
            user_content,
            "OpenAI",
        )
    }
}

/// Backend using the Groq API (OpenAI-compatible wire format).
pub struct GroqBackend {
    api_key: String,
    model: String,
}

impl GroqBackend {
    pub fn new(api_key: String, config: &GenerationConfig) -> Self {
        Self {
            api_key,
            model: config.groq_model.clone(),
        }
    }
}

impl GenerationBackend for GroqBackend {
    fn name(&self) -> &'static str {
        "groq"
    }

    fn generate(&self, system_instruction: &str, user_content: &str) -> Result<String> {
        chat_completion(
            GROQ_ENDPOINT,
            &self.api_key,
            &self.model,
            system_instruction,
            user_content,
            "Groq",
        )
    }
}

/// One OpenAI-compatible chat completion call.
fn chat_completion(
    endpoint: &str,
    api_key: &str,
    model: &str,
    system_instruction: &str,
    user_content: &str,
    provider: &str,
) -> Result<String> {
    let body = json!({
        "model": model,
        "messages": [
            { "role": "system", "content": system_instruction },
            { "role": "user", "content": user_content }
        ]
    });

    let response = reqwest::blocking::Client::new()
        .post(endpoint)
        .header("Authorization", format!("Bearer {}", api_key))
        .header("Content-Type", "application/json")
        .json(&body)
        .send()
        .with_context(|| format!("{} request failed", provider))?;

    let status = response.status();
    if !status.is_success() {
        let body_text = response.text().unwrap_or_default();
        bail!("{} API error {}: {}", provider, status, body_text);
    }

    let json: Value = response
        .json()
        .with_context(|| format!("Failed to decode {} response", provider))?;
    parse_chat_response(&json, provider)
}

/// Extract the completion from an OpenAI-compatible response:
/// `choices[0].message.content`.
fn parse_chat_response(json: &Value, provider: &str) -> Result<String> {
    let content = json
        .get("choices")
        .and_then(|c| c.get(0))
        .and_then(|c| c.get("message"))
        .and_then(|m| m.get("content"))
        .and_then(|c| c.as_str())
        .ok_or_else(|| anyhow::anyhow!("Invalid {} response: missing message content", provider))?;

    if content.is_empty() {
        bail!("{} returned an empty completion", provider);
    }
    Ok(content.to_string())
}

// ============ Ollama ============

/// Backend using a local Ollama server (`/api/chat`, non-streaming).
pub struct OllamaBackend {
    url: String,
    model: String,
    num_ctx: u32,
}

impl OllamaBackend {
    pub fn new(config: &GenerationConfig) -> Self {
        Self {
            url: config.ollama_url.clone(),
            model: config.ollama_model.clone(),
            num_ctx: config.ollama_num_ctx,
        }
    }
}

impl GenerationBackend for OllamaBackend {
    fn name(&self) -> &'static str {
        "ollama"
    }

    fn generate(&self, system_instruction: &str, user_content: &str) -> Result<String> {
        let body = json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": system_instruction },
                { "role": "user", "content": user_content }
            ],
            "stream": false,
            "options": { "num_ctx": self.num_ctx }
        });

        let response = reqwest::blocking::Client::new()
            .post(format!("{}/api/chat", self.url))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .context("Ollama request failed (is the server running?)")?;

        let status = response.status();
        if !status.is_success() {
            let body_text = response.text().unwrap_or_default();
            bail!("Ollama API error {}: {}", status, body_text);
        }

        let json: Value = response.json().context("Failed to decode Ollama response")?;
        parse_ollama_response(&json)
    }
}

/// Extract the completion from an Ollama `/api/chat` response:
/// `message.content`.
fn parse_ollama_response(json: &Value) -> Result<String> {
    let content = json
        .get("message")
        .and_then(|m| m.get("content"))
        .and_then(|c| c.as_str())
        .ok_or_else(|| anyhow::anyhow!("Invalid Ollama response: missing message content"))?;

    if content.is_empty() {
        bail!("Ollama returned an empty completion");
    }
    Ok(content.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn creds(gemini: bool, openai: bool, groq: bool) -> Credentials {
        Credentials {
            gemini_api_key: gemini.then(|| "g-key".to_string()),
            openai_api_key: openai.then(|| "o-key".to_string()),
            groq_api_key: groq.then(|| "q-key".to_string()),
        }
    }

    #[test]
    fn gemini_wins_over_all_others() {
        let backend = select_backend(&creds(true, true, true), &GenerationConfig::default());
        assert_eq!(backend.name(), "gemini");
    }

    #[test]
    fn openai_wins_over_groq() {
        let backend = select_backend(&creds(false, true, true), &GenerationConfig::default());
        assert_eq!(backend.name(), "openai");
    }

    #[test]
    fn groq_selected_when_only_key() {
        let backend = select_backend(&creds(false, false, true), &GenerationConfig::default());
        assert_eq!(backend.name(), "groq");
    }

    #[test]
    fn ollama_is_the_fallback() {
        let backend = select_backend(&creds(false, false, false), &GenerationConfig::default());
        assert_eq!(backend.name(), "ollama");
    }

    #[test]
    fn chat_response_parsed() {
        let json = json!({
            "choices": [{ "message": { "role": "assistant", "content": "# Title" } }]
        });
        assert_eq!(parse_chat_response(&json, "OpenAI").unwrap(), "# Title");
    }

    #[test]
    fn chat_response_empty_content_is_an_error() {
        let json = json!({
            "choices": [{ "message": { "role": "assistant", "content": "" } }]
        });
        let err = parse_chat_response(&json, "OpenAI").unwrap_err();
        assert!(err.to_string().contains("empty completion"));
    }

    #[test]
    fn chat_response_missing_choices_is_an_error() {
        let json = json!({ "error": { "message": "overloaded" } });
        assert!(parse_chat_response(&json, "Groq").is_err());
    }

    #[test]
    fn gemini_response_concatenates_parts() {
        let json = json!({
            "candidates": [{
                "content": {
                    "parts": [{ "text": "# Ti" }, { "text": "tle" }]
                }
            }]
        });
        assert_eq!(parse_gemini_response(&json).unwrap(), "# Title");
    }

    #[test]
    fn gemini_response_without_candidates_is_an_error() {
        let json = json!({ "promptFeedback": { "blockReason": "SAFETY" } });
        assert!(parse_gemini_response(&json).is_err());
    }

    #[test]
    fn ollama_response_parsed() {
        let json = json!({ "message": { "role": "assistant", "content": "body" } });
        assert_eq!(parse_ollama_response(&json).unwrap(), "body");
    }

    #[test]
    fn ollama_unexpected_structure_is_an_error() {
        let json = json!({ "done": true });
        assert!(parse_ollama_response(&json).is_err());
    }
}
