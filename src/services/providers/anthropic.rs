//! services/providers/anthropic.rs

use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};

use super::CompletionProvider;

const ANTHROPIC_API_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_MODEL: &str = "claude-3-5-sonnet-20241022";
const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Messages API: system vai num campo de topo, não na lista de mensagens,
/// e a resposta vem em blocos de conteúdo.
pub struct AnthropicProvider {
    api_key: String,
    http_client: Client,
    base_url: String,
}

impl AnthropicProvider {
    pub fn new(api_key: String, http_client: Client) -> Self {
        AnthropicProvider {
            api_key,
            http_client,
            base_url: ANTHROPIC_API_URL.to_string(),
        }
    }

    pub(crate) fn build_body(system_prompt: &str, user_prompt: &str) -> Value {
        json!({
            "model": ANTHROPIC_MODEL,
            "max_tokens": 1024,
            "system": system_prompt,
            "messages": [
                { "role": "user", "content": user_prompt },
            ],
        })
    }
}

#[async_trait]
impl CompletionProvider for AnthropicProvider {
    fn name(&self) -> &str {
        "anthropic"
    }

    async fn complete(&self, system_prompt: &str, user_prompt: &str) -> Result<String> {
        let response = self
            .http_client
            .post(&self.base_url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&Self::build_body(system_prompt, user_prompt))
            .send()
            .await
            .context("Falha na chamada à API Anthropic")?;

        if !response.status().is_success() {
            let error = response.text().await.unwrap_or_default();
            return Err(anyhow!("Erro na API Anthropic: {}", error));
        }

        let data: Value = response
            .json()
            .await
            .context("Resposta inválida da API Anthropic")?;

        data["content"][0]["text"]
            .as_str()
            .map(|text| text.to_string())
            .ok_or_else(|| anyhow!("Resposta da API Anthropic sem conteúdo"))
    }
}
