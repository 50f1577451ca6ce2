//! services/providers/openai.rs

use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};

use super::CompletionProvider;

const OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";
const OPENAI_MODEL: &str = "gpt-3.5-turbo";

/// Mesmo formato de chat do Groq, mas sem temperature explícita
/// (fica o default da API).
pub struct OpenAiProvider {
    api_key: String,
    http_client: Client,
    base_url: String,
}

impl OpenAiProvider {
    pub fn new(api_key: String, http_client: Client) -> Self {
        OpenAiProvider {
            api_key,
            http_client,
            base_url: OPENAI_API_URL.to_string(),
        }
    }

    pub(crate) fn build_body(system_prompt: &str, user_prompt: &str) -> Value {
        json!({
            "model": OPENAI_MODEL,
            "messages": [
                { "role": "system", "content": system_prompt },
                { "role": "user", "content": user_prompt },
            ],
            "max_tokens": 1024,
        })
    }
}

#[async_trait]
impl CompletionProvider for OpenAiProvider {
    fn name(&self) -> &str {
        "openai"
    }

    async fn complete(&self, system_prompt: &str, user_prompt: &str) -> Result<String> {
        let response = self
            .http_client
            .post(&self.base_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&Self::build_body(system_prompt, user_prompt))
            .send()
            .await
            .context("Falha na chamada à API OpenAI")?;

        if !response.status().is_success() {
            let error = response.text().await.unwrap_or_default();
            return Err(anyhow!("Erro na API OpenAI: {}", error));
        }

        let data: Value = response
            .json()
            .await
            .context("Resposta inválida da API OpenAI")?;

        data["choices"][0]["message"]["content"]
            .as_str()
            .map(|text| text.to_string())
            .ok_or_else(|| anyhow!("Resposta da API OpenAI sem conteúdo"))
    }
}
