//! services/providers/groq.rs

use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};

use super::CompletionProvider;

const GROQ_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
const GROQ_MODEL: &str = "llama-3.1-8b-instant";

/// Chat completions estilo OpenAI, com temperature explícita.
pub struct GroqProvider {
    api_key: String,
    http_client: Client,
    base_url: String,
}

impl GroqProvider {
    pub fn new(api_key: String, http_client: Client) -> Self {
        GroqProvider {
            api_key,
            http_client,
            base_url: GROQ_API_URL.to_string(),
        }
    }

    pub(crate) fn build_body(system_prompt: &str, user_prompt: &str) -> Value {
        json!({
            "model": GROQ_MODEL,
            "messages": [
                { "role": "system", "content": system_prompt },
                { "role": "user", "content": user_prompt },
            ],
            "max_tokens": 1024,
            "temperature": 0.8,
        })
    }
}

#[async_trait]
impl CompletionProvider for GroqProvider {
    fn name(&self) -> &str {
        "groq"
    }

    async fn complete(&self, system_prompt: &str, user_prompt: &str) -> Result<String> {
        let response = self
            .http_client
            .post(&self.base_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&Self::build_body(system_prompt, user_prompt))
            .send()
            .await
            .context("Falha na chamada à API Groq")?;

        if !response.status().is_success() {
            let error = response.text().await.unwrap_or_default();
            return Err(anyhow!("Erro na API Groq: {}", error));
        }

        let data: Value = response
            .json()
            .await
            .context("Resposta inválida da API Groq")?;

        data["choices"][0]["message"]["content"]
            .as_str()
            .map(|text| text.to_string())
            .ok_or_else(|| anyhow!("Resposta da API Groq sem conteúdo"))
    }
}
