//! services/providers/google.rs

use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};

use super::CompletionProvider;

const GOOGLE_API_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-pro:generateContent";

/// generateContent não separa system de user: vai tudo num blob de texto
/// único, e a chave vai na query string em vez de header.
pub struct GoogleProvider {
    api_key: String,
    http_client: Client,
    base_url: String,
}

impl GoogleProvider {
    pub fn new(api_key: String, http_client: Client) -> Self {
        GoogleProvider {
            api_key,
            http_client,
            base_url: GOOGLE_API_URL.to_string(),
        }
    }

    pub(crate) fn endpoint(&self) -> String {
        format!("{}?key={}", self.base_url, self.api_key)
    }

    pub(crate) fn build_body(system_prompt: &str, user_prompt: &str) -> Value {
        json!({
            "contents": [{
                "parts": [{
                    "text": format!("{}\n\n{}", system_prompt, user_prompt),
                }],
            }],
        })
    }
}

#[async_trait]
impl CompletionProvider for GoogleProvider {
    fn name(&self) -> &str {
        "google"
    }

    async fn complete(&self, system_prompt: &str, user_prompt: &str) -> Result<String> {
        let response = self
            .http_client
            .post(self.endpoint())
            .json(&Self::build_body(system_prompt, user_prompt))
            .send()
            .await
            .context("Falha na chamada à API Google")?;

        if !response.status().is_success() {
            let error = response.text().await.unwrap_or_default();
            return Err(anyhow!("Erro na API Google: {}", error));
        }

        let data: Value = response
            .json()
            .await
            .context("Resposta inválida da API Google")?;

        data["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .map(|text| text.to_string())
            .ok_or_else(|| anyhow!("Resposta da API Google sem conteúdo"))
    }
}
