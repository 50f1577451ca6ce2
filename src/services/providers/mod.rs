//! services/providers/mod.rs
//! Integrações com as APIs de completion. Uma implementação por provider,
//! todas atrás do mesmo trait para o serviço não conhecer formato de request
//! nem envelope de resposta de ninguém.

use std::sync::Arc;

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use reqwest::Client;

use crate::config::app_config::AppConfig;

pub mod anthropic;
pub mod google;
pub mod groq;
pub mod openai;

pub use anthropic::AnthropicProvider;
pub use google::GoogleProvider;
pub use groq::GroqProvider;
pub use openai::OpenAiProvider;

/// Erro quando AI_API_KEY não está presente no ambiente do processo.
pub const MISSING_API_KEY: &str = "AI_API_KEY não configurada. Configure a variável de ambiente AI_API_KEY com sua chave da API de IA (Groq, Anthropic, OpenAI ou Google).";
/// Erro quando AI_PROVIDER tem um valor fora do conjunto suportado.
pub const INVALID_PROVIDER: &str = "AI_PROVIDER inválido. Use: groq, anthropic, openai ou google";

#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Nome curto do provider, usado nos logs.
    fn name(&self) -> &str;

    /// Gera uma completion de texto a partir do prompt de sistema e do
    /// prompt de usuário. Resposta não-2xx vira erro com o body cru da API.
    async fn complete(&self, system_prompt: &str, user_prompt: &str) -> Result<String>;
}

/// Mapeia o seletor de configuração para uma implementação concreta.
/// Resolvido uma vez por request, antes do loop de variações.
pub fn from_config(
    config: &AppConfig,
    http_client: &Client,
) -> Result<Arc<dyn CompletionProvider>> {
    let api_key = config
        .ai_api_key
        .clone()
        .ok_or_else(|| anyhow!(MISSING_API_KEY))?;

    match config.ai_provider.as_str() {
        "groq" => Ok(Arc::new(GroqProvider::new(api_key, http_client.clone()))),
        "anthropic" => Ok(Arc::new(AnthropicProvider::new(api_key, http_client.clone()))),
        "openai" => Ok(Arc::new(OpenAiProvider::new(api_key, http_client.clone()))),
        "google" => Ok(Arc::new(GoogleProvider::new(api_key, http_client.clone()))),
        _ => Err(anyhow!(INVALID_PROVIDER)),
    }
}
