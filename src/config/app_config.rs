//! config/app_config.rs
//! Configuração do processo, lida uma única vez do ambiente e injetada nos
//! serviços na construção (nenhum serviço lê env por conta própria).

use anyhow::{Context, Result};
use std::env;

/// Provider usado quando AI_PROVIDER não está definido (ou está vazio).
pub const DEFAULT_AI_PROVIDER: &str = "groq";

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// URL base do projeto no backend hospedado (ex.: https://xyz.supabase.co).
    pub supabase_url: String,
    /// Chave privilegiada (service role) usada nas chamadas REST ao store.
    pub supabase_service_key: String,
    /// Credencial do provider de IA. Ausente aqui vira erro por request,
    /// nunca falha de startup.
    pub ai_api_key: Option<String>,
    /// Seletor do provider: groq, anthropic, openai ou google.
    pub ai_provider: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let supabase_url =
            env::var("SUPABASE_URL").context("SUPABASE_URL não definida no ambiente")?;
        let supabase_service_key = env::var("SUPABASE_SERVICE_ROLE_KEY")
            .context("SUPABASE_SERVICE_ROLE_KEY não definida no ambiente")?;

        // Strings vazias contam como ausentes.
        let ai_api_key = env::var("AI_API_KEY").ok().filter(|v| !v.is_empty());
        let ai_provider = Self::provider_or_default(env::var("AI_PROVIDER").ok());

        Ok(AppConfig {
            supabase_url,
            supabase_service_key,
            ai_api_key,
            ai_provider,
        })
    }

    /// Normaliza o seletor: None ou vazio caem no default "groq". A validação
    /// do valor em si acontece por request, em providers::from_config.
    pub fn provider_or_default(raw: Option<String>) -> String {
        match raw {
            Some(value) if !value.is_empty() => value,
            _ => DEFAULT_AI_PROVIDER.to_string(),
        }
    }
}
