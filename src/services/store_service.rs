//! services/store_service.rs
//! Acesso ao backend hospedado via REST. O schema mora lá; aqui só
//! consultamos e inserimos linhas com a service key.

use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use reqwest::Client;

use crate::config::app_config::AppConfig;
use crate::models::activity_model::NewActivityLog;
use crate::models::campaign_model::Campaign;
use crate::models::lead_model::Lead;
use crate::models::message_model::{GeneratedMessage, NewGeneratedMessage};

/// Select embutido que traz os valores de campos personalizados junto com o
/// nome de cada campo, no mesmo formato que o frontend consome.
const LEAD_SELECT: &str = "*,custom_values:lead_custom_values(value,custom_fields(name))";

/// Interface do store consumida pelo MessageService. Trait para permitir
/// fakes em memória nos testes, sem rede.
#[async_trait]
pub trait CrmStore: Send + Sync {
    async fn fetch_lead(&self, lead_id: &str) -> Result<Option<Lead>>;
    async fn fetch_campaign(&self, campaign_id: &str) -> Result<Option<Campaign>>;
    async fn insert_message(&self, new_message: &NewGeneratedMessage) -> Result<GeneratedMessage>;
    async fn insert_activity(&self, entry: &NewActivityLog) -> Result<()>;
}

/// Cliente REST do backend (PostgREST): filtros `id=eq.{id}` e headers
/// `apikey` + `Authorization: Bearer` com a service role key.
#[derive(Clone)]
pub struct SupabaseStore {
    base_url: String,
    service_key: String,
    http_client: Client,
}

impl SupabaseStore {
    pub fn new(config: &AppConfig) -> Self {
        SupabaseStore {
            base_url: config.supabase_url.trim_end_matches('/').to_string(),
            service_key: config.supabase_service_key.clone(),
            http_client: Client::new(),
        }
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    fn authed(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        builder
            .header("apikey", &self.service_key)
            .header("Authorization", format!("Bearer {}", self.service_key))
    }

    /// GET com filtro por id; devolve a primeira linha do array retornado,
    /// ou None quando o filtro não casa com nada.
    async fn fetch_single<T: serde::de::DeserializeOwned>(
        &self,
        table: &str,
        id: &str,
        select: &str,
    ) -> Result<Option<T>> {
        let id_filter = format!("eq.{}", id);
        let response = self
            .authed(self.http_client.get(self.table_url(table)))
            .query(&[("id", id_filter.as_str()), ("select", select)])
            .send()
            .await
            .with_context(|| format!("Falha na requisição ao store ({})", table))?;

        if !response.status().is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(anyhow!("Erro consultando {}: {}", table, body));
        }

        let mut rows: Vec<T> = response
            .json()
            .await
            .with_context(|| format!("Resposta inválida do store ({})", table))?;

        if rows.is_empty() {
            Ok(None)
        } else {
            Ok(Some(rows.remove(0)))
        }
    }
}

#[async_trait]
impl CrmStore for SupabaseStore {
    async fn fetch_lead(&self, lead_id: &str) -> Result<Option<Lead>> {
        self.fetch_single("leads", lead_id, LEAD_SELECT).await
    }

    async fn fetch_campaign(&self, campaign_id: &str) -> Result<Option<Campaign>> {
        self.fetch_single("campaigns", campaign_id, "*").await
    }

    async fn insert_message(&self, new_message: &NewGeneratedMessage) -> Result<GeneratedMessage> {
        let response = self
            .authed(self.http_client.post(self.table_url("generated_messages")))
            .header("Prefer", "return=representation")
            .json(new_message)
            .send()
            .await
            .context("Falha na requisição ao store (generated_messages)")?;

        if !response.status().is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(anyhow!("Erro ao salvar mensagem gerada: {}", body));
        }

        // Com return=representation o PostgREST devolve um array com a linha
        // criada (id e created_at atribuídos pelo storage).
        let mut rows: Vec<GeneratedMessage> = response
            .json()
            .await
            .context("Resposta inválida do store (generated_messages)")?;

        rows.pop()
            .ok_or_else(|| anyhow!("Insert em generated_messages não retornou a linha criada"))
    }

    async fn insert_activity(&self, entry: &NewActivityLog) -> Result<()> {
        let response = self
            .authed(self.http_client.post(self.table_url("activity_logs")))
            .header("Prefer", "return=minimal")
            .json(entry)
            .send()
            .await
            .context("Falha na requisição ao store (activity_logs)")?;

        if !response.status().is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(anyhow!("Erro ao registrar activity_log: {}", body));
        }

        Ok(())
    }
}
