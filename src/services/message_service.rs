//! services/message_service.rs
//! Orquestra a geração: valida o request, carrega lead e campanha, monta os
//! prompts e roda o loop sequencial de três variações.

use std::sync::Arc;

use anyhow::{anyhow, Result};
use reqwest::Client;
use serde_json::json;

use crate::config::app_config::AppConfig;
use crate::models::activity_model::NewActivityLog;
use crate::models::message_model::{
    GenerateMessagesRequest, GenerateMessagesResponse, NewGeneratedMessage,
};
use crate::prompts;
use crate::services::providers::{self, CompletionProvider};
use crate::services::store_service::CrmStore;

/// Quantidade fixa de variações tentadas por lote.
const VARIATION_COUNT: i32 = 3;

#[derive(Clone)]
pub struct MessageService {
    config: AppConfig,
    store: Arc<dyn CrmStore>,
    http_client: Client,
    /// Quando presente, substitui a resolução por config (fakes nos testes).
    provider_override: Option<Arc<dyn CompletionProvider>>,
}

impl MessageService {
    pub fn new(config: AppConfig, store: Arc<dyn CrmStore>) -> Self {
        MessageService {
            config,
            store,
            http_client: Client::new(),
            provider_override: None,
        }
    }

    /// Constrói o serviço com um provider já resolvido, ignorando
    /// AI_API_KEY/AI_PROVIDER da config.
    #[cfg(test)]
    pub fn with_provider(
        config: AppConfig,
        store: Arc<dyn CrmStore>,
        provider: Arc<dyn CompletionProvider>,
    ) -> Self {
        MessageService {
            config,
            store,
            http_client: Client::new(),
            provider_override: Some(provider),
        }
    }

    /// Gera até três variações de mensagem para o par (lead, campanha).
    ///
    /// Erro de provider aborta o lote inteiro; erro de persistência em uma
    /// variação só derruba aquela variação. O registro em activity_logs sai
    /// uma vez por lote que terminou o loop, sempre com o total fixo de 3.
    pub async fn generate_messages(
        &self,
        req: GenerateMessagesRequest,
    ) -> Result<GenerateMessagesResponse> {
        let (lead_id, campaign_id) = match (req.lead_id.as_deref(), req.campaign_id.as_deref()) {
            (Some(lead_id), Some(campaign_id))
                if !lead_id.is_empty() && !campaign_id.is_empty() =>
            {
                (lead_id, campaign_id)
            }
            _ => return Err(anyhow!("lead_id and campaign_id are required")),
        };

        log::info!(
            "(generate_messages) Iniciando geração: lead_id={}, campaign_id={}",
            lead_id,
            campaign_id
        );

        let lead = match self.store.fetch_lead(lead_id).await {
            Ok(Some(lead)) => lead,
            Ok(None) => return Err(anyhow!("Lead not found")),
            Err(e) => {
                // Falha de consulta vira "Lead not found" para o cliente;
                // a causa real fica só no log.
                log::warn!(
                    "(generate_messages) Consulta do lead {} falhou: {:?}",
                    lead_id,
                    e
                );
                return Err(anyhow!("Lead not found"));
            }
        };

        let campaign = match self.store.fetch_campaign(campaign_id).await {
            Ok(Some(campaign)) => campaign,
            Ok(None) => return Err(anyhow!("Campaign not found")),
            Err(e) => {
                log::warn!(
                    "(generate_messages) Consulta da campanha {} falhou: {:?}",
                    campaign_id,
                    e
                );
                return Err(anyhow!("Campaign not found"));
            }
        };

        let system_prompt = prompts::build_system_prompt(&campaign);
        let user_prompt = prompts::build_user_prompt(&lead, &campaign);

        let provider = self.resolve_provider()?;

        let mut messages = Vec::new();
        for variation in 1..=VARIATION_COUNT {
            let variation_prompt = prompts::variation_prompt(&user_prompt, variation);
            let message_text = provider
                .complete(&system_prompt, &variation_prompt)
                .await?;

            log::info!(
                "(generate_messages) Variação {} gerada via {} ({} bytes)",
                variation,
                provider.name(),
                message_text.len()
            );

            let new_message = NewGeneratedMessage {
                lead_id: lead_id.to_string(),
                campaign_id: campaign_id.to_string(),
                message_text,
                variation_number: variation,
                was_sent: false,
            };

            match self.store.insert_message(&new_message).await {
                Ok(saved) => messages.push(saved),
                Err(e) => {
                    // Variação perdida sai do resultado, mas o loop segue.
                    log::error!(
                        "(generate_messages) Erro ao salvar variação {}: {:?}",
                        variation,
                        e
                    );
                }
            }
        }

        let entry = NewActivityLog {
            workspace_id: lead.workspace_id.clone(),
            lead_id: lead_id.to_string(),
            action: "message_generated".to_string(),
            details: json!({
                "campaign_id": campaign_id,
                "campaign_name": campaign.name,
                "variations": VARIATION_COUNT,
            }),
        };
        if let Err(e) = self.store.insert_activity(&entry).await {
            // Auditoria nunca derruba a resposta.
            log::warn!(
                "(generate_messages) Falha ao registrar activity_log: {:?}",
                e
            );
        }

        log::info!(
            "(generate_messages) Concluído: {} de {} variações salvas para lead_id={}",
            messages.len(),
            VARIATION_COUNT,
            lead_id
        );

        Ok(GenerateMessagesResponse {
            success: true,
            messages,
        })
    }

    fn resolve_provider(&self) -> Result<Arc<dyn CompletionProvider>> {
        if let Some(provider) = &self.provider_override {
            return Ok(provider.clone());
        }
        providers::from_config(&self.config, &self.http_client)
    }
}
