//! models/campaign_model.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Campanha de mensagens: tom de voz, contexto da oferta e template opcional.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Campaign {
    pub id: String,
    pub workspace_id: String,
    pub name: String,
    pub description: Option<String>,
    pub offer_context: String,
    pub tone: String,
    /// Template com os placeholders {{name}}, {{email}}, {{phone}},
    /// {{company}} e {{position}}. Vazio conta como ausente.
    pub prompt_template: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}
