//! models/message_model.rs
//! Estruturas de request/response do endpoint e linhas de `generated_messages`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Body do POST /functions/v1/generate-messages.
/// Os campos são opcionais para que a ausência caia na validação do serviço
/// ("lead_id and campaign_id are required") e não no extractor de JSON.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateMessagesRequest {
    pub lead_id: Option<String>,
    pub campaign_id: Option<String>,
}

/// Linha de `generated_messages` como o store devolve no insert
/// (id e created_at atribuídos pelo storage).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedMessage {
    pub id: String,
    pub lead_id: String,
    pub campaign_id: String,
    pub message_text: String,
    pub variation_number: i32,
    pub was_sent: bool,
    pub sent_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// Payload do insert; o fluxo que marca `was_sent` é de outro workflow,
/// aqui sempre entra como false.
#[derive(Debug, Clone, Serialize)]
pub struct NewGeneratedMessage {
    pub lead_id: String,
    pub campaign_id: String,
    pub message_text: String,
    pub variation_number: i32,
    pub was_sent: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct GenerateMessagesResponse {
    pub success: bool,
    pub messages: Vec<GeneratedMessage>,
}
