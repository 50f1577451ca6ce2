//! models/activity_model.rs

use serde::Serialize;

/// Entrada de auditoria em `activity_logs`. Append-only, uma por lote gerado.
#[derive(Debug, Clone, Serialize)]
pub struct NewActivityLog {
    pub workspace_id: String,
    pub lead_id: String,
    pub action: String,
    /// Detalhes estruturados: campaign_id, campaign_name, variations.
    pub details: serde_json::Value,
}
