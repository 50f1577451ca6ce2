//! models/lead_model.rs
//! Linha de `leads` com os valores de campos personalizados embutidos.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lead como retornado pelo store com o select embutido
/// `*,custom_values:lead_custom_values(value,custom_fields(name))`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lead {
    pub id: String,
    pub workspace_id: String,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub position: Option<String>,
    pub lead_source: Option<String>,
    pub stage_id: Option<String>,
    pub assigned_to: Option<String>,
    pub score: i32,
    pub notes: Option<String>,
    #[serde(default)]
    pub custom_values: Vec<LeadCustomValue>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Um valor de campo personalizado com o nome do campo (join em custom_fields).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeadCustomValue {
    pub value: String,
    pub custom_fields: CustomFieldRef,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomFieldRef {
    pub name: String,
}
