//! models/mod.rs
//! Módulo raiz para modelos/estruturas compartilhadas.

pub mod activity_model;
pub mod campaign_model;
pub mod lead_model;
pub mod message_model;
