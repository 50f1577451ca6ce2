//! services/mod.rs
//! Módulo que agrupa os "serviços" ou "camadas de negócio" da app.

pub mod message_service;
pub mod providers;
pub mod store_service;
