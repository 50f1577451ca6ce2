//! handlers/mod.rs
//! Módulo que agrupa os handlers HTTP do serviço.
pub mod message_handler;
