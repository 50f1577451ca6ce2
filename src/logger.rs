//! logger.rs
//! Configuração do logger usando env_logger.

use env_logger;

pub fn init_logger() {
    // Lê RUST_LOG do ambiente para definir o nível de log;
    // se não estiver presente, usamos "info" como default.
    let log_env = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_env))
        .format_timestamp_secs()
        .init();
}
