use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use dotenv::dotenv;

use crate::config::app_config::AppConfig;
use crate::logger::init_logger;
use crate::services::message_service::MessageService;
use crate::services::store_service::SupabaseStore;

mod app;
mod config;
mod handlers;
mod logger;
mod models;
mod prompts;
mod services;

#[cfg(test)]
mod tests;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok(); // Carregar .env no início
    init_logger();

    let config = AppConfig::from_env().expect("Configuração inválida");
    let store = Arc::new(SupabaseStore::new(&config));
    let message_service = MessageService::new(config, store);

    // Levantar servidor
    log::info!("Subindo servidor em 0.0.0.0:8000");
    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(message_service.clone()))
            .configure(app::init_app)
    })
    .workers(1)
    .bind(("0.0.0.0", 8000))?
    .run()
    .await
}
