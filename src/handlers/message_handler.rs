//! handlers/message_handler.rs
//! Endpoint de geração de mensagens + preflight CORS.

use actix_web::{web, HttpResponse, HttpResponseBuilder};
use log::error;
use serde_json::json;
use uuid::Uuid;

use crate::models::message_model::GenerateMessagesRequest;
use crate::services::message_service::MessageService;

/// Headers CORS aplicados em toda resposta (sucesso, erro e preflight),
/// iguais aos que o frontend já espera.
pub const CORS_HEADERS: [(&str, &str); 3] = [
    ("Access-Control-Allow-Origin", "*"),
    ("Access-Control-Allow-Methods", "GET, POST, PUT, DELETE, OPTIONS"),
    (
        "Access-Control-Allow-Headers",
        "Content-Type, Authorization, X-Client-Info, Apikey",
    ),
];

/// Texto genérico quando o erro não traz mensagem nenhuma.
const FALLBACK_ERROR: &str = "Erro ao gerar mensagens";

pub fn with_cors(mut builder: HttpResponseBuilder) -> HttpResponseBuilder {
    for (name, value) in CORS_HEADERS {
        builder.append_header((name, value));
    }
    builder
}

/// OPTIONS /functions/v1/generate-messages
pub async fn preflight_endpoint() -> HttpResponse {
    with_cors(HttpResponse::Ok()).finish()
}

/// POST /functions/v1/generate-messages
/// Qualquer falha (validação, not found, configuração, provider) sai como
/// 400 com `{ "error": ... }`; só o texto distingue as causas.
pub async fn generate_messages_endpoint(
    message_service: web::Data<MessageService>,
    body: web::Json<GenerateMessagesRequest>,
) -> HttpResponse {
    let request_id = Uuid::new_v4();
    log::info!(
        "(generate_messages_endpoint) request_id={} recebido",
        request_id
    );

    match message_service.generate_messages(body.into_inner()).await {
        Ok(resp) => {
            log::info!(
                "(generate_messages_endpoint) request_id={} concluído com {} mensagens",
                request_id,
                resp.messages.len()
            );
            with_cors(HttpResponse::Ok()).json(resp)
        }
        Err(e) => {
            error!(
                "(generate_messages_endpoint) request_id={} erro: {:?}",
                request_id, e
            );
            let mut message = e.to_string();
            if message.is_empty() {
                message = FALLBACK_ERROR.to_string();
            }
            with_cors(HttpResponse::BadRequest()).json(json!({ "error": message }))
        }
    }
}
