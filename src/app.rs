//! app.rs
use crate::handlers::message_handler;
use actix_web::error::InternalError;
use actix_web::http::Method;
use actix_web::{error, web, HttpRequest, HttpResponse};

/// JSON inválido no corpo também vira 400 `{ "error": ... }` com CORS,
/// o mesmo formato do resto do endpoint.
fn json_error_handler(err: error::JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let response = message_handler::with_cors(HttpResponse::BadRequest())
        .json(serde_json::json!({ "error": err.to_string() }));
    InternalError::from_response(err, response).into()
}

pub fn init_app(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .service(
            web::scope("/functions/v1").service(
                web::resource("/generate-messages")
                    .route(web::post().to(message_handler::generate_messages_endpoint))
                    .route(
                        web::route()
                            .method(Method::OPTIONS)
                            .to(message_handler::preflight_endpoint),
                    ),
            ),
        );
}
