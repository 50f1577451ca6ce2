//! tests/handler_tests.rs
//! Testes do endpoint HTTP: CORS, formato das respostas e taxonomia 400.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::http::header::ContentType;
    use actix_web::http::{Method, StatusCode};
    use actix_web::{test, web, App};
    use serde_json::{json, Value};

    use crate::app;
    use crate::tests::fakes::{
        sample_campaign, sample_lead, service_with, FakeProvider, FakeStore,
    };

    const ROUTE: &str = "/functions/v1/generate-messages";

    fn assert_cors_headers(resp: &actix_web::dev::ServiceResponse) {
        assert_eq!(
            resp.headers().get("Access-Control-Allow-Origin").unwrap(),
            "*"
        );
        assert_eq!(
            resp.headers().get("Access-Control-Allow-Methods").unwrap(),
            "GET, POST, PUT, DELETE, OPTIONS"
        );
        assert_eq!(
            resp.headers().get("Access-Control-Allow-Headers").unwrap(),
            "Content-Type, Authorization, X-Client-Info, Apikey"
        );
    }

    #[actix_rt::test]
    async fn test_preflight_returns_cors() {
        let app = test::init_service(App::new().configure(app::init_app)).await;

        let req = test::TestRequest::default()
            .method(Method::OPTIONS)
            .uri(ROUTE)
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert_cors_headers(&resp);
        let body = test::read_body(resp).await;
        assert!(body.is_empty());
    }

    #[actix_rt::test]
    async fn test_post_generates_and_returns_batch() {
        let store = Arc::new(FakeStore::new());
        store.add_lead(sample_lead("l1"));
        store.add_campaign(sample_campaign("c1"));
        let service = service_with(store, Arc::new(FakeProvider::new()));

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(service))
                .configure(app::init_app),
        )
        .await;

        let req = test::TestRequest::post()
            .uri(ROUTE)
            .set_json(json!({ "lead_id": "l1", "campaign_id": "c1" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert_cors_headers(&resp);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        let messages = body["messages"]
            .as_array()
            .expect("messages deveria ser array");
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[0]["variation_number"], 1);
        assert_eq!(messages[0]["was_sent"], false);
        assert_eq!(messages[0]["message_text"], "Mensagem gerada 1");
        assert_eq!(messages[2]["variation_number"], 3);
    }

    #[actix_rt::test]
    async fn test_post_missing_ids_returns_400() {
        let service = service_with(Arc::new(FakeStore::new()), Arc::new(FakeProvider::new()));
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(service))
                .configure(app::init_app),
        )
        .await;

        let req = test::TestRequest::post()
            .uri(ROUTE)
            .set_json(json!({}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_cors_headers(&resp);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "error": "lead_id and campaign_id are required" }));
    }

    #[actix_rt::test]
    async fn test_post_blank_provider_error_uses_fallback() {
        let store = Arc::new(FakeStore::new());
        store.add_lead(sample_lead("l1"));
        store.add_campaign(sample_campaign("c1"));
        let service = service_with(store, Arc::new(FakeProvider::failing_at(1, "")));
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(service))
                .configure(app::init_app),
        )
        .await;

        let req = test::TestRequest::post()
            .uri(ROUTE)
            .set_json(json!({ "lead_id": "l1", "campaign_id": "c1" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_cors_headers(&resp);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "error": "Erro ao gerar mensagens" }));
    }

    #[actix_rt::test]
    async fn test_post_unknown_lead_returns_400() {
        let store = Arc::new(FakeStore::new());
        store.add_campaign(sample_campaign("c1"));
        let service = service_with(store, Arc::new(FakeProvider::new()));
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(service))
                .configure(app::init_app),
        )
        .await;

        let req = test::TestRequest::post()
            .uri(ROUTE)
            .set_json(json!({ "lead_id": "fantasma", "campaign_id": "c1" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Lead not found");
    }

    #[actix_rt::test]
    async fn test_post_malformed_json_returns_400() {
        let service = service_with(Arc::new(FakeStore::new()), Arc::new(FakeProvider::new()));
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(service))
                .configure(app::init_app),
        )
        .await;

        let req = test::TestRequest::post()
            .uri(ROUTE)
            .insert_header(ContentType::json())
            .set_payload("{\"lead_id\": ")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_cors_headers(&resp);
        let body: Value = test::read_body_json(resp).await;
        let message = body["error"].as_str().unwrap_or_default();
        assert!(!message.is_empty(), "400 sem campo error: {}", body);
    }
}
