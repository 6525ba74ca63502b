use poem::{
    Endpoint, EndpointExt, Route, Server as PoemServer, listener::TcpListener,
    middleware::{Cors, Tracing},
};
use poem_openapi::OpenApiService;

use crate::{config::app_config::AppConfig, setup::dependency_injection::DependencyContainer};

pub struct Server;

impl Server {
    pub async fn run(config: AppConfig, container: DependencyContainer) -> anyhow::Result<()> {
        let addr = config.server.bind_address();
        let app = build_app(container, config.cors, format!("http://{}", addr));
        tracing::info!("Server running at http://{}", addr);
        tracing::info!("Swagger UI at http://{}/docs", addr);
        tracing::info!("OpenAPI JSON at http://{}/openapi.json", addr);
        PoemServer::new(TcpListener::bind(&addr)).run(app).await?;
        Ok(())
    }
}

/// Assembles the routes, docs and middleware around the APIs in `container`.
pub fn build_app(container: DependencyContainer, cors: Cors, server_url: String) -> impl Endpoint {
    let api_service = OpenApiService::new(
        (
            container.root_api,
            container.product_api,
            container.recommendation_api,
        ),
        "AI Product Recommendation API",
        env!("CARGO_PKG_VERSION"),
    )
    .server(server_url);
    let ui = api_service.swagger_ui();
    let spec = api_service.spec_endpoint();
    Route::new()
        .nest("/docs", ui)
        .nest("/openapi.json", spec)
        .nest("/", api_service)
        .with(cors)
        .with(Tracing)
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use poem::http::StatusCode;
    use poem::test::{TestClient, TestResponse};
    use serde_json::{Value, json};

    use business::domain::product::model::Product;
    use business::domain::product::repository::ProductCatalog;
    use business::domain::recommendation::errors::RecommendationError;
    use business::domain::recommendation::services::CompletionService;
    use catalog::product::repository::StaticProductCatalog;

    use super::*;
    use crate::config::cors_config::cors_for_origins;

    const FRONTEND_ORIGIN: &str = "http://localhost:5173";

    /// Replies with a canned completion and records the prompts it was given.
    struct StubCompletion {
        reply: Result<&'static str, ()>,
        prompts: Mutex<Vec<String>>,
    }

    impl StubCompletion {
        fn replying(reply: &'static str) -> Arc<Self> {
            Arc::new(Self {
                reply: Ok(reply),
                prompts: Mutex::new(vec![]),
            })
        }

        fn failing() -> Arc<Self> {
            Arc::new(Self {
                reply: Err(()),
                prompts: Mutex::new(vec![]),
            })
        }
    }

    #[async_trait]
    impl CompletionService for StubCompletion {
        async fn complete(
            &self,
            _system_prompt: &str,
            user_prompt: &str,
            _temperature: f32,
        ) -> Result<String, RecommendationError> {
            self.prompts.lock().unwrap().push(user_prompt.to_string());
            self.reply
                .map(|r| r.to_string())
                .map_err(|_| RecommendationError::CompletionFailed)
        }
    }

    fn test_catalog() -> Arc<dyn ProductCatalog> {
        Arc::new(
            StaticProductCatalog::new(vec![
                Product::new(1, "Wireless Earbuds", "electronics", 59.99),
                Product::new(2, "Yoga Mat", "sports", 24.5),
                Product::new(3, "USB-C Fast Charger", "electronics", 19.99),
                Product::new(5, "Desk Lamp", "home", 34.99),
            ])
            .unwrap(),
        )
    }

    fn client(completion: Arc<StubCompletion>) -> TestClient<impl Endpoint> {
        let container = DependencyContainer::new(test_catalog(), completion);
        let cors = cors_for_origins(&[FRONTEND_ORIGIN.to_string()]);
        TestClient::new(build_app(container, cors, "http://localhost".to_string()))
    }

    async fn body_json(resp: TestResponse) -> Value {
        resp.0.into_body().into_json().await.unwrap()
    }

    fn assert_serveable<E: Endpoint + 'static>(_: &E) {}

    #[test]
    fn should_build_static_app_from_temporary_server_url() {
        let container = DependencyContainer::new(test_catalog(), StubCompletion::replying("[]"));
        let cors = cors_for_origins(&[FRONTEND_ORIGIN.to_string()]);
        let app = build_app(container, cors, format!("http://{}:{}", "127.0.0.1", 8000));

        assert_serveable(&app);
    }

    #[tokio::test]
    async fn should_report_status_on_root() {
        let cli = client(StubCompletion::replying("[]"));

        let resp = cli.get("/").send().await;

        resp.assert_status_is_ok();
        assert_eq!(
            body_json(resp).await,
            json!({"status": "ok", "message": "AI Product Recommender backend running"})
        );
    }

    #[tokio::test]
    async fn should_list_full_catalog() {
        let cli = client(StubCompletion::replying("[]"));

        let resp = cli.get("/products").send().await;

        resp.assert_status_is_ok();
        let body = body_json(resp).await;
        let products = body["products"].as_array().unwrap();
        assert_eq!(products.len(), 4);
        assert_eq!(
            products[2],
            json!({"id": 3, "name": "USB-C Fast Charger", "category": "electronics", "price": 19.99})
        );
    }

    #[tokio::test]
    async fn should_recommend_cheap_electronics() {
        let completion = StubCompletion::replying("[3]");
        let cli = client(completion.clone());

        let resp = cli
            .post("/recommend")
            .body_json(&json!({"preferences": "cheap electronics"}))
            .send()
            .await;

        resp.assert_status_is_ok();
        let body = body_json(resp).await;
        assert_eq!(body["ids"], json!([3]));
        assert_eq!(
            body["recommendedProducts"],
            json!([{"id": 3, "name": "USB-C Fast Charger", "category": "electronics", "price": 19.99}])
        );
        assert!(body["recommendedProducts"][0]["price"].as_f64().unwrap() < 25.0);

        let prompts = completion.prompts.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("\"cheap electronics\""));
    }

    #[tokio::test]
    async fn should_order_products_by_catalog_and_ids_by_model() {
        let cli = client(StubCompletion::replying("Try these: [5, 1, 42]"));

        let resp = cli
            .post("/recommend")
            .body_json(&json!({"preferences": "gifts"}))
            .send()
            .await;

        resp.assert_status_is_ok();
        let body = body_json(resp).await;
        assert_eq!(body["ids"], json!([5, 1]));
        let product_ids: Vec<i64> = body["recommendedProducts"]
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["id"].as_i64().unwrap())
            .collect();
        assert_eq!(product_ids, vec![1, 5]);
    }

    #[tokio::test]
    async fn should_return_empty_result_for_unparseable_reply() {
        let cli = client(StubCompletion::replying("I cannot help with that."));

        let resp = cli
            .post("/recommend")
            .body_json(&json!({"preferences": "a spaceship"}))
            .send()
            .await;

        resp.assert_status_is_ok();
        assert_eq!(
            body_json(resp).await,
            json!({"ids": [], "recommendedProducts": []})
        );
    }

    #[tokio::test]
    async fn should_return_bad_gateway_when_upstream_fails() {
        let cli = client(StubCompletion::failing());

        let resp = cli
            .post("/recommend")
            .body_json(&json!({"preferences": "anything"}))
            .send()
            .await;

        resp.assert_status(StatusCode::BAD_GATEWAY);
        assert_eq!(
            body_json(resp).await,
            json!({"name": "UpstreamError", "message": "recommendation.completion_failed"})
        );
    }

    #[tokio::test]
    async fn should_reject_body_without_preferences() {
        let completion = StubCompletion::replying("[1]");
        let cli = client(completion.clone());

        let resp = cli
            .post("/recommend")
            .body_json(&json!({"likes": "music"}))
            .send()
            .await;

        resp.assert_status(StatusCode::BAD_REQUEST);
        assert!(completion.prompts.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_allow_frontend_origin_with_credentials() {
        let cli = client(StubCompletion::replying("[]"));

        let resp = cli
            .get("/products")
            .header("Origin", FRONTEND_ORIGIN)
            .send()
            .await;

        resp.assert_status_is_ok();
        resp.assert_header("access-control-allow-origin", FRONTEND_ORIGIN);
        resp.assert_header("access-control-allow-credentials", "true");
    }
}
