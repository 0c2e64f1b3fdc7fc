//! Health check endpoint.

use actix_web::{HttpResponse, web};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub timestamp: String,
}

/// Health check endpoint - reports whether storage answers.
///
/// GET /health
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    let (mut builder, status) = match state.posts.storage_ready().await {
        Ok(()) => (HttpResponse::Ok(), "ok"),
        Err(e) => {
            tracing::warn!(error = %e, "Health check failed");
            (HttpResponse::ServiceUnavailable(), "unavailable")
        }
    };

    builder.json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::{App, test};
    use blog_infra::DatabaseConfig;

    use super::*;

    #[actix_web::test]
    async fn reports_ok_when_storage_answers() {
        let state = AppState::new(&DatabaseConfig::new("sqlite::memory:").with_pool(1, 1))
            .await
            .unwrap();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .route("/health", web::get().to(health_check)),
        )
        .await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "ok");
    }
}
