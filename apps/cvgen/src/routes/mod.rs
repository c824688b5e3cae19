use axum::{extract::DefaultBodyLimit, routing::post, Router};

use crate::errors::AppError;
use crate::generation::handlers;
use crate::state::AppState;

/// Base64 photos inflate payloads well past axum's 2 MB default.
const MAX_BODY_BYTES: usize = 25 * 1024 * 1024;

async fn not_found() -> AppError {
    AppError::NotFound
}

/// `POST /generate` is the only route; every other method or path is a 404.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/generate",
            post(handlers::handle_generate).fallback(not_found),
        )
        .fallback(not_found)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, Request, StatusCode},
    };
    use tower::ServiceExt;

    use super::*;
    use crate::document::CvDocument;
    use crate::render::{DocumentEngine, DocxEngine, RenderError};
    use crate::template::default_template_style;

    fn app() -> Router {
        let style = default_template_style();
        build_router(AppState {
            engine: Arc::new(DocxEngine::new(&style)),
            style: Arc::new(style),
        })
    }

    fn post_generate(body: impl Into<Body>) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri("/generate")
            .header(header::CONTENT_TYPE, "application/json")
            .body(body.into())
            .unwrap()
    }

    async fn json_body(response: axum::response::Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_generate_returns_docx_attachment() {
        let payload = serde_json::json!({
            "firstName": "Anna",
            "lastName": "Schmidt",
            "education": [],
            "certifications": [],
            "experience": [],
            "skills": { "Fachkenntnisse": [], "Sprachkenntnisse": [], "other_skills": [] },
            "training": []
        });

        let response = app()
            .oneshot(post_generate(payload.to_string()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
        );
        let disposition = response.headers()[header::CONTENT_DISPOSITION]
            .to_str()
            .unwrap()
            .to_string();
        assert_eq!(disposition, "attachment; filename=\"CV_Anna_Schmidt.docx\"");

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(!bytes.is_empty());
        assert_eq!(&bytes[..2], b"PK");
    }

    #[tokio::test]
    async fn test_empty_body_generates_unknown_document() {
        let response = app().oneshot(post_generate(Body::empty())).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"CV_Unknown_Unknown.docx\""
        );
    }

    #[tokio::test]
    async fn test_invalid_json_returns_400_with_error() {
        let response = app().oneshot(post_generate("{oops")).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/json"
        );
        let body = json_body(response).await;
        assert!(body["error"].as_str().unwrap().starts_with("Invalid JSON"));
    }

    #[tokio::test]
    async fn test_malformed_image_returns_400() {
        let payload = serde_json::json!({ "firstName": "A", "image": "data:image/png;base64" });
        let response = app()
            .oneshot(post_generate(payload.to_string()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            json_body(response).await["error"],
            "Invalid data URI: missing base64 part"
        );
    }

    #[tokio::test]
    async fn test_unknown_path_is_404() {
        let request = Request::builder()
            .method(Method::POST)
            .uri("/other")
            .body(Body::empty())
            .unwrap();
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"Not Found");
    }

    #[tokio::test]
    async fn test_wrong_method_is_404() {
        let request = Request::builder()
            .method(Method::GET)
            .uri("/generate")
            .body(Body::empty())
            .unwrap();
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_oversized_body_returns_400() {
        let oversized = vec![b' '; MAX_BODY_BYTES + 1];
        let response = app().oneshot(post_generate(oversized)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_body(response).await;
        assert!(body["error"]
            .as_str()
            .unwrap()
            .starts_with("Failed to read request body"));
    }

    struct FailingEngine;

    impl DocumentEngine for FailingEngine {
        fn content_type(&self) -> &'static str {
            "application/octet-stream"
        }

        fn render(&self, _document: &CvDocument) -> Result<Vec<u8>, RenderError> {
            Err(RenderError::Package("disk full".to_string()))
        }
    }

    #[tokio::test]
    async fn test_engine_failure_returns_400_and_server_keeps_serving() {
        let app = build_router(AppState {
            engine: Arc::new(FailingEngine),
            style: Arc::new(default_template_style()),
        });

        for _ in 0..2 {
            let response = app
                .clone()
                .oneshot(post_generate("{}"))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
            assert_eq!(
                json_body(response).await["error"],
                "Failed to write document package: disk full"
            );
        }
    }
}
