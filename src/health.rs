//! # Liveness Endpoint
//!
//! Minimal HTTP server answering `GET /` so hosting platforms see the process
//! as alive. It carries no bot state.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false

use anyhow::{Context, Result};
use axum::routing::get;
use axum::Router;
use log::{error, info};
use std::net::SocketAddr;
use tokio::net::TcpListener;

pub const ONLINE_MESSAGE: &str = "Discord Bot is Online!";

pub fn router() -> Router {
    Router::new().route("/", get(|| async { ONLINE_MESSAGE }))
}

/// Bind `0.0.0.0:port` and serve the liveness route until the process exits
pub async fn serve(port: u16) -> Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind liveness server on {addr}"))?;

    info!("Web server listening on port {port}");
    axum::serve(listener, router())
        .await
        .context("liveness server stopped")
}

/// Run [`serve`] in the background; a failure is logged, never fatal
pub fn spawn(port: u16) {
    tokio::spawn(async move {
        if let Err(e) = serve(port).await {
            error!("Liveness server unavailable: {e:#}");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_root_reports_online() {
        let response = router()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], ONLINE_MESSAGE.as_bytes());
    }

    #[tokio::test]
    async fn test_other_routes_not_found() {
        let response = router()
            .oneshot(
                Request::builder()
                    .uri("/polls")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_post_not_allowed() {
        let response = router()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
