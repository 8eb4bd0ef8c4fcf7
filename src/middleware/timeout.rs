//! Límite de tiempo por petición
//!
//! Una petición que supera la ventana se corta con un 408 y el cuerpo de
//! error estándar. La escritura en curso, si la hay, termina igualmente.

use axum::{error_handling::HandleErrorLayer, Router};
use std::time::Duration;
use tower::{timeout::error::Elapsed, BoxError, ServiceBuilder};

use crate::utils::errors::AppError;

pub fn with_request_timeout<S>(router: Router<S>, timeout: Duration) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router.layer(
        ServiceBuilder::new()
            .layer(HandleErrorLayer::new(handle_timeout_error))
            .timeout(timeout),
    )
}

async fn handle_timeout_error(err: BoxError) -> AppError {
    if err.is::<Elapsed>() {
        tracing::warn!("⏰ Petición cortada por timeout");
        AppError::Timeout("The request took too long to complete".to_string())
    } else {
        AppError::Internal(format!("Unhandled middleware error: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        routing::get,
    };
    use tower::ServiceExt;

    fn slow_router(timeout: Duration) -> Router {
        let router = Router::new().route(
            "/slow",
            get(|| async {
                tokio::time::sleep(Duration::from_millis(500)).await;
                "done"
            }),
        );
        with_request_timeout(router, timeout)
    }

    async fn call(router: Router) -> (StatusCode, serde_json::Value) {
        let request = Request::builder().uri("/slow").body(Body::empty()).unwrap();
        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap_or_default())
    }

    #[tokio::test]
    async fn test_slow_request_returns_408() {
        let (status, body) = call(slow_router(Duration::from_millis(20))).await;

        assert_eq!(status, StatusCode::REQUEST_TIMEOUT);
        assert_eq!(body["code"], "REQUEST_TIMEOUT");
    }

    #[tokio::test]
    async fn test_request_within_window_passes() {
        let (status, _) = call(slow_router(Duration::from_secs(5))).await;
        assert_eq!(status, StatusCode::OK);
    }
}
