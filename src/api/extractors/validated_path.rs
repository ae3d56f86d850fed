//! Path parameters with structured rejections.

use axum::{
    async_trait,
    extract::{rejection::PathRejection, FromRequestParts, Path},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

use crate::errors::AppError;

/// Path parameters that failed to parse reject with a validation error
/// instead of axum's plain-text 400.
pub struct ValidatedPath<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for ValidatedPath<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(path_error)?;

        Ok(ValidatedPath(value))
    }
}

fn path_error(rejection: PathRejection) -> AppError {
    tracing::debug!("Path rejected: {}", rejection.body_text());
    match rejection {
        PathRejection::FailedToDeserializePathParams(_) => {
            AppError::validation("id deve ser um número inteiro válido")
        }
        other => AppError::internal(format!("Path parameters unavailable: {}", other.body_text())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request, routing::get, Router};
    use tower::ServiceExt;

    async fn echo(ValidatedPath(id): ValidatedPath<i32>) -> String {
        id.to_string()
    }

    async fn call(uri: &str) -> (axum::http::StatusCode, String) {
        let app = Router::new().route("/items/:id", get(echo));
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_integer_id_passes_through() {
        let (status, body) = call("/items/42").await;
        assert_eq!(status, axum::http::StatusCode::OK);
        assert_eq!(body, "42");
    }

    #[tokio::test]
    async fn test_non_integer_id_is_validation_error() {
        for uri in ["/items/abc", "/items/99999999999"] {
            let (status, body) = call(uri).await;
            assert_eq!(status, axum::http::StatusCode::BAD_REQUEST);
            let json: serde_json::Value = serde_json::from_str(&body).unwrap();
            assert_eq!(json["codigo"], "VALIDATION_ERROR");
            assert_eq!(json["detalhes"][0], "id deve ser um número inteiro válido");
        }
    }
}
