use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;

/// Envelope for successful writes: a message plus the stored resource
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub mensagem: String,
    pub dados: T,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            mensagem: message.into(),
            dados: data,
        }
    }
}

/// 201 response wrapping the created resource in an [`ApiResponse`]
pub struct Created<T: Serialize>(pub &'static str, pub T);

impl<T: Serialize> IntoResponse for Created<T> {
    fn into_response(self) -> axum::response::Response {
        (
            StatusCode::CREATED,
            Json(ApiResponse::with_message(self.1, self.0)),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_created_envelope() {
        let response = Created("Consulta registrada com sucesso", serde_json::json!({"id": 1}))
            .into_response();
        assert_eq!(response.status(), StatusCode::CREATED);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["mensagem"], "Consulta registrada com sucesso");
        assert_eq!(body["dados"]["id"], 1);
    }
}
