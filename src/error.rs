use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Request errors surfaced by the gateway handlers / 网关请求错误
///
/// Messages are short and fixed. Backend details only go to the log.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(&'static str),

    #[error("{message}: {source}")]
    Storage {
        message: &'static str,
        #[source]
        source: anyhow::Error,
    },
}

impl ApiError {
    pub fn storage(message: &'static str, source: anyhow::Error) -> Self {
        ApiError::Storage { message, source }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Storage { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message returned to the caller / 返回给调用方的消息
    pub fn public_message(&self) -> &'static str {
        match self {
            ApiError::BadRequest(message) => *message,
            ApiError::Storage { message, .. } => *message,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Storage { message, source } = &self {
            tracing::error!("{}: {:#}", message, source);
        }

        let mut response = (self.status_code(), format!("{}\n", self.public_message())).into_response();
        let headers = response.headers_mut();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("text/plain; charset=utf-8"),
        );
        headers.insert(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        );
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bad_request_maps_to_400() {
        let response = ApiError::BadRequest("File name is required").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/plain; charset=utf-8"
        );
    }

    #[test]
    fn test_storage_hides_source() {
        let err = ApiError::storage(
            "Unable to get file",
            anyhow::anyhow!("connection refused: localhost:9000"),
        );
        assert_eq!(err.public_message(), "Unable to get file");
        assert!(err.to_string().contains("connection refused"));

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.headers()[header::X_CONTENT_TYPE_OPTIONS], "nosniff");
    }
}
