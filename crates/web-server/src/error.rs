use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use selection::SelectionError;
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Selection(#[from] SelectionError),
}

/// Converts our custom `AppError` into an HTTP response.
///
/// Every body is a `{ success: false, error, details? }` object so clients
/// can render failures uniformly.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, details) = match self {
            AppError::Selection(SelectionError::UnknownStrategy(id)) => (
                StatusCode::NOT_FOUND,
                format!("unknown strategy '{id}'"),
                Vec::new(),
            ),
            AppError::Selection(SelectionError::InvalidParameters(errors)) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "invalid strategy parameters".to_string(),
                errors,
            ),
            AppError::Selection(err) => {
                tracing::error!(error = ?err, "Selection error.");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal error occurred".to_string(),
                    Vec::new(),
                )
            }
        };

        let body = if details.is_empty() {
            json!({ "success": false, "error": message })
        } else {
            json!({ "success": false, "error": message, "details": details })
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_strategy_maps_to_404() {
        let response =
            AppError::Selection(SelectionError::UnknownStrategy("x".to_string())).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn invalid_parameters_map_to_422() {
        let response = AppError::Selection(SelectionError::InvalidParameters(vec![
            "parameter `topN` must be a non-negative integer".to_string(),
        ]))
        .into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
