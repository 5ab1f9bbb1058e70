use actix_web::HttpResponse;
use thiserror::Error;

use crate::domain::errors::LedgerError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found")]
    NotFound,

    #[error("Illegal transition: {0}")]
    IllegalTransition(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Order commit failed: {0}")]
    CommitFailed(String),

    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<LedgerError> for AppError {
    fn from(e: LedgerError) -> Self {
        match e {
            LedgerError::NotFound => AppError::NotFound,
            LedgerError::IllegalTransition { .. } => AppError::IllegalTransition(e.to_string()),
            LedgerError::CommitFailed(msg) => AppError::CommitFailed(msg),
            LedgerError::StorageUnavailable(msg) => AppError::StorageUnavailable(msg),
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::NotFound => HttpResponse::NotFound().json(serde_json::json!({
                "error": self.to_string()
            })),
            AppError::IllegalTransition(_) => HttpResponse::Conflict().json(serde_json::json!({
                "error": self.to_string()
            })),
            AppError::BadRequest(_) => HttpResponse::BadRequest().json(serde_json::json!({
                "error": self.to_string()
            })),
            AppError::StorageUnavailable(_) => {
                HttpResponse::ServiceUnavailable().json(serde_json::json!({
                    "error": "Storage unavailable"
                }))
            }
            AppError::CommitFailed(_) | AppError::Internal(_) => {
                HttpResponse::InternalServerError().json(serde_json::json!({
                    "error": "Internal server error"
                }))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::ResponseError;

    use super::*;
    use crate::domain::status::OrderStatus;

    #[test]
    fn not_found_returns_404() {
        assert_eq!(AppError::NotFound.error_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn illegal_transition_returns_409() {
        let err = AppError::IllegalTransition("READY -> RECEIVED".to_string());
        assert_eq!(err.error_response().status(), StatusCode::CONFLICT);
    }

    #[test]
    fn bad_request_returns_400() {
        let err = AppError::BadRequest("empty customer name".to_string());
        assert_eq!(err.error_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn commit_failed_returns_500() {
        let err = AppError::CommitFailed("rollback".to_string());
        assert_eq!(
            err.error_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn storage_unavailable_returns_503() {
        let err = AppError::StorageUnavailable("pool timeout".to_string());
        assert_eq!(
            err.error_response().status(),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }

    #[test]
    fn ledger_not_found_maps_to_app_not_found() {
        let app_err: AppError = LedgerError::NotFound.into();
        assert!(matches!(app_err, AppError::NotFound));
    }

    #[test]
    fn ledger_illegal_transition_maps_to_conflict() {
        let app_err: AppError = LedgerError::IllegalTransition {
            from: OrderStatus::Ready,
            to: OrderStatus::Received,
        }
        .into();
        assert!(matches!(app_err, AppError::IllegalTransition(_)));
    }

    #[test]
    fn ledger_commit_failed_maps_to_commit_failed() {
        let app_err: AppError = LedgerError::CommitFailed("boom".to_string()).into();
        assert!(matches!(app_err, AppError::CommitFailed(_)));
    }
}
