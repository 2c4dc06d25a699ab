//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: All components healthy
/// - **503 Service Unavailable**: One or more components degraded
///
/// # Components Checked
///
/// 1. **Catalog**: loaded and non-empty
/// 2. **Mailer**: email service credentials present
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let catalog_check = check_catalog(&state);
    let mailer_check = check_mailer(&state);

    let all_healthy = catalog_check.status == "ok" && mailer_check.status == "ok";

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            catalog: catalog_check,
            mailer: mailer_check,
        },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

fn check_catalog(state: &AppState) -> CheckStatus {
    let count = state.catalog_service.catalog().len();
    if count > 0 {
        CheckStatus {
            status: "ok".to_string(),
            message: Some(format!("{count} tracks loaded")),
        }
    } else {
        CheckStatus {
            status: "error".to_string(),
            message: Some("Catalog is empty".to_string()),
        }
    }
}

fn check_mailer(state: &AppState) -> CheckStatus {
    if state.purchase_service.mailer_configured() {
        CheckStatus {
            status: "ok".to_string(),
            message: Some("Email service configured".to_string()),
        }
    } else {
        CheckStatus {
            status: "error".to_string(),
            message: Some("Email service credentials missing".to_string()),
        }
    }
}
