//! Handler for the purchase notification endpoint.

use axum::{Json, extract::State};

use crate::api::dto::purchase::{PurchaseAccepted, PurchaseRequest};
use crate::error::AppError;
use crate::state::AppState;

/// Accepts a purchase submission and notifies the studio by email.
///
/// # Endpoint
///
/// `POST /api/purchase`
///
/// # Request Body
///
/// ```json
/// {
///   "name": "Asha",
///   "email": "asha@example.com",
///   "beats": [ { "id": 16, "title": "...", "price": 3499, ... } ]
/// }
/// ```
///
/// # Responses
///
/// - **200** `{"message": "Email sent successfully"}`
/// - **400** `{"error": "Missing required fields"}` when name, email, or a
///   non-empty beats array is absent; the email service is never called
/// - **500** `{"error": <service message>}` when delivery is rejected
/// - **500** `{"error": "Something went wrong"}` on any other fault
/// - **504** `{"error": "Email service timed out"}` when the bounded timeout
///   elapses; never retried automatically
pub async fn purchase_handler(
    State(state): State<AppState>,
    Json(payload): Json<PurchaseRequest>,
) -> Result<Json<PurchaseAccepted>, AppError> {
    let name = payload.name.unwrap_or_default();
    let email = payload.email.unwrap_or_default();
    let beats = payload.beats.unwrap_or_default();

    state.purchase_service.process(&name, &email, &beats).await?;

    Ok(Json(PurchaseAccepted::new()))
}
