//! Activity log handlers.

use actix_web::{HttpResponse, web};

use miniblog_shared::ApiResponse;
use miniblog_shared::dto::ActivityResponse;

use crate::middleware::auth::Identity;
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /api/activity
pub async fn list_activity(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let entries: Vec<ActivityResponse> = state
        .activity
        .get_logs()
        .into_iter()
        .map(Into::into)
        .collect();

    Ok(HttpResponse::Ok().json(ApiResponse::ok(entries)))
}

/// DELETE /api/activity
pub async fn clear_activity(
    state: web::Data<AppState>,
    identity: Identity,
) -> AppResult<HttpResponse> {
    state.activity.clear_all();
    tracing::info!(user = %identity.username, "Activity log cleared by user");

    Ok(HttpResponse::Ok().json(ApiResponse::done("Activity log cleared")))
}
