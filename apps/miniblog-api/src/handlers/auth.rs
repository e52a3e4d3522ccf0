//! Authentication handlers.

use actix_web::{HttpResponse, web};

use miniblog_core::ports::AuthError;
use miniblog_shared::dto::{AuthResponse, LoginRequest, MeResponse};

use crate::middleware::auth::Identity;
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// POST /api/auth/login
pub async fn login(
    state: web::Data<AppState>,
    body: web::Json<LoginRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let user = state
        .users
        .authenticate(&req.username, &req.password)
        .ok_or(AuthError::InvalidCredentials)?;

    let token = state.tokens.generate_token(&user.username)?;
    tracing::info!(user = %user.username, "User logged in");

    Ok(HttpResponse::Ok().json(AuthResponse {
        access_token: token,
        token_type: "Bearer".to_string(),
        expires_in: state.tokens.expiration_seconds().max(0) as u64,
        username: user.username,
    }))
}

/// GET /api/auth/me - Protected route
pub async fn me(identity: Identity) -> AppResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(MeResponse {
        username: identity.username,
    }))
}
