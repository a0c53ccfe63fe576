//! Authentication routes for register, login, and the current user.

use axum::{Json, Router, extract::State, http::StatusCode, routing::get, routing::post};
use tracing::info;

use crate::error::{ApiError, ApiResult};
use crate::middleware::AuthUser;
use crate::AppState;
use spendwise_core::auth::{hash_password, verify_password};
use spendwise_shared::AppError;
use spendwise_shared::auth::{AuthResponse, LoginRequest, MeResponse, RegisterRequest};
use spendwise_store::UserRepository;

/// Creates the public auth routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
}

/// Creates the auth routes that require a bearer token.
pub fn protected_routes() -> Router<AppState> {
    Router::new().route("/auth/me", get(me))
}

/// POST /api/auth/register - Create an account and return a token.
async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<AuthResponse>)> {
    if payload.email.trim().is_empty() || payload.password.is_empty() {
        return Err(AppError::Validation("Email and password are required".into()).into());
    }

    let user_repo = UserRepository::new(state.store.clone());

    let password_hash =
        hash_password(&payload.password).map_err(|e| AppError::Internal(e.to_string()))?;

    let user = user_repo
        .create(&payload.email, &password_hash, payload.name.as_deref())
        .await?;

    let token = state
        .jwt_service
        .generate_token(user.id)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            token,
            user: user.info(),
        }),
    ))
}

/// POST /api/auth/login - Authenticate and return a token.
async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> ApiResult<Json<AuthResponse>> {
    let user_repo = UserRepository::new(state.store.clone());

    let invalid = || ApiError(AppError::Unauthorized("Invalid credentials".into()));

    let user = user_repo
        .find_by_email(&payload.email)
        .await?
        .ok_or_else(|| {
            info!(email = %payload.email, "Login attempt for non-existent user");
            invalid()
        })?;

    let verified = verify_password(&payload.password, &user.password_hash)
        .map_err(|e| AppError::Internal(e.to_string()))?;
    if !verified {
        info!(user_id = %user.id, "Failed login attempt - invalid password");
        return Err(invalid());
    }

    let token = state
        .jwt_service
        .generate_token(user.id)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(Json(AuthResponse {
        token,
        user: user.info(),
    }))
}

/// GET /api/auth/me - Return the authenticated user.
async fn me(State(state): State<AppState>, auth: AuthUser) -> ApiResult<Json<MeResponse>> {
    let user_repo = UserRepository::new(state.store.clone());

    let user = user_repo
        .find_by_id(auth.user_id())
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".into()))?;

    Ok(Json(MeResponse { user: user.info() }))
}
