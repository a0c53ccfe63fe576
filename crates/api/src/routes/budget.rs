//! Budget routes. One budget per user with upsert semantics.

use axum::{Json, Router, extract::State, routing::get};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::AppState;
use crate::error::ApiResult;
use crate::middleware::AuthUser;
use spendwise_core::budget::BudgetSettings;
use spendwise_shared::AppError;
use spendwise_store::BudgetRepository;

/// Creates the budget routes (auth middleware applied externally).
pub fn routes() -> Router<AppState> {
    Router::new().route("/budget", get(get_budget).post(save_budget))
}

/// Request body for saving a budget.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveBudgetRequest {
    /// Monthly budget amount. Required; zero means "unset".
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub monthly_budget: Option<Decimal>,
    /// Optional ISO 4217 currency code; kept unchanged when absent.
    pub currency: Option<String>,
}

/// GET /api/budget - Return the caller's budget, defaulting to
/// `{0, "USD"}` when never saved.
async fn get_budget(State(state): State<AppState>, auth: AuthUser) -> ApiResult<Json<BudgetSettings>> {
    let budget_repo = BudgetRepository::new(state.store.clone());
    let budget = budget_repo.get(auth.user_id()).await?.unwrap_or_default();

    Ok(Json(budget))
}

/// POST /api/budget - Create or update the caller's budget.
async fn save_budget(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(payload): Json<SaveBudgetRequest>,
) -> ApiResult<Json<BudgetSettings>> {
    let Some(monthly_budget) = payload.monthly_budget else {
        return Err(AppError::Validation("Invalid budget amount".into()).into());
    };
    if monthly_budget < Decimal::ZERO {
        return Err(AppError::Validation("Invalid budget amount".into()).into());
    }

    let budget_repo = BudgetRepository::new(state.store.clone());
    let saved = budget_repo
        .upsert(auth.user_id(), monthly_budget, payload.currency.as_deref())
        .await?;

    Ok(Json(saved))
}
