//! Expense CRUD routes. All reads and writes are scoped to the bearer's
//! own records.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::AppState;
use crate::error::ApiResult;
use crate::middleware::AuthUser;
use spendwise_core::expense::{CreateExpenseInput, Expense, UpdateExpenseInput};
use spendwise_core::filter::{CategorySelector, ExpenseQuery, MonthSelector};
use spendwise_shared::AppError;
use spendwise_shared::types::ExpenseId;
use spendwise_store::ExpenseRepository;

/// Creates the expense routes (auth middleware applied externally).
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/expenses", get(list_expenses).post(create_expense))
        .route(
            "/expenses/{id}",
            axum::routing::put(update_expense).delete(delete_expense),
        )
}

/// Query parameters for listing expenses. `month` is `YYYY-MM`.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    /// Category name, empty or `all` for everything.
    pub category: Option<String>,
    /// Year-month selector, empty or `all` for everything.
    pub month: Option<String>,
}

/// Request body for creating an expense. Amounts arrive as JSON numbers.
#[derive(Debug, Deserialize)]
pub struct CreateExpenseRequest {
    /// Expense title.
    pub title: String,
    /// Category name; unrecognized values become `Other`.
    pub category: String,
    /// Amount spent.
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    /// Date as `YYYY-MM-DD`.
    pub date: String,
}

/// Request body for updating an expense. Absent fields are unchanged.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateExpenseRequest {
    /// New title.
    pub title: Option<String>,
    /// New category name.
    pub category: Option<String>,
    /// New amount.
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub amount: Option<Decimal>,
    /// New date as `YYYY-MM-DD`.
    pub date: Option<String>,
}

/// Response body for a successful delete.
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    /// Always true.
    pub success: bool,
}

/// GET /api/expenses?category=&month=YYYY-MM - List the caller's expenses,
/// filtered and sorted by date descending.
async fn list_expenses(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<ListParams>,
) -> ApiResult<Json<Vec<Expense>>> {
    let category = CategorySelector::parse(params.category.as_deref());
    let month = MonthSelector::parse(params.month.as_deref())
        .map_err(|e| AppError::Validation(e.to_string()))?;
    let query = ExpenseQuery { category, month };

    let expense_repo = ExpenseRepository::new(state.store.clone());
    let expenses = expense_repo.list_for_user(auth.user_id()).await?;

    Ok(Json(query.apply(&expenses)))
}

/// POST /api/expenses - Create an expense owned by the caller.
async fn create_expense(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(payload): Json<CreateExpenseRequest>,
) -> ApiResult<(StatusCode, Json<Expense>)> {
    let input = CreateExpenseInput::parse(
        &payload.title,
        &payload.category,
        payload.amount,
        &payload.date,
    )
    .map_err(|e| AppError::Validation(e.to_string()))?;

    let expense_repo = ExpenseRepository::new(state.store.clone());
    let expense = expense_repo.create(auth.user_id(), input).await?;

    Ok((StatusCode::CREATED, Json(expense)))
}

/// PUT /api/expenses/:id - Update an owned expense.
async fn update_expense(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<ExpenseId>,
    Json(payload): Json<UpdateExpenseRequest>,
) -> ApiResult<Json<Expense>> {
    let changes = UpdateExpenseInput::parse(
        payload.title.as_deref(),
        payload.category.as_deref(),
        payload.amount,
        payload.date.as_deref(),
    )
    .map_err(|e| AppError::Validation(e.to_string()))?;

    let expense_repo = ExpenseRepository::new(state.store.clone());
    let expense = expense_repo.update(id, auth.user_id(), changes).await?;

    Ok(Json(expense))
}

/// DELETE /api/expenses/:id - Delete an owned expense.
async fn delete_expense(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<ExpenseId>,
) -> ApiResult<Json<DeleteResponse>> {
    let expense_repo = ExpenseRepository::new(state.store.clone());
    expense_repo.delete(id, auth.user_id()).await?;

    Ok(Json(DeleteResponse { success: true }))
}
