//! The gateway client.

use chrono::NaiveDate;
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::json;
use tracing::debug;

use spendwise_core::budget::{BudgetEvaluation, BudgetSettings};
use spendwise_core::expense::Expense;
use spendwise_core::summary::SpendingSummary;
use spendwise_shared::auth::{AuthResponse, LoginRequest, MeResponse, RegisterRequest, UserInfo};
use spendwise_shared::types::ExpenseId;

use crate::error::ClientError;
use crate::session::Session;

/// Server-side filters for listing expenses. `None` means "all".
#[derive(Debug, Clone, Default)]
pub struct ExpenseFilters {
    /// Category name.
    pub category: Option<String>,
    /// Year-month as `YYYY-MM`.
    pub month: Option<String>,
}

/// Shape of server error bodies.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Typed client for the expense API.
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
    session: Option<Session>,
}

impl ApiClient {
    /// Creates a client for the given base URL, with no session.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
            session: None,
        }
    }

    /// Returns the current session, if logged in.
    #[must_use]
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Registers a new account and establishes a session.
    pub async fn register(
        &mut self,
        email: &str,
        password: &str,
        name: Option<&str>,
    ) -> Result<&Session, ClientError> {
        let body = RegisterRequest {
            email: email.to_string(),
            password: password.to_string(),
            name: name.map(ToString::to_string),
        };
        let auth: AuthResponse = self
            .execute(self.request(Method::POST, "/api/auth/register").json(&body))
            .await?;
        Ok(self.establish(auth))
    }

    /// Logs in and establishes a session.
    pub async fn login(&mut self, email: &str, password: &str) -> Result<&Session, ClientError> {
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let auth: AuthResponse = self
            .execute(self.request(Method::POST, "/api/auth/login").json(&body))
            .await?;
        Ok(self.establish(auth))
    }

    /// Drops the session. Subsequent authenticated calls fail with
    /// `ClientError::NoSession` until the next login.
    pub fn logout(&mut self) {
        self.session = None;
    }

    /// Fetches the authenticated user.
    pub async fn current_user(&self) -> Result<UserInfo, ClientError> {
        let response: MeResponse = self
            .execute(self.authed(Method::GET, "/api/auth/me")?)
            .await?;
        Ok(response.user)
    }

    /// Lists expenses, optionally server-filtered, sorted date-descending.
    pub async fn list_expenses(
        &self,
        filters: &ExpenseFilters,
    ) -> Result<Vec<Expense>, ClientError> {
        let mut request = self.authed(Method::GET, "/api/expenses")?;
        if let Some(category) = &filters.category {
            request = request.query(&[("category", category)]);
        }
        if let Some(month) = &filters.month {
            request = request.query(&[("month", month)]);
        }
        self.execute(request).await
    }

    /// Creates an expense.
    pub async fn create_expense(
        &self,
        title: &str,
        category: &str,
        amount: f64,
        date: &str,
    ) -> Result<Expense, ClientError> {
        let body = json!({
            "title": title,
            "category": category,
            "amount": amount,
            "date": date,
        });
        self.execute(self.authed(Method::POST, "/api/expenses")?.json(&body))
            .await
    }

    /// Applies a partial update to an expense.
    pub async fn update_expense(
        &self,
        id: ExpenseId,
        changes: &serde_json::Value,
    ) -> Result<Expense, ClientError> {
        self.execute(
            self.authed(Method::PUT, &format!("/api/expenses/{id}"))?
                .json(changes),
        )
        .await
    }

    /// Deletes an expense.
    pub async fn delete_expense(&self, id: ExpenseId) -> Result<(), ClientError> {
        let _: serde_json::Value = self
            .execute(self.authed(Method::DELETE, &format!("/api/expenses/{id}"))?)
            .await?;
        Ok(())
    }

    /// Fetches the budget settings (defaults when never saved).
    pub async fn budget(&self) -> Result<BudgetSettings, ClientError> {
        self.execute(self.authed(Method::GET, "/api/budget")?).await
    }

    /// Creates or updates the budget.
    pub async fn save_budget(
        &self,
        monthly_budget: f64,
        currency: Option<&str>,
    ) -> Result<BudgetSettings, ClientError> {
        let mut body = json!({ "monthlyBudget": monthly_budget });
        if let Some(currency) = currency {
            body["currency"] = json!(currency);
        }
        self.execute(self.authed(Method::POST, "/api/budget")?.json(&body))
            .await
    }

    /// Fetches expenses and computes the spending summary the dashboard
    /// renders. `today` drives the current-month bucket.
    pub async fn spending_summary(
        &self,
        filters: &ExpenseFilters,
        today: NaiveDate,
    ) -> Result<SpendingSummary, ClientError> {
        let expenses = self.list_expenses(filters).await?;
        Ok(SpendingSummary::compute(&expenses, today))
    }

    /// Fetches the budget and this month's spending, and evaluates budget
    /// status.
    pub async fn budget_overview(
        &self,
        today: NaiveDate,
    ) -> Result<(BudgetSettings, BudgetEvaluation), ClientError> {
        let settings = self.budget().await?;
        let summary = self
            .spending_summary(&ExpenseFilters::default(), today)
            .await?;
        let evaluation = BudgetEvaluation::evaluate(summary.monthly_total, settings.monthly_budget);
        Ok((settings, evaluation))
    }

    fn establish(&mut self, auth: AuthResponse) -> &Session {
        debug!(user_id = %auth.user.id, "Session established");
        self.session.insert(Session::new(auth.token, auth.user))
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http.request(method, format!("{}{path}", self.base_url))
    }

    fn authed(&self, method: Method, path: &str) -> Result<RequestBuilder, ClientError> {
        let session = self.session.as_ref().ok_or(ClientError::NoSession)?;
        Ok(self.request(method, path).bearer_auth(session.token()))
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, ClientError> {
        let response = request.send().await?;
        let response = Self::check_status(response).await?;
        Ok(response.json().await?)
    }

    async fn check_status(response: Response) -> Result<Response, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = response
            .json::<ErrorBody>()
            .await
            .map_or_else(|_| status.to_string(), |body| body.error);

        if status == StatusCode::UNAUTHORIZED {
            Err(ClientError::Unauthorized(message))
        } else {
            Err(ClientError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}
