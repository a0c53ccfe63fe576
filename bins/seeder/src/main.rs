//! Demo data seeder for Spendwise development and testing.
//!
//! Registers a demo user against a running server, creates sample expenses
//! and a monthly budget through the HTTP API, then prints the spending
//! summary and budget status the dashboard would show.
//!
//! Usage: cargo run --bin seeder

use chrono::Utc;

use spendwise_client::{ApiClient, ClientError, ExpenseFilters};

const DEMO_EMAIL: &str = "testuser@example.com";
const DEMO_PASSWORD: &str = "password123";

const SAMPLE_EXPENSES: [(&str, &str, f64, &str); 4] = [
    ("Grocery Shopping", "Food", 45.50, "2024-11-05"),
    ("Uber Ride", "Transport", 15.20, "2024-11-06"),
    ("Electric Bill", "Utilities", 120.00, "2024-11-01"),
    ("Restaurant Dinner", "Food", 65.80, "2024-11-07"),
];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let base_url =
        std::env::var("SPENDWISE_URL").unwrap_or_else(|_| "http://localhost:4000".to_string());

    println!("Connecting to {base_url}...");
    let mut client = ApiClient::new(base_url);

    // Register the demo user, or log in when it already exists.
    let session = match client.register(DEMO_EMAIL, DEMO_PASSWORD, Some("Test User")).await {
        Ok(session) => session,
        Err(ClientError::Api { status: 400, .. }) => {
            client.login(DEMO_EMAIL, DEMO_PASSWORD).await?
        }
        Err(e) => return Err(e.into()),
    };
    println!("Seeding expenses for: {}", session.user.email);

    for (title, category, amount, date) in SAMPLE_EXPENSES {
        let expense = client.create_expense(title, category, amount, date).await?;
        println!("  + {} ({}) {} on {}", expense.title, expense.category, expense.amount, expense.date);
    }

    client.save_budget(500.0, None).await?;
    println!("Monthly budget set to 500 USD");

    let today = Utc::now().date_naive();
    let summary = client
        .spending_summary(&ExpenseFilters::default(), today)
        .await?;
    println!("\nTotal spending: {}", summary.total_spending);
    println!("Average per expense: {}", summary.average_spending);
    for (category, total) in &summary.category_totals {
        println!("  {category}: {total}");
    }

    let (settings, evaluation) = client.budget_overview(today).await?;
    println!(
        "\nBudget {} {} -> {:?}",
        settings.monthly_budget, settings.currency, evaluation.status
    );

    Ok(())
}
