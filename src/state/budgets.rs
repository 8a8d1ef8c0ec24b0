//! Budget manager: category budgets plus overall monthly spending.

use chrono::{Datelike, NaiveDate};

use crate::error::ApiError;
use crate::forms::BudgetForm;
use crate::net::ApiClient;
use crate::net::types::{Budget, TransactionQuery, TransactionType};
use crate::scope::ViewScope;

/// State for the budgets page. Every write goes through the view's scope;
/// cancelling a call in flight means dropping its future.
#[derive(Debug, Default)]
pub struct BudgetsView {
    pub budgets: Vec<Budget>,
    /// Monthly target from the profile, when one exists.
    pub monthly_budget: Option<f64>,
    /// Expenses booked in the current month.
    pub spent_this_month: f64,
    scope: ViewScope,
}

impl BudgetsView {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the profile target, this month's spending, and the budget list.
    ///
    /// A missing profile leaves `monthly_budget` unset.
    ///
    /// # Errors
    ///
    /// Returns the first backend failure.
    pub async fn load(&mut self, client: &ApiClient, today: NaiveDate) -> Result<(), ApiError> {
        let monthly_budget = match self.scope.run(client.get_profile()).await {
            Ok(profile) => Some(profile.monthly_budget),
            Err(err) if err.is_not_found() => None,
            Err(err) => return Err(err),
        };

        let query = TransactionQuery::for_month(today.month(), today.year());
        let rows = self.scope.run(client.list_transactions(&query)).await?;
        let spent = rows
            .iter()
            .filter(|tx| tx.kind == TransactionType::Expense)
            .map(|tx| tx.amount.abs())
            .sum::<f64>();

        self.scope.apply((monthly_budget, spent), |(monthly_budget, spent)| {
            self.monthly_budget = monthly_budget;
            self.spent_this_month = spent;
        });
        self.reload(client).await
    }

    /// Refresh just the budget list.
    ///
    /// # Errors
    ///
    /// Returns the backend failure; the previous list is kept.
    pub async fn reload(&mut self, client: &ApiClient) -> Result<(), ApiError> {
        let budgets = self.scope.run(client.list_budgets()).await?;
        self.scope.apply(budgets, |budgets| self.budgets = budgets);
        Ok(())
    }

    /// Monthly target minus this month's spending.
    #[must_use]
    pub fn remaining(&self) -> Option<f64> {
        self.monthly_budget.map(|limit| limit - self.spent_this_month)
    }

    /// Validate, create a budget for the month of `today`, then reload.
    ///
    /// # Errors
    ///
    /// Returns a validation error without issuing a request, or the backend
    /// failure.
    pub async fn add(&mut self, client: &ApiClient, form: &BudgetForm, today: NaiveDate) -> Result<Budget, ApiError> {
        let body = form.validate(today)?;
        let created = self.scope.run(client.create_budget(&body)).await?;
        tracing::info!(category = %created.category, "budget added");
        self.reload(client).await?;
        Ok(created)
    }

    /// Delete a budget, then reload.
    ///
    /// # Errors
    ///
    /// Returns the backend failure.
    pub async fn delete(&mut self, client: &ApiClient, id: &str) -> Result<(), ApiError> {
        self.scope.run(client.delete_budget(id)).await?;
        self.reload(client).await
    }
}

#[cfg(test)]
#[path = "budgets_test.rs"]
mod tests;
