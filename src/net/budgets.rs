//! Budget CRUD.

use super::client::{ApiClient, Base};
use super::transport::Method;
use super::types::{Budget, BudgetUpdate, NewBudget};
use crate::error::ApiError;

impl ApiClient {
    /// `GET /budgets`
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn list_budgets(&self) -> Result<Vec<Budget>, ApiError> {
        self.get(Base::Api, "budgets", Vec::new()).await
    }

    /// `POST /budgets`
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend rejects the body.
    pub async fn create_budget(&self, budget: &NewBudget) -> Result<Budget, ApiError> {
        self.send_json(Method::POST, Base::Api, "budgets", budget).await
    }

    /// `PUT /budgets/{id}`
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the id is unknown.
    pub async fn update_budget(&self, id: &str, update: &BudgetUpdate) -> Result<Budget, ApiError> {
        self.send_json(Method::PUT, Base::Api, &format!("budgets/{id}"), update).await
    }

    /// `DELETE /budgets/{id}`
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the id is unknown.
    pub async fn delete_budget(&self, id: &str) -> Result<(), ApiError> {
        self.delete(Base::Api, &format!("budgets/{id}")).await
    }
}

#[cfg(test)]
#[path = "budgets_test.rs"]
mod tests;
