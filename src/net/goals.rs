//! Savings goals.

use super::client::{ApiClient, Base};
use super::transport::Method;
use super::types::{Goal, GoalContribution, NewGoal};
use crate::error::ApiError;

impl ApiClient {
    /// `POST /goals`
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend rejects the body.
    pub async fn create_goal(&self, goal: &NewGoal) -> Result<Goal, ApiError> {
        self.send_json(Method::POST, Base::Api, "goals", goal).await
    }

    /// Add `amount` to a goal via `POST /goals/{id}/contribute`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the goal is unknown.
    pub async fn contribute_to_goal(&self, id: &str, amount: f64) -> Result<Goal, ApiError> {
        let body = GoalContribution { amount };
        self.send_json(Method::POST, Base::Api, &format!("goals/{id}/contribute"), &body)
            .await
    }
}

#[cfg(test)]
#[path = "goals_test.rs"]
mod tests;
