//! Savings goals created and funded during this session.
//!
//! The backend has no list endpoint for goals, so the view tracks the goals
//! it created or contributed to and replaces each with the server's copy.

use crate::error::ApiError;
use crate::forms::{GoalForm, parse_contribution};
use crate::net::ApiClient;
use crate::net::types::Goal;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct GoalsView {
    pub goals: Vec<Goal>,
}

impl GoalsView {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and create a goal.
    ///
    /// # Errors
    ///
    /// Returns a validation error without issuing a request, or the backend
    /// failure.
    pub async fn add(&mut self, client: &ApiClient, form: &GoalForm) -> Result<Goal, ApiError> {
        let body = form.validate()?;
        let goal = client.create_goal(&body).await?;
        tracing::info!(goal_id = %goal.id, "goal created");
        self.upsert(goal.clone());
        Ok(goal)
    }

    /// Add the typed amount to a goal.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a non-positive amount, or the backend
    /// failure (404 for an unknown goal).
    pub async fn contribute(&mut self, client: &ApiClient, id: &str, raw_amount: &str) -> Result<Goal, ApiError> {
        let amount = parse_contribution(raw_amount)?;
        let goal = client.contribute_to_goal(id, amount).await?;
        self.upsert(goal.clone());
        Ok(goal)
    }

    /// Drop a goal from the list. Local only: the backend keeps it.
    pub fn remove(&mut self, id: &str) -> Option<Goal> {
        let index = self.goals.iter().position(|g| g.id == id)?;
        tracing::info!(goal_id = %id, "goal removed from view");
        Some(self.goals.remove(index))
    }

    #[must_use]
    pub fn total_saved(&self) -> f64 {
        self.goals.iter().map(|g| g.current_amount).sum()
    }

    fn upsert(&mut self, goal: Goal) {
        match self.goals.iter_mut().find(|g| g.id == goal.id) {
            Some(existing) => *existing = goal,
            None => self.goals.push(goal),
        }
    }
}

#[cfg(test)]
#[path = "goals_test.rs"]
mod tests;
