//! Transactions page: the loaded list plus local search and type filter.
//!
//! Filtering is purely local over the rows already fetched; only loading,
//! adding, editing and deleting talk to the backend.

use crate::error::ApiError;
use crate::forms::{TransactionForm, check_amount};
use crate::net::ApiClient;
use crate::net::types::{Transaction, TransactionQuery, TransactionType, TransactionUpdate};
use crate::scope::ViewScope;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TypeFilter {
    #[default]
    All,
    Income,
    Expense,
}

impl TypeFilter {
    #[must_use]
    pub fn matches(self, kind: TransactionType) -> bool {
        match self {
            Self::All => true,
            Self::Income => kind == TransactionType::Income,
            Self::Expense => kind == TransactionType::Expense,
        }
    }
}

impl From<Option<TransactionType>> for TypeFilter {
    fn from(kind: Option<TransactionType>) -> Self {
        match kind {
            None => Self::All,
            Some(TransactionType::Income) => Self::Income,
            Some(TransactionType::Expense) => Self::Expense,
        }
    }
}

#[derive(Debug, Default)]
pub struct TransactionsView {
    pub rows: Vec<Transaction>,
    pub search: String,
    pub filter: TypeFilter,
    scope: ViewScope,
}

impl TransactionsView {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the rows with a fresh fetch.
    ///
    /// # Errors
    ///
    /// Returns the backend failure; the previous rows are kept.
    pub async fn load(&mut self, client: &ApiClient, query: &TransactionQuery) -> Result<(), ApiError> {
        let rows = self.scope.run(client.list_transactions(query)).await?;
        self.scope.apply(rows, |rows| self.rows = rows);
        Ok(())
    }

    /// Rows matching the search text (description or category, any case) and
    /// the type filter, in loaded order.
    #[must_use]
    pub fn visible(&self) -> Vec<&Transaction> {
        let needle = self.search.trim().to_lowercase();
        self.rows
            .iter()
            .filter(|tx| self.filter.matches(tx.kind))
            .filter(|tx| {
                needle.is_empty()
                    || tx.description.to_lowercase().contains(&needle)
                    || tx.category.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Income and expense totals over the visible rows.
    #[must_use]
    pub fn totals(&self) -> (f64, f64) {
        self.visible().iter().fold((0.0, 0.0), |(income, expense), tx| match tx.kind {
            TransactionType::Income => (income + tx.amount.abs(), expense),
            TransactionType::Expense => (income, expense + tx.amount.abs()),
        })
    }

    /// Save an edited row. The amount must be a finite number above zero.
    ///
    /// # Errors
    ///
    /// Returns a validation error without issuing a request, or the backend
    /// failure; the local row is left unchanged either way.
    pub async fn save_edit(&mut self, client: &ApiClient, edited: &Transaction) -> Result<Transaction, ApiError> {
        let amount = check_amount(edited.amount)?;
        let update = TransactionUpdate {
            kind: Some(edited.kind),
            description: Some(edited.description.trim().to_owned()),
            category: Some(edited.category.trim().to_owned()),
            amount: Some(amount),
            date: Some(edited.date),
        };
        let saved = self.scope.run(client.update_transaction(&edited.id, &update)).await?;
        self.scope.apply(&saved, |saved| {
            if let Some(row) = self.rows.iter_mut().find(|row| row.id == saved.id) {
                row.clone_from(saved);
            }
        });
        Ok(saved)
    }

    /// Delete on the backend, then drop the row locally.
    ///
    /// # Errors
    ///
    /// Returns the backend failure; the row stays in the list.
    pub async fn delete(&mut self, client: &ApiClient, id: &str) -> Result<(), ApiError> {
        self.scope.run(client.delete_transaction(id)).await?;
        self.scope.apply(id, |id| self.rows.retain(|row| row.id != id));
        Ok(())
    }

    /// Close the view. Later calls resolve as cancelled without touching the
    /// rows. A call already awaiting holds `&mut self`, so it is cancelled by
    /// dropping its future instead.
    pub fn close(&self) {
        self.scope.cancel();
    }
}

/// Validate and create a transaction.
///
/// # Errors
///
/// Returns a validation error without issuing a request, or the backend
/// failure.
pub async fn add_transaction(client: &ApiClient, form: &TransactionForm) -> Result<Transaction, ApiError> {
    let body = form.validate()?;
    let created = client.create_transaction(&body).await?;
    tracing::info!(kind = %created.kind, "transaction added");
    Ok(created)
}

#[cfg(test)]
#[path = "transactions_test.rs"]
mod tests;
