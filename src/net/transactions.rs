//! Transaction CRUD.

use super::client::{ApiClient, Base};
use super::transport::Method;
use super::types::{NewTransaction, Transaction, TransactionQuery, TransactionUpdate};
use crate::error::ApiError;

fn item_path(id: &str) -> String {
    format!("transactions/{id}")
}

impl ApiClient {
    /// `GET /transactions` with the set filters as query parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn list_transactions(&self, query: &TransactionQuery) -> Result<Vec<Transaction>, ApiError> {
        self.get(Base::Api, "transactions", query.to_pairs()).await
    }

    /// `GET /transactions/{id}`
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the id is unknown.
    pub async fn get_transaction(&self, id: &str) -> Result<Transaction, ApiError> {
        self.get(Base::Api, &item_path(id), Vec::new()).await
    }

    /// `POST /transactions`
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend rejects the body.
    pub async fn create_transaction(&self, tx: &NewTransaction) -> Result<Transaction, ApiError> {
        self.send_json(Method::POST, Base::Api, "transactions", tx).await
    }

    /// `PUT /transactions/{id}`
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the id is unknown.
    pub async fn update_transaction(&self, id: &str, update: &TransactionUpdate) -> Result<Transaction, ApiError> {
        self.send_json(Method::PUT, Base::Api, &item_path(id), update).await
    }

    /// `DELETE /transactions/{id}`
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the id is unknown.
    pub async fn delete_transaction(&self, id: &str) -> Result<(), ApiError> {
        self.delete(Base::Api, &item_path(id)).await
    }
}

#[cfg(test)]
#[path = "transactions_test.rs"]
mod tests;
