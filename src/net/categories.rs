//! Category listing and management.

use super::client::{ApiClient, Base};
use super::transport::Method;
use super::types::{Category, NewCategory, TransactionType};
use crate::error::ApiError;

impl ApiClient {
    /// `GET /categories`, optionally `?type=income|expense`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn list_categories(&self, kind: Option<TransactionType>) -> Result<Vec<Category>, ApiError> {
        let query = kind
            .map(|k| vec![("type".to_owned(), k.as_str().to_owned())])
            .unwrap_or_default();
        self.get(Base::Api, "categories", query).await
    }

    /// `POST /categories`
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the name already exists.
    pub async fn create_category(&self, category: &NewCategory) -> Result<Category, ApiError> {
        self.send_json(Method::POST, Base::Api, "categories", category).await
    }

    /// `DELETE /categories/{id}`. System categories are refused by the backend.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the category is protected.
    pub async fn delete_category(&self, id: &str) -> Result<(), ApiError> {
        self.delete(Base::Api, &format!("categories/{id}")).await
    }
}

#[cfg(test)]
#[path = "categories_test.rs"]
mod tests;
