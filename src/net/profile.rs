//! Per-user financial profile.
//!
//! The backend mounts the profile under the categories router, hence the
//! `/categories/profile` path.

use super::client::{ApiClient, Base};
use super::transport::Method;
use super::types::{NewProfile, Profile, ProfileUpdate};
use crate::error::ApiError;

const PROFILE_PATH: &str = "categories/profile";

impl ApiClient {
    /// `POST /categories/profile`
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or a profile already exists.
    pub async fn create_profile(&self, profile: &NewProfile) -> Result<Profile, ApiError> {
        self.send_json(Method::POST, Base::Api, PROFILE_PATH, profile).await
    }

    /// `GET /categories/profile`. A missing profile is a 404 response.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or no profile exists.
    pub async fn get_profile(&self) -> Result<Profile, ApiError> {
        self.get(Base::Api, PROFILE_PATH, Vec::new()).await
    }

    /// `PUT /categories/profile`
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or no profile exists.
    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<Profile, ApiError> {
        self.send_json(Method::PUT, Base::Api, PROFILE_PATH, update).await
    }
}

#[cfg(test)]
#[path = "profile_test.rs"]
mod tests;
