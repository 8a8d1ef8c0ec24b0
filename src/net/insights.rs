//! Read-only aggregates: dashboard summary, AI insights, forecast, reports.
//!
//! Everything here is computed server-side; the client only decodes it.

use super::client::{ApiClient, Base};
use super::types::{AiInsightsResponse, DashboardSummary, Forecast, ReportResponse};
use crate::error::ApiError;

/// Lookback used when the caller does not pick one.
pub const DEFAULT_REPORT_MONTHS: u8 = 6;
/// Longest lookback the backend accepts.
pub const MAX_REPORT_MONTHS: u8 = 12;

impl ApiClient {
    /// `GET /categories/summary`
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or no profile exists.
    pub async fn dashboard_summary(&self) -> Result<DashboardSummary, ApiError> {
        self.get(Base::Api, "categories/summary", Vec::new()).await
    }

    /// `GET /categories/insights`
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn ai_insights(&self) -> Result<AiInsightsResponse, ApiError> {
        self.get(Base::Api, "categories/insights", Vec::new()).await
    }

    /// `GET /dashboard/forecast`
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn forecast(&self) -> Result<Forecast, ApiError> {
        self.get(Base::Api, "dashboard/forecast", Vec::new()).await
    }

    /// `GET /reports?months=N`. The value is forwarded as given; the backend
    /// rejects anything outside `1..=12`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or `months` is out of range.
    pub async fn reports(&self, months: u8) -> Result<ReportResponse, ApiError> {
        self.get(Base::Api, "reports", vec![("months".to_owned(), months.to_string())])
            .await
    }
}

#[cfg(test)]
#[path = "insights_test.rs"]
mod tests;
