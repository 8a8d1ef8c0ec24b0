//! Reports and forecast views.

use crate::error::ApiError;
use crate::net::ApiClient;
use crate::net::insights::{DEFAULT_REPORT_MONTHS, MAX_REPORT_MONTHS};
use crate::net::types::{Forecast, Report, ReportResponse};

#[derive(Clone, Debug, PartialEq)]
pub struct ReportsView {
    months: u8,
    pub response: Option<ReportResponse>,
}

impl Default for ReportsView {
    fn default() -> Self {
        Self { months: DEFAULT_REPORT_MONTHS, response: None }
    }
}

impl ReportsView {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn months(&self) -> u8 {
        self.months
    }

    /// Pick the lookback window, clamped to what the backend accepts.
    pub fn set_months(&mut self, months: u8) {
        self.months = months.clamp(1, MAX_REPORT_MONTHS);
    }

    /// Fetch the report for the current window.
    ///
    /// # Errors
    ///
    /// Returns the backend failure; the previous report is kept.
    pub async fn load(&mut self, client: &ApiClient) -> Result<&ReportResponse, ApiError> {
        let response = client.reports(self.months).await?;
        Ok(self.response.insert(response))
    }

    /// The loaded report, if the backend had data to report on.
    #[must_use]
    pub fn report(&self) -> Option<&Report> {
        self.response.as_ref().and_then(ReportResponse::report)
    }

    /// The backend's explanation when there is nothing to report.
    #[must_use]
    pub fn empty_message(&self) -> Option<&str> {
        match &self.response {
            Some(ReportResponse::Empty { message }) => Some(message),
            _ => None,
        }
    }
}

/// Fetch the spending forecast.
///
/// # Errors
///
/// Returns the backend failure.
pub async fn load_forecast(client: &ApiClient) -> Result<Forecast, ApiError> {
    client.forecast().await
}

#[cfg(test)]
#[path = "reports_test.rs"]
mod tests;
