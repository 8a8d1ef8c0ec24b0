//! Backend wire schema.
//!
//! Field names follow the backend's JSON exactly. Unknown fields are ignored
//! on decode. Timestamps arrive as naive ISO-8601 date-times; an offset, when
//! present, is converted to UTC and dropped.

use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Default swatch for new categories and goals.
pub const DEFAULT_COLOR: &str = "#10b981";

// =============================================================================
// ENUMS
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl std::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TransactionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            other => Err(format!("unknown transaction type: {other}")),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetPeriod {
    #[default]
    Monthly,
    Yearly,
}

/// Severity tag on insights.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum InsightLevel {
    High,
    Medium,
    Positive,
    Info,
    /// Free-text insight produced by the language model.
    #[serde(rename = "AI")]
    Ai,
    #[serde(other)]
    Other,
}

// =============================================================================
// AUTH
// =============================================================================

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
}

#[derive(Clone, PartialEq, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: String,
    #[serde(default)]
    pub user_uuid: Option<String>,
}

impl std::fmt::Debug for TokenResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenResponse")
            .field("token_type", &self.token_type)
            .field("user_uuid", &self.user_uuid)
            .finish_non_exhaustive()
    }
}

/// Signup answers with the created user; some deployments also issue a token.
#[derive(Clone, PartialEq, Deserialize)]
pub struct SignupResponse {
    pub id: String,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub access_token: Option<String>,
}

impl std::fmt::Debug for SignupResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignupResponse")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("email", &self.email)
            .field("has_token", &self.access_token.is_some())
            .finish()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SignupRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GoogleCredential {
    pub credential: String,
}

// =============================================================================
// PROFILE
// =============================================================================

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    pub user_id: String,
    pub initial_balance: f64,
    pub monthly_budget: f64,
    pub currency: String,
    #[serde(deserialize_with = "datetime::deserialize")]
    pub created_at: NaiveDateTime,
    #[serde(deserialize_with = "datetime::deserialize")]
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewProfile {
    pub initial_balance: f64,
    pub monthly_budget: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_balance: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_budget: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

// =============================================================================
// TRANSACTIONS
// =============================================================================

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub user_id: String,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub description: String,
    pub category: String,
    pub amount: f64,
    #[serde(deserialize_with = "datetime::deserialize")]
    pub date: NaiveDateTime,
    #[serde(deserialize_with = "datetime::deserialize")]
    pub created_at: NaiveDateTime,
    #[serde(deserialize_with = "datetime::deserialize")]
    pub updated_at: NaiveDateTime,
}

impl Transaction {
    /// Amount with the sign implied by its type, for display.
    #[must_use]
    pub fn signed_amount(&self) -> f64 {
        match self.kind {
            TransactionType::Income => self.amount.abs(),
            TransactionType::Expense => -self.amount.abs(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewTransaction {
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub description: String,
    pub category: String,
    pub amount: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDateTime>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct TransactionUpdate {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<TransactionType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDateTime>,
}

/// Filters for the transaction list. Unset fields are not sent.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TransactionQuery {
    pub month: Option<u32>,
    pub year: Option<i32>,
    pub skip: Option<u32>,
    pub limit: Option<u32>,
    pub kind: Option<TransactionType>,
    pub category: Option<String>,
    pub start_date: Option<NaiveDateTime>,
    pub end_date: Option<NaiveDateTime>,
}

impl TransactionQuery {
    #[must_use]
    pub fn for_month(month: u32, year: i32) -> Self {
        Self { month: Some(month), year: Some(year), ..Self::default() }
    }

    /// Query-string pairs in a stable order.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        let mut push = |key: &str, value: Option<String>| {
            if let Some(value) = value {
                pairs.push((key.to_owned(), value));
            }
        };
        push("month", self.month.map(|v| v.to_string()));
        push("year", self.year.map(|v| v.to_string()));
        push("skip", self.skip.map(|v| v.to_string()));
        push("limit", self.limit.map(|v| v.to_string()));
        push("type", self.kind.map(|v| v.as_str().to_owned()));
        push("category", self.category.clone());
        push("start_date", self.start_date.map(|d| d.format(datetime::WIRE_FORMAT).to_string()));
        push("end_date", self.end_date.map(|d| d.format(datetime::WIRE_FORMAT).to_string()));
        pairs
    }
}

// =============================================================================
// CATEGORIES
// =============================================================================

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    #[serde(default)]
    pub user_id: Option<String>,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub color: String,
    #[serde(default)]
    pub icon: Option<String>,
    /// Built-in categories cannot be deleted. The backend sends this as the
    /// string `"true"`/`"false"`.
    #[serde(deserialize_with = "flag::deserialize")]
    pub is_system: bool,
    #[serde(deserialize_with = "datetime::deserialize")]
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewCategory {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

// =============================================================================
// BUDGETS
// =============================================================================

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    pub id: String,
    pub user_id: String,
    pub category: String,
    pub limit_amount: f64,
    pub period: BudgetPeriod,
    #[serde(default)]
    pub spent_amount: f64,
    #[serde(deserialize_with = "datetime::deserialize")]
    pub start_date: NaiveDateTime,
    #[serde(deserialize_with = "datetime::deserialize")]
    pub end_date: NaiveDateTime,
    #[serde(deserialize_with = "datetime::deserialize")]
    pub created_at: NaiveDateTime,
    #[serde(deserialize_with = "datetime::deserialize")]
    pub updated_at: NaiveDateTime,
}

impl Budget {
    #[must_use]
    pub fn remaining(&self) -> f64 {
        self.limit_amount - self.spent_amount
    }

    /// Share of the limit already spent, in percent.
    #[must_use]
    pub fn usage_percent(&self) -> f64 {
        if self.limit_amount <= 0.0 {
            return 0.0;
        }
        self.spent_amount / self.limit_amount * 100.0
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.spent_amount > self.limit_amount
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewBudget {
    pub category: String,
    pub limit_amount: f64,
    pub period: BudgetPeriod,
    pub start_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct BudgetUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit_amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<BudgetPeriod>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDateTime>,
}

// =============================================================================
// GOALS
// =============================================================================

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    #[serde(deserialize_with = "id::deserialize")]
    pub id: String,
    pub name: String,
    pub target_amount: f64,
    #[serde(default)]
    pub current_amount: f64,
    #[serde(default, deserialize_with = "datetime::deserialize_option")]
    pub deadline: Option<NaiveDateTime>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
}

impl Goal {
    /// Progress toward the target in percent, capped at 100.
    #[must_use]
    pub fn progress_percent(&self) -> f64 {
        if self.target_amount <= 0.0 {
            return 0.0;
        }
        (self.current_amount / self.target_amount * 100.0).min(100.0)
    }

    #[must_use]
    pub fn remaining(&self) -> f64 {
        (self.target_amount - self.current_amount).max(0.0)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewGoal {
    pub name: String,
    pub target_amount: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct GoalContribution {
    pub amount: f64,
}

// =============================================================================
// DASHBOARD & INSIGHTS
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_balance: f64,
    pub total_income: f64,
    pub total_expenses: f64,
    pub budget_left: f64,
    pub income_change_percent: f64,
    pub expense_change_percent: f64,
    pub budget_usage_percent: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CategoryBreakdown {
    pub category: String,
    pub amount: f64,
    pub percentage: f64,
    pub color: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MonthlyData {
    pub month: String,
    pub income: f64,
    pub expenses: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub stats: DashboardStats,
    #[serde(default)]
    pub category_breakdown: Vec<CategoryBreakdown>,
    #[serde(default)]
    pub monthly_trend: Vec<MonthlyData>,
    #[serde(default)]
    pub recent_transactions: Vec<Transaction>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AiInsight {
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub level: InsightLevel,
    #[serde(default)]
    pub icon: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AiInsightsResponse {
    #[serde(default)]
    pub insights: Vec<AiInsight>,
}

// =============================================================================
// FORECAST
// =============================================================================

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub month: String,
    pub expenses: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    pub month: String,
    pub predicted: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ForecastInsight {
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub level: InsightLevel,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    #[serde(default)]
    pub predicted_total_next_month: f64,
    #[serde(default)]
    pub trend: Vec<TrendPoint>,
    #[serde(default)]
    pub forecast: Vec<ForecastPoint>,
    #[serde(default)]
    pub category_predictions: BTreeMap<String, f64>,
    #[serde(default)]
    pub insights: Vec<ForecastInsight>,
}

// =============================================================================
// REPORTS
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportSummary {
    pub total_income: f64,
    pub total_expenses: f64,
    pub total_savings: f64,
    pub average_monthly_savings: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MonthlyOverview {
    pub month: String,
    pub income: f64,
    pub expenses: f64,
    #[serde(default)]
    pub savings: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SavingsPoint {
    pub month: String,
    pub savings: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExpenseShare {
    pub category: String,
    pub amount: f64,
    pub percent: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BestPerformance {
    pub month: String,
    pub amount: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Milestone {
    pub target: f64,
    pub remaining: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub summary: ReportSummary,
    #[serde(default)]
    pub monthly_overview: Vec<MonthlyOverview>,
    #[serde(default)]
    pub savings_trend: Vec<SavingsPoint>,
    #[serde(default)]
    pub expense_distribution: Vec<ExpenseShare>,
    pub best_performance: BestPerformance,
    pub next_milestone: Milestone,
}

/// The reports endpoint answers `{"message": ...}` when there is nothing to
/// report on.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReportResponse {
    Report(Box<Report>),
    Empty { message: String },
}

impl ReportResponse {
    #[must_use]
    pub fn report(&self) -> Option<&Report> {
        match self {
            Self::Report(report) => Some(report),
            Self::Empty { .. } => None,
        }
    }
}

// =============================================================================
// FIELD CODECS
// =============================================================================

pub(crate) mod datetime {
    use chrono::{DateTime, NaiveDate, NaiveDateTime};
    use serde::{Deserialize, Deserializer};

    pub(crate) const WIRE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

    /// Parse a naive date-time, an RFC 3339 timestamp, or a bare date.
    pub(crate) fn parse(raw: &str) -> Option<NaiveDateTime> {
        let raw = raw.trim();
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
            return Some(dt);
        }
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f") {
            return Some(dt);
        }
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt.naive_utc());
        }
        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
    }

    pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp: {raw}")))
    }

    pub(crate) fn deserialize_option<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            None => Ok(None),
            Some(raw) if raw.trim().is_empty() => Ok(None),
            Some(raw) => parse(&raw)
                .map(Some)
                .ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp: {raw}"))),
        }
    }
}

mod flag {
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Bool(bool),
        Text(String),
    }

    pub(super) fn deserialize<'de, D>(deserializer: D) -> Result<bool, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Raw::deserialize(deserializer)? {
            Raw::Bool(value) => Ok(value),
            Raw::Text(text) => Ok(text.trim().eq_ignore_ascii_case("true")),
        }
    }
}

mod id {
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Int(i64),
        Text(String),
    }

    /// Goal ids are integers on some backends and UUID strings on others.
    pub(super) fn deserialize<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Raw::deserialize(deserializer)? {
            Raw::Int(value) => value.to_string(),
            Raw::Text(text) => text,
        })
    }
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
