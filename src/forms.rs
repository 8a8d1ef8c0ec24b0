//! Client-side form validation.
//!
//! Forms hold raw user input as typed. `validate` either yields the request
//! body the endpoint expects or a [`ValidationError`] whose text is shown to
//! the user verbatim. A failed validation never reaches the network.
//!
//! Checks run in a fixed order and stop at the first failure, so the message
//! a user sees matches the first problem in the form.

use chrono::{Datelike, NaiveDate, NaiveDateTime};

use crate::net::types::{
    BudgetPeriod, DEFAULT_COLOR, NewBudget, NewCategory, NewGoal, NewProfile, NewTransaction, TransactionType,
};

pub const MIN_PASSWORD_LEN: usize = 8;
pub const MAX_DESCRIPTION_LEN: usize = 200;
pub const MAX_CATEGORY_NAME_LEN: usize = 50;

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please fill in all fields")]
    MissingFields,
    #[error("Please enter your name")]
    MissingName,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Password must be at least 8 characters")]
    PasswordTooShort,
    #[error("No credential received from Google.")]
    MissingCredential,
    #[error("Please enter a valid amount")]
    InvalidAmount,
    #[error("Description must be at most 200 characters")]
    DescriptionTooLong,
    #[error("Please enter valid numbers")]
    InvalidNumbers,
    #[error("Amounts cannot be negative")]
    NegativeAmount,
    #[error("Invalid budget amount")]
    InvalidBudgetAmount,
    #[error("Please enter a valid target amount")]
    InvalidTargetAmount,
    #[error("Please enter a category name")]
    MissingCategoryName,
    #[error("Category name must be at most 50 characters")]
    CategoryNameTooLong,
    #[error("Please enter a valid hex color")]
    InvalidColor,
}

// =============================================================================
// AUTH
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    /// # Errors
    ///
    /// Returns the first failing rule: presence, email shape, password length.
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_credentials(&self.email, &self.password)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl SignupForm {
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingName`] before any credential check.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.username.trim().is_empty() {
            return Err(ValidationError::MissingName);
        }
        check_credentials(&self.email, &self.password)
    }
}

fn check_credentials(email: &str, password: &str) -> Result<(), ValidationError> {
    if email.is_empty() || password.is_empty() {
        return Err(ValidationError::MissingFields);
    }
    if !is_valid_email(email) {
        return Err(ValidationError::InvalidEmail);
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::PasswordTooShort);
    }
    Ok(())
}

/// Shape check equivalent to `^[^\s@]+@[^\s@]+\.[^\s@]+$`.
///
/// Exactly one `@`, no whitespace, and a dot in the domain with text on both
/// sides of at least one dot.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    // Some dot must have a non-empty label before it and text after it.
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

// =============================================================================
// TRANSACTIONS
// =============================================================================

#[derive(Clone, Debug, PartialEq)]
pub struct TransactionForm {
    pub kind: TransactionType,
    pub description: String,
    pub category: String,
    pub amount: String,
    pub date: Option<NaiveDateTime>,
}

impl TransactionForm {
    #[must_use]
    pub fn new(kind: TransactionType) -> Self {
        Self {
            kind,
            description: String::new(),
            category: String::new(),
            amount: String::new(),
            date: None,
        }
    }

    /// # Errors
    ///
    /// Fails when a field is blank, the amount is not a positive number, or the
    /// description is longer than the backend accepts.
    pub fn validate(&self) -> Result<NewTransaction, ValidationError> {
        let description = self.description.trim();
        let category = self.category.trim();
        if description.is_empty() || category.is_empty() || self.amount.trim().is_empty() {
            return Err(ValidationError::MissingFields);
        }
        let amount = parse_positive(&self.amount).ok_or(ValidationError::InvalidAmount)?;
        if description.chars().count() > MAX_DESCRIPTION_LEN {
            return Err(ValidationError::DescriptionTooLong);
        }
        Ok(NewTransaction {
            kind: self.kind,
            description: description.to_owned(),
            category: category.to_owned(),
            amount,
            date: self.date,
        })
    }
}

// =============================================================================
// PROFILE
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileForm {
    pub initial_balance: String,
    pub monthly_budget: String,
    pub currency: Option<String>,
}

impl ProfileForm {
    /// # Errors
    ///
    /// Fails when either number is blank, unparseable, or negative.
    pub fn validate(&self) -> Result<NewProfile, ValidationError> {
        if self.initial_balance.trim().is_empty() || self.monthly_budget.trim().is_empty() {
            return Err(ValidationError::MissingFields);
        }
        let (Some(initial_balance), Some(monthly_budget)) =
            (parse_number(&self.initial_balance), parse_number(&self.monthly_budget))
        else {
            return Err(ValidationError::InvalidNumbers);
        };
        if initial_balance < 0.0 || monthly_budget < 0.0 {
            return Err(ValidationError::NegativeAmount);
        }
        let currency = self
            .currency
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(str::to_ascii_uppercase);
        Ok(NewProfile { initial_balance, monthly_budget, currency })
    }
}

// =============================================================================
// BUDGETS
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BudgetForm {
    pub category: String,
    pub limit_amount: String,
}

impl BudgetForm {
    /// Validate and build a monthly budget covering the month of `today`.
    ///
    /// # Errors
    ///
    /// Fails when a field is blank or the limit is not a positive number.
    pub fn validate(&self, today: NaiveDate) -> Result<NewBudget, ValidationError> {
        let category = self.category.trim();
        if category.is_empty() || self.limit_amount.trim().is_empty() {
            return Err(ValidationError::MissingFields);
        }
        let limit_amount = parse_positive(&self.limit_amount).ok_or(ValidationError::InvalidBudgetAmount)?;
        let (start_date, end_date) = month_window(today);
        Ok(NewBudget {
            category: category.to_owned(),
            limit_amount,
            period: BudgetPeriod::Monthly,
            start_date,
            end_date,
        })
    }
}

/// First and last day of the month containing `day`, both at midnight.
#[must_use]
pub fn month_window(day: NaiveDate) -> (NaiveDateTime, NaiveDateTime) {
    let first = day.with_day(1).unwrap_or(day);
    let next_month = if first.month() == 12 {
        NaiveDate::from_ymd_opt(first.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(first.year(), first.month() + 1, 1)
    };
    let last = next_month.and_then(|d| d.pred_opt()).unwrap_or(first);
    (first.and_time(chrono::NaiveTime::MIN), last.and_time(chrono::NaiveTime::MIN))
}

// =============================================================================
// GOALS
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GoalForm {
    pub name: String,
    pub target_amount: String,
    pub deadline: Option<NaiveDate>,
    pub icon: Option<String>,
}

impl GoalForm {
    /// # Errors
    ///
    /// Fails when a field is blank or the target is not a positive number.
    pub fn validate(&self) -> Result<NewGoal, ValidationError> {
        let name = self.name.trim();
        if name.is_empty() || self.target_amount.trim().is_empty() {
            return Err(ValidationError::MissingFields);
        }
        let target_amount = parse_positive(&self.target_amount).ok_or(ValidationError::InvalidTargetAmount)?;
        Ok(NewGoal {
            name: name.to_owned(),
            target_amount,
            deadline: self.deadline.map(|d| d.and_time(chrono::NaiveTime::MIN)),
            icon: self.icon.clone().filter(|i| !i.trim().is_empty()),
        })
    }
}

/// Parse a contribution amount typed into a goal card.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidAmount`] unless the input is a positive
/// number.
pub fn parse_contribution(raw: &str) -> Result<f64, ValidationError> {
    parse_positive(raw).ok_or(ValidationError::InvalidAmount)
}

/// Check an amount edited in place on an existing transaction.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidAmount`] unless the amount is a finite
/// number above zero.
pub fn check_amount(amount: f64) -> Result<f64, ValidationError> {
    positive(amount).ok_or(ValidationError::InvalidAmount)
}

// =============================================================================
// CATEGORIES
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryForm {
    pub name: String,
    pub kind: TransactionType,
    pub color: String,
    pub icon: Option<String>,
}

impl CategoryForm {
    #[must_use]
    pub fn new(kind: TransactionType) -> Self {
        Self { name: String::new(), kind, color: DEFAULT_COLOR.to_owned(), icon: None }
    }

    /// # Errors
    ///
    /// Fails when the name is blank or too long, or the color is not `#RRGGBB`.
    pub fn validate(&self) -> Result<NewCategory, ValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::MissingCategoryName);
        }
        if name.chars().count() > MAX_CATEGORY_NAME_LEN {
            return Err(ValidationError::CategoryNameTooLong);
        }
        let color = self.color.trim();
        let color = if color.is_empty() { DEFAULT_COLOR } else { color };
        if !is_hex_color(color) {
            return Err(ValidationError::InvalidColor);
        }
        Ok(NewCategory {
            name: name.to_owned(),
            kind: self.kind,
            color: color.to_owned(),
            icon: self.icon.clone().filter(|i| !i.trim().is_empty()),
        })
    }
}

#[must_use]
pub fn is_hex_color(raw: &str) -> bool {
    raw.strip_prefix('#')
        .is_some_and(|hex| hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()))
}

// =============================================================================
// NUMBERS
// =============================================================================

fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

fn parse_positive(raw: &str) -> Option<f64> {
    parse_number(raw).and_then(positive)
}

fn positive(value: f64) -> Option<f64> {
    (value.is_finite() && value > 0.0).then_some(value)
}

#[cfg(test)]
#[path = "forms_test.rs"]
mod tests;
