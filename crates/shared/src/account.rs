//! Payout accounts
//!
//! Accounts a user can bind as payout destination. Status transitions are
//! driven entirely by the external onboarding provider and observed via
//! re-fetch; the portal only classifies what it is handed.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Onboarding provider backing an account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountType {
    Stripe,
    OpenCollective,
}

impl AccountType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountType::Stripe => "stripe",
            AccountType::OpenCollective => "open_collective",
        }
    }
}

impl std::fmt::Display for AccountType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Provider-side lifecycle status of an account
///
/// `Created` and `OnboardingStarted` both mean setup is incomplete; they are
/// kept distinct because the provider reports them distinctly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountStatus {
    Created,
    OnboardingStarted,
    UnderReview,
    Active,
}

impl AccountStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountStatus::Created => "created",
            AccountStatus::OnboardingStarted => "onboarding_started",
            AccountStatus::UnderReview => "under_review",
            AccountStatus::Active => "active",
        }
    }
}

impl std::fmt::Display for AccountStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A payout account as reported by the data source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub id: Uuid,
    pub account_type: AccountType,
    pub status: AccountStatus,
    /// Display names of the account's owners
    pub owners: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_status_wire_names() {
        let status: AccountStatus = serde_json::from_str("\"onboarding_started\"").unwrap();
        assert_eq!(status, AccountStatus::OnboardingStarted);
        assert_eq!(AccountStatus::UnderReview.to_string(), "under_review");
    }

    #[test]
    fn test_account_round_trip() {
        let account = Account {
            id: Uuid::new_v4(),
            account_type: AccountType::Stripe,
            status: AccountStatus::Active,
            owners: vec!["Ada".to_string()],
        };
        let json = serde_json::to_string(&account).unwrap();
        let back: Account = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, account.id);
        assert_eq!(back.status, AccountStatus::Active);
    }
}
