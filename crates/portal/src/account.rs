//! Payout account reconciliation
//!
//! Classifies the user's account bindings into exactly one display mode and
//! owns the single concurrency guard of the portal: at most one account-link
//! submission in flight. All other transitions (onboarding completion, risk
//! review, review clearing) happen on the provider side and are observed via
//! re-fetch, never caused here.

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use harborpay_shared::{Account, AccountStatus};
use uuid::Uuid;

use crate::error::{PortalError, PortalResult};

/// Display mode of the finance/account view
///
/// Exactly one mode holds at any render. `DualConflict` takes absolute
/// precedence over the status-derived modes: even an active account is not
/// shown as active while two differing bindings exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountMode {
    NoAccount,
    DualConflict,
    UnderReview,
    SetupIncomplete,
    Active,
}

impl AccountMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountMode::NoAccount => "no_account",
            AccountMode::DualConflict => "dual_conflict",
            AccountMode::UnderReview => "under_review",
            AccountMode::SetupIncomplete => "setup_incomplete",
            AccountMode::Active => "active",
        }
    }

    /// Whether the onboarding redirect is offered
    pub fn offers_onboarding(&self) -> bool {
        matches!(self, AccountMode::SetupIncomplete)
    }

    /// Whether the dashboard redirect is offered
    pub fn offers_dashboard(&self) -> bool {
        matches!(self, AccountMode::Active)
    }

    /// Whether the link-existing-account form is offered
    ///
    /// Offered whenever no account is bound, independently of whether any
    /// candidates exist; the create-account affordance is a separate gate.
    pub fn offers_link_form(&self) -> bool {
        matches!(self, AccountMode::NoAccount)
    }

    /// Whether the create-new-account affordance is offered
    pub fn offers_create_account(&self) -> bool {
        matches!(self, AccountMode::NoAccount)
    }
}

impl std::fmt::Display for AccountMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The authoritative payout account when only one is unambiguous
///
/// Organization binding takes precedence when both are present.
pub fn current_account<'a>(
    personal: Option<&'a Account>,
    organization: Option<&'a Account>,
) -> Option<&'a Account> {
    organization.or(personal)
}

/// Classify the bindings into a display mode
///
/// Pure and total over all four presence combinations.
pub fn classify(personal: Option<&Account>, organization: Option<&Account>) -> AccountMode {
    if let (Some(personal), Some(organization)) = (personal, organization) {
        if personal.id != organization.id {
            return AccountMode::DualConflict;
        }
    }

    match current_account(personal, organization) {
        None => AccountMode::NoAccount,
        Some(account) => match account.status {
            AccountStatus::UnderReview => AccountMode::UnderReview,
            AccountStatus::Active => AccountMode::Active,
            AccountStatus::Created | AccountStatus::OnboardingStarted => {
                AccountMode::SetupIncomplete
            }
        },
    }
}

/// Caller-supplied side effect that binds an account
///
/// On success the caller is expected to re-fetch the bindings; the
/// reconciler never mutates them itself.
#[async_trait]
pub trait AccountLinker: Send + Sync {
    async fn link_account(&self, account_id: Uuid) -> PortalResult<()>;
}

/// Reconciles the two bindings and the candidate list for one render cycle
#[derive(Debug, Default)]
pub struct AccountReconciler {
    personal: Option<Account>,
    organization: Option<Account>,
    candidates: Vec<Account>,
    /// Claimed for the duration of a link submission; the view layer reads
    /// it through [`AccountReconciler::is_linking`] to disable the related
    /// controls
    linking: AtomicBool,
}

impl AccountReconciler {
    pub fn new(
        personal: Option<Account>,
        organization: Option<Account>,
        candidates: Vec<Account>,
    ) -> Self {
        Self {
            personal,
            organization,
            candidates,
            linking: AtomicBool::new(false),
        }
    }

    /// Replace the bindings after a re-fetch
    pub fn refresh(
        &mut self,
        personal: Option<Account>,
        organization: Option<Account>,
        candidates: Vec<Account>,
    ) {
        self.personal = personal;
        self.organization = organization;
        self.candidates = candidates;
    }

    pub fn mode(&self) -> AccountMode {
        classify(self.personal.as_ref(), self.organization.as_ref())
    }

    pub fn current(&self) -> Option<&Account> {
        current_account(self.personal.as_ref(), self.organization.as_ref())
    }

    /// The two conflicting bindings, present only in dual-conflict mode
    pub fn conflict_pair(&self) -> Option<(&Account, &Account)> {
        match (self.mode(), &self.personal, &self.organization) {
            (AccountMode::DualConflict, Some(personal), Some(organization)) => {
                Some((personal, organization))
            }
            _ => None,
        }
    }

    pub fn candidates(&self) -> &[Account] {
        &self.candidates
    }

    /// Whether a link submission is in flight (related controls disabled)
    pub fn is_linking(&self) -> bool {
        self.linking.load(Ordering::SeqCst)
    }

    /// Submit an account link in response to explicit user action
    ///
    /// Permitted targets: one of the two conflicting ids in dual-conflict
    /// mode, or a candidate id in no-account mode. At most one submission is
    /// in flight at a time: a duplicate submission is rejected with
    /// [`PortalError::LinkInFlight`] while the first is pending, and the
    /// guard clears on settlement either way so the user can retry manually.
    pub async fn link(&self, account_id: Uuid, linker: &dyn AccountLinker) -> PortalResult<()> {
        if self
            .linking
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return Err(PortalError::LinkInFlight);
        }
        if !self.is_linkable(account_id) {
            self.linking.store(false, Ordering::SeqCst);
            return Err(PortalError::AccountNotLinkable(account_id));
        }

        let result = linker.link_account(account_id).await;
        self.linking.store(false, Ordering::SeqCst);

        if result.is_ok() {
            tracing::info!(account_id = %account_id, "Linked payout account");
        }
        result
    }

    fn is_linkable(&self, account_id: Uuid) -> bool {
        match self.mode() {
            AccountMode::DualConflict => {
                self.personal.as_ref().map(|a| a.id) == Some(account_id)
                    || self.organization.as_ref().map(|a| a.id) == Some(account_id)
            }
            AccountMode::NoAccount => self.candidates.iter().any(|a| a.id == account_id),
            _ => false,
        }
    }
}
