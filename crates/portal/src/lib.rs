// Portal crate clippy configuration
// Test code patterns (expected in test files):
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Harborpay Portal Core
//!
//! Client-side state derivation and navigation orchestration for the
//! self-service billing portal.
//!
//! ## Features
//!
//! - **Selection Synchronizer**: derives the selected purchase item from the
//!   subscription and order collections, mirrored with the `id` URL parameter
//! - **Detail Dispatch**: classifies the selection and builds the matching
//!   detail-pane view model
//! - **Routes**: per-item navigation routes (narrow-viewport fallback) and
//!   finance return paths
//! - **Account Reconciler**: five-mode payout-account classification with
//!   dual-conflict precedence and link gating
//! - **Redirect Links**: onboarding and dashboard link requests against the
//!   external provider
//! - **Sections**: missing-data degradation for profile and payment methods

pub mod account;
pub mod config;
pub mod detail;
pub mod error;
pub mod finance;
pub mod links;
pub mod routes;
pub mod sections;
pub mod selection;


// Account
pub use account::{classify, current_account, AccountLinker, AccountMode, AccountReconciler};

// Config
pub use config::PortalConfig;

// Detail
pub use detail::{DetailPane, OrderDetail, SubscriptionDetail};

// Error
pub use error::{PortalError, PortalResult};

// Finance
pub use finance::{FinanceFlow, NavigationShell};

// Links
pub use links::{LinkClient, RedirectLink};

// Routes
pub use routes::{finance_return_path, item_route, RowAffordances, SESSION_TOKEN_PARAM};

// Selection
pub use selection::{
    derive_selection, initial_selection, reconcile, select, PurchaseKind, QueryId, SelectedIdParam,
    SelectedItem,
};
