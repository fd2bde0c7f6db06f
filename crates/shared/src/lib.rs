// Shared crate clippy configuration
// Test code patterns (expected in test files):
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Harborpay Shared Types
//!
//! Data contracts consumed by the portal core. Everything here is supplied by
//! external data sources per render; the portal only reads these records, it
//! never creates, mutates, or deletes them.

pub mod account;
pub mod customer;
pub mod purchase;

pub use account::{Account, AccountStatus, AccountType};
pub use customer::{BillingAddress, Customer, PaymentMethod, TaxId};
pub use purchase::{
    Order, OrganizationSummary, Product, RecurringInterval, Subscription, SubscriptionStatus,
};
