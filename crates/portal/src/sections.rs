//! Portal overview sections
//!
//! Derives which customer-facing sections render. Absent collaborator data
//! degrades to an omitted section, never an error.

use harborpay_shared::{BillingAddress, Customer, PaymentMethod, TaxId};
use serde::Serialize;

/// Billing profile section view model
#[derive(Debug, Clone, Serialize)]
pub struct BillingProfile {
    pub email: String,
    pub name: Option<String>,
    pub billing_address: Option<BillingAddress>,
    /// Omitted from rendering when empty
    pub tax_ids: Vec<TaxId>,
}

impl BillingProfile {
    fn from_customer(customer: &Customer) -> Self {
        Self {
            email: customer.email.clone(),
            name: customer.name.clone(),
            billing_address: customer.billing_address.clone(),
            tax_ids: customer.tax_ids.clone(),
        }
    }

    pub fn has_tax_ids(&self) -> bool {
        !self.tax_ids.is_empty()
    }
}

/// The customer-view sections that made the cut for this render
#[derive(Debug, Clone, Serialize, Default)]
pub struct PortalOverview {
    /// None when no customer record exists; the section is omitted
    pub profile: Option<BillingProfile>,
    /// Empty when no methods exist; the section is omitted
    pub payment_methods: Vec<PaymentMethod>,
}

impl PortalOverview {
    pub fn derive(customer: Option<&Customer>, payment_methods: &[PaymentMethod]) -> Self {
        Self {
            profile: customer.map(BillingProfile::from_customer),
            payment_methods: payment_methods.to_vec(),
        }
    }

    pub fn shows_profile(&self) -> bool {
        self.profile.is_some()
    }

    pub fn shows_payment_methods(&self) -> bool {
        !self.payment_methods.is_empty()
    }
}
