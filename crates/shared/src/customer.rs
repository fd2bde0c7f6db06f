//! Customer profile and payment methods

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Postal billing address
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillingAddress {
    pub line1: Option<String>,
    pub line2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    /// ISO 3166-1 alpha-2
    pub country: String,
}

/// Tax identifier attached to a customer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxId {
    /// e.g. "eu_vat", "us_ein"
    pub kind: String,
    pub value: String,
}

/// Customer record for the billing profile section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub id: Uuid,
    pub email: String,
    pub name: Option<String>,
    pub billing_address: Option<BillingAddress>,
    /// Possibly empty; the profile section surfaces these only when present
    #[serde(default)]
    pub tax_ids: Vec<TaxId>,
}

/// Saved payment method summary (card brand and last four only)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentMethod {
    pub id: Uuid,
    pub brand: String,
    pub last4: String,
    pub expiry_month: u8,
    pub expiry_year: u16,
    pub default: bool,
}
