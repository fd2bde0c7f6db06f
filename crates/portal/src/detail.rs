//! Detail pane dispatch
//!
//! Classifies a resolved selection by its discriminant and produces the view
//! model for the matching detail renderer. The classification itself lives on
//! [`SelectedItem::kind`]; this module only consumes it.

use harborpay_shared::{RecurringInterval, SubscriptionStatus};
use serde::Serialize;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::selection::SelectedItem;

/// View model for the subscription detail renderer
#[derive(Debug, Clone, Serialize)]
pub struct SubscriptionDetail {
    pub id: Uuid,
    pub product_name: String,
    pub product_description: Option<String>,
    pub status: SubscriptionStatus,
    pub recurring_interval: RecurringInterval,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// View model for the order detail renderer
#[derive(Debug, Clone, Serialize)]
pub struct OrderDetail {
    pub id: Uuid,
    pub product_name: String,
    pub product_description: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// The detail pane, one variant per item class
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DetailPane {
    Subscription(SubscriptionDetail),
    Order(OrderDetail),
}

impl DetailPane {
    /// Build the detail pane for a resolved selection
    pub fn for_item(item: SelectedItem<'_>) -> Self {
        match item {
            SelectedItem::Subscription(sub) => DetailPane::Subscription(SubscriptionDetail {
                id: sub.id,
                product_name: sub.product.name.clone(),
                product_description: sub.product.description.clone(),
                status: sub.status,
                recurring_interval: sub.recurring_interval,
                created_at: sub.created_at,
            }),
            SelectedItem::Order(order) => DetailPane::Order(OrderDetail {
                id: order.id,
                product_name: order.product.name.clone(),
                product_description: order.product.description.clone(),
                created_at: order.created_at,
            }),
        }
    }
}
