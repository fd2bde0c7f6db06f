//! Selection synchronizer
//!
//! Derives the single "selected purchase item" from the two source
//! collections and keeps it in sync with the shareable `id` URL parameter.
//! The URL is the single source of truth: this module reads and writes it
//! through the [`SelectedIdParam`] accessor pair and never keeps a shadow
//! copy that could drift.

use harborpay_shared::{Order, Product, Subscription};
use time::OffsetDateTime;
use uuid::Uuid;

/// The two selectable item classes
///
/// This is the single classification predicate for "is this a subscription".
/// Detail dispatch and route building both go through it so rendering and
/// linking can never diverge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PurchaseKind {
    Subscriptions,
    Orders,
}

impl PurchaseKind {
    /// Path segment used in per-item navigation routes
    pub fn path_segment(&self) -> &'static str {
        match self {
            PurchaseKind::Subscriptions => "subscriptions",
            PurchaseKind::Orders => "orders",
        }
    }
}

impl std::fmt::Display for PurchaseKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path_segment())
    }
}

/// A resolved selection, borrowing from one of the two source collections
#[derive(Debug, Clone, Copy)]
pub enum SelectedItem<'a> {
    Subscription(&'a Subscription),
    Order(&'a Order),
}

impl<'a> SelectedItem<'a> {
    pub fn id(&self) -> Uuid {
        match self {
            SelectedItem::Subscription(sub) => sub.id,
            SelectedItem::Order(order) => order.id,
        }
    }

    pub fn kind(&self) -> PurchaseKind {
        match self {
            SelectedItem::Subscription(_) => PurchaseKind::Subscriptions,
            SelectedItem::Order(_) => PurchaseKind::Orders,
        }
    }

    pub fn product(&self) -> &'a Product {
        match self {
            SelectedItem::Subscription(sub) => &sub.product,
            SelectedItem::Order(order) => &order.product,
        }
    }

    pub fn created_at(&self) -> OffsetDateTime {
        match self {
            SelectedItem::Subscription(sub) => sub.created_at,
            SelectedItem::Order(order) => order.created_at,
        }
    }

    pub fn organization_slug(&self) -> &'a str {
        match self {
            SelectedItem::Subscription(sub) => &sub.organization_slug,
            SelectedItem::Order(order) => &order.organization_slug,
        }
    }
}

/// Typed accessor pair over the URL `id` query parameter
///
/// Implementations wrap whatever navigation surface the shell provides
/// (browser history, a router, a test harness). `get` reads the current
/// value, `set` requests a transition.
pub trait SelectedIdParam {
    fn get(&self) -> Option<Uuid>;
    fn set(&mut self, id: Uuid);
}

/// In-memory `id` parameter, parsed from the raw query-string form
///
/// Absent, empty, or unparsable values all read as unset; deep links carry
/// valid ids or fall back to the initialization rule.
#[derive(Debug, Clone, Default)]
pub struct QueryId {
    value: Option<Uuid>,
}

impl QueryId {
    pub fn unset() -> Self {
        Self { value: None }
    }

    /// Parse the raw `id` query parameter value
    pub fn from_raw(raw: &str) -> Self {
        Self {
            value: Uuid::parse_str(raw.trim()).ok(),
        }
    }

    /// Render the value back into query-string form, empty when unset
    pub fn as_query_value(&self) -> String {
        self.value.map(|id| id.to_string()).unwrap_or_default()
    }
}

impl SelectedIdParam for QueryId {
    fn get(&self) -> Option<Uuid> {
        self.value
    }

    fn set(&mut self, id: Uuid) {
        self.value = Some(id);
    }
}

/// Look up the selected item by id, subscriptions first
///
/// Ids are unique across both collections, so the order is unobservable in a
/// healthy session; subscriptions still come first so a violated invariant
/// resolves toward the more active item class.
pub fn derive_selection<'a>(
    selected: Option<Uuid>,
    subscriptions: &'a [Subscription],
    orders: &'a [Order],
) -> Option<SelectedItem<'a>> {
    let id = selected?;

    subscriptions
        .iter()
        .find(|sub| sub.id == id)
        .map(SelectedItem::Subscription)
        .or_else(|| {
            orders
                .iter()
                .find(|order| order.id == id)
                .map(SelectedItem::Order)
        })
}

/// Default selection: first subscription's id, else first order's id
pub fn initial_selection(subscriptions: &[Subscription], orders: &[Order]) -> Option<Uuid> {
    subscriptions
        .first()
        .map(|sub| sub.id)
        .or_else(|| orders.first().map(|order| order.id))
}

/// One reconciliation pass: apply the initialization rule, then derive
///
/// The initialization write is idempotent: once the parameter holds a value
/// it is never auto-overwritten, only [`select`] replaces it.
pub fn reconcile<'a, P: SelectedIdParam>(
    param: &mut P,
    subscriptions: &'a [Subscription],
    orders: &'a [Order],
) -> Option<SelectedItem<'a>> {
    let mut current = param.get();
    if current.is_none() {
        if let Some(first) = initial_selection(subscriptions, orders) {
            param.set(first);
            current = Some(first);
        }
    }

    derive_selection(current, subscriptions, orders)
}

/// Explicit user selection from a rendered list row
///
/// No validation: the id always originates from a rendered, therefore valid,
/// item.
pub fn select<P: SelectedIdParam>(param: &mut P, id: Uuid) {
    param.set(id);
}
