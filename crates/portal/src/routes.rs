//! Portal route building
//!
//! Per-item navigation routes for narrow viewports and the finance return
//! path handed to the onboarding provider. Path segments come from
//! [`PurchaseKind`], the same predicate detail dispatch uses, so a row never
//! links to a different item class than it renders.

use harborpay_shared::OrganizationSummary;
use uuid::Uuid;

use crate::selection::{PurchaseKind, SelectedItem};

/// Query parameter carrying the optional bearer credential for
/// unauthenticated session continuation
pub const SESSION_TOKEN_PARAM: &str = "customer_session_token";

/// Build the per-item detail route
///
/// `/{organization_slug}/portal/{subscriptions|orders}/{item_id}`, with the
/// session token appended when one exists.
pub fn item_route(item: SelectedItem<'_>, session_token: Option<&str>) -> String {
    let mut route = format!(
        "/{}/portal/{}/{}",
        item.organization_slug(),
        item.kind().path_segment(),
        item.id()
    );

    if let Some(token) = session_token {
        let encoded: String = url::form_urlencoded::byte_serialize(token.as_bytes()).collect();
        route.push_str(&format!("?{}={}", SESSION_TOKEN_PARAM, encoded));
    }

    route
}

/// Return path handed to the onboarding provider
///
/// Organization-scoped when an organization context exists, bare otherwise.
pub fn finance_return_path(organization: Option<&OrganizationSummary>) -> String {
    match organization {
        Some(org) => format!("/{}/finance/account", org.slug),
        None => "/finance/account".to_string(),
    }
}

/// Both interactive affordances of a list row
///
/// Wide viewports use `select_id` for in-place selection, narrow viewports
/// use `href` for full navigation. They are derived together from the same
/// item so the two activation mechanisms always agree on what they activate;
/// which one is live is decided by the viewport breakpoint, never by state.
#[derive(Debug, Clone)]
pub struct RowAffordances {
    pub select_id: Uuid,
    pub href: String,
    pub kind: PurchaseKind,
}

impl RowAffordances {
    pub fn for_item(item: SelectedItem<'_>, session_token: Option<&str>) -> Self {
        Self {
            select_id: item.id(),
            href: item_route(item, session_token),
            kind: item.kind(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use harborpay_shared::{Order, Product, RecurringInterval, Subscription, SubscriptionStatus};
    use time::OffsetDateTime;

    fn sample_subscription() -> Subscription {
        Subscription {
            id: Uuid::new_v4(),
            product: Product {
                id: Uuid::new_v4(),
                name: "Pro".to_string(),
                description: None,
            },
            status: SubscriptionStatus::Active,
            recurring_interval: RecurringInterval::Month,
            created_at: OffsetDateTime::UNIX_EPOCH,
            organization_slug: "acme".to_string(),
        }
    }

    fn sample_order() -> Order {
        Order {
            id: Uuid::new_v4(),
            product: Product {
                id: Uuid::new_v4(),
                name: "Lifetime".to_string(),
                description: None,
            },
            created_at: OffsetDateTime::UNIX_EPOCH,
            organization_slug: "acme".to_string(),
        }
    }

    #[test]
    fn test_item_route_segments_follow_item_class() {
        let sub = sample_subscription();
        let order = sample_order();

        let route = item_route(SelectedItem::Subscription(&sub), None);
        assert_eq!(route, format!("/acme/portal/subscriptions/{}", sub.id));

        let route = item_route(SelectedItem::Order(&order), None);
        assert_eq!(route, format!("/acme/portal/orders/{}", order.id));
    }

    #[test]
    fn test_item_route_encodes_session_token() {
        let sub = sample_subscription();
        let route = item_route(SelectedItem::Subscription(&sub), Some("tok en+1"));
        assert!(route.ends_with("?customer_session_token=tok+en%2B1"));
    }

    #[test]
    fn test_finance_return_path_scoping() {
        let org = OrganizationSummary {
            name: "Acme".to_string(),
            avatar_url: None,
            slug: "acme".to_string(),
        };
        assert_eq!(finance_return_path(Some(&org)), "/acme/finance/account");
        assert_eq!(finance_return_path(None), "/finance/account");
    }

    #[test]
    fn test_row_affordances_agree_with_route() {
        let order = sample_order();
        let row = RowAffordances::for_item(SelectedItem::Order(&order), None);
        assert_eq!(row.select_id, order.id);
        assert_eq!(row.kind, PurchaseKind::Orders);
        assert!(row.href.contains(&order.id.to_string()));
    }
}
