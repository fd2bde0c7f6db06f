//! Finance redirect orchestration
//!
//! Moves a user past setup-incomplete (onboarding) or into account
//! management (dashboard). Navigation itself is delegated to the shell: the
//! onboarding hand-off abandons the current page, the dashboard opens a new
//! browsing context and leaves portal state untouched.

use harborpay_shared::{Account, OrganizationSummary};

use crate::error::PortalResult;
use crate::links::LinkClient;
use crate::routes::finance_return_path;

/// Navigation surface supplied by the embedding shell
pub trait NavigationShell {
    /// Full top-level navigation; the current page is discarded
    fn replace_location(&mut self, url: &str);
    /// Open in a new browsing context; the current page stays live
    fn open_external(&mut self, url: &str);
}

/// Redirect actions for the finance/account view
pub struct FinanceFlow<'a> {
    links: &'a LinkClient,
    organization: Option<&'a OrganizationSummary>,
}

impl<'a> FinanceFlow<'a> {
    pub fn new(links: &'a LinkClient, organization: Option<&'a OrganizationSummary>) -> Self {
        Self {
            links,
            organization,
        }
    }

    /// Hand the user off to external onboarding
    ///
    /// The return path points back at this portal's finance/account route,
    /// organization-scoped when an organization context exists. Request
    /// failures propagate; there is no local retry and the navigation is not
    /// cancellable once requested.
    pub async fn go_to_onboarding(
        &self,
        account: &Account,
        shell: &mut dyn NavigationShell,
    ) -> PortalResult<()> {
        let return_path = finance_return_path(self.organization);
        let link = self.links.onboarding_link(account.id, &return_path).await?;
        shell.replace_location(&link.url);
        Ok(())
    }

    /// Open the external account dashboard
    ///
    /// Only offered for active accounts; the new context is independently
    /// cancellable by the user with no effect on the portal.
    pub async fn go_to_dashboard(
        &self,
        account: &Account,
        shell: &mut dyn NavigationShell,
    ) -> PortalResult<()> {
        let link = self.links.dashboard_link(account.id).await?;
        shell.open_external(&link.url);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PortalConfig;
    use harborpay_shared::{AccountStatus, AccountType};
    use uuid::Uuid;

    #[derive(Default)]
    struct RecordingShell {
        replaced: Vec<String>,
        opened: Vec<String>,
    }

    impl NavigationShell for RecordingShell {
        fn replace_location(&mut self, url: &str) {
            self.replaced.push(url.to_string());
        }

        fn open_external(&mut self, url: &str) {
            self.opened.push(url.to_string());
        }
    }

    fn account() -> Account {
        Account {
            id: Uuid::new_v4(),
            account_type: AccountType::Stripe,
            status: AccountStatus::OnboardingStarted,
            owners: vec![],
        }
    }

    #[tokio::test]
    async fn test_onboarding_replaces_location() {
        let mut server = mockito::Server::new_async().await;
        let account = account();

        server
            .mock(
                "POST",
                format!("/accounts/{}/onboarding_link", account.id).as_str(),
            )
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"url":"https://onboard.example.com/session/xyz"}"#)
            .create_async()
            .await;

        let client = LinkClient::new(PortalConfig::new(server.url(), "https://portal.example.com"));
        let flow = FinanceFlow::new(&client, None);
        let mut shell = RecordingShell::default();

        flow.go_to_onboarding(&account, &mut shell).await.unwrap();

        assert_eq!(shell.replaced, vec!["https://onboard.example.com/session/xyz"]);
        assert!(shell.opened.is_empty());
    }

    #[tokio::test]
    async fn test_dashboard_opens_new_context() {
        let mut server = mockito::Server::new_async().await;
        let account = account();

        server
            .mock(
                "POST",
                format!("/accounts/{}/dashboard_link", account.id).as_str(),
            )
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"url":"https://dash.example.com/acct"}"#)
            .create_async()
            .await;

        let client = LinkClient::new(PortalConfig::new(server.url(), "https://portal.example.com"));
        let flow = FinanceFlow::new(&client, None);
        let mut shell = RecordingShell::default();

        flow.go_to_dashboard(&account, &mut shell).await.unwrap();

        assert_eq!(shell.opened, vec!["https://dash.example.com/acct"]);
        assert!(shell.replaced.is_empty());
    }

    #[tokio::test]
    async fn test_onboarding_failure_leaves_shell_untouched() {
        let mut server = mockito::Server::new_async().await;
        let account = account();

        server
            .mock(
                "POST",
                format!("/accounts/{}/onboarding_link", account.id).as_str(),
            )
            .with_status(500)
            .with_body("boom")
            .create_async()
            .await;

        let client = LinkClient::new(PortalConfig::new(server.url(), "https://portal.example.com"));
        let flow = FinanceFlow::new(&client, None);
        let mut shell = RecordingShell::default();

        let result = flow.go_to_onboarding(&account, &mut shell).await;

        assert!(result.is_err());
        assert!(shell.replaced.is_empty());
    }
}
