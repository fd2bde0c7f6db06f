//! Redirect-link client
//!
//! Requests one-time onboarding and dashboard redirect URLs from the external
//! link provider. No timeout or retry policy lives here; a failed request
//! propagates to the caller's error boundary and retries are user-initiated.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::PortalConfig;
use crate::error::{PortalError, PortalResult};

/// A one-time redirect URL issued by the provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedirectLink {
    pub url: String,
}

#[derive(Serialize)]
struct OnboardingLinkRequest<'a> {
    return_url: &'a str,
}

/// HTTP client for onboarding/dashboard link requests
#[derive(Clone)]
pub struct LinkClient {
    http: reqwest::Client,
    config: PortalConfig,
}

impl LinkClient {
    pub fn new(config: PortalConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Create a client from environment variables
    pub fn from_env() -> PortalResult<Self> {
        Ok(Self::new(PortalConfig::from_env()?))
    }

    pub fn config(&self) -> &PortalConfig {
        &self.config
    }

    /// Request an onboarding link for the account
    ///
    /// `return_path` is a portal-relative path; the provider gets it resolved
    /// against the portal's own base URL.
    pub async fn onboarding_link(
        &self,
        account_id: Uuid,
        return_path: &str,
    ) -> PortalResult<RedirectLink> {
        let endpoint = format!(
            "{}/accounts/{}/onboarding_link",
            self.config.provider_base_url, account_id
        );
        let return_url = format!("{}{}", self.config.app_base_url, return_path);

        let response = self
            .http
            .post(&endpoint)
            .json(&OnboardingLinkRequest {
                return_url: &return_url,
            })
            .send()
            .await?;
        let link = Self::into_link(response).await?;

        tracing::info!(
            account_id = %account_id,
            return_path = %return_path,
            "Issued onboarding link"
        );

        Ok(link)
    }

    /// Request a dashboard link for the account
    ///
    /// No return path; the dashboard opens in a separate browsing context.
    pub async fn dashboard_link(&self, account_id: Uuid) -> PortalResult<RedirectLink> {
        let endpoint = format!(
            "{}/accounts/{}/dashboard_link",
            self.config.provider_base_url, account_id
        );

        let response = self.http.post(&endpoint).send().await?;
        let link = Self::into_link(response).await?;

        tracing::info!(account_id = %account_id, "Issued dashboard link");

        Ok(link)
    }

    async fn into_link(response: reqwest::Response) -> PortalResult<RedirectLink> {
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(PortalError::Provider {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_onboarding_link_posts_return_url() {
        let mut server = mockito::Server::new_async().await;
        let account_id = Uuid::new_v4();

        let mock = server
            .mock("POST", format!("/accounts/{}/onboarding_link", account_id).as_str())
            .match_body(mockito::Matcher::JsonString(
                r#"{"return_url":"https://portal.example.com/acme/finance/account"}"#.to_string(),
            ))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"url":"https://onboard.example.com/session/abc"}"#)
            .create_async()
            .await;

        let client = LinkClient::new(PortalConfig::new(
            server.url(),
            "https://portal.example.com",
        ));
        let link = client
            .onboarding_link(account_id, "/acme/finance/account")
            .await
            .unwrap();

        assert_eq!(link.url, "https://onboard.example.com/session/abc");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_dashboard_link_provider_error_propagates() {
        let mut server = mockito::Server::new_async().await;
        let account_id = Uuid::new_v4();

        server
            .mock("POST", format!("/accounts/{}/dashboard_link", account_id).as_str())
            .with_status(502)
            .with_body("upstream unavailable")
            .create_async()
            .await;

        let client = LinkClient::new(PortalConfig::new(server.url(), "https://portal.example.com"));
        let err = client.dashboard_link(account_id).await.unwrap_err();

        match err {
            PortalError::Provider { status, message } => {
                assert_eq!(status, 502);
                assert_eq!(message, "upstream unavailable");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
