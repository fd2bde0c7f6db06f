//! Portal error types

use uuid::Uuid;

/// Errors surfaced by the portal core
///
/// Derivation functions are total and never return these; only the
/// link-request surface and the account-linking guard do.
#[derive(Debug, thiserror::Error)]
pub enum PortalError {
    /// Required environment variable is missing or empty
    #[error("Missing environment variable: {0}")]
    MissingEnv(String),

    /// Transport-level failure talking to the link provider
    #[error("Link request failed: {0}")]
    LinkRequest(#[from] reqwest::Error),

    /// Provider answered with a non-success status
    #[error("Link provider returned {status}: {message}")]
    Provider { status: u16, message: String },

    /// A link submission is already in flight; controls are disabled and a
    /// duplicate submission is rejected until the first settles
    #[error("An account link request is already in flight")]
    LinkInFlight,

    /// The given id is not a permitted link target in the current mode
    #[error("Account {0} is not linkable from the current state")]
    AccountNotLinkable(Uuid),

    /// Caller-supplied linker failed; propagated unchanged
    ///
    /// Offered for `AccountLinker` implementors to report a declined
    /// submission; the portal core never constructs it itself.
    #[error("Account link submission failed: {0}")]
    LinkSubmission(String),
}

/// Result alias used across the portal crate
pub type PortalResult<T> = Result<T, PortalError>;
