//! Share capability seam.

use serde::Serialize;

use crate::error::Result;
use crate::models::Quote;

/// Title attached to every share request
pub const SHARE_TITLE: &str = "分享金句";

/// Payload handed to a share target
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShareRequest {
    pub message: String,
    pub title: String,
}

impl ShareRequest {
    /// Build the request for sharing a quote
    #[must_use]
    pub fn for_quote(quote: &Quote) -> Self {
        Self {
            message: quote.share_message(),
            title: SHARE_TITLE.to_string(),
        }
    }
}

/// External share service (async)
#[allow(async_fn_in_trait)]
pub trait ShareTarget {
    /// Whether sharing is supported right now; queried before every share
    async fn is_available(&self) -> bool;

    /// Hand the request to the service
    async fn share(&self, request: &ShareRequest) -> Result<()>;
}
