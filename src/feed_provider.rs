//! Source of the raw daily rate feed document.

use crate::error::Error;
use async_trait::async_trait;

#[async_trait]
pub trait FeedProvider: Send + Sync {
    /// Returns the raw feed document for the current day.
    async fn fetch_daily(&self) -> Result<String, Error>;
}
