use crate::models::ExtractedFacts;
use anyhow::Result;
use async_trait::async_trait;

/// Common trait for listing-page scrapers
/// Each site adapter turns one listing URL into best-effort facts
#[async_trait]
pub trait ListingScraper: Send + Sync {
    /// Fetch and extract a single listing. Missing fields are `None`/empty,
    /// only transport or parse failures are errors.
    async fn extract(&self, url: &str) -> Result<ExtractedFacts>;

    /// Platform name reported in the output provenance
    fn platform(&self) -> &'static str;
}
