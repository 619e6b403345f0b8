use chrono::Utc;
use rand::Rng;
use tracing::{info, warn};

use crate::analysis::{synthesize, MetricsPipeline};
use crate::models::{PropertyReport, Provenance, ScrapeResponse};
use crate::scrapers::ListingScraper;

/// Scrape one listing and analyze it, always producing a response.
///
/// Any failure on the real-data path (fetch error, unparseable page, no
/// price) is reported in `error` next to a synthetic report for the URL.
pub async fn analyze_listing<S, R>(
    scraper: &S,
    pipeline: &MetricsPipeline,
    url: &str,
    rng: &mut R,
) -> ScrapeResponse
where
    S: ListingScraper + ?Sized,
    R: Rng + ?Sized,
{
    let platform = scraper.platform();

    let failure = match scraper.extract(url).await {
        Ok(facts) => match pipeline.run(&facts, provenance(platform, url, None), rng) {
            Ok(report) => {
                info!("Analyzed listing, atlas score {}", report.atlas_score);
                return ScrapeResponse::ok(report);
            }
            Err(e) => e.to_string(),
        },
        Err(e) => format!("{:#}", e),
    };

    warn!("Falling back to synthetic data: {}", failure);
    ScrapeResponse::failed(failure, synthetic_report(pipeline, platform, url, rng))
}

/// Report for a fabricated listing, shaped exactly like a scraped one
pub fn synthetic_report<R: Rng + ?Sized>(
    pipeline: &MetricsPipeline,
    platform: &str,
    url: &str,
    rng: &mut R,
) -> Option<PropertyReport> {
    let listing = synthesize(url, rng);
    info!(
        "Generated synthetic listing {} in {}",
        listing.listing_id, listing.city
    );

    let source = provenance(platform, url, Some(listing.listing_id));
    match pipeline.run(&listing.facts, source, rng) {
        Ok(report) => Some(report),
        Err(e) => {
            warn!("Synthetic listing could not be analyzed: {}", e);
            None
        }
    }
}

fn provenance(platform: &str, url: &str, synthetic_id: Option<String>) -> Provenance {
    Provenance {
        platform: platform.to_string(),
        url: url.to_string(),
        scraped_at: Utc::now(),
        synthetic: synthetic_id.is_some(),
        listing_id: synthetic_id,
    }
}
