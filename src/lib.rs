//! Listing scraper and investment-metrics pipeline.
//!
//! A listing URL is scraped into [`models::ExtractedFacts`], run through
//! [`analysis::MetricsPipeline`] and returned as a [`models::ScrapeResponse`].
//! When scraping fails a synthetic listing takes its place, so a complete
//! report is always produced.

pub mod analysis;
pub mod models;
pub mod scrapers;
pub mod service;
