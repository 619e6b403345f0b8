use clap::Parser;
use listing_atlas::analysis::MetricsPipeline;
use listing_atlas::models::ScrapeResponse;
use listing_atlas::scrapers::IdealistaScraper;
use listing_atlas::service;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Scrape a property listing and print an investment report as JSON
#[derive(Parser)]
#[command(author, version, about)]
struct Args {
    /// Listing page URL
    url: Option<String>,

    /// Listing platform (only idealista is supported; accepted for compatibility)
    platform: Option<String>,

    /// Anything after the platform is ignored
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    extra: Vec<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries only the JSON document
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    if !args.extra.is_empty() {
        debug!("Ignoring extra arguments: {:?}", args.extra);
    }

    let Some(url) = args.url else {
        println!(
            "{}",
            serde_json::to_string(&ScrapeResponse::failed("No URL provided", None))?
        );
        std::process::exit(1);
    };

    let platform = args.platform.unwrap_or_else(|| "idealista".to_string());
    info!("Analyzing {} (platform: {})", url, platform);

    let pipeline = MetricsPipeline::new();
    let mut rng = StdRng::from_entropy();

    let response = match IdealistaScraper::new() {
        Ok(scraper) => service::analyze_listing(&scraper, &pipeline, &url, &mut rng).await,
        Err(e) => ScrapeResponse::failed(
            format!("{:#}", e),
            service::synthetic_report(&pipeline, "idealista", &url, &mut rng),
        ),
    };

    println!("{}", serde_json::to_string(&response)?);

    Ok(())
}
