use crate::models::ExtractedFacts;
use crate::scrapers::number::extract_number;
use crate::scrapers::traits::ListingScraper;
use crate::scrapers::types::ScrapeParams;
use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT_LANGUAGE};
use reqwest::Client;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, info, warn};

const TITLE: &str = "h1.main-info__title";
const PRICE: &str = "span.price";
const ADDRESS: &str = "span.main-info__title-address";
const FEATURES: &str = ".details-property-feature-one";
const DESCRIPTION: &str = ".comment";
const GALLERY: &str = ".gallery-thumbs img";

/// Idealista listing-page scraper
pub struct IdealistaScraper {
    client: Client,
    params: ScrapeParams,
}

impl IdealistaScraper {
    /// Create a new Idealista scraper with default request settings
    pub fn new() -> Result<Self> {
        Self::with_params(ScrapeParams::default())
    }

    /// Create a new Idealista scraper with custom request settings
    pub fn with_params(params: ScrapeParams) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT_LANGUAGE,
            HeaderValue::from_str(&params.accept_language)
                .context("Invalid Accept-Language header")?,
        );

        let client = Client::builder()
            .timeout(params.timeout)
            .user_agent(params.user_agent.as_str())
            .default_headers(headers)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client, params })
    }

    /// Parse listing facts out of a property page
    pub fn parse_listing(&self, html: &str) -> Result<ExtractedFacts> {
        parse_listing(html, self.params.max_images)
    }
}

#[async_trait]
impl ListingScraper for IdealistaScraper {
    async fn extract(&self, url: &str) -> Result<ExtractedFacts> {
        debug!("Fetching URL: {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .context("Failed to fetch listing page")?;

        // Blocked or missing pages still get parsed; without a price the
        // caller falls back to synthetic data.
        if !response.status().is_success() {
            warn!("Listing page returned status: {}", response.status());
        }

        let html = response.text().await.context("Failed to read response body")?;
        debug!("Downloaded {} bytes of HTML", html.len());

        let facts = self.parse_listing(&html)?;
        info!(
            "Extracted listing: price={:?}, sqm={:?}, {} image(s)",
            facts.price,
            facts.square_meters,
            facts.images.len()
        );
        Ok(facts)
    }

    fn platform(&self) -> &'static str {
        "idealista"
    }
}

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| anyhow!("Invalid selector {:?}: {:?}", css, e))
}

fn text_of(element: ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}

fn first_text(document: &Html, css: &str) -> Result<Option<String>> {
    let selector = selector(css)?;
    Ok(document.select(&selector).next().map(text_of))
}

/// Extract listing facts from an Idealista property page.
///
/// Every field is optional on the page; absent nodes leave the field empty.
/// Images come from `src`, or `data-src` for lazy-loaded thumbnails, and
/// only the first `max_images` gallery entries are looked at.
pub fn parse_listing(html: &str, max_images: usize) -> Result<ExtractedFacts> {
    let document = Html::parse_document(html);

    let title = first_text(&document, TITLE)?.unwrap_or_else(|| "Property".to_string());
    let price = extract_number(first_text(&document, PRICE)?.as_deref());
    let location_text = first_text(&document, ADDRESS)?.unwrap_or_default();
    let description = first_text(&document, DESCRIPTION)?.unwrap_or_default();

    let mut square_meters = None;
    let mut bedrooms = None;
    let mut bathrooms = None;

    let features = selector(FEATURES)?;
    for feature in document.select(&features) {
        let text = text_of(feature);
        if text.contains("m²") {
            square_meters = extract_number(Some(&text));
        } else if text.contains("hab") {
            bedrooms = extract_number(Some(&text));
        } else if text.contains("baño") {
            bathrooms = extract_number(Some(&text));
        }
    }

    let gallery = selector(GALLERY)?;
    let images = document
        .select(&gallery)
        .take(max_images)
        .filter_map(|img| {
            let attrs = img.value();
            attrs.attr("src").or_else(|| attrs.attr("data-src"))
        })
        .map(str::to_string)
        .collect();

    Ok(ExtractedFacts {
        title,
        address: None,
        price,
        square_meters,
        bedrooms,
        bathrooms,
        location_text,
        description,
        images,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Number;

    const LISTING: &str = r#"
        <html><body>
          <h1 class="main-info__title">Piso en venta en Calle de Serrano</h1>
          <span class="main-info__title-address">Recoletos, Salamanca, Madrid</span>
          <span class="price">1.250.000 €</span>
          <div class="details-property">
            <div class="details-property-feature-one">
              <ul>
                <li>142 m² construidos</li>
              </ul>
            </div>
            <div class="details-property-feature-one">3 habitaciones</div>
            <div class="details-property-feature-one">2 baños</div>
          </div>
          <div class="comment"><p>  Luminoso piso reformado.  </p></div>
          <div class="gallery-thumbs">
            <img src="https://img.example/1.jpg">
            <img data-src="https://img.example/2.jpg">
            <img src="https://img.example/3.jpg">
            <img src="https://img.example/4.jpg">
            <img src="https://img.example/5.jpg">
            <img src="https://img.example/6.jpg">
          </div>
        </body></html>
    "#;

    #[test]
    fn parses_a_full_listing() {
        let facts = parse_listing(LISTING, 5).unwrap();

        assert_eq!(facts.title, "Piso en venta en Calle de Serrano");
        assert_eq!(facts.price, Some(Number::Int(1_250_000)));
        assert_eq!(facts.location_text, "Recoletos, Salamanca, Madrid");
        assert_eq!(facts.square_meters, Some(Number::Int(142)));
        assert_eq!(facts.bedrooms, Some(Number::Int(3)));
        assert_eq!(facts.bathrooms, Some(Number::Int(2)));
        assert_eq!(facts.description, "Luminoso piso reformado.");
    }

    #[test]
    fn images_use_lazy_source_and_are_capped() {
        let facts = parse_listing(LISTING, 5).unwrap();
        assert_eq!(
            facts.images,
            vec![
                "https://img.example/1.jpg",
                "https://img.example/2.jpg",
                "https://img.example/3.jpg",
                "https://img.example/4.jpg",
                "https://img.example/5.jpg",
            ]
        );
    }

    #[test]
    fn empty_page_yields_empty_facts() {
        let facts = parse_listing("<html><body><p>Access denied</p></body></html>", 5).unwrap();
        assert_eq!(facts.title, "Property");
        assert_eq!(facts.price, None);
        assert_eq!(facts.square_meters, None);
        assert!(facts.location_text.is_empty());
        assert!(facts.images.is_empty());
    }

    #[test]
    fn unpriced_listing_keeps_other_fields() {
        let html = r#"<h1 class="main-info__title">Chalet</h1>
            <span class="price">A consultar</span>
            <span class="main-info__title-address">Sevilla</span>"#;
        let facts = parse_listing(html, 5).unwrap();
        assert_eq!(facts.price, None);
        assert_eq!(facts.location_text, "Sevilla");
    }

    #[test]
    fn client_builds_with_defaults() {
        let scraper = IdealistaScraper::new().unwrap();
        assert_eq!(scraper.platform(), "idealista");
    }
}
