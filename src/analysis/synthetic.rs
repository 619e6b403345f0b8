use rand::seq::SliceRandom;
use rand::Rng;

use super::assumptions::{find_city, CityProfile, CITIES, SYNTHETIC_NEIGHBORHOODS};
use crate::models::{ExtractedFacts, Number};

const SQM_RANGE: std::ops::RangeInclusive<i64> = 70..=160;
const PRICE_SPREAD: f64 = 0.15;

/// Made-up listing standing in for a page that could not be scraped
#[derive(Debug, Clone)]
pub struct SyntheticListing {
    pub listing_id: String,
    pub city: &'static str,
    pub facts: ExtractedFacts,
}

/// Fabricate plausible listing facts for `url`.
///
/// The city comes from the URL when it names one; everything else is drawn
/// from `rng` using the same city table the estimators use, so the result
/// runs through the pipeline like a scraped listing.
pub fn synthesize<R: Rng + ?Sized>(url: &str, rng: &mut R) -> SyntheticListing {
    let listing_id = listing_id_from_url(url)
        .unwrap_or_else(|| rng.gen_range(1_000_000..=9_999_999u32).to_string());

    let city: &'static CityProfile = match find_city(url) {
        Some(city) => city,
        None => CITIES.choose(rng).unwrap_or(&CITIES[0]),
    };
    let neighborhood = SYNTHETIC_NEIGHBORHOODS.choose(rng).copied().unwrap_or("Centro");
    let location = format!("{}, {}", neighborhood, city.name);

    let sqm = rng.gen_range(SQM_RANGE);
    let bedrooms = ((sqm as f64 / 25.0).round_ties_even() as i64).clamp(1, 5);
    let bathrooms = ((bedrooms as f64 * 0.7).round_ties_even() as i64).clamp(1, 3);

    let spread = rng.gen::<f64>() * 2.0 * PRICE_SPREAD - PRICE_SPREAD;
    let price_per_sqm = (city.price_per_sqm * (1.0 + spread)).round_ties_even() as i64;
    let price = price_per_sqm * sqm;

    let facts = ExtractedFacts {
        title: format!("Property {}", listing_id),
        address: Some(format!("Property in {} (ID: {})", location, listing_id)),
        price: Some(Number::Int(price)),
        square_meters: Some(Number::Int(sqm)),
        bedrooms: Some(Number::Int(bedrooms)),
        bathrooms: Some(Number::Int(bathrooms)),
        description: format!(
            "Beautiful {} bedroom property with {} bathrooms and {}m² of living space in {}.",
            bedrooms, bathrooms, sqm, location
        ),
        location_text: location,
        images: Vec::new(),
    };

    SyntheticListing {
        listing_id,
        city: city.name,
        facts,
    }
}

/// Trailing all-digit path segment, e.g. `.../inmueble/98765432/`
pub fn listing_id_from_url(url: &str) -> Option<String> {
    let trimmed = url.strip_suffix('/').unwrap_or(url);
    let (_, last) = trimmed.rsplit_once('/')?;
    if !last.is_empty() && last.bytes().all(|b| b.is_ascii_digit()) {
        Some(last.to_string())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn listing_id_comes_from_the_last_segment() {
        assert_eq!(
            listing_id_from_url("https://www.idealista.com/inmueble/98765432/"),
            Some("98765432".to_string())
        );
        assert_eq!(
            listing_id_from_url("https://www.idealista.com/inmueble/98765432"),
            Some("98765432".to_string())
        );
        assert_eq!(listing_id_from_url("https://www.idealista.com/inmueble/abc/"), None);
        assert_eq!(listing_id_from_url("https://www.idealista.com/inmueble/1/?x=2"), None);
        assert_eq!(listing_id_from_url("nothing"), None);
    }

    #[test]
    fn falls_back_to_a_random_seven_digit_id() {
        let listing = synthesize("https://example.com/listing", &mut StdRng::seed_from_u64(3));
        assert_eq!(listing.listing_id.len(), 7);
        assert!(listing.listing_id.parse::<u32>().is_ok());
    }

    #[test]
    fn city_in_url_is_used() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..50 {
            let listing = synthesize("https://www.idealista.com/venta-viviendas/malaga/123/", &mut rng);
            assert_eq!(listing.city, "Málaga");
            assert!(listing.facts.location_text.ends_with(", Málaga"));
        }
    }

    #[test]
    fn facts_are_self_consistent() {
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..200 {
            let listing = synthesize("https://www.idealista.com/inmueble/555/", &mut rng);
            let facts = &listing.facts;
            let sqm = facts.square_meters.unwrap().as_f64();
            let bedrooms = facts.bedrooms.unwrap().as_f64();
            let bathrooms = facts.bathrooms.unwrap().as_f64();
            let price = facts.price.unwrap().as_f64();

            assert!((70.0..=160.0).contains(&sqm));
            assert!((1.0..=5.0).contains(&bedrooms));
            assert!((1.0..=3.0).contains(&bathrooms));

            let base = find_city(&listing.facts.location_text).unwrap().price_per_sqm;
            let per_sqm = price / sqm;
            assert_eq!(per_sqm.fract(), 0.0);
            assert!(per_sqm >= (base * 0.85).floor() && per_sqm <= (base * 1.15).ceil());
            assert_eq!(listing.facts.title, "Property 555");
            assert_eq!(
                facts.address.as_deref(),
                Some(format!("Property in {} (ID: 555)", facts.location_text).as_str())
            );
            assert!(facts.images.is_empty());
        }
    }

    #[test]
    fn bedrooms_follow_floor_area() {
        let mut rng = StdRng::seed_from_u64(8);
        for _ in 0..200 {
            let facts = synthesize("https://x/1", &mut rng).facts;
            let sqm = facts.square_meters.unwrap().as_f64();
            let expected = ((sqm / 25.0).round_ties_even()).clamp(1.0, 5.0);
            assert_eq!(facts.bedrooms.unwrap().as_f64(), expected);
        }
    }
}
