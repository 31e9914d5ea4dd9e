use crate::catalog;
use crate::domain::models::{ListingDetails, ListingRecord, Review};
use crate::services::gallery::gallery_images;

#[derive(thiserror::Error, Debug)]
pub enum ListingError {
    #[error("listing not found: {0}")]
    NotFound(String),
}

/// Search-panel state. Defaults mirror the UI's initial sliders: any price
/// up to HK$500/day within 5 km, no access/security requirements.
#[derive(Debug, Clone)]
pub struct ListingFilter {
    pub query: String,
    pub min_price: u32,
    pub max_price: u32,
    pub max_distance_km: f64,
    pub floor_access: bool,
    pub security_24h: bool,
}

impl Default for ListingFilter {
    fn default() -> Self {
        Self {
            query: String::new(),
            min_price: 0,
            max_price: 500,
            max_distance_km: 5.0,
            floor_access: false,
            security_24h: false,
        }
    }
}

pub fn search(listings: &[ListingRecord], filter: &ListingFilter) -> Vec<ListingRecord> {
    let q = filter.query.to_lowercase();
    listings
        .iter()
        .filter(|l| {
            let matches_query = q.is_empty()
                || l.title.to_lowercase().contains(&q)
                || l.location.to_lowercase().contains(&q);
            let matches_price = l.price_per_day >= filter.min_price && l.price_per_day <= filter.max_price;
            let matches_distance = l.distance_km <= filter.max_distance_km;
            let matches_floor = !filter.floor_access || l.floor_access;
            let matches_security = !filter.security_24h || (l.security && l.available_247);
            matches_query && matches_price && matches_distance && matches_floor && matches_security
        })
        .cloned()
        .collect()
}

pub fn find_listing(listings: &[ListingRecord], id: &str) -> Result<ListingRecord, ListingError> {
    listings
        .iter()
        .find(|l| l.id == id)
        .cloned()
        .ok_or_else(|| ListingError::NotFound(id.to_string()))
}

fn numeric_id(id: &str) -> u32 {
    let n: u32 = id
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect::<String>()
        .parse()
        .unwrap_or(0);
    if n == 0 {
        1
    } else {
        n
    }
}

/// Deterministic stand-in for a review total the demo has no backend for.
pub fn review_count(id: &str) -> u32 {
    (numeric_id(id) * 17 + 47) % 150 + 50
}

/// First 2–4 of the fixed review catalog, selected by listing id so each
/// listing shows a stable sample.
pub fn review_sample(id: &str, reviews: &[Review]) -> Vec<Review> {
    let take = ((numeric_id(id) as usize + 1) % 3) + 2;
    reviews.iter().take(take).cloned().collect()
}

pub fn listing_details(id: &str) -> Result<ListingDetails, ListingError> {
    let all = catalog::listings();
    let listing = find_listing(&all, id)?;

    let images = gallery_images(&listing.image, &listing.id, &catalog::GALLERY_POOL);
    let price_per_sqft = (listing.price_per_day as f64 / 50.0).round() as u32;

    Ok(ListingDetails {
        images,
        price_per_sqft,
        review_count: review_count(&listing.id),
        reviews: review_sample(&listing.id, &catalog::sample_reviews()),
        host: catalog::default_host(),
        available_sizes: catalog::AVAILABLE_SIZES.iter().map(|s| s.to_string()).collect(),
        unit_dimensions: "10ft × 10ft × 8ft (H)".to_string(),
        access_hours: "24/7 Access".to_string(),
        amenities: ["Climate Control", "CCTV Monitoring", "Staff on Site", "Lift Access"]
            .iter()
            .map(|f| f.to_string())
            .collect(),
        insurance_note: "HK$10M Liability Coverage · SpaceLink Insurance".to_string(),
        listing,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{listings, sample_reviews};

    #[test]
    fn default_filter_keeps_everything_within_five_km() {
        let results = search(&listings(), &ListingFilter::default());
        assert!(!results.is_empty());
        assert!(results.iter().all(|l| l.distance_km <= 5.0));
        // Yuen Long sits at 5.5 km and drops out.
        assert!(!results.iter().any(|l| l.id == "10"));
    }

    #[test]
    fn query_matches_title_or_location_case_insensitively() {
        let filter = ListingFilter {
            query: "kowloon".to_string(),
            ..Default::default()
        };
        let results = search(&listings(), &filter);
        assert!(!results.is_empty());
        assert!(results
            .iter()
            .all(|l| l.location.to_lowercase().contains("kowloon")));
    }

    #[test]
    fn security_filter_requires_both_flags() {
        let filter = ListingFilter {
            security_24h: true,
            ..Default::default()
        };
        for l in search(&listings(), &filter) {
            assert!(l.security && l.available_247, "{} leaked through", l.id);
        }
    }

    #[test]
    fn price_bounds_are_inclusive() {
        let filter = ListingFilter {
            min_price: 150,
            max_price: 150,
            ..Default::default()
        };
        let results = search(&listings(), &filter);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "1");
    }

    #[test]
    fn review_derivations_are_stable_and_bounded() {
        for l in listings() {
            assert_eq!(review_count(&l.id), review_count(&l.id));
            assert!((50..200).contains(&review_count(&l.id)));
            let sample = review_sample(&l.id, &sample_reviews());
            assert!((2..=4).contains(&sample.len()));
        }
    }

    #[test]
    fn details_carry_the_deterministic_gallery() {
        let a = listing_details("3").expect("listing 3 exists");
        let b = listing_details("3").expect("listing 3 exists");
        assert_eq!(a.images, b.images);
        assert_eq!(a.images[0], a.listing.image);
        assert_eq!(a.price_per_sqft, 2); // round(95 / 50)
    }

    #[test]
    fn unknown_listing_is_an_error() {
        assert!(listing_details("99").is_err());
    }
}
