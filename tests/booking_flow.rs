use spacelink::catalog;
use spacelink::services::listings::{listing_details, search, ListingFilter};
use spacelink::services::quote::{quote, quote_breakdown};
use spacelink::services::storage::{load_settings_from, save_settings_to};
use spacelink::{AppSettings, Language};
use tempfile::TempDir;

#[test]
fn search_then_detail_then_quote() {
    let filter = ListingFilter {
        query: "kwun tong".to_string(),
        ..Default::default()
    };
    let results = search(&catalog::listings(), &filter);
    assert_eq!(results.len(), 1);

    let details = listing_details(&results[0].id).expect("detail for search hit");
    assert_eq!(details.price_per_sqft, 3); // round(150 / 50)
    assert_eq!(details.images[0], details.listing.image);
    assert!(details.available_sizes.contains(&"50 sq ft".to_string()));

    let breakdown = quote_breakdown(details.price_per_sqft as f64, "50 sq ft", "yearly");
    assert_eq!(breakdown.base_amount, 150);
    assert_eq!(breakdown.adjustment_percent, -20);
    assert_eq!(breakdown.total, 120);
}

#[test]
fn quote_honors_the_documented_fallbacks() {
    assert_eq!(quote(28.0, "50 sq ft", "yearly"), 1120);
    assert_eq!(quote(28.0, "huge", "yearly"), quote(28.0, "50 sq ft", "yearly"));
    assert_eq!(quote(28.0, "50 sq ft", "decade"), quote(28.0, "50 sq ft", "monthly"));
}

#[test]
fn review_derivations_differ_across_listings_but_not_across_calls() {
    let a = listing_details("1").expect("listing 1");
    let b = listing_details("2").expect("listing 2");
    assert_ne!(a.review_count, b.review_count);
    assert_eq!(a.review_count, listing_details("1").expect("listing 1").review_count);
}

#[test]
fn language_preference_survives_a_restart() {
    let tmp = TempDir::new().expect("create temp dir");
    let path = tmp.path().join("settings.json");

    // First launch: nothing stored yet.
    let mut settings = load_settings_from(&path).expect("defaults");
    assert_eq!(settings, AppSettings::default());

    // User switches to Chinese and dismisses the AR intro card.
    settings.language = settings.language.toggled();
    settings.has_seen_ar_intro = true;
    save_settings_to(&path, &settings).expect("persist");

    let reloaded = load_settings_from(&path).expect("reload");
    assert_eq!(reloaded.language, Language::Zh);
    assert!(reloaded.has_seen_ar_intro);
}
