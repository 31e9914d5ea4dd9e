use crate::services::i18n::Language;
use serde::{Deserialize, Serialize};

/// Bounding box in centimetres, as reported by the simulated scanner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width_cm: f64,
    pub height_cm: f64,
    pub depth_cm: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScannedItem {
    pub id: String,
    pub name: String,
    pub volume_m3: f64,
    pub dimensions: Dimensions,
    pub confidence_percent: f64,
    /// Opaque capture reference; the demo never dereferences it.
    pub thumbnail: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageUnitTier {
    pub id: String,
    pub display_name: String,
    pub dimensions: Dimensions,
    pub total_volume_m3: f64,
    pub monthly_price: u32,
    pub features: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingRecord {
    pub id: String,
    pub title: String,
    pub location: String,
    pub price_per_day: u32,
    pub rating: f64,
    pub image: String,
    pub features: Vec<String>,
    pub distance_km: f64,
    pub available_247: bool,
    pub security: bool,
    pub floor_access: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct Review {
    pub user: String,
    pub avatar: String,
    pub rating: u8,
    pub date: String,
    pub comment: String,
    pub photos: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct HostProfile {
    pub name: String,
    pub avatar: String,
    pub verified: bool,
    pub response_rate_percent: u8,
    pub response_time: String,
    pub joined: String,
}

/// Everything the listing page renders, assembled from the catalog plus the
/// deterministic derivations (gallery, review count, review sample).
#[derive(Debug, Clone, Serialize)]
pub struct ListingDetails {
    pub listing: ListingRecord,
    pub images: Vec<String>,
    pub price_per_sqft: u32,
    pub review_count: u32,
    pub reviews: Vec<Review>,
    pub host: HostProfile,
    pub available_sizes: Vec<String>,
    pub unit_dimensions: String,
    pub access_hours: String,
    pub amenities: Vec<String>,
    pub insurance_note: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuoteBreakdown {
    pub base_amount: i64,
    /// Signed surcharge/discount shown next to the duration selector.
    pub adjustment_percent: i32,
    pub total: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UtilizationBand {
    Comfortable,
    Snug,
    Overloaded,
}

#[derive(Debug, Clone, Serialize)]
pub struct FitReport {
    pub tier_id: String,
    pub items_volume_m3: f64,
    pub utilization_percent: f64,
    pub fit_score: f64,
    pub remaining_m3: f64,
    pub monthly_price: u32,
    pub band: UtilizationBand,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsurancePlan {
    pub id: String,
    pub name: String,
    /// None for the custom-priced enterprise tier.
    pub monthly_premium: Option<u32>,
    pub coverage: String,
    pub features: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RentalStatus {
    Active,
    Completed,
}

#[derive(Debug, Clone, Serialize)]
pub struct RentalRecord {
    pub listing_id: String,
    pub title: String,
    pub location: String,
    pub image: String,
    pub price_per_day: u32,
    pub start_date: String,
    pub end_date: String,
    pub status: RentalStatus,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub body: String,
    pub from_user: bool,
    pub timestamp: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct AppSettings {
    #[serde(default)]
    pub language: Language,
    #[serde(default)]
    pub has_seen_ar_intro: bool,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize)]
pub struct AssistantConfig {
    #[serde(default)]
    pub webhook_url: Option<String>,
    #[serde(default = "AssistantConfig::default_timeout_ms")]
    pub timeout_ms: u64,
    #[serde(default = "AssistantConfig::default_user_id")]
    pub user_id: String,
    /// Lets an install silence the audit trail.
    #[serde(default = "default_true")]
    pub audit: bool,
}

impl AssistantConfig {
    fn default_timeout_ms() -> u64 {
        2500
    }

    fn default_user_id() -> String {
        "guest".to_string()
    }
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            webhook_url: None,
            timeout_ms: Self::default_timeout_ms(),
            user_id: Self::default_user_id(),
            audit: true,
        }
    }
}
