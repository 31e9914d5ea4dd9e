use crate::domain::models::QuoteBreakdown;

pub const DEFAULT_SIZE_LABEL: &str = "50 sq ft";
pub const DEFAULT_DURATION_LABEL: &str = "monthly";

/// Unrecognized labels fall back to 50 sq ft; the booking card never fails
/// on a stray selection value.
pub fn area_sqft(size_label: &str) -> u32 {
    match size_label {
        "25 sq ft" => 25,
        "50 sq ft" => 50,
        "100 sq ft" => 100,
        "200 sq ft" => 200,
        _ => 50,
    }
}

/// Weekly carries a surcharge, yearly a discount; unknown labels price as
/// monthly.
pub fn duration_multiplier(duration_label: &str) -> f64 {
    match duration_label {
        "weekly" => 1.2,
        "monthly" => 1.0,
        "yearly" => 0.8,
        _ => 1.0,
    }
}

pub fn quote(base_rate_per_sqft: f64, size_label: &str, duration_label: &str) -> i64 {
    (base_rate_per_sqft * area_sqft(size_label) as f64 * duration_multiplier(duration_label))
        .round() as i64
}

pub fn quote_breakdown(
    base_rate_per_sqft: f64,
    size_label: &str,
    duration_label: &str,
) -> QuoteBreakdown {
    let base_amount = (base_rate_per_sqft * area_sqft(size_label) as f64).round() as i64;
    let adjustment_percent = ((duration_multiplier(duration_label) - 1.0) * 100.0).round() as i32;
    QuoteBreakdown {
        base_amount,
        adjustment_percent,
        total: quote(base_rate_per_sqft, size_label, duration_label),
    }
}
