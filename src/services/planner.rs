use crate::domain::models::{FitReport, StorageUnitTier, UtilizationBand};

/// Visualizer results card: tier index → advertised size label and monthly
/// price. Indices line up with [`recommend_tier_index`].
pub const SIZE_RECOMMENDATIONS: [(&str, u32); 3] =
    [("25 sq ft", 980), ("50 sq ft", 1400), ("100 sq ft", 2200)];

/// Breakpoint mapping from accumulated volume to a tier index. Total over
/// all non-negative volumes: anything above the last breakpoint takes the
/// largest tier.
pub fn recommend_tier_index(total_volume_m3: f64) -> usize {
    if total_volume_m3 <= 2.0 {
        0
    } else if total_volume_m3 <= 4.0 {
        1
    } else {
        2
    }
}

pub fn recommend_tier(total_volume_m3: f64, tiers: &[StorageUnitTier]) -> &StorageUnitTier {
    let idx = recommend_tier_index(total_volume_m3).min(tiers.len().saturating_sub(1));
    &tiers[idx]
}

pub fn recommended_size(total_volume_m3: f64) -> (&'static str, u32) {
    SIZE_RECOMMENDATIONS[recommend_tier_index(total_volume_m3)]
}

/// Unclamped: values above 100 tell the UI the chosen unit overflows.
pub fn utilization_percent(total_volume_m3: f64, tier: &StorageUnitTier) -> f64 {
    total_volume_m3 / tier.total_volume_m3 * 100.0
}

/// Heuristic peaking at 70% utilization; negative before the clamp for
/// anything above 170%.
pub fn fit_score(utilization_percent: f64) -> f64 {
    (100.0 - (utilization_percent - 70.0)).clamp(0.0, 100.0)
}

pub fn utilization_band(utilization_percent: f64) -> UtilizationBand {
    if utilization_percent < 60.0 {
        UtilizationBand::Comfortable
    } else if utilization_percent < 85.0 {
        UtilizationBand::Snug
    } else {
        UtilizationBand::Overloaded
    }
}

pub fn fit_report(total_volume_m3: f64, tier: &StorageUnitTier) -> FitReport {
    let utilization = utilization_percent(total_volume_m3, tier);
    FitReport {
        tier_id: tier.id.clone(),
        items_volume_m3: total_volume_m3,
        utilization_percent: utilization,
        fit_score: fit_score(utilization),
        remaining_m3: tier.total_volume_m3 - total_volume_m3,
        monthly_price: tier.monthly_price,
        band: utilization_band(utilization),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::storage_tiers;

    #[test]
    fn tier_breakpoints_are_inclusive_on_the_left_tier() {
        assert_eq!(recommend_tier_index(0.0), 0);
        assert_eq!(recommend_tier_index(1.9), 0);
        assert_eq!(recommend_tier_index(2.0), 0);
        assert_eq!(recommend_tier_index(2.1), 1);
        assert_eq!(recommend_tier_index(3.9), 1);
        assert_eq!(recommend_tier_index(4.0), 1);
        assert_eq!(recommend_tier_index(4.1), 2);
        assert_eq!(recommend_tier_index(500.0), 2);
    }

    #[test]
    fn recommendation_is_monotonic_in_volume() {
        let mut last = 0;
        let mut v = 0.0;
        while v < 10.0 {
            let idx = recommend_tier_index(v);
            assert!(idx >= last);
            last = idx;
            v += 0.05;
        }
    }

    #[test]
    fn fit_score_stays_in_bounds() {
        assert_eq!(fit_score(0.0), 100.0);
        assert_eq!(fit_score(70.0), 100.0);
        assert_eq!(fit_score(100.0), 70.0);
        assert_eq!(fit_score(170.0), 0.0);
        assert_eq!(fit_score(300.0), 0.0);
    }

    #[test]
    fn utilization_may_exceed_one_hundred() {
        let tiers = storage_tiers();
        let rate = utilization_percent(20.0, &tiers[0]);
        assert!(rate > 100.0);
        assert_eq!(utilization_band(rate), UtilizationBand::Overloaded);
    }

    #[test]
    fn bands_follow_the_display_thresholds() {
        assert_eq!(utilization_band(0.0), UtilizationBand::Comfortable);
        assert_eq!(utilization_band(59.9), UtilizationBand::Comfortable);
        assert_eq!(utilization_band(60.0), UtilizationBand::Snug);
        assert_eq!(utilization_band(84.9), UtilizationBand::Snug);
        assert_eq!(utilization_band(85.0), UtilizationBand::Overloaded);
    }

    #[test]
    fn fit_report_matches_the_parts() {
        let tiers = storage_tiers();
        let report = fit_report(12.0, &tiers[0]);
        assert_eq!(report.tier_id, "2x3-basic");
        assert!((report.utilization_percent - 80.0).abs() < 1e-9);
        assert!((report.fit_score - 90.0).abs() < 1e-9);
        assert!((report.remaining_m3 - 3.0).abs() < 1e-9);
        assert_eq!(report.band, UtilizationBand::Snug);
    }

    #[test]
    fn size_labels_line_up_with_tier_indices() {
        assert_eq!(recommended_size(1.0).0, "25 sq ft");
        assert_eq!(recommended_size(3.2), ("50 sq ft", 1400));
        assert_eq!(recommended_size(9.0).0, "100 sq ft");
    }
}
