use crate::domain::models::{Dimensions, ScannedItem};
use rand::Rng;

/// Per-call-site ranges for the simulated detector. The handheld scanner
/// and the visualizer flow advertise slightly different item catalogs and
/// accuracy, so each carries its own profile.
#[derive(Debug, Clone, Copy)]
pub struct ScanProfile {
    pub names: &'static [&'static str],
    pub volume_range: (f64, f64),
    pub width_range: (f64, f64),
    pub height_range: (f64, f64),
    pub depth_range: (f64, f64),
    pub confidence_range: (f64, f64),
}

impl ScanProfile {
    pub const fn handheld() -> Self {
        Self {
            names: &["Office Chair", "Storage Box", "Desk Lamp", "File Cabinet"],
            volume_range: (0.1, 0.9),
            width_range: (20.0, 100.0),
            height_range: (30.0, 130.0),
            depth_range: (20.0, 80.0),
            confidence_range: (85.0, 100.0),
        }
    }

    pub const fn visualizer() -> Self {
        Self {
            names: &["Office Chair", "Storage Box", "Desk", "Bookshelf", "TV Stand"],
            volume_range: (0.2, 1.7),
            width_range: (20.0, 100.0),
            height_range: (30.0, 130.0),
            depth_range: (20.0, 80.0),
            confidence_range: (90.0, 100.0),
        }
    }
}

fn round_1dp(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

/// Accumulates the items produced by one scanning session. Reset discards
/// everything, matching the view lifecycle.
#[derive(Debug, Default)]
pub struct ScanSession {
    items: Vec<ScannedItem>,
    next_id: u64,
}

impl ScanSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulate one completed scan and append the detected item. The RNG is
    /// injected so tests can pin it; production callers use [`ScanSession::scan`].
    /// Non-seeded, unlike the reproducible gallery selection: every scan
    /// surfaces a different item.
    pub fn record_scan<R: Rng>(&mut self, profile: &ScanProfile, rng: &mut R) -> &ScannedItem {
        self.next_id += 1;
        let id = format!("scan-{}", self.next_id);

        let name = profile.names[rng.gen_range(0..profile.names.len())];
        let volume = round_1dp(rng.gen_range(profile.volume_range.0..profile.volume_range.1));
        let dimensions = Dimensions {
            width_cm: rng
                .gen_range(profile.width_range.0..profile.width_range.1)
                .round(),
            height_cm: rng
                .gen_range(profile.height_range.0..profile.height_range.1)
                .round(),
            depth_cm: rng
                .gen_range(profile.depth_range.0..profile.depth_range.1)
                .round(),
        };
        let confidence = rng
            .gen_range(profile.confidence_range.0..profile.confidence_range.1)
            .round()
            .clamp(0.0, 100.0);

        self.items.push(ScannedItem {
            thumbnail: format!("capture://{id}"),
            id,
            name: name.to_string(),
            volume_m3: volume,
            dimensions,
            confidence_percent: confidence,
        });
        let idx = self.items.len() - 1;
        &self.items[idx]
    }

    pub fn scan(&mut self, profile: &ScanProfile) -> &ScannedItem {
        self.record_scan(profile, &mut rand::thread_rng())
    }

    pub fn items(&self) -> &[ScannedItem] {
        &self.items
    }

    pub fn total_volume_m3(&self) -> f64 {
        self.items.iter().map(|i| i.volume_m3).sum()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn reset(&mut self) {
        self.items.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn scans_stay_inside_profile_ranges() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut session = ScanSession::new();
        for profile in [ScanProfile::handheld(), ScanProfile::visualizer()] {
            for _ in 0..200 {
                let item = session.record_scan(&profile, &mut rng).clone();
                assert!(profile.names.contains(&item.name.as_str()));
                assert!(item.volume_m3 >= profile.volume_range.0);
                assert!(item.volume_m3 <= profile.volume_range.1);
                assert!((0.0..=100.0).contains(&item.confidence_percent));
                assert!(item.confidence_percent >= profile.confidence_range.0.floor());
                assert!(item.dimensions.width_cm > 0.0);
                assert!(item.dimensions.height_cm > 0.0);
                assert!(item.dimensions.depth_cm > 0.0);
            }
        }
    }

    #[test]
    fn volumes_are_rounded_to_one_decimal() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut session = ScanSession::new();
        for _ in 0..50 {
            let v = session
                .record_scan(&ScanProfile::handheld(), &mut rng)
                .volume_m3;
            assert!(((v * 10.0).round() - v * 10.0).abs() < 1e-9);
        }
    }

    #[test]
    fn total_volume_accumulates_and_resets() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut session = ScanSession::new();
        session.record_scan(&ScanProfile::visualizer(), &mut rng);
        session.record_scan(&ScanProfile::visualizer(), &mut rng);
        let expected: f64 = session.items().iter().map(|i| i.volume_m3).sum();
        assert!((session.total_volume_m3() - expected).abs() < 1e-9);
        assert_eq!(session.len(), 2);

        session.reset();
        assert!(session.is_empty());
        assert_eq!(session.total_volume_m3(), 0.0);
    }

    #[test]
    fn item_ids_are_unique_within_a_session() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut session = ScanSession::new();
        let a = session
            .record_scan(&ScanProfile::handheld(), &mut rng)
            .id
            .clone();
        let b = session
            .record_scan(&ScanProfile::handheld(), &mut rng)
            .id
            .clone();
        assert_ne!(a, b);
    }
}
