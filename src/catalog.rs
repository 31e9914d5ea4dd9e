//! Built-in demo catalogs. All data here is fixed at compile time; nothing
//! in the crate ever mutates a catalog entry.

use crate::domain::models::{
    Dimensions, HostProfile, InsurancePlan, ListingRecord, RentalRecord, RentalStatus, Review,
    StorageUnitTier,
};

pub const ASSET_INDOOR_ROOM: &str = "assets/storage-indoor-room.jpg";
pub const ASSET_OFFICE_SPACE: &str = "assets/storage-office-space.jpg";
pub const ASSET_RESIDENTIAL_ROOM: &str = "assets/storage-residential-room.jpg";
pub const ASSET_WAREHOUSE_CORNER: &str = "assets/storage-warehouse-corner.jpg";
pub const ASSET_GARAGE_UNIT: &str = "assets/storage-garage-unit.jpg";
pub const ASSET_INTERIOR_VIEW: &str = "assets/storage-interior-view.jpg";
pub const ASSET_SECURITY_VIEW: &str = "assets/storage-security-view.jpg";
pub const ASSET_CORRIDOR_VIEW: &str = "assets/storage-corridor-view.jpg";

/// Pool the deterministic gallery selector draws supplementary images from.
pub const GALLERY_POOL: [&str; 3] = [ASSET_INTERIOR_VIEW, ASSET_SECURITY_VIEW, ASSET_CORRIDOR_VIEW];

pub const AVAILABLE_SIZES: [&str; 4] = ["25 sq ft", "50 sq ft", "100 sq ft", "200 sq ft"];

fn listing(
    id: &str,
    title: &str,
    location: &str,
    price_per_day: u32,
    rating: f64,
    image: &str,
    features: [&str; 3],
    distance_km: f64,
    available_247: bool,
    security: bool,
    floor_access: bool,
) -> ListingRecord {
    ListingRecord {
        id: id.to_string(),
        title: title.to_string(),
        location: location.to_string(),
        price_per_day,
        rating,
        image: image.to_string(),
        features: features.iter().map(|f| f.to_string()).collect(),
        distance_km,
        available_247,
        security,
        floor_access,
    }
}

pub fn listings() -> Vec<ListingRecord> {
    vec![
        listing(
            "1",
            "Secure Storage in Kwun Tong",
            "Kwun Tong, Kowloon",
            150,
            4.8,
            ASSET_INDOOR_ROOM,
            ["24h Security", "CCTV", "Climate Control"],
            0.8,
            true,
            true,
            true,
        ),
        listing(
            "2",
            "Central Storage Hub",
            "Central, Hong Kong Island",
            280,
            4.9,
            ASSET_OFFICE_SPACE,
            ["Premium Location", "Concierge", "Parking"],
            1.2,
            true,
            true,
            true,
        ),
        listing(
            "3",
            "Affordable Warehouse Space",
            "Tsuen Wan, New Territories",
            95,
            4.5,
            ASSET_WAREHOUSE_CORNER,
            ["Large Space", "Loading Dock", "Affordable"],
            2.1,
            false,
            true,
            true,
        ),
        listing(
            "4",
            "Premium Storage in Mong Kok",
            "Mong Kok, Kowloon",
            220,
            4.7,
            "https://images.unsplash.com/photo-1558618047-3c8c76ca7d13?w=400&h=300&fit=crop",
            ["Easy Access", "Air Conditioning", "Insurance"],
            1.5,
            true,
            true,
            false,
        ),
        listing(
            "5",
            "Budget Storage in Sha Tin",
            "Sha Tin, New Territories",
            85,
            4.3,
            ASSET_GARAGE_UNIT,
            ["Budget Friendly", "Vehicle Access", "Clean"],
            3.2,
            false,
            false,
            true,
        ),
        listing(
            "6",
            "Industrial Storage in Fo Tan",
            "Fo Tan, New Territories",
            120,
            4.4,
            "https://images.unsplash.com/photo-1586864387967-d02ef85d93e8?w=400&h=300&fit=crop",
            ["High Ceiling", "Forklift Access", "Industrial"],
            2.8,
            true,
            true,
            false,
        ),
        listing(
            "7",
            "Self Storage in Causeway Bay",
            "Causeway Bay, Hong Kong Island",
            320,
            4.8,
            "https://images.unsplash.com/photo-1558618047-3c8c76ca7d13?w=400&h=300&fit=crop",
            ["Prime Location", "Modern Facility", "Smart Locks"],
            1.8,
            true,
            true,
            true,
        ),
        listing(
            "8",
            "Mini Storage in Tai Po",
            "Tai Po, New Territories",
            75,
            4.2,
            "https://images.unsplash.com/photo-1586023492125-27b2c045efd7?w=400&h=300&fit=crop",
            ["Small Units", "Flexible Terms", "Economic"],
            4.1,
            false,
            true,
            true,
        ),
        listing(
            "9",
            "Climate Storage in Admiralty",
            "Admiralty, Hong Kong Island",
            350,
            4.9,
            "https://images.unsplash.com/photo-1553877522-43269d4ea984?w=400&h=300&fit=crop",
            ["Climate Control", "Luxury Building", "Concierge"],
            2.3,
            true,
            true,
            false,
        ),
        listing(
            "10",
            "Container Storage in Yuen Long",
            "Yuen Long, New Territories",
            60,
            4.0,
            "https://images.unsplash.com/photo-1586864387967-d02ef85d93e8?w=400&h=300&fit=crop",
            ["Container Units", "Drive-up Access", "Cheap"],
            5.5,
            false,
            false,
            true,
        ),
        listing(
            "11",
            "Business Storage in Tsim Sha Tsui",
            "Tsim Sha Tsui, Kowloon",
            390,
            4.8,
            "https://images.unsplash.com/photo-1558618047-3c8c76ca7d13?w=400&h=300&fit=crop",
            ["Business Center", "Meeting Rooms", "Premium"],
            2.0,
            true,
            true,
            false,
        ),
        listing(
            "12",
            "Family Storage in Tuen Mun",
            "Tuen Mun, New Territories",
            90,
            4.3,
            ASSET_RESIDENTIAL_ROOM,
            ["Family Friendly", "Wide Aisles", "Safe"],
            4.8,
            false,
            true,
            true,
        ),
        listing(
            "13",
            "Luxury Storage in Mid-Levels",
            "Mid-Levels, Hong Kong Island",
            450,
            5.0,
            "https://images.unsplash.com/photo-1586023492125-27b2c045efd7?w=400&h=300&fit=crop",
            ["Luxury Service", "White Glove", "Valet"],
            1.9,
            true,
            true,
            false,
        ),
    ]
}

pub fn storage_tiers() -> Vec<StorageUnitTier> {
    vec![
        StorageUnitTier {
            id: "2x3-basic".to_string(),
            display_name: "2×3m Basic Unit".to_string(),
            dimensions: Dimensions {
                width_cm: 200.0,
                height_cm: 250.0,
                depth_cm: 300.0,
            },
            total_volume_m3: 15.0,
            monthly_price: 800,
            features: ["24/7 Access", "CCTV Security", "Climate Controlled"]
                .iter()
                .map(|f| f.to_string())
                .collect(),
        },
        StorageUnitTier {
            id: "3x4-premium".to_string(),
            display_name: "3×4m Premium Unit".to_string(),
            dimensions: Dimensions {
                width_cm: 300.0,
                height_cm: 250.0,
                depth_cm: 400.0,
            },
            total_volume_m3: 30.0,
            monthly_price: 1200,
            features: [
                "24/7 Access",
                "CCTV Security",
                "Climate Controlled",
                "Insurance Included",
            ]
            .iter()
            .map(|f| f.to_string())
            .collect(),
        },
        StorageUnitTier {
            id: "4x5-large".to_string(),
            display_name: "4×5m Large Unit".to_string(),
            dimensions: Dimensions {
                width_cm: 400.0,
                height_cm: 250.0,
                depth_cm: 500.0,
            },
            total_volume_m3: 50.0,
            monthly_price: 1800,
            features: [
                "24/7 Access",
                "CCTV Security",
                "Climate Controlled",
                "Insurance Included",
                "Loading Bay Access",
            ]
            .iter()
            .map(|f| f.to_string())
            .collect(),
        },
    ]
}

fn review(user: &str, avatar: &str, rating: u8, date: &str, comment: &str, photos: &[&str]) -> Review {
    Review {
        user: user.to_string(),
        avatar: avatar.to_string(),
        rating,
        date: date.to_string(),
        comment: comment.to_string(),
        photos: photos.iter().map(|p| p.to_string()).collect(),
    }
}

pub fn sample_reviews() -> Vec<Review> {
    vec![
        review(
            "Sarah Wong",
            "assets/profile-woman-1.jpg",
            5,
            "2 weeks ago",
            "Perfect location and very clean facility. The host was very responsive and helpful throughout the entire process.",
            &[ASSET_INTERIOR_VIEW],
        ),
        review(
            "Michael Chen",
            "assets/profile-man-1.jpg",
            4,
            "1 month ago",
            "Great security features and easy access. The climate control works perfectly for my documents and electronics.",
            &[],
        ),
        review(
            "Lisa Park",
            "assets/profile-woman-2.jpg",
            5,
            "3 weeks ago",
            "Excellent value for money. The space is exactly as described and the booking process was seamless.",
            &[ASSET_SECURITY_VIEW],
        ),
        review(
            "David Liu",
            "assets/profile-man-2.jpg",
            4,
            "2 months ago",
            "Professional service and modern facilities. Would definitely recommend to anyone looking for reliable storage.",
            &[],
        ),
    ]
}

pub fn default_host() -> HostProfile {
    HostProfile {
        name: "David Chen".to_string(),
        avatar: "assets/profile-man-1.jpg".to_string(),
        verified: true,
        response_rate_percent: 98,
        response_time: "2 hours".to_string(),
        joined: "Member since 2020".to_string(),
    }
}

pub fn insurance_plans() -> Vec<InsurancePlan> {
    vec![
        InsurancePlan {
            id: "basic".to_string(),
            name: "Basic Protection".to_string(),
            monthly_premium: Some(299),
            coverage: "Up to HK$50,000".to_string(),
            features: [
                "Fire & Theft Protection",
                "Natural Disaster Coverage",
                "48h Claim Processing",
                "Online Support",
            ]
            .iter()
            .map(|f| f.to_string())
            .collect(),
        },
        InsurancePlan {
            id: "premium".to_string(),
            name: "Premium Shield".to_string(),
            monthly_premium: Some(599),
            coverage: "Up to HK$150,000".to_string(),
            features: [
                "All-Risk Coverage",
                "Third-Party Liability",
                "24h Claim Processing",
                "Dedicated Agent",
                "Global Coverage",
            ]
            .iter()
            .map(|f| f.to_string())
            .collect(),
        },
        InsurancePlan {
            id: "enterprise".to_string(),
            name: "Enterprise Plus".to_string(),
            monthly_premium: None,
            coverage: "Unlimited".to_string(),
            features: [
                "Full Risk Assessment",
                "Custom Policy Terms",
                "12h Claim Processing",
                "Priority Support",
                "Regulatory Compliance",
            ]
            .iter()
            .map(|f| f.to_string())
            .collect(),
        },
    ]
}

/// Unknown plan ids fall back to the basic tier rather than failing; the
/// booking card always has something to render.
pub fn insurance_plan(id: &str) -> InsurancePlan {
    let mut plans = insurance_plans();
    let idx = plans.iter().position(|p| p.id == id).unwrap_or(0);
    plans.swap_remove(idx)
}

pub fn rentals() -> Vec<RentalRecord> {
    vec![
        RentalRecord {
            listing_id: "1".to_string(),
            title: "Secure Storage in Kwun Tong".to_string(),
            location: "Kwun Tong, Kowloon".to_string(),
            image: "https://images.unsplash.com/photo-1586023492125-27b2c045efd7?w=400&h=300&fit=crop"
                .to_string(),
            price_per_day: 150,
            start_date: "2024-01-15".to_string(),
            end_date: "2024-03-15".to_string(),
            status: RentalStatus::Active,
        },
        RentalRecord {
            listing_id: "2".to_string(),
            title: "Central Storage Hub".to_string(),
            location: "Central, Hong Kong Island".to_string(),
            image: "https://images.unsplash.com/photo-1553877522-43269d4ea984?w=400&h=300&fit=crop"
                .to_string(),
            price_per_day: 280,
            start_date: "2023-10-01".to_string(),
            end_date: "2023-12-31".to_string(),
            status: RentalStatus::Completed,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalogs_have_expected_shape() {
        assert_eq!(listings().len(), 13);
        assert_eq!(storage_tiers().len(), 3);
        assert_eq!(sample_reviews().len(), 4);
        assert!(listings().iter().all(|l| l.price_per_day > 0));
        assert!(storage_tiers().iter().all(|t| t.total_volume_m3 > 0.0));
    }

    #[test]
    fn unknown_insurance_plan_falls_back_to_basic() {
        assert_eq!(insurance_plan("no-such-plan").id, "basic");
        assert_eq!(insurance_plan("premium").id, "premium");
    }
}
