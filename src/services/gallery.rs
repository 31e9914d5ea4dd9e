use crate::sequence::SeededSequence;

/// Lenient id parse for seeding: take the leading (optionally signed)
/// decimal run; non-numeric or zero ids fall back to 1.
fn seed_from_listing_id(id: &str) -> i64 {
    let trimmed = id.trim();
    let (sign, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let leading: String = digits.chars().take_while(|c| c.is_ascii_digit()).collect();
    let parsed = leading.parse::<i64>().unwrap_or(0).saturating_mul(sign);
    if parsed == 0 {
        1
    } else {
        parsed
    }
}

/// Deterministic gallery for a listing: the primary image followed by 1–4
/// picks from the supplementary pool (repetition allowed). The same listing
/// id always yields the same ordered list, so thumbnail indices stay stable
/// across visits.
pub fn gallery_images(primary: &str, listing_id: &str, pool: &[&str]) -> Vec<String> {
    let mut seq = SeededSequence::new(seed_from_listing_id(listing_id));
    let count = (seq.next_value() * 4.0) as usize + 1;

    let mut images = Vec::with_capacity(count + 1);
    images.push(primary.to_string());
    for _ in 0..count {
        images.push(pool[seq.pick_index(pool.len())].to_string());
    }
    images
}
