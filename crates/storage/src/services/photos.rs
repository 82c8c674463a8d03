use crate::models::country;

/// Generic stock photos used when no licensed athlete portrait exists.
const GENERIC_ATHLETE_PHOTOS: &[&str] = &[
    "https://images.unsplash.com/photo-1551524164-687a55dd1126?w=400&h=400&fit=crop&crop=faces&q=85",
    "https://images.unsplash.com/photo-1578583089129-1a56a0b5c3dc?w=400&h=400&fit=crop&crop=faces&q=85",
    "https://images.unsplash.com/photo-1551524559-8af4e6624178?w=400&h=400&fit=crop&crop=faces&q=85",
    "https://images.unsplash.com/photo-1605540436563-5bca919ae766?w=400&h=400&fit=crop&crop=faces&q=85",
    "https://images.unsplash.com/photo-1517232115160-ff93364542dd?w=400&h=400&fit=crop&crop=faces&q=85",
];

/// Stable 32-bit string hash (the classic `h * 31 + c` shift form). The exact
/// algorithm is part of the contract: photo assignment must not change
/// between releases.
pub fn string_hash(s: &str) -> i32 {
    let mut hash: i32 = 0;
    for c in s.chars() {
        hash = (hash << 5).wrapping_sub(hash).wrapping_add(c as i32);
    }
    hash
}

/// Deterministic generic portrait for an athlete with no specific asset.
pub fn generic_athlete_photo(athlete_id: &str) -> &'static str {
    let index = string_hash(athlete_id).unsigned_abs() as usize % GENERIC_ATHLETE_PHOTOS.len();
    GENERIC_ATHLETE_PHOTOS[index]
}

/// Portrait URL for an athlete. Without licensed portraits this resolves to
/// the athlete's national flag, or a generic portrait when no country is
/// known either, so consumers always have an image to render.
pub fn athlete_photo(athlete_id: &str, country_code: &str) -> String {
    if country_code.is_empty() {
        return generic_athlete_photo(athlete_id).to_string();
    }
    country::flag_url(country_code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_is_stable() {
        // Pinned values; changing the algorithm would reshuffle every photo.
        assert_eq!(string_hash(""), 0);
        assert_eq!(string_hash("a"), 97);
        assert_eq!(string_hash("ab"), 97 * 31 + 98);
    }

    #[test]
    fn generic_photo_is_deterministic() {
        assert_eq!(
            generic_athlete_photo("odermatt-marco"),
            generic_athlete_photo("odermatt-marco")
        );
    }

    #[test]
    fn photo_falls_back_to_flag() {
        let url = athlete_photo("odermatt-marco", "SUI");
        assert!(url.contains("/ch.png"));
    }

    #[test]
    fn photo_without_country_uses_generic_portrait() {
        let url = athlete_photo("somebody-new", "");
        assert_eq!(url, generic_athlete_photo("somebody-new"));
    }
}
