//! Deterministic fantasy names for panorama URLs.
//!
//! The name is a pure function of the URL text: a 32-bit multiply-by-31 string
//! hash picks one adjective, one noun and one decoration. All arithmetic wraps
//! at 32 bits so every implementation folding the same UTF-16 code units lands
//! on the same name.
use crate::constants::{
    FANTASY_ADJECTIVES, FANTASY_DECORATIONS, FANTASY_NOUNS, UNNAMED_LOCATION_LABEL,
};

/// Signed 32-bit `hash * 31 + unit` fold over the UTF-16 code units of `text`.
#[must_use]
pub fn string_hash(text: &str) -> i32 {
    text.encode_utf16().fold(0_i32, |hash, unit| {
        hash.wrapping_mul(31).wrapping_add(i32::from(unit))
    })
}

#[inline]
fn wrapped_index(hash: i32, factor: i32, len: usize) -> usize {
    // `unsigned_abs` keeps i32::MIN well defined (2^31).
    let magnitude = hash.wrapping_mul(factor).unsigned_abs() as usize;
    magnitude % len
}

/// Vocabulary indices `(adjective, noun, decoration)` derived from a hash.
#[must_use]
pub fn pseudonym_indices(hash: i32) -> (usize, usize, usize) {
    (
        wrapped_index(hash, 1, FANTASY_ADJECTIVES.len()),
        wrapped_index(hash, 2, FANTASY_NOUNS.len()),
        wrapped_index(hash, 3, FANTASY_DECORATIONS.len()),
    )
}

/// Fantasy name for `url`, e.g. `"Precioso Volcán 📱"`.
///
/// An empty URL short-circuits to a fixed label without hashing.
#[must_use]
pub fn pseudonym(url: &str) -> String {
    if url.is_empty() {
        return UNNAMED_LOCATION_LABEL.to_string();
    }
    let (adjective, noun, decoration) = pseudonym_indices(string_hash(url));
    format!(
        "{} {} {}",
        FANTASY_ADJECTIVES[adjective], FANTASY_NOUNS[noun], FANTASY_DECORATIONS[decoration]
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_matches_reference_recurrence() {
        assert_eq!(string_hash(""), 0);
        assert_eq!(string_hash("a"), 97);
        assert_eq!(string_hash("abc"), 96_354);
        assert_eq!(
            string_hash("https://www.google.com/maps/embed?x=1"),
            -1_172_178_837
        );
    }

    #[test]
    fn hash_counts_utf16_units() {
        // U+1F30E is a surrogate pair: 0xD83C, 0xDF0E.
        let expected = 0xD83C_i32.wrapping_mul(31).wrapping_add(0xDF0E);
        assert_eq!(string_hash("🌎"), expected);
    }

    #[test]
    fn known_names_are_stable() {
        assert_eq!(pseudonym("abc"), "Acogedor Cerro 🔮");
        assert_eq!(
            pseudonym("https://www.google.com/maps/embed?x=1"),
            "Precioso Volcán 📱"
        );
    }

    #[test]
    fn empty_url_uses_fallback_label() {
        assert_eq!(pseudonym(""), UNNAMED_LOCATION_LABEL);
    }

    #[test]
    fn same_input_same_name() {
        for url in [
            "https://google.com/maps/embed?pb=1",
            "x",
            "ñandú",
            "https://google.com/maps/embed?pb=!1m0!3m2!1ses!2scl!4v1700000000000",
        ] {
            assert_eq!(pseudonym(url), pseudonym(url));
        }
    }

    #[test]
    fn indices_stay_in_range_at_extremes() {
        for hash in [i32::MIN, i32::MIN + 1, -1, 0, 1, i32::MAX] {
            let (a, n, d) = pseudonym_indices(hash);
            assert!(a < FANTASY_ADJECTIVES.len());
            assert!(n < FANTASY_NOUNS.len());
            assert!(d < FANTASY_DECORATIONS.len());
        }
        // |i32::MIN| is 2^31, and 2^31 mod 35 == 23.
        assert_eq!(pseudonym_indices(i32::MIN).0, 23);
    }
}
