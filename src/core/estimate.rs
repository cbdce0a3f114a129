//! Deterministic "estimated jobs" numbers.
//!
//! The counts shown next to each board are synthetic: they are derived only
//! from the search text and the board name, never from live data. The same
//! input always yields the same number on every platform, so the hash uses
//! wrapping `u32` arithmetic and the floating point operations are applied in
//! a fixed order.

use crate::utils::text::search_words;
use std::collections::HashSet;

/// Smallest estimate ever displayed.
pub const MIN_ESTIMATE: u64 = 5;

const LOCATION_BOOST: f64 = 1.15;
const MAX_LENGTH_BONUS: f64 = 1.4;

/// Rolling polynomial hash (`h = h * 31 + c`) over UTF-16 code units, modulo 2^32.
pub fn hash_string(value: &str) -> u32 {
    value
        .encode_utf16()
        .fold(0u32, |acc, unit| acc.wrapping_mul(31).wrapping_add(u32::from(unit)))
}

/// Lower-cased whitespace tokens with everything outside `[a-z0-9]` removed.
pub fn unique_tokens(query: &str) -> HashSet<String> {
    search_words(&query.to_lowercase())
        .map(|token| {
            token
                .chars()
                .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
                .collect::<String>()
        })
        .filter(|token| !token.is_empty())
        .collect()
}

/// Number of whitespace separated words in the raw query, at least 1.
pub fn keyword_token_count(query: &str) -> usize {
    search_words(query).count().max(1)
}

pub fn is_flexible_location(location: &str) -> bool {
    let lowered = location.to_lowercase();
    lowered.contains("remote") || lowered.contains("hybrid")
}

/// The multiplicative pieces of an estimate, kept apart so callers can
/// inspect how a number came about.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EstimateFactors {
    pub token_factor: f64,
    pub length_factor: f64,
    pub location_factor: f64,
    pub seed: u32,
    pub variation: f64,
}

impl EstimateFactors {
    pub fn compute(query: &str, location: &str, board_id: &str) -> Self {
        let token_count = unique_tokens(query).len() as f64;
        let query_len = query.encode_utf16().count() as f64;

        let token_factor = 0.7 + token_count * 0.22;
        let length_factor = 0.85 + (query_len / 10.0 / token_count.max(1.0)).min(MAX_LENGTH_BONUS);
        let location_factor = if is_flexible_location(location) {
            LOCATION_BOOST
        } else {
            1.0
        };

        let seed = hash_string(&format!("{}|{}|{}", board_id, query, location));
        let variation = (f64::from(seed % 21) - 10.0) / 20.0;

        Self {
            token_factor,
            length_factor,
            location_factor,
            seed,
            variation,
        }
    }

    /// Unrounded estimate for `baseline`.
    pub fn raw(&self, baseline: u32) -> f64 {
        f64::from(baseline)
            * self.token_factor
            * self.length_factor
            * self.location_factor
            * (1.0 + self.variation)
    }

    pub fn apply(&self, baseline: u32) -> u64 {
        // variation >= -0.5, so the product is never negative
        let rounded = self.raw(baseline).round();
        (rounded as u64).max(MIN_ESTIMATE)
    }
}

/// Estimated job count for one board. Total over all inputs; callers are
/// expected to have replaced blank query/location with defaults already.
pub fn estimate(baseline: u32, query: &str, location: &str, board_id: &str) -> u64 {
    EstimateFactors::compute(query, location, board_id).apply(baseline)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CPH: &str = "Copenhagen, Denmark";

    #[test]
    fn test_hash_pinned_values() {
        assert_eq!(hash_string(""), 0);
        assert_eq!(hash_string("a"), 97);
        assert_eq!(hash_string("X|Engineer|Copenhagen, Denmark"), 1_218_808_051);
        assert_eq!(hash_string("X|Engineer Manager|Copenhagen, Denmark"), 1_316_876_512);
        assert_eq!(
            hash_string("LinkedIn|Software Engineer|Copenhagen, Denmark"),
            2_555_715_402
        );
    }

    #[test]
    fn test_hash_wraps_instead_of_overflowing() {
        let long = "z".repeat(10_000);
        assert_eq!(hash_string(&long), hash_string(&long));
    }

    #[test]
    fn test_tokenization() {
        let tokens = unique_tokens("  Senior C++ Engineer / senior  ");
        assert_eq!(tokens.len(), 3);
        assert!(tokens.contains("senior"));
        assert!(tokens.contains("c"));
        assert!(tokens.contains("engineer"));
        assert!(unique_tokens("!!! ???").is_empty());
    }

    #[test]
    fn test_token_factor() {
        let one = EstimateFactors::compute("Engineer", CPH, "X");
        let two = EstimateFactors::compute("Engineer Manager", CPH, "X");
        assert!((one.token_factor - 0.92).abs() < 1e-12);
        assert!((two.token_factor - 1.14).abs() < 1e-12);
        assert!(two.token_factor > one.token_factor);
    }

    #[test]
    fn test_length_factor_is_capped() {
        let short = EstimateFactors::compute("Engineer", CPH, "X");
        assert!((short.length_factor - 1.65).abs() < 1e-12);

        let long = EstimateFactors::compute(&"a".repeat(200), CPH, "X");
        assert!((long.length_factor - 2.25).abs() < 1e-12);

        // no tokens survive, divisor falls back to 1
        let symbols = EstimateFactors::compute("!!!", CPH, "X");
        assert!((symbols.length_factor - 1.15).abs() < 1e-12);
    }

    #[test]
    fn test_location_factor() {
        for location in ["Remote", "remote-friendly", "Hybrid, Denmark", "Fully REMOTE"] {
            let factors = EstimateFactors::compute("Engineer", location, "X");
            assert_eq!(factors.location_factor, 1.15, "{location}");
        }
        let factors = EstimateFactors::compute("Engineer", CPH, "X");
        assert_eq!(factors.location_factor, 1.0);
    }

    #[test]
    fn test_variation_range() {
        let factors = EstimateFactors::compute("Engineer", CPH, "X");
        assert_eq!(factors.seed % 21, 13);
        assert!((factors.variation - 0.15).abs() < 1e-12);

        for board in ["A", "B", "LinkedIn", "Indeed", "The Hub"] {
            let v = EstimateFactors::compute("Rust", "Remote", board).variation;
            assert!((-0.5..=0.5).contains(&v));
        }
    }

    #[test]
    fn test_estimate_reference_values() {
        assert_eq!(estimate(100, "Engineer", CPH, "X"), 175);
        assert_eq!(estimate(100, "Engineer Manager", CPH, "X"), 160);
        assert_eq!(estimate(104, "Software Engineer", CPH, "LinkedIn"), 191);
    }

    #[test]
    fn test_tokens_split_on_search_whitespace_only() {
        // U+0085 joins words, U+FEFF separates them
        assert_eq!(unique_tokens("a\u{85}b c").len(), 2);
        assert_eq!(unique_tokens("x\u{feff}y").len(), 2);
        assert_eq!(keyword_token_count("x\u{feff}y"), 2);
        assert_eq!(keyword_token_count("a\u{85}b"), 1);

        assert_eq!(estimate(104, "a\u{85}b c", CPH, "LinkedIn"), 189);
        assert_eq!(estimate(104, "x\u{feff}y", "Remote", "LinkedIn"), 150);
    }

    #[test]
    fn test_large_baseline_does_not_saturate() {
        let factors = EstimateFactors::compute("Engineer", CPH, "X");
        let expected = factors.raw(u32::MAX).round() as u64;
        assert!(expected > u64::from(u32::MAX));
        assert_eq!(estimate(u32::MAX, "Engineer", CPH, "X"), expected);
    }

    #[test]
    fn test_estimate_floor() {
        assert_eq!(estimate(0, "Engineer", CPH, "X"), MIN_ESTIMATE);
        assert_eq!(estimate(1, "a", "b", "c"), MIN_ESTIMATE);
    }

    #[test]
    fn test_estimate_is_deterministic() {
        let first = estimate(156, "Platform Engineer", "Hybrid, Denmark", "Indeed");
        let second = estimate(156, "Platform Engineer", "Hybrid, Denmark", "Indeed");
        assert_eq!(first, second);
    }

    #[test]
    fn test_baseline_monotonic_for_fixed_factors() {
        let factors = EstimateFactors::compute("Backend Developer", "Remote", "Glassdoor");
        let mut previous = 0;
        for baseline in 0..500 {
            let value = factors.apply(baseline);
            assert!(value >= previous);
            assert!(value >= MIN_ESTIMATE);
            assert_eq!(value, estimate(baseline, "Backend Developer", "Remote", "Glassdoor"));
            previous = value;
        }
    }
}
