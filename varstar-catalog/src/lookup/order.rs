//! Designation normalization and the GCVS sort-order comparator.
//!
//! Variable-star names inside one constellation do not sort alphabetically.
//! The historical lettering scheme starts at R and runs `R..Z`, then
//! `RR..RZ, SS..ZZ`, then wraps to `AA..QZ`; numbered designations
//! (`V0335` onward) follow. [`designation_cmp`] encodes the comparison rule
//! the catalog file is ordered by, so both the binary and the sequential
//! searcher agree with the file.
//!
//! The rule is preserved exactly, quirks included. It mis-ranks a handful of
//! pairings (the price of deciding on a two-character prefix), which is why
//! lookups fall back to a sequential scan when the binary search misses.

use std::cmp::Ordering;

/// Collapses interior whitespace runs to single spaces and trims the ends.
///
/// Applied to every search key and every value read from the file, so that
/// padded fixed-width fields and sloppy user input compare consistently.
pub fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Compares two normalized designations in catalog order.
///
/// Rule, applied on top of natural lexicographic comparison:
/// - equal strings are equal, always;
/// - when either two-character prefix reaches `"R"` or later, the natural
///   result is inverted, *unless* one of the prefixes is a `V`-plus-digit
///   numbered form (those keep natural order), and *unless* both prefixes
///   are already at `"R"` or later (already in expected relative order).
pub fn designation_cmp(a: &str, b: &str) -> Ordering {
    let natural = a.cmp(b);
    if natural == Ordering::Equal {
        return natural;
    }

    let prefix_a = prefix2(a);
    let prefix_b = prefix2(b);
    if prefix_a >= "R" || prefix_b >= "R" {
        let v_numbered = is_v_numbered(prefix_a) || is_v_numbered(prefix_b);
        let both_after_r = prefix_a >= "R" && prefix_b >= "R";
        if !v_numbered && !both_after_r {
            return natural.reverse();
        }
    }
    natural
}

/// First two characters of `s`, or all of it when shorter.
fn prefix2(s: &str) -> &str {
    match s.char_indices().nth(2) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// True for the `V0`..`V9` prefixes of numbered designations like `V0500`.
fn is_v_numbered(prefix: &str) -> bool {
    let mut chars = prefix.chars();
    chars.next() == Some('V') && chars.next().is_some_and(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("  R   CYG "), "R CYG");
        assert_eq!(collapse_whitespace("R CYG"), "R CYG");
        assert_eq!(collapse_whitespace("\tSS\t AND\n"), "SS AND");
        assert_eq!(collapse_whitespace("   "), "");
    }

    #[test]
    fn test_equal_strings_are_equal() {
        assert_eq!(designation_cmp("R CYG", "R CYG"), Ordering::Equal);
        assert_eq!(designation_cmp("V0500 CYG", "V0500 CYG"), Ordering::Equal);
    }

    #[test]
    fn test_natural_order_below_r() {
        // Both prefixes before "R": plain string comparison, no inversion.
        assert_eq!(designation_cmp("AA CYG", "AB CYG"), Ordering::Less);
        assert_eq!(designation_cmp("QZ CYG", "AA CYG"), Ordering::Greater);
    }

    #[test]
    fn test_letter_names_before_wrapped_names() {
        // "AA" wraps around after the R..Z series, so it sorts after "RR"
        // even though plain comparison says otherwise.
        assert_eq!(designation_cmp("AA CYG", "RR CYG"), Ordering::Greater);
        assert_eq!(designation_cmp("RR CYG", "AA CYG"), Ordering::Less);
    }

    #[test]
    fn test_both_after_r_keep_natural_order() {
        assert_eq!(designation_cmp("R CYG", "S CYG"), Ordering::Less);
        assert_eq!(designation_cmp("RR CYG", "SS CYG"), Ordering::Less);
        assert_eq!(designation_cmp("Z CYG", "RR CYG"), Ordering::Greater);
    }

    #[test]
    fn test_v_numbered_keeps_natural_order() {
        // The V-exception: "V0500 CYG" compares naturally, so it does not
        // get pulled ahead of wrapped letter names.
        assert_eq!(designation_cmp("RR CYG", "V0500 CYG"), Ordering::Less);
        assert_eq!(designation_cmp("AA CYG", "V0500 CYG"), Ordering::Less);
        assert_eq!(designation_cmp("V0500 CYG", "AA CYG"), Ordering::Greater);
        assert_eq!(designation_cmp("V0334 CYG", "V2000 CYG"), Ordering::Less);
    }

    #[test]
    fn test_single_letter_before_r_inverts() {
        // The classic out-of-convention designation: P-like names sort
        // after the whole R..QZ sequence under this rule.
        assert_eq!(designation_cmp("P CYG", "R CYG"), Ordering::Greater);
        assert_eq!(designation_cmp("P CYG", "AA CYG"), Ordering::Greater);
    }

    #[test]
    fn test_short_and_empty_inputs() {
        assert_eq!(designation_cmp("", ""), Ordering::Equal);
        assert_eq!(designation_cmp("", "R"), Ordering::Greater);
        assert_eq!(designation_cmp("R", "RR"), Ordering::Less);
    }

    #[test]
    fn test_antisymmetry_on_mixed_pairs() {
        let pairs = [
            ("AA CYG", "RR CYG"),
            ("R CYG", "S CYG"),
            ("QZ CYG", "V0334 CYG"),
            ("P CYG", "AA CYG"),
        ];
        for (a, b) in pairs {
            assert_eq!(
                designation_cmp(a, b),
                designation_cmp(b, a).reverse(),
                "asymmetric pair: {a} / {b}"
            );
        }
    }
}
