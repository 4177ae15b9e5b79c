//! Boundary-anchored matching of signature patterns
//!
//! A pattern matches a joined signature only when it occupies whole
//! `+`-separated elements: it starts at the beginning of the signature or
//! right after a `+`, and ends at the end of the signature or right before a
//! `+`. This keeps `VV` from matching inside `VVX/VV`.

use crate::token::MORPHEME_SEPARATOR;

/// Whether `pattern` occurs in `signature` on `+` boundaries
pub fn matches(pattern: &str, signature: &str) -> bool {
    if pattern.is_empty() {
        return false;
    }

    // occurrences may overlap, so advance one char at a time
    let mut from = 0;
    while let Some(offset) = signature[from..].find(pattern) {
        let start = from + offset;
        let end = start + pattern.len();
        let starts_on_boundary =
            start == 0 || signature[..start].ends_with(MORPHEME_SEPARATOR);
        let ends_on_boundary =
            end == signature.len() || signature[end..].starts_with(MORPHEME_SEPARATOR);
        if starts_on_boundary && ends_on_boundary {
            return true;
        }
        from = start + signature[start..].chars().next().map_or(1, char::len_utf8);
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_whole_signature() {
        assert!(matches("하/VV+ㅂ니다/EF", "하/VV+ㅂ니다/EF"));
    }

    #[test]
    fn test_prefix_suffix_and_middle() {
        let signature = "먹/VV+었/EP+어/EF+./SF";
        assert!(matches("먹/VV", signature));
        assert!(matches("./SF", signature));
        assert!(matches("었/EP+어/EF", signature));
    }

    #[test]
    fn test_rejects_partial_elements() {
        assert!(!matches("VV", "VVX/VV+EF/EF"));
        assert!(matches("VVX/VV", "VVX/VV+EF/EF"));
        assert!(matches("VV/VV", "VV/VV+EF/EF"));
        assert!(!matches("어/EF", "먹/VV+어요/EF"));
        assert!(!matches("니다/EF", "하/VV+ㅂ니다/EF"));
    }

    #[test]
    fn test_later_occurrence_can_match() {
        // the first occurrence is unanchored, the second one is
        assert!(matches("a/X", "ba/X+a/X"));
    }

    #[test]
    fn test_overlapping_occurrences() {
        assert!(matches("a/X+a/X", "ba/X+a/X+a/X"));
    }

    #[test]
    fn test_case_sensitive() {
        assert!(!matches("ef/ef", "EF/EF"));
    }

    #[test]
    fn test_empty_pattern() {
        assert!(!matches("", "하/VV"));
    }

    proptest! {
        #[test]
        fn prop_every_element_matches(
            elements in prop::collection::vec("[가-힣]{1,3}/[A-Z]{2,3}", 1..6)
        ) {
            let signature = elements.join("+");
            for element in &elements {
                prop_assert!(matches(element, &signature));
            }
        }

        #[test]
        fn prop_bare_tag_never_matches(
            elements in prop::collection::vec("[가-힣]{1,3}/[A-Z]{2,3}", 1..6)
        ) {
            let signature = elements.join("+");
            for element in &elements {
                let (_, tag) = element.split_once('/').unwrap();
                prop_assert!(!matches(tag, &signature));
            }
        }
    }
}
