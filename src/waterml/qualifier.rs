//! Review-status qualifier resolution
//!
//! A document declares one default qualifier outside the point list; a
//! point without its own qualifier takes the default. Resolved literals
//! pass through a fixed two-entry vocabulary mapping the service's full
//! review-status phrases to their short codes; anything else is kept
//! verbatim.

use crate::constants::qualifiers;

/// Map a qualifier literal through the review-status vocabulary
pub(crate) fn remap_qualifier(raw: &str) -> String {
    match raw.trim() {
        qualifiers::PROVISIONAL_TEXT => qualifiers::PROVISIONAL_CODE.to_string(),
        qualifiers::APPROVED_TEXT => qualifiers::APPROVED_CODE.to_string(),
        other => other.to_string(),
    }
}

/// Resolve a point's qualifier against the document default
pub(crate) fn resolve_qualifier(own: Option<&str>, default: Option<&str>) -> Option<String> {
    own.filter(|q| !q.trim().is_empty())
        .or(default)
        .map(remap_qualifier)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vocabulary_remap() {
        assert_eq!(
            remap_qualifier("Provisional data subject to revision."),
            "P"
        );
        assert_eq!(
            remap_qualifier("Approved for publication. Processing and review completed."),
            "A"
        );
        assert_eq!(remap_qualifier("e"), "e");
    }

    #[test]
    fn test_own_qualifier_wins_over_default() {
        assert_eq!(
            resolve_qualifier(Some("A"), Some("P")),
            Some("A".to_string())
        );
    }

    #[test]
    fn test_default_fills_missing_qualifier() {
        assert_eq!(resolve_qualifier(None, Some("P")), Some("P".to_string()));
        assert_eq!(resolve_qualifier(Some("  "), Some("P")), Some("P".to_string()));
    }

    #[test]
    fn test_no_qualifier_anywhere() {
        assert_eq!(resolve_qualifier(None, None), None);
    }

    #[test]
    fn test_default_phrase_is_remapped_too() {
        assert_eq!(
            resolve_qualifier(None, Some("Provisional data subject to revision.")),
            Some("P".to_string())
        );
    }
}
