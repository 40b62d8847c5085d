//! Activity codes carried by grid cells.
//!
//! Codes are opaque labels. Only the study markers, the rest marker and the two
//! placeholders produced by the rescaler have meaning to the core.

/// Short study marker.
pub const STUDY: &str = "S";
/// Long-form study marker ("Studio").
pub const STUDY_LONG: &str = "Studio";
/// Rest slot. Fills every column whose weekday is excluded by the filter.
pub const REST: &str = "R";
/// Placeholder for "no source data yet". Distinct from rest.
pub const BLANK: &str = " ";
/// Placeholder for a grid that could not be rescaled.
pub const ERROR: &str = "ERR";

/// True for either study marker.
pub fn is_study(code: &str) -> bool {
    code == STUDY || code == STUDY_LONG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_study_markers_count() {
        assert!(is_study("S"));
        assert!(is_study("Studio"));
    }

    #[test]
    fn test_other_codes_are_not_study() {
        for code in ["R", "P", "E", " ", "ERR", "", "s", "studio"] {
            assert!(!is_study(code), "{code:?} must not count as study");
        }
    }

    #[test]
    fn test_placeholders_are_distinct() {
        assert_ne!(BLANK, REST);
        assert_ne!(ERROR, REST);
        assert_ne!(ERROR, BLANK);
    }
}
