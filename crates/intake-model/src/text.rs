//! Text normalization helpers shared across the model and the resolver.

/// Case/whitespace-insensitive identity key for names
///
/// Lowercases and collapses internal whitespace runs, so `" State  Farm "`
/// and `"state farm"` produce the same key.
#[must_use]
pub fn name_key(raw: &str) -> String {
    raw.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Whether a field is blank (empty or whitespace only)
#[inline]
#[must_use]
pub fn is_blank(raw: &str) -> bool {
    raw.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_key_collapses_case_and_whitespace() {
        assert_eq!(name_key("  State   Farm "), "state farm");
        assert_eq!(name_key("STATE FARM"), "state farm");
    }

    #[test]
    fn name_key_empty_is_empty() {
        assert_eq!(name_key("   "), "");
    }

    #[test]
    fn blank_detection() {
        assert!(is_blank(""));
        assert!(is_blank("  \t"));
        assert!(!is_blank(" x "));
    }
}
