//! Shared utility functions used across multiple modules.

/// Normalize a tag name by trimming whitespace.
///
/// Returns `None` when nothing is left after trimming.
pub fn normalize_tag(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Push `value` unless an equal element is already present.
///
/// Returns `true` when the value was inserted.
pub fn push_unique(values: &mut Vec<String>, value: String) -> bool {
    if values.contains(&value) {
        false
    } else {
        values.push(value);
        true
    }
}

/// Case-insensitive substring check.
pub fn contains_ignore_case(haystack: &str, lowercase_needle: &str) -> bool {
    haystack.to_lowercase().contains(lowercase_needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_tag_rejects_blank() {
        assert_eq!(normalize_tag(""), None);
        assert_eq!(normalize_tag("   "), None);
    }

    #[test]
    fn normalize_tag_trims_but_keeps_case() {
        assert_eq!(normalize_tag("  Coding "), Some("Coding".to_string()));
    }

    #[test]
    fn push_unique_skips_duplicates() {
        let mut values = vec!["Coding".to_string()];
        assert!(!push_unique(&mut values, "Coding".to_string()));
        assert!(push_unique(&mut values, "Quotes".to_string()));
        assert_eq!(values, vec!["Coding", "Quotes"]);
    }

    #[test]
    fn contains_ignore_case_matches_mixed_case() {
        assert!(contains_ignore_case("Weekly RUST sync", "rust"));
        assert!(!contains_ignore_case("Weekly sync", "rust"));
    }
}
