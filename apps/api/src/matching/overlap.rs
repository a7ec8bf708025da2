//! Case-insensitive string helpers shared by both scorers.

use std::collections::HashSet;

/// Returns the entries of `ours` that case-insensitively equal some entry of `theirs`,
/// in `ours` order and with `ours` casing.
///
/// Case-variant repeats in `ours` count once (first spelling wins), so the result
/// never holds more entries than `theirs` has distinct skills.
pub fn matched_skills(ours: &[String], theirs: &[String]) -> Vec<String> {
    let theirs_lower: HashSet<String> = theirs.iter().map(|s| s.to_lowercase()).collect();
    let mut seen = HashSet::new();
    ours.iter()
        .filter(|skill| {
            let lower = skill.to_lowercase();
            theirs_lower.contains(&lower) && seen.insert(lower)
        })
        .cloned()
        .collect()
}

/// True when any entry of `values` equals `target`, ignoring case.
pub fn any_eq_ignore_case(values: &[String], target: &str) -> bool {
    let target = target.to_lowercase();
    values.iter().any(|v| v.to_lowercase() == target)
}

/// Substring containment on an already-lowercased needle.
pub fn contains_lowercase(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

/// `None` and `Some(empty)` both mean "no preference".
pub fn preference(values: &Option<Vec<String>>) -> Option<&[String]> {
    values.as_deref().filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_matched_skills_keeps_candidate_casing_and_order() {
        let ours = strings(&["TypeScript", "React", "Go"]);
        let theirs = strings(&["react", "typescript"]);
        assert_eq!(matched_skills(&ours, &theirs), strings(&["TypeScript", "React"]));
    }

    #[test]
    fn test_matched_skills_collapses_case_variant_repeats() {
        let ours = strings(&["React", "react", "REACT", "Go"]);
        let theirs = strings(&["react"]);
        assert_eq!(matched_skills(&ours, &theirs), strings(&["React"]));
    }

    #[test]
    fn test_matched_skills_empty_sides() {
        assert!(matched_skills(&[], &strings(&["Rust"])).is_empty());
        assert!(matched_skills(&strings(&["Rust"]), &[]).is_empty());
    }

    #[test]
    fn test_any_eq_ignore_case() {
        let values = strings(&["Berlin", "Munich"]);
        assert!(any_eq_ignore_case(&values, "berlin"));
        assert!(!any_eq_ignore_case(&values, "Hamburg"));
        // equality, not containment
        assert!(!any_eq_ignore_case(&values, "Berl"));
    }

    #[test]
    fn test_contains_lowercase() {
        assert!(contains_lowercase("Senior React Developer", "react"));
        assert!(!contains_lowercase("Senior React Developer", "vue"));
    }

    #[test]
    fn test_preference_treats_empty_as_absent() {
        assert!(preference(&None).is_none());
        assert!(preference(&Some(vec![])).is_none());
        assert_eq!(preference(&Some(strings(&["remote"]))).map(|p| p.len()), Some(1));
    }
}
