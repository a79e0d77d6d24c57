//! Multi-valued attribute matching.
//!
//! Every list endpoint narrows its collection with the same rule: a record's
//! attribute is walked in order, and each element claims the first
//! still-unclaimed requested value it equals. Strings compare
//! case-insensitively; integers compare exactly as base-10 text. The
//! attribute satisfies the request when every requested value has been
//! claimed.
//!
//! Each candidate element counts at most once, so duplicated requested values
//! need as many equal candidate elements to be satisfied:
//!
//! ```
//! use coursebook_core::filter::matches;
//!
//! let required = vec!["GO".to_string(), "rust".to_string()];
//! assert!(matches(&["go", "rust", "go"], &required));
//!
//! let doubled = vec!["go".to_string(), "go".to_string()];
//! assert!(!matches(&["go"], &doubled));
//! ```

/// Value of an integer equality filter meaning "no constraint supplied".
pub const UNCONSTRAINED_ID: i64 = -1;

/// Returns `true` when `candidate` satisfies `required`.
///
/// An empty `required` matches anything.
pub fn matches<S: AsRef<str>>(candidate: &[S], required: &[String]) -> bool {
    let required: Vec<String> = required.iter().map(|r| r.to_lowercase()).collect();
    claims_every_slot(
        candidate.iter().map(|value| value.as_ref().to_lowercase()),
        &required,
    )
}

/// Integer counterpart of [`matches`]. Each integer is rendered base-10 and
/// compared exactly, so `"007"` never matches `7`.
pub fn matches_ints(candidate: &[i64], required: &[String]) -> bool {
    claims_every_slot(candidate.iter().map(|n| n.to_string()), required)
}

/// Walks `candidate` in order; each value claims the first unclaimed equal
/// slot of `required`. True when every slot is claimed.
fn claims_every_slot<I>(candidate: I, required: &[String]) -> bool
where
    I: IntoIterator<Item = String>,
{
    if required.is_empty() {
        return true;
    }

    let mut claimed = vec![false; required.len()];
    let mut matched = 0;

    for value in candidate {
        let slot = (0..required.len()).find(|&i| !claimed[i] && required[i] == value);
        if let Some(slot) = slot {
            claimed[slot] = true;
            matched += 1;
        }
    }

    matched == required.len()
}

/// Exact integer equality unless the filter holds [`UNCONSTRAINED_ID`].
pub fn id_matches(filter: i64, value: i64) -> bool {
    filter == UNCONSTRAINED_ID || filter == value
}

/// Requested values for one multi-valued attribute.
///
/// Built once per request from query parameters and never mutated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria(Vec<String>);

impl FilterCriteria {
    pub fn new(values: Vec<String>) -> Self {
        Self(values)
    }

    pub fn is_unconstrained(&self) -> bool {
        self.0.is_empty()
    }

    pub fn matches<S: AsRef<str>>(&self, candidate: &[S]) -> bool {
        self.is_unconstrained() || matches(candidate, &self.0)
    }

    pub fn matches_ints(&self, candidate: &[i64]) -> bool {
        self.is_unconstrained() || matches_ints(candidate, &self.0)
    }
}

impl From<Vec<String>> for FilterCriteria {
    fn from(values: Vec<String>) -> Self {
        Self::new(values)
    }
}

/// A record addressable by integer identifier.
pub trait Record {
    fn id(&self) -> i64;
}

/// First record, in collection order, whose identifier equals `id`.
pub fn find_by_id<T: Record>(records: &[T], id: i64) -> Option<&T> {
    records.iter().find(|record| record.id() == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_empty_required_matches_anything() {
        assert!(matches::<&str>(&[], &[]));
        assert!(matches(&["go", "rust"], &[]));
        assert!(matches_ints(&[1, 2, 3], &[]));
    }

    #[test]
    fn test_case_insensitive_match() {
        let required = strings(&["GO", "rust"]);
        assert!(matches(&["go", "rust", "go"], &required));
        assert!(matches(&["Rust", "Go"], &required));
    }

    #[test]
    fn test_missing_value_fails() {
        let required = strings(&["go", "haskell"]);
        assert!(!matches(&["go", "rust"], &required));
    }

    #[test]
    fn test_duplicate_required_undercounts() {
        let required = strings(&["go", "go"]);
        assert!(!matches(&["go"], &required));
    }

    #[test]
    fn test_duplicate_required_satisfied_by_duplicate_candidates() {
        let required = strings(&["go", "go"]);
        assert!(matches(&["go", "go"], &required));
    }

    #[test]
    fn test_repeated_candidate_claims_one_slot() {
        assert!(matches(&["go", "rust", "go"], &strings(&["go"])));
        assert!(!matches(&["go", "go"], &strings(&["go", "rust"])));
    }

    #[test]
    fn test_candidate_order_does_not_change_result() {
        let required = strings(&["rust", "go"]);
        assert_eq!(
            matches(&["go", "rust"], &required),
            matches(&["rust", "go"], &required)
        );
    }

    #[test]
    fn test_int_candidates_compare_as_strings() {
        assert!(matches_ints(&[7, 12], &strings(&["7", "12"])));
        assert!(!matches_ints(&[7], &strings(&["007"])));
        assert!(!matches_ints(&[], &strings(&["1"])));
        assert!(!matches_ints(&[-3], &strings(&["+3"])));
        assert!(matches_ints(&[4, 4], &strings(&["4", "4"])));
        assert!(!matches_ints(&[4], &strings(&["4", "4"])));
    }

    #[test]
    fn test_id_matches_sentinel() {
        assert!(id_matches(UNCONSTRAINED_ID, 42));
        assert!(id_matches(42, 42));
        assert!(!id_matches(41, 42));
    }

    #[test]
    fn test_filter_criteria() {
        let criteria = FilterCriteria::from(strings(&["python"]));
        assert!(!criteria.is_unconstrained());
        assert!(criteria.matches(&["Python", "ml"]));
        assert!(FilterCriteria::default().is_unconstrained());
        assert!(FilterCriteria::default().matches(&["anything"]));
    }

    struct Item(i64, &'static str);

    impl Record for Item {
        fn id(&self) -> i64 {
            self.0
        }
    }

    #[test]
    fn test_find_by_id_returns_first_match() {
        let items = vec![Item(1, "a"), Item(2, "b"), Item(2, "c")];
        assert_eq!(find_by_id(&items, 2).map(|item| item.1), Some("b"));
        assert!(find_by_id(&items, 9999).is_none());
    }
}
