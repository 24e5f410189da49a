//! Resource name filtering for alarm policies.

use std::collections::BTreeSet;

use super::error::ConfigError;

/// Filter token that selects every table resource.
pub const WILDCARD: &str = "*";

/// Which table resources receive alarms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterSpec {
    /// Every table resource matches.
    MatchAll,
    /// Only resources whose name is in the set match (exact, case-sensitive).
    ExplicitNames(BTreeSet<String>),
}

impl FilterSpec {
    /// Builds a filter from an ordered list of resource names.
    ///
    /// Only the first element is checked for the wildcard: `["*", "Orders"]`
    /// matches everything, while `["Orders", "*"]` matches `Orders` and a
    /// resource literally named `*`.
    pub fn from_names<I, S>(names: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        match names.first() {
            None => Err(ConfigError::EmptyFilter),
            Some(first) if first == WILDCARD => Ok(FilterSpec::MatchAll),
            Some(_) => Ok(FilterSpec::ExplicitNames(names.into_iter().collect())),
        }
    }

    /// Returns true if `name` is selected by this filter.
    pub fn matches(&self, name: &str) -> bool {
        match self {
            FilterSpec::MatchAll => true,
            FilterSpec::ExplicitNames(names) => names.contains(name),
        }
    }
}

/// Returns true if `name` is selected by `spec`.
pub fn matches(name: &str, spec: &FilterSpec) -> bool {
    spec.matches(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_all_accepts_any_name() {
        let spec = FilterSpec::MatchAll;
        assert!(matches("OrdersTable", &spec));
        assert!(matches("", &spec));
        assert!(matches("never-seen-before", &spec));
    }

    #[test]
    fn test_explicit_names_is_exact_membership() {
        let spec = FilterSpec::from_names(["OrdersTable", "UsersTable"]).unwrap();
        assert!(spec.matches("OrdersTable"));
        assert!(spec.matches("UsersTable"));
        assert!(!spec.matches("orderstable"));
        assert!(!spec.matches("Orders"));
        assert!(!spec.matches(""));
    }

    #[test]
    fn test_leading_wildcard_collapses_to_match_all() {
        let spec = FilterSpec::from_names(["*", "OrdersTable"]).unwrap();
        assert_eq!(spec, FilterSpec::MatchAll);
    }

    #[test]
    fn test_trailing_wildcard_is_a_literal_name() {
        let spec = FilterSpec::from_names(["OrdersTable", "*"]).unwrap();
        assert!(spec.matches("OrdersTable"));
        assert!(spec.matches("*"));
        assert!(!spec.matches("UsersTable"));
    }

    #[test]
    fn test_empty_filter_is_rejected() {
        let result = FilterSpec::from_names(Vec::<String>::new());
        assert_eq!(result, Err(ConfigError::EmptyFilter));
    }
}
