//! Read-only filtered and sorted projections over registry contents.
//!
//! Views borrow records and never copy or mutate them. Statistics used for
//! ordering are computed at sort time, so a view always reflects current grades.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::model::{SortKey, StudentRecord};

/// Keep records whose name contains `term`, ignoring case.
///
/// An empty (or whitespace-only) term keeps everything, in input order.
pub fn filter_by_name<'a>(records: &[&'a StudentRecord], term: &str) -> Vec<&'a StudentRecord> {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return records.to_vec();
    }
    records
        .iter()
        .copied()
        .filter(|r| r.name().to_lowercase().contains(&term))
        .collect()
}

/// Stable sort by `key`: records that compare equal keep their input order.
pub fn sort_by<'a>(records: &[&'a StudentRecord], key: SortKey) -> Vec<&'a StudentRecord> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| compare(a, b, key));
    sorted
}

/// The ordering `key` imposes on two records.
pub fn compare(a: &StudentRecord, b: &StudentRecord, key: SortKey) -> Ordering {
    match key {
        SortKey::NameAsc => a.name().to_lowercase().cmp(&b.name().to_lowercase()),
        SortKey::AverageDesc => b.grades().average().total_cmp(&a.grades().average()),
        SortKey::AverageAsc => a.grades().average().total_cmp(&b.grades().average()),
        SortKey::HighestDesc => b.grades().highest().cmp(&a.grades().highest()),
        SortKey::LowestAsc => a.grades().lowest().cmp(&b.grades().lowest()),
    }
}

/// A presentation layer's search box and sort selection, applied together.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct View {
    /// Case-insensitive name filter; empty means no filter.
    #[serde(default)]
    pub search: String,
    /// Ordering to apply after filtering; `None` keeps registry order.
    #[serde(default)]
    pub sort: Option<SortKey>,
}

impl View {
    pub fn new(search: impl Into<String>, sort: Option<SortKey>) -> Self {
        Self {
            search: search.into(),
            sort,
        }
    }

    /// Filter, then sort, the given records.
    pub fn apply<'a>(&self, records: &'a [StudentRecord]) -> Vec<&'a StudentRecord> {
        let all: Vec<&StudentRecord> = records.iter().collect();
        let filtered = filter_by_name(&all, &self.search);
        match self.sort {
            Some(key) => sort_by(&filtered, key),
            None => filtered,
        }
    }

    /// Short description for status lines, e.g. `search "ali", sorted by Name (A-Z)`.
    pub fn describe(&self) -> String {
        let search = self.search.trim();
        match (search.is_empty(), self.sort) {
            (true, None) => "all students".to_string(),
            (false, None) => format!("search \"{search}\""),
            (true, Some(key)) => format!("sorted by {}", key.label()),
            (false, Some(key)) => format!("search \"{search}\", sorted by {}", key.label()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::demo_roster;
    use crate::registry::Registry;

    fn names(records: &[&StudentRecord]) -> Vec<String> {
        records.iter().map(|r| r.name().to_string()).collect()
    }

    fn demo() -> Registry {
        let mut reg = Registry::new();
        reg.import(&demo_roster()).unwrap();
        reg
    }

    #[test]
    fn filter_is_case_insensitive_substring() {
        let mut reg = Registry::new();
        reg.add("Alice", "90").unwrap();
        reg.add("Bob", "80").unwrap();
        let all: Vec<_> = reg.all().iter().collect();

        assert_eq!(names(&filter_by_name(&all, "ALI")), vec!["Alice"]);
        assert_eq!(names(&filter_by_name(&all, "o")), vec!["Bob"]);
        assert!(filter_by_name(&all, "zed").is_empty());
    }

    #[test]
    fn empty_term_keeps_everything() {
        let reg = demo();
        let all: Vec<_> = reg.all().iter().collect();
        assert_eq!(names(&filter_by_name(&all, "")), names(&all));
        assert_eq!(names(&filter_by_name(&all, "   ")), names(&all));
    }

    #[test]
    fn sort_by_each_key() {
        let reg = demo();
        let all: Vec<_> = reg.all().iter().collect();

        assert_eq!(
            names(&sort_by(&all, SortKey::AverageDesc)),
            vec!["Charlie", "Alice", "Bob", "Dana"]
        );
        assert_eq!(
            names(&sort_by(&all, SortKey::AverageAsc)),
            vec!["Dana", "Bob", "Alice", "Charlie"]
        );
        assert_eq!(
            names(&sort_by(&all, SortKey::HighestDesc)),
            vec!["Charlie", "Alice", "Bob", "Dana"]
        );
        assert_eq!(
            names(&sort_by(&all, SortKey::LowestAsc)),
            vec!["Dana", "Bob", "Alice", "Charlie"]
        );
    }

    #[test]
    fn name_sort_ignores_case_and_is_idempotent() {
        let mut reg = Registry::new();
        for name in ["delta", "Bravo", "alpha", "Charlie"] {
            reg.add(name, "1").unwrap();
        }
        let all: Vec<_> = reg.all().iter().collect();
        let once = sort_by(&all, SortKey::NameAsc);
        assert_eq!(names(&once), vec!["alpha", "Bravo", "Charlie", "delta"]);
        let twice = sort_by(&once, SortKey::NameAsc);
        assert_eq!(names(&once), names(&twice));
    }

    #[test]
    fn equal_averages_keep_input_order() {
        let mut reg = Registry::new();
        reg.add("First", "80, 90").unwrap();
        reg.add("Top", "100").unwrap();
        reg.add("Second", "85").unwrap();
        reg.add("Third", "90, 80").unwrap();
        let all: Vec<_> = reg.all().iter().collect();

        assert_eq!(
            names(&sort_by(&all, SortKey::AverageDesc)),
            vec!["Top", "First", "Second", "Third"]
        );
    }

    #[test]
    fn sort_sees_updated_grades() {
        let mut reg = demo();
        let dana = reg.all()[3].id();
        reg.update(dana, "Dana", "100, 100").unwrap();
        let all: Vec<_> = reg.all().iter().collect();
        assert_eq!(names(&sort_by(&all, SortKey::AverageDesc))[0], "Dana");
    }

    #[test]
    fn views_do_not_touch_the_registry() {
        let reg = demo();
        let before = reg.all().to_vec();
        let _ = View::new("a", Some(SortKey::NameAsc)).apply(reg.all());
        assert_eq!(reg.all(), before.as_slice());
    }

    #[test]
    fn view_filters_then_sorts() {
        let reg = demo();
        let view = View::new("a", Some(SortKey::AverageAsc));
        // Alice, Charlie, Dana contain an "a"; Bob does not.
        assert_eq!(names(&view.apply(reg.all())), vec!["Dana", "Alice", "Charlie"]);
        assert_eq!(names(&View::default().apply(reg.all())).len(), 4);
    }

    #[test]
    fn describe_view() {
        assert_eq!(View::default().describe(), "all students");
        assert_eq!(
            View::new("ali", Some(SortKey::NameAsc)).describe(),
            "search \"ali\", sorted by Name (A-Z)"
        );
    }
}
