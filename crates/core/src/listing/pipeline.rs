use std::cmp::Ordering;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::error::ListingError;

/// Categorical filter applied before text search.
///
/// `Custom` values are stored lowercased so that "Pending" and "pending"
/// select the same items.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    #[default]
    All,
    Public,
    Private,
    Custom(String),
}

impl Category {
    /// Creates a custom category, normalizing its case.
    pub fn custom(value: impl AsRef<str>) -> Self {
        Self::Custom(value.as_ref().trim().to_lowercase())
    }

    /// Returns true for the category that retains every item.
    pub fn is_all(&self) -> bool {
        matches!(self, Category::All)
    }
}

impl FromStr for Category {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Ok(match normalized.as_str() {
            "" | "all" => Category::All,
            "public" => Category::Public,
            "private" => Category::Private,
            _ => Category::Custom(normalized),
        })
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::All => write!(f, "All"),
            Category::Public => write!(f, "Public"),
            Category::Private => write!(f, "Private"),
            Category::Custom(value) => write!(f, "{}", value),
        }
    }
}

/// The contract a record type fulfils to be shown in a paginated view.
pub trait Listable {
    /// Whether [`Listable::category`] distinguishes items. Record types that
    /// leave it unset only ever match [`Category::All`].
    const CATEGORIZED: bool = true;

    /// Field matched by the free-text search (name, email, title).
    fn search_field(&self) -> &str;

    /// Discriminant compared against the category filter.
    fn category(&self) -> Category {
        Category::All
    }

    /// Date-like field the view sorts on. Items without one sort as latest.
    fn sort_date(&self) -> Option<DateTime<Utc>> {
        None
    }
}

/// Free-text search and category predicate for one view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub search_term: String,
    pub category: Category,
}

impl FilterState {
    pub fn new(search_term: impl Into<String>, category: Category) -> Self {
        Self {
            search_term: search_term.into(),
            category,
        }
    }

    /// Lowercased, trimmed search needle. Empty means "match everything".
    pub fn search_needle(&self) -> String {
        self.search_term.trim().to_lowercase()
    }

    /// Returns true if `item` passes both the category and search filters.
    pub fn matches<T: Listable>(&self, item: &T) -> bool {
        matches_category(item, &self.category) && matches_search(item, &self.search_needle())
    }
}

/// Returns true if `item` belongs to `category` (always true for `All`).
pub fn matches_category<T: Listable>(item: &T, category: &Category) -> bool {
    category.is_all() || item.category() == *category
}

/// Rejects a category filter on a record type without categories, where it
/// would otherwise hide every item.
pub fn check_category<T: Listable>(category: &Category) -> Result<(), ListingError> {
    if T::CATEGORIZED || category.is_all() {
        Ok(())
    } else {
        Err(ListingError::UncategorizedList(category.to_string()))
    }
}

/// Case-insensitive substring match. `needle` must already be lowercased.
pub fn matches_search<T: Listable>(item: &T, needle: &str) -> bool {
    needle.is_empty() || item.search_field().to_lowercase().contains(needle)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn reverse(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// Sort state for the designated date field.
///
/// `direction == None` keeps the source order; the first toggle sorts
/// ascending and later toggles flip the direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortState {
    pub direction: Option<SortDirection>,
}

impl SortState {
    pub fn unsorted() -> Self {
        Self { direction: None }
    }

    pub fn ascending() -> Self {
        Self {
            direction: Some(SortDirection::Ascending),
        }
    }

    pub fn descending() -> Self {
        Self {
            direction: Some(SortDirection::Descending),
        }
    }

    /// Unsorted -> ascending -> descending -> ascending ...
    pub fn toggle(&mut self) {
        self.direction = Some(match self.direction {
            None => SortDirection::Ascending,
            Some(direction) => direction.reverse(),
        });
    }

    pub fn is_active(&self) -> bool {
        self.direction.is_some()
    }

    /// Compares two items by their sort date in the current direction.
    /// Returns `Equal` when unsorted so a stable sort keeps source order.
    pub fn compare<T: Listable>(&self, a: &T, b: &T) -> Ordering {
        let Some(direction) = self.direction else {
            return Ordering::Equal;
        };
        // `None` sorts after every date when ascending.
        let key = |item: &T| {
            let date = item.sort_date();
            (date.is_none(), date)
        };
        match direction {
            SortDirection::Ascending => key(a).cmp(&key(b)),
            SortDirection::Descending => key(b).cmp(&key(a)),
        }
    }
}

/// Filters, searches and sorts a collection into display order.
///
/// Always recomputed from the full collection; equal sort keys keep their
/// original relative order.
pub fn pipeline<T>(collection: &[T], filter: &FilterState, sort: &SortState) -> Vec<T>
where
    T: Listable + Clone,
{
    let needle = filter.search_needle();
    pipeline_by(
        collection,
        |item| matches_category(item, &filter.category) && matches_search(item, &needle),
        |a, b| sort.compare(a, b),
    )
}

/// Generic form of [`pipeline`] with a caller-supplied predicate and comparator.
pub fn pipeline_by<T, P, C>(collection: &[T], predicate: P, comparator: C) -> Vec<T>
where
    T: Clone,
    P: Fn(&T) -> bool,
    C: Fn(&T, &T) -> Ordering,
{
    let mut result: Vec<T> = collection
        .iter()
        .filter(|item| predicate(*item))
        .cloned()
        .collect();
    // `sort_by` is stable.
    result.sort_by(comparator);
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        name: &'static str,
        category: Category,
        date: Option<DateTime<Utc>>,
    }

    impl Listable for Row {
        fn search_field(&self) -> &str {
            self.name
        }

        fn category(&self) -> Category {
            self.category.clone()
        }

        fn sort_date(&self) -> Option<DateTime<Utc>> {
            self.date
        }
    }

    struct Note(&'static str);

    impl Listable for Note {
        const CATEGORIZED: bool = false;

        fn search_field(&self) -> &str {
            self.0
        }
    }

    #[test]
    fn test_check_category_on_uncategorized_list() {
        assert!(check_category::<Note>(&Category::All).is_ok());
        assert_eq!(
            check_category::<Note>(&Category::Public),
            Err(ListingError::UncategorizedList("Public".to_string()))
        );
        assert!(check_category::<Row>(&Category::custom("pending")).is_ok());
    }

    fn day(d: u32) -> Option<DateTime<Utc>> {
        Some(Utc.with_ymd_and_hms(2024, 3, d, 12, 0, 0).unwrap())
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { name: "Board Game Night", category: Category::Public, date: day(12) },
            Row { name: "Team Offsite", category: Category::Private, date: day(3) },
            Row { name: "Book Club", category: Category::Public, date: day(12) },
            Row { name: "Hackathon", category: Category::Public, date: None },
            Row { name: "Birthday", category: Category::Private, date: day(20) },
        ]
    }

    fn names(rows: &[Row]) -> Vec<&'static str> {
        rows.iter().map(|r| r.name).collect()
    }

    #[test]
    fn test_category_all_keeps_order() {
        let source = rows();
        let result = pipeline(&source, &FilterState::default(), &SortState::unsorted());

        assert_eq!(result, source);
    }

    #[test]
    fn test_category_filter() {
        let filter = FilterState::new("", Category::Private);
        let result = pipeline(&rows(), &filter, &SortState::unsorted());

        assert_eq!(names(&result), vec!["Team Offsite", "Birthday"]);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let filter = FilterState::new("  bOoK ", Category::All);
        let result = pipeline(&rows(), &filter, &SortState::unsorted());

        assert_eq!(names(&result), vec!["Book Club"]);
    }

    #[test]
    fn test_search_combined_with_category() {
        let filter = FilterState::new("b", Category::Public);
        let result = pipeline(&rows(), &filter, &SortState::unsorted());

        assert_eq!(names(&result), vec!["Board Game Night", "Book Club"]);
    }

    #[test]
    fn test_search_is_idempotent() {
        let filter = FilterState::new("o", Category::All);
        let sort = SortState::ascending();

        let once = pipeline(&rows(), &filter, &sort);
        let twice = pipeline(&once, &filter, &sort);

        assert_eq!(once, twice);
    }

    #[test]
    fn test_sort_ascending_is_stable() {
        let result = pipeline(&rows(), &FilterState::default(), &SortState::ascending());

        assert_eq!(
            names(&result),
            vec!["Team Offsite", "Board Game Night", "Book Club", "Birthday", "Hackathon"]
        );
    }

    #[test]
    fn test_sort_descending_keeps_ties_in_source_order() {
        let result = pipeline(&rows(), &FilterState::default(), &SortState::descending());

        assert_eq!(
            names(&result),
            vec!["Hackathon", "Birthday", "Board Game Night", "Book Club", "Team Offsite"]
        );
    }

    #[test]
    fn test_toggle_round_trip_restores_order() {
        let mut sort = SortState::unsorted();
        sort.toggle();
        let first = pipeline(&rows(), &FilterState::default(), &sort);

        sort.toggle();
        assert_eq!(sort.direction, Some(SortDirection::Descending));
        sort.toggle();
        let third = pipeline(&rows(), &FilterState::default(), &sort);

        assert_eq!(first, third);
    }

    #[test]
    fn test_category_parse() {
        assert_eq!("All".parse::<Category>().unwrap(), Category::All);
        assert_eq!("".parse::<Category>().unwrap(), Category::All);
        assert_eq!("PUBLIC".parse::<Category>().unwrap(), Category::Public);
        assert_eq!(" private ".parse::<Category>().unwrap(), Category::Private);
        assert_eq!(
            "Pending".parse::<Category>().unwrap(),
            Category::custom("pending")
        );
    }

    #[test]
    fn test_pipeline_by_custom_predicate() {
        let result = pipeline_by(
            &rows(),
            |row| row.date.is_some(),
            |a, b| a.name.cmp(b.name),
        );

        assert_eq!(
            names(&result),
            vec!["Birthday", "Board Game Night", "Book Club", "Team Offsite"]
        );
    }
}
