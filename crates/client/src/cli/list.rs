//! Listing flags shared by every `list` subcommand.

use clap::{Args, ValueEnum};
use eventhub_core::listing::{
    check_category, Category, FilterState, Listable, ListingError, PaginatedView, SortState,
    ViewIntent,
};

/// Sort direction for the date column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortArg {
    Asc,
    Desc,
}

/// Search, filter, sort and page options for a list.
#[derive(Debug, Clone, Args)]
pub struct ListArgs {
    /// Case-insensitive text search.
    #[arg(long, short)]
    pub search: Option<String>,

    /// Category filter: all, public, private, or a status such as pending.
    /// Members, forum posts and reminders only accept all.
    #[arg(long, default_value = "all")]
    pub category: Category,

    /// Sort by date.
    #[arg(long, value_enum)]
    pub sort: Option<SortArg>,

    /// Page to show; out-of-range values are clamped.
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    pub page: i64,

    /// Items per page.
    #[arg(long, env = "EVENTHUB_PAGE_SIZE")]
    pub page_size: Option<usize>,
}

impl Default for ListArgs {
    fn default() -> Self {
        Self {
            search: None,
            category: Category::All,
            sort: None,
            page: 1,
            page_size: None,
        }
    }
}

impl ListArgs {
    /// Search and category filter selected by the flags.
    pub fn filter(&self) -> FilterState {
        FilterState::new(self.search.clone().unwrap_or_default(), self.category.clone())
    }

    /// Date sort selected by the flags.
    pub fn sort(&self) -> SortState {
        match self.sort {
            Some(SortArg::Asc) => SortState::ascending(),
            Some(SortArg::Desc) => SortState::descending(),
            None => SortState::unsorted(),
        }
    }

    /// An empty view configured with these options.
    ///
    /// Fails for a zero page size, or for a category filter on a list whose
    /// records carry no category.
    pub fn view<T: Listable + Clone>(
        &self,
        default_page_size: usize,
    ) -> Result<PaginatedView<T>, ListingError> {
        check_category::<T>(&self.category)?;
        Ok(PaginatedView::new(self.page_size.unwrap_or(default_page_size))?
            .with_filter(self.filter())
            .with_sort(self.sort()))
    }

    /// Moves a loaded view to the requested page.
    pub fn apply<T: Listable + Clone>(&self, view: &mut PaginatedView<T>) {
        view.dispatch(ViewIntent::PageChange(self.page));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eventhub_core::models::Member;

    #[derive(Debug, Clone)]
    struct Row(&'static str);

    impl Listable for Row {
        fn search_field(&self) -> &str {
            self.0
        }
    }

    #[test]
    fn test_default_args_select_everything() {
        let args = ListArgs::default();

        assert_eq!(args.filter(), FilterState::default());
        assert_eq!(args.sort(), SortState::unsorted());
    }

    #[test]
    fn test_view_carries_filter_and_sort() {
        let args = ListArgs {
            search: Some("gala".to_string()),
            category: Category::Private,
            sort: Some(SortArg::Desc),
            ..Default::default()
        };

        let view = args.view::<Row>(10).unwrap();

        assert_eq!(view.filter().search_term, "gala");
        assert_eq!(view.filter().category, Category::Private);
        assert_eq!(*view.sort(), SortState::descending());
        assert_eq!(view.page_size(), 10);
    }

    #[test]
    fn test_category_rejected_for_members() {
        let args = ListArgs {
            category: Category::Public,
            ..Default::default()
        };

        assert_eq!(
            args.view::<Member>(10).unwrap_err(),
            ListingError::UncategorizedList("Public".to_string())
        );
        assert!(ListArgs::default().view::<Member>(10).is_ok());
    }

    #[test]
    fn test_apply_lands_on_clamped_page() {
        let args = ListArgs {
            search: Some("a".to_string()),
            page: 9,
            page_size: Some(2),
            ..Default::default()
        };
        let mut view = args
            .view(10)
            .unwrap()
            .with_collection(vec![Row("alpha"), Row("beta"), Row("gamma"), Row("pi")]);

        args.apply(&mut view);

        assert_eq!(view.current_page(), 2);
        assert_eq!(view.visible_slice().total_items, 3);
    }

    #[test]
    fn test_zero_page_size_is_rejected() {
        let args = ListArgs {
            page_size: Some(0),
            ..Default::default()
        };

        assert!(args.view::<Row>(10).is_err());
    }
}
