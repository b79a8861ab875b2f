use super::control::PaginationControl;
use super::error::ListingError;
use super::page::PageState;
use super::pipeline::{pipeline, Category, FilterState, Listable, SortState};

/// Intents emitted by inputs and pagination controls of a view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewIntent {
    PageChange(i64),
    FilterTypeChange(Category),
    SearchChange(String),
    SortByDate,
}

/// One page of a view, ready to render.
#[derive(Debug, Clone, PartialEq)]
pub struct PageSlice<'a, T> {
    pub items: &'a [T],
    pub current_page: usize,
    pub total_pages: usize,
    /// Number of items left after filtering, across all pages.
    pub total_items: usize,
}

impl<T> PageSlice<'_, T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Pagination control state for this page.
    pub fn control(&self) -> PaginationControl {
        PaginationControl::new(self.current_page, self.total_pages)
    }
}

/// Filter, sort and page state for a single collection view.
///
/// The filtered sequence is recomputed in full whenever the collection,
/// filter or sort changes, and the current page is re-clamped afterwards so
/// the view never points past its last page.
#[derive(Debug, Clone)]
pub struct PaginatedView<T> {
    collection: Vec<T>,
    visible: Vec<T>,
    filter: FilterState,
    sort: SortState,
    page: PageState,
}

impl<T: Listable + Clone> PaginatedView<T> {
    /// Creates an empty view with the given page size.
    pub fn new(page_size: usize) -> Result<Self, ListingError> {
        Ok(Self {
            collection: Vec::new(),
            visible: Vec::new(),
            filter: FilterState::default(),
            sort: SortState::default(),
            page: PageState::new(page_size)?,
        })
    }

    /// Sets the initial collection.
    pub fn with_collection(mut self, items: Vec<T>) -> Self {
        self.replace_collection(items);
        self
    }

    /// Sets the initial filter.
    pub fn with_filter(mut self, filter: FilterState) -> Self {
        self.filter = filter;
        self.recompute();
        self
    }

    /// Sets the initial sort.
    pub fn with_sort(mut self, sort: SortState) -> Self {
        self.sort = sort;
        self.recompute();
        self
    }

    /// Swaps in a freshly fetched collection.
    ///
    /// Filter and sort state are kept; the current page is only clamped, so
    /// a refresh after a mutation leaves the user where they were whenever
    /// that page still exists.
    pub fn replace_collection(&mut self, items: Vec<T>) {
        self.collection = items;
        self.recompute();
    }

    pub fn set_search_term(&mut self, text: impl Into<String>) {
        self.filter.search_term = text.into();
        self.page.reset();
        self.recompute();
    }

    pub fn set_category(&mut self, category: Category) {
        self.filter.category = category;
        self.page.reset();
        self.recompute();
    }

    /// Flips the date sort direction and returns to the first page.
    pub fn toggle_sort(&mut self) {
        self.sort.toggle();
        self.page.reset();
        self.recompute();
    }

    /// Moves to `requested`, clamped to the available pages.
    pub fn go_to_page(&mut self, requested: i64) -> usize {
        self.page.go_to(requested, self.visible.len())
    }

    pub fn next_page(&mut self) -> usize {
        self.go_to_page(self.page.current_page() as i64 + 1)
    }

    pub fn previous_page(&mut self) -> usize {
        self.go_to_page(self.page.current_page() as i64 - 1)
    }

    /// Changes the page size and returns to the first page.
    pub fn set_page_size(&mut self, page_size: usize) -> Result<(), ListingError> {
        self.page.set_page_size(page_size)
    }

    /// Applies an intent emitted by a control or input.
    pub fn dispatch(&mut self, intent: ViewIntent) {
        match intent {
            ViewIntent::PageChange(page) => {
                self.go_to_page(page);
            }
            ViewIntent::FilterTypeChange(category) => self.set_category(category),
            ViewIntent::SearchChange(text) => self.set_search_term(text),
            ViewIntent::SortByDate => self.toggle_sort(),
        }
    }

    /// The items on the current page plus the page position.
    pub fn visible_slice(&self) -> PageSlice<'_, T> {
        let range = self.page.slice_range(self.visible.len());
        PageSlice {
            items: &self.visible[range],
            current_page: self.page.current_page(),
            total_pages: self.total_pages(),
            total_items: self.visible.len(),
        }
    }

    pub fn current_page(&self) -> usize {
        self.page.current_page()
    }

    pub fn total_pages(&self) -> usize {
        self.page.total_pages(self.visible.len())
    }

    pub fn page_size(&self) -> usize {
        self.page.page_size()
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn sort(&self) -> &SortState {
        &self.sort
    }

    /// The unfiltered collection as last supplied.
    pub fn collection(&self) -> &[T] {
        &self.collection
    }

    /// Every item that passes the current filter, in display order.
    pub fn filtered(&self) -> &[T] {
        &self.visible
    }

    fn recompute(&mut self) {
        self.visible = pipeline(&self.collection, &self.filter, &self.sort);
        self.page.clamp_to(self.visible.len());
    }
}
