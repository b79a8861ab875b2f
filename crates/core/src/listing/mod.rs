//! Paginated collection views.
//!
//! A view takes a collection supplied by the caller, runs it through the
//! filter/search/sort pipeline and exposes one page of the result at a time.
//! All state transitions are synchronous and infallible: out-of-range pages
//! are clamped rather than rejected.

mod control;
mod controller;
mod error;
mod page;
mod pipeline;

pub use control::{PageButton, PageEntry, PaginationControl};
pub use controller::{PageSlice, PaginatedView, ViewIntent};
pub use error::ListingError;
pub use page::{clamp, total_pages, PageState, DEFAULT_PAGE_SIZE};
pub use pipeline::{
    check_category, matches_category, matches_search, pipeline, pipeline_by, Category, FilterState, Listable,
    SortDirection, SortState,
};
