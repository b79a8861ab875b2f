use std::ops::Range;

use super::error::ListingError;

/// Page size used when a view does not ask for a specific one.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Constrains a requested 1-based page number to `[1, max(1, total_pages)]`.
///
/// The request is signed so that "page 0" or negative offsets coming from
/// user input are representable; they clamp to the first page.
pub fn clamp(requested: i64, total_pages: usize) -> usize {
    let last = total_pages.max(1);
    if requested < 1 {
        return 1;
    }
    usize::try_from(requested).map_or(last, |page| page.min(last))
}

/// Number of pages needed to show `count` items, never less than 1.
///
/// An empty collection still has one (empty) page so a view never shows
/// "page 0 of 0".
pub fn total_pages(count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    count.div_ceil(page_size).max(1)
}

/// Current page and page size for a single view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    current_page: usize,
    page_size: usize,
}

impl PageState {
    /// Creates page state positioned on the first page.
    pub fn new(page_size: usize) -> Result<Self, ListingError> {
        if page_size == 0 {
            return Err(ListingError::ZeroPageSize);
        }
        Ok(Self {
            current_page: 1,
            page_size,
        })
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Total pages for a collection of `count` items at this page size.
    pub fn total_pages(&self, count: usize) -> usize {
        total_pages(count, self.page_size)
    }

    /// Moves to `requested`, clamped against a collection of `count` items.
    /// Returns the page actually selected.
    pub fn go_to(&mut self, requested: i64, count: usize) -> usize {
        self.current_page = clamp(requested, self.total_pages(count));
        self.current_page
    }

    /// Returns to the first page.
    pub fn reset(&mut self) {
        self.current_page = 1;
    }

    /// Re-clamps the current page after the collection size changed.
    /// Returns true if the current page had to move.
    pub fn clamp_to(&mut self, count: usize) -> bool {
        let clamped = clamp(self.current_page as i64, self.total_pages(count));
        let moved = clamped != self.current_page;
        self.current_page = clamped;
        moved
    }

    /// Changes the page size and returns to the first page.
    pub fn set_page_size(&mut self, page_size: usize) -> Result<(), ListingError> {
        if page_size == 0 {
            return Err(ListingError::ZeroPageSize);
        }
        self.page_size = page_size;
        self.reset();
        Ok(())
    }

    /// Half-open index range of the current page within `count` items.
    pub fn slice_range(&self, count: usize) -> Range<usize> {
        let start = (self.current_page - 1)
            .saturating_mul(self.page_size)
            .min(count);
        let end = start.saturating_add(self.page_size).min(count);
        start..end
    }
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            current_page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_within_range() {
        assert_eq!(clamp(2, 5), 2);
        assert_eq!(clamp(5, 5), 5);
        assert_eq!(clamp(1, 5), 1);
    }

    #[test]
    fn test_clamp_out_of_range() {
        assert_eq!(clamp(9, 3), 3);
        assert_eq!(clamp(0, 3), 1);
        assert_eq!(clamp(-4, 3), 1);
        assert_eq!(clamp(i64::MAX, 3), 3);
        assert_eq!(clamp(i64::MIN, 3), 1);
    }

    #[test]
    fn test_clamp_zero_total_pages() {
        assert_eq!(clamp(0, 0), 1);
        assert_eq!(clamp(1, 0), 1);
        assert_eq!(clamp(7, 0), 1);
    }

    #[test]
    fn test_clamp_always_in_bounds() {
        for total in 0..12usize {
            for requested in -20i64..40 {
                let page = clamp(requested, total);
                assert!(page >= 1, "page {page} below 1 for total {total}");
                assert!(page <= total.max(1), "page {page} above {total}");
            }
        }
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 3), 1);
        assert_eq!(total_pages(1, 3), 1);
        assert_eq!(total_pages(3, 3), 1);
        assert_eq!(total_pages(4, 3), 2);
        assert_eq!(total_pages(7, 3), 3);
    }

    #[test]
    fn test_page_state_rejects_zero_size() {
        assert_eq!(PageState::new(0), Err(ListingError::ZeroPageSize));

        let mut state = PageState::new(5).unwrap();
        assert_eq!(state.set_page_size(0), Err(ListingError::ZeroPageSize));
        assert_eq!(state.page_size(), 5);
    }

    #[test]
    fn test_go_to_clamps() {
        let mut state = PageState::new(3).unwrap();

        assert_eq!(state.go_to(5, 7), 3);
        assert_eq!(state.go_to(0, 7), 1);
        assert_eq!(state.go_to(2, 7), 2);
    }

    #[test]
    fn test_clamp_to_after_shrink() {
        let mut state = PageState::new(3).unwrap();
        state.go_to(3, 9);

        assert!(state.clamp_to(4));
        assert_eq!(state.current_page(), 2);
        assert!(!state.clamp_to(4));
    }

    #[test]
    fn test_slice_range() {
        let mut state = PageState::new(3).unwrap();
        assert_eq!(state.slice_range(7), 0..3);

        state.go_to(3, 7);
        assert_eq!(state.slice_range(7), 6..7);

        assert_eq!(PageState::new(3).unwrap().slice_range(0), 0..0);
    }

    #[test]
    fn test_set_page_size_resets_page() {
        let mut state = PageState::new(2).unwrap();
        state.go_to(4, 10);

        state.set_page_size(5).unwrap();

        assert_eq!(state.current_page(), 1);
        assert_eq!(state.page_size(), 5);
    }
}
