use super::controller::ViewIntent;
use super::page::clamp;

/// Presentation state for Prev/Next/direct-entry pagination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationControl {
    current_page: usize,
    total_pages: usize,
}

/// A single entry in an enumerated page list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageButton {
    pub number: usize,
    pub active: bool,
}

impl PaginationControl {
    pub fn new(current_page: usize, total_pages: usize) -> Self {
        let total_pages = total_pages.max(1);
        Self {
            current_page: clamp(current_page as i64, total_pages),
            total_pages,
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    pub fn previous_disabled(&self) -> bool {
        self.current_page == 1
    }

    pub fn next_disabled(&self) -> bool {
        self.current_page == self.total_pages
    }

    /// Intent for the "previous" action, or `None` when it is disabled.
    pub fn previous(&self) -> Option<ViewIntent> {
        (!self.previous_disabled()).then(|| ViewIntent::PageChange(self.current_page as i64 - 1))
    }

    /// Intent for the "next" action, or `None` when it is disabled.
    pub fn next(&self) -> Option<ViewIntent> {
        (!self.next_disabled()).then(|| ViewIntent::PageChange(self.current_page as i64 + 1))
    }

    /// Intent for a direct jump, clamped to the available pages.
    pub fn go_to(&self, requested: i64) -> ViewIntent {
        ViewIntent::PageChange(clamp(requested, self.total_pages) as i64)
    }

    /// Page-number buttons. With `window`, at most that many pages are
    /// listed, centered on the current page where possible.
    pub fn page_buttons(&self, window: Option<usize>) -> Vec<PageButton> {
        let (first, last) = match window {
            Some(size) if size > 0 && size < self.total_pages => {
                let before = (size - 1) / 2;
                let first = self
                    .current_page
                    .saturating_sub(before)
                    .clamp(1, self.total_pages - size + 1);
                (first, first + size - 1)
            }
            _ => (1, self.total_pages),
        };

        (first..=last)
            .map(|number| PageButton {
                number,
                active: number == self.current_page,
            })
            .collect()
    }

    /// Numeric entry field seeded with the current page.
    pub fn entry(&self) -> PageEntry {
        PageEntry {
            text: self.current_page.to_string(),
            control: *self,
        }
    }
}

/// Direct numeric page entry.
///
/// The typed text is only interpreted on blur or submit. Both routes clamp
/// with the same rule as the view; text that is not a number is replaced by
/// the current page and produces no intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageEntry {
    text: String,
    control: PaginationControl,
}

impl PageEntry {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn input(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn blur(&mut self) -> Option<ViewIntent> {
        self.commit()
    }

    pub fn submit(&mut self) -> Option<ViewIntent> {
        self.commit()
    }

    fn commit(&mut self) -> Option<ViewIntent> {
        let Ok(requested) = self.text.trim().parse::<i64>() else {
            self.text = self.control.current_page.to_string();
            return None;
        };

        let page = clamp(requested, self.control.total_pages);
        self.text = page.to_string();
        (page != self.control.current_page).then_some(ViewIntent::PageChange(page as i64))
    }
}
