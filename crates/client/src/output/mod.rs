//! Output formatting functions.

pub mod json;
pub mod pretty;

use eventhub_core::listing::PageSlice;
use serde::Serialize;

use crate::cli::OutputFormat;

/// Format a value for output.
pub fn format_output<T: Serialize>(value: &T, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => json::format_json(value),
        OutputFormat::Pretty => serde_json::to_string_pretty(value).unwrap_or_default(),
    }
}

/// One page of a list view, as written in JSON output.
#[derive(Debug, Serialize)]
pub struct PageOutput<'a, T> {
    pub items: &'a [T],
    pub page: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

impl<'a, T> From<&PageSlice<'a, T>> for PageOutput<'a, T> {
    fn from(slice: &PageSlice<'a, T>) -> Self {
        Self {
            items: slice.items,
            page: slice.current_page,
            total_pages: slice.total_pages,
            total_items: slice.total_items,
        }
    }
}

/// Format a page slice, rendering items with `item` in pretty mode.
pub fn format_page<T, F>(
    title: &str,
    slice: &PageSlice<'_, T>,
    format: OutputFormat,
    item: F,
) -> String
where
    T: Serialize,
    F: Fn(&T) -> String,
{
    match format {
        OutputFormat::Json => json::format_json(&PageOutput::from(slice)),
        OutputFormat::Pretty => pretty::format_page(title, slice, item),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_output_json() {
        let items = vec!["b".to_string()];
        let slice = PageSlice {
            items: &items,
            current_page: 2,
            total_pages: 2,
            total_items: 4,
        };

        let output = format_page("ITEMS", &slice, OutputFormat::Json, |s| s.clone());

        assert_eq!(
            output,
            r#"{"items":["b"],"page":2,"total_pages":2,"total_items":4}"#
        );
    }
}
