//! Fixed-row-count table pagination.
//!
//! Overview tables in a handbook are split across pages with at most N data
//! rows each, repeating the header row on every page.

use core::iter::FusedIterator;
use core::ops::Range;

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

use crate::error::LayoutError;

/// Iterator over the row ranges of each page.
///
/// Created by [`page_ranges`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageRanges {
    len: usize,
    rows_per_page: usize,
    next_start: usize,
}

impl Iterator for PageRanges {
    type Item = Range<usize>;

    fn next(&mut self) -> Option<Range<usize>> {
        if self.next_start >= self.len {
            return None;
        }
        let start = self.next_start;
        let end = start.saturating_add(self.rows_per_page).min(self.len);
        self.next_start = end;
        Some(start..end)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = (self.len - self.next_start.min(self.len)).div_ceil(self.rows_per_page);
        (n, Some(n))
    }
}

impl ExactSizeIterator for PageRanges {}

impl FusedIterator for PageRanges {}

/// Split `0..len` into consecutive ranges of at most `rows_per_page`.
///
/// ```
/// let pages: Vec<_> = boxfit::page_ranges(25, 11).unwrap().collect();
/// assert_eq!(pages, [0..11, 11..22, 22..25]);
/// ```
pub fn page_ranges(len: usize, rows_per_page: usize) -> Result<PageRanges, LayoutError> {
    if rows_per_page == 0 {
        return Err(LayoutError::ZeroRowsPerPage);
    }
    Ok(PageRanges {
        len,
        rows_per_page,
        next_start: 0,
    })
}

/// Number of pages needed for `len` rows.
pub fn page_count(len: usize, rows_per_page: usize) -> Result<usize, LayoutError> {
    page_ranges(len, rows_per_page).map(|pages| pages.len())
}

/// Split a table whose first row is the header into pages of at most
/// `rows_per_page` data rows, each starting with a copy of the header.
///
/// A table with no data rows produces no pages.
#[cfg(feature = "alloc")]
pub fn split_with_header<T: Clone>(
    rows: &[T],
    rows_per_page: usize,
) -> Result<Vec<Vec<T>>, LayoutError> {
    let Some((header, data)) = rows.split_first() else {
        page_ranges(0, rows_per_page)?;
        return Ok(Vec::new());
    };
    let pages = page_ranges(data.len(), rows_per_page)?
        .map(|range| {
            let mut page = Vec::with_capacity(range.len() + 1);
            page.push(header.clone());
            page.extend_from_slice(&data[range]);
            page
        })
        .collect::<Vec<_>>();

    trace_layout!(
        data_rows = data.len(),
        rows_per_page,
        pages = pages.len(),
        "table paginated"
    );

    Ok(pages)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_multiple() {
        let pages: Vec<_> = page_ranges(30, 15).unwrap().collect();
        assert_eq!(pages, [0..15, 15..30]);
    }

    #[test]
    fn remainder_on_last_page() {
        let mut pages = page_ranges(25, 11).unwrap();
        assert_eq!(pages.len(), 3);
        assert_eq!(pages.next(), Some(0..11));
        assert_eq!(pages.len(), 2);
        assert_eq!(pages.next(), Some(11..22));
        assert_eq!(pages.next(), Some(22..25));
        assert_eq!(pages.next(), None);
        assert_eq!(pages.next(), None);
    }

    #[test]
    fn empty_has_no_pages() {
        assert_eq!(page_ranges(0, 5).unwrap().next(), None);
        assert_eq!(page_count(0, 5), Ok(0));
    }

    #[test]
    fn zero_rows_per_page_errors() {
        assert_eq!(page_ranges(10, 0), Err(LayoutError::ZeroRowsPerPage));
        assert_eq!(page_count(10, 0), Err(LayoutError::ZeroRowsPerPage));
    }

    #[test]
    fn huge_page_size_does_not_overflow() {
        let pages: Vec<_> = page_ranges(3, usize::MAX).unwrap().collect();
        assert_eq!(pages, [0..3]);
    }

    #[cfg(feature = "alloc")]
    #[test]
    fn header_repeats_on_every_page() {
        let rows = ["day", "d1", "d2", "d3", "d4", "d5"];
        let pages = split_with_header(&rows, 2).unwrap();
        assert_eq!(
            pages,
            [
                vec!["day", "d1", "d2"],
                vec!["day", "d3", "d4"],
                vec!["day", "d5"],
            ]
        );
    }

    #[cfg(feature = "alloc")]
    #[test]
    fn header_only_table_has_no_pages() {
        assert!(split_with_header(&["day"], 11).unwrap().is_empty());
        assert!(split_with_header::<&str>(&[], 11).unwrap().is_empty());
    }

    #[cfg(feature = "alloc")]
    #[test]
    fn split_validates_page_size_even_when_empty() {
        assert_eq!(
            split_with_header::<&str>(&[], 0),
            Err(LayoutError::ZeroRowsPerPage)
        );
    }
}
