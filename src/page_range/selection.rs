use std::collections::HashSet;
use std::fmt;

use serde::Serialize;

use super::error::PageRangeError;
use super::validate::RangeToken;

/// Ascending, duplicate-free list of 1-based page numbers.
///
/// Only produced by a successful parse, so it is never empty and every page
/// lies within the document it was parsed against.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PageSelection {
    pages: Vec<u32>,
}

impl PageSelection {
    pub fn as_slice(&self) -> &[u32] {
        &self.pages
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn contains(&self, page: u32) -> bool {
        self.pages.binary_search(&page).is_ok()
    }

    pub fn first(&self) -> Option<u32> {
        self.pages.first().copied()
    }

    pub fn last(&self) -> Option<u32> {
        self.pages.last().copied()
    }

    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, u32>> {
        self.pages.iter().copied()
    }

    pub fn into_vec(self) -> Vec<u32> {
        self.pages
    }

    /// Maximal runs of consecutive pages as inclusive `(start, end)` pairs.
    pub fn runs(&self) -> Vec<(u32, u32)> {
        let mut runs: Vec<(u32, u32)> = Vec::new();
        for page in self.iter() {
            match runs.last_mut() {
                Some((_, end)) if *end + 1 == page => *end = page,
                _ => runs.push((page, page)),
            }
        }
        runs
    }
}

/// Formats as the shortest expression that parses back to the same pages,
/// e.g. "1,3,5-10".
impl fmt::Display for PageSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (start, end)) in self.runs().into_iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            if start == end {
                write!(f, "{}", start)?;
            } else {
                write!(f, "{}-{}", start, end)?;
            }
        }
        Ok(())
    }
}

impl IntoIterator for PageSelection {
    type Item = u32;
    type IntoIter = std::vec::IntoIter<u32>;

    fn into_iter(self) -> Self::IntoIter {
        self.pages.into_iter()
    }
}

impl<'a> IntoIterator for &'a PageSelection {
    type Item = u32;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, u32>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Collects pages from validated tokens, refusing to grow past `capacity`
/// distinct pages.
#[derive(Debug)]
pub struct PageSetBuilder {
    pages: Vec<u32>,
    seen: HashSet<u32>,
    capacity: usize,
}

impl PageSetBuilder {
    pub fn new(capacity: usize) -> Self {
        PageSetBuilder {
            pages: Vec::new(),
            seen: HashSet::new(),
            capacity,
        }
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Add one page. Re-adding a page is a no-op, even when full.
    ///
    /// `token` is the source text, kept for error reporting.
    pub fn insert(&mut self, page: u32, token: &str) -> Result<(), PageRangeError> {
        if self.seen.contains(&page) {
            return Ok(());
        }
        if self.pages.len() >= self.capacity {
            return Err(PageRangeError::CapacityExceeded {
                token: token.to_string(),
                capacity: self.capacity,
            });
        }
        self.seen.insert(page);
        self.pages.push(page);
        Ok(())
    }

    /// Add every page of `range`, checking capacity on each insert.
    pub fn extend(&mut self, range: RangeToken, token: &str) -> Result<(), PageRangeError> {
        for page in range.pages() {
            self.insert(page, token)?;
        }
        Ok(())
    }

    pub fn finish(mut self) -> Result<PageSelection, PageRangeError> {
        if self.pages.is_empty() {
            return Err(PageRangeError::EmptyResult);
        }
        self.pages.sort_unstable();
        self.pages.dedup();
        Ok(PageSelection { pages: self.pages })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page_range::error::ErrorKind;

    fn selection(pages: &[u32]) -> PageSelection {
        let mut builder = PageSetBuilder::new(1000);
        for &page in pages {
            builder.insert(page, "test").unwrap();
        }
        builder.finish().unwrap()
    }

    #[test]
    fn test_sorted_and_unique() {
        let sel = selection(&[9, 3, 3, 1, 9, 4]);
        assert_eq!(sel.as_slice(), &[1, 3, 4, 9]);
        assert_eq!(sel.len(), 4);
        assert_eq!(sel.first(), Some(1));
        assert_eq!(sel.last(), Some(9));
        assert!(sel.contains(4));
        assert!(!sel.contains(5));
    }

    #[test]
    fn test_overlapping_intervals() {
        let mut builder = PageSetBuilder::new(1000);
        builder
            .extend(RangeToken::Interval { start: 1, end: 5 }, "1-5")
            .unwrap();
        builder
            .extend(RangeToken::Interval { start: 3, end: 8 }, "3-8")
            .unwrap();
        assert_eq!(builder.len(), 8);
        let sel = builder.finish().unwrap();
        assert_eq!(sel.into_vec(), (1..=8).collect::<Vec<_>>());
    }

    #[test]
    fn test_capacity_exceeded_on_insert() {
        let mut builder = PageSetBuilder::new(3);
        let err = builder
            .extend(RangeToken::Interval { start: 1, end: 100 }, "1-100")
            .unwrap_err();
        assert_eq!(
            err,
            PageRangeError::CapacityExceeded {
                token: "1-100".to_string(),
                capacity: 3
            }
        );
        assert_eq!(builder.len(), 3);
    }

    #[test]
    fn test_duplicate_when_full_is_noop() {
        let mut builder = PageSetBuilder::new(2);
        builder.insert(1, "1").unwrap();
        builder.insert(2, "2").unwrap();
        builder.insert(1, "1").unwrap();
        assert_eq!(builder.insert(3, "3").unwrap_err().kind(), ErrorKind::CapacityExceeded);
    }

    #[test]
    fn test_empty_result() {
        let builder = PageSetBuilder::new(10);
        assert!(builder.is_empty());
        assert_eq!(builder.finish().unwrap_err(), PageRangeError::EmptyResult);
    }

    #[test]
    fn test_display_compacts_runs() {
        assert_eq!(selection(&[1, 3, 5, 6, 7, 8, 9, 10]).to_string(), "1,3,5-10");
        assert_eq!(selection(&[4]).to_string(), "4");
        assert_eq!(selection(&[2, 3]).to_string(), "2-3");
        assert_eq!(selection(&[1, 2, 3, 7, 9, 10]).runs(), vec![(1, 3), (7, 7), (9, 10)]);
    }

    #[test]
    fn test_serializes_as_array() {
        let json = serde_json::to_string(&selection(&[2, 8])).unwrap();
        assert_eq!(json, "[2,8]");
    }
}
