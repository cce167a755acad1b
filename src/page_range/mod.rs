//! Page range expressions such as `"1,3,5-10"`.
//!
//! An expression is a comma-separated list of tokens, each either a single
//! page number or two page numbers joined by a dash (an inclusive interval).
//! Parsing is all-or-nothing: the first bad token fails the whole expression,
//! and a successful parse always yields an ascending, duplicate-free
//! [`PageSelection`] bounded by [`ParseOptions::max_pages`].

mod error;
mod selection;
mod token;
mod validate;

pub use error::{ErrorKind, PageRangeError, INVALID_RANGE_MESSAGE};
pub use selection::{PageSelection, PageSetBuilder};
pub use token::{tokenize, RawRange, RANGE_SEPARATOR, TOKEN_SEPARATOR};
pub use validate::RangeToken;

/// Most distinct pages a single expression may select.
pub const DEFAULT_MAX_PAGES: usize = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    pub max_pages: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            max_pages: DEFAULT_MAX_PAGES,
        }
    }
}

/// Parse a lone page number like "5", as used by go-to-page prompts.
pub fn parse_single_page(s: &str, total_pages: u32) -> Option<u32> {
    let page = token::parse_number(s)?;
    if page == 0 || page > u64::from(total_pages) {
        tracing::debug!(input = s, total_pages, "page out of range");
        return None;
    }
    Some(page as u32)
}

/// Parse a page range expression like "1,3,5-10" with the default options.
pub fn parse_page_ranges(s: &str, total_pages: u32) -> Result<PageSelection, PageRangeError> {
    parse_page_ranges_with(s, total_pages, &ParseOptions::default())
}

pub fn parse_page_ranges_with(
    s: &str,
    total_pages: u32,
    options: &ParseOptions,
) -> Result<PageSelection, PageRangeError> {
    let result = build_selection(s, total_pages, options);
    match &result {
        Ok(selection) => tracing::debug!(pages = selection.len(), "parsed page ranges"),
        Err(e) => tracing::warn!(kind = ?e.kind(), token = ?e.token(), "rejected page ranges: {}", e),
    }
    result
}

fn build_selection(
    s: &str,
    total_pages: u32,
    options: &ParseOptions,
) -> Result<PageSelection, PageRangeError> {
    if s.trim().is_empty() {
        return Err(PageRangeError::EmptyInput);
    }

    let mut builder = PageSetBuilder::new(options.max_pages);
    for part in tokenize(s) {
        let raw = RawRange::parse(part)?;
        let range = RangeToken::validate(raw, part, total_pages)?;
        tracing::debug!(token = part, ?range, "classified token");
        builder.extend(range, part)?;
    }
    builder.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_happy_path() {
        let sel = parse_page_ranges("2-5,8,12-15", 20).unwrap();
        assert_eq!(sel.as_slice(), &[2, 3, 4, 5, 8, 12, 13, 14, 15]);
    }

    #[test]
    fn test_duplicates_collapse() {
        let a = parse_page_ranges("1,3,5-10", 10).unwrap();
        let b = parse_page_ranges("1,1,3,5-10,10,5", 10).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.as_slice(), &[1, 3, 5, 6, 7, 8, 9, 10]);
    }

    #[test]
    fn test_whitespace_tolerance() {
        assert_eq!(
            parse_page_ranges(" 1 , 3 , 5 - 10 ", 10).unwrap(),
            parse_page_ranges("1,3,5-10", 10).unwrap()
        );
    }

    #[test]
    fn test_unordered_input_is_sorted() {
        let sel = parse_page_ranges("9,2-3,1", 10).unwrap();
        assert_eq!(sel.as_slice(), &[1, 2, 3, 9]);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(parse_page_ranges("", 10), Err(PageRangeError::EmptyInput));
        assert_eq!(parse_page_ranges(" \t ", 10), Err(PageRangeError::EmptyInput));
    }

    #[test]
    fn test_only_separators() {
        assert_eq!(parse_page_ranges(",,", 10), Err(PageRangeError::EmptyResult));
    }

    #[test]
    fn test_exceeds_total() {
        let err = parse_page_ranges("6", 5).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidPage);
        assert_eq!(err.token(), Some("6"));
    }

    #[test]
    fn test_inverted_range() {
        let err = parse_page_ranges("10-2", 20).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvertedRange);
    }

    #[test]
    fn test_malformed_token_reported() {
        let err = parse_page_ranges("1, 3x ,5", 10).unwrap_err();
        assert_eq!(
            err,
            PageRangeError::MalformedNumber {
                token: "3x".to_string()
            }
        );
        assert_eq!(parse_page_ranges("-1", 10).unwrap_err().kind(), ErrorKind::MalformedNumber);
    }

    #[test]
    fn test_one_bad_token_fails_everything() {
        assert!(parse_page_ranges("1-3,0,5", 10).is_err());
    }

    #[test]
    fn test_capacity_exceeded() {
        let err = parse_page_ranges("1-5000", 5000).unwrap_err();
        assert_eq!(
            err,
            PageRangeError::CapacityExceeded {
                token: "1-5000".to_string(),
                capacity: DEFAULT_MAX_PAGES
            }
        );
    }

    #[test]
    fn test_capacity_exactly_full() {
        let sel = parse_page_ranges("1-1000,500", 5000).unwrap();
        assert_eq!(sel.len(), 1000);
    }

    #[test]
    fn test_absurd_interval_fails_fast() {
        let options = ParseOptions { max_pages: 10 };
        let err = parse_page_ranges_with("1-4000000000", u32::MAX, &options).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::CapacityExceeded);
    }

    #[test]
    fn test_custom_capacity() {
        let options = ParseOptions { max_pages: 3 };
        assert!(parse_page_ranges_with("1-3", 10, &options).is_ok());
        assert!(parse_page_ranges_with("1-4", 10, &options).is_err());
    }

    #[test]
    fn test_single_page() {
        assert_eq!(parse_single_page("5", 10), Some(5));
        assert_eq!(parse_single_page(" 10 ", 10), Some(10));
        assert_eq!(parse_single_page("0", 10), None);
        assert_eq!(parse_single_page("-1", 10), None);
        assert_eq!(parse_single_page("11", 10), None);
        assert_eq!(parse_single_page("", 10), None);
        assert_eq!(parse_single_page("2-3", 10), None);
        assert_eq!(parse_single_page("1", 0), None);
    }

    proptest! {
        #[test]
        fn prop_canonical_round_trip(pages in proptest::collection::btree_set(1u32..=200, 1..50)) {
            let input = pages.iter().map(|p| p.to_string()).collect::<Vec<_>>().join(",");
            let sel = parse_page_ranges(&input, 200).unwrap();
            let reparsed = parse_page_ranges(&sel.to_string(), 200).unwrap();
            prop_assert_eq!(&reparsed, &sel);
            prop_assert_eq!(sel.into_vec(), pages.into_iter().collect::<Vec<_>>());
        }

        #[test]
        fn prop_strictly_ascending(ranges in proptest::collection::vec((1u32..=100, 0u32..10), 1..20)) {
            let input = ranges
                .iter()
                .map(|&(start, len)| format!("{}-{}", start, (start + len).min(100)))
                .collect::<Vec<_>>()
                .join(",");
            let sel = parse_page_ranges(&input, 100).unwrap();
            prop_assert!(sel.as_slice().windows(2).all(|w| w[0] < w[1]));
            prop_assert!(sel.iter().all(|p| (1..=100).contains(&p)));
        }

        #[test]
        fn prop_repeating_tokens_changes_nothing(pages in proptest::collection::vec(1u32..=50, 1..20)) {
            let once = pages.iter().map(|p| p.to_string()).collect::<Vec<_>>().join(",");
            let twice = format!("{},{}", once, once);
            prop_assert_eq!(parse_page_ranges(&once, 50).unwrap(), parse_page_ranges(&twice, 50).unwrap());
        }
    }
}
