use super::error::PageRangeError;
use super::token::RawRange;

/// A range expression whose pages all lie within the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeToken {
    Single(u32),
    /// Inclusive; `start <= end`.
    Interval { start: u32, end: u32 },
}

impl RangeToken {
    /// Check `raw` against a document with `total_pages` pages.
    ///
    /// `token` is the source text, kept for error reporting.
    pub fn validate(raw: RawRange, token: &str, total_pages: u32) -> Result<Self, PageRangeError> {
        match raw {
            RawRange::Single(page) => Ok(RangeToken::Single(check_page(page, token, total_pages)?)),
            RawRange::Interval(start, end) => {
                let start = check_page(start, token, total_pages)?;
                let end = check_page(end, token, total_pages)?;
                if start > end {
                    return Err(PageRangeError::InvertedRange {
                        token: token.to_string(),
                        start,
                        end,
                    });
                }
                Ok(RangeToken::Interval { start, end })
            }
        }
    }

    pub fn start(&self) -> u32 {
        match *self {
            RangeToken::Single(page) => page,
            RangeToken::Interval { start, .. } => start,
        }
    }

    pub fn end(&self) -> u32 {
        match *self {
            RangeToken::Single(page) => page,
            RangeToken::Interval { end, .. } => end,
        }
    }

    /// Every page this token selects, in ascending order.
    pub fn pages(&self) -> std::ops::RangeInclusive<u32> {
        self.start()..=self.end()
    }
}

fn check_page(page: u64, token: &str, total_pages: u32) -> Result<u32, PageRangeError> {
    if page == 0 || page > u64::from(total_pages) {
        return Err(PageRangeError::InvalidPage {
            token: token.to_string(),
            page,
            total: total_pages,
        });
    }
    // fits: page <= total_pages
    Ok(page as u32)
}
