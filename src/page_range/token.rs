use super::error::PageRangeError;

/// Separator between range expressions, e.g. "1,3,5-10"
pub const TOKEN_SEPARATOR: char = ',';

/// Separator between the two ends of an interval, e.g. "5-10"
pub const RANGE_SEPARATOR: char = '-';

/// Shape of one range expression before any bounds are checked.
///
/// Numbers are kept as `u64` so that "page 99999999999" is reported as out of
/// range rather than as malformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawRange {
    Single(u64),
    Interval(u64, u64),
}

/// Split an expression into trimmed, non-empty tokens.
pub fn tokenize(s: &str) -> impl Iterator<Item = &str> {
    s.split(TOKEN_SEPARATOR)
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

impl RawRange {
    /// Classify a single token like "5" or "1-10".
    pub fn parse(token: &str) -> Result<Self, PageRangeError> {
        let token = token.trim();
        let malformed = || PageRangeError::MalformedNumber {
            token: token.to_string(),
        };

        match token.split_once(RANGE_SEPARATOR) {
            Some((start, end)) => {
                let start = parse_number(start).ok_or_else(malformed)?;
                let end = parse_number(end).ok_or_else(malformed)?;
                Ok(RawRange::Interval(start, end))
            }
            None => parse_number(token).map(RawRange::Single).ok_or_else(malformed),
        }
    }
}

/// Parse an unsigned base-10 number. Signs and any non-digit are rejected;
/// values too large for `u64` saturate.
pub(crate) fn parse_number(s: &str) -> Option<u64> {
    let s = s.trim();
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(s.parse::<u64>().unwrap_or(u64::MAX))
}
