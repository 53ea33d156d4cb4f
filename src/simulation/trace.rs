//! Reference trace construction and parsing.

use crate::common::{PageId, Result};

/// Turn raw page numbers into a trace.
pub fn to_trace(pages: &[u32]) -> Vec<PageId> {
    pages.iter().copied().map(PageId::new).collect()
}

/// Parse a trace such as `"7, 0, 1, 2"`, `"7 0 1 2"` or `"[7,0,1,2]"`.
///
/// Commas and whitespace both separate pages. Empty input is an empty trace.
///
/// # Errors
/// Returns [`Error::InvalidTrace`](crate::Error::InvalidTrace) on the first
/// token that is not a page number.
///
/// # Example
/// ```
/// use pagesim::{parse_trace, PageId};
///
/// let trace = parse_trace("[7, 0, 1]").unwrap();
/// assert_eq!(trace, vec![PageId::new(7), PageId::new(0), PageId::new(1)]);
/// ```
pub fn parse_trace(input: &str) -> Result<Vec<PageId>> {
    let body = input.trim();
    let body = body
        .strip_prefix('[')
        .and_then(|inner| inner.strip_suffix(']'))
        .unwrap_or(body);

    body.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(str::parse)
        .collect()
}
