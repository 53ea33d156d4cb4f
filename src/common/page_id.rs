//! Page identifier type.

use std::fmt;
use std::str::FromStr;

use super::error::Error;

/// Identifies a virtual page referenced by a trace.
///
/// Pages are opaque: the simulator only compares and hashes them.
///
/// # Example
/// ```
/// use pagesim::PageId;
///
/// let page_id: PageId = "42".parse().unwrap();
/// assert_eq!(page_id, PageId::new(42));
/// assert_eq!(page_id.0, 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageId(pub u32);

impl PageId {
    /// Create a new PageId.
    #[inline]
    pub fn new(id: u32) -> Self {
        PageId(id)
    }
}

impl From<u32> for PageId {
    fn from(id: u32) -> Self {
        PageId(id)
    }
}

impl FromStr for PageId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u32>()
            .map(PageId)
            .map_err(|_| Error::InvalidTrace(format!("'{}' is not a page number", s)))
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Page({})", self.0)
    }
}
