//! Offset pagination.
//!
//! Page parameters arrive as optional strings. [`PageRequest::parse`]
//! resolves them to a 1-based page and a bounded page size, falling back to
//! defaults for anything missing, unparseable or below one. It never fails.

use serde::{Deserialize, Serialize};

/// Default number of records per page.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Upper bound on the number of records per page.
pub const MAX_PAGE_SIZE: u32 = 50;

/// Default and maximum page sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageLimits {
    /// Page size used when none (or an invalid one) is requested.
    pub default_size: u32,
    /// Requested sizes above this are reduced to it.
    pub max_size: u32,
}

impl Default for PageLimits {
    fn default() -> Self {
        Self {
            default_size: DEFAULT_PAGE_SIZE,
            max_size: MAX_PAGE_SIZE,
        }
    }
}

impl PageLimits {
    /// Creates limits with the given default and maximum sizes.
    pub fn new(default_size: u32, max_size: u32) -> Self {
        Self {
            default_size,
            max_size,
        }
    }
}

/// A normalized page request.
///
/// # Examples
///
/// ```
/// use advocate_persistence::types::PageRequest;
///
/// let page = PageRequest::parse(Some("3"), Some("5"));
/// assert_eq!((page.page(), page.page_size(), page.offset()), (3, 5, 10));
///
/// let clamped = PageRequest::parse(Some("abc"), Some("100"));
/// assert_eq!((clamped.page(), clamped.page_size()), (1, 50));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRequest {
    page: u64,
    page_size: u32,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageRequest {
    /// Creates a page request, raising zero values to one and clamping
    /// the size to [`MAX_PAGE_SIZE`].
    pub fn new(page: u64, page_size: u32) -> Self {
        Self {
            page: page.max(1),
            page_size: page_size.clamp(1, MAX_PAGE_SIZE),
        }
    }

    /// Normalizes raw page parameters with the default limits.
    pub fn parse(page: Option<&str>, page_size: Option<&str>) -> Self {
        Self::parse_with_limits(page, page_size, PageLimits::default())
    }

    /// Normalizes raw page parameters with the given limits.
    pub fn parse_with_limits(page: Option<&str>, page_size: Option<&str>, limits: PageLimits) -> Self {
        let page = positive_or(page, 1);
        let page_size = positive_or(page_size, u64::from(limits.default_size))
            .min(u64::from(limits.max_size));

        Self {
            page,
            page_size: u32::try_from(page_size).unwrap_or(limits.max_size),
        }
    }

    /// Returns the 1-based page number.
    pub fn page(&self) -> u64 {
        self.page
    }

    /// Returns the number of records per page.
    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Returns the number of records to skip: `(page - 1) * page_size`.
    pub fn offset(&self) -> u64 {
        self.page
            .saturating_sub(1)
            .saturating_mul(u64::from(self.page_size))
    }
}

/// Parses the leading integer of a value, returning `default` when there is
/// none or it is below one.
fn positive_or(value: Option<&str>, default: u64) -> u64 {
    match value.and_then(parse_leading_int) {
        Some(n) if n >= 1 => n.unsigned_abs(),
        _ => default,
    }
}

/// Parses the leading base-10 integer of a string.
///
/// Leading whitespace and a single sign are accepted; parsing stops at the
/// first non-digit. `"2.9"` is 2, `"12abc"` is 12, `"abc"` is `None`.
/// Digit runs too long for `i64` saturate.
pub fn parse_leading_int(input: &str) -> Option<i64> {
    let s = input.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let run = digits.bytes().take_while(u8::is_ascii_digit).count();
    if run == 0 {
        return None;
    }

    let magnitude = digits[..run].bytes().fold(0i64, |acc, b| {
        acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
    });

    Some(if negative { -magnitude } else { magnitude })
}
