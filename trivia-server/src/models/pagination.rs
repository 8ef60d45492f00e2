//! Fixed-size pagination over pre-ordered result sets
//!
//! Pages are 1-indexed slices of [`QUESTIONS_PER_PAGE`] items. Callers sort
//! their sequence first; slicing never reorders and never fails.

use serde::Deserialize;

/// Items per page
pub const QUESTIONS_PER_PAGE: usize = 10;

/// Requested page number (1-indexed)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page(i64);

impl Page {
    pub fn new(number: i64) -> Self {
        Self(number)
    }

    pub fn number(&self) -> i64 {
        self.0
    }

    /// Half-open item range covered by this page, `None` for pages below 1.
    pub fn bounds(&self) -> Option<(usize, usize)> {
        if self.0 < 1 {
            return None;
        }
        let start = usize::try_from(self.0 - 1)
            .ok()?
            .checked_mul(QUESTIONS_PER_PAGE)?;
        Some((start, start.saturating_add(QUESTIONS_PER_PAGE)))
    }
}

impl Default for Page {
    fn default() -> Self {
        Self(1)
    }
}

/// Query parameters carrying a page number
///
/// Kept as a raw string: a value that does not parse as an integer falls
/// back to page 1 rather than rejecting the request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<String>,
}

impl From<PageParams> for Page {
    fn from(params: PageParams) -> Self {
        params
            .page
            .and_then(|raw| raw.trim().parse::<i64>().ok())
            .map(Page::new)
            .unwrap_or_default()
    }
}

/// Slice `items` down to the requested page.
///
/// Out-of-range pages yield an empty slice.
pub fn paginate<T>(page: Page, items: &[T]) -> &[T] {
    match page.bounds() {
        Some((start, _)) if start >= items.len() => &[],
        Some((start, end)) => &items[start..end.min(items.len())],
        None => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(n: usize) -> Vec<usize> {
        (1..=n).collect()
    }

    #[test]
    fn first_page_is_first_ten() {
        let items = numbers(25);
        assert_eq!(paginate(Page::new(1), &items), &items[0..10]);
    }

    #[test]
    fn last_page_is_partial() {
        let items = numbers(25);
        assert_eq!(paginate(Page::new(3), &items), &[21, 22, 23, 24, 25]);
    }

    #[test]
    fn page_past_end_is_empty() {
        let items = numbers(20);
        assert!(paginate(Page::new(3), &items).is_empty());
        assert!(paginate(Page::new(i64::MAX), &items).is_empty());
    }

    #[test]
    fn non_positive_page_is_empty() {
        let items = numbers(5);
        assert!(paginate(Page::new(0), &items).is_empty());
        assert!(paginate(Page::new(-2), &items).is_empty());
    }

    #[test]
    fn params_default_to_first_page() {
        assert_eq!(Page::from(PageParams::default()), Page::new(1));

        let params = PageParams {
            page: Some("abc".into()),
        };
        assert_eq!(Page::from(params), Page::new(1));

        let params = PageParams {
            page: Some("4".into()),
        };
        assert_eq!(Page::from(params), Page::new(4));
    }
}
