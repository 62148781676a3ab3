//! Page arithmetic over the newest-first post ordering.

use serde::Serialize;

use crate::domain::Post;
use crate::error::RepoError;
use crate::ports::PostRepository;

/// Number of posts on a page.
pub const PAGE_SIZE: u64 = 5;

/// A 1-based page number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PageNumber(u64);

impl PageNumber {
    pub const FIRST: Self = Self(1);

    /// Returns `None` for page zero.
    pub fn new(page: u64) -> Option<Self> {
        (page >= 1).then_some(Self(page))
    }

    /// Coerce raw query text into a page number.
    ///
    /// Anything that is not a positive integer (absent, blank, `0`, `-3`, `2.5`,
    /// `abc`, or too large for `u64`) falls back to the first page.
    pub fn parse(raw: Option<&str>) -> Self {
        raw.map(str::trim)
            .and_then(|s| s.parse::<u64>().ok())
            .and_then(Self::new)
            .unwrap_or(Self::FIRST)
    }

    pub fn get(self) -> u64 {
        self.0
    }

    /// Zero-based count of newest posts skipped before this page.
    pub fn offset(self) -> u64 {
        (self.0 - 1).saturating_mul(PAGE_SIZE)
    }
}

impl Default for PageNumber {
    fn default() -> Self {
        Self::FIRST
    }
}

/// One window of posts plus its navigation flags.
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub number: u64,
    pub has_previous: bool,
    pub has_next: bool,
}

impl<T> Page<T> {
    pub fn previous_page(&self) -> Option<u64> {
        self.has_previous.then(|| self.number - 1)
    }

    pub fn next_page(&self) -> Option<u64> {
        self.has_next.then(|| self.number.saturating_add(1))
    }
}

/// Fetch one page of posts and check the store for a following page.
pub async fn fetch_page(
    repo: &dyn PostRepository,
    page: PageNumber,
) -> Result<Page<Post>, RepoError> {
    let offset = page.offset();
    let items = repo.range_fetch(offset, PAGE_SIZE).await?;
    let has_next = repo
        .count(offset.saturating_add(PAGE_SIZE), PAGE_SIZE)
        .await?
        > 0;

    Ok(Page {
        items,
        number: page.get(),
        has_previous: page.get() > 1,
        has_next,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::StubRepository;

    #[test]
    fn test_parse_accepts_positive_integers() {
        assert_eq!(PageNumber::parse(Some("1")).get(), 1);
        assert_eq!(PageNumber::parse(Some("42")).get(), 42);
        assert_eq!(PageNumber::parse(Some(" 3 ")).get(), 3);
    }

    #[test]
    fn test_parse_defaults_to_first_page() {
        for raw in ["", "   ", "0", "-1", "2.5", "abc", "99999999999999999999999"] {
            assert_eq!(PageNumber::parse(Some(raw)), PageNumber::FIRST, "input {raw:?}");
        }
        assert_eq!(PageNumber::parse(None), PageNumber::FIRST);
    }

    #[test]
    fn test_offset() {
        assert_eq!(PageNumber::FIRST.offset(), 0);
        assert_eq!(PageNumber::parse(Some("2")).offset(), 5);
        assert_eq!(PageNumber::parse(Some("4")).offset(), 15);
        assert_eq!(PageNumber(u64::MAX).offset(), u64::MAX);
    }

    #[tokio::test]
    async fn test_empty_store_first_page() {
        let repo = StubRepository::with_posts(0);
        let page = fetch_page(&repo, PageNumber::FIRST).await.unwrap();

        assert!(page.items.is_empty());
        assert!(!page.has_previous);
        assert!(!page.has_next);
        assert_eq!(page.previous_page(), None);
        assert_eq!(page.next_page(), None);
    }

    #[tokio::test]
    async fn test_page_beyond_data() {
        let repo = StubRepository::with_posts(3);
        let page = fetch_page(&repo, PageNumber::parse(Some("9"))).await.unwrap();

        assert!(page.items.is_empty());
        assert!(page.has_previous);
        assert!(!page.has_next);
        assert_eq!(page.previous_page(), Some(8));
    }

    #[tokio::test]
    async fn test_navigation_flags_follow_post_count() {
        for n in [0u64, 1, 4, 5, 6, 10, 11, 23] {
            let repo = StubRepository::with_posts(n);
            for p in 1..=6u64 {
                let page = fetch_page(&repo, PageNumber::new(p).unwrap()).await.unwrap();
                assert_eq!(page.has_next, n > p * PAGE_SIZE, "n={n} p={p}");
                assert_eq!(page.has_previous, p > 1, "n={n} p={p}");
                assert!(page.items.len() as u64 <= PAGE_SIZE);
            }
        }
    }

    #[tokio::test]
    async fn test_items_are_newest_first() {
        let repo = StubRepository::with_posts(7);

        let first = fetch_page(&repo, PageNumber::FIRST).await.unwrap();
        let ids: Vec<u64> = first.items.iter().map(|p| p.id.get()).collect();
        assert_eq!(ids, vec![7, 6, 5, 4, 3]);
        assert_eq!(first.next_page(), Some(2));

        let second = fetch_page(&repo, PageNumber::new(2).unwrap()).await.unwrap();
        let ids: Vec<u64> = second.items.iter().map(|p| p.id.get()).collect();
        assert_eq!(ids, vec![2, 1]);
    }
}
