use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Page-size choices offered by the table footer.
pub const PAGE_SIZE_OPTIONS: [u32; 4] = [10, 20, 50, 100];

/// Pagination state of a list view.
///
/// `current` is 1-based and never below 1, `page_size` is never 0.
/// `total` is authoritative only when it came from a server response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub current: u32,
    pub page_size: u32,
    pub total: u64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            current: 1,
            page_size: DEFAULT_PAGE_SIZE,
            total: 0,
        }
    }
}

impl Pagination {
    pub fn new(current: u32, page_size: u32) -> Self {
        Self {
            current: current.max(1),
            page_size: page_size.max(1),
            total: 0,
        }
    }

    pub fn with_current(self, current: u32) -> Self {
        Self {
            current: current.max(1),
            ..self
        }
    }

    pub fn with_page_size(self, page_size: u32) -> Self {
        Self {
            page_size: page_size.max(1),
            ..self
        }
    }

    pub fn with_total(self, total: u64) -> Self {
        Self { total, ..self }
    }

    /// Number of pages, at least 1 so an empty table still shows "1 / 1".
    pub fn total_pages(&self) -> u64 {
        let size = u64::from(self.page_size.max(1));
        self.total.div_ceil(size).max(1)
    }

    pub fn has_prev(&self) -> bool {
        self.current > 1
    }

    pub fn has_next(&self) -> bool {
        u64::from(self.current) < self.total_pages()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_is_clamped() {
        assert_eq!(Pagination::new(0, 10).current, 1);
        assert_eq!(Pagination::default().with_current(0).current, 1);
        assert_eq!(Pagination::default().with_page_size(0).page_size, 1);
    }

    #[test]
    fn test_total_pages() {
        let p = Pagination::new(1, 10);
        assert_eq!(p.total_pages(), 1);
        assert_eq!(p.with_total(1000).total_pages(), 100);
        assert_eq!(p.with_total(1001).total_pages(), 101);
    }

    #[test]
    fn test_prev_next() {
        let p = Pagination::new(1, 10).with_total(25);
        assert!(!p.has_prev());
        assert!(p.has_next());
        let last = p.with_current(3);
        assert!(last.has_prev());
        assert!(!last.has_next());
    }
}
