//! Page/size handling for admin listings.

use serde::Deserialize;

pub const DEFAULT_PER_PAGE: u32 = 20;
pub const MAX_PER_PAGE: u32 = 100;

/// Pagination parameters
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Pagination {
    /// 1-based page index
    pub page: u32,
    /// items per page
    pub per_page: u32,
}

impl Pagination {
    /// Clamp to sane bounds and return (0-based page index, page size).
    pub fn normalize(self) -> (u64, u64) {
        let page = self.page.max(1);
        let per_page = self.per_page.clamp(1, MAX_PER_PAGE);
        ((page - 1) as u64, per_page as u64)
    }

    /// Number of rows to skip for the normalized page.
    pub fn offset(self) -> u64 {
        let (idx, per) = self.normalize();
        idx * per
    }
}

impl Default for Pagination {
    fn default() -> Self { Self { page: 1, per_page: DEFAULT_PER_PAGE } }
}

#[cfg(test)]
mod tests {
    use super::Pagination;

    #[test]
    fn normalize_clamps_zero_to_defaults() {
        let (idx, per) = Pagination { page: 0, per_page: 0 }.normalize();
        assert_eq!(idx, 0);
        assert_eq!(per, 1);
    }

    #[test]
    fn normalize_clamps_upper_bound() {
        let (idx, per) = Pagination { page: 5, per_page: 1000 }.normalize();
        assert_eq!(idx, 4);
        assert_eq!(per, 100);
    }

    #[test]
    fn offset_skips_previous_pages() {
        assert_eq!(Pagination { page: 3, per_page: 10 }.offset(), 20);
        assert_eq!(Pagination::default().offset(), 0);
    }

    #[test]
    fn default_values_are_sane() {
        let d = Pagination::default();
        assert_eq!(d.page, 1);
        assert_eq!(d.per_page, 20);
    }
}
