use serde::Deserialize;

use crate::errors::AppError;

pub const DEFAULT_PER_PAGE: u32 = 10;
pub const MAX_PER_PAGE: u32 = 100;

/// Query parameters accepted by `GET /companies`.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

/// A resolved, 1-based page window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub page: u32,
    pub per_page: u32,
}

impl PageWindow {
    pub fn offset(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.per_page)
    }

    pub fn limit(&self) -> u64 {
        u64::from(self.per_page)
    }
}

impl ListQuery {
    /// Returns `None` when no page was requested (full listing).
    /// `per_page` is clamped to `1..=MAX_PER_PAGE`.
    pub fn window(&self) -> Result<Option<PageWindow>, AppError> {
        let Some(page) = self.page else {
            return Ok(None);
        };
        if page == 0 {
            return Err(AppError::Validation(
                "page numbers start at 1".to_string(),
            ));
        }
        let per_page = self
            .per_page
            .unwrap_or(DEFAULT_PER_PAGE)
            .clamp(1, MAX_PER_PAGE);
        Ok(Some(PageWindow { page, per_page }))
    }
}

/// Number of pages needed to show `total` records, `per_page` at a time.
/// An empty collection still has one (empty) page.
pub fn total_pages(total: u64, per_page: u32) -> u64 {
    let per_page = u64::from(per_page.max(1));
    total.div_ceil(per_page).max(1)
}
