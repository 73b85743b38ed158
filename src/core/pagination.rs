//! Page-window math for the pagination bar

use crate::core::query::total_pages;

/// Page size used until the user picks another one
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Choices offered by the page-size picker
pub const PAGE_SIZE_OPTIONS: [usize; 5] = [5, 10, 20, 50, 100];

/// Maximum number of numbered buttons before the strip collapses with ellipses
const MAX_VISIBLE_PAGES: usize = 5;

/// Display-oriented view of one page position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    pub page: usize,
    pub total: usize,
    pub total_pages: usize,
    pub has_prev: bool,
    pub has_next: bool,
    /// 1-based index of the first item shown (0 when nothing is shown)
    pub start_index: usize,
    /// 1-based index of the last item shown
    pub end_index: usize,
}

impl PageInfo {
    pub fn new(total: usize, page: usize, limit: usize) -> Self {
        let total_pages = total_pages(total, limit);
        let first = page.saturating_sub(1).saturating_mul(limit);
        let end_index = page.saturating_mul(limit).min(total);
        let start_index = if first < end_index { first + 1 } else { 0 };

        Self {
            page,
            total,
            total_pages,
            has_prev: page > 1,
            has_next: page < total_pages,
            start_index,
            end_index,
        }
    }

    /// "Showing 6-10 of 23"
    pub fn summary(&self) -> String {
        if self.start_index == 0 {
            format!("Showing 0 of {}", self.total)
        } else {
            format!(
                "Showing {}-{} of {}",
                self.start_index, self.end_index, self.total
            )
        }
    }
}

/// One slot in the page-button strip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSlot {
    Page(usize),
    Ellipsis,
}

/// Builds the compact page strip: at most five numbered slots plus ellipses,
/// always anchored to the first and last page once collapsed.
pub fn visible_pages(current: usize, total_pages: usize) -> Vec<PageSlot> {
    if total_pages <= MAX_VISIBLE_PAGES {
        return (1..=total_pages).map(PageSlot::Page).collect();
    }

    let mut slots = Vec::with_capacity(7);
    if current <= 3 {
        slots.extend((1..=4).map(PageSlot::Page));
        slots.push(PageSlot::Ellipsis);
        slots.push(PageSlot::Page(total_pages));
    } else if current >= total_pages - 2 {
        slots.push(PageSlot::Page(1));
        slots.push(PageSlot::Ellipsis);
        slots.extend((total_pages - 3..=total_pages).map(PageSlot::Page));
    } else {
        slots.push(PageSlot::Page(1));
        slots.push(PageSlot::Ellipsis);
        slots.extend((current - 1..=current + 1).map(PageSlot::Page));
        slots.push(PageSlot::Ellipsis);
        slots.push(PageSlot::Page(total_pages));
    }
    slots
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageSlot::{Ellipsis, Page};

    #[test]
    fn test_page_info_middle_page() {
        let info = PageInfo::new(23, 2, 5);
        assert_eq!(info.total_pages, 5);
        assert!(info.has_prev);
        assert!(info.has_next);
        assert_eq!((info.start_index, info.end_index), (6, 10));
        assert_eq!(info.summary(), "Showing 6-10 of 23");
    }

    #[test]
    fn test_page_info_last_partial_page() {
        let info = PageInfo::new(23, 5, 5);
        assert!(!info.has_next);
        assert_eq!((info.start_index, info.end_index), (21, 23));
    }

    #[test]
    fn test_page_info_empty_collection() {
        let info = PageInfo::new(0, 1, 5);
        assert_eq!(info.total_pages, 0);
        assert!(!info.has_prev);
        assert!(!info.has_next);
        assert_eq!(info.summary(), "Showing 0 of 0");
    }

    #[test]
    fn test_visible_pages_short_strip() {
        assert_eq!(visible_pages(1, 3), vec![Page(1), Page(2), Page(3)]);
        assert!(visible_pages(1, 0).is_empty());
    }

    #[test]
    fn test_visible_pages_near_start() {
        assert_eq!(
            visible_pages(2, 20),
            vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(20)]
        );
    }

    #[test]
    fn test_visible_pages_near_end() {
        assert_eq!(
            visible_pages(19, 20),
            vec![Page(1), Ellipsis, Page(17), Page(18), Page(19), Page(20)]
        );
    }

    #[test]
    fn test_visible_pages_middle() {
        assert_eq!(
            visible_pages(10, 20),
            vec![
                Page(1),
                Ellipsis,
                Page(9),
                Page(10),
                Page(11),
                Ellipsis,
                Page(20)
            ]
        );
    }
}
