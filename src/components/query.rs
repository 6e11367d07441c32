//! Listing page state.
//!
//! Plain data, no signals: the products page keeps one `ProductQuery` in a
//! signal and mutates it through these methods, so the reset-and-clamp rules
//! live here where they can be tested.

/// Search/filter/cursor state for the product listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductQuery {
    pub search: String,
    pub category: String,
    pub page: u32,
}

impl ProductQuery {
    pub fn new() -> Self {
        Self {
            search: String::new(),
            category: String::new(),
            page: 1,
        }
    }

    /// Changing the search text resets the cursor to the first page.
    pub fn set_search(&mut self, search: String) {
        self.search = search;
        self.page = 1;
    }

    /// Changing the category resets the cursor to the first page.
    pub fn set_category(&mut self, category: String) {
        self.category = category;
        self.page = 1;
    }

    /// Move the cursor, clamped to `1..=total_pages`.
    pub fn set_page(&mut self, page: u32, total_pages: u32) {
        self.page = page.clamp(1, total_pages.max(1));
    }
}

impl Default for ProductQuery {
    fn default() -> Self {
        Self::new()
    }
}

/// Pagination cursor as reported by the last listing response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    pub page: u32,
    pub total_pages: u32,
}

impl Pager {
    pub fn new(page: u32, total_pages: u32) -> Self {
        Self {
            page,
            total_pages: total_pages.max(1),
        }
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pager_disables_edges() {
        let first = Pager::new(1, 3);
        assert!(!first.has_prev());
        assert!(first.has_next());

        let middle = Pager::new(2, 3);
        assert!(middle.has_prev());
        assert!(middle.has_next());

        let last = Pager::new(3, 3);
        assert!(last.has_prev());
        assert!(!last.has_next());
    }

    #[test]
    fn single_page_listing_disables_both() {
        let pager = Pager::new(1, 1);
        assert!(!pager.has_prev());
        assert!(!pager.has_next());
        // a zero-page response still renders as one page
        let empty = Pager::new(1, 0);
        assert!(!empty.has_next());
    }

    #[test]
    fn search_change_resets_cursor() {
        let mut query = ProductQuery::new();
        query.set_page(3, 5);
        assert_eq!(query.page, 3);

        query.set_search("usb".to_string());
        assert_eq!(query.search, "usb");
        assert_eq!(query.page, 1);
    }

    #[test]
    fn category_change_resets_cursor() {
        let mut query = ProductQuery::new();
        query.set_page(3, 5);

        query.set_category("Cables".to_string());
        assert_eq!(query.category, "Cables");
        assert_eq!(query.page, 1);
    }

    #[test]
    fn cursor_clamps_to_bounds() {
        let mut query = ProductQuery::new();
        query.set_page(9, 3);
        assert_eq!(query.page, 3);

        query.set_page(0, 3);
        assert_eq!(query.page, 1);
    }
}
