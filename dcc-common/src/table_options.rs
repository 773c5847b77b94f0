/// Sort direction applied to a table before the user picks a column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

#[allow(clippy::derivable_impls)]
impl Default for SortOrder {
    fn default() -> Self {
        SortOrder::Asc
    }
}

/// Builds the pagination footer text, e.g. "Showing 1 to 20 of 45 entries".
///
/// `start` and `to` are zero-based inclusive row indices. The upper bound is
/// clamped to `total` so the last page never overstates its size.
pub fn default_pagination_shows_total(start: usize, to: usize, total: usize) -> String {
    format!(
        "Showing {} to {} of {} entries",
        start + 1,
        (to + 1).min(total),
        total
    )
}

/// Display and pagination defaults shared by every table in the dashboard.
#[derive(Debug, Clone, Copy)]
pub struct TableOptions {
    /// Rows rendered per page
    pub size_per_page: usize,
    /// Formats the "Showing X to Y of Z" footer
    pub pagination_shows_total: fn(usize, usize, usize) -> String,
    /// Hide the page-size selector
    pub hide_size_per_page: bool,
    pub default_sort_order: SortOrder,
    /// Minimum row count before the filter box is shown
    pub threshold_to_show_search: usize,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            size_per_page: 20,
            pagination_shows_total: default_pagination_shows_total,
            hide_size_per_page: true,
            default_sort_order: SortOrder::Asc,
            threshold_to_show_search: 10,
        }
    }
}

impl TableOptions {
    pub fn should_show_search(&self, row_count: usize) -> bool {
        row_count >= self.threshold_to_show_search
    }

    /// Number of pages needed for `total` rows. An empty table still has one page.
    pub fn page_count(&self, total: usize) -> usize {
        if total == 0 || self.size_per_page == 0 {
            1
        } else {
            total.div_ceil(self.size_per_page)
        }
    }

    /// Zero-based inclusive `(start, to)` indices of `page`.
    ///
    /// `to` is not clamped to the row count; `pagination_shows_total` does that.
    /// Pages past the end resolve to the last page.
    pub fn page_bounds(&self, page: usize, total: usize) -> (usize, usize) {
        let size = self.size_per_page.max(1);
        let page = page.min(self.page_count(total) - 1);
        let start = page * size;
        (start, start + size - 1)
    }

    /// Footer text for `page`, or `None` when there is nothing to page through.
    pub fn footer(&self, page: usize, total: usize) -> Option<String> {
        if total == 0 {
            return None;
        }
        let (start, to) = self.page_bounds(page, total);
        Some((self.pagination_shows_total)(start, to, total))
    }
}

/// Companion props passed alongside `TableOptions`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableProps {
    pub search_placeholder: String,
}

impl Default for TableProps {
    fn default() -> Self {
        Self {
            search_placeholder: "Table filter".to_string(),
        }
    }
}
