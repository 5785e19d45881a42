//! # List Projection Pipeline
//!
//! Derives the visible page of products from the full record set, the filter
//! state and the pagination state. [`project`] is a pure function: it borrows the
//! records, allocates only the match list, and is cheap enough to run on every
//! keystroke.

use std::collections::BTreeSet;

use crate::model::{Product, StockFilter, StockLevel};

use super::pages::{PageWindow, MAX_VISIBLE_PAGES};

/// Page sizes a front end offers.
pub const PAGE_SIZES: [usize; 5] = [5, 10, 25, 50, 100];

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Search and filter inputs. All three must hold for a product to be shown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    /// Case-insensitive substring, matched against name or category.
    pub search: String,
    /// Exact category equality when set.
    pub category: Option<String>,
    pub stock: Option<StockFilter>,
}

impl FilterState {
    pub fn matches(&self, product: &Product) -> bool {
        self.matches_with(&self.search.to_lowercase(), product)
    }

    fn matches_with(&self, needle: &str, product: &Product) -> bool {
        let matches_search = product.name.to_lowercase().contains(needle)
            || product.category.to_lowercase().contains(needle);
        let matches_category = self
            .category
            .as_deref()
            .map_or(true, |category| product.category == category);
        let matches_stock = self
            .stock
            .map_or(true, |filter| filter.matches(product.stock));
        matches_search && matches_category && matches_stock
    }

    pub fn is_active(&self) -> bool {
        !self.search.is_empty() || self.category.is_some() || self.stock.is_some()
    }

    /// One short line per active filter, e.g. `Search: "lamp"`.
    pub fn describe(&self) -> Vec<String> {
        let mut parts = Vec::new();
        if !self.search.is_empty() {
            parts.push(format!("Search: \"{}\"", self.search));
        }
        if let Some(category) = &self.category {
            parts.push(format!("Category: {category}"));
        }
        if let Some(stock) = self.stock {
            parts.push(format!("Stock: {}", stock.as_str().replace('-', " ")));
        }
        parts
    }
}

/// Page size and the 1-based current page. Both are always at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page_size: usize,
    current_page: usize,
}

impl Pagination {
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            current_page: 1,
        }
    }

    pub fn with_page(mut self, page: usize) -> Self {
        self.current_page = page.max(1);
        self
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Zero-based index of the first item on the current page.
    pub fn offset(&self) -> usize {
        self.current_page.saturating_sub(1).saturating_mul(self.page_size)
    }

    pub(crate) fn set_page(&mut self, page: usize) {
        self.current_page = page.max(1);
    }

    pub(crate) fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.current_page = 1;
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

/// The filtered, paginated view of the record set.
#[derive(Debug, Clone, PartialEq)]
pub struct Projection<'a> {
    /// Products on the current page, in record-set order.
    pub items: Vec<&'a Product>,
    /// Products matching the filters across all pages.
    pub match_count: usize,
    /// `ceil(match_count / page_size)`, zero when nothing matches.
    pub total_pages: usize,
    pub current_page: usize,
    pub page_size: usize,
}

impl<'a> Projection<'a> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Page 0 is treated as page 1.
    pub fn start_index(&self) -> usize {
        self.current_page.saturating_sub(1).saturating_mul(self.page_size)
    }

    /// 1-based `(first, last)` positions shown, for "Showing X to Y of Z".
    pub fn range(&self) -> Option<(usize, usize)> {
        if self.items.is_empty() {
            return None;
        }
        let first = self.start_index() + 1;
        Some((first, first + self.items.len() - 1))
    }

    /// Absolute row number of the `index`-th item on this page.
    pub fn row_number(&self, index: usize) -> usize {
        self.start_index() + index + 1
    }

    /// Numbered page controls, or `None` when there is at most one page.
    pub fn page_window(&self) -> Option<PageWindow> {
        PageWindow::new(self.current_page, self.total_pages, MAX_VISIBLE_PAGES)
    }
}

/// Applies search, category and stock filters, then slices out the current page.
pub fn project<'a>(
    records: &'a [Product],
    filters: &FilterState,
    pagination: &Pagination,
) -> Projection<'a> {
    let needle = filters.search.to_lowercase();
    let matches: Vec<&'a Product> = records
        .iter()
        .filter(|product| filters.matches_with(&needle, product))
        .collect();

    let match_count = matches.len();
    let total_pages = match_count.div_ceil(pagination.page_size());
    let items = matches
        .into_iter()
        .skip(pagination.offset())
        .take(pagination.page_size())
        .collect();

    Projection {
        items,
        match_count,
        total_pages,
        current_page: pagination.current_page(),
        page_size: pagination.page_size(),
    }
}

/// Distinct, non-empty categories present in the records, sorted.
pub fn categories(records: &[Product]) -> Vec<String> {
    records
        .iter()
        .filter(|product| !product.category.is_empty())
        .map(|product| product.category.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Stock statistics over the unfiltered record set.
///
/// `in_stock` counts every product with stock, so it includes `low_stock`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StockSummary {
    pub total: usize,
    pub in_stock: usize,
    pub low_stock: usize,
    pub out_of_stock: usize,
}

impl StockSummary {
    pub fn of(records: &[Product]) -> Self {
        records.iter().fold(Self::default(), |mut summary, product| {
            summary.total += 1;
            match StockLevel::of(product.stock) {
                StockLevel::Out => summary.out_of_stock += 1,
                StockLevel::Low => {
                    summary.in_stock += 1;
                    summary.low_stock += 1;
                }
                StockLevel::Healthy => summary.in_stock += 1,
            }
            summary
        })
    }
}
