//! The owned list state: records, filters and pagination in one place.
//!
//! Every mutation goes through a method here so the page-reset rule holds:
//! changing any filter field or the page size puts the view back on page 1.
//! Callers recompute with [`ListState::projection`] after each mutation.

use crate::model::{Product, ProductId, StockFilter};

use super::projection::{categories, project, FilterState, Pagination, Projection, StockSummary};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListState {
    records: Vec<Product>,
    filters: FilterState,
    pagination: Pagination,
}

impl ListState {
    pub fn new(page_size: usize) -> Self {
        Self {
            records: Vec::new(),
            filters: FilterState::default(),
            pagination: Pagination::new(page_size),
        }
    }

    pub fn records(&self) -> &[Product] {
        &self.records
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    pub fn projection(&self) -> Projection<'_> {
        project(&self.records, &self.filters, &self.pagination)
    }

    pub fn summary(&self) -> StockSummary {
        StockSummary::of(&self.records)
    }

    pub fn categories(&self) -> Vec<String> {
        categories(&self.records)
    }

    pub fn find(&self, id: &ProductId) -> Option<&Product> {
        self.records.iter().find(|product| &product.id == id)
    }

    /// Replaces the record set with a fresh listing from the store.
    pub fn replace_records(&mut self, records: Vec<Product>) {
        self.records = records;
        self.clamp_page();
    }

    /// Drops exactly the product with `id`, if present.
    pub fn remove(&mut self, id: &ProductId) -> Option<Product> {
        let index = self.records.iter().position(|product| &product.id == id)?;
        let removed = self.records.remove(index);
        self.clamp_page();
        Some(removed)
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.filters.search = search.into();
        self.pagination.set_page(1);
    }

    /// An empty category clears the filter.
    pub fn set_category(&mut self, category: Option<String>) {
        self.filters.category = category.filter(|category| !category.is_empty());
        self.pagination.set_page(1);
    }

    pub fn set_stock_filter(&mut self, stock: Option<StockFilter>) {
        self.filters.stock = stock;
        self.pagination.set_page(1);
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.pagination.set_page_size(page_size);
    }

    pub fn clear_filters(&mut self) {
        self.filters = FilterState::default();
        self.pagination.set_page(1);
    }

    /// Moves to `page` if it exists. Page 1 always exists, even with no matches.
    pub fn go_to_page(&mut self, page: usize) -> bool {
        let last = self.projection().total_pages.max(1);
        if (1..=last).contains(&page) {
            self.pagination.set_page(page);
            true
        } else {
            false
        }
    }

    pub fn next_page(&mut self) -> bool {
        self.go_to_page(self.pagination.current_page() + 1)
    }

    pub fn previous_page(&mut self) -> bool {
        match self.pagination.current_page() {
            1 => false,
            page => self.go_to_page(page - 1),
        }
    }

    // Removing records can leave the current page past the end.
    fn clamp_page(&mut self) {
        let last = self.projection().total_pages.max(1);
        if self.pagination.current_page() > last {
            self.pagination.set_page(last);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn twelve() -> Vec<Product> {
        (1..=12)
            .map(|n| {
                let stock = if n == 3 || n == 8 { 0 } else { n * 5 };
                Product::new(format!("p{n}"), format!("Item {n}"), "Other", 10.0, stock)
            })
            .collect()
    }

    fn paged_to_two() -> ListState {
        let mut state = ListState::new(10);
        state.replace_records(twelve());
        assert!(state.go_to_page(2));
        state
    }

    #[test]
    fn twelve_records_over_two_pages() {
        let mut state = ListState::new(10);
        state.replace_records(twelve());

        let first = state.projection();
        assert_eq!(first.items.len(), 10);
        assert_eq!(first.total_pages, 2);

        assert!(state.next_page());
        assert_eq!(state.projection().items.len(), 2);
        assert!(!state.next_page());
    }

    #[test]
    fn out_of_stock_filter_yields_one_page() {
        let mut state = ListState::new(10);
        state.replace_records(twelve());
        state.set_stock_filter(Some(StockFilter::OutOfStock));

        let projection = state.projection();
        assert_eq!(projection.match_count, 2);
        assert_eq!(projection.total_pages, 1);
    }

    #[test]
    fn every_filter_change_resets_page() {
        let mut state = paged_to_two();
        state.set_search("item");
        assert_eq!(state.pagination().current_page(), 1);

        let mut state = paged_to_two();
        state.set_category(Some("Other".into()));
        assert_eq!(state.pagination().current_page(), 1);

        let mut state = paged_to_two();
        state.set_stock_filter(Some(StockFilter::InStock));
        assert_eq!(state.pagination().current_page(), 1);

        let mut state = paged_to_two();
        state.set_page_size(5);
        assert_eq!(state.pagination().current_page(), 1);
        assert_eq!(state.pagination().page_size(), 5);

        let mut state = paged_to_two();
        state.clear_filters();
        assert_eq!(state.pagination().current_page(), 1);
    }

    #[test]
    fn clear_resets_all_filters_together() {
        let mut state = ListState::new(10);
        state.set_search("x");
        state.set_category(Some("Books".into()));
        state.set_stock_filter(Some(StockFilter::LowStock));
        state.clear_filters();
        assert_eq!(state.filters(), &FilterState::default());
    }

    #[test]
    fn empty_category_means_no_filter() {
        let mut state = ListState::new(10);
        state.set_category(Some(String::new()));
        assert_eq!(state.filters().category, None);
    }

    #[test]
    fn rejects_pages_that_do_not_exist() {
        let mut state = ListState::new(10);
        assert!(state.go_to_page(1));
        assert!(!state.go_to_page(2));
        assert!(!state.go_to_page(0));
        assert!(!state.previous_page());
    }

    #[test]
    fn remove_drops_one_record_and_keeps_page_valid() {
        let mut state = paged_to_two();
        assert_eq!(state.summary().total, 12);

        state.remove(&ProductId::from("p11")).unwrap();
        state.remove(&ProductId::from("p12")).unwrap();
        assert_eq!(state.summary().total, 10);
        assert_eq!(state.pagination().current_page(), 1);
        assert!(state.find(&ProductId::from("p11")).is_none());

        assert!(state.remove(&ProductId::from("missing")).is_none());
        assert_eq!(state.records().len(), 10);
    }
}
