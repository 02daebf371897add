//! Catalog query inputs and the page they produce.

use super::product::Product;

/// Field the catalog sorts on whenever sorting is active.
pub const SORT_FIELD: &str = "price";

/// Price sort order, cycled by the sort control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortDirection {
    #[default]
    None,
    Ascending,
    Descending,
}

impl SortDirection {
    /// Next state of the sort control: none → ascending → descending → none.
    pub fn next(self) -> Self {
        match self {
            SortDirection::None => SortDirection::Ascending,
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::None,
        }
    }

    /// Value of the `order` query parameter, if sorting is active.
    pub fn as_order(self) -> Option<&'static str> {
        match self {
            SortDirection::None => None,
            SortDirection::Ascending => Some("asc"),
            SortDirection::Descending => Some("desc"),
        }
    }
}

/// Search term and sort order the displayed list was fetched with.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CatalogFilter {
    search_term: String,
    sort: SortDirection,
}

impl CatalogFilter {
    pub fn new(search_term: &str, sort: SortDirection) -> Self {
        Self {
            search_term: search_term.trim().to_string(),
            sort,
        }
    }

    /// Trimmed search term; empty means no filter.
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn sort(&self) -> SortDirection {
        self.sort
    }

    pub fn with_search_term(&self, search_term: &str) -> Self {
        Self::new(search_term, self.sort)
    }

    pub fn with_sort(&self, sort: SortDirection) -> Self {
        Self {
            search_term: self.search_term.clone(),
            sort,
        }
    }
}

/// One `GET /api/products` request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub limit: u32,
    pub filter: CatalogFilter,
}

impl PageRequest {
    pub fn new(page: u32, limit: u32, filter: CatalogFilter) -> Self {
        Self {
            page: page.max(1),
            limit: limit.max(1),
            filter,
        }
    }

    /// Query parameters in wire order.
    ///
    /// `name` only when a search term is set; `sortBy`/`order` only when a
    /// sort direction is active.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("page", self.page.to_string()),
            ("limit", self.limit.to_string()),
        ];
        if !self.filter.search_term().is_empty() {
            pairs.push(("name", self.filter.search_term().to_string()));
        }
        if let Some(order) = self.filter.sort().as_order() {
            pairs.push(("sortBy", SORT_FIELD.to_string()));
            pairs.push(("order", order.to_string()));
        }
        pairs
    }
}

/// A page of results plus the server's pagination verdict.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProductPage {
    pub items: Vec<Product>,
    pub has_next_page: bool,
}

impl ProductPage {
    pub fn new(items: Vec<Product>, has_next_page: bool) -> Self {
        Self {
            items,
            has_next_page,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_cycles_through_three_states() {
        let mut sort = SortDirection::default();
        assert_eq!(sort, SortDirection::None);
        sort = sort.next();
        assert_eq!(sort, SortDirection::Ascending);
        sort = sort.next();
        assert_eq!(sort, SortDirection::Descending);
        sort = sort.next();
        assert_eq!(sort, SortDirection::None);
    }

    #[test]
    fn filter_trims_search_term() {
        let filter = CatalogFilter::new("  shoe ", SortDirection::None);
        assert_eq!(filter.search_term(), "shoe");
        assert_eq!(filter, CatalogFilter::new("shoe", SortDirection::None));
    }

    #[test]
    fn plain_request_has_only_paging() {
        let request = PageRequest::new(1, 10, CatalogFilter::default());
        assert_eq!(
            request.query_pairs(),
            vec![("page", "1".to_string()), ("limit", "10".to_string())]
        );
    }

    #[test]
    fn search_and_sort_add_parameters() {
        let request = PageRequest::new(2, 10, CatalogFilter::new("shoe", SortDirection::Descending));
        assert_eq!(
            request.query_pairs(),
            vec![
                ("page", "2".to_string()),
                ("limit", "10".to_string()),
                ("name", "shoe".to_string()),
                ("sortBy", "price".to_string()),
                ("order", "desc".to_string()),
            ]
        );
    }

    #[test]
    fn whitespace_search_is_no_filter() {
        let request = PageRequest::new(1, 10, CatalogFilter::new("   ", SortDirection::Ascending));
        let keys: Vec<&str> = request.query_pairs().iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, vec!["page", "limit", "sortBy", "order"]);
    }

    #[test]
    fn page_and_limit_are_positive() {
        let request = PageRequest::new(0, 0, CatalogFilter::default());
        assert_eq!(request.page, 1);
        assert_eq!(request.limit, 1);
    }
}
