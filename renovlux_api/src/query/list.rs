use crate::types::PageInfo;

use super::common::{PaginationOptions, Query, SortOrder};

/// Catalog filters shared by the portfolio and product list endpoints.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterOptions {
    pub category: Option<String>,
    pub search: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<SortOrder>,
}

/// Filters plus pagination, serialized into one flat parameter map.
///
/// Absent or blank values never reach the URL.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListQuery {
    pub filter: FilterOptions,
    pub pagination: PaginationOptions,
}

impl Query for ListQuery {
    fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        push_text(&mut pairs, "category", self.filter.category.as_deref());
        push_text(&mut pairs, "search", self.filter.search.as_deref());
        push_text(&mut pairs, "sortBy", self.filter.sort_by.as_deref());
        if let Some(order) = self.filter.sort_order {
            pairs.push(("sortOrder".to_string(), order.to_string()));
        }
        self.pagination.append_pairs(&mut pairs);
        pairs
    }
}

fn push_text(pairs: &mut Vec<(String, String)>, key: &str, value: Option<&str>) {
    if let Some(value) = value.map(str::trim).filter(|v| !v.is_empty()) {
        pairs.push((key.to_string(), value.to_string()));
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

impl ListQuery {
    /// Rebuilds a query from decoded URL parameters. Unknown keys, blank
    /// values and unparsable numbers are ignored; the last occurrence wins.
    pub fn from_query_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut query = ListQuery::default();
        for (key, value) in pairs {
            let value = value.as_ref();
            match key.as_ref() {
                "category" => query.filter.category = non_blank(value),
                "search" => query.filter.search = non_blank(value),
                "sortBy" => query.filter.sort_by = non_blank(value),
                "sortOrder" => query.filter.sort_order = value.parse().ok(),
                "page" => query.pagination.page = value.trim().parse().ok().filter(|p| *p > 0),
                "limit" => query.pagination.limit = value.trim().parse().ok().filter(|l| *l > 0),
                _ => {}
            }
        }
        query
    }

    pub fn with_category(mut self, category: &str) -> Self {
        self.filter.category = Some(category.to_string());
        self
    }

    pub fn with_search(mut self, search: &str) -> Self {
        self.filter.search = Some(search.to_string());
        self
    }

    pub fn with_sort_by(mut self, sort_by: &str) -> Self {
        self.filter.sort_by = Some(sort_by.to_string());
        self
    }

    pub fn with_sort_order(mut self, sort_order: SortOrder) -> Self {
        self.filter.sort_order = Some(sort_order);
        self
    }

    /// Sets the page number (1-indexed).
    pub fn with_page(mut self, page: u32) -> Self {
        self.pagination.page = Some(page);
        self
    }

    /// Sets the number of results per page.
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.pagination.limit = Some(limit);
        self
    }

    /// Pagination derived from the number of items a page returned, for
    /// backends that do not report totals. Only an approximation: it cannot
    /// see items beyond the current page.
    pub fn local_page_info(&self, returned: usize) -> Option<PageInfo> {
        let page = self.pagination.page.filter(|p| *p > 0)?;
        let limit = self.pagination.limit.filter(|l| *l > 0)?;
        Some(PageInfo::compute(page, limit, returned as u64))
    }
}

#[cfg(test)]
mod tests {
    use url::Url;

    use super::*;

    #[test]
    fn test_list_query() {
        let url = Url::parse("https://example.com/api/products").unwrap();

        insta::assert_snapshot!(ListQuery::default()
            .with_category("Cuisine")
            .with_search("plan de travail")
            .with_sort_by("createdAt")
            .with_sort_order(SortOrder::Desc)
            .with_page(2)
            .with_limit(12)
            .add_to_url(&url)
            .to_string(), @"https://example.com/api/products?category=Cuisine&search=plan+de+travail&sortBy=createdAt&sortOrder=desc&page=2&limit=12");

        insta::assert_snapshot!(ListQuery::default()
            .add_to_url(&url)
            .to_string(), @"https://example.com/api/products");
    }

    #[test]
    fn blank_values_are_omitted() {
        let pairs = ListQuery::default()
            .with_category("   ")
            .with_search("")
            .with_limit(0)
            .query_pairs();
        assert!(pairs.is_empty());
    }

    #[test]
    fn local_page_info_requires_page_and_limit() {
        assert!(ListQuery::default().with_limit(6).local_page_info(6).is_none());
        let info = ListQuery::default()
            .with_page(1)
            .with_limit(4)
            .local_page_info(10)
            .unwrap();
        assert_eq!(info.total_pages, 3);
        assert_eq!(info.total, 10);
    }
}
