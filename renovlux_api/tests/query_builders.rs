use renovlux_api::{ListQuery, PaginationOptions, Query, SearchQuery, SortOrder};
use url::Url;

fn base_url() -> Url {
    Url::parse("https://example.com/api/projects").unwrap()
}

#[test]
fn list_query_defaults_to_no_params() {
    let url = ListQuery::default().add_to_url(&base_url());
    assert!(url.query().is_none());
}

#[test]
fn list_query_category_with_spaces() {
    let url = ListQuery::default()
        .with_category("Salle de bain")
        .add_to_url(&base_url());
    assert_eq!(url.query(), Some("category=Salle+de+bain"));
}

#[test]
fn list_query_trims_values() {
    let pairs = ListQuery::default()
        .with_search("  villa  ")
        .with_sort_by(" title ")
        .query_pairs();
    assert_eq!(
        pairs,
        vec![
            ("search".to_string(), "villa".to_string()),
            ("sortBy".to_string(), "title".to_string()),
        ]
    );
}

#[test]
fn list_query_param_order_is_stable() {
    let query = ListQuery {
        pagination: PaginationOptions::new(3, 6),
        ..Default::default()
    }
    .with_sort_order(SortOrder::Asc)
    .with_category("Commercial");
    let url = query.add_to_url(&base_url());
    assert_eq!(
        url.query(),
        Some("category=Commercial&sortOrder=asc&page=3&limit=6")
    );
}

#[test]
fn list_query_from_query_pairs() {
    let url = Url::parse(
        "https://renovlux.example/boutique?category=Plomberie&sortOrder=ASC&page=2&limit=x&utm=1&search=",
    )
    .unwrap();
    let query = ListQuery::from_query_pairs(url.query_pairs());
    assert_eq!(query.filter.category.as_deref(), Some("Plomberie"));
    assert_eq!(query.filter.sort_order, Some(SortOrder::Asc));
    assert_eq!(query.pagination.page, Some(2));
    assert_eq!(query.pagination.limit, None);
    assert_eq!(query.filter.search, None);
}

#[test]
fn from_query_pairs_inverts_query_pairs() {
    let query = ListQuery::default()
        .with_category("Cuisine")
        .with_search("marbre")
        .with_sort_by("price")
        .with_sort_order(SortOrder::Desc)
        .with_page(4)
        .with_limit(24);
    assert_eq!(ListQuery::from_query_pairs(query.query_pairs()), query);
}

#[test]
fn search_query_is_trimmed() {
    let url = SearchQuery::new("  douche  ").add_to_url(&base_url());
    assert_eq!(url.query(), Some("q=douche"));
    assert!(SearchQuery::new("\t").is_blank());
}
