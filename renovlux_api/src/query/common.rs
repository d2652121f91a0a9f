//! Shared query infrastructure: the [`Query`] trait, [`SortOrder`], and [`PaginationOptions`].

use std::str::FromStr;

use url::Url;

/// Trait implemented by all query builders. Provides URL serialization from
/// a flat list of string pairs.
pub trait Query {
    /// The non-empty parameters of this query, in a stable order.
    fn query_pairs(&self) -> Vec<(String, String)>;

    /// Appends this query's parameters to the given URL, returning the modified URL.
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        let pairs = self.query_pairs();
        if !pairs.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        }
        url
    }
}

/// Sort order for list endpoints.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    /// Newest first. This is the catalog default.
    #[default]
    Desc,
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        })
    }
}

impl FromStr for SortOrder {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            _ => Err(()),
        }
    }
}

/// Page number and page size. Zero values are treated as absent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PaginationOptions {
    /// Page number (1-indexed).
    pub page: Option<u32>,
    /// Results per page.
    pub limit: Option<u32>,
}

impl PaginationOptions {
    pub fn new(page: u32, limit: u32) -> Self {
        Self {
            page: Some(page),
            limit: Some(limit),
        }
    }

    /// Appends `page` and `limit` as decimal strings, skipping absent or zero values.
    pub fn append_pairs(&self, pairs: &mut Vec<(String, String)>) {
        if let Some(page) = self.page.filter(|p| *p > 0) {
            pairs.push(("page".to_string(), page.to_string()));
        }
        if let Some(limit) = self.limit.filter(|l| *l > 0) {
            pairs.push(("limit".to_string(), limit.to_string()));
        }
    }
}
