use super::common::Query;

/// Free-text product search, sent as `?q=`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchQuery {
    pub q: String,
}

impl SearchQuery {
    pub fn new(q: &str) -> Self {
        Self { q: q.to_string() }
    }

    pub fn is_blank(&self) -> bool {
        self.q.trim().is_empty()
    }
}

impl Query for SearchQuery {
    fn query_pairs(&self) -> Vec<(String, String)> {
        if self.is_blank() {
            return Vec::new();
        }
        vec![("q".to_string(), self.q.trim().to_string())]
    }
}
