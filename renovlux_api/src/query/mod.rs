mod common;
pub use self::common::{PaginationOptions, Query, SortOrder};

mod list;
pub use self::list::{FilterOptions, ListQuery};

mod search;
pub use self::search::SearchQuery;
