//! Fetch state and its reducer, shared by the hooks and the app store.
//!
//! Every fetch cycle carries a generation number. A cycle's result is only
//! applied while it is the latest started one and nothing newer has settled,
//! so a slow response can never overwrite fresher data.

use renovlux_api::types::PageInfo;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FetchState<T> {
    /// Empty list or `None` until a fetch succeeds. Kept across failures.
    pub data: T,
    pub loading: bool,
    /// Display message of the last failure.
    pub error: Option<String>,
    pub pagination: Option<PageInfo>,
    /// Latest generation started.
    pub generation: u64,
    /// Latest generation that finished, failed, or was cleared.
    pub settled: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FetchAction<T> {
    Started {
        generation: u64,
    },
    Loaded {
        generation: u64,
        data: T,
        pagination: Option<PageInfo>,
    },
    Failed {
        generation: u64,
        error: String,
    },
    /// Settles `generation` with empty data without any fetch (blank search).
    Cleared {
        generation: u64,
    },
    ClearError,
    /// Back to the initial state. Cycles still in flight are discarded.
    Reset,
}

impl<T: Default> FetchState<T> {
    pub fn reduce(mut self, action: FetchAction<T>) -> Self {
        match action {
            FetchAction::Started { generation } => {
                if generation <= self.generation {
                    return self;
                }
                self.generation = generation;
                self.loading = true;
                self.error = None;
            }
            FetchAction::Loaded {
                generation,
                data,
                pagination,
            } => {
                if !self.accepts(generation) {
                    tracing::debug!("Discarding stale result of generation {}", generation);
                    return self;
                }
                self.data = data;
                self.pagination = pagination;
                self.loading = false;
                self.error = None;
                self.settled = generation;
            }
            FetchAction::Failed { generation, error } => {
                if !self.accepts(generation) {
                    tracing::debug!("Discarding stale failure of generation {}", generation);
                    return self;
                }
                self.loading = false;
                self.error = Some(error);
                self.settled = generation;
            }
            FetchAction::Cleared { generation } => {
                if generation < self.generation {
                    return self;
                }
                self.data = T::default();
                self.pagination = None;
                self.loading = false;
                self.error = None;
                self.generation = generation;
                self.settled = generation;
            }
            FetchAction::ClearError => self.error = None,
            FetchAction::Reset => {
                return Self {
                    generation: self.generation,
                    settled: self.generation,
                    ..Self::default()
                };
            }
        }
        self
    }

    fn accepts(&self, generation: u64) -> bool {
        generation == self.generation && generation > self.settled
    }
}

impl<T> FetchState<T> {
    /// No cycle is in flight.
    pub fn is_idle(&self) -> bool {
        self.settled >= self.generation
    }
}
