//! Pagination and query controller for a list page.
//!
//! `TableState` is plain data; [`super::use_table`] wraps it in a signal and
//! drives the network round trip. Every query is split into
//! [`TableState::begin_query`], which builds the request and bumps the
//! sequence number, and [`TableState::finish_query`], which applies the
//! result only if it belongs to the latest query.

use super::fetch::{FetchError, HttpMethod};
use super::selection::{SelectType, SelectionState};
use contracts::shared::envelope::{PageData, TableResponse};
use contracts::shared::pagination::Pagination;
use contracts::shared::query::QueryParams;
use std::sync::Arc;

pub type ResponseTransform<T> = Arc<dyn Fn(PageData<T>) -> PageData<T> + Send + Sync>;

/// A request ready to be sent.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingQuery {
    pub seq: u64,
    pub method: HttpMethod,
    pub path: String,
    pub params: QueryParams,
}

#[derive(Debug, Clone, PartialEq)]
pub enum QueryOutcome<T> {
    Applied(TableResponse<T>),
    Failed(FetchError),
    /// A newer query was started before this one resolved.
    Stale,
}

impl<T> QueryOutcome<T> {
    pub fn into_response(self) -> Option<TableResponse<T>> {
        match self {
            QueryOutcome::Applied(response) => Some(response),
            _ => None,
        }
    }
}

pub struct TableState<T> {
    path: String,
    method: HttpMethod,
    loading: bool,
    data_source: Vec<T>,
    pagination: Pagination,
    params: QueryParams,
    selection: SelectionState<T>,
    seq: u64,
    generation: u64,
    transform: Option<ResponseTransform<T>>,
}

impl<T> TableState<T> {
    pub fn new(path: impl Into<String>, method: HttpMethod, page_size: u32) -> Self {
        Self {
            path: path.into(),
            method,
            loading: false,
            data_source: Vec::new(),
            pagination: Pagination::new(1, page_size),
            params: QueryParams::new(),
            selection: SelectionState::default(),
            seq: 0,
            generation: 0,
            transform: None,
        }
    }

    pub fn with_params(mut self, params: QueryParams) -> Self {
        self.params = params;
        self
    }

    pub fn with_transform(
        mut self,
        transform: impl Fn(PageData<T>) -> PageData<T> + Send + Sync + 'static,
    ) -> Self {
        self.transform = Some(Arc::new(transform));
        self
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn data_source(&self) -> &[T] {
        &self.data_source
    }

    pub fn pagination(&self) -> Pagination {
        self.pagination
    }

    pub fn params(&self) -> &QueryParams {
        &self.params
    }

    pub fn selection(&self) -> &SelectionState<T> {
        &self.selection
    }

    pub fn method(&self) -> HttpMethod {
        self.method
    }

    /// Bumped whenever the cached rows are replaced.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Starts a query.
    ///
    /// Parameters are the stored filters, overlaid with `extra` (which is
    /// also persisted), overlaid with `current`/`size` from `pagination` or
    /// the current state.
    pub fn begin_query(
        &mut self,
        extra: Option<QueryParams>,
        pagination: Option<Pagination>,
    ) -> PendingQuery {
        if let Some(extra) = extra {
            self.params.merge(&extra);
        }
        let pagination = pagination.unwrap_or(self.pagination);
        self.seq += 1;
        self.loading = true;
        PendingQuery {
            seq: self.seq,
            method: self.method,
            path: self.path.clone(),
            params: self.params.with_pagination(&pagination),
        }
    }

    /// Applies the result of query `seq`.
    pub fn finish_query(
        &mut self,
        seq: u64,
        result: Result<TableResponse<T>, FetchError>,
    ) -> QueryOutcome<T>
    where
        T: Clone,
    {
        if seq != self.seq {
            log::debug!("dropping response {} superseded by {}", seq, self.seq);
            return QueryOutcome::Stale;
        }
        self.loading = false;
        match result {
            Ok(mut response) => {
                let mut page = response.data.take().unwrap_or_default();
                if let Some(transform) = &self.transform {
                    page = transform(page);
                }
                self.data_source = page.records.clone();
                self.generation += 1;
                self.pagination = self.pagination.with_total(page.total.unwrap_or(0));
                self.selection.clear();
                response.data = Some(page);
                QueryOutcome::Applied(response)
            }
            Err(e) => {
                log::error!("{} {} failed: {}", self.method.as_str(), self.path, e);
                QueryOutcome::Failed(e)
            }
        }
    }

    pub fn on_page_change(&mut self, page: u32) -> PendingQuery {
        self.pagination = self.pagination.with_current(page);
        let pagination = self.pagination;
        self.begin_query(None, Some(pagination))
    }

    /// Changes the page size; the current page is kept.
    pub fn on_page_size_change(&mut self, page_size: u32) -> PendingQuery {
        self.pagination = self.pagination.with_page_size(page_size);
        let pagination = self.pagination;
        self.begin_query(None, Some(pagination))
    }

    /// Searches with `filters` from the first page.
    pub fn on_search(&mut self, filters: Option<QueryParams>) -> PendingQuery {
        self.pagination = self.pagination.with_current(1);
        let pagination = self.pagination;
        self.begin_query(filters, Some(pagination))
    }

    pub fn on_set_data_source(&mut self, rows: Vec<T>) {
        self.data_source = rows;
        self.generation += 1;
    }

    pub fn on_select_change(&mut self, keys: Vec<String>, rows: Vec<T>, info: SelectType) {
        self.selection.on_select_change(keys, rows, info);
    }
}
