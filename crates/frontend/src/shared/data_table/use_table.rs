use super::fetch::{fetch_page, FetchError, HttpClient, HttpMethod, Transport};
use super::selection::SelectType;
use super::table_state::{PendingQuery, QueryOutcome, TableState};
use super::RowRecord;
use crate::shared::config::use_config;
use crate::shared::notify::NotificationService;
use contracts::shared::envelope::TableResponse;
use contracts::shared::pagination::Pagination;
use contracts::shared::query::QueryParams;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use serde::de::DeserializeOwned;
use std::future::Future;
use wasm_bindgen_futures::spawn_local;

/// Reactive wrapper around [`TableState`] for one list page.
pub struct TableHandle<T: Send + Sync + 'static> {
    state: RwSignal<TableState<T>>,
    client: StoredValue<HttpClient>,
    grace_delay_ms: u32,
    notify: Option<NotificationService>,
}

impl<T: Send + Sync + 'static> Clone for TableHandle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for TableHandle<T> {}

/// Creates the table controller for `path`.
///
/// Nothing is fetched until the page calls [`TableHandle::on_search`] or one
/// of the other query entry points.
pub fn use_table<T>(path: impl Into<String>, method: HttpMethod) -> TableHandle<T>
where
    T: RowRecord + DeserializeOwned,
{
    let config = use_config();
    TableHandle {
        state: RwSignal::new(TableState::new(
            path,
            method,
            config.table.default_page_size,
        )),
        client: StoredValue::new(HttpClient::from_context()),
        grace_delay_ms: config.table.grace_delay_ms,
        notify: use_context::<NotificationService>(),
    }
}

/// Runs one query against `state`: fetch, wait out `grace` with the loading
/// flag still set, then settle. `on_error` sees failures of the current query
/// only; superseded responses are dropped silently.
pub(crate) async fn settle_query<T, C, G>(
    client: &C,
    state: RwSignal<TableState<T>>,
    query: PendingQuery,
    grace: G,
    on_error: impl FnOnce(&FetchError),
) -> Option<TableResponse<T>>
where
    T: Clone + DeserializeOwned + Send + Sync + 'static,
    C: Transport,
    G: Future<Output = ()>,
{
    let result = fetch_page::<T, _>(client, query.method, &query.path, &query.params).await;
    grace.await;
    let outcome = state.try_update(|s| s.finish_query(query.seq, result))?;
    if let QueryOutcome::Failed(e) = &outcome {
        on_error(e);
    }
    outcome.into_response()
}

impl<T> TableHandle<T>
where
    T: RowRecord + DeserializeOwned,
{
    pub fn state(&self) -> RwSignal<TableState<T>> {
        self.state
    }

    pub fn loading(&self) -> bool {
        self.state.with(|s| s.loading())
    }

    pub fn data(&self) -> Vec<T> {
        self.state.with(|s| s.data_source().to_vec())
    }

    pub fn pagination(&self) -> Pagination {
        self.state.with(|s| s.pagination())
    }

    pub fn selected_row_keys(&self) -> Vec<String> {
        self.state
            .with(|s| s.selection().selected_row_keys().to_vec())
    }

    pub fn selected_rows(&self) -> Vec<T> {
        self.state.with(|s| s.selection().selected_rows().to_vec())
    }

    pub fn is_selected(&self, key: &str) -> bool {
        self.state.with(|s| s.selection().contains(key))
    }

    pub fn all_selected(&self) -> bool {
        self.state.with(|s| {
            !s.data_source().is_empty()
                && s
                    .data_source()
                    .iter()
                    .all(|r| s.selection().contains(&r.row_key()))
        })
    }

    async fn run(self, query: PendingQuery) -> Option<TableResponse<T>> {
        let client = self.client.get_value();
        let delay = self.grace_delay_ms;
        let notify = self.notify;
        let grace = async move {
            if delay > 0 {
                TimeoutFuture::new(delay).await;
            }
        };
        settle_query(&client, self.state, query, grace, |e| {
            if let Some(notify) = notify {
                notify.error(e.to_string());
            }
        })
        .await
    }

    /// Queries with the stored filters overlaid by `extra` and `pagination`.
    ///
    /// Resolves with the response, or `None` on failure or when a newer
    /// query superseded this one.
    pub async fn query_table_data(
        self,
        extra: Option<QueryParams>,
        pagination: Option<Pagination>,
    ) -> Option<TableResponse<T>> {
        let query = self.state.try_update(|s| s.begin_query(extra, pagination))?;
        self.run(query).await
    }

    fn spawn(self, query: Option<PendingQuery>) {
        if let Some(query) = query {
            spawn_local(async move {
                let _ = self.run(query).await;
            });
        }
    }

    pub fn on_page_change(self, page: u32) {
        self.spawn(self.state.try_update(|s| s.on_page_change(page)));
    }

    pub fn on_page_size_change(self, page_size: u32) {
        self.spawn(self.state.try_update(|s| s.on_page_size_change(page_size)));
    }

    pub fn on_search(self, filters: Option<QueryParams>) {
        self.spawn(self.state.try_update(|s| s.on_search(filters)));
    }

    pub fn on_set_data_source(&self, rows: Vec<T>) {
        self.state.update(|s| s.on_set_data_source(rows));
    }

    pub fn on_select_change(&self, keys: Vec<String>, rows: Vec<T>, info: SelectType) {
        self.state.update(|s| s.on_select_change(keys, rows, info));
    }

    pub fn clear_selection(&self) {
        self.on_select_change(Vec::new(), Vec::new(), SelectType::None);
    }

    /// Adds or removes one row from the selection.
    pub fn toggle_row(&self, row: &T) {
        let key = row.row_key();
        let (keys, rows) = self.state.with_untracked(|s| s.selection().toggled(&key, row));
        self.on_select_change(keys, rows, SelectType::Single);
    }

    /// Selects every row on the page, or none if all are already selected.
    pub fn toggle_all(&self) {
        let all_selected = untrack(|| self.all_selected());
        let rows = self.state.with_untracked(|s| s.data_source().to_vec());
        if all_selected {
            self.on_select_change(Vec::new(), Vec::new(), SelectType::None);
        } else {
            let keys = rows.iter().map(RowRecord::row_key).collect();
            self.on_select_change(keys, rows, SelectType::All);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data_table::fetch::tests::MockTransport;
    use futures::executor::block_on;
    use std::cell::{Cell, RefCell};

    fn table() -> RwSignal<TableState<u32>> {
        RwSignal::new(TableState::new("/x/page", HttpMethod::Get, 10))
    }

    #[test]
    fn test_failed_query_reports_after_grace() {
        let state = table();
        let query = state.try_update(|s| s.on_search(None)).unwrap();
        let transport = MockTransport::default().fail(FetchError::Network("offline".into()));
        let loading_during_grace = Cell::new(false);
        let errors = RefCell::new(Vec::new());

        let grace = async {
            loading_during_grace.set(state.with_untracked(|s| s.loading()));
        };
        let response = block_on(settle_query(&transport, state, query, grace, |e| {
            errors.borrow_mut().push(e.to_string())
        }));

        assert!(response.is_none());
        assert!(loading_during_grace.get());
        assert!(!state.with_untracked(|s| s.loading()));
        let errors = errors.into_inner();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("offline"));
    }

    #[test]
    fn test_superseded_failure_is_not_reported() {
        let state = table();
        let first = state.try_update(|s| s.on_search(None)).unwrap();
        let _second = state.try_update(|s| s.on_search(None)).unwrap();
        let transport = MockTransport::default().fail(FetchError::Network("offline".into()));
        let reported = Cell::new(false);

        let response = block_on(settle_query(&transport, state, first, async {}, |_| {
            reported.set(true)
        }));

        assert!(response.is_none());
        assert!(!reported.get());
        // the newer query is still in flight
        assert!(state.with_untracked(|s| s.loading()));
    }
}
