//! REST resource plumbing for the list pages: mutations against
//! `{base}/add`, `{base}/update`, `{base}/{id}` and the enable/disable
//! endpoints, plus [`CrudPage`], which ties them to a table, the form dialog,
//! confirmations and toasts.

use super::fetch::{send, FetchError, HttpClient, HttpMethod, Payload, Transport};
use super::form::{FormBinding, FormMode};
use super::modal::{use_modal, ModalOptions, Modals};
use super::operations::OperationItem;
use super::use_table::{use_table, TableHandle};
use super::RowRecord;
use crate::shared::confirm::{use_confirm, ConfirmService};
use crate::shared::export::{export_csv, CsvExport};
use crate::shared::notify::{use_notify, NotificationService};
use leptos::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use wasm_bindgen_futures::spawn_local;

/// Id of the create/edit/detail dialog every page registers.
pub const FORM_MODAL: &str = "form";
pub const FORM_MODAL_WIDTH: u32 = 720;

pub trait Resource: RowRecord + Serialize + DeserializeOwned + Default {
    /// REST prefix, e.g. `/simcard/supplier`.
    const BASE_PATH: &'static str;
    const PAGE_METHOD: HttpMethod = HttpMethod::Get;
    /// Noun used in dialog titles.
    const NOUN: &'static str;

    fn id(&self) -> Option<i64>;

    fn validate(&self) -> Result<(), String>;

    /// Record the create dialog starts from.
    fn blank() -> Self {
        Self::default()
    }
}

pub fn page_path<T: Resource>() -> String {
    format!("{}/page", T::BASE_PATH)
}

fn json_body<T: Serialize>(record: &T) -> Result<Payload, FetchError> {
    serde_json::to_value(record)
        .map(Payload::Json)
        .map_err(|e| FetchError::Decode(e.to_string()))
}

pub async fn create<T: Resource, C: Transport>(client: &C, record: &T) -> Result<(), FetchError> {
    let path = format!("{}/add", T::BASE_PATH);
    send::<Value, _>(client, HttpMethod::Post, &path, json_body(record)?).await?;
    Ok(())
}

pub async fn update<T: Resource, C: Transport>(client: &C, record: &T) -> Result<(), FetchError> {
    let path = format!("{}/update", T::BASE_PATH);
    send::<Value, _>(client, HttpMethod::Put, &path, json_body(record)?).await?;
    Ok(())
}

/// Confirmed single-row actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    Delete,
    Enable,
    Disable,
}

impl RowAction {
    pub fn key(self) -> &'static str {
        match self {
            Self::Delete => "DELETE",
            Self::Enable => "ENABLE",
            Self::Disable => "DISABLE",
        }
    }

    pub fn parse(key: &str) -> Option<Self> {
        [Self::Delete, Self::Enable, Self::Disable]
            .into_iter()
            .find(|a| a.key().eq_ignore_ascii_case(key))
    }

    /// Menu entry for the status toggles; `DELETE` is a default operation.
    pub fn item(self) -> OperationItem {
        match self {
            Self::Delete => OperationItem::new(self.key(), "Delete")
                .with_icon("delete")
                .danger(),
            Self::Enable => OperationItem::new(self.key(), "Enable").with_icon("enable"),
            Self::Disable => OperationItem::new(self.key(), "Disable")
                .with_icon("disable")
                .danger(),
        }
    }

    pub fn prompt(self) -> &'static str {
        match self {
            Self::Delete => "Are you sure you want to delete this record?",
            Self::Enable => "Are you sure you want to enable this record?",
            Self::Disable => "Are you sure you want to disable this record?",
        }
    }

    pub fn success_message(self) -> &'static str {
        match self {
            Self::Delete => "Deleted successfully",
            Self::Enable | Self::Disable => "Updated successfully",
        }
    }
}

pub async fn perform<T: Resource, C: Transport>(
    client: &C,
    action: RowAction,
    id: i64,
) -> Result<(), FetchError> {
    let (method, path) = match action {
        RowAction::Delete => (HttpMethod::Delete, format!("{}/{}", T::BASE_PATH, id)),
        RowAction::Enable => (HttpMethod::Put, format!("{}/enable/{}", T::BASE_PATH, id)),
        RowAction::Disable => (HttpMethod::Put, format!("{}/disable/{}", T::BASE_PATH, id)),
    };
    send::<Value, _>(client, method, &path, Payload::Empty).await?;
    Ok(())
}

/// Deletes `ids` one after another, stopping at the first failure.
/// Returns how many were deleted.
pub async fn delete_many<T: Resource, C: Transport>(
    client: &C,
    ids: &[i64],
) -> Result<usize, (usize, FetchError)> {
    for (done, id) in ids.iter().enumerate() {
        perform::<T, _>(client, RowAction::Delete, *id)
            .await
            .map_err(|e| (done, e))?;
    }
    Ok(ids.len())
}

/// Ids of the selected rows; rows without one are skipped.
pub fn selected_ids<T: Resource>(rows: &[T]) -> Vec<i64> {
    rows.iter().filter_map(Resource::id).collect()
}

fn batch_prompt(count: usize) -> String {
    format!("Are you sure you want to delete the {} selected records?", count)
}

type FormRenderer<T> = Arc<dyn Fn(FormBinding<T>) -> AnyView + Send + Sync>;

/// Everything a resource list page needs besides its columns.
pub struct CrudPage<T: Send + Sync + 'static> {
    pub table: TableHandle<T>,
    pub modals: Modals,
    record: RwSignal<T>,
    error: RwSignal<Option<String>>,
    render_form: StoredValue<FormRenderer<T>>,
    client: StoredValue<HttpClient>,
    notify: NotificationService,
    confirm: ConfirmService,
}

impl<T: Send + Sync + 'static> Clone for CrudPage<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for CrudPage<T> {}

/// `render_form` draws the record form for the shared dialog.
pub fn use_crud_page<T, V>(
    render_form: impl Fn(FormBinding<T>) -> V + Send + Sync + 'static,
) -> CrudPage<T>
where
    T: Resource,
    V: IntoView + 'static,
{
    let renderer: FormRenderer<T> = Arc::new(move |binding| render_form(binding).into_any());
    CrudPage {
        table: use_table(page_path::<T>(), T::PAGE_METHOD),
        modals: use_modal(&[FORM_MODAL]),
        record: RwSignal::new(T::blank()),
        error: RwSignal::new(None),
        render_form: StoredValue::new(renderer),
        client: StoredValue::new(HttpClient::from_context()),
        notify: use_notify(),
        confirm: use_confirm(),
    }
}

impl<T: Resource + CsvExport> CrudPage<T> {
    /// Downloads the selected rows as `{file_stem}.csv`.
    pub fn export_selected(self, file_stem: &'static str) {
        let rows = self.table.selected_rows();
        match export_csv(&rows, &format!("{}.csv", file_stem)) {
            Ok(()) => self.notify.success(format!("Exported {} records", rows.len())),
            Err(e) => self.notify.error(e.to_string()),
        }
    }

    pub fn on_export(self, file_stem: &'static str) -> Callback<()> {
        Callback::new(move |_| self.export_selected(file_stem))
    }
}

impl<T: Resource> CrudPage<T> {
    /// First query of the page.
    pub fn load(self) {
        self.table.on_search(None);
    }

    pub fn open_form(self, mode: FormMode, record: T) {
        self.record.set(record);
        self.error.set(None);
        let binding = FormBinding {
            record: self.record,
            error: self.error,
            mode,
        };
        let render_form = self.render_form;
        let mut options = ModalOptions::new(format!("{} {}", mode.title(), T::NOUN))
            .width(FORM_MODAL_WIDTH)
            .content(move || render_form.with_value(|render| render(binding)))
            .on_ok(Callback::new(move |_| self.submit(mode)))
            .on_cancel(Callback::new(move |_| self.reset_form()));
        if mode.read_only() {
            options = options.ok_text("Close");
        }
        self.modals.open_modal(FORM_MODAL, options);
    }

    pub fn open_create(self) {
        self.open_form(FormMode::Create, T::blank());
    }

    fn reset_form(self) {
        self.record.set(T::blank());
        self.error.set(None);
    }

    pub fn close_form(self) {
        self.modals.close_modal(FORM_MODAL);
        self.reset_form();
    }

    /// Validates and saves the dialog's record. Detail mode only closes.
    pub fn submit(self, mode: FormMode) {
        if mode.read_only() {
            self.close_form();
            return;
        }
        let record = self.record.get_untracked();
        if let Err(message) = record.validate() {
            self.error.set(Some(message));
            return;
        }
        spawn_local(async move {
            let client = self.client.get_value();
            let result = match mode {
                FormMode::Create => create(&client, &record).await,
                _ => update(&client, &record).await,
            };
            match result {
                Ok(()) => {
                    self.notify.success(mode.success_message());
                    self.close_form();
                    self.table.on_search(None);
                }
                Err(e) => {
                    self.error.set(Some(e.to_string()));
                    self.notify.error(e.to_string());
                }
            }
        });
    }

    /// Asks for confirmation, then runs `action` against `record`.
    pub fn confirm_action(self, action: RowAction, record: &T) {
        let Some(id) = record.id() else {
            log::warn!("{} {} without id", action.key(), T::NOUN);
            return;
        };
        self.confirm.confirm("Tips", action.prompt(), move || {
            spawn_local(async move {
                let client = self.client.get_value();
                match perform::<T, _>(&client, action, id).await {
                    Ok(()) => {
                        self.notify.success(action.success_message());
                        self.table.on_search(None);
                    }
                    Err(e) => self.notify.error(e.to_string()),
                }
            });
        });
    }

    /// Confirms, then deletes every selected row and reloads the page.
    pub fn confirm_batch_delete(self) {
        let ids = selected_ids(&self.table.selected_rows());
        if ids.is_empty() {
            self.notify.info("No records selected");
            return;
        }
        self.confirm.confirm("Tips", batch_prompt(ids.len()), move || {
            let ids = ids.clone();
            spawn_local(async move {
                let client = self.client.get_value();
                match delete_many::<T, _>(&client, &ids).await {
                    Ok(count) => self.notify.success(format!("Deleted {} records", count)),
                    Err((done, e)) => {
                        log::warn!("batch delete stopped after {} of {}", done, ids.len());
                        self.notify.error(e.to_string());
                    }
                }
                self.table.clear_selection();
                self.table.on_search(None);
            });
        });
    }

    /// Dispatches the operations every page shares. Returns `false` for keys
    /// the caller has to handle.
    pub fn handle_operation(self, key: &str, record: T) -> bool {
        if key.eq_ignore_ascii_case("EDIT") {
            self.open_form(FormMode::Update, record);
        } else if key.eq_ignore_ascii_case("DETAIL") {
            self.open_form(FormMode::Detail, record);
        } else if let Some(action) = RowAction::parse(key) {
            self.confirm_action(action, &record);
        } else {
            return false;
        }
        true
    }

    pub fn on_batch_delete(self) -> Callback<()> {
        Callback::new(move |_| self.confirm_batch_delete())
    }

    pub fn on_operation_click(self) -> Callback<(String, T)> {
        Callback::new(move |(key, record): (String, T)| {
            if !self.handle_operation(&key, record) {
                log::warn!("unhandled operation '{}' on {}", key, T::NOUN);
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data_table::fetch::tests::MockTransport;
    use futures::executor::block_on;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct Widget {
        widget_id: Option<i64>,
        name: String,
    }

    impl RowRecord for Widget {
        const KEY_FIELD: &'static str = "widgetId";

        fn row_key(&self) -> String {
            self.widget_id.map(|id| id.to_string()).unwrap_or_default()
        }
    }

    impl Resource for Widget {
        const BASE_PATH: &'static str = "/test/widget";
        const NOUN: &'static str = "widget";

        fn id(&self) -> Option<i64> {
            self.widget_id
        }

        fn validate(&self) -> Result<(), String> {
            Ok(())
        }
    }

    fn ok() -> Value {
        json!({ "code": 200, "msg": "success", "success": true, "data": null })
    }

    #[test]
    fn test_page_path() {
        assert_eq!(page_path::<Widget>(), "/test/widget/page");
    }

    #[test]
    fn test_create_posts_json_body() {
        let transport = MockTransport::default().respond(200, ok());
        let widget = Widget {
            widget_id: None,
            name: "a".into(),
        };
        block_on(create(&transport, &widget)).unwrap();
        let requests = transport.requests.borrow();
        assert_eq!(requests[0].0, HttpMethod::Post);
        assert_eq!(requests[0].1, "/test/widget/add");
        assert_eq!(
            requests[0].2,
            Payload::Json(json!({ "widgetId": null, "name": "a" }))
        );
    }

    #[test]
    fn test_update_uses_put() {
        let transport = MockTransport::default().respond(200, ok());
        block_on(update(&transport, &Widget::default())).unwrap();
        let requests = transport.requests.borrow();
        assert_eq!(requests[0].0, HttpMethod::Put);
        assert_eq!(requests[0].1, "/test/widget/update");
    }

    #[test]
    fn test_row_action_paths() {
        let transport = MockTransport::default()
            .respond(200, ok())
            .respond(200, ok())
            .respond(200, ok());
        block_on(perform::<Widget, _>(&transport, RowAction::Delete, 7)).unwrap();
        block_on(perform::<Widget, _>(&transport, RowAction::Enable, 7)).unwrap();
        block_on(perform::<Widget, _>(&transport, RowAction::Disable, 7)).unwrap();
        let requests = transport.requests.borrow();
        let sent: Vec<_> = requests
            .iter()
            .map(|(m, p, _)| (*m, p.as_str()))
            .collect();
        assert_eq!(
            sent,
            vec![
                (HttpMethod::Delete, "/test/widget/7"),
                (HttpMethod::Put, "/test/widget/enable/7"),
                (HttpMethod::Put, "/test/widget/disable/7"),
            ]
        );
        assert!(requests.iter().all(|(_, _, p)| *p == Payload::Empty));
    }

    #[test]
    fn test_delete_many_sends_one_delete_per_id() {
        let transport = MockTransport::default().respond(200, ok()).respond(200, ok());
        let deleted = block_on(delete_many::<Widget, _>(&transport, &[3, 5])).unwrap();
        assert_eq!(deleted, 2);
        let paths: Vec<_> = transport
            .requests
            .borrow()
            .iter()
            .map(|(m, p, _)| (*m, p.clone()))
            .collect();
        assert_eq!(
            paths,
            vec![
                (HttpMethod::Delete, "/test/widget/3".to_string()),
                (HttpMethod::Delete, "/test/widget/5".to_string()),
            ]
        );
    }

    #[test]
    fn test_delete_many_stops_at_first_failure() {
        let transport = MockTransport::default()
            .respond(200, ok())
            .respond(200, json!({ "code": 500, "msg": "in use", "success": false }))
            .respond(200, ok());
        let (done, err) = block_on(delete_many::<Widget, _>(&transport, &[1, 2, 3])).unwrap_err();
        assert_eq!(done, 1);
        assert!(err.to_string().contains("in use"));
        assert_eq!(transport.requests.borrow().len(), 2);
    }

    #[test]
    fn test_selected_ids_skip_unsaved_rows() {
        let rows = vec![
            Widget { widget_id: Some(4), name: "a".into() },
            Widget::default(),
            Widget { widget_id: Some(9), name: "b".into() },
        ];
        assert_eq!(selected_ids(&rows), vec![4, 9]);
        assert!(batch_prompt(2).contains("2 selected"));
    }

    #[test]
    fn test_rejected_mutation_surfaces_server_message() {
        let transport = MockTransport::default().respond(
            200,
            json!({ "code": 500, "msg": "code already exists", "success": false }),
        );
        let err = block_on(create(&transport, &Widget::default())).unwrap_err();
        assert!(err.to_string().contains("code already exists"));
    }

    #[test]
    fn test_row_action_keys() {
        assert_eq!(RowAction::parse("enable"), Some(RowAction::Enable));
        assert_eq!(RowAction::parse("DELETE"), Some(RowAction::Delete));
        assert_eq!(RowAction::parse("EDIT"), None);
        assert!(RowAction::Disable.item().danger);
        assert!(!RowAction::Enable.item().danger);
    }
}
