//! Generic paginated CRUD building blocks shared by every list page.
//!
//! A page composes [`use_table`] (query controller), [`SearchForm`],
//! [`DataTable`] and [`use_modal`], usually through [`use_crud_page`]; the
//! fetch adapter in [`fetch`] is the only code that talks to the network.

pub mod batch_banner;
pub mod crud;
pub mod fetch;
pub mod form;
pub mod modal;
pub mod operations;
pub mod pagination_footer;
pub mod search;
pub mod selection;
pub mod table;
pub mod table_state;
pub mod use_table;

pub use crud::{use_crud_page, CrudPage, Resource, RowAction};
pub use fetch::{FetchError, HttpClient, HttpMethod};
pub use form::{FormBinding, FormMode};
pub use modal::{use_modal, ModalOptions, ModalOutlet, ModalPatch, Modals};
pub use operations::{DefaultOperation, OperationItem, OperationPolicy, OperationToken};
pub use search::{SearchField, SearchForm};
pub use selection::SelectType;
pub use table::{ColumnDef, DataTable, ToolbarItem};
pub use use_table::{use_table, TableHandle};

/// A record shown as one table row.
pub trait RowRecord: Clone + Send + Sync + 'static {
    /// Wire name of the identifying field, e.g. `supplierId`.
    const KEY_FIELD: &'static str;

    fn row_key(&self) -> String;
}
