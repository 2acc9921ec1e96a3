//! Generic list table: toolbar, selectable rows, operations column,
//! batch banner and pagination footer.

use super::batch_banner::{banner_columns, BatchBanner};
use super::operations::{OperationItem, OperationLayout, OperationPolicy};
use super::pagination_footer::PaginationFooter;
use super::use_table::TableHandle;
use super::RowRecord;
use crate::shared::icons::icon;
use leptos::prelude::*;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use thaw::*;

type CellRenderer<T> = Arc<dyn Fn(&T) -> AnyView + Send + Sync>;

pub struct ColumnDef<T> {
    pub key: &'static str,
    pub title: String,
    pub min_width: Option<u32>,
    render: CellRenderer<T>,
}

impl<T> Clone for ColumnDef<T> {
    fn clone(&self) -> Self {
        Self {
            key: self.key,
            title: self.title.clone(),
            min_width: self.min_width,
            render: Arc::clone(&self.render),
        }
    }
}

impl<T: 'static> ColumnDef<T> {
    pub fn new(
        key: &'static str,
        title: impl Into<String>,
        render: impl Fn(&T) -> AnyView + Send + Sync + 'static,
    ) -> Self {
        Self {
            key,
            title: title.into(),
            min_width: None,
            render: Arc::new(render),
        }
    }

    /// Plain text column; empty values show as `-`.
    pub fn text(
        key: &'static str,
        title: impl Into<String>,
        value: impl Fn(&T) -> String + Send + Sync + 'static,
    ) -> Self {
        Self::new(key, title, move |row| {
            let text = value(row);
            if text.is_empty() {
                "-".into_any()
            } else {
                text.into_any()
            }
        })
    }

    pub fn min_width(mut self, width: u32) -> Self {
        self.min_width = Some(width);
        self
    }

    pub fn render(&self, row: &T) -> AnyView {
        (self.render)(row)
    }
}

/// Button above the table, e.g. "Create".
#[derive(Clone)]
pub struct ToolbarItem {
    pub label: String,
    pub icon: Option<&'static str>,
    pub primary: bool,
    pub on_click: Callback<()>,
}

impl ToolbarItem {
    pub fn new(label: impl Into<String>, on_click: Callback<()>) -> Self {
        Self {
            label: label.into(),
            icon: None,
            primary: false,
            on_click,
        }
    }

    pub fn icon(mut self, name: &'static str) -> Self {
        self.icon = Some(name);
        self
    }

    pub fn primary(mut self) -> Self {
        self.primary = true;
        self
    }
}

fn operation_button<T: RowRecord>(
    item: OperationItem,
    row: T,
    on_click: Option<Callback<(String, T)>>,
    menu: Option<RwSignal<bool>>,
) -> impl IntoView {
    let class = if item.danger {
        "table-op table-op--danger"
    } else {
        "table-op"
    };
    let key = item.key;
    view! {
        <button
            class=class
            on:click=move |ev| {
                ev.stop_propagation();
                if let Some(open) = menu {
                    open.set(false);
                }
                if let Some(cb) = on_click {
                    cb.run((key.clone(), row.clone()));
                }
            }
        >
            {item.icon.map(icon)}
            {item.label}
        </button>
    }
}

fn operation_cell<T: RowRecord>(
    layout: OperationLayout,
    row: T,
    on_click: Option<Callback<(String, T)>>,
) -> AnyView {
    match layout {
        OperationLayout::Empty => ().into_any(),
        OperationLayout::Inline(items) => view! {
            <div class="table-ops">
                {items
                    .into_iter()
                    .map(|item| operation_button(item, row.clone(), on_click, None))
                    .collect_view()}
            </div>
        }
        .into_any(),
        OperationLayout::Overflow(items) => {
            let open = RwSignal::new(false);
            view! {
                <div class="table-ops table-ops--overflow">
                    <button
                        class="table-op"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            open.update(|o| *o = !*o);
                        }
                    >
                        {icon("more")}
                        "More"
                    </button>
                    <Show when=move || open.get()>
                        <div class="table-ops__menu">
                            {items
                                .clone()
                                .into_iter()
                                .map(|item| operation_button(item, row.clone(), on_click, Some(open)))
                                .collect_view()}
                        </div>
                    </Show>
                </div>
            }
            .into_any()
        }
    }
}

#[component]
pub fn DataTable<T>(
    table: TableHandle<T>,
    columns: Vec<ColumnDef<T>>,
    #[prop(optional)] operations: Option<OperationPolicy<T>>,
    #[prop(optional)] on_operation_click: Option<Callback<(String, T)>>,
    #[prop(optional)] toolbar: Vec<ToolbarItem>,
    /// Show the checkbox column.
    #[prop(optional)]
    row_selection: bool,
    #[prop(optional)] on_batch_delete: Option<Callback<()>>,
    #[prop(optional)] on_export: Option<Callback<()>>,
) -> impl IntoView
where
    T: RowRecord + DeserializeOwned,
{
    let operations = operations.filter(OperationPolicy::has_column);
    let has_operations = operations.is_some();
    let columns = Arc::new(columns);
    let span = columns.len() + usize::from(has_operations) + usize::from(row_selection);
    let banner_span = banner_columns(columns.len(), has_operations);

    let header_cells = columns
        .iter()
        .map(|c| {
            view! {
                <th
                    class="table__header-cell"
                    style=c.min_width.map(|w| format!("min-width: {}px;", w))
                >
                    {c.title.clone()}
                </th>
            }
        })
        .collect_view();

    let toolbar_view = (!toolbar.is_empty()).then(|| {
        view! {
            <div class="data-table__toolbar">
                {toolbar
                    .into_iter()
                    .map(|item| {
                        let ToolbarItem { label, icon: icon_name, primary, on_click } = item;
                        let appearance = if primary {
                            ButtonAppearance::Primary
                        } else {
                            ButtonAppearance::Secondary
                        };
                        view! {
                            <Button
                                appearance=appearance
                                size=ButtonSize::Small
                                on_click=move |_| on_click.run(())
                            >
                                {icon_name.map(icon)}
                                {label}
                            </Button>
                        }
                    })
                    .collect_view()}
            </div>
        }
    });

    let rows = move || {
        let generation = table.state().with(|s| s.generation());
        table
            .data()
            .into_iter()
            .map(|row| (generation, row))
            .collect::<Vec<_>>()
    };

    view! {
        <div class="data-table">
            {toolbar_view}
            <div class="table-container">
                <Show when=move || table.loading()>
                    <div class="data-table__loading">"Loading..."</div>
                </Show>
                <table class="table">
                    <thead>
                        <tr>
                            {row_selection
                                .then(|| {
                                    view! {
                                        <th class="table__header-cell table__cell--checkbox">
                                            <input
                                                type="checkbox"
                                                class="table__checkbox"
                                                prop:checked=move || table.all_selected()
                                                on:change=move |_| table.toggle_all()
                                            />
                                        </th>
                                    }
                                })}
                            {header_cells}
                            {has_operations
                                .then(|| view! { <th class="table__header-cell">"Operations"</th> })}
                        </tr>
                        <BatchBanner
                            selected=Signal::derive(move || {
                                table.state().with(|s| s.selection().len())
                            })
                            columns=banner_span
                            on_clear=Callback::new(move |_| table.clear_selection())
                            on_batch_delete=on_batch_delete
                            on_export=on_export
                        />
                    </thead>
                    <tbody>
                        <For
                            each=rows
                            key=|(generation, row)| (*generation, row.row_key())
                            children=move |(_, row)| {
                                let select_cell = row_selection
                                    .then(|| {
                                        let key = row.row_key();
                                        let record = row.clone();
                                        view! {
                                            <td
                                                class="table__cell table__cell--checkbox"
                                                on:click=|e| e.stop_propagation()
                                            >
                                                <input
                                                    type="checkbox"
                                                    class="table__checkbox"
                                                    prop:checked=move || table.is_selected(&key)
                                                    on:change=move |_| table.toggle_row(&record)
                                                />
                                            </td>
                                        }
                                    });
                                let cells = columns
                                    .iter()
                                    .map(|c| view! { <td class="table__cell">{c.render(&row)}</td> })
                                    .collect_view();
                                let ops_cell = operations
                                    .as_ref()
                                    .map(|policy| {
                                        view! {
                                            <td class="table__cell table__cell--ops">
                                                {operation_cell(
                                                    policy.layout(&row),
                                                    row.clone(),
                                                    on_operation_click,
                                                )}
                                            </td>
                                        }
                                    });
                                view! { <tr class="table__row">{select_cell} {cells} {ops_cell}</tr> }
                            }
                        />
                        {move || {
                            let empty = table.state().with(|s| s.data_source().is_empty());
                            (empty && !table.loading())
                                .then(|| {
                                    view! {
                                        <tr>
                                            <td colspan=span class="table__empty">
                                                "No data"
                                            </td>
                                        </tr>
                                    }
                                })
                        }}
                    </tbody>
                </table>
            </div>
            <PaginationFooter
                pagination=Signal::derive(move || table.pagination())
                on_page_change=Callback::new(move |page| table.on_page_change(page))
                on_page_size_change=Callback::new(move |size| table.on_page_size_change(size))
            />
        </div>
    }
}
