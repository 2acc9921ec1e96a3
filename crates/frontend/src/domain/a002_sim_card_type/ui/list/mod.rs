use super::details::card_type_form;
use crate::domain::common::status_search_field;
use crate::shared::data_table::crud::FORM_MODAL;
use crate::shared::data_table::{
    use_crud_page, ColumnDef, DataTable, ModalOutlet, OperationPolicy, SearchField, SearchForm,
    ToolbarItem,
};
use contracts::domain::a002_sim_card_type::aggregate::SimCardType;
use contracts::domain::common::{format_timestamp, status_label};
use leptos::prelude::*;

#[component]
pub fn SimCardTypeList() -> impl IntoView {
    let page = use_crud_page::<SimCardType, _>(card_type_form);
    page.load();

    let columns = vec![
        ColumnDef::text("typeName", "Type name", |t: &SimCardType| t.type_name.clone())
            .min_width(160),
        ColumnDef::text("typeCode", "Type code", |t: &SimCardType| t.type_code.clone()),
        ColumnDef::text("status", "Status", |t: &SimCardType| {
            status_label(t.status).to_string()
        }),
        ColumnDef::text("description", "Remark", |t: &SimCardType| {
            t.description.clone().unwrap_or_default()
        }),
        ColumnDef::text("createTime", "Created", |t: &SimCardType| {
            format_timestamp(t.create_time.as_deref())
        }),
        ColumnDef::text("updateTime", "Updated", |t: &SimCardType| {
            format_timestamp(t.update_time.as_deref())
        }),
    ];

    view! {
        <div class="page">
            <SearchForm
                fields=vec![
                    SearchField::text("typeName", "Type name"),
                    SearchField::text("typeCode", "Type code"),
                    status_search_field(),
                ]
                on_search=Callback::new(move |filters| page.table.on_search(Some(filters)))
            />
            <div class="wrapper">
                <DataTable
                    table=page.table
                    columns=columns
                    operations=OperationPolicy::fixed(["EDIT", "DETAIL", "DELETE"])
                    on_operation_click=page.on_operation_click()
                    toolbar=vec![
                        ToolbarItem::new("Create", Callback::new(move |_| page.open_create()))
                            .icon("plus")
                            .primary(),
                    ]
                />
            </div>
            <ModalOutlet modals=page.modals id=FORM_MODAL />
        </div>
    }
}
