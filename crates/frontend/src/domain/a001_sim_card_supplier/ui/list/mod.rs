use super::details::supplier_form;
use crate::domain::common::status_search_field;
use crate::shared::data_table::crud::FORM_MODAL;
use crate::shared::data_table::{
    use_crud_page, ColumnDef, DataTable, DefaultOperation, ModalOutlet, OperationPolicy,
    SearchField, SearchForm, ToolbarItem,
};
use contracts::domain::a001_sim_card_supplier::aggregate::Supplier;
use contracts::domain::common::{format_timestamp, status_label};
use leptos::prelude::*;

fn columns() -> Vec<ColumnDef<Supplier>> {
    vec![
        ColumnDef::text("supplierName", "Supplier name", |s: &Supplier| {
            s.supplier_name.clone()
        })
        .min_width(160),
        ColumnDef::text("supplierCode", "Supplier code", |s: &Supplier| {
            s.supplier_code.clone()
        }),
        ColumnDef::text("contactPerson", "Contact person", |s: &Supplier| {
            s.contact_person.clone()
        }),
        ColumnDef::text("contactPhone", "Phone", |s: &Supplier| s.contact_phone.clone()),
        ColumnDef::text("email", "Email", |s: &Supplier| s.email.clone()),
        ColumnDef::text("address", "Address", |s: &Supplier| s.address.clone()).min_width(200),
        ColumnDef::text("status", "Status", |s: &Supplier| {
            status_label(s.status).to_string()
        }),
        ColumnDef::text("createTime", "Created", |s: &Supplier| {
            format_timestamp(s.create_time.as_deref())
        })
        .min_width(160),
        ColumnDef::text("updateTime", "Updated", |s: &Supplier| {
            format_timestamp(s.update_time.as_deref())
        })
        .min_width(160),
    ]
}

#[component]
pub fn SupplierList() -> impl IntoView {
    let page = use_crud_page::<Supplier, _>(supplier_form);
    page.load();

    let search_fields = vec![
        SearchField::text("supplierName", "Supplier name"),
        SearchField::text("supplierCode", "Supplier code"),
        status_search_field(),
    ];
    let toolbar = vec![ToolbarItem::new("Create", Callback::new(move |_| page.open_create()))
        .icon("plus")
        .primary()];
    let operations = OperationPolicy::fixed([
        DefaultOperation::Edit,
        DefaultOperation::Detail,
        DefaultOperation::Delete,
    ]);

    view! {
        <div class="page">
            <SearchForm
                fields=search_fields
                on_search=Callback::new(move |filters| page.table.on_search(Some(filters)))
            />
            <div class="wrapper">
                <DataTable
                    table=page.table
                    columns=columns()
                    operations=operations
                    on_operation_click=page.on_operation_click()
                    toolbar=toolbar
                    row_selection=true
                    on_batch_delete=page.on_batch_delete()
                    on_export=page.on_export("suppliers")
                />
            </div>
            <ModalOutlet modals=page.modals id=FORM_MODAL />
        </div>
    }
}
