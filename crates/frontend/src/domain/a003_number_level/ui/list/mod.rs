use super::details::level_form;
use crate::domain::common::status_search_field;
use crate::shared::data_table::crud::FORM_MODAL;
use crate::shared::data_table::{
    use_crud_page, ColumnDef, DataTable, DefaultOperation, ModalOutlet, OperationPolicy,
    OperationToken, RowAction, SearchField, SearchForm, ToolbarItem,
};
use contracts::domain::a003_number_level::aggregate::NumberLevel;
use contracts::domain::common::{status_label, EnableStatus};
use leptos::prelude::*;

/// Edit and detail, the status toggle matching the row, then delete.
///
/// Only an explicitly disabled level offers Enable.
pub fn level_operations() -> OperationPolicy<NumberLevel> {
    OperationPolicy::dynamic(|level: &NumberLevel| {
        let toggle = if level.status == Some(EnableStatus::DISABLED_CODE) {
            RowAction::Enable
        } else {
            RowAction::Disable
        };
        vec![
            DefaultOperation::Edit.into(),
            DefaultOperation::Detail.into(),
            OperationToken::from(toggle.item()),
            DefaultOperation::Delete.into(),
        ]
    })
}

fn yes_no(on: bool) -> String {
    let label = if on { "Yes" } else { "No" };
    label.to_string()
}

#[component]
pub fn NumberLevelList() -> impl IntoView {
    let page = use_crud_page::<NumberLevel, _>(level_form);
    page.load();

    let columns = vec![
        ColumnDef::text("levelName", "Level name", |l: &NumberLevel| l.level_name.clone())
            .min_width(140),
        ColumnDef::text("levelCode", "Level code", |l: &NumberLevel| l.level_code.clone()),
        ColumnDef::text("charge", "Charge", NumberLevel::charge_text),
        ColumnDef::text("needApproval", "Approval", |l: &NumberLevel| {
            yes_no(l.needs_approval())
        }),
        ColumnDef::text("status", "Status", |l: &NumberLevel| {
            status_label(l.status).to_string()
        }),
        ColumnDef::text("description", "Remark", |l: &NumberLevel| {
            l.description.clone().unwrap_or_default()
        }),
    ];
    let search_fields = vec![
        SearchField::text("levelName", "Level name"),
        SearchField::text("levelCode", "Level code"),
        status_search_field(),
        SearchField::select("needApproval", "Approval", [("1", "Yes"), ("0", "No")]),
    ];

    view! {
        <div class="page">
            <SearchForm
                fields=search_fields
                on_search=Callback::new(move |filters| page.table.on_search(Some(filters)))
            />
            <div class="wrapper">
                <DataTable
                    table=page.table
                    columns=columns
                    operations=level_operations()
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data_table::operations::OperationLayout;

    fn keys(level: &NumberLevel) -> Vec<String> {
        level_operations()
            .resolve(level)
            .into_iter()
            .map(|item| item.key)
            .collect()
    }

    #[test]
    fn test_disabled_level_offers_enable() {
        let level = NumberLevel {
            status: Some(0),
            ..NumberLevel::default()
        };
        assert_eq!(keys(&level), vec!["EDIT", "DETAIL", "ENABLE", "DELETE"]);
    }

    #[test]
    fn test_enabled_level_offers_disable_in_overflow_menu() {
        let level = NumberLevel {
            status: Some(1),
            ..NumberLevel::default()
        };
        assert_eq!(keys(&level), vec!["EDIT", "DETAIL", "DISABLE", "DELETE"]);
        assert!(level_operations().layout(&level).is_overflow());
        match level_operations().layout(&level) {
            OperationLayout::Overflow(items) => assert!(items[2].danger),
            other => panic!("unexpected layout {:?}", other),
        }
    }

    #[test]
    fn test_unknown_status_offers_disable() {
        assert_eq!(keys(&NumberLevel::default())[2], "DISABLE");
        let odd = NumberLevel {
            status: Some(7),
            ..NumberLevel::default()
        };
        assert_eq!(keys(&odd)[2], "DISABLE");
    }

    #[test]
    fn test_yes_no() {
        assert_eq!(yes_no(true), "Yes");
        assert_eq!(yes_no(false), "No");
    }
}
