//! Sidebar with collapsible menu groups.

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_label_for_key;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: Vec<(&'static str, &'static str)>, // (tab key, icon)
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "number",
            label: "Number resources",
            icon: "number",
            items: vec![("a003_number_level", "level")],
        },
        MenuGroup {
            id: "simcard",
            label: "SIM card resources",
            icon: "simcard",
            items: vec![
                ("a001_sim_card_supplier", "supplier"),
                ("a002_sim_card_type", "card-type"),
            ],
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let expanded_groups = RwSignal::new(
        get_menu_groups()
            .iter()
            .map(|g| g.id)
            .collect::<Vec<_>>(),
    );

    view! {
        <div class="app-sidebar__content">
            {get_menu_groups()
                .into_iter()
                .map(|group| {
                    let group_id = group.id;
                    let is_expanded = move || expanded_groups.get().contains(&group_id);
                    view! {
                        <div>
                            <div
                                class="app-sidebar__item"
                                on:click=move |_| {
                                    expanded_groups
                                        .update(|ids| {
                                            if let Some(pos) = ids.iter().position(|x| *x == group_id) {
                                                ids.remove(pos);
                                            } else {
                                                ids.push(group_id);
                                            }
                                        })
                                }
                            >
                                <div class="app-sidebar__item-content">
                                    {icon(group.icon)}
                                    <span>{group.label}</span>
                                </div>
                                <div
                                    class="app-sidebar__chevron"
                                    class:app-sidebar__chevron--expanded=is_expanded
                                >
                                    {icon("chevron-right")}
                                </div>
                            </div>
                            <Show when=is_expanded>
                                <div class="app-sidebar__children">
                                    {group
                                        .items
                                        .iter()
                                        .map(|&(key, icon_name)| {
                                            let label = tab_label_for_key(key);
                                            view! {
                                                <div
                                                    class="app-sidebar__item"
                                                    class:app-sidebar__item--active=move || {
                                                        ctx.active.get().as_deref() == Some(key)
                                                    }
                                                    on:click=move |_| ctx.open_tab(key, label)
                                                >
                                                    <div class="app-sidebar__item-content">
                                                        {icon(icon_name)}
                                                        <span>{label}</span>
                                                    </div>
                                                </div>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </Show>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
