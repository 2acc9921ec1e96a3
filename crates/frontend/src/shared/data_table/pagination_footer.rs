use crate::shared::icons::icon;
use contracts::shared::pagination::{Pagination, PAGE_SIZE_OPTIONS};
use leptos::prelude::*;

/// Table footer: page size, total and a prev / `current / pages` / next control.
///
/// Pages are 1-based. All changes are delegated to the callbacks.
#[component]
pub fn PaginationFooter(
    #[prop(into)] pagination: Signal<Pagination>,
    on_page_change: Callback<u32>,
    on_page_size_change: Callback<u32>,
) -> impl IntoView {
    view! {
        <div class="pagination-controls">
            <span class="pagination-info">
                {move || format!("Total {}", pagination.get().total)}
            </span>
            <select
                class="page-size-select"
                on:change=move |ev| {
                    if let Ok(size) = event_target_value(&ev).parse::<u32>() {
                        on_page_size_change.run(size);
                    }
                }
                prop:value=move || pagination.get().page_size.to_string()
            >
                {PAGE_SIZE_OPTIONS
                    .iter()
                    .map(|&size| {
                        view! {
                            <option
                                value=size.to_string()
                                selected=move || pagination.get().page_size == size
                            >
                                {format!("{} / page", size)}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let p = pagination.get_untracked();
                    if p.has_prev() {
                        on_page_change.run(p.current - 1);
                    }
                }
                disabled=move || !pagination.get().has_prev()
                title="Previous page"
            >
                {icon("chevron-left")}
            </button>
            <span class="pagination-info">
                {move || {
                    let p = pagination.get();
                    format!("{} / {}", p.current, p.total_pages())
                }}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let p = pagination.get_untracked();
                    if p.has_next() {
                        on_page_change.run(p.current + 1);
                    }
                }
                disabled=move || !pagination.get().has_next()
                title="Next page"
            >
                {icon("chevron-right")}
            </button>
        </div>
    }
}
