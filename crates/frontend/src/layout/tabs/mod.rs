//! Tab strip and tab pages.
//!
//! Every opened tab keeps its page mounted; inactive pages are only hidden,
//! so list filters and pagination survive switching tabs.

pub mod registry;
pub mod tab_labels;

pub use tab_labels::tab_label_for_key;

use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use leptos::ev;
use leptos::prelude::*;
use registry::render_tab_content;

#[component]
fn TabHeader(tab: TabData, ctx: AppGlobalContext) -> impl IntoView {
    let key = StoredValue::new(tab.key);
    let is_active = Memo::new(move |_| ctx.active.get() == Some(key.get_value()));
    let on_close = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
        ctx.close_tab(&key.get_value());
    };

    view! {
        <div class="tab" class:active=is_active on:click=move |_| ctx.activate_tab(&key.get_value())>
            <span>{tab.title}</span>
            <button class="tab-close" on:click=on_close>
                "×"
            </button>
        </div>
    }
}

#[component]
fn TabPage(tab: TabData, ctx: AppGlobalContext) -> impl IntoView {
    let key = tab.key.clone();
    let is_active = move || ctx.active.get().as_deref() == Some(key.as_str());
    log::debug!("mount tab page '{}'", tab.key);

    view! {
        <div class="tabs__item" class:tabs__item--hidden=move || !is_active() data-tab-key=tab.key.clone()>
            {render_tab_content(&tab.key)}
        </div>
    }
}

#[component]
pub fn Tabs() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <div class="tabs-container">
            <div class="tabs-bar">
                <For
                    each=move || ctx.opened.get()
                    key=|tab| tab.key.clone()
                    children=move |tab| view! { <TabHeader tab=tab ctx=ctx /> }
                />
            </div>
            <div class="tab-content">
                <Show when=move || ctx.opened.with(|t| t.is_empty())>
                    <div class="placeholder">"Choose a page from the menu"</div>
                </Show>
                <For
                    each=move || ctx.opened.get()
                    key=|tab| tab.key.clone()
                    children=move |tab| view! { <TabPage tab=tab ctx=ctx /> }
                />
            </div>
        </div>
    }
}
