pub mod global_context;
pub mod left;
pub mod tabs;
pub mod top_header;

use leptos::prelude::*;
use left::Sidebar;
use tabs::Tabs;
use top_header::TopHeader;

/// Application frame.
///
/// ```text
/// +--------------------------------+
/// |           TopHeader            |
/// +---------+----------------------+
/// | Sidebar | tab strip            |
/// |         | active tab content   |
/// +---------+----------------------+
/// ```
#[component]
pub fn Shell() -> impl IntoView {
    let ctx = use_context::<global_context::AppGlobalContext>()
        .expect("AppGlobalContext not found");

    view! {
        <div class="app-layout">
            <TopHeader />
            <div class="app-body">
                <div data-zone="left" class="left" class:hidden=move || !ctx.left_open.get()>
                    <Sidebar />
                </div>
                <div class="app-main">
                    <Tabs />
                </div>
            </div>
        </div>
    }
}
