use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_label_for_key;
use crate::layout::Shell;
use crate::shared::config::load_config;
use crate::shared::confirm::{ConfirmHost, ConfirmService};
use crate::shared::notify::{NotificationService, Toaster};
use crate::system::session::SessionContext;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    provide_context(load_config());
    provide_context(SessionContext::restore());
    provide_context(NotificationService::new());
    provide_context(ConfirmService::new());

    let ctx = AppGlobalContext::new();
    provide_context(ctx);
    ctx.init_router_integration(|key| tab_label_for_key(key).to_string());

    view! {
        <Shell />
        <ConfirmHost />
        <Toaster />
    }
}
