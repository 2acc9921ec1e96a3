use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::system::session::SessionContext;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let session = use_context::<SessionContext>().expect("SessionContext not found");

    let logout = move |_| {
        ctx.close_all();
        session.logout();
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title="Toggle navigation"
                >
                    {icon("menu")}
                </button>
                <span class="top-header__title">"NSRS Resource Console"</span>
            </div>
            <div class="top-header__actions">
                <div class="top-header__user">
                    {move || {
                        session
                            .user()
                            .map(|u| u.user_name)
                            .unwrap_or_else(|| "Guest".to_string())
                    }}
                </div>
                <Show when=move || session.is_signed_in()>
                    <button class="top-header__icon-btn" on:click=logout title="Sign out">
                        {icon("logout")}
                    </button>
                </Show>
            </div>
        </div>
    }
}
