use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Overlay plus a positioned dialog surface.
///
/// Renders no header or footer; callers supply their own.
#[component]
pub fn ModalFrame(
    /// Overlay click or explicit dismiss.
    on_close: Callback<()>,
    #[prop(optional)] z_index: Option<i32>,
    /// Extra style for the dialog surface (`div.modal`).
    #[prop(optional, into)]
    modal_style: Option<String>,
    children: Children,
) -> impl IntoView {
    let z_index = z_index.unwrap_or(1000);
    let pressed_on_overlay = RwSignal::new(false);

    let on_overlay = |ev: &ev::MouseEvent| match (ev.target(), ev.current_target()) {
        (Some(t), Some(ct)) => t == ct,
        _ => false,
    };

    // A drag that starts inside the dialog and ends on the overlay must not close it.
    let handle_mouse_down = move |ev: ev::MouseEvent| pressed_on_overlay.set(on_overlay(&ev));

    let handle_click = move |ev: ev::MouseEvent| {
        let close = pressed_on_overlay.get_untracked() && on_overlay(&ev);
        pressed_on_overlay.set(false);
        if close {
            // next tick: the overlay is removed during its own click dispatch otherwise
            spawn_local(async move {
                TimeoutFuture::new(0).await;
                on_close.run(());
            });
        }
    };

    let surface_style = format!("position: relative; {}", modal_style.unwrap_or_default());

    view! {
        <div
            class="modal-overlay"
            style=format!("z-index: {z_index};")
            on:mousedown=handle_mouse_down
            on:click=handle_click
        >
            <div class="modal" style=surface_style on:click=|ev| ev.stop_propagation()>
                {children()}
            </div>
        </div>
    }
}
