//! Confirmation dialog shown before destructive or state-changing actions.

use crate::shared::modal_frame::ModalFrame;
use leptos::prelude::*;
use thaw::*;

#[derive(Clone)]
pub struct ConfirmRequest {
    pub title: String,
    pub content: String,
    pub on_ok: Callback<()>,
}

#[derive(Clone, Copy)]
pub struct ConfirmService {
    pending: RwSignal<Option<ConfirmRequest>>,
}

impl ConfirmService {
    pub fn new() -> Self {
        Self {
            pending: RwSignal::new(None),
        }
    }

    /// Asks the user; `on_ok` runs only if they accept.
    pub fn confirm(
        &self,
        title: impl Into<String>,
        content: impl Into<String>,
        on_ok: impl Fn() + Send + Sync + 'static,
    ) {
        self.pending.set(Some(ConfirmRequest {
            title: title.into(),
            content: content.into(),
            on_ok: Callback::new(move |_| on_ok()),
        }));
    }

    fn accept(&self) {
        if let Some(request) = self.pending.get_untracked() {
            self.pending.set(None);
            request.on_ok.run(());
        }
    }

    fn dismiss(&self) {
        self.pending.set(None);
    }
}

impl Default for ConfirmService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_confirm() -> ConfirmService {
    use_context::<ConfirmService>()
        .expect("ConfirmService not provided in context (provide it in app root)")
}

/// Renders the pending confirmation, if any. Mounted once, in the app root.
#[component]
pub fn ConfirmHost() -> impl IntoView {
    let svc = use_confirm();

    move || {
        svc.pending.get().map(|request| {
            view! {
                <ModalFrame
                    on_close=Callback::new(move |_| svc.dismiss())
                    z_index=2000
                    modal_style="width: 420px;"
                >
                    <div class="modal-header">
                        <h3 class="modal-title">{request.title}</h3>
                    </div>
                    <div class="modal-body">{request.content}</div>
                    <div class="modal-footer">
                        <Button on_click=move |_| svc.dismiss()>"Cancel"</Button>
                        <Button appearance=ButtonAppearance::Primary on_click=move |_| svc.accept()>
                            "Confirm"
                        </Button>
                    </div>
                </ModalFrame>
            }
        })
    }
}
