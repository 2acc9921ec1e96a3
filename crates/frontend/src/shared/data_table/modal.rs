//! Named dialog controllers.
//!
//! A page asks for a fixed set of ids once ([`use_modal`]) and gets one
//! independent [`ModalController`] per id for its whole lifetime. Closing a
//! dialog resets its options instead of dropping the controller.

use crate::shared::icons::icon;
use crate::shared::modal_frame::ModalFrame;
use leptos::prelude::*;
use std::collections::BTreeMap;
use thaw::*;

pub const DEFAULT_MODAL_WIDTH: u32 = 640;

#[derive(Clone, Default)]
pub struct ModalOptions {
    pub title: String,
    pub content: Option<ViewFn>,
    pub on_ok: Option<Callback<()>>,
    pub on_cancel: Option<Callback<()>>,
    pub ok_text: Option<String>,
    pub cancel_text: Option<String>,
    pub width: Option<u32>,
    pub footer_hidden: bool,
}

impl ModalOptions {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn content(mut self, content: impl Into<ViewFn>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn on_ok(mut self, on_ok: Callback<()>) -> Self {
        self.on_ok = Some(on_ok);
        self
    }

    pub fn on_cancel(mut self, on_cancel: Callback<()>) -> Self {
        self.on_cancel = Some(on_cancel);
        self
    }

    pub fn ok_text(mut self, text: impl Into<String>) -> Self {
        self.ok_text = Some(text.into());
        self
    }

    pub fn width(mut self, width: u32) -> Self {
        self.width = Some(width);
        self
    }

    pub fn footer_hidden(mut self, hidden: bool) -> Self {
        self.footer_hidden = hidden;
        self
    }

    /// Shallow merge: every field set in `patch` replaces ours.
    pub fn apply(&mut self, patch: ModalPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(content) = patch.content {
            self.content = Some(content);
        }
        if let Some(on_ok) = patch.on_ok {
            self.on_ok = Some(on_ok);
        }
        if let Some(on_cancel) = patch.on_cancel {
            self.on_cancel = Some(on_cancel);
        }
        if let Some(text) = patch.ok_text {
            self.ok_text = Some(text);
        }
        if let Some(text) = patch.cancel_text {
            self.cancel_text = Some(text);
        }
        if let Some(width) = patch.width {
            self.width = Some(width);
        }
        if let Some(hidden) = patch.footer_hidden {
            self.footer_hidden = hidden;
        }
    }
}

/// Partial [`ModalOptions`] for [`ModalController::update_modal`].
#[derive(Clone, Default)]
pub struct ModalPatch {
    pub title: Option<String>,
    pub content: Option<ViewFn>,
    pub on_ok: Option<Callback<()>>,
    pub on_cancel: Option<Callback<()>>,
    pub ok_text: Option<String>,
    pub cancel_text: Option<String>,
    pub width: Option<u32>,
    pub footer_hidden: Option<bool>,
}

#[derive(Clone, Default)]
pub struct ModalController {
    is_open: bool,
    options: ModalOptions,
}

impl ModalController {
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn options(&self) -> &ModalOptions {
        &self.options
    }

    pub fn open_modal(&mut self, options: ModalOptions) {
        self.options = options;
        self.is_open = true;
    }

    pub fn close_modal(&mut self) {
        self.is_open = false;
        self.options = ModalOptions::default();
    }

    /// Merges `patch` into the options; open state is unchanged.
    pub fn update_modal(&mut self, patch: ModalPatch) {
        self.options.apply(patch);
    }
}

/// One controller per id, created up front.
#[derive(Clone, Default)]
pub struct ModalRegistry {
    controllers: BTreeMap<String, ModalController>,
}

impl ModalRegistry {
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            controllers: ids
                .into_iter()
                .map(|id| (id.into(), ModalController::default()))
                .collect(),
        }
    }

    pub fn get(&self, id: &str) -> Option<&ModalController> {
        self.controllers.get(id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut ModalController> {
        let controller = self.controllers.get_mut(id);
        if controller.is_none() {
            log::warn!("modal '{}' was not registered", id);
        }
        controller
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.controllers.keys().map(String::as_str)
    }
}

/// Reactive handle to a page's [`ModalRegistry`].
#[derive(Clone, Copy)]
pub struct Modals {
    registry: RwSignal<ModalRegistry>,
}

impl Modals {
    pub fn is_open(&self, id: &str) -> bool {
        self.registry
            .with(|r| r.get(id).map(ModalController::is_open).unwrap_or(false))
    }

    pub fn options(&self, id: &str) -> ModalOptions {
        self.registry
            .with(|r| r.get(id).map(|c| c.options().clone()).unwrap_or_default())
    }

    pub fn open_modal(&self, id: &str, options: ModalOptions) {
        self.registry.update(|r| {
            if let Some(c) = r.get_mut(id) {
                c.open_modal(options);
            }
        });
    }

    pub fn close_modal(&self, id: &str) {
        self.registry.update(|r| {
            if let Some(c) = r.get_mut(id) {
                c.close_modal();
            }
        });
    }

    pub fn update_modal(&self, id: &str, patch: ModalPatch) {
        self.registry.update(|r| {
            if let Some(c) = r.get_mut(id) {
                c.update_modal(patch);
            }
        });
    }
}

pub fn use_modal(ids: &[&str]) -> Modals {
    Modals {
        registry: RwSignal::new(ModalRegistry::new(ids.iter().copied())),
    }
}

/// Renders the dialog registered under `id` while it is open.
#[component]
pub fn ModalOutlet(modals: Modals, #[prop(into)] id: String) -> impl IntoView {
    let id = StoredValue::new(id);

    let close = move || modals.close_modal(&id.get_value());

    let handle_cancel = move || {
        if let Some(cb) = modals.options(&id.get_value()).on_cancel {
            cb.run(());
        }
        close();
    };

    let handle_ok = move || match modals.options(&id.get_value()).on_ok {
        Some(cb) => cb.run(()),
        None => close(),
    };

    view! {
        <Show when=move || modals.is_open(&id.get_value())>
            {move || {
                let options = modals.options(&id.get_value());
                let width = options.width.unwrap_or(DEFAULT_MODAL_WIDTH);
                let ok_text = options.ok_text.clone().unwrap_or_else(|| "OK".to_string());
                let cancel_text = options
                    .cancel_text
                    .clone()
                    .unwrap_or_else(|| "Cancel".to_string());
                let body = options.content.as_ref().map(|c| c.run());
                let footer_hidden = options.footer_hidden;
                view! {
                    <ModalFrame
                        on_close=Callback::new(move |_| handle_cancel())
                        modal_style=format!("width: {}px; max-width: 95vw;", width)
                    >
                        <div class="modal-header">
                            <h3 class="modal-title">{options.title.clone()}</h3>
                            <button class="button button--ghost" on:click=move |_| handle_cancel()>
                                {icon("x")}
                            </button>
                        </div>
                        <div class="modal-body">{body}</div>
                        {(!footer_hidden)
                            .then(|| {
                                view! {
                                    <div class="modal-footer">
                                        <Button on_click=move |_| handle_cancel()>{cancel_text}</Button>
                                        <Button
                                            appearance=ButtonAppearance::Primary
                                            on_click=move |_| handle_ok()
                                        >
                                            {ok_text}
                                        </Button>
                                    </div>
                                }
                            })}
                    </ModalFrame>
                }
            }}
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_close_twice_leaves_closed_and_empty() {
        let mut c = ModalController::default();
        c.open_modal(ModalOptions::new("Edit supplier").width(800));
        assert!(c.is_open());
        c.close_modal();
        c.close_modal();
        assert!(!c.is_open());
        assert_eq!(c.options().title, "");
        assert_eq!(c.options().width, None);
        assert!(c.options().content.is_none());
    }

    #[test]
    fn test_update_merges_without_closing() {
        let mut c = ModalController::default();
        c.open_modal(ModalOptions::new("Create").width(800).ok_text("Save"));
        c.update_modal(ModalPatch {
            title: Some("Edit".into()),
            footer_hidden: Some(true),
            ..ModalPatch::default()
        });
        assert!(c.is_open());
        assert_eq!(c.options().title, "Edit");
        assert_eq!(c.options().width, Some(800));
        assert_eq!(c.options().ok_text.as_deref(), Some("Save"));
        assert!(c.options().footer_hidden);
    }

    #[test]
    fn test_update_on_closed_modal_keeps_it_closed() {
        let mut c = ModalController::default();
        c.update_modal(ModalPatch {
            title: Some("Detail".into()),
            ..ModalPatch::default()
        });
        assert!(!c.is_open());
        assert_eq!(c.options().title, "Detail");
    }

    #[test]
    fn test_registry_controllers_are_independent() {
        let mut r = ModalRegistry::new(["form", "import"]);
        assert_eq!(r.ids().collect::<Vec<_>>(), vec!["form", "import"]);
        r.get_mut("form").unwrap().open_modal(ModalOptions::new("Create"));
        assert!(r.get("form").unwrap().is_open());
        assert!(!r.get("import").unwrap().is_open());
        assert!(r.get_mut("missing").is_none());
    }
}
