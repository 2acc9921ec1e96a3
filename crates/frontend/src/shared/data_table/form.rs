//! Record form used by the create/edit/detail dialog.

use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Update,
    Detail,
}

impl FormMode {
    pub fn title(self) -> &'static str {
        match self {
            Self::Create => "Create",
            Self::Update => "Edit",
            Self::Detail => "Detail",
        }
    }

    pub fn read_only(self) -> bool {
        self == Self::Detail
    }

    pub fn success_message(self) -> &'static str {
        match self {
            Self::Create => "Created successfully",
            Self::Update | Self::Detail => "Updated successfully",
        }
    }
}

/// Signals a form view binds its inputs to.
pub struct FormBinding<T: Send + Sync + 'static> {
    pub record: RwSignal<T>,
    pub error: RwSignal<Option<String>>,
    pub mode: FormMode,
}

impl<T: Send + Sync + 'static> Clone for FormBinding<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for FormBinding<T> {}

impl<T: Clone + Send + Sync + 'static> FormBinding<T> {
    pub fn read_only(&self) -> bool {
        self.mode.read_only()
    }

    /// Validation or server error, shown above the fields.
    pub fn error_view(self) -> impl IntoView {
        move || {
            self.error
                .get()
                .map(|e| view! { <div class="error">{e}</div> })
        }
    }

    pub fn text(
        self,
        label: &'static str,
        required: bool,
        get: fn(&T) -> String,
        set: fn(&mut T, String),
    ) -> impl IntoView {
        view! {
            <div class="form-group">
                <label class:required=required>{label}</label>
                <input
                    type="text"
                    placeholder=label
                    disabled=self.read_only()
                    prop:value=move || self.record.with(get)
                    on:input=move |ev| self.record.update(|r| set(r, event_target_value(&ev)))
                />
            </div>
        }
    }

    pub fn textarea(
        self,
        label: &'static str,
        get: fn(&T) -> String,
        set: fn(&mut T, String),
    ) -> impl IntoView {
        view! {
            <div class="form-group">
                <label>{label}</label>
                <textarea
                    rows="3"
                    placeholder=label
                    disabled=self.read_only()
                    prop:value=move || self.record.with(get)
                    on:input=move |ev| self.record.update(|r| set(r, event_target_value(&ev)))
                />
            </div>
        }
    }

    /// Checkbox rendered as a switch.
    pub fn switch(
        self,
        label: &'static str,
        get: fn(&T) -> bool,
        set: fn(&mut T, bool),
    ) -> impl IntoView {
        view! {
            <div class="form-group form-group--inline">
                <label>{label}</label>
                <input
                    type="checkbox"
                    class="switch"
                    disabled=self.read_only()
                    prop:checked=move || self.record.with(get)
                    on:change=move |ev| self.record.update(|r| set(r, event_target_checked(&ev)))
                />
            </div>
        }
    }
}

/// `Some("")` and `None` are the same to a text input.
pub fn optional_text(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

pub fn to_optional(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

pub fn flag(code: Option<i32>) -> bool {
    code == Some(1)
}

pub fn flag_code(on: bool) -> Option<i32> {
    Some(i32::from(on))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_is_read_only() {
        assert!(FormMode::Detail.read_only());
        assert!(!FormMode::Create.read_only());
        assert!(!FormMode::Update.read_only());
        assert_eq!(FormMode::Update.title(), "Edit");
    }

    #[test]
    fn test_optional_text_helpers() {
        assert_eq!(optional_text(&None), "");
        assert_eq!(to_optional(String::new()), None);
        assert_eq!(to_optional("x".into()), Some("x".to_string()));
    }

    #[test]
    fn test_flags() {
        assert!(flag(Some(1)));
        assert!(!flag(Some(0)));
        assert!(!flag(None));
        assert_eq!(flag_code(true), Some(1));
        assert_eq!(flag_code(false), Some(0));
    }
}
