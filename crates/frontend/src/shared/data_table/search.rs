//! Collapsible search form that emits normalized filters.

use crate::shared::icons::icon;
use contracts::shared::query::QueryParams;
use leptos::prelude::*;
use std::collections::BTreeMap;
use thaw::*;

/// Fields shown before the collapsible region.
pub const FIXED_FIELD_COUNT: usize = 4;

#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    Text,
    /// `(value, label)` pairs; an empty option is always prepended.
    Select(Vec<(String, String)>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchField {
    pub name: String,
    pub placeholder: String,
    pub kind: FieldKind,
    pub initial: Option<String>,
}

impl SearchField {
    pub fn text(name: impl Into<String>, placeholder: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            placeholder: placeholder.into(),
            kind: FieldKind::Text,
            initial: None,
        }
    }

    pub fn select<V, L>(
        name: impl Into<String>,
        placeholder: impl Into<String>,
        options: impl IntoIterator<Item = (V, L)>,
    ) -> Self
    where
        V: Into<String>,
        L: Into<String>,
    {
        Self {
            name: name.into(),
            placeholder: placeholder.into(),
            kind: FieldKind::Select(
                options
                    .into_iter()
                    .map(|(v, l)| (v.into(), l.into()))
                    .collect(),
            ),
            initial: None,
        }
    }

    pub fn with_initial(mut self, value: impl Into<String>) -> Self {
        self.initial = Some(value.into());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchLayout {
    pub fixed: usize,
    pub collapsible: usize,
    /// Fields and actions share one row.
    pub single_row: bool,
    pub show_toggle: bool,
}

impl SearchLayout {
    pub fn for_count(count: usize) -> Self {
        if count < FIXED_FIELD_COUNT {
            return Self {
                fixed: count,
                collapsible: 0,
                single_row: true,
                show_toggle: false,
            };
        }
        Self {
            fixed: FIXED_FIELD_COUNT,
            collapsible: count - FIXED_FIELD_COUNT,
            single_row: false,
            show_toggle: count > FIXED_FIELD_COUNT,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchFormState {
    fields: Vec<SearchField>,
    values: BTreeMap<String, Option<String>>,
    expanded: bool,
}

impl SearchFormState {
    pub fn new(fields: Vec<SearchField>) -> Self {
        let values = fields
            .iter()
            .map(|f| (f.name.clone(), f.initial.clone()))
            .collect();
        Self {
            fields,
            values,
            expanded: false,
        }
    }

    pub fn fields(&self) -> &[SearchField] {
        &self.fields
    }

    pub fn layout(&self) -> SearchLayout {
        SearchLayout::for_count(self.fields.len())
    }

    pub fn fixed_fields(&self) -> &[SearchField] {
        &self.fields[..self.layout().fixed]
    }

    pub fn collapsible_fields(&self) -> &[SearchField] {
        &self.fields[self.layout().fixed..]
    }

    pub fn value(&self, name: &str) -> Option<&str> {
        self.values.get(name).and_then(|v| v.as_deref())
    }

    pub fn set_value(&mut self, name: &str, value: Option<String>) {
        match self.values.get_mut(name) {
            Some(slot) => *slot = value,
            None => log::warn!("search form has no field '{}'", name),
        }
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn toggle_expand(&mut self) {
        self.expanded = !self.expanded;
    }

    /// Filters for submit: every field present, unset ones as `""`.
    pub fn normalize(&self) -> QueryParams {
        self.fields
            .iter()
            .map(|f| {
                let value = self.value(&f.name).unwrap_or_default().to_string();
                (f.name.clone(), serde_json::Value::String(value))
            })
            .collect()
    }

    /// Restores initial values. Does not search.
    pub fn reset(&mut self) {
        for field in &self.fields {
            self.values.insert(field.name.clone(), field.initial.clone());
        }
    }
}

fn render_field(state: RwSignal<SearchFormState>, field: SearchField) -> AnyView {
    let name = StoredValue::new(field.name.clone());
    let current = move || {
        state.with(|s| s.value(&name.get_value()).unwrap_or_default().to_string())
    };
    let on_change = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        let value = if value.is_empty() { None } else { Some(value) };
        state.update(|s| s.set_value(&name.get_value(), value));
    };

    match field.kind {
        FieldKind::Text => view! {
            <input
                class="search-form__input"
                type="text"
                placeholder=field.placeholder
                prop:value=current
                on:input=on_change
            />
        }
        .into_any(),
        FieldKind::Select(options) => view! {
            <select class="search-form__input" prop:value=current on:change=on_change>
                <option value="">{field.placeholder}</option>
                {options
                    .into_iter()
                    .map(|(value, label)| view! { <option value=value>{label}</option> })
                    .collect_view()}
            </select>
        }
        .into_any(),
    }
}

#[component]
pub fn SearchForm(
    fields: Vec<SearchField>,
    on_search: Callback<QueryParams>,
    /// Called after the fields were restored.
    #[prop(optional)]
    on_reset: Option<Callback<()>>,
) -> impl IntoView {
    let state = RwSignal::new(SearchFormState::new(fields));
    let layout = state.with_untracked(|s| s.layout());

    let submit = move || on_search.run(state.with_untracked(|s| s.normalize()));
    let reset = move || {
        state.update(|s| s.reset());
        if let Some(cb) = on_reset {
            cb.run(());
        }
    };

    let actions = move || {
        view! {
            <div class="search-form__actions">
                <Button appearance=ButtonAppearance::Primary size=ButtonSize::Small on_click=move |_| submit()>
                    {icon("search")}
                    " Search"
                </Button>
                <Button size=ButtonSize::Small on_click=move |_| reset()>
                    {icon("refresh")}
                    " Reset"
                </Button>
                {layout
                    .show_toggle
                    .then(|| {
                        view! {
                            <button
                                type="button"
                                class="button button--ghost search-form__toggle"
                                on:click=move |_| state.update(|s| s.toggle_expand())
                            >
                                {move || {
                                    if state.with(|s| s.is_expanded()) {
                                        view! { "Collapse " {icon("chevron-up")} }.into_any()
                                    } else {
                                        view! { "Expand " {icon("chevron-down")} }.into_any()
                                    }
                                }}
                            </button>
                        }
                    })}
            </div>
        }
    };

    let fixed = state.with_untracked(|s| s.fixed_fields().to_vec());
    let collapsible = state.with_untracked(|s| s.collapsible_fields().to_vec());

    view! {
        <form
            class="search-form"
            on:submit=move |ev| {
                ev.prevent_default();
                submit();
            }
        >
            <div class="search-form__row">
                {fixed.into_iter().map(|f| render_field(state, f)).collect_view()}
                {layout.single_row.then(actions)}
            </div>
            {(layout.collapsible > 0)
                .then(|| {
                    view! {
                        <div class=move || {
                            if state.with(|s| s.is_expanded()) {
                                "filter-panel__collapsible filter-panel__collapsible--expanded"
                            } else {
                                "filter-panel__collapsible filter-panel__collapsible--collapsed"
                            }
                        }>
                            <div class="search-form__row">
                                {collapsible
                                    .into_iter()
                                    .map(|f| render_field(state, f))
                                    .collect_view()}
                            </div>
                        </div>
                    }
                })}
            {(!layout.single_row)
                .then(|| view! { <div class="search-form__footer">{actions()}</div> })}
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(n: usize) -> Vec<SearchField> {
        (0..n)
            .map(|i| SearchField::text(format!("f{}", i), format!("Field {}", i)))
            .collect()
    }

    #[test]
    fn test_layout_thresholds() {
        assert_eq!(
            SearchLayout::for_count(3),
            SearchLayout { fixed: 3, collapsible: 0, single_row: true, show_toggle: false }
        );
        assert_eq!(
            SearchLayout::for_count(4),
            SearchLayout { fixed: 4, collapsible: 0, single_row: false, show_toggle: false }
        );
        assert_eq!(
            SearchLayout::for_count(6),
            SearchLayout { fixed: 4, collapsible: 2, single_row: false, show_toggle: true }
        );
    }

    #[test]
    fn test_six_fields_expand_keeps_values() {
        let mut state = SearchFormState::new(fields(6));
        assert_eq!(state.fixed_fields().len(), 4);
        assert_eq!(state.collapsible_fields().len(), 2);
        state.set_value("f5", Some("x".into()));
        state.toggle_expand();
        assert!(state.is_expanded());
        state.toggle_expand();
        assert!(!state.is_expanded());
        assert_eq!(state.value("f5"), Some("x"));
    }

    #[test]
    fn test_unset_fields_submit_as_empty_string() {
        let mut state = SearchFormState::new(vec![
            SearchField::text("supplierName", "Supplier name"),
            SearchField::select("status", "Status", [("1", "Enabled"), ("0", "Disabled")]),
        ]);
        state.set_value("supplierName", Some("acme".into()));
        let params = state.normalize();
        assert_eq!(params.get("supplierName"), Some(&json!("acme")));
        assert_eq!(params.get("status"), Some(&json!("")));
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn test_reset_restores_initial_values() {
        let mut state = SearchFormState::new(vec![
            SearchField::text("levelName", "Level name"),
            SearchField::select("status", "Status", [("1", "Enabled")]).with_initial("1"),
        ]);
        state.set_value("levelName", Some("gold".into()));
        state.set_value("status", None);
        state.reset();
        assert_eq!(state.value("levelName"), None);
        assert_eq!(state.value("status"), Some("1"));
    }

    #[test]
    fn test_unknown_field_is_ignored() {
        let mut state = SearchFormState::new(fields(1));
        state.set_value("nope", Some("x".into()));
        assert_eq!(state.normalize().len(), 1);
    }
}
