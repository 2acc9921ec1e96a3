use crate::shared::data_table::form::{flag, flag_code, optional_text, to_optional};
use crate::shared::data_table::FormBinding;
use contracts::domain::a002_sim_card_type::aggregate::SimCardType;
use leptos::prelude::*;

pub fn card_type_form(f: FormBinding<SimCardType>) -> impl IntoView {
    view! {
        <div class="details-form">
            {f.error_view()}
            {f.text("Type name", true, |t| t.type_name.clone(), |t, v| t.type_name = v)}
            {f.text("Type code", true, |t| t.type_code.clone(), |t, v| t.type_code = v)}
            {f.switch("Enabled", |t| flag(t.status), |t, on| t.status = flag_code(on))}
            {f.textarea(
                "Remark",
                |t| optional_text(&t.description),
                |t, v| t.description = to_optional(v),
            )}
        </div>
    }
}
