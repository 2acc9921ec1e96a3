use crate::shared::data_table::form::{flag, flag_code, optional_text, to_optional};
use crate::shared::data_table::FormBinding;
use contracts::domain::a003_number_level::aggregate::NumberLevel;
use leptos::prelude::*;
use serde_json::Value;

fn charge_input(level: &NumberLevel) -> String {
    match &level.charge {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

pub fn level_form(f: FormBinding<NumberLevel>) -> impl IntoView {
    view! {
        <div class="details-form">
            {f.error_view()}
            {f.text("Level name", true, |l| l.level_name.clone(), |l, v| l.level_name = v)}
            {f.text("Level code", true, |l| l.level_code.clone(), |l, v| l.level_code = v)}
            {f.text("Charge", false, charge_input, |l, v| l.charge = to_optional(v).map(Value::String))}
            {f.switch(
                "Needs approval",
                |l| flag(l.need_approval),
                |l, on| l.need_approval = flag_code(on),
            )}
            {f.textarea(
                "Remark",
                |l| optional_text(&l.description),
                |l, v| l.description = to_optional(v),
            )}
        </div>
    }
}
