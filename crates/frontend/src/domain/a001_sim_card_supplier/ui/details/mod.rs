//! Supplier form shown in the create/edit/detail dialog.

use crate::shared::data_table::form::{flag, flag_code};
use crate::shared::data_table::FormBinding;
use contracts::domain::a001_sim_card_supplier::aggregate::Supplier;
use leptos::prelude::*;

pub fn supplier_form(f: FormBinding<Supplier>) -> impl IntoView {
    view! {
        <div class="details-form">
            {f.error_view()}
            {f.text("Supplier name", true, |s| s.supplier_name.clone(), |s, v| s.supplier_name = v)}
            {f.text("Supplier code", true, |s| s.supplier_code.clone(), |s, v| s.supplier_code = v)}
            {f.text("Contact person", true, |s| s.contact_person.clone(), |s, v| s.contact_person = v)}
            {f.text("Phone", true, |s| s.contact_phone.clone(), |s, v| s.contact_phone = v)}
            {f.text("Email", true, |s| s.email.clone(), |s, v| s.email = v)}
            {f.text("Address", true, |s| s.address.clone(), |s, v| s.address = v)}
            {f.switch("Enabled", |s| flag(s.status), |s, on| s.status = flag_code(on))}
        </div>
    }
}
