//! Tab key → page content.

use crate::domain::a001_sim_card_supplier::ui::list::SupplierList;
use crate::domain::a002_sim_card_type::ui::list::SimCardTypeList;
use crate::domain::a003_number_level::ui::list::NumberLevelList;
use leptos::prelude::*;

pub fn render_tab_content(key: &str) -> AnyView {
    match key {
        "a001_sim_card_supplier" => view! { <SupplierList /> }.into_any(),
        "a002_sim_card_type" => view! { <SimCardTypeList /> }.into_any(),
        "a003_number_level" => view! { <NumberLevelList /> }.into_any(),
        _ => {
            log::warn!("unknown tab '{}'", key);
            view! { <div class="placeholder">"Page not found"</div> }.into_any()
        }
    }
}
