/// Readable tab title for a tab key. Falls back to the key itself.
pub fn tab_label_for_key(key: &str) -> &str {
    match key {
        "a001_sim_card_supplier" => "SIM card suppliers",
        "a002_sim_card_type" => "SIM card types",
        "a003_number_level" => "Number levels",
        _ => key,
    }
}
