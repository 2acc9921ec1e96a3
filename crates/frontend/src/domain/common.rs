//! Bits shared by the reference-data pages.

use crate::shared::data_table::SearchField;
use contracts::domain::common::EnableStatus;

/// Enabled/disabled filter over the `status` column.
pub fn status_search_field() -> SearchField {
    SearchField::select(
        "status",
        "Status",
        EnableStatus::all().map(|s| (s.code().to_string(), s.label())),
    )
}

/// Row key for a numeric id; unsaved records share the empty key.
pub fn id_key(id: Option<i64>) -> String {
    id.map(|id| id.to_string()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data_table::search::FieldKind;

    #[test]
    fn test_status_options() {
        let field = status_search_field();
        assert_eq!(field.name, "status");
        assert_eq!(
            field.kind,
            FieldKind::Select(vec![
                ("1".to_string(), "Enabled".to_string()),
                ("0".to_string(), "Disabled".to_string()),
            ])
        );
    }

    #[test]
    fn test_id_key() {
        assert_eq!(id_key(Some(42)), "42");
        assert_eq!(id_key(None), "");
    }
}
