use crate::domain::common::id_key;
use crate::shared::data_table::{Resource, RowRecord};
use contracts::domain::a002_sim_card_type::aggregate::SimCardType;
use contracts::domain::common::EnableStatus;

impl RowRecord for SimCardType {
    const KEY_FIELD: &'static str = "typeId";

    fn row_key(&self) -> String {
        id_key(self.type_id)
    }
}

impl Resource for SimCardType {
    const BASE_PATH: &'static str = "/simcard/type";
    const NOUN: &'static str = "SIM card type";

    fn id(&self) -> Option<i64> {
        self.type_id
    }

    fn validate(&self) -> Result<(), String> {
        SimCardType::validate(self)
    }

    fn blank() -> Self {
        SimCardType {
            status: Some(EnableStatus::Enabled.code()),
            ..SimCardType::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data_table::crud::page_path;

    #[test]
    fn test_card_type_endpoints() {
        assert_eq!(page_path::<SimCardType>(), "/simcard/type/page");
        assert_eq!(SimCardType::KEY_FIELD, "typeId");
    }

    #[test]
    fn test_row_key_uses_type_id() {
        let t = SimCardType {
            type_id: Some(3),
            ..<SimCardType as Resource>::blank()
        };
        assert_eq!(t.row_key(), "3");
        assert_eq!(t.status, Some(1));
    }
}
