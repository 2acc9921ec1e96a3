use crate::domain::common::id_key;
use crate::shared::data_table::{HttpMethod, Resource, RowRecord};
use contracts::domain::a003_number_level::aggregate::NumberLevel;
use contracts::domain::common::EnableStatus;

impl RowRecord for NumberLevel {
    const KEY_FIELD: &'static str = "levelId";

    fn row_key(&self) -> String {
        id_key(self.level_id)
    }
}

impl Resource for NumberLevel {
    const BASE_PATH: &'static str = "/msisdn/numberLevel";
    /// Filters travel as a JSON body.
    const PAGE_METHOD: HttpMethod = HttpMethod::Post;
    const NOUN: &'static str = "number level";

    fn id(&self) -> Option<i64> {
        self.level_id
    }

    fn validate(&self) -> Result<(), String> {
        NumberLevel::validate(self)
    }

    fn blank() -> Self {
        NumberLevel {
            status: Some(EnableStatus::Enabled.code()),
            need_approval: Some(0),
            ..NumberLevel::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data_table::crud::page_path;

    #[test]
    fn test_level_page_is_posted() {
        assert_eq!(page_path::<NumberLevel>(), "/msisdn/numberLevel/page");
        assert_eq!(NumberLevel::PAGE_METHOD, HttpMethod::Post);
    }

    #[test]
    fn test_blank_level() {
        let blank = <NumberLevel as Resource>::blank();
        assert!(blank.is_enabled());
        assert!(!blank.needs_approval());
    }
}
