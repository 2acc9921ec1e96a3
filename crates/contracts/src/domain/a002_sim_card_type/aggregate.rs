use crate::domain::common::{null_as_default, require};
use serde::{Deserialize, Serialize};

/// SIM-card type (form factor / profile family).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SimCardType {
    pub type_id: Option<i64>,
    #[serde(deserialize_with = "null_as_default")]
    pub type_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub type_code: String,
    pub description: Option<String>,
    pub status: Option<i32>,
    pub create_time: Option<String>,
    pub update_time: Option<String>,
}

impl SimCardType {
    pub fn validate(&self) -> Result<(), String> {
        require(&self.type_name, "Type name")?;
        require(&self.type_code, "Type code")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_name_decodes_as_empty() {
        let t: SimCardType =
            serde_json::from_str(r#"{"typeId":4,"typeName":null,"typeCode":"NANO"}"#).unwrap();
        assert_eq!(t.type_name, "");
        assert_eq!(t.type_code, "NANO");
    }
}
