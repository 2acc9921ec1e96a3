use crate::domain::common::{null_as_default, require};
use serde::{Deserialize, Serialize};

/// SIM-card supplier.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Supplier {
    pub supplier_id: Option<i64>,
    #[serde(deserialize_with = "null_as_default")]
    pub supplier_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub supplier_code: String,
    #[serde(deserialize_with = "null_as_default")]
    pub contact_person: String,
    #[serde(deserialize_with = "null_as_default")]
    pub contact_phone: String,
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(deserialize_with = "null_as_default")]
    pub address: String,
    pub status: Option<i32>,
    pub create_time: Option<String>,
    pub update_time: Option<String>,
}

impl Supplier {
    pub fn validate(&self) -> Result<(), String> {
        require(&self.supplier_name, "Supplier name")?;
        require(&self.supplier_code, "Supplier code")?;
        require(&self.contact_person, "Contact person")?;
        require(&self.contact_phone, "Phone")?;
        require(&self.email, "Email")?;
        if !self.email.contains('@') {
            return Err("Email is not valid".into());
        }
        require(&self.address, "Address")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Supplier {
        Supplier {
            supplier_name: "Acme".into(),
            supplier_code: "ACM".into(),
            contact_person: "Li".into(),
            contact_phone: "123".into(),
            email: "sales@acme.test".into(),
            address: "Road 1".into(),
            status: Some(1),
            ..Supplier::default()
        }
    }

    #[test]
    fn test_decode_camel_case() {
        let json = r#"{"supplierId":7,"supplierName":"Acme","status":1,"createTime":"2024-01-01 10:00:00"}"#;
        let s: Supplier = serde_json::from_str(json).unwrap();
        assert_eq!(s.supplier_id, Some(7));
        assert_eq!(s.supplier_name, "Acme");
        assert_eq!(s.supplier_code, "");
        assert_eq!(s.create_time.as_deref(), Some("2024-01-01 10:00:00"));
    }

    #[test]
    fn test_page_with_null_text_columns_decodes() {
        let json = r#"{"code":200,"success":true,"data":{"total":2,"records":[
            {"supplierId":1,"supplierName":"A","contactPerson":"Li","email":"a@x.test"},
            {"supplierId":2,"supplierName":"B","contactPerson":null,"email":null,"address":null}
        ]}}"#;
        let page: crate::shared::envelope::TableResponse<Supplier> =
            serde_json::from_str(json).unwrap();
        let records = page.data.unwrap().records;
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].supplier_name, "B");
        assert_eq!(records[1].contact_person, "");
        assert_eq!(records[1].email, "");
    }

    #[test]
    fn test_validate() {
        assert!(sample().validate().is_ok());
        let mut bad = sample();
        bad.email = "nope".into();
        assert_eq!(bad.validate().unwrap_err(), "Email is not valid");
        let mut blank = sample();
        blank.supplier_code.clear();
        assert_eq!(blank.validate().unwrap_err(), "Supplier code is required");
    }
}
