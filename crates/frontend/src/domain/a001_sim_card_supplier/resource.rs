use crate::domain::common::id_key;
use crate::shared::data_table::{Resource, RowRecord};
use crate::shared::export::CsvExport;
use contracts::domain::a001_sim_card_supplier::aggregate::Supplier;
use contracts::domain::common::{format_timestamp, status_label, EnableStatus};

impl RowRecord for Supplier {
    const KEY_FIELD: &'static str = "supplierId";

    fn row_key(&self) -> String {
        id_key(self.supplier_id)
    }
}

impl Resource for Supplier {
    const BASE_PATH: &'static str = "/simcard/supplier";
    const NOUN: &'static str = "supplier";

    fn id(&self) -> Option<i64> {
        self.supplier_id
    }

    fn validate(&self) -> Result<(), String> {
        Supplier::validate(self)
    }

    /// New suppliers start enabled.
    fn blank() -> Self {
        Supplier {
            status: Some(EnableStatus::Enabled.code()),
            ..Supplier::default()
        }
    }
}

impl CsvExport for Supplier {
    fn headers() -> Vec<&'static str> {
        vec![
            "Supplier name",
            "Supplier code",
            "Contact person",
            "Phone",
            "Email",
            "Address",
            "Status",
            "Created",
        ]
    }

    fn csv_row(&self) -> Vec<String> {
        vec![
            self.supplier_name.clone(),
            self.supplier_code.clone(),
            self.contact_person.clone(),
            self.contact_phone.clone(),
            self.email.clone(),
            self.address.clone(),
            status_label(self.status).to_string(),
            format_timestamp(self.create_time.as_deref()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data_table::crud::page_path;
    use crate::shared::data_table::HttpMethod;
    use crate::shared::export::build_csv;

    #[test]
    fn test_supplier_endpoints() {
        assert_eq!(page_path::<Supplier>(), "/simcard/supplier/page");
        assert_eq!(Supplier::PAGE_METHOD, HttpMethod::Get);
    }

    #[test]
    fn test_blank_supplier_is_enabled_and_unsaved() {
        let blank = <Supplier as Resource>::blank();
        assert_eq!(blank.status, Some(1));
        assert_eq!(blank.id(), None);
        assert_eq!(blank.row_key(), "");
        assert!(Resource::validate(&blank).is_err());
    }

    #[test]
    fn test_supplier_csv_row_matches_headers() {
        let supplier = Supplier {
            supplier_id: Some(1),
            supplier_name: "Acme, Inc".into(),
            supplier_code: "ACM".into(),
            status: Some(0),
            ..Supplier::default()
        };
        assert_eq!(supplier.csv_row().len(), Supplier::headers().len());
        let csv = build_csv(&[supplier]).unwrap();
        let body = csv.lines().nth(1).unwrap();
        assert!(body.starts_with("\"Acme, Inc\",ACM,"));
        assert!(body.contains(status_label(Some(0))));
    }
}
