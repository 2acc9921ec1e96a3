use crate::domain::common::{null_as_default, require, EnableStatus};
use serde::{Deserialize, Serialize};

/// Number level: pricing/approval class of an MSISDN.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NumberLevel {
    pub level_id: Option<i64>,
    #[serde(deserialize_with = "null_as_default")]
    pub level_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub level_code: String,
    /// Selection charge, sent as a decimal string to keep precision.
    pub charge: Option<serde_json::Value>,
    pub description: Option<String>,
    pub status: Option<i32>,
    pub need_approval: Option<i32>,
    pub create_time: Option<String>,
    pub update_time: Option<String>,
}

impl NumberLevel {
    pub fn is_enabled(&self) -> bool {
        EnableStatus::from_code(self.status) == Some(EnableStatus::Enabled)
    }

    pub fn needs_approval(&self) -> bool {
        self.need_approval == Some(1)
    }

    /// Charge rendered for display, `-` when absent.
    pub fn charge_text(&self) -> String {
        match &self.charge {
            Some(serde_json::Value::String(s)) if !s.is_empty() => s.clone(),
            Some(serde_json::Value::Number(n)) => n.to_string(),
            _ => "-".to_string(),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        require(&self.level_name, "Level name")?;
        require(&self.level_code, "Level code")?;
        if let Some(serde_json::Value::String(s)) = &self.charge {
            if !s.trim().is_empty() && s.trim().parse::<f64>().is_err() {
                return Err("Charge must be a number".into());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_charge_text() {
        let mut level = NumberLevel::default();
        assert_eq!(level.charge_text(), "-");
        level.charge = Some(serde_json::json!(12.5));
        assert_eq!(level.charge_text(), "12.5");
        level.charge = Some(serde_json::json!("8.00"));
        assert_eq!(level.charge_text(), "8.00");
    }

    #[test]
    fn test_validate_charge() {
        let mut level = NumberLevel {
            level_name: "Gold".into(),
            level_code: "G".into(),
            ..NumberLevel::default()
        };
        assert!(level.validate().is_ok());
        level.charge = Some(serde_json::json!("abc"));
        assert_eq!(level.validate().unwrap_err(), "Charge must be a number");
    }

    #[test]
    fn test_status_flags() {
        let level: NumberLevel =
            serde_json::from_str(r#"{"levelId":1,"status":0,"needApproval":1}"#).unwrap();
        assert!(!level.is_enabled());
        assert!(level.needs_approval());
    }

    #[test]
    fn test_null_code_decodes_as_empty() {
        let level: NumberLevel =
            serde_json::from_str(r#"{"levelId":1,"levelName":"Gold","levelCode":null}"#).unwrap();
        assert_eq!(level.level_code, "");
    }
}
