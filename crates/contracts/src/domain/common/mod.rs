use chrono::{DateTime, Local, NaiveDateTime};
use serde::{Deserialize, Deserializer};

/// Enabled/disabled flag used by every reference-data record (`status` column).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnableStatus {
    Enabled,
    Disabled,
}

impl EnableStatus {
    pub const ENABLED_CODE: i32 = 1;
    pub const DISABLED_CODE: i32 = 0;

    pub fn from_code(code: Option<i32>) -> Option<Self> {
        match code {
            Some(Self::ENABLED_CODE) => Some(Self::Enabled),
            Some(Self::DISABLED_CODE) => Some(Self::Disabled),
            _ => None,
        }
    }

    pub fn code(self) -> i32 {
        match self {
            Self::Enabled => Self::ENABLED_CODE,
            Self::Disabled => Self::DISABLED_CODE,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Enabled => "Enabled",
            Self::Disabled => "Disabled",
        }
    }

    pub fn all() -> [EnableStatus; 2] {
        [Self::Enabled, Self::Disabled]
    }
}

/// Label for an optional status code, `-` when unknown.
pub fn status_label(code: Option<i32>) -> &'static str {
    EnableStatus::from_code(code).map(EnableStatus::label).unwrap_or("-")
}

/// Formats a server timestamp as `YYYY-MM-DD HH:MM:SS`.
///
/// Accepts RFC 3339 and the backend's `yyyy-MM-dd HH:mm:ss` form; anything
/// else is returned unchanged, absent values become `-`.
pub fn format_timestamp(raw: Option<&str>) -> String {
    let Some(raw) = raw.filter(|s| !s.trim().is_empty()) else {
        return "-".to_string();
    };
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return dt.format("%Y-%m-%d %H:%M:%S").to_string();
    }
    raw.to_string()
}

/// Reads an explicit `null` as the field's default.
///
/// `#[serde(default)]` only covers absent keys; the backend sends nullable
/// columns as `null`.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Returns an error message when a required text field is blank.
pub fn require(value: &str, field: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err(format!("{} is required", field))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(EnableStatus::from_code(Some(1)), Some(EnableStatus::Enabled));
        assert_eq!(EnableStatus::from_code(Some(0)), Some(EnableStatus::Disabled));
        assert_eq!(EnableStatus::from_code(Some(7)), None);
        assert_eq!(status_label(None), "-");
    }

    #[test]
    fn test_format_timestamp() {
        assert_eq!(format_timestamp(None), "-");
        assert_eq!(format_timestamp(Some("")), "-");
        assert_eq!(
            format_timestamp(Some("2024-03-15 14:02:26")),
            "2024-03-15 14:02:26"
        );
        assert_eq!(format_timestamp(Some("garbage")), "garbage");
    }

    #[derive(Debug, Default, Deserialize)]
    #[serde(default)]
    struct Named {
        #[serde(deserialize_with = "null_as_default")]
        name: String,
    }

    #[test]
    fn test_null_as_default() {
        let named: Named = serde_json::from_str(r#"{"name":null}"#).unwrap();
        assert_eq!(named.name, "");
        let named: Named = serde_json::from_str(r#"{"name":"x"}"#).unwrap();
        assert_eq!(named.name, "x");
        let named: Named = serde_json::from_str("{}").unwrap();
        assert_eq!(named.name, "");
    }

    #[test]
    fn test_require() {
        assert!(require("x", "Name").is_ok());
        assert_eq!(require("  ", "Name").unwrap_err(), "Name is required");
    }
}
