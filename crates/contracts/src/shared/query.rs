use crate::shared::pagination::Pagination;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Wire name of the 1-based page index.
pub const CURRENT_KEY: &str = "current";
/// Wire name of the page size.
pub const SIZE_KEY: &str = "size";

/// Filter parameters of a list request, keyed by field name.
///
/// Values are JSON scalars; `Null` means "omitted" and is skipped when the
/// parameters are turned into query-string pairs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QueryParams(BTreeMap<String, Value>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.remove(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// Overlays `other` on top of `self`; keys present in `other` win.
    pub fn merge(&mut self, other: &QueryParams) {
        for (key, value) in other.iter() {
            self.0.insert(key.clone(), value.clone());
        }
    }

    /// Returns a copy with `current`/`size` taken from `pagination`.
    pub fn with_pagination(&self, pagination: &Pagination) -> QueryParams {
        let mut merged = self.clone();
        merged.insert(CURRENT_KEY, pagination.current);
        merged.insert(SIZE_KEY, pagination.page_size);
        merged
    }

    /// String pairs for a URL query; nulls are dropped, strings are not quoted.
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        self.0
            .iter()
            .filter_map(|(key, value)| {
                let text = match value {
                    Value::Null => return None,
                    Value::String(s) => s.clone(),
                    Value::Bool(b) => b.to_string(),
                    Value::Number(n) => n.to_string(),
                    other => other.to_string(),
                };
                Some((key.clone(), text))
            })
            .collect()
    }

    pub fn into_inner(self) -> BTreeMap<String, Value> {
        self.0
    }
}

impl From<BTreeMap<String, Value>> for QueryParams {
    fn from(map: BTreeMap<String, Value>) -> Self {
        Self(map)
    }
}

impl FromIterator<(String, Value)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_later_keys_win() {
        let mut stored = QueryParams::new().with("name", "a").with("status", 1);
        let extra = QueryParams::new().with("name", "b").with("code", "x");
        stored.merge(&extra);
        assert_eq!(stored.get("name"), Some(&Value::from("b")));
        assert_eq!(stored.get("status"), Some(&Value::from(1)));
        assert_eq!(stored.get("code"), Some(&Value::from("x")));
    }

    #[test]
    fn test_with_pagination_overrides_stale_values() {
        let params = QueryParams::new().with(CURRENT_KEY, 9).with("q", "");
        let merged = params.with_pagination(&Pagination::new(5, 20));
        assert_eq!(merged.get(CURRENT_KEY), Some(&Value::from(5)));
        assert_eq!(merged.get(SIZE_KEY), Some(&Value::from(20)));
        assert_eq!(merged.get("q"), Some(&Value::from("")));
    }

    #[test]
    fn test_to_pairs_skips_nulls() {
        let params = QueryParams::new()
            .with("a", Value::Null)
            .with("b", "text")
            .with("c", 3)
            .with("d", true);
        assert_eq!(
            params.to_pairs(),
            vec![
                ("b".to_string(), "text".to_string()),
                ("c".to_string(), "3".to_string()),
                ("d".to_string(), "true".to_string()),
            ]
        );
    }

    #[test]
    fn test_serializes_as_flat_object() {
        let params = QueryParams::new().with("current", 1).with("size", 10);
        let json = serde_json::to_string(&params).unwrap();
        assert_eq!(json, r#"{"current":1,"size":10}"#);
    }
}
