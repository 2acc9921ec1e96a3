use serde::{Deserialize, Serialize};

/// Signed-in user as returned by the login endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserInfo {
    pub user_id: String,
    pub user_name: String,
    pub token: String,
    pub permissions: Vec<String>,
}

impl UserInfo {
    pub fn has_permission(&self, code: &str) -> bool {
        self.permissions.iter().any(|p| p == code)
    }
}
