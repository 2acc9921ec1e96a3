use serde::{Deserialize, Serialize};

/// Application-level result codes carried in `CommonResult::code`.
pub mod result_code {
    pub const SUCCESS: i32 = 200;
    pub const UNAUTHORIZED: i32 = 401;
    pub const ERROR: i32 = 500;
}

/// Standard response wrapper returned by every NSRS endpoint.
///
/// List endpoints carry `PageData<T>` in `data`, singular endpoints carry `T`
/// (or nothing for mutations that return `Void`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommonResult<T> {
    #[serde(default)]
    pub code: Option<i32>,
    #[serde(default, alias = "message")]
    pub msg: Option<String>,
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default = "Option::default")]
    pub data: Option<T>,
    #[serde(default)]
    pub timestamp: Option<i64>,
}

impl<T> CommonResult<T> {
    pub fn ok(data: T) -> Self {
        Self {
            code: Some(result_code::SUCCESS),
            msg: Some("success".to_string()),
            success: Some(true),
            data: Some(data),
            timestamp: None,
        }
    }

    pub fn fail(code: i32, msg: impl Into<String>) -> Self {
        Self {
            code: Some(code),
            msg: Some(msg.into()),
            success: Some(false),
            data: None,
            timestamp: None,
        }
    }

    /// Whether the server accepted the operation.
    ///
    /// An explicit `success` flag wins; otherwise the result code decides.
    pub fn is_ok(&self) -> bool {
        match self.success {
            Some(flag) => flag,
            None => self.code == Some(result_code::SUCCESS),
        }
    }

    /// Server message, or an empty string.
    pub fn message(&self) -> &str {
        self.msg.as_deref().unwrap_or_default()
    }
}

/// Page of records returned by `/page` endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct PageData<T> {
    #[serde(default)]
    pub records: Vec<T>,
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub current: Option<u32>,
    #[serde(default)]
    pub size: Option<u32>,
    #[serde(default)]
    pub pages: Option<u64>,
}

impl<T> Default for PageData<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            total: None,
            current: None,
            size: None,
            pages: None,
        }
    }
}

impl<T> PageData<T> {
    pub fn new(records: Vec<T>, total: u64) -> Self {
        Self {
            records,
            total: Some(total),
            ..Self::default()
        }
    }
}

/// Convenience alias for list responses.
pub type TableResponse<T> = CommonResult<PageData<T>>;
