//! Row operations: which action buttons a table row offers.
//!
//! A page declares an [`OperationPolicy`], either a fixed token list or a
//! function of the row. Tokens are well-known keys (`EDIT`, `DELETE`, `COPY`,
//! `DETAIL`, case-insensitive) or inline [`OperationItem`]s. Unknown keys are
//! dropped during resolution.

use std::fmt;
use std::sync::Arc;

/// Rows with more resolved operations than this get an overflow menu.
pub const MAX_INLINE_OPERATIONS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DefaultOperation {
    Detail,
    Edit,
    Copy,
    Delete,
}

impl DefaultOperation {
    /// Default menu, in display order.
    pub const ALL: [DefaultOperation; 4] = [
        DefaultOperation::Detail,
        DefaultOperation::Edit,
        DefaultOperation::Copy,
        DefaultOperation::Delete,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Self::Detail => "DETAIL",
            Self::Edit => "EDIT",
            Self::Copy => "COPY",
            Self::Delete => "DELETE",
        }
    }

    pub fn parse(token: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|op| op.key().eq_ignore_ascii_case(token))
    }

    pub fn item(self) -> OperationItem {
        let (label, icon) = match self {
            Self::Detail => ("Detail", "detail"),
            Self::Edit => ("Edit", "edit"),
            Self::Copy => ("Copy", "copy"),
            Self::Delete => ("Delete", "delete"),
        };
        OperationItem {
            key: self.key().to_string(),
            label: label.to_string(),
            icon: Some(icon),
            danger: self == Self::Delete,
        }
    }
}

/// A resolved menu entry / button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationItem {
    pub key: String,
    pub label: String,
    pub icon: Option<&'static str>,
    pub danger: bool,
}

impl OperationItem {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            icon: None,
            danger: false,
        }
    }

    pub fn with_icon(mut self, icon: &'static str) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn danger(mut self) -> Self {
        self.danger = true;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationToken {
    WellKnown(String),
    Custom(OperationItem),
}

impl OperationToken {
    pub fn resolve(&self) -> Option<OperationItem> {
        match self {
            OperationToken::WellKnown(key) => DefaultOperation::parse(key).map(DefaultOperation::item),
            OperationToken::Custom(item) => Some(item.clone()),
        }
    }
}

impl From<&str> for OperationToken {
    fn from(key: &str) -> Self {
        OperationToken::WellKnown(key.to_string())
    }
}

impl From<DefaultOperation> for OperationToken {
    fn from(op: DefaultOperation) -> Self {
        OperationToken::WellKnown(op.key().to_string())
    }
}

impl From<OperationItem> for OperationToken {
    fn from(item: OperationItem) -> Self {
        OperationToken::Custom(item)
    }
}

type DynamicPolicy<T> = Arc<dyn Fn(&T) -> Vec<OperationToken> + Send + Sync>;

pub enum OperationPolicy<T> {
    Static(Vec<OperationToken>),
    Dynamic(DynamicPolicy<T>),
}

impl<T> Clone for OperationPolicy<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Static(tokens) => Self::Static(tokens.clone()),
            Self::Dynamic(f) => Self::Dynamic(Arc::clone(f)),
        }
    }
}

impl<T> fmt::Debug for OperationPolicy<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Static(tokens) => f.debug_tuple("Static").field(tokens).finish(),
            Self::Dynamic(_) => f.write_str("Dynamic(..)"),
        }
    }
}

impl<T> OperationPolicy<T> {
    pub fn fixed<I, O>(tokens: I) -> Self
    where
        I: IntoIterator<Item = O>,
        O: Into<OperationToken>,
    {
        Self::Static(tokens.into_iter().map(Into::into).collect())
    }

    pub fn dynamic(f: impl Fn(&T) -> Vec<OperationToken> + Send + Sync + 'static) -> Self {
        Self::Dynamic(Arc::new(f))
    }

    /// Whether the table needs an operations column at all.
    pub fn has_column(&self) -> bool {
        match self {
            Self::Static(tokens) => !tokens.is_empty(),
            Self::Dynamic(_) => true,
        }
    }

    pub fn resolve(&self, record: &T) -> Vec<OperationItem> {
        let dynamic;
        let tokens = match self {
            Self::Static(tokens) => tokens,
            Self::Dynamic(f) => {
                dynamic = f(record);
                &dynamic
            }
        };
        tokens.iter().filter_map(OperationToken::resolve).collect()
    }

    pub fn layout(&self, record: &T) -> OperationLayout {
        OperationLayout::from_items(self.resolve(record))
    }
}

/// How a row's operations are presented.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationLayout {
    Empty,
    Inline(Vec<OperationItem>),
    Overflow(Vec<OperationItem>),
}

impl OperationLayout {
    pub fn from_items(items: Vec<OperationItem>) -> Self {
        if items.is_empty() {
            OperationLayout::Empty
        } else if items.len() > MAX_INLINE_OPERATIONS {
            OperationLayout::Overflow(items)
        } else {
            OperationLayout::Inline(items)
        }
    }

    pub fn is_overflow(&self) -> bool {
        matches!(self, OperationLayout::Overflow(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row {
        enabled: bool,
    }

    fn keys(items: &[OperationItem]) -> Vec<&str> {
        items.iter().map(|i| i.key.as_str()).collect()
    }

    #[test]
    fn test_well_known_keys_are_case_insensitive() {
        let policy: OperationPolicy<Row> = OperationPolicy::fixed(["edit", "Detail", "DELETE"]);
        let items = policy.resolve(&Row { enabled: true });
        assert_eq!(keys(&items), vec!["EDIT", "DETAIL", "DELETE"]);
        assert!(items[2].danger);
        assert!(!items[0].danger);
    }

    #[test]
    fn test_unknown_keys_are_dropped() {
        let policy: OperationPolicy<Row> = OperationPolicy::fixed(["EDIT", "ARCHIVE"]);
        assert_eq!(keys(&policy.resolve(&Row { enabled: true })), vec!["EDIT"]);
    }

    #[test]
    fn test_dynamic_policy_sees_the_record() {
        let policy = OperationPolicy::dynamic(|row: &Row| {
            let toggle = if row.enabled {
                OperationItem::new("DISABLE", "Disable").danger()
            } else {
                OperationItem::new("ENABLE", "Enable")
            };
            vec!["EDIT".into(), toggle.into()]
        });
        assert_eq!(keys(&policy.resolve(&Row { enabled: true })), vec!["EDIT", "DISABLE"]);
        assert_eq!(keys(&policy.resolve(&Row { enabled: false })), vec!["EDIT", "ENABLE"]);
    }

    #[test]
    fn test_overflow_threshold() {
        let row = Row { enabled: true };
        let two: OperationPolicy<Row> = OperationPolicy::fixed(["EDIT", "DELETE"]);
        assert!(matches!(two.layout(&row), OperationLayout::Inline(ref v) if v.len() == 2));

        let three: OperationPolicy<Row> = OperationPolicy::fixed(["EDIT", "DETAIL", "DELETE"]);
        assert!(three.layout(&row).is_overflow());

        // dropped tokens do not count towards the threshold
        let filtered: OperationPolicy<Row> = OperationPolicy::fixed(["EDIT", "NOPE", "DELETE"]);
        assert!(!filtered.layout(&row).is_overflow());

        let none: OperationPolicy<Row> = OperationPolicy::fixed(["NOPE"]);
        assert_eq!(none.layout(&row), OperationLayout::Empty);
    }

    #[test]
    fn test_has_column() {
        let empty: OperationPolicy<Row> = OperationPolicy::fixed(Vec::<OperationToken>::new());
        assert!(!empty.has_column());
        let dynamic: OperationPolicy<Row> = OperationPolicy::dynamic(|_| Vec::new());
        assert!(dynamic.has_column());
    }
}
