/// What kind of user gesture produced a selection change.
///
/// Carried through for callers that care; it does not change how the
/// selection is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectType {
    All,
    None,
    Invert,
    Single,
    Multiple,
}

/// Selected rows of a table, kept as parallel key/record lists.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionState<T> {
    selected_row_keys: Vec<String>,
    selected_rows: Vec<T>,
}

impl<T> Default for SelectionState<T> {
    fn default() -> Self {
        Self {
            selected_row_keys: Vec::new(),
            selected_rows: Vec::new(),
        }
    }
}

impl<T> SelectionState<T> {
    pub fn selected_row_keys(&self) -> &[String] {
        &self.selected_row_keys
    }

    pub fn selected_rows(&self) -> &[T] {
        &self.selected_rows
    }

    pub fn len(&self) -> usize {
        self.selected_row_keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected_row_keys.is_empty()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.selected_row_keys.iter().any(|k| k == key)
    }

    /// Replaces the selection with exactly `keys` and `rows`.
    pub fn on_select_change(&mut self, keys: Vec<String>, rows: Vec<T>, info: SelectType) {
        if keys.len() != rows.len() {
            log::warn!(
                "selection change ({:?}) with {} keys but {} rows",
                info,
                keys.len(),
                rows.len()
            );
        }
        self.selected_row_keys = keys;
        self.selected_rows = rows;
    }

    pub fn clear(&mut self) {
        self.selected_row_keys.clear();
        self.selected_rows.clear();
    }
}

impl<T: Clone> SelectionState<T> {
    /// Selection after toggling one row, in current selection order.
    pub fn toggled(&self, key: &str, row: &T) -> (Vec<String>, Vec<T>) {
        let mut keys = self.selected_row_keys.clone();
        let mut rows = self.selected_rows.clone();
        if let Some(pos) = keys.iter().position(|k| k == key) {
            keys.remove(pos);
            if pos < rows.len() {
                rows.remove(pos);
            }
        } else {
            keys.push(key.to_string());
            rows.push(row.clone());
        }
        (keys, rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_is_identity() {
        let mut sel = SelectionState::default();
        let keys = vec!["b".to_string(), "a".to_string()];
        let rows = vec![2, 1];
        sel.on_select_change(keys.clone(), rows.clone(), SelectType::Multiple);
        assert_eq!(sel.selected_row_keys(), keys.as_slice());
        assert_eq!(sel.selected_rows(), rows.as_slice());
    }

    #[test]
    fn test_change_overwrites_instead_of_merging() {
        let mut sel = SelectionState::default();
        sel.on_select_change(vec!["a".into()], vec![1], SelectType::Single);
        sel.on_select_change(vec!["c".into()], vec![3], SelectType::Single);
        assert_eq!(sel.selected_row_keys(), &["c".to_string()]);
        assert_eq!(sel.len(), 1);
    }

    #[test]
    fn test_deselect_all() {
        let mut sel = SelectionState::default();
        sel.on_select_change(vec!["a".into()], vec![1], SelectType::All);
        sel.on_select_change(Vec::new(), Vec::new(), SelectType::None);
        assert!(sel.is_empty());
        assert!(sel.selected_rows().is_empty());
    }

    #[test]
    fn test_toggled() {
        let mut sel = SelectionState::default();
        let (keys, rows) = sel.toggled("a", &1);
        sel.on_select_change(keys, rows, SelectType::Single);
        let (keys, rows) = sel.toggled("b", &2);
        assert_eq!(keys, vec!["a".to_string(), "b".to_string()]);
        assert_eq!(rows, vec![1, 2]);
        sel.on_select_change(keys, rows, SelectType::Single);
        let (keys, rows) = sel.toggled("a", &1);
        assert_eq!(keys, vec!["b".to_string()]);
        assert_eq!(rows, vec![2]);
    }
}
