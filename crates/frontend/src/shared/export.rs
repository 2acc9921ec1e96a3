//! CSV export of table rows, downloaded through a temporary link.

use thiserror::Error;
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExportError {
    #[error("Nothing to export")]
    Empty,
    #[error("Export failed: {0}")]
    Browser(String),
}

/// Rows that can be written as CSV.
pub trait CsvExport {
    fn headers() -> Vec<&'static str>;

    fn csv_row(&self) -> Vec<String>;
}

fn escape_cell(cell: &str) -> String {
    if cell.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}

fn push_line(out: &mut String, cells: impl Iterator<Item = String>) {
    out.push_str(&cells.collect::<Vec<_>>().join(","));
    out.push('\n');
}

/// CSV text with a UTF-8 BOM so spreadsheet apps pick the right encoding.
pub fn build_csv<T: CsvExport>(rows: &[T]) -> Result<String, ExportError> {
    if rows.is_empty() {
        return Err(ExportError::Empty);
    }
    let mut out = String::from('\u{FEFF}');
    push_line(&mut out, T::headers().into_iter().map(escape_cell));
    for row in rows {
        push_line(&mut out, row.csv_row().iter().map(|c| escape_cell(c)));
    }
    Ok(out)
}

pub fn export_csv<T: CsvExport>(rows: &[T], filename: &str) -> Result<(), ExportError> {
    let content = build_csv(rows)?;
    let blob = csv_blob(&content)?;
    download(&blob, filename)
}

fn browser_error(e: wasm_bindgen::JsValue) -> ExportError {
    ExportError::Browser(format!("{:?}", e))
}

fn csv_blob(content: &str) -> Result<Blob, ExportError> {
    let parts = js_sys::Array::new();
    parts.push(&wasm_bindgen::JsValue::from_str(content));
    let properties = BlobPropertyBag::new();
    properties.set_type("text/csv;charset=utf-8;");
    Blob::new_with_str_sequence_and_options(&parts, &properties).map_err(browser_error)
}

fn download(blob: &Blob, filename: &str) -> Result<(), ExportError> {
    let missing = |what: &str| ExportError::Browser(format!("no {}", what));
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| missing("document"))?;
    let body = document.body().ok_or_else(|| missing("body"))?;
    let url = Url::create_object_url_with_blob(blob).map_err(browser_error)?;

    let anchor = document
        .create_element("a")
        .map_err(browser_error)?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|_| missing("anchor element"))?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    body.append_child(&anchor).map_err(browser_error)?;
    anchor.click();
    body.remove_child(&anchor).map_err(browser_error)?;

    Url::revoke_object_url(&url).map_err(browser_error)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row(&'static str, &'static str);

    impl CsvExport for Row {
        fn headers() -> Vec<&'static str> {
            vec!["Name", "Note"]
        }

        fn csv_row(&self) -> Vec<String> {
            vec![self.0.to_string(), self.1.to_string()]
        }
    }

    #[test]
    fn test_build_csv_escapes_cells() {
        let csv = build_csv(&[Row("Acme", "plain"), Row("B, Ltd", "say \"hi\"")]).unwrap();
        assert_eq!(
            csv,
            "\u{FEFF}Name,Note\nAcme,plain\n\"B, Ltd\",\"say \"\"hi\"\"\"\n"
        );
    }

    #[test]
    fn test_empty_export_is_rejected() {
        assert_eq!(build_csv::<Row>(&[]), Err(ExportError::Empty));
    }
}
