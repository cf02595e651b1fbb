//! CSV export with a browser download.

use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// Types that can be exported as CSV rows.
pub trait CsvExportable {
    fn headers() -> Vec<&'static str>;
    fn to_csv_row(&self) -> Vec<String>;
}

/// Serialize the rows to CSV and trigger a download.
pub fn export_to_csv<T: CsvExportable>(data: &[T], filename: &str) -> Result<(), String> {
    if data.is_empty() {
        return Err("Nothing to export".to_string());
    }

    let mut csv = String::new();
    // UTF-8 BOM so Excel detects the encoding
    csv.push('\u{FEFF}');
    csv.push_str(&T::headers().join(","));
    csv.push('\n');
    for item in data {
        let row: Vec<String> = item.to_csv_row().iter().map(|c| escape_cell(c)).collect();
        csv.push_str(&row.join(","));
        csv.push('\n');
    }

    let blob = make_blob(&csv, "text/csv;charset=utf-8;")?;
    download_blob(&blob, filename)
}

fn escape_cell(cell: &str) -> String {
    if cell.contains(',') || cell.contains('"') || cell.contains('\n') || cell.contains('\r') {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}

fn make_blob(content: &str, mime: &str) -> Result<Blob, String> {
    let parts = js_sys::Array::new();
    parts.push(&wasm_bindgen::JsValue::from_str(content));
    let props = BlobPropertyBag::new();
    props.set_type(mime);
    Blob::new_with_str_sequence_and_options(&parts, &props)
        .map_err(|e| format!("Failed to create blob: {:?}", e))
}

/// Byte-array variant, used for the invoice PDF download.
pub fn make_binary_blob(bytes: &[u8], mime: &str) -> Result<Blob, String> {
    let array = js_sys::Uint8Array::from(bytes);
    let parts = js_sys::Array::new();
    parts.push(&array.buffer());
    let props = BlobPropertyBag::new();
    props.set_type(mime);
    Blob::new_with_buffer_source_sequence_and_options(&parts, &props)
        .map_err(|e| format!("Failed to create blob: {:?}", e))
}

/// Click a synthetic anchor pointing at an object URL for the blob.
pub fn download_blob(blob: &Blob, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;

    let url = Url::create_object_url_with_blob(blob).map_err(|e| format!("{:?}", e))?;
    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(|e| format!("{:?}", e))?
        .dyn_into()
        .map_err(|_| "Failed to create anchor".to_string())?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor.click();
    let _ = Url::revoke_object_url(&url);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cells_with_separators_are_quoted() {
        assert_eq!(escape_cell("plain"), "plain");
        assert_eq!(escape_cell("a,b"), "\"a,b\"");
        assert_eq!(escape_cell("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(escape_cell("line\nbreak"), "\"line\nbreak\"");
    }
}
