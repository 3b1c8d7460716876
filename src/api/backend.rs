//! Fetch client for the preprocessing/OCR backend
//!
//! Three calls: POST the pending batch as multipart form data, GET the OCR
//! pass over whatever the server preprocessed last, and a full-page
//! navigation to the download endpoint. No retries, no cancellation; each
//! caller awaits one request to completion.

use serde::Deserialize;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FormData, Request, RequestInit, RequestMode, Response};

use crate::error::ApiError;

const API_BASE_URL: &str = "http://localhost:5000/api";

/// One OCR record per processed page, in page order.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OcrResult {
    pub filename: String,
    #[serde(rename = "imageBase64")]
    pub image_base64: String,
    /// Extracted text; `None` or empty when the engine recognized nothing.
    #[serde(rename = "ocrText", default)]
    pub ocr_text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PreprocessResponse {
    #[serde(rename = "processedImages")]
    processed_images: Vec<String>,
}

/// Upload filename carrying the batch position, so the server can restore
/// the user's ordering: `{index}_{filename}`.
fn upload_field_name(index: usize, file_name: &str) -> String {
    format!("{}_{}", index, file_name)
}

async fn send(request: &Request) -> Result<Response, ApiError> {
    let window = web_sys::window().ok_or_else(|| ApiError::Network("no window".to_string()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(request)).await?;
    let response: Response = resp_value
        .dyn_into()
        .map_err(|_| ApiError::Decode("fetch did not return a Response".to_string()))?;

    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }
    Ok(response)
}

async fn response_json(response: &Response) -> Result<JsValue, ApiError> {
    Ok(JsFuture::from(response.json()?).await?)
}

/// Builds the multipart body: one `images` entry per file, each upload
/// name carrying its batch position.
fn build_upload_form(files: &[(String, File)]) -> Result<FormData, ApiError> {
    let form = FormData::new()?;
    for (index, (name, file)) in files.iter().enumerate() {
        form.append_with_blob_and_filename("images", file, &upload_field_name(index, name))?;
    }
    Ok(form)
}

/// Sends the pending batch for preprocessing and returns the ordered list
/// of base64-encoded page images.
pub async fn preprocess_images(files: &[(String, File)]) -> Result<Vec<String>, ApiError> {
    let form = build_upload_form(files)?;

    // No explicit Content-Type: the browser sets the multipart boundary.
    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(form.as_ref());

    let url = format!("{}/preprocess", API_BASE_URL);
    let request = Request::new_with_str_and_init(&url, &opts)?;
    let response = send(&request).await?;
    let json = response_json(&response).await?;

    let body: PreprocessResponse =
        serde_wasm_bindgen::from_value(json).map_err(|e| ApiError::Decode(e.to_string()))?;
    Ok(body.processed_images)
}

/// Triggers OCR on the server side. The call carries no payload; the
/// server operates on the pages it preprocessed last.
pub async fn run_ocr() -> Result<Vec<OcrResult>, ApiError> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let url = format!("{}/ocr", API_BASE_URL);
    let request = Request::new_with_str_and_init(&url, &opts)?;
    let response = send(&request).await?;
    let json = response_json(&response).await?;

    serde_wasm_bindgen::from_value(json).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Navigates the page to the download endpoint; the browser handles the
/// file download from there.
pub fn download_results() -> Result<(), ApiError> {
    let window = web_sys::window().ok_or_else(|| ApiError::Network("no window".to_string()))?;
    window
        .location()
        .set_href(&format!("{}/download", API_BASE_URL))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    // =============================================
    // Upload field naming
    // =============================================

    #[test]
    fn test_upload_field_name_prefixes_index() {
        assert_eq!(upload_field_name(0, "a.png"), "0_a.png");
        assert_eq!(upload_field_name(1, "a(1).png"), "1_a(1).png");
        assert_eq!(upload_field_name(12, "scan.pdf"), "12_scan.pdf");
    }

    // =============================================
    // Wire-type deserialization
    // =============================================

    #[test]
    fn test_preprocess_response_deserialize() {
        let json = r#"{"processedImages": ["aGVsbG8=", "d29ybGQ="]}"#;
        let body: PreprocessResponse = serde_json::from_str(json).expect("deserialize");
        assert_eq!(body.processed_images, vec!["aGVsbG8=", "d29ybGQ="]);
    }

    #[test]
    fn test_preprocess_response_empty() {
        let json = r#"{"processedImages": []}"#;
        let body: PreprocessResponse = serde_json::from_str(json).expect("deserialize");
        assert!(body.processed_images.is_empty());
    }

    #[test]
    fn test_ocr_result_deserialize() {
        let json = r#"[
            {"filename": "0_a.png", "imageBase64": "aGVsbG8=", "ocrText": "Hello"},
            {"filename": "1_a(1).png", "imageBase64": "d29ybGQ=", "ocrText": ""}
        ]"#;
        let results: Vec<OcrResult> = serde_json::from_str(json).expect("deserialize");
        assert_eq!(
            results,
            vec![
                OcrResult {
                    filename: "0_a.png".to_string(),
                    image_base64: "aGVsbG8=".to_string(),
                    ocr_text: Some("Hello".to_string()),
                },
                OcrResult {
                    filename: "1_a(1).png".to_string(),
                    image_base64: "d29ybGQ=".to_string(),
                    ocr_text: Some(String::new()),
                },
            ],
        );
    }

    #[test]
    fn test_ocr_result_missing_text() {
        let json = r#"{"filename": "0_a.png", "imageBase64": "aGVsbG8="}"#;
        let result: OcrResult = serde_json::from_str(json).expect("deserialize");
        assert_eq!(result.ocr_text, None);
    }

    #[test]
    fn test_ocr_result_null_text() {
        let json = r#"{"filename": "0_a.png", "imageBase64": "aGVsbG8=", "ocrText": null}"#;
        let result: OcrResult = serde_json::from_str(json).expect("deserialize");
        assert_eq!(result.ocr_text, None);
    }
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn sample_file(name: &str) -> File {
        let parts = js_sys::Array::of1(&JsValue::from_str("content"));
        File::new_with_str_sequence(&parts, name).expect("File constructor failed")
    }

    #[wasm_bindgen_test]
    fn wasm_upload_form_carries_positional_names() {
        let files = vec![
            ("a.png".to_string(), sample_file("a.png")),
            ("a(1).png".to_string(), sample_file("a(1).png")),
        ];

        let form = build_upload_form(&files).expect("form build failed");
        let entries = form.get_all("images");
        assert_eq!(entries.length(), 2);

        let first: File = entries.get(0).dyn_into().expect("not a File entry");
        assert_eq!(first.name(), "0_a.png");
        let second: File = entries.get(1).dyn_into().expect("not a File entry");
        assert_eq!(second.name(), "1_a(1).png");
    }
}
