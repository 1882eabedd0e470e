use std::sync::Arc;

use serde_json::json;

use crate::error::{FoodsenseError, FoodsenseResult, NetworkError};
use crate::models::{RequestOutcome, ScanResult, StillImage};
use crate::traits::{Headers, HttpClient, MultipartFile, Response};

/// Service root used when none is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

pub const BARCODE_PATH: &str = "/scan/barcode";
pub const IMAGE_PATH: &str = "/scan/image";

pub const BARCODE_FAILURE_MESSAGE: &str = "Failed to scan product. Please try again.";
pub const IMAGE_FAILURE_MESSAGE: &str = "Failed to analyze image. Please try again.";

/// Multipart field the service reads the image from.
const IMAGE_FIELD: &str = "file";

/// Longest error body excerpt written to the log.
const MAX_LOGGED_BODY: usize = 200;

/// Issues barcode and image analysis requests.
///
/// Cheap to clone; clones share the underlying HTTP client.
#[derive(Clone)]
pub struct AnalysisClient {
    http: Arc<dyn HttpClient>,
    base_url: String,
}

impl AnalysisClient {
    pub fn new(http: Arc<dyn HttpClient>, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Look up a product by barcode.
    pub async fn analyze_barcode(&self, code: &str) -> RequestOutcome {
        let url = self.url(BARCODE_PATH);
        tracing::info!("Analyzing barcode {}", code);

        let result = self
            .http
            .post_json(&url, &json!({ "barcode": code }), &Self::headers())
            .await
            .map_err(FoodsenseError::from)
            .and_then(|response| parse_scan_result(&response));

        Self::into_outcome(result, &url, BARCODE_FAILURE_MESSAGE)
    }

    /// Classify a still photo of a label.
    pub async fn analyze_image(&self, still: &StillImage) -> RequestOutcome {
        let url = self.url(IMAGE_PATH);
        tracing::info!(
            "Analyzing image {} ({} bytes)",
            still.file_name,
            still.len()
        );

        let file = MultipartFile::new(
            IMAGE_FIELD,
            still.file_name.clone(),
            still.mime_type.clone(),
            still.bytes.clone(),
        );
        let result = self
            .http
            .post_multipart(&url, file, &Self::headers())
            .await
            .map_err(FoodsenseError::from)
            .and_then(|response| parse_scan_result(&response));

        Self::into_outcome(result, &url, IMAGE_FAILURE_MESSAGE)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn headers() -> Headers {
        let mut headers = Headers::new();
        headers.insert("Accept".to_string(), "application/json".to_string());
        headers
    }

    fn into_outcome(
        result: FoodsenseResult<ScanResult>,
        url: &str,
        failure_message: &str,
    ) -> RequestOutcome {
        match result {
            Ok(scan) => {
                tracing::info!(
                    "Verdict {} for {}",
                    scan.verdict.label(),
                    scan.product_name
                );
                RequestOutcome::Success(scan)
            }
            Err(err) => {
                tracing::warn!(
                    code = err.error_code(),
                    category = %err.category(),
                    "Analysis request to {} failed: {}",
                    url,
                    err
                );
                RequestOutcome::failure(failure_message)
            }
        }
    }
}

impl std::fmt::Debug for AnalysisClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnalysisClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

/// Turn a service response into a verdict.
///
/// Non-2xx statuses, bodies that are not a JSON object, and objects missing
/// required fields are all errors.
pub(crate) fn parse_scan_result(response: &Response) -> FoodsenseResult<ScanResult> {
    if !response.is_success() {
        let body = response.text().unwrap_or_default();
        return Err(NetworkError::HttpStatus {
            status: response.status,
            message: excerpt(&body),
        }
        .into());
    }

    let value: serde_json::Value = response.json()?;
    if !value.is_object() {
        return Err(FoodsenseError::invalid_response(format!(
            "expected a JSON object, got {}",
            excerpt(&value.to_string())
        )));
    }

    Ok(serde_json::from_value(value)?)
}

fn excerpt(body: &str) -> String {
    if body.len() <= MAX_LOGGED_BODY {
        return body.to_string();
    }
    let mut end = MAX_LOGGED_BODY;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &body[..end])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{MockHttpClient, MockResponse};
    use crate::models::{IngredientStatus, Verdict};
    use std::time::Duration;

    fn client_with(mock: &MockHttpClient) -> AnalysisClient {
        AnalysisClient::new(Arc::new(mock.clone()), "http://test/")
    }

    fn response(status: u16, body: &str) -> Response {
        Response::new(status, body.to_string().into())
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = client_with(&MockHttpClient::new());
        assert_eq!(client.base_url(), "http://test");
        assert_eq!(client.url(BARCODE_PATH), "http://test/scan/barcode");
    }

    #[tokio::test]
    async fn test_analyze_barcode_success() {
        let mock = MockHttpClient::new();
        mock.set_response(
            "http://test/scan/barcode",
            MockResponse::json(json!({
                "product_name": "Oat Milk",
                "verdict": "safe",
                "explanation": "Simple ingredients.",
                "ingredients_analysis": [
                    {"name": "Oats", "status": "SAFE", "reason": "Whole grain"}
                ]
            })),
        );

        let outcome = client_with(&mock).analyze_barcode("0123456789012").await;
        let result = outcome.result().unwrap();
        assert_eq!(result.product_name, "Oat Milk");
        assert_eq!(result.verdict, Verdict::Safe);
        assert_eq!(result.ingredients_analysis[0].status, IngredientStatus::Safe);

        let requests = mock.get_requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].url, "http://test/scan/barcode");
        assert_eq!(requests[0].json(), Some(&json!({"barcode": "0123456789012"})));
    }

    #[tokio::test]
    async fn test_analyze_image_sends_file_field() {
        let mock = MockHttpClient::new();
        mock.set_default_response(MockResponse::json(json!({
            "verdict": "AVOID",
            "explanation": "High sugar."
        })));

        let still = StillImage::jpeg(vec![0xFF, 0xD8, 0xFF]);
        let outcome = client_with(&mock).analyze_image(&still).await;
        assert_eq!(outcome.result().unwrap().verdict, Verdict::Avoid);

        let requests = mock.get_requests();
        let file = requests[0].file().unwrap();
        assert_eq!(requests[0].url, "http://test/scan/image");
        assert_eq!(file.field_name, "file");
        assert_eq!(file.file_name, "label_scan.jpg");
        assert_eq!(file.mime_type, "image/jpeg");
        assert_eq!(file.bytes.len(), 3);
    }

    #[tokio::test]
    async fn test_transport_failure_is_generic() {
        let mock = MockHttpClient::new();
        mock.set_default_response(MockResponse::Error(NetworkError::ConnectionFailed {
            url: "http://test".to_string(),
            message: "refused".to_string(),
        }));

        let client = client_with(&mock);
        let barcode = client.analyze_barcode("1").await;
        assert_eq!(barcode.reason(), Some(BARCODE_FAILURE_MESSAGE));

        let image = client.analyze_image(&StillImage::jpeg(vec![1])).await;
        assert_eq!(image.reason(), Some(IMAGE_FAILURE_MESSAGE));
    }

    #[tokio::test]
    async fn test_non_2xx_is_failure() {
        let mock = MockHttpClient::new();
        mock.set_default_response(MockResponse::status(
            404,
            r#"{"detail": "Product not found", "explanation": "x"}"#,
        ));
        let outcome = client_with(&mock).analyze_barcode("404").await;
        assert!(!outcome.is_success());
    }

    #[tokio::test]
    async fn test_delayed_response_still_arrives() {
        let mock = MockHttpClient::new();
        mock.set_default_response(MockResponse::Delayed(
            Duration::from_millis(5),
            response(200, r#"{"explanation": "late"}"#),
        ));
        let outcome = client_with(&mock).analyze_barcode("1").await;
        assert_eq!(outcome.result().unwrap().explanation, "late");
    }

    #[test]
    fn test_parse_scan_result_rejects_bad_payloads() {
        for body in [
            "not json",
            "[]",
            r#"["Oat Milk", "SAFE", "ok"]"#,
            r#""just a string""#,
            r#"{"product_name": "No explanation"}"#,
            r#"{"explanation": 5}"#,
            r#"{"explanation": "ok", "ingredients_analysis": "none"}"#,
        ] {
            assert!(
                parse_scan_result(&response(200, body)).is_err(),
                "expected failure for {}",
                body
            );
        }
    }

    #[test]
    fn test_parse_scan_result_defaults() {
        let result = parse_scan_result(&response(
            200,
            r#"{"explanation": "ok", "ingredients_analysis": null, "verdict": "ERROR"}"#,
        ))
        .unwrap();
        assert_eq!(result.product_name, "Unknown Product");
        assert_eq!(result.verdict, Verdict::Unknown);
        assert!(result.ingredients_analysis.is_empty());
    }

    #[test]
    fn test_parse_scan_result_status_error_category() {
        let err = parse_scan_result(&response(500, "boom")).unwrap_err();
        assert!(matches!(
            err,
            FoodsenseError::Network(NetworkError::HttpStatus { status: 500, .. })
        ));
    }

    #[test]
    fn test_excerpt_truncates_on_char_boundary() {
        let long = "é".repeat(150);
        let cut = excerpt(&long);
        assert!(cut.ends_with("..."));
        assert!(cut.len() <= MAX_LOGGED_BODY + 3);
        assert_eq!(excerpt("short"), "short");
    }
}
