// src/api/parser.rs
//! Turns raw HTTP responses into typed values or typed Notion errors.

use super::types::{ApiResponse, NotionApiErrorResponse, PaginatedResponse};
use crate::constants::ERROR_BODY_PREVIEW_LENGTH;
use crate::error::{AppError, NotionErrorCode};
use crate::model::Page;

/// Parse any Notion API response: success bodies into `T`, failures into
/// `AppError::NotionApi`.
pub fn parse_api_response<T>(result: ApiResponse<String>) -> Result<T, AppError>
where
    T: serde::de::DeserializeOwned,
{
    if result.status.is_success() {
        parse_success(&result.data, &result.url)
    } else {
        Err(parse_error(&result))
    }
}

fn parse_success<T>(body: &str, url: &str) -> Result<T, AppError>
where
    T: serde::de::DeserializeOwned,
{
    serde_json::from_str(body).map_err(|e| {
        log::error!("Failed to parse response from {}: {}", url, e);
        AppError::MalformedResponse(format!("{} (body: {})", e, preview(body)))
    })
}

/// Builds the error for a non-2xx response, preferring Notion's own error body.
fn parse_error(result: &ApiResponse<String>) -> AppError {
    let status = result.status.as_u16();

    if let Ok(body) = serde_json::from_str::<NotionApiErrorResponse>(&result.data) {
        return AppError::NotionApi {
            code: NotionErrorCode::from_api_response(&body.code),
            status: body.status.unwrap_or(status),
            message: body.message,
            request_id: body.request_id,
        };
    }

    log::debug!(
        "Unparseable error body from {}: {}",
        result.url,
        preview(&result.data)
    );
    AppError::NotionApi {
        code: NotionErrorCode::from_http_status(status),
        status,
        message: format!("HTTP {} from {}", result.status, result.url),
        request_id: None,
    }
}

fn preview(body: &str) -> String {
    if body.chars().count() > ERROR_BODY_PREVIEW_LENGTH {
        let head: String = body.chars().take(ERROR_BODY_PREVIEW_LENGTH).collect();
        format!("{}...", head)
    } else {
        body.to_string()
    }
}

/// Parse a single page object.
pub fn parse_page_response(result: ApiResponse<String>) -> Result<Page, AppError> {
    parse_api_response(result)
}

/// Parse one page of database query results.
pub fn parse_pages_pagination(
    result: ApiResponse<String>,
) -> Result<PaginatedResponse<Page>, AppError> {
    parse_api_response(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    fn response(status: u16, body: &str) -> ApiResponse<String> {
        ApiResponse {
            data: body.to_string(),
            status: StatusCode::from_u16(status).unwrap(),
            url: "https://api.notion.com/v1/pages/abc".to_string(),
        }
    }

    #[test]
    fn test_error_parsing() {
        let error_json = r#"{
            "object": "error",
            "status": 404,
            "code": "object_not_found",
            "message": "Could not find page with ID: abc123",
            "request_id": "req_123"
        }"#;

        match parse_page_response(response(404, error_json)) {
            Err(AppError::NotionApi {
                code,
                status,
                request_id,
                ..
            }) => {
                assert_eq!(code, NotionErrorCode::ObjectNotFound);
                assert_eq!(status, 404);
                assert_eq!(request_id.as_deref(), Some("req_123"));
            }
            other => panic!("Expected AppError::NotionApi, got {:?}", other),
        }
    }

    #[test]
    fn unparseable_error_body_falls_back_to_status() {
        let err = parse_page_response(response(502, "<html>Bad Gateway</html>")).unwrap_err();
        assert_eq!(err.notion_code(), Some(&NotionErrorCode::HttpStatus(502)));
        assert!(err.to_string().contains("502"));
    }

    #[test]
    fn malformed_success_body() {
        let err = parse_page_response(response(200, "{\"object\": \"page\"}")).unwrap_err();
        assert!(matches!(err, AppError::MalformedResponse(_)));
    }

    #[test]
    fn preview_truncates_on_char_boundaries() {
        let body = "é".repeat(ERROR_BODY_PREVIEW_LENGTH + 10);
        let shown = preview(&body);
        assert!(shown.ends_with("..."));
        assert_eq!(shown.chars().count(), ERROR_BODY_PREVIEW_LENGTH + 3);
    }
}
