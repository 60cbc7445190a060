mod common;

use common::{ingredients_db, ingredients_response, with_cursor, Call, FakeNotion, INGREDIENTS_QUERY};
use pretty_assertions::assert_eq;
use recipe_buddy::{
    parse_pages_pagination, ApiResponse, AppError, NotionDatabase, NotionErrorCode, Parent,
    QueryRequest,
};
use reqwest::StatusCode;
use std::sync::Arc;

fn response(status: StatusCode, body: &str) -> ApiResponse<String> {
    ApiResponse {
        data: body.to_string(),
        status,
        url: "https://api.notion.com/v1/databases/x/query".to_string(),
    }
}

#[test]
fn query_fixture_parses_into_pages() {
    let parsed = parse_pages_pagination(response(StatusCode::OK, INGREDIENTS_QUERY)).unwrap();

    assert_eq!(parsed.object, "list");
    assert!(!parsed.has_more);
    assert_eq!(parsed.next_cursor, None);
    assert_eq!(parsed.results.len(), 2);

    let chicken = &parsed.results[0];
    assert_eq!(chicken.id.as_str(), "page_id_1");
    assert_eq!(chicken.title(), Some("Chicken".to_string()));
    assert!(matches!(chicken.parent, Parent::DatabaseId { .. }));
}

#[test]
fn notion_error_body_is_typed() {
    let body = r#"{"object":"error","status":401,"code":"unauthorized","message":"API token is invalid.","request_id":"r-1"}"#;

    let err = parse_pages_pagination(response(StatusCode::UNAUTHORIZED, body)).unwrap_err();

    assert_eq!(err.notion_code(), Some(&NotionErrorCode::Unauthorized));
    assert!(err.to_string().contains("API token is invalid."));
}

#[test]
fn rate_limit_is_retryable() {
    let body = r#"{"object":"error","status":429,"code":"rate_limited","message":"slow down"}"#;

    let err = parse_pages_pagination(response(StatusCode::TOO_MANY_REQUESTS, body)).unwrap_err();

    assert!(err.notion_code().unwrap().is_retryable());
}

#[test]
fn bad_gateway_without_json_keeps_the_status() {
    let err = parse_pages_pagination(response(StatusCode::BAD_GATEWAY, "upstream error"))
        .unwrap_err();

    match err {
        AppError::NotionApi { code, status, .. } => {
            assert_eq!(code, NotionErrorCode::HttpStatus(502));
            assert_eq!(status, 502);
        }
        other => panic!("expected NotionApi, got {:?}", other),
    }
}

#[tokio::test]
async fn database_honors_its_page_size() {
    let fake = Arc::new(FakeNotion::with_query_responses(vec![
        with_cursor(ingredients_response(), Some("c1")),
        with_cursor(ingredients_response(), Some("c2")),
        with_cursor(ingredients_response(), None),
    ]));
    let database = NotionDatabase::new(fake.clone(), ingredients_db()).with_page_size(2);

    let pages = database.all_pages().await.unwrap();

    assert_eq!(pages.len(), 6);
    let requests: Vec<QueryRequest> = fake
        .calls()
        .into_iter()
        .filter_map(|call| match call {
            Call::Query { request, .. } => Some(request),
            _ => None,
        })
        .collect();
    assert_eq!(
        requests,
        vec![
            QueryRequest::new(2),
            QueryRequest::new(2).with_cursor(Some("c1".to_string())),
            QueryRequest::new(2).with_cursor(Some("c2".to_string())),
        ]
    );
}

#[tokio::test]
async fn query_failure_aborts_the_listing() {
    let fake = Arc::new(FakeNotion::with_query_responses(vec![with_cursor(
        ingredients_response(),
        Some("c1"),
    )]));
    let database = NotionDatabase::new(fake.clone(), ingredients_db());

    let err = database.all_pages().await.unwrap_err();

    assert!(matches!(err, AppError::MalformedResponse(_)));
    assert_eq!(fake.calls().len(), 2);
}
