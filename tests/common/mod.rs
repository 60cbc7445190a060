//! In-memory Notion used by the integration tests.
#![allow(dead_code)]

use recipe_buddy::{
    AppError, CreatePageRequest, DatabaseId, NotionErrorCode, NotionRepository, Page,
    PageId, PaginatedResponse, PropertyMap, QueryRequest, UpdatePageRequest,
};
use serde_json::json;
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

pub const INGREDIENTS_QUERY: &str = include_str!("../fixtures/ingredients_query.json");

/// A request the fake received, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Query {
        database: String,
        request: QueryRequest,
    },
    Retrieve(String),
    Create(serde_json::Value),
    Update {
        id: String,
        body: serde_json::Value,
    },
}

/// Scripted query responses plus a page table for retrieve/create/update.
#[derive(Default)]
pub struct FakeNotion {
    queries: Mutex<VecDeque<PaginatedResponse<Page>>>,
    pages: Mutex<HashMap<String, Page>>,
    calls: Mutex<Vec<Call>>,
    next_id: Mutex<u32>,
}

impl FakeNotion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query_responses(responses: Vec<PaginatedResponse<Page>>) -> Self {
        let fake = Self::new();
        *fake.queries.lock().unwrap() = responses.into();
        fake
    }

    pub fn insert_page(&self, page: Page) {
        self.pages
            .lock()
            .unwrap()
            .insert(page.id.as_str().to_string(), page);
    }

    pub fn page(&self, id: &str) -> Option<Page> {
        self.pages.lock().unwrap().get(id).cloned()
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

fn not_found(id: &PageId) -> AppError {
    AppError::NotionApi {
        code: NotionErrorCode::ObjectNotFound,
        status: 404,
        message: format!("Could not find page with ID: {}", id.to_hyphenated()),
        request_id: None,
    }
}

#[async_trait::async_trait]
impl NotionRepository for FakeNotion {
    async fn query_database(
        &self,
        database: &DatabaseId,
        request: &QueryRequest,
    ) -> Result<PaginatedResponse<Page>, AppError> {
        self.record(Call::Query {
            database: database.as_str().to_string(),
            request: request.clone(),
        });
        self.queries
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| AppError::MalformedResponse("no scripted query response".to_string()))
    }

    async fn retrieve_page(&self, id: &PageId) -> Result<Page, AppError> {
        self.record(Call::Retrieve(id.as_str().to_string()));
        self.page(id.as_str()).ok_or_else(|| not_found(id))
    }

    async fn create_page(&self, request: &CreatePageRequest) -> Result<Page, AppError> {
        self.record(Call::Create(serde_json::to_value(request)?));
        let id = {
            let mut next = self.next_id.lock().unwrap();
            *next += 1;
            format!("{:032x}", *next)
        };
        let page = page_with(&id, &request.parent.database_id, request.properties.clone());
        self.insert_page(page.clone());
        Ok(page)
    }

    async fn update_page(
        &self,
        id: &PageId,
        request: &UpdatePageRequest,
    ) -> Result<Page, AppError> {
        self.record(Call::Update {
            id: id.as_str().to_string(),
            body: serde_json::to_value(request)?,
        });
        let mut pages = self.pages.lock().unwrap();
        let page = pages.get_mut(id.as_str()).ok_or_else(|| not_found(id))?;
        if let Some(properties) = &request.properties {
            for (name, value) in properties {
                page.properties.insert(name.clone(), value.clone());
            }
        }
        if let Some(archived) = request.archived {
            page.archived = archived;
            page.in_trash = archived;
        }
        Ok(page.clone())
    }
}

/// Builds a database page with the given properties.
pub fn page_with(id: &str, database_id: &str, properties: PropertyMap) -> Page {
    serde_json::from_value(json!({
        "object": "page",
        "id": id,
        "created_time": "2023-01-01T00:00:00.000Z",
        "last_edited_time": "2023-01-01T00:00:00.000Z",
        "created_by": {"object": "user", "id": "user_id_1"},
        "last_edited_by": {"object": "user", "id": "user_id_1"},
        "parent": {"type": "database_id", "database_id": database_id},
        "archived": false,
        "in_trash": false,
        "properties": properties,
        "url": format!("https://www.notion.so/{}", id)
    }))
    .expect("test page should deserialize")
}

/// The two-page ingredient query from the fixture file.
pub fn ingredients_response() -> PaginatedResponse<Page> {
    serde_json::from_str(INGREDIENTS_QUERY).expect("fixture should deserialize")
}

/// The fixture response rewritten to point at a following page.
pub fn with_cursor(
    mut response: PaginatedResponse<Page>,
    next_cursor: Option<&str>,
) -> PaginatedResponse<Page> {
    response.has_more = next_cursor.is_some();
    response.next_cursor = next_cursor.map(str::to_string);
    response
}

pub fn ingredients_db() -> DatabaseId {
    DatabaseId::parse("a1b2c3d4e5f67890abcdef1234567890").unwrap()
}

pub fn recipes_db() -> DatabaseId {
    DatabaseId::parse("0123456789abcdef0123456789abcdef").unwrap()
}
