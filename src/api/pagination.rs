//! Cursor-following pagination over Notion list endpoints.

use super::types::PaginatedResponse;
use crate::error::AppError;

/// Everything collected by [`fetch_all_pages`].
#[derive(Debug, Clone)]
pub struct PaginationResult<T> {
    pub items: Vec<T>,
    pub pages_fetched: u32,
}

/// Calls `fetch_fn` with the previous response's cursor until the API
/// reports no more results, the cursor runs out, or `max_pages` is hit.
pub async fn fetch_all_pages<T, F, Fut>(
    mut fetch_fn: F,
    max_pages: Option<u32>,
) -> Result<PaginationResult<T>, AppError>
where
    F: FnMut(Option<String>) -> Fut,
    Fut: std::future::Future<Output = Result<PaginatedResponse<T>, AppError>>,
{
    let mut all_items = Vec::new();
    let mut cursor = None;
    let mut pages_fetched = 0u32;

    loop {
        if let Some(max) = max_pages {
            if pages_fetched >= max {
                log::debug!("Reached maximum page limit: {}", max);
                break;
            }
        }

        let response = fetch_fn(cursor).await?;

        let has_more = response.has_more;
        cursor = response.next_cursor;
        all_items.extend(response.results);
        pages_fetched += 1;

        if !has_more || cursor.is_none() {
            break;
        }
        log::debug!("Fetched page {}; following cursor", pages_fetched);
    }

    Ok(PaginationResult {
        items: all_items,
        pages_fetched,
    })
}
