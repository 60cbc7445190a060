//! Lenient readers and strict writers for Notion property objects.
//!
//! Readers treat a missing property, an unexpected shape and a JSON `null`
//! the same way: the value is absent. Whether absence is acceptable is the
//! caller's decision.

use crate::constants::RICH_TEXT_SEGMENT_MAX_CHARS;
use crate::types::PageId;
use indexmap::IndexMap;
use serde_json::{json, Value};

/// Property name → raw property object, in the order Notion returned them.
pub type PropertyMap = IndexMap<String, Value>;

/// Concatenated text of a rich text array.
fn rich_text_plain(segments: &[Value]) -> String {
    segments
        .iter()
        .filter_map(|segment| {
            segment
                .get("plain_text")
                .and_then(Value::as_str)
                .or_else(|| {
                    segment
                        .get("text")
                        .and_then(|text| text.get("content"))
                        .and_then(Value::as_str)
                })
        })
        .collect()
}

/// Reads a `title` property as plain text.
pub fn read_title(properties: &PropertyMap, name: &str) -> Option<String> {
    let segments = properties.get(name)?.get("title")?.as_array()?;
    if segments.is_empty() {
        return None;
    }
    Some(rich_text_plain(segments))
}

/// Reads a `rich_text` property as plain text.
pub fn read_rich_text(properties: &PropertyMap, name: &str) -> Option<String> {
    let segments = properties.get(name)?.get("rich_text")?.as_array()?;
    Some(rich_text_plain(segments))
}

/// Reads the option name of a `select` property.
pub fn read_select(properties: &PropertyMap, name: &str) -> Option<String> {
    properties
        .get(name)?
        .get("select")?
        .get("name")?
        .as_str()
        .map(str::to_string)
}

pub fn read_number(properties: &PropertyMap, name: &str) -> Option<f64> {
    properties.get(name)?.get("number")?.as_f64()
}

/// Reads the page IDs of a `relation` property, in order.
pub fn read_relation(properties: &PropertyMap, name: &str) -> Option<Vec<PageId>> {
    let entries = properties.get(name)?.get("relation")?.as_array()?;
    Some(
        entries
            .iter()
            .filter_map(|entry| entry.get("id").and_then(Value::as_str))
            .map(PageId::from_api)
            .collect(),
    )
}

/// Whether Notion cut a relation short. Page objects carry at most 25
/// relation entries and set `has_more` when there are others.
pub fn relation_has_more(properties: &PropertyMap, name: &str) -> bool {
    properties
        .get(name)
        .and_then(|property| property.get("has_more"))
        .and_then(Value::as_bool)
        .unwrap_or(false)
}

pub fn title_value(text: &str) -> Value {
    json!({ "title": text_segments(text) })
}

pub fn rich_text_value(text: &str) -> Value {
    json!({ "rich_text": text_segments(text) })
}

pub fn select_value(option: &str) -> Value {
    json!({ "select": { "name": option } })
}

pub fn number_value(number: Option<f64>) -> Value {
    json!({ "number": number })
}

pub fn relation_value(ids: &[PageId]) -> Value {
    let entries: Vec<Value> = ids
        .iter()
        .map(|id| json!({ "id": id.to_hyphenated() }))
        .collect();
    json!({ "relation": entries })
}

/// Splits text into rich text segments no longer than Notion's per-segment limit.
fn text_segments(text: &str) -> Vec<Value> {
    if text.is_empty() {
        return Vec::new();
    }
    let chars: Vec<char> = text.chars().collect();
    chars
        .chunks(RICH_TEXT_SEGMENT_MAX_CHARS)
        .map(|chunk| {
            let content: String = chunk.iter().collect();
            json!({ "type": "text", "text": { "content": content } })
        })
        .collect()
}
