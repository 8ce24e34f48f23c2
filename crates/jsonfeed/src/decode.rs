// ABOUTME: Decoding of wire JSON into Feed, Item, Author, Attachment, and Hub.
// ABOUTME: Hand-walks the serde_json value tree so errors can name entity and field.

use crate::datetime::parse_iso8601;
use crate::error::Error;
use crate::models::{Attachment, Author, Feed, Hub, Item};
use chrono::{DateTime, FixedOffset};
use serde_json::{Map, Value};

/// Decodes a JSON Feed document from a UTF-8 string.
///
/// # Arguments
/// * `s` - Raw JSON text, typically the body fetched from a feed's
///   `feed_url` (fetching is the caller's concern)
///
/// # Returns
/// * `Ok(Feed)` - Successfully decoded feed
/// * `Err(Error)` - Malformed JSON, a missing or mistyped required
///   field, or an invalid date; the whole document is rejected
pub fn from_str(s: &str) -> Result<Feed, Error> {
    let value: Value = serde_json::from_str(s)?;
    Feed::from_value(&value)
}

/// Decodes a JSON Feed document from raw bytes. See [`from_str`].
pub fn from_slice(data: &[u8]) -> Result<Feed, Error> {
    let value: Value = serde_json::from_slice(data)?;
    Feed::from_value(&value)
}

impl Feed {
    /// Decodes a feed from an already-parsed JSON value.
    ///
    /// Unknown fields are ignored for forward compatibility. A null
    /// required field counts as missing.
    pub fn from_value(value: &Value) -> Result<Self, Error> {
        let obj = as_object(value, "Feed")?;

        let items = match field(obj, "items") {
            None => return Err(Error::missing("Feed", "items")),
            Some(Value::Array(values)) => values
                .iter()
                .map(Item::from_value)
                .collect::<Result<Vec<_>, _>>()?,
            Some(_) => return Err(Error::invalid_type("Feed", "items", "array")),
        };

        Ok(Feed {
            version: required_string(obj, "Feed", "version")?,
            title: required_string(obj, "Feed", "title")?,
            home_page_url: optional_string(obj, "Feed", "home_page_url")?,
            feed_url: optional_string(obj, "Feed", "feed_url")?,
            description: optional_string(obj, "Feed", "description")?,
            user_comment: optional_string(obj, "Feed", "user_comment")?,
            next_url: optional_string(obj, "Feed", "next_url")?,
            icon: optional_string(obj, "Feed", "icon")?,
            favicon: optional_string(obj, "Feed", "favicon")?,
            author: optional_author(obj, "Feed")?,
            expired: optional_bool(obj, "Feed", "expired")?,
            hubs: optional_vec(obj, "Feed", "hubs", Hub::from_value)?,
            items,
        })
    }
}

impl Item {
    /// Decodes an item from a JSON value.
    ///
    /// The content rule enforced by [`Item::builder`] is deliberately
    /// not applied here: third-party feeds are ingested permissively,
    /// so an item with neither content field still decodes.
    pub fn from_value(value: &Value) -> Result<Self, Error> {
        let obj = as_object(value, "Item")?;

        // Readers must coerce an id presented as a number or other
        // scalar to a string.
        let id = match field(obj, "id") {
            None => return Err(Error::missing("Item", "id")),
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            Some(Value::Bool(b)) => b.to_string(),
            Some(_) => return Err(Error::invalid_type("Item", "id", "string")),
        };

        Ok(Item {
            id,
            url: optional_string(obj, "Item", "url")?,
            external_url: optional_string(obj, "Item", "external_url")?,
            title: optional_string(obj, "Item", "title")?,
            content_html: optional_string(obj, "Item", "content_html")?,
            content_text: optional_string(obj, "Item", "content_text")?,
            summary: optional_string(obj, "Item", "summary")?,
            image: optional_string(obj, "Item", "image")?,
            banner_image: optional_string(obj, "Item", "banner_image")?,
            date_published: optional_date(obj, "Item", "date_published")?,
            date_modified: optional_date(obj, "Item", "date_modified")?,
            author: optional_author(obj, "Item")?,
            tags: optional_string_vec(obj, "Item", "tags")?,
            attachments: optional_vec(obj, "Item", "attachments", Attachment::from_value)?,
        })
    }
}

impl Author {
    /// Decodes an author from a JSON value.
    ///
    /// All three fields are optional on the wire, so an empty object
    /// decodes to an author the builder would have rejected.
    pub fn from_value(value: &Value) -> Result<Self, Error> {
        let obj = as_object(value, "Author")?;
        Ok(Author {
            name: optional_string(obj, "Author", "name")?,
            url: optional_string(obj, "Author", "url")?,
            avatar: optional_string(obj, "Author", "avatar")?,
        })
    }
}

impl Attachment {
    /// Decodes an attachment from a JSON value.
    pub fn from_value(value: &Value) -> Result<Self, Error> {
        let obj = as_object(value, "Attachment")?;
        Ok(Attachment {
            url: required_string(obj, "Attachment", "url")?,
            mime_type: required_string(obj, "Attachment", "mime_type")?,
            title: optional_string(obj, "Attachment", "title")?,
            size: optional_u64(obj, "Attachment", "size_in_bytes")?,
            duration: optional_f64(obj, "Attachment", "duration_in_seconds")?,
        })
    }
}

impl Hub {
    /// Decodes a hub from a JSON value.
    pub fn from_value(value: &Value) -> Result<Self, Error> {
        let obj = as_object(value, "Hub")?;
        Ok(Hub {
            hub_type: required_string(obj, "Hub", "type")?,
            url: required_string(obj, "Hub", "url")?,
        })
    }
}

// ----------------------------------------------------------------------------
// Field access helpers
// ----------------------------------------------------------------------------

fn as_object<'a>(value: &'a Value, entity: &'static str) -> Result<&'a Map<String, Value>, Error> {
    value
        .as_object()
        .ok_or_else(|| Error::invalid_type(entity, ".", "object"))
}

/// Looks up a field, treating an explicit null the same as absence.
fn field<'a>(obj: &'a Map<String, Value>, name: &str) -> Option<&'a Value> {
    match obj.get(name) {
        Some(Value::Null) | None => None,
        Some(value) => Some(value),
    }
}

fn required_string(
    obj: &Map<String, Value>,
    entity: &'static str,
    name: &'static str,
) -> Result<String, Error> {
    match field(obj, name) {
        None => Err(Error::missing(entity, name)),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(Error::invalid_type(entity, name, "string")),
    }
}

fn optional_string(
    obj: &Map<String, Value>,
    entity: &'static str,
    name: &'static str,
) -> Result<Option<String>, Error> {
    match field(obj, name) {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(Error::invalid_type(entity, name, "string")),
    }
}

fn optional_bool(
    obj: &Map<String, Value>,
    entity: &'static str,
    name: &'static str,
) -> Result<Option<bool>, Error> {
    match field(obj, name) {
        None => Ok(None),
        Some(Value::Bool(b)) => Ok(Some(*b)),
        Some(_) => Err(Error::invalid_type(entity, name, "boolean")),
    }
}

fn optional_u64(
    obj: &Map<String, Value>,
    entity: &'static str,
    name: &'static str,
) -> Result<Option<u64>, Error> {
    match field(obj, name) {
        None => Ok(None),
        Some(Value::Number(n)) => n
            .as_u64()
            .map(Some)
            .ok_or_else(|| Error::invalid_type(entity, name, "non-negative integer")),
        Some(_) => Err(Error::invalid_type(entity, name, "non-negative integer")),
    }
}

fn optional_f64(
    obj: &Map<String, Value>,
    entity: &'static str,
    name: &'static str,
) -> Result<Option<f64>, Error> {
    match field(obj, name) {
        None => Ok(None),
        Some(Value::Number(n)) => n
            .as_f64()
            .map(Some)
            .ok_or_else(|| Error::invalid_type(entity, name, "number")),
        Some(_) => Err(Error::invalid_type(entity, name, "number")),
    }
}

fn optional_date(
    obj: &Map<String, Value>,
    entity: &'static str,
    name: &'static str,
) -> Result<Option<DateTime<FixedOffset>>, Error> {
    match field(obj, name) {
        None => Ok(None),
        Some(Value::String(s)) => match parse_iso8601(s) {
            Some(dt) => Ok(Some(dt)),
            None => Err(Error::InvalidDate {
                field: name,
                value: s.clone(),
            }),
        },
        Some(_) => Err(Error::invalid_type(entity, name, "string")),
    }
}

fn optional_author(
    obj: &Map<String, Value>,
    entity: &'static str,
) -> Result<Option<Author>, Error> {
    match field(obj, "author") {
        None => Ok(None),
        Some(value @ Value::Object(_)) => Author::from_value(value).map(Some),
        Some(_) => Err(Error::invalid_type(entity, "author", "object")),
    }
}

fn optional_string_vec(
    obj: &Map<String, Value>,
    entity: &'static str,
    name: &'static str,
) -> Result<Option<Vec<String>>, Error> {
    match field(obj, name) {
        None => Ok(None),
        Some(Value::Array(values)) => values
            .iter()
            .map(|v| match v {
                Value::String(s) => Ok(s.clone()),
                _ => Err(Error::invalid_type(entity, name, "array of strings")),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Some),
        Some(_) => Err(Error::invalid_type(entity, name, "array of strings")),
    }
}

fn optional_vec<T>(
    obj: &Map<String, Value>,
    entity: &'static str,
    name: &'static str,
    decode: impl Fn(&Value) -> Result<T, Error>,
) -> Result<Option<Vec<T>>, Error> {
    match field(obj, name) {
        None => Ok(None),
        Some(Value::Array(values)) => values
            .iter()
            .map(decode)
            .collect::<Result<Vec<_>, _>>()
            .map(Some),
        Some(_) => Err(Error::invalid_type(entity, name, "array")),
    }
}
