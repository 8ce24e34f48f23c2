// ABOUTME: JSON Feed version 1 data model and codec.
// ABOUTME: Typed Feed/Item/Author/Attachment/Hub entities with decode and encode.

//! A typed data model and bidirectional codec for the
//! [JSON Feed](https://jsonfeed.org/version/1) syndication format,
//! version 1.
//!
//! This crate covers the schema and serialization contract only. It does
//! no network I/O: fetch the bytes yourself (from a feed's `feed_url`,
//! say) and hand them to [`from_slice`] or [`from_str`]. Walking
//! `next_url` pagination or subscribing via `hubs` is likewise left to
//! the caller.
//!
//! ```
//! let data = br#"{
//!     "version": "https://jsonfeed.org/version/1",
//!     "title": "Example",
//!     "items": [{"id": "1", "content_text": "Hello"}]
//! }"#;
//! let feed = jsonfeed::from_slice(data)?;
//! assert_eq!(feed.items.len(), 1);
//! assert_eq!(feed.items[0].content_text.as_deref(), Some("Hello"));
//! # Ok::<(), jsonfeed::Error>(())
//! ```
//!
//! Decoding and encoding are pure, synchronous value transformations;
//! independent calls need no coordination.

pub mod datetime;
pub mod decode;
pub mod encode;
pub mod error;
pub mod models;

pub use datetime::parse_iso8601;
pub use decode::{from_slice, from_str};
pub use encode::{to_string, to_string_pretty, to_value, to_vec};
pub use error::Error;
pub use models::{Attachment, Author, Feed, Hub, Item};
