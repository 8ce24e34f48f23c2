// ABOUTME: Typed entities for the JSON Feed version 1 format.
// ABOUTME: Feed, Item, Author, Attachment, and Hub with their wire-name serde mappings.

use chrono::{DateTime, FixedOffset};
use serde::Serialize;

/// Represents a person or entity responsible for a feed or item.
///
/// An author must carry at least one identifying field; use
/// [`Author::builder`] to construct one with that rule applied.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Author {
    /// The author's name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// The URL of a site owned by the author: a blog, micro-blog,
    /// social account, possibly a `mailto:` link.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// The URL of an image for the author. It should be square and
    /// relatively large, such as 512 x 512.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl Author {
    /// Starts building an author. `build` yields `None` unless at least
    /// one identifying field was set.
    pub fn builder() -> AuthorBuilder {
        AuthorBuilder::default()
    }
}

/// Builder for [`Author`].
#[derive(Debug, Default)]
pub struct AuthorBuilder {
    name: Option<String>,
    url: Option<String>,
    avatar: Option<String>,
}

impl AuthorBuilder {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = Some(avatar.into());
        self
    }

    /// Returns `None` when `name`, `url`, and `avatar` are all absent.
    pub fn build(self) -> Option<Author> {
        if self.name.is_none() && self.url.is_none() && self.avatar.is_none() {
            return None;
        }
        Some(Author {
            name: self.name,
            url: self.url,
            avatar: self.avatar,
        })
    }
}

/// Represents a file associated with an item, such as a podcast enclosure.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Attachment {
    /// The location of the attachment.
    pub url: String,

    /// The type of the attachment, such as "audio/mpeg".
    pub mime_type: String,

    /// A name for the attachment. When two or more attachments on the
    /// same item share the exact same title, they are alternate
    /// representations of the same thing (an audio recording in
    /// different encodings, for instance).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// The size of the file, in bytes.
    #[serde(rename = "size_in_bytes", skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,

    /// The duration in seconds of the audio or video, when played at
    /// normal speed.
    #[serde(rename = "duration_in_seconds", skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
}

impl Attachment {
    /// Creates an attachment with the required fields; the optional
    /// fields start out absent and may be assigned directly.
    pub fn new(url: impl Into<String>, mime_type: impl Into<String>) -> Self {
        Attachment {
            url: url.into(),
            mime_type: mime_type.into(),
            ..Attachment::default()
        }
    }
}

/// Represents an endpoint for real-time notifications from the publisher
/// of a feed, such as a WebSub hub.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Hub {
    /// The protocol of the hub.
    #[serde(rename = "type")]
    pub hub_type: String,

    /// The URL of the hub.
    pub url: String,
}

impl Hub {
    pub fn new(hub_type: impl Into<String>, url: impl Into<String>) -> Self {
        Hub {
            hub_type: hub_type.into(),
            url: url.into(),
        }
    }
}

/// Represents a single entry within a feed.
///
/// An item must carry `content_html` or `content_text` (or both); use
/// [`Item::builder`] to construct one with that rule applied.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Item {
    /// A unique identifier for the item, unchanged across updates and
    /// never reused for a different entry. Ideally the full URL of the
    /// resource, since URLs make great unique identifiers.
    pub id: String,

    /// The URL of the resource described by the item. The permalink.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// The URL of a page elsewhere. Useful for linkblogs: if `url` links
    /// to where you're talking about a thing, `external_url` links to
    /// the thing itself.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_url: Option<String>,

    /// The title in plain text. Microblog items in particular may omit
    /// titles.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// The HTML of the item. The only place HTML is allowed in the
    /// format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_html: Option<String>,

    /// The plain text of the item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_text: Option<String>,

    /// A plain text sentence or two describing the item, suitable for a
    /// timeline view.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    /// The URL of the main image for the item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    /// The URL of an image to show as a banner at the top of a detail
    /// view, one that wouldn't otherwise appear in `content_html`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banner_image: Option<String>,

    /// The publication date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_published: Option<DateTime<FixedOffset>>,

    /// The modification date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_modified: Option<DateTime<FixedOffset>>,

    /// The author of the item. When absent, readers are expected to fall
    /// back to the feed-level author; the item does not inherit it here.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<Author>,

    /// Tags related to the item. Some blogging systems and other feed
    /// formats call these categories.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    /// Resources related to the item. A podcast, for instance, would
    /// include an audio or video attachment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachments: Option<Vec<Attachment>>,
}

impl Item {
    /// Starts building an item with the given identifier. `build` yields
    /// `None` unless `content_html` or `content_text` was set.
    pub fn builder(id: impl Into<String>) -> ItemBuilder {
        ItemBuilder {
            item: Item {
                id: id.into(),
                ..Item::default()
            },
        }
    }
}

/// Builder for [`Item`].
#[derive(Debug)]
pub struct ItemBuilder {
    item: Item,
}

impl ItemBuilder {
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.item.url = Some(url.into());
        self
    }

    pub fn external_url(mut self, external_url: impl Into<String>) -> Self {
        self.item.external_url = Some(external_url.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.item.title = Some(title.into());
        self
    }

    pub fn content_html(mut self, content_html: impl Into<String>) -> Self {
        self.item.content_html = Some(content_html.into());
        self
    }

    pub fn content_text(mut self, content_text: impl Into<String>) -> Self {
        self.item.content_text = Some(content_text.into());
        self
    }

    pub fn summary(mut self, summary: impl Into<String>) -> Self {
        self.item.summary = Some(summary.into());
        self
    }

    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.item.image = Some(image.into());
        self
    }

    pub fn banner_image(mut self, banner_image: impl Into<String>) -> Self {
        self.item.banner_image = Some(banner_image.into());
        self
    }

    pub fn date_published(mut self, date: DateTime<FixedOffset>) -> Self {
        self.item.date_published = Some(date);
        self
    }

    pub fn date_modified(mut self, date: DateTime<FixedOffset>) -> Self {
        self.item.date_modified = Some(date);
        self
    }

    pub fn author(mut self, author: Author) -> Self {
        self.item.author = Some(author);
        self
    }

    pub fn tags(mut self, tags: Vec<String>) -> Self {
        self.item.tags = Some(tags);
        self
    }

    pub fn attachments(mut self, attachments: Vec<Attachment>) -> Self {
        self.item.attachments = Some(attachments);
        self
    }

    /// Returns `None` when both `content_html` and `content_text` are
    /// absent.
    pub fn build(self) -> Option<Item> {
        if self.item.content_html.is_none() && self.item.content_text.is_none() {
            return None;
        }
        Some(self.item)
    }
}

/// Represents one syndication feed: the top-level document describing a
/// publication and its items.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Feed {
    /// The URL of the version of the format the feed uses.
    pub version: String,

    /// The name of the feed, which will often correspond to the name of
    /// the website, though not necessarily.
    pub title: String,

    /// The URL of the resource that the feed describes. For feeds on the
    /// public web this should be considered required.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub home_page_url: Option<String>,

    /// The URL of the feed itself, serving as its unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feed_url: Option<String>,

    /// More detail, beyond the title, on what the feed is about.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// A description of the purpose of the feed, for people looking at
    /// the raw JSON. Feed readers should ignore it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_comment: Option<String>,

    /// The URL of a feed that provides the next n items. Allows for
    /// pagination. When walking a chain of these, `next_url` must not
    /// equal `feed_url` or any previously seen `next_url`, or the walk
    /// loops forever; callers enforce that, not this crate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_url: Option<String>,

    /// The URL of an image for the feed suitable for a timeline, much
    /// the way an avatar might be used. Square and relatively large,
    /// such as 512 x 512.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    /// The URL of an image for the feed suitable for a source list.
    /// Square and relatively small, but no smaller than 64 x 64.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favicon: Option<String>,

    /// The feed author.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<Author>,

    /// Whether the feed is finished, that is, whether it will ever
    /// update again. A feed for a temporary event could expire.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expired: Option<bool>,

    /// Endpoints for real-time notifications from the publisher.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hubs: Option<Vec<Hub>>,

    /// The items in the feed, in display order. May be empty.
    pub items: Vec<Item>,
}

impl Feed {
    /// The version 1 URI of the format.
    pub const VERSION_1: &'static str = "https://jsonfeed.org/version/1";

    /// Starts building a feed with the given title. `version` defaults
    /// to [`Feed::VERSION_1`] and `items` to empty.
    pub fn builder(title: impl Into<String>) -> FeedBuilder {
        FeedBuilder {
            feed: Feed {
                version: Feed::VERSION_1.to_string(),
                title: title.into(),
                home_page_url: None,
                feed_url: None,
                description: None,
                user_comment: None,
                next_url: None,
                icon: None,
                favicon: None,
                author: None,
                expired: None,
                hubs: None,
                items: Vec::new(),
            },
        }
    }
}

/// Builder for [`Feed`]. Building never fails; the feed-level fields
/// carry no construction rule.
#[derive(Debug)]
pub struct FeedBuilder {
    feed: Feed,
}

impl FeedBuilder {
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.feed.version = version.into();
        self
    }

    pub fn home_page_url(mut self, url: impl Into<String>) -> Self {
        self.feed.home_page_url = Some(url.into());
        self
    }

    pub fn feed_url(mut self, url: impl Into<String>) -> Self {
        self.feed.feed_url = Some(url.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.feed.description = Some(description.into());
        self
    }

    pub fn user_comment(mut self, user_comment: impl Into<String>) -> Self {
        self.feed.user_comment = Some(user_comment.into());
        self
    }

    pub fn next_url(mut self, url: impl Into<String>) -> Self {
        self.feed.next_url = Some(url.into());
        self
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.feed.icon = Some(icon.into());
        self
    }

    pub fn favicon(mut self, favicon: impl Into<String>) -> Self {
        self.feed.favicon = Some(favicon.into());
        self
    }

    pub fn author(mut self, author: Author) -> Self {
        self.feed.author = Some(author);
        self
    }

    pub fn expired(mut self, expired: bool) -> Self {
        self.feed.expired = Some(expired);
        self
    }

    pub fn hubs(mut self, hubs: Vec<Hub>) -> Self {
        self.feed.hubs = Some(hubs);
        self
    }

    /// Appends a single item, preserving insertion order.
    pub fn item(mut self, item: Item) -> Self {
        self.feed.items.push(item);
        self
    }

    pub fn items(mut self, items: Vec<Item>) -> Self {
        self.feed.items = items;
        self
    }

    pub fn build(self) -> Feed {
        self.feed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_author_builder_requires_identifying_field() {
        assert!(Author::builder().build().is_none());
    }

    #[test]
    fn test_author_builder_with_any_field_succeeds() {
        assert!(Author::builder().name("Brent Simmons").build().is_some());
        assert!(Author::builder().url("https://inessential.com/").build().is_some());
        assert!(Author::builder()
            .avatar("https://example.com/avatar.png")
            .build()
            .is_some());
    }

    #[test]
    fn test_author_builder_keeps_fields_distinct() {
        let author = Author::builder()
            .url("https://example.com/")
            .avatar("https://example.com/avatar.png")
            .build()
            .unwrap();
        assert_eq!(author.url.as_deref(), Some("https://example.com/"));
        assert_eq!(
            author.avatar.as_deref(),
            Some("https://example.com/avatar.png")
        );
        assert_eq!(author.name, None);
    }

    #[test]
    fn test_item_builder_requires_content() {
        assert!(Item::builder("1").build().is_none());
        assert!(Item::builder("1").title("no content").build().is_none());
    }

    #[test]
    fn test_item_builder_with_either_content_succeeds() {
        assert!(Item::builder("1").content_text("hello").build().is_some());
        assert!(Item::builder("1")
            .content_html("<p>hello</p>")
            .build()
            .is_some());
    }

    #[test]
    fn test_item_builder_does_not_guard_later_mutation() {
        // Mutation after construction is plain field assignment; the
        // content rule applies only at build time.
        let mut item = Item::builder("1").content_text("hello").build().unwrap();
        item.content_text = None;
        assert!(item.content_html.is_none() && item.content_text.is_none());
    }

    #[test]
    fn test_feed_builder_defaults() {
        let feed = Feed::builder("My Blog").build();
        assert_eq!(feed.version, Feed::VERSION_1);
        assert_eq!(feed.title, "My Blog");
        assert!(feed.items.is_empty());
        assert_eq!(feed.author, None);
    }

    #[test]
    fn test_feed_builder_preserves_item_order() {
        let first = Item::builder("1").content_text("a").build().unwrap();
        let second = Item::builder("2").content_text("b").build().unwrap();
        let feed = Feed::builder("Ordered")
            .item(first)
            .item(second)
            .build();
        assert_eq!(feed.items[0].id, "1");
        assert_eq!(feed.items[1].id, "2");
    }

    #[test]
    fn test_attachment_new_leaves_optionals_absent() {
        let attachment = Attachment::new("https://cdn/show.mp3", "audio/mpeg");
        assert_eq!(attachment.title, None);
        assert_eq!(attachment.size, None);
        assert_eq!(attachment.duration, None);
    }
}
