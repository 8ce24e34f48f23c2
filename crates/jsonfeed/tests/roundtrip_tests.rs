// ABOUTME: Round-trip tests between in-memory entities and wire JSON.
// ABOUTME: Checks decode(encode(feed)) equality and absent-field omission.

use jsonfeed::{parse_iso8601, Attachment, Author, Feed, Hub, Item};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

fn sample_feed() -> Feed {
    let author = Author::builder()
        .name("Jane Example")
        .url("https://example.com/jane")
        .avatar("https://example.com/jane/avatar.png")
        .build()
        .unwrap();

    let mut enclosure = Attachment::new("https://cdn.example.com/ep1.mp3", "audio/mpeg");
    enclosure.title = Some("Episode 1".to_string());
    enclosure.size = Some(8675309);
    enclosure.duration = Some(1800.5);

    let item = Item::builder("https://example.com/posts/1")
        .url("https://example.com/posts/1")
        .external_url("https://elsewhere.example.com/thing")
        .title("First Post")
        .content_html("<p>Hello, world.</p>")
        .content_text("Hello, world.")
        .summary("A first post.")
        .image("https://example.com/posts/1/cover.jpg")
        .banner_image("https://example.com/posts/1/banner.jpg")
        .date_published(parse_iso8601("2017-05-17T08:02:12-07:00").unwrap())
        .date_modified(parse_iso8601("2017-05-18T10:00:00Z").unwrap())
        .author(author.clone())
        .tags(vec!["intro".to_string(), "meta".to_string()])
        .attachments(vec![enclosure])
        .build()
        .unwrap();

    Feed::builder("Example Blog")
        .home_page_url("https://example.com/")
        .feed_url("https://example.com/feed.json")
        .description("Posts from Example Blog.")
        .user_comment("Feed readers should ignore this.")
        .next_url("https://example.com/feed.json?page=2")
        .icon("https://example.com/icon.png")
        .favicon("https://example.com/favicon.png")
        .author(author)
        .expired(false)
        .hubs(vec![Hub::new("WebSub", "https://example.com/hub")])
        .item(item)
        .build()
}

#[test]
fn test_decode_of_encode_is_identity() {
    let feed = sample_feed();
    let encoded = jsonfeed::to_string(&feed).unwrap();
    let decoded = jsonfeed::from_str(&encoded).unwrap();
    assert_eq!(decoded, feed);
}

#[test]
fn test_pretty_encoding_round_trips_too() {
    let feed = sample_feed();
    let encoded = jsonfeed::to_string_pretty(&feed).unwrap();
    let decoded = jsonfeed::from_str(&encoded).unwrap();
    assert_eq!(decoded, feed);
}

#[test]
fn test_absent_fields_are_omitted_not_null() {
    let feed = Feed::builder("Bare").build();
    let value = jsonfeed::to_value(&feed).unwrap();
    let obj = value.as_object().unwrap();

    let mut keys: Vec<&str> = obj.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, vec!["items", "title", "version"]);
    assert!(!jsonfeed::to_string(&feed).unwrap().contains("null"));
}

#[test]
fn test_wire_names_used_on_encode() {
    let mut attachment = Attachment::new("https://cdn.example.com/a.mp3", "audio/mpeg");
    attachment.size = Some(100);
    attachment.duration = Some(60.0);

    let value = jsonfeed::to_value(&attachment).unwrap();
    assert_eq!(
        value,
        json!({
            "url": "https://cdn.example.com/a.mp3",
            "mime_type": "audio/mpeg",
            "size_in_bytes": 100,
            "duration_in_seconds": 60.0
        })
    );

    let hub = Hub::new("WebSub", "https://example.com/hub");
    assert_eq!(
        jsonfeed::to_value(&hub).unwrap(),
        json!({"type": "WebSub", "url": "https://example.com/hub"})
    );
}

#[test]
fn test_hub_decode_then_encode_is_structurally_equal() {
    let wire = json!({"type": "WebSub", "url": "https://example.com/hub"});
    let hub = Hub::from_value(&wire).unwrap();
    let re_encoded: Value = jsonfeed::to_value(&hub).unwrap();
    assert_eq!(re_encoded, wire);
}

#[test]
fn test_dates_encode_as_iso8601_with_offset() {
    let item = Item::builder("1")
        .content_text("dated")
        .date_published(parse_iso8601("2017-05-17T08:02:12-07:00").unwrap())
        .build()
        .unwrap();
    let value = jsonfeed::to_value(&item).unwrap();
    assert_eq!(
        value["date_published"],
        json!("2017-05-17T08:02:12-07:00")
    );
}

#[test]
fn test_date_offset_round_trip_preserves_instant() {
    let item = Item::builder("1")
        .content_text("dated")
        .date_published(parse_iso8601("2017-05-17T08:02:12-07:00").unwrap())
        .build()
        .unwrap();
    let encoded = jsonfeed::to_string(&item).unwrap();
    let decoded = Item::from_value(&serde_json::from_str(&encoded).unwrap()).unwrap();
    assert_eq!(
        decoded.date_published.unwrap().timestamp(),
        1495033332,
        "re-decoded date should be the same instant"
    );
    assert_eq!(decoded, item);
}

#[test]
fn test_encode_does_not_validate() {
    // A caller can null out both content fields after construction; the
    // encoder still writes the value as-is.
    let mut item = Item::builder("1").content_text("soon gone").build().unwrap();
    item.content_text = None;
    let value = jsonfeed::to_value(&item).unwrap();
    assert_eq!(value, json!({"id": "1"}));
}
