//! Integration tests for generating artifacts from a content directory.

use folio_collect::{generate, CollectionLoader, CollectionPolicy, DirectorySource, MissingHeader};
use folio_content::{DecoderKind, FrontmatterParser, ParserOptions};
use tempfile::TempDir;

use crate::common::{content_dir, read_json, site};

#[tokio::test]
async fn test_generate_calendar_from_directory() {
    let content = content_dir(&site());
    let out = TempDir::new().unwrap();
    let path = out.path().join("public").join("calendar.json");

    let loader = CollectionLoader::new(DirectorySource::new(content.path()));
    let count = generate(&loader, "calendar", &path).await.unwrap();

    // autumn, broken, spring; plain.md has no header and is skipped.
    assert_eq!(count, 3);
    let json = read_json(&path);
    let items = json.as_array().unwrap();
    let files: Vec<_> = items.iter().map(|i| i["filename"].as_str().unwrap()).collect();
    assert_eq!(files, vec!["autumn.md", "broken.md", "spring.md"]);

    let autumn = &items[0];
    assert_eq!(autumn["image"], "/media/fair.png");
    assert_eq!(autumn["tags"], serde_json::json!(["market", "family"]));

    let broken = &items[1];
    assert_eq!(broken.as_object().unwrap().len(), 2);
    assert_eq!(broken["body"], "Still published.\n");

    let spring = &items[2];
    assert_eq!(spring["title"], "Spring Concert");
    assert_eq!(spring["date"], "2024-04-12");
    assert_eq!(spring["image"], "/images/spring.jpg");
    assert_eq!(spring["body"], "Doors open at seven.\n");
    let keys: Vec<_> = spring.as_object().unwrap().keys().cloned().collect();
    assert_eq!(keys, vec!["title", "date", "image", "body", "filename"]);
}

#[tokio::test]
async fn test_generate_gallery_normalizes_images() {
    let content = content_dir(&site());
    let out = TempDir::new().unwrap();
    let path = out.path().join("galleries.json");

    let loader = CollectionLoader::new(DirectorySource::new(content.path()));
    generate(&loader, "galleries", &path).await.unwrap();

    let json = read_json(&path);
    let summer = &json[0];
    assert_eq!(summer["featured_image"], "/summer/cover.webp");
    assert_eq!(
        summer["gallery"],
        serde_json::json!(["/summer/one.jpg", "/summer/two.PNG", "notes.txt"])
    );
    assert_eq!(summer["body"], "");
}

#[tokio::test]
async fn test_generate_missing_collection_writes_empty_array() {
    let content = content_dir(&site());
    let out = TempDir::new().unwrap();
    let path = out.path().join("events.json");

    let loader = CollectionLoader::new(DirectorySource::new(content.path()));
    let count = generate(&loader, "events", &path).await.unwrap();

    assert_eq!(count, 0);
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "[]");
}

#[tokio::test]
async fn test_policies_change_membership() {
    let content = content_dir(&site());
    let source = DirectorySource::new(content.path());

    let strict = CollectionLoader::new(source.clone()).with_policy(CollectionPolicy::strict());
    let (records, stats) = strict.load_with_stats("calendar").await;
    assert_eq!(records.len(), 2);
    assert_eq!(stats.skipped_no_header, 1);
    assert_eq!(stats.skipped_no_fields, 1);

    let keep = CollectionLoader::new(source).with_policy(CollectionPolicy {
        missing_header: MissingHeader::Keep,
        require_fields: false,
    });
    let records = keep.load("calendar").await;
    assert_eq!(records.len(), 4);
    let plain = records
        .iter()
        .find(|r| r.filename.as_deref() == Some("plain.md"))
        .unwrap();
    assert!(plain.fields.is_empty());
    assert_eq!(plain.body, "No header in this one.\n");
}

#[tokio::test]
async fn test_line_decoder_matches_yaml_on_flat_headers() {
    let content = content_dir(&site());
    let source = DirectorySource::new(content.path());

    let yaml = CollectionLoader::new(source.clone())
        .with_policy(CollectionPolicy::strict())
        .load("calendar")
        .await;
    let lines = CollectionLoader::new(source)
        .with_policy(CollectionPolicy::strict())
        .with_parser(FrontmatterParser::new(ParserOptions {
            decoder: DecoderKind::Lines,
            trim_body: false,
        }))
        .load("calendar")
        .await;

    // The line decoder reads the malformed header as a key/value pair.
    let lines: Vec<_> = lines
        .into_iter()
        .filter(|r| r.filename.as_deref() != Some("broken.md"))
        .collect();

    assert_eq!(yaml.len(), 2);
    assert_eq!(
        serde_json::to_value(&yaml).unwrap(),
        serde_json::to_value(&lines).unwrap()
    );
}
