//! Integration tests for loading collections from a web server.

use std::time::Duration;

use folio_collect::{CollectionLoader, ContentClient, DocumentSource, HttpSource};
use folio_content::ParsedDocument;

use crate::common::{serve, site, Site};

fn titles(records: &[ParsedDocument]) -> Vec<&str> {
    records
        .iter()
        .filter_map(|r| r.fields.get_str("title"))
        .collect()
}

#[tokio::test]
async fn test_http_listing_follows_page_links() {
    let base = serve(site()).await;
    let source = HttpSource::new(&base).unwrap();

    let names = source.list("calendar").await.unwrap();
    assert_eq!(
        names,
        vec!["autumn.md", "broken.md", "plain.md", "spring.md", "ghost.md"]
    );
}

#[tokio::test]
async fn test_http_read_missing_document_is_not_found() {
    let base = serve(site()).await;
    let source = HttpSource::new(&base).unwrap();

    let err = source.read("calendar", "ghost.md").await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_client_loads_calendar() {
    let base = serve(site()).await;
    let client = ContentClient::new(&format!("{base}/")).unwrap();

    let events = client.load_calendar().await;

    // ghost.md fails to fetch and plain.md has no header; both are skipped.
    let files: Vec<_> = events.iter().filter_map(|e| e.filename.as_deref()).collect();
    assert_eq!(files, vec!["autumn.md", "broken.md", "spring.md"]);
    assert_eq!(titles(&events), vec!["Autumn Fair", "Spring Concert"]);

    let spring = &events[2];
    assert_eq!(spring.fields.get_str("image"), Some("/images/spring.jpg"));
    assert_eq!(spring.body, "Doors open at seven.");
}

#[tokio::test]
async fn test_client_loads_galleries() {
    let base = serve(site()).await;
    let client = ContentClient::new(&base).unwrap();

    let galleries = client.load_galleries().await;
    assert_eq!(galleries.len(), 1);
    assert_eq!(
        galleries[0].fields.get_str("featured_image"),
        Some("/summer/cover.webp")
    );
    assert_eq!(galleries[0].fields.get_list("gallery").unwrap().len(), 3);
}

#[tokio::test]
async fn test_client_unknown_collection_is_empty() {
    let base = serve(site()).await;
    let client = ContentClient::new(&base).unwrap();

    assert!(client.load_collection("news").await.is_empty());
}

#[tokio::test]
async fn test_loader_stats_over_http() {
    let base = serve(site()).await;
    let source = HttpSource::with_timeout(&base, Duration::from_secs(5)).unwrap();
    let loader = CollectionLoader::new(source).with_concurrency(2);

    let (records, stats) = loader.load_with_stats("calendar").await;
    assert_eq!(records.len(), 3);
    assert_eq!(stats.listed, 5);
    assert_eq!(stats.skipped_no_header, 1);
    assert_eq!(stats.failures.len(), 1);
    assert_eq!(stats.failures[0].document, "ghost.md");
}

#[tokio::test]
async fn test_unreachable_server_yields_empty_collection() {
    // Bind and drop a listener to find a port with nothing behind it.
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let client = ContentClient::with_loader(CollectionLoader::new(
        HttpSource::with_timeout(&format!("http://127.0.0.1:{port}"), Duration::from_secs(2))
            .unwrap(),
    ));

    assert!(client.load_calendar().await.is_empty());
}

#[tokio::test]
async fn test_empty_site_collection() {
    let mut empty = Site::new();
    empty.insert("calendar".to_string(), Default::default());
    let base = serve(empty).await;
    let client = ContentClient::new(&base).unwrap();

    // Only the unserved ghost link remains, and it fails to fetch.
    assert!(client.load_calendar().await.is_empty());
}
