//! Shared fixtures: a temporary content tree and a small static site server.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use axum::extract::{Path as UrlPath, State};
use axum::http::StatusCode;
use axum::response::Html;
use axum::routing::get;
use axum::Router;
use tempfile::TempDir;

/// A calendar event with a quoted image and a date.
pub const EVENT_SPRING: &str = "---\n\
title: Spring Concert\n\
date: 2024-04-12\n\
image: \"images/spring.jpg\"\n\
---\n\
Doors open at seven.\n";

/// A calendar event with a root-relative image and a list of tags.
pub const EVENT_AUTUMN: &str = "---\n\
title: Autumn Fair\n\
image: /media/fair.png\n\
tags:\n\
  - market\n\
  - family\n\
---\n\
Stalls all afternoon.\n";

/// A gallery with a mix of image and non-image entries.
pub const GALLERY_SUMMER: &str = "---\n\
title: Summer\n\
featured_image: summer/cover.webp\n\
gallery:\n\
  - summer/one.jpg\n\
  - /summer/two.PNG\n\
  - notes.txt\n\
---\n";

/// A document whose header cannot be decoded.
pub const MALFORMED: &str = "---\n{{invalid: yaml: here}}\n---\nStill published.\n";

/// A document without a header block.
pub const PLAIN: &str = "No header in this one.\n";

/// Documents keyed by collection, then by file name.
pub type Site = BTreeMap<String, BTreeMap<String, String>>;

/// The default fixture site.
pub fn site() -> Site {
    let mut site = Site::new();
    site.entry("calendar".into()).or_default().extend([
        ("spring.md".to_string(), EVENT_SPRING.to_string()),
        ("autumn.md".to_string(), EVENT_AUTUMN.to_string()),
        ("broken.md".to_string(), MALFORMED.to_string()),
        ("plain.md".to_string(), PLAIN.to_string()),
    ]);
    site.entry("galleries".into())
        .or_default()
        .insert("summer.md".to_string(), GALLERY_SUMMER.to_string());
    site
}

/// Write `site` under a temporary content root.
pub fn content_dir(site: &Site) -> TempDir {
    let dir = TempDir::new().unwrap();
    for (collection, docs) in site {
        let coll_dir = dir.path().join(collection);
        std::fs::create_dir_all(&coll_dir).unwrap();
        for (name, text) in docs {
            std::fs::write(coll_dir.join(name), text).unwrap();
        }
    }
    // Files the directory source must ignore.
    std::fs::write(dir.path().join("calendar").join("README.txt"), "ignore").unwrap();
    std::fs::create_dir_all(dir.path().join("calendar").join("drafts.md")).unwrap();
    dir
}

/// Read and parse a JSON artifact.
pub fn read_json(path: &Path) -> serde_json::Value {
    serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
}

// ============================================================================
// HTTP fixture
// ============================================================================

async fn listing(
    State(site): State<Arc<Site>>,
    UrlPath(collection): UrlPath<String>,
) -> Result<Html<String>, StatusCode> {
    let docs = site.get(&collection).ok_or(StatusCode::NOT_FOUND)?;
    let mut page = String::from("<html><body><a href=\"../\">../</a><ul>\n");
    for name in docs.keys() {
        page.push_str(&format!("<li><a href=\"{name}\">{name}</a></li>\n"));
    }
    // A link to a document that is not served.
    page.push_str("<li><a href=\"ghost.md\">ghost.md</a></li>\n");
    page.push_str("<li><a href=\"style.css\">style.css</a></li>\n</ul></body></html>");
    Ok(Html(page))
}

async fn document(
    State(site): State<Arc<Site>>,
    UrlPath((collection, name)): UrlPath<(String, String)>,
) -> Result<String, StatusCode> {
    site.get(&collection)
        .and_then(|docs| docs.get(&name))
        .cloned()
        .ok_or(StatusCode::NOT_FOUND)
}

/// Serve `site` on an ephemeral local port and return its base URL.
pub async fn serve(site: Site) -> String {
    let app = Router::new()
        .route("/content/{collection}/", get(listing))
        .route("/content/{collection}/{name}", get(document))
        .with_state(Arc::new(site));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}
