use std::fs;
use std::sync::Arc;

use portfolio_engine::{
    page_file, short_digest, write_site, ExportError, RenderedPage, SiteOptions,
};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn options() -> SiteOptions {
    SiteOptions {
        generated_utc: Arc::new(|| "2024-01-01T00:00:00Z".to_string()),
        ..SiteOptions::default()
    }
}

#[test]
fn routes_map_to_index_files() {
    assert_eq!(page_file("/").unwrap(), "index.html");
    assert_eq!(page_file("/about").unwrap(), "about/index.html");
    assert_eq!(page_file("/projects/3/").unwrap(), "projects/3/index.html");
    assert!(matches!(page_file("/../x"), Err(ExportError::InvalidRoute(_))));
    assert!(matches!(page_file("about"), Err(ExportError::InvalidRoute(_))));
    assert!(matches!(page_file("/a b"), Err(ExportError::InvalidRoute(_))));
}

#[test]
fn site_export_writes_pages_and_manifest() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("dist");
    let pages = vec![
        RenderedPage::route("/", "<h1>Home</h1>"),
        RenderedPage::route("/projects", "<h1>Projects</h1>"),
        RenderedPage::route("/projects/1", "<h1>E-Commerce</h1>"),
        RenderedPage::not_found("<h1>Missing</h1>"),
    ];

    let summary = write_site(&dir, &pages, &options()).unwrap();

    assert_eq!(summary.page_count, 4);
    assert_eq!(
        fs::read_to_string(dir.join("projects/1/index.html")).unwrap(),
        "<h1>E-Commerce</h1>"
    );
    assert_eq!(
        fs::read_to_string(dir.join("404.html")).unwrap(),
        "<h1>Missing</h1>"
    );

    let manifest: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(summary.manifest_path.unwrap()).unwrap())
            .unwrap();
    assert_eq!(manifest["page_count"], 4);
    assert_eq!(manifest["generated_utc"], "2024-01-01T00:00:00Z");
    assert_eq!(manifest["pages"][0]["file"], "index.html");
    assert_eq!(manifest["pages"][2]["route"], "/projects/1");
    assert_eq!(
        manifest["pages"][2]["sha256"],
        short_digest("<h1>E-Commerce</h1>")
    );
    let total: u64 = pages.iter().map(|p| p.html.len() as u64).sum();
    assert_eq!(manifest["total_bytes"], total);
    assert_eq!(summary.total_bytes, total);
}

#[test]
fn manifest_can_be_disabled() {
    let temp = TempDir::new().unwrap();
    let options = SiteOptions {
        manifest_filename: None,
        ..options()
    };

    let summary = write_site(temp.path(), &[RenderedPage::route("/", "x")], &options).unwrap();

    assert!(summary.manifest_path.is_none());
    assert!(!temp.path().join("manifest.json").exists());
}

#[test]
fn two_pages_for_one_file_are_rejected() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("dist");
    let pages = vec![
        RenderedPage::route("/about", "a"),
        RenderedPage::route("/skills", "s"),
        RenderedPage::route("/about/", "b"),
    ];

    let err = write_site(&dir, &pages, &options()).unwrap_err();

    assert!(matches!(err, ExportError::DuplicatePage(file) if file == "about/index.html"));
    assert!(!dir.join("about/index.html").exists());
    assert!(!dir.join("skills/index.html").exists());
    assert!(!dir.join("manifest.json").exists());
}

#[test]
fn unmappable_route_late_in_the_list_writes_nothing() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("dist");
    let pages = vec![
        RenderedPage::route("/", "home"),
        RenderedPage::route("/../escape", "x"),
    ];

    let err = write_site(&dir, &pages, &options()).unwrap_err();

    assert!(matches!(err, ExportError::InvalidRoute(_)));
    assert!(!dir.join("index.html").exists());
}

#[test]
fn digest_is_stable_and_short() {
    let first = short_digest("hello");
    assert_eq!(first, short_digest("hello"));
    assert_eq!(first.len(), 16);
    assert_ne!(first, short_digest("hello!"));
}
