use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde_json::json;
use site_logging::{site_debug, site_info, EXPORT_TARGET};

use crate::digest::short_digest;
use crate::persist::{AtomicFileWriter, WriteError};

/// One page ready to be written, addressed by its site path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPage {
    pub kind: PageKind,
    pub html: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageKind {
    /// Served at this path, e.g. `/projects/2`.
    Route(String),
    /// Served for every unknown path.
    NotFound,
}

impl RenderedPage {
    pub fn route(path: impl Into<String>, html: impl Into<String>) -> Self {
        Self {
            kind: PageKind::Route(path.into()),
            html: html.into(),
        }
    }

    pub fn not_found(html: impl Into<String>) -> Self {
        Self {
            kind: PageKind::NotFound,
            html: html.into(),
        }
    }
}

#[derive(Clone)]
pub struct SiteOptions {
    pub manifest_filename: Option<String>,
    pub not_found_filename: String,
    /// Clock used for the manifest timestamp.
    pub generated_utc: Arc<dyn Fn() -> String + Send + Sync>,
}

impl Default for SiteOptions {
    fn default() -> Self {
        Self {
            manifest_filename: Some("manifest.json".to_string()),
            not_found_filename: "404.html".to_string(),
            generated_utc: Arc::new(|| "1970-01-01T00:00:00Z".to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteSummary {
    pub page_count: usize,
    pub total_bytes: u64,
    pub files: Vec<PathBuf>,
    pub manifest_path: Option<PathBuf>,
}

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("write error: {0}")]
    Write(#[from] WriteError),
    #[error("page path {0:?} cannot be mapped to a file")]
    InvalidRoute(String),
    #[error("two pages map to {0}")]
    DuplicatePage(String),
}

/// Site path to output file: `/` is `index.html`, `/a/b` is `a/b/index.html`.
pub fn page_file(path: &str) -> Result<String, ExportError> {
    let trimmed = path.trim_matches('/');
    if trimmed.is_empty() {
        return Ok("index.html".to_string());
    }
    let valid = path.starts_with('/')
        && trimmed.split('/').all(|segment| {
            !segment.is_empty()
                && segment != "."
                && segment != ".."
                && segment
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
        });
    if !valid {
        return Err(ExportError::InvalidRoute(path.to_string()));
    }
    Ok(format!("{trimmed}/index.html"))
}

pub fn write_site(
    output_dir: &Path,
    pages: &[RenderedPage],
    options: &SiteOptions,
) -> Result<SiteSummary, ExportError> {
    // Map every page before touching the disk so a bad page set writes nothing.
    let mut seen = std::collections::HashSet::new();
    let mut planned = Vec::with_capacity(pages.len());
    for page in pages {
        let (route, relative) = match &page.kind {
            PageKind::Route(path) => (path.clone(), page_file(path)?),
            PageKind::NotFound => (String::new(), options.not_found_filename.clone()),
        };
        if !seen.insert(relative.clone()) {
            return Err(ExportError::DuplicatePage(relative));
        }
        planned.push((route, relative, page));
    }

    let writer = AtomicFileWriter::new(output_dir.to_path_buf());
    let mut files = Vec::with_capacity(planned.len());
    let mut entries = Vec::with_capacity(planned.len());
    let mut total_bytes: u64 = 0;

    for (route, relative, page) in planned {
        let written = writer.write(&relative, &page.html)?;
        site_debug!(target: EXPORT_TARGET, "wrote {:?}", written);

        let bytes = page.html.len() as u64;
        total_bytes += bytes;
        entries.push(json!({
            "route": route,
            "file": relative,
            "bytes": bytes,
            "sha256": short_digest(&page.html),
        }));
        files.push(written);
    }

    let manifest_path = match &options.manifest_filename {
        Some(name) => {
            let manifest = json!({
                "generated_utc": (options.generated_utc)(),
                "page_count": pages.len(),
                "total_bytes": total_bytes,
                "pages": entries,
            });
            Some(writer.write(name, &manifest.to_string())?)
        }
        None => None,
    };

    site_info!(
        target: EXPORT_TARGET,
        "exported {} pages ({} bytes) to {:?}",
        pages.len(),
        total_bytes,
        output_dir
    );

    Ok(SiteSummary {
        page_count: pages.len(),
        total_bytes,
        files,
        manifest_path,
    })
}
