//! Fetches and parses the CV document.
//!
//! The document is read once per run from `data/cv.json` under either an
//! HTTP(S) base URL or a local directory. Any failure is terminal: the
//! caller shows `render_load_error` in place of the content.

use std::path::PathBuf;

use log::info;
use url::Url;

use crate::models::cv::CvDocument;
use crate::render::html_escape;

pub const DEFAULT_DATA_PATH: &str = "data/cv.json";

#[derive(Debug)]
pub enum LoadError {
    /// Transport failure or non-success status.
    Fetch(String),
    /// The body was not valid JSON.
    Parse(String),
}

impl LoadError {
    pub(crate) fn status(code: u16) -> Self {
        LoadError::Fetch(format!("cv.json fetch failed: {}", code))
    }
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadError::Fetch(msg) | LoadError::Parse(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for LoadError {}

/// Where the document lives.
#[derive(Debug, Clone, PartialEq)]
pub enum Source {
    Remote(Url),
    Local(PathBuf),
}

impl Source {
    /// `http://` and `https://` bases are fetched; anything else is a directory.
    pub fn parse(base: &str) -> Result<Self, LoadError> {
        if base.starts_with("http://") || base.starts_with("https://") {
            // a base without a trailing slash would lose its last segment on join
            let with_slash = if base.ends_with('/') {
                base.to_string()
            } else {
                format!("{}/", base)
            };
            let url = Url::parse(&with_slash)
                .map_err(|e| LoadError::Fetch(format!("invalid source URL {}: {}", base, e)))?;
            Ok(Source::Remote(url))
        } else {
            Ok(Source::Local(PathBuf::from(base)))
        }
    }

    /// Full location of the data file, for logging and error messages.
    pub fn locate(&self, data_path: &str) -> Result<String, LoadError> {
        match self {
            Source::Remote(base) => base
                .join(data_path)
                .map(|u| u.to_string())
                .map_err(|e| LoadError::Fetch(format!("invalid data path {}: {}", data_path, e))),
            Source::Local(dir) => Ok(dir.join(data_path).display().to_string()),
        }
    }
}

/// Fetch and parse the document, bypassing any HTTP cache.
pub fn load(source: &Source, data_path: &str) -> Result<CvDocument, LoadError> {
    let location = source.locate(data_path)?;
    info!("Loading CV document from {}", location);

    let body = match source {
        Source::Remote(_) => fetch_remote(&location)?,
        Source::Local(_) => std::fs::read_to_string(&location)
            .map_err(|e| LoadError::Fetch(format!("cv.json read failed: {}", e)))?,
    };

    let doc = CvDocument::parse(&body).map_err(|e| LoadError::Parse(e.to_string()))?;
    info!("CV document loaded ({} bytes)", body.len());
    Ok(doc)
}

fn fetch_remote(url: &str) -> Result<String, LoadError> {
    // no request timeout: a hung server leaves the page unloaded
    let client = reqwest::blocking::Client::builder()
        .timeout(None::<std::time::Duration>)
        .build()
        .map_err(|e| LoadError::Fetch(format!("HTTP client error: {}", e)))?;

    let resp = client
        .get(url)
        .header("Cache-Control", "no-store")
        .header("Pragma", "no-cache")
        .send()
        .map_err(|e| LoadError::Fetch(e.to_string()))?;

    if !resp.status().is_success() {
        return Err(LoadError::status(resp.status().as_u16()));
    }

    resp.text().map_err(|e| LoadError::Fetch(e.to_string()))
}

/// The block shown instead of any content when loading fails.
pub fn render_load_error(err: &LoadError) -> String {
    format!(
        "<section><h2>Error</h2><p>Could not load CV data. Ensure data/cv.json exists and is valid JSON.</p><pre>{}</pre></section>",
        html_escape(&err.to_string())
    )
}
