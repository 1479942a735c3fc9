//! Dataset loading and validation.
//!
//! The dataset is fetched exactly once per run. Remote sources get a
//! request-unique `ts` query parameter so no intermediate cache can serve a
//! stale copy. There is no retry: a failed load is reported and the player
//! never starts.

use std::fmt;
use std::fs;
use std::path::PathBuf;

use serde_json::Value;

use super::{Dataset, TimeStep};

/// Errors that can occur while loading a dataset.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to fetch {url}: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("response is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("expected a JSON array of time steps")]
    NotAnArray,

    #[error("dataset contains no time steps")]
    Empty,

    #[error("time step {index} is malformed: {source}")]
    MalformedStep {
        index: usize,
        #[source]
        source: serde_json::Error,
    },
}

/// Where the dataset comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetSource {
    File(PathBuf),
    Url(String),
}

impl DatasetSource {
    /// Interpret a user-supplied location: `http://` and `https://` are
    /// remote, anything else is a local path.
    pub fn parse(location: &str) -> Self {
        let lower = location.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            DatasetSource::Url(location.to_string())
        } else {
            DatasetSource::File(PathBuf::from(location))
        }
    }
}

impl fmt::Display for DatasetSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetSource::File(path) => write!(f, "{}", path.display()),
            DatasetSource::Url(url) => write!(f, "{}", url),
        }
    }
}

/// Append the cache-defeating `ts` parameter to a URL.
///
/// Any fragment is kept at the end so the parameter lands in the query.
pub fn cache_busted_url(url: &str, token: i64) -> String {
    let (base, fragment) = match url.find('#') {
        Some(pos) => (&url[..pos], &url[pos..]),
        None => (url, ""),
    };
    let separator = if base.contains('?') { '&' } else { '?' };
    format!("{}{}ts={}{}", base, separator, token, fragment)
}

/// Load, parse and validate a dataset.
pub fn load_dataset(source: &DatasetSource) -> Result<Dataset, LoadError> {
    let body = match source {
        DatasetSource::File(path) => fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.clone(),
            source,
        })?,
        DatasetSource::Url(url) => fetch_url(url)?,
    };

    let dataset = parse_dataset(&body)?;
    tracing::info!(
        source = %source,
        steps = dataset.len(),
        records = dataset.record_count(),
        "dataset loaded"
    );
    Ok(dataset)
}

fn fetch_url(url: &str) -> Result<String, LoadError> {
    let token = chrono::Utc::now().timestamp_millis();
    let busted = cache_busted_url(url, token);
    tracing::debug!(url = %busted, "fetching dataset");

    let http_err = |source| LoadError::Http {
        url: url.to_string(),
        source,
    };

    let client = reqwest::blocking::Client::new();
    client
        .get(&busted)
        .header(reqwest::header::CACHE_CONTROL, "no-cache")
        .send()
        .and_then(|resp| resp.error_for_status())
        .and_then(|resp| resp.text())
        .map_err(http_err)
}

/// Parse a JSON document into a validated dataset.
///
/// Checks run in order: valid JSON, top-level array, non-empty, and finally
/// each element decodes as a time step.
pub fn parse_dataset(body: &str) -> Result<Dataset, LoadError> {
    let value: Value = serde_json::from_str(body)?;
    let Value::Array(items) = value else {
        return Err(LoadError::NotAnArray);
    };
    if items.is_empty() {
        return Err(LoadError::Empty);
    }

    let steps = items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value::<TimeStep>(item)
                .map_err(|source| LoadError::MalformedStep { index, source })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Dataset::new(steps)
}
