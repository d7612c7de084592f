//! Retrieval of the upstream confusables dataset, over HTTP or from disk.

use std::fs;
use std::path::PathBuf;

use log::info;
use thiserror::Error;
use url::Url;

use confusables_table::DATASET_FILE;

pub const DEFAULT_BASE_URL: &str = "https://www.unicode.org/Public/security/latest/";

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("invalid base URL {url:?}: {source}")]
    BadUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("http client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("download of {url} failed: {source}")]
    Download {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("bad GET status for {url}: {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("cannot read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Where the dataset comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetSource {
    /// A directory URL; `confusables.txt` is resolved against it.
    Remote { base_url: String },
    /// A local copy of `confusables.txt`.
    Local { path: PathBuf },
}

impl DatasetSource {
    pub fn from_args(base_url: &str, local: Option<PathBuf>) -> Self {
        match local {
            Some(path) => DatasetSource::Local { path },
            None => DatasetSource::Remote {
                base_url: base_url.to_string(),
            },
        }
    }

    /// Human readable location, for status lines.
    pub fn describe(&self) -> String {
        match self {
            DatasetSource::Remote { base_url } => dataset_url(base_url)
                .map(|u| u.to_string())
                .unwrap_or_else(|_| base_url.clone()),
            DatasetSource::Local { path } => path.display().to_string(),
        }
    }
}

/// Resolve the dataset file against a base directory URL.
///
/// A missing trailing slash is tolerated so that `.../latest` and
/// `.../latest/` name the same directory.
pub fn dataset_url(base_url: &str) -> Result<Url, SourceError> {
    let bad_url = |source| SourceError::BadUrl {
        url: base_url.to_string(),
        source,
    };
    let mut base = Url::parse(base_url).map_err(bad_url)?;
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    base.join(DATASET_FILE).map_err(bad_url)
}

/// Read the whole dataset text.
pub fn load(source: &DatasetSource) -> Result<String, SourceError> {
    match source {
        DatasetSource::Local { path } => fs::read_to_string(path).map_err(|source| SourceError::Read {
            path: path.clone(),
            source,
        }),
        DatasetSource::Remote { base_url } => download(&dataset_url(base_url)?),
    }
}

fn download(url: &Url) -> Result<String, SourceError> {
    info!("Downloading {url}");

    let client = reqwest::blocking::Client::builder()
        .user_agent(concat!("confusables/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(SourceError::Client)?;

    let response = client
        .get(url.clone())
        .send()
        .map_err(|source| SourceError::Download {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(SourceError::Status {
            url: url.to_string(),
            status,
        });
    }

    response.text().map_err(|source| SourceError::Download {
        url: url.to_string(),
        source,
    })
}
