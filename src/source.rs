//! Talk data sources
//!
//! The catalog is fetched exactly once per run. A local path is read with
//! `tokio::fs`; an `http://` or `https://` location is downloaded with
//! `reqwest`. Any failure along the way is a [`LoadError`].

use crate::error::{LoadError, LoadResult};
use crate::talk::{parse_talks, Talk};
use std::path::PathBuf;

/// Something that can produce the talk collection
#[allow(async_fn_in_trait)]
pub trait TalkSource {
    /// Fetch and decode the whole collection
    async fn fetch(&self) -> LoadResult<Vec<Talk>>;

    /// Human-readable location for logs
    fn describe(&self) -> String;
}

/// Talks read from a local JSON file
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TalkSource for FileSource {
    async fn fetch(&self) -> LoadResult<Vec<Talk>> {
        if !self.path.exists() {
            return Err(LoadError::NotFound(self.path.clone()));
        }

        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|e| LoadError::ReadError {
                path: self.path.clone(),
                source: e,
            })?;

        Ok(parse_talks(&bytes)?)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Talks downloaded over HTTP
#[derive(Debug, Clone)]
pub struct HttpSource {
    url: String,
    client: reqwest::Client,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            client: reqwest::Client::new(),
        }
    }
}

impl TalkSource for HttpSource {
    async fn fetch(&self) -> LoadResult<Vec<Talk>> {
        let network = |e| LoadError::Network {
            url: self.url.clone(),
            source: e,
        };

        let response = self.client.get(&self.url).send().await.map_err(network)?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        let bytes = response.bytes().await.map_err(network)?;
        Ok(parse_talks(&bytes)?)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

/// File or HTTP source chosen from a location string
#[derive(Debug, Clone)]
pub enum DataSource {
    File(FileSource),
    Http(HttpSource),
}

impl DataSource {
    /// `http://` and `https://` locations are remote, anything else is a path
    pub fn from_location(location: &str) -> Self {
        if location.starts_with("http://") || location.starts_with("https://") {
            DataSource::Http(HttpSource::new(location))
        } else {
            DataSource::File(FileSource::new(location))
        }
    }
}

impl TalkSource for DataSource {
    async fn fetch(&self) -> LoadResult<Vec<Talk>> {
        match self {
            DataSource::File(source) => source.fetch().await,
            DataSource::Http(source) => source.fetch().await,
        }
    }

    fn describe(&self) -> String {
        match self {
            DataSource::File(source) => source.describe(),
            DataSource::Http(source) => source.describe(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_file_source_reads_talks() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("talks.json");
        std::fs::write(&path, r#"[{"year": "2024", "place": "Madrid"}]"#).unwrap();

        let talks = FileSource::new(&path).fetch().await.unwrap();
        assert_eq!(talks.len(), 1);
        assert_eq!(talks[0].id(), "2024-madrid");
    }

    #[tokio::test]
    async fn test_file_source_missing_file() {
        let dir = TempDir::new().unwrap();
        let result = FileSource::new(dir.path().join("absent.json")).fetch().await;
        assert!(matches!(result, Err(LoadError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_file_source_malformed_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("talks.json");
        std::fs::write(&path, "{ not json").unwrap();

        let result = FileSource::new(&path).fetch().await;
        assert!(matches!(result, Err(LoadError::ParseError(_))));
    }

    #[test]
    fn test_location_parsing() {
        assert!(matches!(
            DataSource::from_location("https://example.com/data/talks.json"),
            DataSource::Http(_)
        ));
        assert!(matches!(
            DataSource::from_location("data/talks.json"),
            DataSource::File(_)
        ));
        assert_eq!(
            DataSource::from_location("data/talks.json").describe(),
            "data/talks.json"
        );
    }
}
