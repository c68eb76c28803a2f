use std::path::{Path, PathBuf};

use reqwest::{Client, Url};
use tracing::info;

use super::{error::CatalogError, model::Catalog};

/// Where a song's audio lives once its `audioUrl` is resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaLocation {
    File(PathBuf),
    Url(Url),
}

impl MediaLocation {
    /// Extension of the referenced file, used as a decoder hint.
    pub fn extension(&self) -> Option<String> {
        let ext = match self {
            MediaLocation::File(path) => path.extension()?.to_str()?.to_string(),
            MediaLocation::Url(url) => {
                let name = url.path_segments()?.next_back()?;
                name.rsplit_once('.')?.1.to_string()
            }
        };
        Some(ext.to_lowercase())
    }
}

/// Read-only origin of the catalog document: a local file or an http(s) URL.
#[derive(Debug, Clone)]
pub struct CatalogSource {
    location: Location,
    client: Client,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Location {
    File(PathBuf),
    Url(Url),
}

fn parse_http_url(raw: &str) -> Option<Url> {
    Url::parse(raw)
        .ok()
        .filter(|url| matches!(url.scheme(), "http" | "https"))
}

impl CatalogSource {
    pub fn parse(raw: &str) -> Result<Self, CatalogError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(CatalogError::InvalidLocation("empty location".to_string()));
        }

        let location = match parse_http_url(raw) {
            Some(url) => Location::Url(url),
            None if raw.contains("://") => {
                return Err(CatalogError::InvalidLocation(raw.to_string()));
            }
            None => Location::File(PathBuf::from(raw)),
        };

        Ok(Self {
            location,
            client: Client::new(),
        })
    }

    pub fn describe(&self) -> String {
        match &self.location {
            Location::File(path) => path.display().to_string(),
            Location::Url(url) => url.to_string(),
        }
    }

    pub async fn fetch(&self) -> Result<Catalog, CatalogError> {
        let raw = match &self.location {
            Location::File(path) => tokio::fs::read_to_string(path).await?,
            Location::Url(url) => {
                self.client
                    .get(url.clone())
                    .send()
                    .await?
                    .error_for_status()?
                    .text()
                    .await?
            }
        };

        let catalog = Catalog::from_json(&raw)?;
        info!(
            source = self.describe().as_str(),
            songs = catalog.songs.len(),
            categories = catalog.categories.len(),
            "catalog_loaded"
        );
        Ok(catalog)
    }

    /// Resolves a song's `audioUrl` against the catalog's own location.
    pub fn resolve(&self, audio_url: &str) -> Option<MediaLocation> {
        if let Some(url) = parse_http_url(audio_url) {
            return Some(MediaLocation::Url(url));
        }

        match &self.location {
            Location::File(catalog_path) => {
                let path = Path::new(audio_url);
                if path.is_absolute() {
                    return Some(MediaLocation::File(path.to_path_buf()));
                }
                let base = catalog_path.parent().unwrap_or_else(|| Path::new(""));
                Some(MediaLocation::File(base.join(path)))
            }
            Location::Url(base) => base.join(audio_url).ok().map(MediaLocation::Url),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_and_unsupported_schemes() {
        assert!(matches!(
            CatalogSource::parse("  "),
            Err(CatalogError::InvalidLocation(_))
        ));
        assert!(matches!(
            CatalogSource::parse("ftp://example.com/db.json"),
            Err(CatalogError::InvalidLocation(_))
        ));
    }

    #[test]
    fn resolves_relative_audio_against_catalog_directory() {
        let source = CatalogSource::parse("music/db.json").unwrap();
        assert_eq!(
            source.resolve("audio/a.mp3"),
            Some(MediaLocation::File(PathBuf::from("music/audio/a.mp3")))
        );
    }

    #[test]
    fn resolves_relative_audio_against_catalog_url() {
        let source = CatalogSource::parse("https://cdn.test/player/db.json").unwrap();
        let resolved = source.resolve("audio/a.mp3").unwrap();
        assert_eq!(
            resolved,
            MediaLocation::Url(Url::parse("https://cdn.test/player/audio/a.mp3").unwrap())
        );
    }

    #[test]
    fn absolute_audio_urls_are_kept() {
        let source = CatalogSource::parse("db.json").unwrap();
        let resolved = source.resolve("http://media.test/x.flac").unwrap();
        assert_eq!(resolved.extension().as_deref(), Some("flac"));
    }

    #[test]
    fn extension_of_file_location() {
        let loc = MediaLocation::File(PathBuf::from("songs/Track.MP3"));
        assert_eq!(loc.extension().as_deref(), Some("mp3"));
    }
}
