//! Dominant color of an image given by URL or local path.
//!
//! Fetching belongs to [`HttpFetcher`]; this service only wires the fetched
//! bytes into the extractor and keeps the soft "no source, no color" contract.

use dominant_color::{DominantColorExtractor, Rgb8};
use std::path::Path;

use super::fetch::HttpFetcher;
use crate::error::{FetchError, ToolkitError};
use crate::models::ToolkitConfig;

pub struct ImageColorService {
    fetcher: HttpFetcher,
    extractor: DominantColorExtractor,
}

impl ImageColorService {
    pub fn new(fetcher: HttpFetcher, extractor: DominantColorExtractor) -> Self {
        Self { fetcher, extractor }
    }

    pub fn from_config(config: &ToolkitConfig) -> Result<Self, FetchError> {
        Ok(Self::new(
            HttpFetcher::new(&config.http)?,
            config.extract.extractor(),
        ))
    }

    pub fn extractor(&self) -> &DominantColorExtractor {
        &self.extractor
    }

    /// Fetch `url` and extract its dominant color.
    ///
    /// A missing or blank URL yields `Ok(None)` without touching the network.
    pub fn color_from_url(&self, url: Option<&str>) -> Result<Option<Rgb8>, ToolkitError> {
        let Some(url) = url.map(str::trim).filter(|u| !u.is_empty()) else {
            tracing::debug!("No image URL given");
            return Ok(None);
        };

        let bytes = self.fetcher.fetch_bytes(url)?;
        let color = self.extractor.extract(&bytes)?;
        tracing::info!(url = %url, color = ?color, "Extracted dominant color");
        Ok(color)
    }

    /// Read a local image file and extract its dominant color.
    pub fn color_from_path(&self, path: &Path) -> Result<Option<Rgb8>, ToolkitError> {
        let bytes = std::fs::read(path)?;
        let color = self.extractor.extract(&bytes)?;
        tracing::info!(path = %path.display(), color = ?color, "Extracted dominant color");
        Ok(color)
    }

    /// Dispatch on the source: `http://` / `https://` is fetched, anything
    /// else is read from disk. A blank source yields `Ok(None)`.
    pub fn color_from_source(&self, source: &str) -> Result<Option<Rgb8>, ToolkitError> {
        let source = source.trim();
        if source.is_empty() {
            return Ok(None);
        }
        if is_url(source) {
            self.color_from_url(Some(source))
        } else {
            self.color_from_path(Path::new(source))
        }
    }
}

fn is_url(source: &str) -> bool {
    let lower = source.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> ImageColorService {
        ImageColorService::from_config(&ToolkitConfig::default()).unwrap()
    }

    #[test]
    fn test_is_url() {
        assert!(is_url("http://example.com/a.png"));
        assert!(is_url("HTTPS://example.com/a.png"));
        assert!(!is_url("/tmp/a.png"));
        assert!(!is_url("ftp://example.com/a.png"));
    }

    #[test]
    fn test_missing_url_is_soft_failure() {
        let service = service();
        assert_eq!(service.color_from_url(None).unwrap(), None);
        assert_eq!(service.color_from_url(Some("")).unwrap(), None);
        assert_eq!(service.color_from_url(Some("   ")).unwrap(), None);
        assert_eq!(service.color_from_source("").unwrap(), None);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = service().color_from_path(Path::new("/nonexistent/image.png"));
        assert!(matches!(result, Err(ToolkitError::Io(_))));
    }

    #[test]
    fn test_empty_file_is_soft_failure() {
        let file = tempfile::NamedTempFile::new().unwrap();
        assert_eq!(service().color_from_path(file.path()).unwrap(), None);
    }
}
