//! Page manifest
//!
//! JSON description of the portfolio page: its title and the ordered list of
//! gallery images. Loaded once at startup; any problem is reported then,
//! never at interaction time.
//!
//! ```json
//! {
//!   "title": "My Story",
//!   "tagline": "A life in pictures",
//!   "gallery": [
//!     { "src": "images/childhood.jpg", "alt": "Childhood home" },
//!     { "src": "images/graduation.jpg", "alt": "Graduation day" }
//!   ]
//! }
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{PortfolioError, PortfolioResult};
use crate::gallery::{Gallery, GalleryItem};

/// File name looked up under the user's config directory
pub const MANIFEST_FILE_NAME: &str = "gallery.json";

/// One `gallery` entry as written in the manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ManifestImage {
    pub src: String,
    /// Alt text, also used as the lightbox caption
    #[serde(default)]
    pub alt: String,
}

/// Top-level manifest document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PortfolioManifest {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,
    #[serde(default)]
    pub gallery: Vec<ManifestImage>,
}

impl PortfolioManifest {
    pub fn from_json(json: &str) -> PortfolioResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a manifest file.
    pub fn load(path: impl AsRef<Path>) -> PortfolioResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| PortfolioError::ManifestRead {
            path: path.to_path_buf(),
            source,
        })?;
        let manifest = Self::from_json(&json)?;
        tracing::debug!(?path, images = manifest.gallery.len(), "Loaded manifest");
        Ok(manifest)
    }

    /// Validate the image list and build the immutable gallery.
    ///
    /// Every entry needs a non-blank `src`; `alt` may be empty.
    pub fn gallery(&self) -> PortfolioResult<Gallery> {
        self.gallery
            .iter()
            .enumerate()
            .map(|(index, image)| {
                let src = image.src.trim();
                if src.is_empty() {
                    return Err(PortfolioError::MissingImageSource { index });
                }
                Ok(GalleryItem::new(src, image.alt.trim()))
            })
            .collect::<PortfolioResult<Vec<_>>>()
            .map(Gallery::new)
    }
}

/// Where a manifest came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManifestSource {
    /// Path given explicitly on the command line
    Explicit(PathBuf),
    /// `<config dir>/autobiography/gallery.json`
    UserConfig(PathBuf),
    /// Demo manifest compiled into the binary
    Bundled,
}

/// Pick the manifest to load.
///
/// An explicit path must exist. Otherwise the user config file is used if
/// present, falling back to the bundled manifest.
pub fn resolve_manifest(
    explicit: Option<&Path>,
    config_dir: Option<&Path>,
) -> PortfolioResult<ManifestSource> {
    if let Some(path) = explicit {
        if !path.is_file() {
            return Err(PortfolioError::ManifestNotFound(path.to_path_buf()));
        }
        return Ok(ManifestSource::Explicit(path.to_path_buf()));
    }

    if let Some(dir) = config_dir {
        let candidate = dir.join("autobiography").join(MANIFEST_FILE_NAME);
        if candidate.is_file() {
            return Ok(ManifestSource::UserConfig(candidate));
        }
    }

    Ok(ManifestSource::Bundled)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "title": "Angel's Story",
        "gallery": [
            { "src": "img/a.jpg", "alt": "Beach" },
            { "src": " img/b.jpg " }
        ]
    }"#;

    #[test]
    fn test_parse_sample() {
        let manifest = PortfolioManifest::from_json(SAMPLE).unwrap();
        assert_eq!(manifest.title, "Angel's Story");
        assert_eq!(manifest.tagline, None);
        assert_eq!(manifest.gallery.len(), 2);
        assert_eq!(manifest.gallery[1].alt, "");
    }

    #[test]
    fn test_gallery_trims_entries() {
        let gallery = PortfolioManifest::from_json(SAMPLE).unwrap().gallery().unwrap();
        assert_eq!(gallery.len(), 2);
        assert_eq!(gallery.get(1).unwrap().src(), "img/b.jpg");
        assert_eq!(gallery.get(0).unwrap().caption(), "Beach");
    }

    #[test]
    fn test_blank_src_rejected() {
        let json = r#"{ "title": "t", "gallery": [ { "src": "a.jpg" }, { "src": "  " } ] }"#;
        let err = PortfolioManifest::from_json(json).unwrap().gallery().unwrap_err();
        assert!(matches!(err, PortfolioError::MissingImageSource { index: 1 }));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let json = r#"{ "title": "t", "galery": [] }"#;
        assert!(matches!(
            PortfolioManifest::from_json(json),
            Err(PortfolioError::ManifestParse(_))
        ));
    }

    #[test]
    fn test_missing_gallery_is_empty() {
        let manifest = PortfolioManifest::from_json(r#"{ "title": "t" }"#).unwrap();
        assert!(manifest.gallery().unwrap().is_empty());
    }

    #[test]
    fn test_resolve_falls_back_to_bundled() {
        let dir = tempfile::TempDir::new().unwrap();
        assert_eq!(
            resolve_manifest(None, Some(dir.path())).unwrap(),
            ManifestSource::Bundled
        );
        assert_eq!(resolve_manifest(None, None).unwrap(), ManifestSource::Bundled);
    }

    #[test]
    fn test_resolve_prefers_user_config() {
        let dir = tempfile::TempDir::new().unwrap();
        let app_dir = dir.path().join("autobiography");
        std::fs::create_dir_all(&app_dir).unwrap();
        std::fs::write(app_dir.join(MANIFEST_FILE_NAME), SAMPLE).unwrap();

        assert_eq!(
            resolve_manifest(None, Some(dir.path())).unwrap(),
            ManifestSource::UserConfig(app_dir.join(MANIFEST_FILE_NAME))
        );
    }

    #[test]
    fn test_resolve_explicit_must_exist() {
        let dir = tempfile::TempDir::new().unwrap();
        let missing = dir.path().join("nope.json");
        assert!(matches!(
            resolve_manifest(Some(missing.as_path()), None),
            Err(PortfolioError::ManifestNotFound(_))
        ));
    }
}
