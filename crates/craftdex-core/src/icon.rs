//! Icon resolution for relevant items.
//!
//! Two strategies produce an embedded data-URI icon:
//!
//! - **asset**: read the texture extracted from the jar into the work
//!   directory and embed it as PNG. Purely local, never touches the network;
//!   a missing file degrades to an empty icon.
//! - **wiki**: fetch the block's wiki page, locate its infobox render (see
//!   [`crate::wiki`]), then fetch a fixed-size thumbnail of it. A failed
//!   page fetch is fatal; a failed thumbnail fetch is retried forever.
//!
//! Items use the asset strategy and blocks the wiki strategy, except where
//! the override tables in [`crate::overrides`] say otherwise.

use crate::error::{Error, Result};
use crate::model::strip_namespace;
use crate::overrides::{ASSET_RENAMES, FORCE_ASSET, FORCE_WIKI, WIKI_RENAMES};
use crate::wiki::{self, BLOCK_ICON_SIZE};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Transport-level failure from a [`Fetcher`]; the caller decides whether
/// it is fatal (pages) or retriable (images)
#[derive(Debug)]
pub struct FetchFailure(String);

impl FetchFailure {
    /// Creates a failure with the given description
    pub fn new(details: impl Into<String>) -> Self {
        Self(details.into())
    }
}

impl fmt::Display for FetchFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Abstraction over HTTP transport so resolution logic is testable offline
pub trait Fetcher {
    /// Fetches a page and returns its markup
    fn fetch_page(&self, url: &str) -> std::result::Result<String, FetchFailure>;

    /// Fetches a binary resource
    fn fetch_bytes(&self, url: &str) -> std::result::Result<Vec<u8>, FetchFailure>;
}

/// Blocking HTTP transport backed by `ureq`
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpFetcher;

impl Fetcher for HttpFetcher {
    fn fetch_page(&self, url: &str) -> std::result::Result<String, FetchFailure> {
        ureq::get(url)
            .call()
            .map_err(|e| FetchFailure::new(e.to_string()))?
            .into_string()
            .map_err(|e| FetchFailure::new(e.to_string()))
    }

    fn fetch_bytes(&self, url: &str) -> std::result::Result<Vec<u8>, FetchFailure> {
        let response = ureq::get(url)
            .call()
            .map_err(|e| FetchFailure::new(e.to_string()))?;
        let mut bytes = Vec::new();
        std::io::Read::read_to_end(&mut response.into_reader(), &mut bytes)
            .map_err(|e| FetchFailure::new(e.to_string()))?;
        Ok(bytes)
    }
}

/// Delay between thumbnail fetch attempts
const DEFAULT_RETRY_DELAY: Duration = Duration::from_secs(1);

/// Resolves icons for item and block identifiers
pub struct IconResolver<F: Fetcher> {
    texture_dir: PathBuf,
    fetcher: F,
    retry_delay: Duration,
}

impl<F: Fetcher> IconResolver<F> {
    /// Creates a resolver reading textures from `<workdir>/minecraft`
    pub fn new(workdir: impl AsRef<Path>, fetcher: F) -> Self {
        Self {
            texture_dir: workdir.as_ref().join("minecraft"),
            fetcher,
            retry_delay: DEFAULT_RETRY_DELAY,
        }
    }

    /// Overrides the thumbnail retry delay (tests use zero)
    pub fn with_retry_delay(mut self, delay: Duration) -> Self {
        self.retry_delay = delay;
        self
    }

    /// Resolves an icon for an item identifier.
    ///
    /// Reads the locally extracted texture; returns an empty string when the
    /// texture is absent. Never fetches over the network, except for the few
    /// identifiers in the force-wiki override set.
    pub fn item_icon(&self, id: &str, name: &str) -> Result<String> {
        if FORCE_WIKI.contains(id) {
            return self.block_icon(id, name);
        }

        let file = ASSET_RENAMES
            .get(id)
            .copied()
            .unwrap_or_else(|| strip_namespace(id));
        let path = self.texture_dir.join(format!("{file}.png"));
        if !path.is_file() {
            debug!("no local texture for '{}' at {}", id, path.display());
            return Ok(String::new());
        }

        let bytes = fs::read(&path).map_err(|e| Error::file_read(&path, e))?;
        Ok(format!("data:image/png;base64,{}", BASE64.encode(bytes)))
    }

    /// Resolves an icon for a block identifier via its wiki page.
    ///
    /// Returns an empty string when the page carries no matching render
    /// image. A failed page fetch is fatal; identifiers in the force-asset
    /// override set are redirected to [`Self::item_icon`].
    pub fn block_icon(&self, id: &str, name: &str) -> Result<String> {
        if FORCE_ASSET.contains(id) {
            return self.item_icon(id, name);
        }

        let page_name = WIKI_RENAMES.get(name).copied().unwrap_or(name);
        let url = wiki::page_url(page_name);
        info!("loading {}", url);
        let page = self
            .fetcher
            .fetch_page(&url)
            .map_err(|e| Error::page_fetch(&url, e.to_string()))?;

        let Some(image) = wiki::find_infobox_image(&page, page_name) else {
            warn!("failed to extract an icon image for '{}'", page_name);
            return Ok(String::new());
        };

        let thumb_url = wiki::thumbnail_url(&image.url, BLOCK_ICON_SIZE);
        let bytes = self.fetch_image_bytes(&thumb_url);

        // gif renders are labeled webp; the bytes are embedded untranscoded.
        let mime = if image.ext == "png" { "png" } else { "webp" };
        Ok(format!("data:image/{};base64,{}", mime, BASE64.encode(bytes)))
    }

    /// Fetches a thumbnail, retrying forever on failure with a fixed delay.
    fn fetch_image_bytes(&self, url: &str) -> Vec<u8> {
        loop {
            match self.fetcher.fetch_bytes(url) {
                Ok(bytes) => return bytes,
                Err(e) => {
                    warn!("failed to fetch image {}, retrying: {}", url, e);
                    std::thread::sleep(self.retry_delay);
                }
            }
        }
    }
}
