//! Offline cache for the landing page's decorative imagery.
//!
//! Network-first with a disk fallback: a fetch refreshes the cached copy,
//! and when the shop's connection is down the last good bytes are served so
//! the landing page still renders. Nothing else depends on these images.

use std::fs;
use std::path::PathBuf;

use reqwest::Client;
use thiserror::Error;
use url::Url;

use crate::util::version::USER_AGENT;

const CACHE_DIR_NAME: &str = "mamta-movers";

/// One decorative slot on the landing page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HeroSource {
    /// Stable slug, doubles as the cache file stem.
    pub slug: &'static str,
    pub caption: &'static str,
    pub url: &'static str,
}

/// The three remote images the landing page has always used.
pub const HERO_SOURCES: [HeroSource; 3] = [
    HeroSource {
        slug: "truck",
        caption: "Our fleet, ready to roll",
        url: "https://source.unsplash.com/featured/?truck",
    },
    HeroSource {
        slug: "moving",
        caption: "Careful packing, careful hands",
        url: "https://source.unsplash.com/featured/?moving",
    },
    HeroSource {
        slug: "logistics",
        caption: "Across Jamshedpur and beyond",
        url: "https://source.unsplash.com/featured/?logistics",
    },
];

/// Whether a load came straight from the network or from the disk cache.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FetchStatus {
    Fresh,
    Cached,
}

#[derive(Debug, Error)]
pub enum ImageStoreError {
    #[error("invalid image URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("http request error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("cache io error: {0}")]
    Io(#[from] std::io::Error),
}

pub struct ImageStore {
    http: Client,
    dir: PathBuf,
}

impl ImageStore {
    pub fn new() -> Result<Self, ImageStoreError> {
        let http = Client::builder().user_agent(USER_AGENT).build()?;
        let dir = dirs::cache_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(CACHE_DIR_NAME);
        fs::create_dir_all(&dir)?;
        Ok(Self { http, dir })
    }

    /// Fetch a source, refreshing its cached copy. On any network failure
    /// the cached bytes are returned instead, if a previous run stored them.
    pub async fn load(
        &self,
        source: &HeroSource,
    ) -> Result<(Vec<u8>, FetchStatus), ImageStoreError> {
        match self.fetch(source).await {
            Ok(bytes) => Ok((bytes, FetchStatus::Fresh)),
            Err(err) => match self.cached(source) {
                Some(bytes) => {
                    tracing::warn!(slug = source.slug, error = %err, "serving cached hero image");
                    Ok((bytes, FetchStatus::Cached))
                }
                None => Err(err),
            },
        }
    }

    async fn fetch(&self, source: &HeroSource) -> Result<Vec<u8>, ImageStoreError> {
        let url = Url::parse(source.url)?;
        let bytes = self
            .http
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?
            .to_vec();

        if let Err(err) = fs::write(self.cache_path(source), &bytes) {
            tracing::warn!(slug = source.slug, error = %err, "failed to cache hero image");
        }
        Ok(bytes)
    }

    fn cached(&self, source: &HeroSource) -> Option<Vec<u8>> {
        fs::read(self.cache_path(source)).ok()
    }

    fn cache_path(&self, source: &HeroSource) -> PathBuf {
        self.dir.join(format!("hero-{}.img", source.slug))
    }
}

/// Inline an image for the webview, sniffing the handful of formats the
/// image service actually returns.
pub fn data_uri(bytes: &[u8]) -> String {
    format!(
        "data:{};base64,{}",
        sniff_mime(bytes),
        crate::util::assets::encode_base64(bytes)
    )
}

fn sniff_mime(bytes: &[u8]) -> &'static str {
    if bytes.starts_with(&[0x89, b'P', b'N', b'G']) {
        "image/png"
    } else if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
        "image/jpeg"
    } else if bytes.starts_with(b"GIF8") {
        "image/gif"
    } else if bytes.len() > 11 && &bytes[8..12] == b"WEBP" {
        "image/webp"
    } else {
        "application/octet-stream"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_fixed_sources() {
        assert_eq!(HERO_SOURCES.len(), 3);
        for source in &HERO_SOURCES {
            assert!(Url::parse(source.url).is_ok(), "{} must parse", source.url);
        }
    }

    #[test]
    fn data_uri_sniffs_common_formats() {
        let png = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
        assert!(data_uri(&png).starts_with("data:image/png;base64,"));

        let jpeg = [0xFF, 0xD8, 0xFF, 0xE0];
        assert!(data_uri(&jpeg).starts_with("data:image/jpeg;base64,"));

        assert!(data_uri(b"??").starts_with("data:application/octet-stream;base64,"));
    }
}
