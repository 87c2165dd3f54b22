use crate::error::{PicstashError, Result};
use crate::model::Layout;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = ".picstash.json";

pub const DEFAULT_JPEG_QUALITY: u8 = 90;
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_MAX_REDIRECTS: usize = 10;

/// Configuration for picstash, stored in `<root>/.picstash.json`.
///
/// Every field has a serde default so older config files keep loading as
/// keys are added.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PicstashConfig {
    /// Where slots live relative to the storage root
    #[serde(default)]
    pub layout: Layout,

    /// JPEG re-encode quality (1-100)
    #[serde(default = "default_jpeg_quality")]
    pub jpeg_quality: u8,

    /// Connect/read timeout for the image download; 0 disables the timeout
    #[serde(default = "default_fetch_timeout_secs")]
    pub fetch_timeout_secs: u64,

    /// Maximum 301/302 hops before the download is abandoned
    #[serde(default = "default_max_redirects")]
    pub max_redirects: usize,

    /// Attach browser-like request headers to the download
    #[serde(default = "default_browser_headers")]
    pub browser_headers: bool,
}

fn default_jpeg_quality() -> u8 {
    DEFAULT_JPEG_QUALITY
}

fn default_fetch_timeout_secs() -> u64 {
    DEFAULT_FETCH_TIMEOUT_SECS
}

fn default_max_redirects() -> usize {
    DEFAULT_MAX_REDIRECTS
}

fn default_browser_headers() -> bool {
    true
}

impl Default for PicstashConfig {
    fn default() -> Self {
        Self {
            layout: Layout::default(),
            jpeg_quality: DEFAULT_JPEG_QUALITY,
            fetch_timeout_secs: DEFAULT_FETCH_TIMEOUT_SECS,
            max_redirects: DEFAULT_MAX_REDIRECTS,
            browser_headers: true,
        }
    }
}

impl PicstashConfig {
    /// Load config from the given storage root, or return defaults if not found
    pub fn load<P: AsRef<Path>>(root: P) -> Result<Self> {
        let config_path = root.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(PicstashError::Io)?;
        let config: PicstashConfig =
            serde_json::from_str(&content).map_err(PicstashError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given storage root
    pub fn save<P: AsRef<Path>>(&self, root: P) -> Result<()> {
        let root = root.as_ref();

        if !root.exists() {
            fs::create_dir_all(root).map_err(PicstashError::Io)?;
        }

        let config_path = root.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(PicstashError::Serialization)?;
        fs::write(config_path, content).map_err(PicstashError::Io)?;
        Ok(())
    }

    /// Set the JPEG quality, clamped to the valid 1-100 range
    pub fn set_jpeg_quality(&mut self, quality: u8) {
        self.jpeg_quality = quality.clamp(1, 100);
    }
}
