use crate::error::PicstashError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// The canonical image file inside a finalized slot.
pub const CANONICAL_IMAGE: &str = "1.jpg";

/// Transient download artifact inside a slot; must not survive a run.
pub const TEMP_DOWNLOAD: &str = "temp_download";

/// Where slots live relative to the storage root.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// `<root>/<N>/`
    #[default]
    Flat,
    /// `<root>/items/<N>/`
    Items,
}

impl Layout {
    pub fn as_str(&self) -> &'static str {
        match self {
            Layout::Flat => "flat",
            Layout::Items => "items",
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Layout {
    type Err = PicstashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "flat" => Ok(Layout::Flat),
            "items" => Ok(Layout::Items),
            other => Err(PicstashError::Usage(format!(
                "Unknown layout '{}' (expected 'flat' or 'items')",
                other
            ))),
        }
    }
}

/// A freshly reserved slot: a numeric directory awaiting its canonical image.
#[derive(Debug, Clone)]
pub struct Slot {
    pub id: u32,
    pub dir: PathBuf,
}

impl Slot {
    pub fn image_path(&self) -> PathBuf {
        self.dir.join(CANONICAL_IMAGE)
    }

    pub fn temp_path(&self) -> PathBuf {
        self.dir.join(TEMP_DOWNLOAD)
    }
}

/// An existing slot as seen by `list`: id, location, and canonical image
/// size when present.
#[derive(Debug, Clone)]
pub struct SlotInfo {
    pub id: u32,
    pub dir: PathBuf,
    pub image_size: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_parses_known_names() {
        assert_eq!("flat".parse::<Layout>().unwrap(), Layout::Flat);
        assert_eq!("items".parse::<Layout>().unwrap(), Layout::Items);
    }

    #[test]
    fn layout_rejects_unknown_names() {
        assert!("nested".parse::<Layout>().is_err());
    }

    #[test]
    fn slot_paths_are_inside_the_slot_dir() {
        let slot = Slot {
            id: 7,
            dir: PathBuf::from("/store/7"),
        };
        assert_eq!(slot.image_path(), PathBuf::from("/store/7/1.jpg"));
        assert_eq!(slot.temp_path(), PathBuf::from("/store/7/temp_download"));
    }
}
