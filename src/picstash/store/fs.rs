use crate::error::{PicstashError, Result};
use crate::model::{Layout, Slot, SlotInfo, CANONICAL_IMAGE};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub struct SlotStore {
    root: PathBuf,
    layout: Layout,
}

impl SlotStore {
    pub fn new(root: PathBuf, layout: Layout) -> Self {
        Self { root, layout }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// The directory whose numeric children are slots.
    pub fn slots_dir(&self) -> PathBuf {
        match self.layout {
            Layout::Flat => self.root.clone(),
            Layout::Items => self.root.join("items"),
        }
    }

    /// Path of a slot relative to the storage root (`"3"` or `"items/3"`).
    /// This is what gets staged and what progress lines show.
    pub fn slot_rel_path(&self, id: u32) -> PathBuf {
        match self.layout {
            Layout::Flat => PathBuf::from(id.to_string()),
            Layout::Items => Path::new("items").join(id.to_string()),
        }
    }

    fn existing_ids(&self) -> Result<Vec<u32>> {
        let dir = self.slots_dir();
        if !dir.exists() {
            return Ok(Vec::new());
        }

        let entries = fs::read_dir(&dir).map_err(|e| {
            PicstashError::Filesystem(format!("cannot list {}: {}", dir.display(), e))
        })?;

        let mut ids = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| {
                PicstashError::Filesystem(format!("cannot list {}: {}", dir.display(), e))
            })?;
            let name = entry.file_name();
            let Some(name) = name.to_str() else {
                continue;
            };
            if name.is_empty() || !name.bytes().all(|b| b.is_ascii_digit()) {
                continue;
            }
            let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
            if !is_dir {
                continue;
            }
            if let Ok(id) = name.parse::<u32>() {
                ids.push(id);
            }
        }
        Ok(ids)
    }

    /// Compute the next slot number without creating anything.
    ///
    /// Pure read; reservation is a separate step so the read-to-create
    /// window stays as small as possible.
    pub fn next_id(&self) -> Result<u32> {
        Ok(self
            .existing_ids()?
            .into_iter()
            .max()
            .map_or(1, |max| max + 1))
    }

    /// Allocate and reserve the next slot.
    ///
    /// `fs::create_dir` fails on an existing directory, so a concurrent run
    /// that wins the same number pushes this one onto the next allocation
    /// instead of both writing into one slot.
    pub fn create_next(&self) -> Result<Slot> {
        let dir = self.slots_dir();
        if !dir.exists() {
            fs::create_dir_all(&dir).map_err(|e| {
                PicstashError::Filesystem(format!("cannot create {}: {}", dir.display(), e))
            })?;
        }

        loop {
            let id = self.next_id()?;
            let slot_dir = dir.join(id.to_string());
            match fs::create_dir(&slot_dir) {
                Ok(()) => return Ok(Slot { id, dir: slot_dir }),
                // Lost the race to another run; its directory will show up
                // in the next allocation pass.
                Err(e) if e.kind() == io::ErrorKind::AlreadyExists && slot_dir.is_dir() => {
                    continue;
                }
                Err(e) => {
                    return Err(PicstashError::Filesystem(format!(
                        "cannot create slot {}: {}",
                        slot_dir.display(),
                        e
                    )))
                }
            }
        }
    }

    /// Enumerate existing slots in ascending id order.
    pub fn list(&self) -> Result<Vec<SlotInfo>> {
        let dir = self.slots_dir();
        let mut ids = self.existing_ids()?;
        ids.sort_unstable();

        let mut slots = Vec::with_capacity(ids.len());
        for id in ids {
            let slot_dir = dir.join(id.to_string());
            let image_size = fs::metadata(slot_dir.join(CANONICAL_IMAGE))
                .ok()
                .map(|m| m.len());
            slots.push(SlotInfo {
                id,
                dir: slot_dir,
                image_size,
            });
        }
        Ok(slots)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn flat_store() -> (TempDir, SlotStore) {
        let temp = TempDir::new().unwrap();
        let store = SlotStore::new(temp.path().to_path_buf(), Layout::Flat);
        (temp, store)
    }

    #[test]
    fn next_id_is_one_for_empty_root() {
        let (_temp, store) = flat_store();
        assert_eq!(store.next_id().unwrap(), 1);
    }

    #[test]
    fn next_id_is_one_for_missing_root() {
        let temp = TempDir::new().unwrap();
        let store = SlotStore::new(temp.path().join("nope"), Layout::Flat);
        assert_eq!(store.next_id().unwrap(), 1);
    }

    #[test]
    fn next_id_skips_holes() {
        let (temp, store) = flat_store();
        for n in ["1", "2", "4"] {
            fs::create_dir(temp.path().join(n)).unwrap();
        }
        assert_eq!(store.next_id().unwrap(), 5);
    }

    #[test]
    fn next_id_ignores_non_numeric_siblings() {
        let (temp, store) = flat_store();
        fs::create_dir(temp.path().join("3")).unwrap();
        fs::create_dir(temp.path().join("assets")).unwrap();
        fs::create_dir(temp.path().join("12abc")).unwrap();
        fs::write(temp.path().join("README.md"), "readme").unwrap();
        assert_eq!(store.next_id().unwrap(), 4);
    }

    #[test]
    fn next_id_ignores_numeric_files() {
        let (temp, store) = flat_store();
        fs::create_dir(temp.path().join("2")).unwrap();
        // A numeric *file* is not a slot
        fs::write(temp.path().join("9"), "not a slot").unwrap();
        assert_eq!(store.next_id().unwrap(), 3);
    }

    #[test]
    fn create_next_reserves_the_directory() {
        let (temp, store) = flat_store();
        let slot = store.create_next().unwrap();
        assert_eq!(slot.id, 1);
        assert!(temp.path().join("1").is_dir());

        // Allocation is never reused
        let slot = store.create_next().unwrap();
        assert_eq!(slot.id, 2);
    }

    #[test]
    fn create_next_retries_past_a_colliding_directory() {
        let (temp, store) = flat_store();
        fs::create_dir(temp.path().join("1")).unwrap();
        let slot = store.create_next().unwrap();
        assert_eq!(slot.id, 2);
    }

    #[test]
    fn items_layout_nests_slots() {
        let temp = TempDir::new().unwrap();
        let store = SlotStore::new(temp.path().to_path_buf(), Layout::Items);

        let slot = store.create_next().unwrap();
        assert_eq!(slot.id, 1);
        assert!(temp.path().join("items").join("1").is_dir());
        assert_eq!(store.slot_rel_path(1), Path::new("items").join("1"));
    }

    #[test]
    fn items_layout_ignores_root_level_slots() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("7")).unwrap();
        let store = SlotStore::new(temp.path().to_path_buf(), Layout::Items);
        assert_eq!(store.next_id().unwrap(), 1);
    }

    #[test]
    fn list_reports_image_presence() {
        let (temp, store) = flat_store();
        fs::create_dir(temp.path().join("1")).unwrap();
        fs::write(temp.path().join("1").join(CANONICAL_IMAGE), [0xffu8; 16]).unwrap();
        fs::create_dir(temp.path().join("2")).unwrap();

        let slots = store.list().unwrap();
        assert_eq!(slots.len(), 2);
        assert_eq!(slots[0].id, 1);
        assert_eq!(slots[0].image_size, Some(16));
        assert_eq!(slots[1].id, 2);
        assert_eq!(slots[1].image_size, None);
    }

    #[test]
    fn list_is_sorted_numerically() {
        let (temp, store) = flat_store();
        for n in ["10", "2", "1"] {
            fs::create_dir(temp.path().join(n)).unwrap();
        }
        let ids: Vec<u32> = store.list().unwrap().into_iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1, 2, 10]);
    }
}
