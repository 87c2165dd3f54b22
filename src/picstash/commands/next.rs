use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::SlotStore;

/// Report the next slot number without reserving it. Pure read.
pub fn run(store: &SlotStore) -> Result<CmdResult> {
    let id = store.next_id()?;
    Ok(CmdResult::default().with_next_id(id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Layout;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn reports_without_creating() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("1")).unwrap();
        fs::create_dir(temp.path().join("2")).unwrap();
        fs::create_dir(temp.path().join("4")).unwrap();
        let store = SlotStore::new(temp.path().to_path_buf(), Layout::Flat);

        let result = run(&store).unwrap();
        assert_eq!(result.next_id, Some(5));
        assert!(!temp.path().join("5").exists());

        // Still 5 on a second read
        assert_eq!(run(&store).unwrap().next_id, Some(5));
    }
}
