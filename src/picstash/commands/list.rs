use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::SlotStore;

pub fn run(store: &SlotStore) -> Result<CmdResult> {
    let slots = store.list()?;
    Ok(CmdResult::default().with_listed_slots(slots))
}
