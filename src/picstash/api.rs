//! # API Facade
//!
//! The single entry point for picstash operations, regardless of the UI in
//! front of it. The facade dispatches to the command layer and returns
//! structured `Result<CmdResult>` values: no stdout, no stderr, no exit
//! codes. Generic over [`Publisher`] so the full ingest flow can run against
//! a fake version-control collaborator in tests.

use crate::commands;
use crate::error::Result;
use crate::fetch::Fetcher;
use crate::publish::Publisher;
use crate::store::SlotStore;

pub use crate::commands::config::ConfigAction;
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};

pub struct PicstashApi<P: Publisher> {
    store: SlotStore,
    fetcher: Fetcher,
    publisher: P,
    jpeg_quality: u8,
}

impl<P: Publisher> PicstashApi<P> {
    pub fn new(store: SlotStore, fetcher: Fetcher, publisher: P, jpeg_quality: u8) -> Self {
        Self {
            store,
            fetcher,
            publisher,
            jpeg_quality,
        }
    }

    /// The full flow: allocate, ingest, publish.
    pub fn add_image(&self, url: &str, publish: bool) -> Result<CmdResult> {
        commands::add::run(
            &self.store,
            &self.fetcher,
            &self.publisher,
            url,
            self.jpeg_quality,
            publish,
        )
    }

    /// The next slot number, without reserving it.
    pub fn next_slot(&self) -> Result<CmdResult> {
        commands::next::run(&self.store)
    }

    /// Existing slots in ascending order.
    pub fn list_slots(&self) -> Result<CmdResult> {
        commands::list::run(&self.store)
    }

    /// Get or set configuration at the storage root.
    pub fn config(&self, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(self.store.root(), action)
    }
}
