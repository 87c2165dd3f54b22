use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::fetch::Fetcher;
use crate::imaging;
use crate::model::CANONICAL_IMAGE;
use crate::publish::Publisher;
use crate::store::SlotStore;
use std::fs;

/// The full ingest flow: reserve the next slot, download into it, transcode
/// to the canonical JPEG, then hand the slot to the publisher.
///
/// Strictly sequential, no compensation: a failure after the slot directory
/// exists leaves it behind, and the next run allocates a fresh number.
pub fn run<P: Publisher>(
    store: &SlotStore,
    fetcher: &Fetcher,
    publisher: &P,
    url: &str,
    jpeg_quality: u8,
    publish: bool,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let slot = store.create_next()?;
    let rel = store.slot_rel_path(slot.id);
    result.add_message(CmdMessage::info(format!(
        "Created folder: {}",
        rel.display()
    )));

    let temp = slot.temp_path();
    result.add_message(CmdMessage::info(format!("Downloading image from: {}", url)));
    fetcher.download(url, &temp)?;

    result.add_message(CmdMessage::info("Converting to JPG format..."));
    if let Err(e) = imaging::transcode_to_jpeg(&temp, &slot.image_path(), jpeg_quality) {
        // Undecodable downloads are discarded with the failure
        let _ = fs::remove_file(&temp);
        return Err(e);
    }
    fs::remove_file(&temp)?;
    result.add_message(CmdMessage::success(format!(
        "Image saved to: {}/{}",
        rel.display(),
        CANONICAL_IMAGE
    )));

    if publish {
        result.add_message(CmdMessage::info("Adding to git..."));
        publisher.stage(&rel)?;
        result.add_message(CmdMessage::info("Committing..."));
        publisher.commit(&slot.id.to_string())?;
        result.add_message(CmdMessage::info("Pushing to remote..."));
        publisher.push()?;
    } else {
        result.add_message(CmdMessage::warning("Publishing skipped."));
    }

    result.add_message(CmdMessage::success("Done!"));
    Ok(result.with_slot(slot))
}
