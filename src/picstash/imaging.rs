//! JPEG transcoding for the ingest flow.
//!
//! The downloaded bytes are decoded by sniffing their content; the server's
//! Content-Type is never trusted. Whatever the source format, the canonical
//! artifact is an RGB JPEG at the configured quality.

use crate::error::{PicstashError, Result};
use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ImageReader};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Decode `source` and re-encode it as a JPEG at `quality` into `dest`.
///
/// Unrecognized or truncated bytes fail with a decode error; a zero-byte
/// source fails the same way rather than producing an empty JPEG.
pub fn transcode_to_jpeg(source: &Path, dest: &Path, quality: u8) -> Result<()> {
    let reader = ImageReader::open(source)
        .map_err(PicstashError::Io)?
        .with_guessed_format()
        .map_err(PicstashError::Io)?;
    let decoded = reader
        .decode()
        .map_err(|e| PicstashError::Decode(e.to_string()))?;

    // JPEG has no alpha channel; flatten everything to RGB first
    let rgb = DynamicImage::ImageRgb8(decoded.to_rgb8());

    let file = File::create(dest).map_err(|e| {
        PicstashError::Write(format!("cannot create {}: {}", dest.display(), e))
    })?;
    let mut writer = BufWriter::new(file);
    rgb.write_with_encoder(JpegEncoder::new_with_quality(&mut writer, quality))
        .map_err(|e| PicstashError::Write(format!("while encoding {}: {}", dest.display(), e)))?;
    writer
        .flush()
        .map_err(|e| PicstashError::Write(format!("while writing {}: {}", dest.display(), e)))?;
    Ok(())
}
