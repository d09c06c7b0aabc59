//! Multi-resolution `favicon.ico` bundling.

use anyhow::{Context, Result, ensure};
use image::{
    ExtendedColorType, RgbaImage,
    codecs::ico::{IcoEncoder, IcoFrame},
};
use std::path::Path;

use super::{backend::SvgConverter, raster::rasterize};
use crate::utils::fs::write_file;

/// Frame sizes embedded in `favicon.ico`, smallest first.
pub const FAVICON_ICO_SIZES: [u32; 3] = [16, 32, 48];

/// Render `svg` at every [`FAVICON_ICO_SIZES`] entry and write one ICO.
///
/// Frames stay in memory; only the container reaches disk.
pub fn render_ico(svg: &Path, dest: &Path, converter: SvgConverter) -> Result<()> {
    let frames = FAVICON_ICO_SIZES
        .iter()
        .map(|&size| rasterize(svg, size, converter))
        .collect::<Result<Vec<_>>>()?;

    let data = encode_ico(&frames)?;
    write_file(dest, data)
}

/// Pack frames into an ICO container, in order.
///
/// The first frame is the primary entry. Entries are stored PNG-compressed.
pub fn encode_ico(frames: &[RgbaImage]) -> Result<Vec<u8>> {
    ensure!(!frames.is_empty(), "an icon needs at least one frame");

    let entries = frames
        .iter()
        .map(|frame| {
            IcoFrame::as_png(
                frame.as_raw(),
                frame.width(),
                frame.height(),
                ExtendedColorType::Rgba8,
            )
            .with_context(|| format!("Failed to encode {}x{} icon frame", frame.width(), frame.height()))
        })
        .collect::<Result<Vec<_>>>()?;

    let mut buffer = Vec::new();
    IcoEncoder::new(&mut buffer)
        .encode_images(&entries)
        .context("Failed to encode ICO")?;
    Ok(buffer)
}
