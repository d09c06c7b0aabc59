//! SVG rasterization into square PNG icons.

use anyhow::{Context, Result, bail, ensure};
use image::{ImageFormat, RgbaImage, imageops::FilterType};
use resvg::tiny_skia;
use std::{io::Cursor, path::Path};

use super::backend::SvgConverter;
use crate::utils::{exec::Cmd, fs::write_file};

/// Rasterize `svg` into an exactly `size × size` RGBA image.
///
/// The drawing is stretched to fill the square, matching a render with both
/// output width and height forced to `size`.
pub fn rasterize(svg: &Path, size: u32, converter: SvgConverter) -> Result<RgbaImage> {
    ensure!(size > 0, "icon size must be positive");

    let data = std::fs::read(svg).with_context(|| format!("Failed to read `{}`", svg.display()))?;

    let image = match converter {
        SvgConverter::Builtin => rasterize_builtin(svg, &data, size),
        SvgConverter::Magick => rasterize_magick(svg, &data, size),
    }
    .with_context(|| format!("Failed to render `{}` at {size}px", svg.display()))?;

    debug_assert_eq!(image.dimensions(), (size, size));
    Ok(image)
}

/// Render `svg` at `size` and write it to `dest` as PNG.
pub fn render_png(svg: &Path, dest: &Path, size: u32, converter: SvgConverter) -> Result<()> {
    let image = rasterize(svg, size, converter)?;
    let png = encode_png(&image)?;
    write_file(dest, png)
}

/// Encode an RGBA image as PNG bytes.
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut buffer), ImageFormat::Png)
        .context("Failed to encode PNG")?;
    Ok(buffer)
}

/// Render with resvg into a tiny-skia pixmap
#[allow(clippy::cast_precision_loss)]
fn rasterize_builtin(svg: &Path, data: &[u8], size: u32) -> Result<RgbaImage> {
    // Relative hrefs inside the SVG resolve next to the file
    let options = usvg::Options {
        resources_dir: svg
            .canonicalize()
            .ok()
            .and_then(|p| p.parent().map(Path::to_path_buf)),
        ..Default::default()
    };

    let tree = usvg::Tree::from_data(data, &options).context("Failed to parse SVG")?;

    let view = tree.size();
    if view.width() <= 0.0 || view.height() <= 0.0 {
        bail!("SVG has empty size {}x{}", view.width(), view.height());
    }

    let mut pixmap = tiny_skia::Pixmap::new(size, size)
        .with_context(|| format!("Failed to allocate {size}x{size} pixmap"))?;
    let transform = tiny_skia::Transform::from_scale(
        size as f32 / view.width(),
        size as f32 / view.height(),
    );
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    pixmap_to_rgba(&pixmap)
}

/// Convert premultiplied pixmap data to straight-alpha RGBA.
fn pixmap_to_rgba(pixmap: &tiny_skia::Pixmap) -> Result<RgbaImage> {
    let mut raw = Vec::with_capacity(pixmap.data().len());
    for pixel in pixmap.pixels() {
        let color = pixel.demultiply();
        raw.extend_from_slice(&[color.red(), color.green(), color.blue(), color.alpha()]);
    }
    RgbaImage::from_raw(pixmap.width(), pixmap.height(), raw)
        .context("Pixmap buffer does not match its dimensions")
}

/// Render with ImageMagick, reading the file itself and writing PNG to stdout
///
/// The file path keeps relative hrefs resolvable; `-density` makes magick
/// rasterize at or above the target size instead of upsampling.
#[allow(clippy::cast_precision_loss)]
fn rasterize_magick(svg: &Path, data: &[u8], size: u32) -> Result<RgbaImage> {
    let density = usvg::Tree::from_data(data, &usvg::Options::default())
        .map(|tree| magick_density(tree.size().width(), tree.size().height(), size))
        .unwrap_or(MAGICK_BASE_DPI)
        .to_string();
    let geometry = format!("{size}x{size}!");

    let output = Cmd::new("magick")
        .args(["-background", "none", "-density", &density])
        .arg(svg)
        .args(["-resize", &geometry, "png:-"])
        .run()
        .context("ImageMagick conversion failed")?;

    let image = image::load_from_memory_with_format(&output.stdout, ImageFormat::Png)
        .context("ImageMagick produced an unreadable PNG")?
        .to_rgba8();

    if image.dimensions() == (size, size) {
        Ok(image)
    } else {
        Ok(image::imageops::resize(&image, size, size, FilterType::Lanczos3))
    }
}

/// ImageMagick renders SVG user units at 72 DPI.
const MAGICK_BASE_DPI: u32 = 72;

/// Smallest whole DPI at which the longer side of a `width × height` drawing
/// covers `size` pixels. Never below the base DPI.
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
fn magick_density(width: f32, height: f32, size: u32) -> u32 {
    let longest = width.max(height);
    if longest <= 0.0 {
        return MAGICK_BASE_DPI;
    }
    let dpi = (MAGICK_BASE_DPI as f32 * size as f32 / longest).ceil() as u32;
    dpi.max(MAGICK_BASE_DPI)
}
