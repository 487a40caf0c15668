//! Grayscale masks of pixel selections

use std::path::Path;

use anyhow::Context;
use image::{GrayImage, Luma};

use crate::domain::PixelSelection;

const SELECTED: Luma<u8> = Luma([255]);

/// Mask the size of the selection's raster, 255 where selected and 0 elsewhere
pub fn selection_mask(selection: &PixelSelection) -> GrayImage {
    let raster = selection.raster();
    let mut mask = GrayImage::new(raster.width(), raster.height());
    let width = raster.width() as usize;
    for &idx in selection.pixels() {
        mask.put_pixel((idx % width) as u32, (idx / width) as u32, SELECTED);
    }
    mask
}

/// Write the selection mask as an image, format chosen by extension
pub fn save_mask(selection: &PixelSelection, path: &Path) -> anyhow::Result<()> {
    selection_mask(selection)
        .save(path)
        .with_context(|| format!("Failed to write mask {}", path.display()))?;
    log::info!(
        "Wrote {} selected pixels of '{}' to {}",
        selection.len(),
        selection.image_name(),
        path.display()
    );
    Ok(())
}
