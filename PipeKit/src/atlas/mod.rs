//! Texture atlas slicing
//!
//! Cuts a grid-aligned sprite sheet into fixed-size tiles and writes each one
//! as `<index>.png`, numbered row-major from a caller-supplied start index.
//!
//! SPDX-FileCopyrightText: 2025 `CyberDeco`
//!
//! SPDX-License-Identifier: MIT

mod grid;
mod types;

use crate::error::{Error, Result};
use image::{DynamicImage, GenericImageView};
use std::fs;
use std::path::{Path, PathBuf};

pub use grid::{AtlasGrid, TileRect};
pub use types::{SlicePhase, SliceProgress, SliceProgressCallback, SliceResult};

/// Slice an atlas image into `tile_width` x `tile_height` tiles
///
/// Creates `output_dir` (and parents) if missing. A tile larger than the
/// atlas yields an empty grid and writes nothing.
///
/// # Errors
/// Returns an error if the tile size is zero, the image cannot be decoded,
/// the tile indices would overflow `u64`, the directory cannot be created,
/// or a tile cannot be written. Tiles written before the failure are left on
/// disk.
pub fn extract_textures<P: AsRef<Path>, Q: AsRef<Path>>(
    image_path: P,
    tile_width: u32,
    tile_height: u32,
    start_index: u64,
    output_dir: Q,
) -> Result<SliceResult> {
    extract_textures_with_progress(
        image_path,
        tile_width,
        tile_height,
        start_index,
        output_dir,
        &|_| {},
    )
}

/// Slice an atlas image, reporting each written tile through `progress`
///
/// # Errors
/// See [`extract_textures`].
pub fn extract_textures_with_progress<P: AsRef<Path>, Q: AsRef<Path>>(
    image_path: P,
    tile_width: u32,
    tile_height: u32,
    start_index: u64,
    output_dir: Q,
    progress: SliceProgressCallback,
) -> Result<SliceResult> {
    let image_path = image_path.as_ref();
    let output_dir = output_dir.as_ref();

    // Reject a bad tile size before touching the filesystem
    if tile_width == 0 || tile_height == 0 {
        return Err(Error::InvalidTileSize {
            width: tile_width,
            height: tile_height,
        });
    }

    tracing::info!("Slicing atlas: {}", image_path.display());
    progress(&SliceProgress::new(SlicePhase::Decoding, 0, 0));

    let atlas = open_atlas(image_path)?;
    let (width, height) = atlas.dimensions();
    let grid = AtlasGrid::new(width, height, tile_width, tile_height)?;

    tracing::debug!(
        "Atlas {}x{}: {} cols x {} rows of {}x{}",
        width,
        height,
        grid.cols,
        grid.rows,
        tile_width,
        tile_height
    );
    let (extra_x, extra_y) = grid.remainder();
    if extra_x > 0 || extra_y > 0 {
        tracing::debug!("Dropping {extra_x}px on the right and {extra_y}px at the bottom");
    }

    grid.check_indices(start_index)?;

    fs::create_dir_all(output_dir)?;

    let total = grid.tile_count();
    let mut written = Vec::new();

    for tile in grid.tiles(start_index) {
        let path = tile_path(output_dir, tile.index);
        save_tile(&atlas, &tile, &path)?;
        tracing::debug!("Wrote tile ({}, {}) to {}", tile.row, tile.col, path.display());

        progress(&SliceProgress::with_path(
            SlicePhase::Writing,
            written.len() as u64 + 1,
            total,
            path.clone(),
        ));
        written.push(path);
    }

    progress(&SliceProgress::new(SlicePhase::Complete, total, total));
    tracing::info!("Wrote {} tiles to {}", written.len(), output_dir.display());

    Ok(SliceResult { grid, written })
}

/// Output path for tile `index`: `<output_dir>/<index>.png`
#[must_use]
pub fn tile_path(output_dir: &Path, index: u64) -> PathBuf {
    output_dir.join(format!("{index}.png"))
}

fn open_atlas(path: &Path) -> Result<DynamicImage> {
    image::open(path).map_err(|e| Error::ImageDecodeFailed {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

fn save_tile(atlas: &DynamicImage, tile: &TileRect, path: &Path) -> Result<()> {
    atlas
        .crop_imm(tile.x, tile.y, tile.width, tile.height)
        .save(path)
        .map_err(|e| Error::ImageWriteFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
}
