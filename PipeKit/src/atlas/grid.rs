//! Grid arithmetic for fixed-size tiles
//!
//! SPDX-FileCopyrightText: 2025 `CyberDeco`
//!
//! SPDX-License-Identifier: MIT

use crate::error::{Error, Result};

/// A fixed-size tile grid laid over an atlas image
///
/// Columns and rows are floor-divided, so pixels past the last full tile on
/// the right or bottom edge belong to no tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AtlasGrid {
    pub atlas_width: u32,
    pub atlas_height: u32,
    pub tile_width: u32,
    pub tile_height: u32,
    pub cols: u32,
    pub rows: u32,
}

/// One tile of the grid, in pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileRect {
    /// Running output index (file name stem)
    pub index: u64,
    pub row: u32,
    pub col: u32,
    /// Left edge
    pub x: u32,
    /// Top edge
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl AtlasGrid {
    /// Build the grid for an atlas of `atlas_width` x `atlas_height`.
    ///
    /// # Errors
    /// Returns [`Error::InvalidTileSize`] if either tile dimension is zero.
    pub fn new(atlas_width: u32, atlas_height: u32, tile_width: u32, tile_height: u32) -> Result<Self> {
        if tile_width == 0 || tile_height == 0 {
            return Err(Error::InvalidTileSize {
                width: tile_width,
                height: tile_height,
            });
        }

        Ok(Self {
            atlas_width,
            atlas_height,
            tile_width,
            tile_height,
            cols: atlas_width / tile_width,
            rows: atlas_height / tile_height,
        })
    }

    /// Number of tiles the grid covers
    #[must_use]
    pub fn tile_count(&self) -> u64 {
        u64::from(self.cols) * u64::from(self.rows)
    }

    /// Pixels left uncovered on the right and bottom edges
    #[must_use]
    pub fn remainder(&self) -> (u32, u32) {
        (
            self.atlas_width % self.tile_width,
            self.atlas_height % self.tile_height,
        )
    }

    /// Check that every tile index from `start_index` fits in a `u64`
    ///
    /// # Errors
    /// Returns [`Error::IndexOverflow`] if the last index would exceed `u64::MAX`.
    pub fn check_indices(&self, start_index: u64) -> Result<()> {
        let count = self.tile_count();
        if count > 0 && start_index.checked_add(count - 1).is_none() {
            return Err(Error::IndexOverflow {
                start_index,
                tile_count: count,
            });
        }
        Ok(())
    }

    /// Every tile in row-major order, numbered from `start_index`
    ///
    /// Call [`AtlasGrid::check_indices`] first; indices are not checked here.
    pub fn tiles(&self, start_index: u64) -> impl Iterator<Item = TileRect> + '_ {
        (0..self.rows).flat_map(move |row| {
            (0..self.cols).map(move |col| TileRect {
                index: start_index + u64::from(row) * u64::from(self.cols) + u64::from(col),
                row,
                col,
                x: col * self.tile_width,
                y: row * self.tile_height,
                width: self.tile_width,
                height: self.tile_height,
            })
        })
    }
}
