//! CLI command for atlas slicing
//!
//! SPDX-FileCopyrightText: 2025 `CyberDeco`
//!
//! SPDX-License-Identifier: MIT

use super::TextureAtlasArgs;
use crate::atlas::{SlicePhase, SliceProgress, extract_textures_with_progress};

impl TextureAtlasArgs {
    /// Slice the atlas, printing `Saved: <path>` for every tile written
    ///
    /// # Errors
    /// Returns an error if the atlas cannot be read or a tile cannot be written.
    pub fn execute(&self) -> anyhow::Result<()> {
        let result = extract_textures_with_progress(
            &self.image_path,
            self.texture_width,
            self.texture_height,
            self.start_index,
            &self.output_dir,
            &print_saved,
        )?;

        tracing::info!(
            "{} cols x {} rows, {} tiles",
            result.grid.cols,
            result.grid.rows,
            result.written.len()
        );

        Ok(())
    }
}

fn print_saved(progress: &SliceProgress) {
    tracing::debug!(
        "{}: {}/{} ({:.0}%)",
        progress.phase.as_str(),
        progress.current,
        progress.total,
        progress.percentage() * 100.0
    );

    if let Some(line) = saved_line(progress) {
        println!("{line}");
    }
}

/// `Saved: <path>` for a written tile, `None` for every other update
#[must_use]
pub fn saved_line(progress: &SliceProgress) -> Option<String> {
    match (progress.phase, &progress.path) {
        (SlicePhase::Writing, Some(path)) => Some(format!("Saved: {}", path.display())),
        _ => None,
    }
}
