//! Command definitions for the `PipeKit` binaries
//!
//! SPDX-FileCopyrightText: 2025 `CyberDeco`
//!
//! SPDX-License-Identifier: MIT

pub mod texture_atlas;
pub mod to_linear;

use clap::Parser;
use std::path::PathBuf;

/// Convert an sRGB color literal to linear RGB
#[derive(Parser, Debug)]
#[command(name = "to-linear", version)]
#[command(about = "Linearize an sRGB color literal", long_about = None)]
pub struct ToLinearArgs {
    /// Color literal: #RRGGBB, #RRGGBBAA, rgb(r, g, b) or rgba(r, g, b, a)
    #[arg(value_name = "COLOR")]
    pub color: String,
}

/// Slice a texture atlas into numbered tiles
#[derive(Parser, Debug)]
#[command(name = "texture-atlas", version)]
#[command(about = "Split a grid-aligned texture atlas into <index>.png tiles", long_about = None)]
pub struct TextureAtlasArgs {
    /// Source atlas image
    #[arg(value_name = "IMAGE_PATH")]
    pub image_path: PathBuf,

    /// Tile width in pixels
    #[arg(value_name = "TEXTURE_WIDTH", value_parser = clap::value_parser!(u32).range(1..))]
    pub texture_width: u32,

    /// Tile height in pixels
    #[arg(value_name = "TEXTURE_HEIGHT", value_parser = clap::value_parser!(u32).range(1..))]
    pub texture_height: u32,

    /// Index of the first (top-left) tile
    #[arg(value_name = "START_INDEX")]
    pub start_index: u64,

    /// Output directory (created if missing)
    #[arg(value_name = "OUTPUT_DIR")]
    pub output_dir: PathBuf,
}
