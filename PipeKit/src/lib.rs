//! # PipeKit
//!
//! Small asset pipeline helpers for game textures and shaders.
//!
//! ## Tools
//!
//! - **Color linearization** - parse `#RRGGBB`, `#RRGGBBAA`, `rgb()` or
//!   `rgba()` literals and convert them from sRGB to linear space
//! - **Atlas slicing** - cut a grid-aligned sprite sheet into numbered tiles
//!
//! ## Quick Start
//!
//! ### Linearizing a Color
//!
//! ```
//! use pipekit::color::parse_color;
//!
//! let linear = parse_color("#FF8000")?.to_linear();
//! println!("Linearized color: {}", linear.rgb_triplet());
//! # Ok::<(), pipekit::Error>(())
//! ```
//!
//! ### Slicing an Atlas
//!
//! ```no_run
//! use pipekit::atlas::extract_textures;
//!
//! // 64x64 tiles, numbered from 10, written to tiles/10.png, tiles/11.png, ...
//! let result = extract_textures("atlas.png", 64, 64, 10, "tiles/")?;
//! println!("Wrote {} tiles", result.written.len());
//! # Ok::<(), pipekit::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `cli` - Enables the `to-linear` and `texture-atlas` binaries
//!
//! SPDX-FileCopyrightText: 2025 `CyberDeco`
//!
//! SPDX-License-Identifier: MIT

pub mod atlas;
pub mod color;
pub mod error;

// Re-exports for convenience
pub use error::{Error, Result};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::error::{Error, Result};

    pub use crate::color::{ColorLiteral, Rgba, parse_color, srgb_to_linear};

    pub use crate::atlas::{
        AtlasGrid, SlicePhase, SliceProgress, SliceResult, TileRect, extract_textures,
        extract_textures_with_progress,
    };
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// CLI module (feature-gated)
#[cfg(feature = "cli")]
pub mod cli;
