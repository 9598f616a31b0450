//! Types for atlas slicing progress tracking
//!
//! SPDX-FileCopyrightText: 2025 `CyberDeco`
//!
//! SPDX-License-Identifier: MIT

use std::path::PathBuf;

use super::grid::AtlasGrid;

// ============================================================================
// Progress Types
// ============================================================================

/// Progress callback type for atlas slicing
pub type SliceProgressCallback<'a> = &'a dyn Fn(&SliceProgress);

/// Progress information during atlas slicing
#[derive(Debug, Clone)]
pub struct SliceProgress {
    /// Current operation phase
    pub phase: SlicePhase,
    /// Tiles written so far (1-indexed while writing)
    pub current: u64,
    /// Total number of tiles in the grid
    pub total: u64,
    /// The tile file just written, if any
    pub path: Option<PathBuf>,
}

impl SliceProgress {
    /// Create a new progress update
    #[must_use]
    pub fn new(phase: SlicePhase, current: u64, total: u64) -> Self {
        Self {
            phase,
            current,
            total,
            path: None,
        }
    }

    /// Create a progress update for a written tile
    #[must_use]
    pub fn with_path(phase: SlicePhase, current: u64, total: u64, path: impl Into<PathBuf>) -> Self {
        Self {
            phase,
            current,
            total,
            path: Some(path.into()),
        }
    }

    /// Get the progress percentage (0.0 - 1.0)
    #[must_use]
    pub fn percentage(&self) -> f32 {
        if self.total == 0 {
            1.0
        } else {
            self.current as f32 / self.total as f32
        }
    }
}

/// Phase of atlas slicing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlicePhase {
    /// Decoding the atlas image
    Decoding,
    /// Cropping and writing tiles
    Writing,
    /// Operation complete
    Complete,
}

impl SlicePhase {
    /// Get a human-readable description of this phase
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Decoding => "Decoding",
            Self::Writing => "Writing tiles",
            Self::Complete => "Complete",
        }
    }
}

// ============================================================================
// Result Types
// ============================================================================

/// Outcome of a successful slice
#[derive(Debug, Clone)]
pub struct SliceResult {
    /// The grid that was cut
    pub grid: AtlasGrid,
    /// Tile files in the order they were written
    pub written: Vec<PathBuf>,
}
