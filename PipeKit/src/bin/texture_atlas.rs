//! `texture-atlas` - split a sprite sheet into numbered tiles
//!
//! SPDX-FileCopyrightText: 2025 `CyberDeco`
//!
//! SPDX-License-Identifier: MIT

fn main() -> anyhow::Result<()> {
    pipekit::cli::run_texture_atlas()
}
