//! `PipeKit` CLI - entry points for the `to-linear` and `texture-atlas` binaries
//!
//! SPDX-FileCopyrightText: 2025 `CyberDeco`
//!
//! SPDX-License-Identifier: MIT

pub mod commands;

use clap::Parser;
use commands::{TextureAtlasArgs, ToLinearArgs};
use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset
const DEFAULT_LOG_FILTER: &str = "warn";

/// Run the `to-linear` CLI
pub fn run_to_linear() -> anyhow::Result<()> {
    init_logging();

    let args = ToLinearArgs::parse();
    args.execute()
}

/// Run the `texture-atlas` CLI
pub fn run_texture_atlas() -> anyhow::Result<()> {
    init_logging();

    let args = TextureAtlasArgs::parse();
    args.execute()
}

/// Setup logging on stderr so stdout only carries tool output
fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
