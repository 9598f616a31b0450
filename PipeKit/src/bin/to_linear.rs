//! `to-linear` - print the linear RGB value of an sRGB color literal
//!
//! SPDX-FileCopyrightText: 2025 `CyberDeco`
//!
//! SPDX-License-Identifier: MIT

fn main() -> anyhow::Result<()> {
    pipekit::cli::run_to_linear()
}
