//! CLI command for color linearization
//!
//! SPDX-FileCopyrightText: 2025 `CyberDeco`
//!
//! SPDX-License-Identifier: MIT

use super::ToLinearArgs;
use crate::color::parse_color;

impl ToLinearArgs {
    /// Parse the color, linearize it and print the RGB result
    ///
    /// # Errors
    /// Returns an error if the color literal is invalid.
    pub fn execute(&self) -> anyhow::Result<()> {
        println!("{}", linearize_line(&self.color)?);
        Ok(())
    }
}

/// Result line for a literal: `Linearized color: 1.000, 0.000, 0.000`
pub fn linearize_line(literal: &str) -> crate::Result<String> {
    let color = parse_color(literal)?;
    let linear = color.to_linear();
    tracing::debug!("{} -> {}", color, linear);

    Ok(format!("Linearized color: {}", linear.rgb_triplet()))
}
