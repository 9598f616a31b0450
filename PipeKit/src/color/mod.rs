//! sRGB color literals and linearization
//!
//! Parses a color literal (`#RRGGBB`, `#RRGGBBAA`, `rgb(...)`, `rgba(...)`)
//! into normalized RGBA and converts it to linear space with the sRGB
//! electro-optical transfer function.
//!
//! SPDX-FileCopyrightText: 2025 `CyberDeco`
//!
//! SPDX-License-Identifier: MIT

mod parse;

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

pub use parse::ColorLiteral;

/// Values at or below this are on the linear segment of the sRGB curve
const SRGB_LINEAR_CUTOFF: f32 = 0.04045;

/// An RGBA color, nominally with every component in `[0.0, 1.0]`
///
/// Functional literals are not clamped, so out-of-range values pass through.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    /// Apply the sRGB-to-linear transfer function to R, G and B.
    ///
    /// Alpha is already linear and passes through untouched.
    #[must_use]
    pub fn to_linear(self) -> Self {
        Self {
            r: srgb_to_linear(self.r),
            g: srgb_to_linear(self.g),
            b: srgb_to_linear(self.b),
            a: self.a,
        }
    }

    /// Format R, G and B to three decimals: `1.000, 0.000, 0.000`
    #[must_use]
    pub fn rgb_triplet(&self) -> String {
        format!("{:.3}, {:.3}, {:.3}", self.r, self.g, self.b)
    }
}

impl From<ColorLiteral> for Rgba {
    fn from(literal: ColorLiteral) -> Self {
        match literal {
            ColorLiteral::Hex { r, g, b } => Self {
                r: channel_from_u8(r),
                g: channel_from_u8(g),
                b: channel_from_u8(b),
                a: 1.0,
            },
            ColorLiteral::HexAlpha { r, g, b, a } => Self {
                r: channel_from_u8(r),
                g: channel_from_u8(g),
                b: channel_from_u8(b),
                a: channel_from_u8(a),
            },
            ColorLiteral::FunctionalInt { r, g, b, a } => Self {
                r: r as f32 / 255.0,
                g: g as f32 / 255.0,
                b: b as f32 / 255.0,
                a: a.unwrap_or(1.0),
            },
            ColorLiteral::FunctionalFloat { r, g, b, a } => Self {
                r,
                g,
                b,
                a: a.unwrap_or(1.0),
            },
        }
    }
}

impl FromStr for Rgba {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_color(s)
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rgba({:.3}, {:.3}, {:.3}, {:.3})",
            self.r, self.g, self.b, self.a
        )
    }
}

/// Parse a color literal into normalized RGBA
///
/// # Errors
/// Returns [`Error::InvalidColorFormat`] if the literal is not a recognised
/// form.
pub fn parse_color(literal: &str) -> Result<Rgba> {
    let parsed = ColorLiteral::parse(literal)?;
    tracing::debug!("Parsed color literal {:?} as {:?}", literal, parsed);
    Ok(Rgba::from(parsed))
}

/// sRGB to linear for a single channel value in `[0.0, 1.0]`
#[must_use]
pub fn srgb_to_linear(v: f32) -> f32 {
    if v <= SRGB_LINEAR_CUTOFF {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

fn channel_from_u8(v: u8) -> f32 {
    f32::from(v) / 255.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rgba(r: f32, g: f32, b: f32, a: f32) -> Rgba {
        Rgba { r, g, b, a }
    }

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn test_srgb_to_linear_spot_values() {
        assert_eq!(srgb_to_linear(0.0), 0.0);
        assert!(approx(srgb_to_linear(1.0), 1.0));
        assert!(approx(srgb_to_linear(0.5), 0.214));
    }

    #[test]
    fn test_srgb_to_linear_lower_branch() {
        assert_eq!(srgb_to_linear(0.04045), 0.04045 / 12.92);
        // Linear segment ends at ~0.0031308
        assert!(srgb_to_linear(0.04045) <= 0.003_131);
        assert!(srgb_to_linear(0.05) > 0.003_131);
    }

    #[test]
    fn test_hex_components() {
        let color = parse_color("#1A2B3C").unwrap();
        assert_eq!(color.r, f32::from(0x1Au8) / 255.0);
        assert_eq!(color.g, f32::from(0x2Bu8) / 255.0);
        assert_eq!(color.b, f32::from(0x3Cu8) / 255.0);
        assert_eq!(color.a, 1.0);

        let color = parse_color("#1A2B3C80").unwrap();
        assert_eq!(color.a, f32::from(0x80u8) / 255.0);
    }

    #[test]
    fn test_red_linearizes() {
        let color = parse_color("#FF0000").unwrap();
        assert_eq!(color, rgba(1.0, 0.0, 0.0, 1.0));
        assert_eq!(color.to_linear().rgb_triplet(), "1.000, 0.000, 0.000");
    }

    #[test]
    fn test_white_functional() {
        let color = parse_color("rgb(255,255,255)").unwrap();
        assert_eq!(color, rgba(1.0, 1.0, 1.0, 1.0));
        assert_eq!(color.to_linear().rgb_triplet(), "1.000, 1.000, 1.000");
    }

    #[test]
    fn test_alpha_passes_through() {
        let color = parse_color("rgba(0,0,0,0.5)").unwrap();
        assert_eq!(color, rgba(0.0, 0.0, 0.0, 0.5));

        let linear = color.to_linear();
        assert_eq!(linear.a, 0.5);
        assert_eq!(linear.rgb_triplet(), "0.000, 0.000, 0.000");
    }

    #[test]
    fn test_unclamped_functional_values() {
        let color = parse_color("rgb(255, 0, 0.5)").unwrap();
        assert_eq!(color, rgba(255.0, 0.0, 0.5, 1.0));

        let color = parse_color("rgba(255,0,0,128)").unwrap();
        assert_eq!(color, rgba(1.0, 0.0, 0.0, 128.0));
        assert_eq!(color.to_linear().rgb_triplet(), "1.000, 0.000, 0.000");

        let color = parse_color("rgb(300,0,0)").unwrap();
        assert_eq!(color.r, 300.0 / 255.0);
        assert_eq!(color.to_linear().rgb_triplet(), "1.449, 0.000, 0.000");
    }

    #[test]
    fn test_from_str() {
        let color: Rgba = "#00FF00".parse().unwrap();
        assert_eq!(color.g, 1.0);
        assert!("notacolor".parse::<Rgba>().is_err());
    }

    #[test]
    fn test_invalid_literal_carries_input() {
        match parse_color("notacolor") {
            Err(Error::InvalidColorFormat { literal }) => assert_eq!(literal, "notacolor"),
            other => panic!("expected InvalidColorFormat, got {other:?}"),
        }
    }
}
