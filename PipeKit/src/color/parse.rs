//! Color literal classification
//!
//! SPDX-FileCopyrightText: 2025 `CyberDeco`
//!
//! SPDX-License-Identifier: MIT

use crate::error::{Error, Result};
use regex::{Captures, Regex};
use std::sync::OnceLock;

/// `rgb(r, g, b)` / `rgba(r, g, b, a)` with integer or decimal components.
/// Whitespace may follow `(` and each comma, and precede `)`.
const FUNCTIONAL_PATTERN: &str = r"^rgba?\(\s*([0-9]+\.?[0-9]*),\s*([0-9]+\.?[0-9]*),\s*([0-9]+\.?[0-9]*)(?:,\s*([0-9]+\.?[0-9]*))?\s*\)$";

/// Hex digits with an optional leading `#`; length is checked separately
const HEX_PATTERN: &str = r"^#?([0-9a-fA-F]+)$";

fn functional_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(FUNCTIONAL_PATTERN).expect("valid functional color pattern"))
}

fn hex_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(HEX_PATTERN).expect("valid hex color pattern"))
}

/// A recognised color literal, before normalization
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColorLiteral {
    /// `#RRGGBB`
    Hex { r: u8, g: u8, b: u8 },
    /// `#RRGGBBAA`
    HexAlpha { r: u8, g: u8, b: u8, a: u8 },
    /// `rgb(255, 128, 0)` - color channels on the `0-255` scale, alpha taken as written
    FunctionalInt { r: u32, g: u32, b: u32, a: Option<f32> },
    /// `rgba(1.0, 0.5, 0, 0.25)` - every channel used as written
    FunctionalFloat { r: f32, g: f32, b: f32, a: Option<f32> },
}

impl ColorLiteral {
    /// Classify a literal, trying the functional form first and then hex.
    ///
    /// A single decimal point anywhere among the functional components
    /// switches every component to float interpretation, so
    /// `rgb(255, 0, 0.5)` is read with red = 255.0. Components are not
    /// clamped or range-checked.
    ///
    /// # Errors
    /// Returns [`Error::InvalidColorFormat`] carrying `literal` unchanged if
    /// neither form matches or a hex literal is not 6 or 8 digits long.
    pub fn parse(literal: &str) -> Result<Self> {
        let trimmed = literal.trim();

        if let Some(caps) = functional_regex().captures(trimmed) {
            return parse_functional(&caps, literal);
        }

        if let Some(caps) = hex_regex().captures(trimmed) {
            return parse_hex(&caps[1], literal);
        }

        Err(Error::invalid_color(literal))
    }
}

fn parse_functional(caps: &Captures<'_>, literal: &str) -> Result<ColorLiteral> {
    let r = &caps[1];
    let g = &caps[2];
    let b = &caps[3];
    let a = caps.get(4).as_ref().map(regex::Match::as_str);

    let is_float = [r, g, b].iter().chain(a.iter()).any(|c| c.contains('.'));

    let alpha = a.map(|a| decimal(a, literal)).transpose()?;

    if is_float {
        Ok(ColorLiteral::FunctionalFloat {
            r: decimal(r, literal)?,
            g: decimal(g, literal)?,
            b: decimal(b, literal)?,
            a: alpha,
        })
    } else {
        Ok(ColorLiteral::FunctionalInt {
            r: integer(r, literal)?,
            g: integer(g, literal)?,
            b: integer(b, literal)?,
            a: alpha,
        })
    }
}

fn parse_hex(digits: &str, literal: &str) -> Result<ColorLiteral> {
    let pair = |i: usize| -> Result<u8> {
        u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| Error::invalid_color(literal))
    };

    match digits.len() {
        6 => Ok(ColorLiteral::Hex {
            r: pair(0)?,
            g: pair(2)?,
            b: pair(4)?,
        }),
        8 => Ok(ColorLiteral::HexAlpha {
            r: pair(0)?,
            g: pair(2)?,
            b: pair(4)?,
            a: pair(6)?,
        }),
        _ => Err(Error::invalid_color(literal)),
    }
}

fn decimal(component: &str, literal: &str) -> Result<f32> {
    component
        .parse::<f32>()
        .map_err(|_| Error::invalid_color(literal))
}

/// Fails only for digit runs wider than `u32`
fn integer(component: &str, literal: &str) -> Result<u32> {
    component
        .parse::<u32>()
        .map_err(|_| Error::invalid_color(literal))
}
