//! The canonical color record.
//!
//! [`Color`] stores red, green and blue as intensities in `0.0..=255.0` and
//! alpha as an opacity in `0.0..=1.0`. Channels are floating point because
//! percentage syntax and the blend arithmetic both produce fractional values.
//!
//! Conversions into owo-colors and ratatui colors are provided for
//! rendering the parsed values in a terminal.

use owo_colors::Rgb;
use ratatui::style::Color as RatatuiColor;
use std::{
    fmt::{self, Display},
    str::FromStr,
};

use crate::{
    blend::calculate_target_color,
    error::ColorParseError,
    format::{color_to_hex, color_to_rgb},
    parse::parse_color,
};

/// An RGBA color with floating point channels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Default for Color {
    fn default() -> Self {
        Self::rgb(0.0, 0.0, 0.0)
    }
}

impl Color {
    /// Create a new RGB color with full opacity
    #[inline]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha: 1.0,
        }
    }

    /// Create a new RGBA color with specified alpha
    #[inline]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Get color with modified alpha
    pub fn with_alpha(&self, alpha: f64) -> Self {
        Self { alpha, ..*self }
    }

    /// Whether the color is fully opaque
    pub fn is_opaque(&self) -> bool {
        self.alpha >= 1.0
    }

    /// Get the RGB components
    pub fn rgb_components(&self) -> (f64, f64, f64) {
        (self.red, self.green, self.blue)
    }

    /// Get the RGBA components
    pub fn rgba_components(&self) -> (f64, f64, f64, f64) {
        (self.red, self.green, self.blue, self.alpha)
    }

    /// Convert to hexadecimal string representation, see [`color_to_hex`]
    pub fn to_hex(&self) -> String {
        color_to_hex(self)
    }

    /// Convert to `rgb(...)`/`rgba(...)` notation, see [`color_to_rgb`]
    pub fn to_rgb_string(&self) -> String {
        color_to_rgb(self)
    }

    /// Composite this color over an opaque `background` at `opacity`
    pub fn over(self, background: Color, opacity: f64) -> Self {
        calculate_target_color(self, background, opacity)
    }

    /// Channels rounded and clamped to bytes
    pub fn to_bytes(&self) -> (u8, u8, u8) {
        (
            channel_byte(self.red),
            channel_byte(self.green),
            channel_byte(self.blue),
        )
    }

    /// Convert to owo-colors RGB type
    pub fn to_owo_rgb(&self) -> Rgb {
        let (r, g, b) = self.to_bytes();
        Rgb(r, g, b)
    }

    /// Convert to ratatui Color
    pub fn to_ratatui(&self) -> RatatuiColor {
        let (r, g, b) = self.to_bytes();
        RatatuiColor::Rgb(r, g, b)
    }
}

pub(crate) fn channel_byte(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }
    value.round().clamp(0.0, 255.0) as u8
}

impl From<Color> for Rgb {
    fn from(color: Color) -> Self {
        color.to_owo_rgb()
    }
}

impl From<Color> for RatatuiColor {
    fn from(color: Color) -> Self {
        color.to_ratatui()
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&color_to_rgb(self))
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_color(s)
    }
}

impl TryFrom<&str> for Color {
    type Error = ColorParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        parse_color(value)
    }
}
