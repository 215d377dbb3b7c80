#![forbid(unsafe_code)]

//! # Oxblend
//!
//! Parse, format and blend colors written as hex or `rgb(...)` strings.
//!
//! ## Overview
//!
//! Everything here is a pure function over small values:
//!
//! - **Detection**: [`is_hex`], [`is_rgb`] and [`is_color`] classify input
//! - **Parsing**: [`hex_to_color`], [`rgb_to_color`] and the [`string_to_color`]
//!   dispatcher turn strings into a [`Color`]
//! - **Formatting**: [`color_to_hex`] and [`color_to_rgb`] turn it back
//! - **Blending**: [`calculate_target_color`], [`calculate_foreground_color`]
//!   and [`calculate_alpha`] solve the linear blend of a foreground over an
//!   opaque background for each of its unknowns
//!
//! ## Example Usage
//!
//! ```rust
//! use oxblend::{calculate_alpha, calculate_target_color, color_to_hex, hex_to_color};
//!
//! let black = hex_to_color("#000").unwrap();
//! let white = hex_to_color("#fff").unwrap();
//!
//! let grey = calculate_target_color(black, white, 0.5);
//! assert_eq!(color_to_hex(&grey), "#808080");
//!
//! let alpha = calculate_alpha(black, white, grey);
//! assert!((alpha - 0.5).abs() < 0.005);
//! ```
//!
//! ## Error Handling
//!
//! [`hex_to_color`] and [`rgb_to_color`] return `None` for malformed input and
//! report why through the `log` facade. [`parse_hex`], [`parse_rgb`] and
//! [`parse_color`] return the reason as a [`ColorParseError`], a `miette`
//! diagnostic pointing at the offending part of the input.

pub use blend::{calculate_alpha, calculate_foreground_color, calculate_target_color};
pub use colors::Color;
pub use detect::{is_color, is_hex, is_rgb, ColorFields};
pub use error::{ColorParseError, ColorResult};
pub use format::{color_to_hex, color_to_rgb};
pub use parse::{
    hex_to_color, parse_color, parse_hex, parse_rgb, rgb_to_color, string_to_color, Parsed,
};

/// Blend arithmetic
pub mod blend;
/// The color record and its conversions
pub mod colors;
/// Format detection predicates
pub mod detect;
/// Error types and handling
pub mod error;
/// Hex and rgb(a) serialization
pub mod format;
/// Hex and rgb(a) parsing
pub mod parse;
