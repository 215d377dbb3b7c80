//! Hex and `rgb(...)`/`rgba(...)` parsers.
//!
//! The `parse_*` functions report failures as [`ColorParseError`] diagnostics.
//! [`hex_to_color`], [`rgb_to_color`] and [`string_to_color`] never fail:
//! malformed input collapses to an empty result and a `log` warning.

use log::{debug, warn};

use crate::{
    colors::Color,
    detect::{is_hex, is_rgb, HEX_RE},
    error::{ColorParseError, ColorResult},
};

/// Outcome of [`string_to_color`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Parsed<'a> {
    /// The input was recognized and parsed
    Color(Color),
    /// The input looked like a hex or rgb color but did not parse
    Unparseable,
    /// The input matched no known format and is handed back as is
    Unrecognized(&'a str),
}

impl Parsed<'_> {
    pub fn color(&self) -> Option<Color> {
        match self {
            Parsed::Color(color) => Some(*color),
            _ => None,
        }
    }

    pub fn is_unrecognized(&self) -> bool {
        matches!(self, Parsed::Unrecognized(_))
    }
}

/// Decode one hex group; a single digit is doubled (`f` reads as `ff`).
fn hex_to_dec(src: &str, group: &str) -> ColorResult<f64> {
    let value = if group.len() == 1 {
        u8::from_str_radix(&group.repeat(2), 16)
    } else {
        u8::from_str_radix(group, 16)
    };
    value
        .map(f64::from)
        .map_err(|_| ColorParseError::invalid_hex(src, (0, src.len())))
}

/// Parse `#RGB`, `#RRGGBB` or the eight digit form `#AAGGBBRR`.
///
/// In the eight digit form the leading pair is the alpha channel, scaled
/// from `0..=255` into `0..=1`, and the trailing pair is red.
pub fn parse_hex(s: &str) -> ColorResult<Color> {
    if s.is_empty() {
        return Err(ColorParseError::Empty);
    }

    let caps = HEX_RE
        .captures(s)
        .ok_or_else(|| ColorParseError::invalid_hex(s, (0, s.len())))?;
    let (_, [mut red, green, blue, extra]) = caps.extract();

    if !(red.len() == green.len() && green.len() == blue.len()) || extra.len() == 1 {
        return Err(ColorParseError::mismatched_groups(s, (1, s.len() - 1)));
    }

    let mut alpha = 1.0;
    if !extra.is_empty() {
        alpha = hex_to_dec(s, red)? / 255.0;
        red = extra;
    }

    Ok(Color {
        red: hex_to_dec(s, red)?,
        green: hex_to_dec(s, green)?,
        blue: hex_to_dec(s, blue)?,
        alpha,
    })
}

fn parse_number(token: &str) -> Option<f64> {
    token.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// One comma separated argument and its byte offset in the source.
type Arg<'a> = (usize, &'a str);

fn parse_channel(src: &str, (offset, raw): Arg<'_>, channel: &'static str) -> ColorResult<f64> {
    let token = raw.trim();
    let span = (offset, raw.len());

    // only the whole-percent part counts, 42.1% reads as 42%
    let value = match token.strip_suffix('%') {
        Some(percent) => parse_number(percent.trim_end()).map(|p| p.trunc() * 255.0 / 100.0),
        None => parse_number(token),
    }
    .ok_or_else(|| ColorParseError::invalid_number(src, span, channel))?;

    if !(0.0..=255.0).contains(&value) {
        return Err(ColorParseError::out_of_range(src, span, channel, value));
    }
    Ok(value)
}

fn parse_alpha(src: &str, (offset, raw): Arg<'_>) -> ColorResult<f64> {
    let span = (offset, raw.len());
    let value = parse_number(raw.trim())
        .ok_or_else(|| ColorParseError::invalid_number(src, span, "alpha"))?;

    if !(0.0..=1.0).contains(&value) {
        return Err(ColorParseError::out_of_range(src, span, "alpha", value));
    }
    Ok(value)
}

/// Parse `rgb(r, g, b)` or `rgba(r, g, b, a)`.
///
/// Channels are numbers in `0..=255` or percentages in `0%..=100%`, alpha is
/// a number in `0..=1` and defaults to `1`. Either function name accepts
/// either arity.
pub fn parse_rgb(s: &str) -> ColorResult<Color> {
    if s.trim().is_empty() {
        return Err(ColorParseError::Empty);
    }

    let open = s
        .find('(')
        .ok_or_else(|| ColorParseError::invalid_func(s, (0, s.len()), "missing '('"))?;
    let name = s[..open].trim();
    if !(name.eq_ignore_ascii_case("rgb") || name.eq_ignore_ascii_case("rgba")) {
        return Err(ColorParseError::invalid_func(
            s,
            (0, open),
            "expected rgb or rgba",
        ));
    }

    let close = match s.rfind(')') {
        Some(close) if close > open && s[close + 1..].trim().is_empty() => close,
        _ => {
            return Err(ColorParseError::invalid_func(
                s,
                (open, s.len() - open),
                "missing closing ')'",
            ))
        }
    };

    let mut args: Vec<Arg<'_>> = Vec::with_capacity(4);
    let mut offset = open + 1;
    for part in s[open + 1..close].split(',') {
        args.push((offset, part));
        offset += part.len() + 1;
    }

    if !(3..=4).contains(&args.len()) {
        return Err(ColorParseError::invalid_func(
            s,
            (open, close + 1 - open),
            format!("expected 3 or 4 arguments, found {}", args.len()),
        ));
    }

    let alpha = match args.get(3) {
        Some(&arg) => parse_alpha(s, arg)?,
        None => 1.0,
    };

    Ok(Color {
        red: parse_channel(s, args[0], "red")?,
        green: parse_channel(s, args[1], "green")?,
        blue: parse_channel(s, args[2], "blue")?,
        alpha,
    })
}

/// Parse either notation, picking the parser from the leading character
pub fn parse_color(s: &str) -> ColorResult<Color> {
    let s = s.trim();
    if s.is_empty() {
        return Err(ColorParseError::Empty);
    }

    if s.starts_with('#') {
        parse_hex(s)
    } else {
        parse_rgb(s)
    }
}

/// Parse a hex color, or `None` when `s` is not one
pub fn hex_to_color(s: &str) -> Option<Color> {
    match parse_hex(s) {
        Ok(color) => Some(color),
        Err(err) => {
            warn!("{}", err);
            None
        }
    }
}

/// Parse an rgb(a) color, or `None` when `s` is not one
pub fn rgb_to_color(s: &str) -> Option<Color> {
    match parse_rgb(s) {
        Ok(color) => Some(color),
        Err(err) => {
            warn!("{}", err);
            None
        }
    }
}

/// Classify `s` and route it to the matching parser.
///
/// Strings that look like neither format are returned unchanged as
/// [`Parsed::Unrecognized`].
pub fn string_to_color(s: &str) -> Parsed<'_> {
    let parsed = if is_hex(s) {
        hex_to_color(s)
    } else if is_rgb(s) {
        rgb_to_color(s)
    } else {
        debug!("passing through unrecognized color string {:?}", s);
        return Parsed::Unrecognized(s);
    };

    parsed.map_or(Parsed::Unparseable, Parsed::Color)
}
