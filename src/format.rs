//! Serialization of [`Color`] back into hex and rgb(a) strings.

use crate::colors::{channel_byte, Color};

/// Format as `#` + alpha pair (only when translucent) + red, green, blue.
///
/// Channels are printed with as many hex digits as they need, so a channel
/// below 16 takes a single digit: black prints as `#000`. The alpha pair is
/// always two digits. Channels and `alpha * 255` are rounded and clamped to
/// `0..=255` first.
pub fn color_to_hex(color: &Color) -> String {
    let alpha = if color.alpha < 1.0 {
        format!("{:02x}", channel_byte(color.alpha * 255.0))
    } else {
        String::new()
    };

    format!(
        "#{}{:x}{:x}{:x}",
        alpha,
        channel_byte(color.red),
        channel_byte(color.green),
        channel_byte(color.blue)
    )
}

/// Format as `rgb(r, g, b )` or `rgba(r, g, b , a)`.
///
/// Note the space before the closing parenthesis or the alpha separator.
pub fn color_to_rgb(color: &Color) -> String {
    if color.alpha < 1.0 {
        format!(
            "rgba({}, {}, {} , {})",
            color.red, color.green, color.blue, color.alpha
        )
    } else {
        format!("rgb({}, {}, {} )", color.red, color.green, color.blue)
    }
}
