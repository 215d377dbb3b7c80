//! Linear blend arithmetic between a foreground, an opaque background and
//! the composited target.
//!
//! All three functions work channel by channel on red, green and blue:
//!
//! ```text
//! target = background + (foreground - background) * opacity
//! ```
//!
//! [`calculate_target_color`] evaluates it, [`calculate_foreground_color`]
//! solves it for the foreground and [`calculate_alpha`] for the opacity.

use crate::colors::Color;

#[inline]
fn target_channel(foreground: f64, background: f64, opacity: f64) -> f64 {
    background + (foreground - background) * opacity
}

/// Composite `foreground` over an opaque `background` at `opacity`.
///
/// Channels are rounded to whole numbers and the result is opaque.
pub fn calculate_target_color(foreground: Color, background: Color, opacity: f64) -> Color {
    Color::rgb(
        target_channel(foreground.red, background.red, opacity).round(),
        target_channel(foreground.green, background.green, opacity).round(),
        target_channel(foreground.blue, background.blue, opacity).round(),
    )
}

#[inline]
fn foreground_channel(background: f64, opacity: f64, target: f64) -> f64 {
    // any foreground blends to the background at zero opacity
    if opacity == 0.0 {
        return background;
    }
    ((target - background + background * opacity) / opacity).clamp(0.0, 255.0)
}

/// Find the foreground that gives `target` over `background` at `opacity`.
///
/// The result carries `opacity` as its alpha. Channels are not rounded, and
/// a target out of reach at this opacity clamps to `0..=255`.
pub fn calculate_foreground_color(background: Color, opacity: f64, target: Color) -> Color {
    Color::rgba(
        foreground_channel(background.red, opacity, target.red),
        foreground_channel(background.green, opacity, target.green),
        foreground_channel(background.blue, opacity, target.blue),
        opacity,
    )
}

#[inline]
fn alpha_channel(foreground: f64, background: f64, target: f64) -> f64 {
    let denominator = foreground - background;
    if denominator == 0.0 {
        return 0.0;
    }
    (target - background) / denominator
}

/// Estimate the opacity that composites `foreground` over `background` into
/// `target`.
///
/// This is the mean of the per channel estimates. A channel where foreground
/// and background agree contributes `0`. Inconsistent inputs are not
/// detected.
pub fn calculate_alpha(foreground: Color, background: Color, target: Color) -> f64 {
    (alpha_channel(foreground.red, background.red, target.red)
        + alpha_channel(foreground.green, background.green, target.green)
        + alpha_channel(foreground.blue, background.blue, target.blue))
        / 3.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::hex_to_color;
    use pretty_assertions::assert_eq;

    fn hex(s: &str) -> Color {
        hex_to_color(s).unwrap()
    }

    #[test]
    fn test_black_on_white_half_is_grey() {
        assert_eq!(
            calculate_target_color(hex("#000"), hex("#fff"), 0.5),
            hex("#808080")
        );
    }

    #[test]
    fn test_blue_on_red() {
        assert_eq!(
            calculate_target_color(hex("#00f"), hex("#f00"), 0.32),
            hex("#ad0052")
        );
    }

    #[test]
    fn test_target_drops_alpha() {
        let translucent = Color::rgba(10.0, 20.0, 30.0, 0.2);
        let target = calculate_target_color(translucent, hex("#000"), 1.0);
        assert_eq!(target, Color::rgb(10.0, 20.0, 30.0));
    }

    #[test]
    fn test_grey_is_white_on_black() {
        assert_eq!(
            calculate_foreground_color(hex("#000"), 0.5, hex("#808080")),
            Color::rgba(255.0, 255.0, 255.0, 0.5)
        );
    }

    #[test]
    fn test_foreground_is_unrounded() {
        let foreground = calculate_foreground_color(hex("#000"), 0.5, Color::rgb(1.0, 2.0, 3.0));
        assert_eq!(foreground, Color::rgba(2.0, 4.0, 6.0, 0.5));

        let foreground = calculate_foreground_color(hex("#000"), 0.4, Color::rgb(1.0, 1.0, 1.0));
        assert!((foreground.red - 2.5).abs() < 1e-9);
    }

    #[test]
    fn test_foreground_clamps_unreachable_targets() {
        // darker than the background cannot be reached by a black foreground at 10%
        let foreground = calculate_foreground_color(hex("#fff"), 0.1, hex("#000"));
        assert_eq!(foreground, Color::rgba(0.0, 0.0, 0.0, 0.1));
    }

    #[test]
    fn test_foreground_at_zero_opacity() {
        let background = hex("#123456");
        let foreground = calculate_foreground_color(background, 0.0, hex("#fff"));
        assert_eq!(foreground, background.with_alpha(0.0));
    }

    #[test]
    fn test_alpha_of_grey() {
        let alpha = calculate_alpha(hex("#000"), hex("#fff"), hex("#808080"));
        assert!((alpha - 0.5).abs() < 0.005, "alpha was {alpha}");
    }

    #[test]
    fn test_alpha_exact() {
        let alpha = calculate_alpha(
            Color::rgb(0.0, 0.0, 0.0),
            Color::rgb(200.0, 100.0, 50.0),
            Color::rgb(100.0, 50.0, 25.0),
        );
        assert!((alpha - 0.5).abs() < 1e-9, "alpha was {alpha}");
    }

    #[test]
    fn test_alpha_equal_channels_count_as_zero() {
        // red and green agree between foreground and background
        let alpha = calculate_alpha(hex("#f00"), hex("#f0f"), hex("#f08"));
        let blue = (136.0 - 255.0) / (0.0 - 255.0);
        assert!((alpha - blue / 3.0).abs() < 1e-9, "alpha was {alpha}");

        assert_eq!(calculate_alpha(hex("#abc"), hex("#abc"), hex("#abc")), 0.0);
    }

    #[test]
    fn test_blend_inverse_round_trip() {
        let background = hex("#204060");
        let foreground = hex("#e0c0a0");
        let target = calculate_target_color(foreground, background, 0.25);

        let alpha = calculate_alpha(foreground, background, target);
        assert!((alpha - 0.25).abs() < 0.01, "alpha was {alpha}");

        let recovered = calculate_foreground_color(background, 0.25, target);
        assert!((recovered.red - foreground.red).abs() <= 2.0);
        assert!((recovered.green - foreground.green).abs() <= 2.0);
        assert!((recovered.blue - foreground.blue).abs() <= 2.0);
    }
}
