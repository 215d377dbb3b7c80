//! Format detection predicates.
//!
//! [`is_hex`] and [`is_rgb`] only classify a string by shape; the parsers in
//! [`crate::parse`] decide whether a candidate actually holds a valid color.

use regex::Regex;
use std::{
    borrow::Borrow,
    collections::{BTreeMap, HashMap},
    hash::{BuildHasher, Hash},
    sync::LazyLock,
};

use crate::{colors::Color, parse::Parsed};

/// `#` then three 1-2 digit groups and an optional 0-2 digit trailing group.
///
/// Group lengths are deliberately not tied together here; `#ffff` matches as
/// `ff`, `f`, `f` and is rejected by the parser.
pub(crate) static HEX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#([0-9A-Fa-f]{1,2})([0-9A-Fa-f]{1,2})([0-9A-Fa-f]{1,2})([0-9A-Fa-f]{0,2})$")
        .expect("hex pattern is valid")
});

/// `rgb(...)`/`rgba(...)` with three channels and an optional alpha.
static RGB_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^rgba?\(\s*\d{1,3}(?:\.\d+)?%?\s*,\s*\d{1,3}(?:\.\d+)?%?\s*,\s*\d{1,3}(?:\.\d+)?%?\s*(?:,\s*(?:\d{1,3}|\d*\.\d+)\s*)?\)$",
    )
    .expect("rgb pattern is valid")
});

/// Whether `s` has the shape of a hex color
pub fn is_hex(s: &str) -> bool {
    HEX_RE.is_match(s)
}

/// Whether `s` has the shape of an `rgb(...)` or `rgba(...)` color
pub fn is_rgb(s: &str) -> bool {
    RGB_RE.is_match(s)
}

/// Field access for color-like records.
///
/// Each accessor returns `None` when the record has no such field. This is
/// what [`is_color`] inspects; values are not range checked.
pub trait ColorFields {
    fn red(&self) -> Option<f64>;
    fn green(&self) -> Option<f64>;
    fn blue(&self) -> Option<f64>;
    fn alpha(&self) -> Option<f64>;
}

/// True iff `value` exposes all four of `red`, `green`, `blue` and `alpha`
pub fn is_color<T: ColorFields + ?Sized>(value: &T) -> bool {
    value.red().is_some()
        && value.green().is_some()
        && value.blue().is_some()
        && value.alpha().is_some()
}

impl ColorFields for Color {
    fn red(&self) -> Option<f64> {
        Some(self.red)
    }

    fn green(&self) -> Option<f64> {
        Some(self.green)
    }

    fn blue(&self) -> Option<f64> {
        Some(self.blue)
    }

    fn alpha(&self) -> Option<f64> {
        Some(self.alpha)
    }
}

impl ColorFields for Option<Color> {
    fn red(&self) -> Option<f64> {
        self.map(|c| c.red)
    }

    fn green(&self) -> Option<f64> {
        self.map(|c| c.green)
    }

    fn blue(&self) -> Option<f64> {
        self.map(|c| c.blue)
    }

    fn alpha(&self) -> Option<f64> {
        self.map(|c| c.alpha)
    }
}

impl ColorFields for Parsed<'_> {
    fn red(&self) -> Option<f64> {
        self.color().map(|c| c.red)
    }

    fn green(&self) -> Option<f64> {
        self.color().map(|c| c.green)
    }

    fn blue(&self) -> Option<f64> {
        self.color().map(|c| c.blue)
    }

    fn alpha(&self) -> Option<f64> {
        self.color().map(|c| c.alpha)
    }
}

impl<K, S> ColorFields for HashMap<K, f64, S>
where
    K: Borrow<str> + Hash + Eq,
    S: BuildHasher,
{
    fn red(&self) -> Option<f64> {
        self.get("red").copied()
    }

    fn green(&self) -> Option<f64> {
        self.get("green").copied()
    }

    fn blue(&self) -> Option<f64> {
        self.get("blue").copied()
    }

    fn alpha(&self) -> Option<f64> {
        self.get("alpha").copied()
    }
}

impl<K> ColorFields for BTreeMap<K, f64>
where
    K: Borrow<str> + Ord,
{
    fn red(&self) -> Option<f64> {
        self.get("red").copied()
    }

    fn green(&self) -> Option<f64> {
        self.get("green").copied()
    }

    fn blue(&self) -> Option<f64> {
        self.get("blue").copied()
    }

    fn alpha(&self) -> Option<f64> {
        self.get("alpha").copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_hex_candidates() {
        for s in ["#000", "#123", "#12ff56", "#99000000", "#ffff", "#fffffff", "#AbC"] {
            assert!(is_hex(s), "{s} should look like hex");
        }
    }

    #[test]
    fn test_is_hex_rejects() {
        for s in ["", "fff", "ffffff", "#f", "#ff", "#fffffffff", "#ggg", "x#fff", "#fff "] {
            assert!(!is_hex(s), "{s:?} should not look like hex");
        }
    }

    #[test]
    fn test_is_rgb_candidates() {
        for s in [
            "rgb(0,0,0)",
            "rgb( 100 , 100 , 100 )",
            "rgba(0, 0, 0 , 0.5)",
            "rgb(0,0,0,1)",
            "rgb(0,0,0,.23)",
            "rgb(50%,25%,42.1%)",
            "rgb(243, 132, 20% )",
        ] {
            assert!(is_rgb(s), "{s} should look like rgb");
        }
    }

    #[test]
    fn test_is_rgb_rejects() {
        for s in [
            "",
            "rgb0,0,0,0",
            "rgb(0,0,0,0",
            "rgb(000,0",
            "rgb(0000)",
            "rgb()",
            "rgb(,,,,)",
            "rgb(1,2,3,4,5)",
            "hsl(0,0,0)",
            "#fff",
        ] {
            assert!(!is_rgb(s), "{s:?} should not look like rgb");
        }
    }

    #[test]
    fn test_is_color_structural() {
        assert!(is_color(&Color::rgb(1.0, 2.0, 3.0)));
        assert!(is_color(&Some(Color::default())));
        assert!(!is_color(&None::<Color>));

        let mut record: HashMap<&str, f64> = HashMap::new();
        record.insert("red", 1.0);
        record.insert("green", 2.0);
        record.insert("blue", 3.0);
        assert!(!is_color(&record));

        // presence only, range is not checked
        record.insert("alpha", 7.0);
        assert!(is_color(&record));

        let record: BTreeMap<String, f64> = ["red", "green", "blue", "alpha"]
            .into_iter()
            .map(|k| (k.to_string(), 0.0))
            .collect();
        assert!(is_color(&record));
    }

    #[test]
    fn test_is_color_on_parsed() {
        assert!(is_color(&Parsed::Color(Color::default())));
        assert!(!is_color(&Parsed::Unparseable));
        assert!(!is_color(&Parsed::Unrecognized("teal")));
    }
}
