//! Conversions between hex strings, RGB triplets and HSL triplets.
//!
//! Everything here is a pure function. Text input is validated up front and
//! rejected with [`ColorError::InvalidHex`]; the numeric paths are total.

use std::fmt;
use std::str::FromStr;

use palette::{LinSrgb, Srgb};
use serde::{Deserialize, Serialize};

use crate::error::ColorError;

/// An sRGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// An HSL color. Hue is in degrees `[0, 360)`, saturation and lightness are
/// percentages in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rgb`, `#rrggbb`, `rgb` or `rrggbb` (any case).
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        hex_to_rgb(hex)
    }

    /// Serialize to lowercase hex `#rrggbb`.
    pub fn to_hex(self) -> String {
        rgb_to_hex(self)
    }

    pub fn to_hsl(self) -> Hsl {
        rgb_to_hsl(self)
    }

    /// WCAG 2.0 relative luminance, linearized through `palette`.
    pub fn relative_luminance(self) -> f32 {
        let linear: LinSrgb<f32> = Srgb::<u8>::from(self).into_format::<f32>().into_linear();
        0.2126 * linear.red + 0.7152 * linear.green + 0.0722 * linear.blue
    }
}

impl From<Rgb> for Srgb<u8> {
    fn from(c: Rgb) -> Self {
        Srgb::new(c.r, c.g, c.b)
    }
}

impl From<Srgb<u8>> for Rgb {
    fn from(srgb: Srgb<u8>) -> Self {
        Self::new(srgb.red, srgb.green, srgb.blue)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

impl Hsl {
    pub fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    pub fn to_rgb(self) -> Rgb {
        hsl_to_rgb(self)
    }

    /// Rotate the hue by `degrees`, wrapping into `[0, 360)`.
    /// Negative offsets are allowed.
    pub fn rotate_hue(self, degrees: f64) -> Hsl {
        Hsl {
            h: normalize_hue(self.h + degrees),
            ..self
        }
    }

    /// Shift lightness by `delta` percentage points, clamped to `[0, 100]`.
    pub fn offset_lightness(self, delta: f64) -> Hsl {
        Hsl {
            l: (self.l + delta).clamp(0.0, 100.0),
            ..self
        }
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({:.1}, {:.1}%, {:.1}%)", self.h, self.s, self.l)
    }
}

/// Wrap any hue (including negative ones) into `[0, 360)`.
pub fn normalize_hue(h: f64) -> f64 {
    let wrapped = h.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Parse a hex color. 3-digit input is expanded by duplicating each digit.
pub fn hex_to_rgb(hex: &str) -> Result<Rgb, ColorError> {
    let invalid = || ColorError::InvalidHex(hex.to_string());

    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid());
    }
    let expanded: String = match digits.len() {
        3 => digits.chars().flat_map(|c| [c, c]).collect(),
        6 => digits.to_string(),
        _ => return Err(invalid()),
    };

    let channel =
        |i: usize| u8::from_str_radix(&expanded[i..i + 2], 16).map_err(|_| invalid());
    Ok(Rgb::new(channel(0)?, channel(2)?, channel(4)?))
}

/// Format as `#rrggbb` with lowercase digits.
pub fn rgb_to_hex(c: Rgb) -> String {
    format!("#{:02x}{:02x}{:02x}", c.r, c.g, c.b)
}

/// Standard min/max RGB to HSL transform.
pub fn rgb_to_hsl(c: Rgb) -> Hsl {
    let r = c.r as f64 / 255.0;
    let g = c.g as f64 / 255.0;
    let b = c.b as f64 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        return Hsl::new(0.0, 0.0, l * 100.0);
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };

    let sector = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    Hsl::new(normalize_hue(sector * 60.0), s * 100.0, l * 100.0)
}

/// Standard HSL to RGB transform; each channel is rounded to the nearest integer.
pub fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    let h = normalize_hue(hsl.h) / 360.0;
    let s = hsl.s.clamp(0.0, 100.0) / 100.0;
    let l = hsl.l.clamp(0.0, 100.0) / 100.0;

    let (r, g, b) = if s == 0.0 {
        (l, l, l)
    } else {
        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;
        (
            hue_to_channel(p, q, h + 1.0 / 3.0),
            hue_to_channel(p, q, h),
            hue_to_channel(p, q, h - 1.0 / 3.0),
        )
    };

    Rgb::new(to_u8(r), to_u8(g), to_u8(b))
}

fn hue_to_channel(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

fn to_u8(channel: f64) -> u8 {
    (channel * 255.0).round().clamp(0.0, 255.0) as u8
}

pub fn hex_to_hsl(hex: &str) -> Result<Hsl, ColorError> {
    hex_to_rgb(hex).map(rgb_to_hsl)
}

pub fn hsl_to_hex(hsl: Hsl) -> String {
    rgb_to_hex(hsl_to_rgb(hsl))
}

/// A validated hex color in canonical `#RRGGBB` form (uppercase digits).
///
/// Serializes as the plain string and re-validates on deserialize.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor(String);

impl HexColor {
    pub fn parse(hex: &str) -> Result<Self, ColorError> {
        hex_to_rgb(hex).map(Self::from)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn to_rgb(&self) -> Rgb {
        // Canonical form is always six valid digits.
        let channel = |i: usize| u8::from_str_radix(&self.0[i..i + 2], 16).unwrap_or(0);
        Rgb::new(channel(1), channel(3), channel(5))
    }

    pub fn to_hsl(&self) -> Hsl {
        rgb_to_hsl(self.to_rgb())
    }
}

impl Default for HexColor {
    /// Pure red.
    fn default() -> Self {
        Self::from(Rgb::new(255, 0, 0))
    }
}

impl From<Rgb> for HexColor {
    fn from(c: Rgb) -> Self {
        Self(format!("#{:02X}{:02X}{:02X}", c.r, c.g, c.b))
    }
}

impl From<Hsl> for HexColor {
    fn from(hsl: Hsl) -> Self {
        Self::from(hsl_to_rgb(hsl))
    }
}

impl FromStr for HexColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for HexColor {
    type Error = ColorError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<HexColor> for String {
    fn from(hex: HexColor) -> Self {
        hex.0
    }
}

impl AsRef<str> for HexColor {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLACK: Rgb = Rgb::new(0, 0, 0);
    const WHITE: Rgb = Rgb::new(255, 255, 255);

    fn assert_close(actual: f64, expected: f64, what: &str) {
        assert!(
            (actual - expected).abs() < 0.01,
            "{what}: expected {expected}, got {actual}"
        );
    }

    #[test]
    fn hex_round_trip() {
        let original = hex_to_rgb("#ff8800").unwrap();
        assert_eq!(original, Rgb::new(255, 136, 0));
        assert_eq!(rgb_to_hex(original), "#ff8800");
    }

    #[test]
    fn hex_uppercase_input() {
        let color = Rgb::from_hex("#FF8800").unwrap();
        assert_eq!(color.to_hex(), "#ff8800");
    }

    #[test]
    fn hex_without_hash() {
        let color = Rgb::from_hex("aabbcc").unwrap();
        assert_eq!(color.to_hex(), "#aabbcc");
    }

    #[test]
    fn hex_short_form_duplicates_digits() {
        assert_eq!(hex_to_rgb("#abc").unwrap(), Rgb::new(0xaa, 0xbb, 0xcc));
        assert_eq!(hex_to_rgb("f00").unwrap(), Rgb::new(255, 0, 0));
    }

    #[test]
    fn hex_invalid_length() {
        for bad in ["", "#", "#ff", "#ffff", "#fffffff"] {
            assert_eq!(
                hex_to_rgb(bad),
                Err(ColorError::InvalidHex(bad.to_string())),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn hex_invalid_chars() {
        assert!(hex_to_rgb("#gggggg").is_err());
        assert!(hex_to_rgb("#12 456").is_err());
        assert!(hex_to_rgb("#+12345").is_err());
    }

    #[test]
    fn hex_non_ascii_is_rejected_without_panicking() {
        assert!(hex_to_rgb("#ééé").is_err());
        assert!(hex_to_rgb("ab€").is_err());
    }

    #[test]
    fn rgb_to_hex_zero_pads() {
        assert_eq!(rgb_to_hex(Rgb::new(1, 2, 3)), "#010203");
    }

    #[test]
    fn primaries_to_hsl() {
        let red = rgb_to_hsl(Rgb::new(255, 0, 0));
        assert_close(red.h, 0.0, "red hue");
        assert_close(red.s, 100.0, "red saturation");
        assert_close(red.l, 50.0, "red lightness");

        assert_close(rgb_to_hsl(Rgb::new(0, 255, 0)).h, 120.0, "green hue");
        assert_close(rgb_to_hsl(Rgb::new(0, 0, 255)).h, 240.0, "blue hue");
    }

    #[test]
    fn red_max_with_blue_over_green_wraps_positive() {
        // Magenta-ish red: g < b on the red-max branch adds a full turn.
        let hsl = rgb_to_hsl(Rgb::new(255, 0, 128));
        assert!(hsl.h > 300.0 && hsl.h < 360.0, "hue was {}", hsl.h);
    }

    #[test]
    fn achromatic_has_zero_hue_and_saturation() {
        for c in [BLACK, WHITE, Rgb::new(128, 128, 128)] {
            let hsl = rgb_to_hsl(c);
            assert_eq!(hsl.h, 0.0);
            assert_eq!(hsl.s, 0.0);
        }
        assert_close(rgb_to_hsl(WHITE).l, 100.0, "white lightness");
        assert_close(rgb_to_hsl(BLACK).l, 0.0, "black lightness");
    }

    #[test]
    fn saturation_branches_on_lightness() {
        // Light pink (l > 50) and dark red (l < 50) both fully saturated.
        assert_close(rgb_to_hsl(Rgb::new(255, 128, 128)).s, 100.0, "light");
        assert_close(rgb_to_hsl(Rgb::new(128, 0, 0)).s, 100.0, "dark");
    }

    #[test]
    fn hsl_to_rgb_known_values() {
        assert_eq!(hsl_to_rgb(Hsl::new(180.0, 100.0, 50.0)), Rgb::new(0, 255, 255));
        assert_eq!(hsl_to_rgb(Hsl::new(120.0, 100.0, 50.0)), Rgb::new(0, 255, 0));
        assert_eq!(hsl_to_rgb(Hsl::new(240.0, 100.0, 50.0)), Rgb::new(0, 0, 255));
        assert_eq!(hsl_to_rgb(Hsl::new(0.0, 0.0, 100.0)), WHITE);
    }

    #[test]
    fn hsl_to_rgb_accepts_unnormalized_hue() {
        assert_eq!(
            hsl_to_rgb(Hsl::new(-120.0, 100.0, 50.0)),
            hsl_to_rgb(Hsl::new(240.0, 100.0, 50.0))
        );
        assert_eq!(
            hsl_to_rgb(Hsl::new(360.0, 100.0, 50.0)),
            Rgb::new(255, 0, 0)
        );
    }

    #[test]
    fn rotate_hue_wraps_both_directions() {
        let base = Hsl::new(10.0, 50.0, 50.0);
        assert_close(base.rotate_hue(-30.0).h, 340.0, "negative wrap");
        assert_close(base.rotate_hue(355.0).h, 5.0, "positive wrap");
    }

    #[test]
    fn offset_lightness_clamps() {
        let base = Hsl::new(0.0, 100.0, 95.0);
        assert_eq!(base.offset_lightness(20.0).l, 100.0);
        assert_eq!(Hsl::new(0.0, 100.0, 5.0).offset_lightness(-20.0).l, 0.0);
    }

    #[test]
    fn normalize_hue_stays_in_range() {
        for h in [-720.0, -1e-18, 0.0, 359.999, 360.0, 725.0] {
            let n = normalize_hue(h);
            assert!((0.0..360.0).contains(&n), "{h} normalized to {n}");
        }
    }

    #[test]
    fn hex_color_is_canonical_uppercase() {
        let hex = HexColor::parse("#abc").unwrap();
        assert_eq!(hex.as_str(), "#AABBCC");
        assert_eq!(hex.to_rgb(), Rgb::new(0xaa, 0xbb, 0xcc));
        assert_eq!(HexColor::default().as_str(), "#FF0000");
    }

    #[test]
    fn hex_color_serde_validates() {
        let hex: HexColor = serde_json::from_str("\"#00ff00\"").unwrap();
        assert_eq!(hex.as_str(), "#00FF00");
        assert_eq!(serde_json::to_string(&hex).unwrap(), "\"#00FF00\"");
        assert!(serde_json::from_str::<HexColor>("\"nope\"").is_err());
    }

    #[test]
    fn palette_round_trip() {
        let c = Rgb::new(171, 205, 239);
        let srgb: Srgb<u8> = c.into();
        assert_eq!(Rgb::from(srgb), c);
    }

    #[test]
    fn relative_luminance_extremes() {
        assert!(BLACK.relative_luminance() < 0.001);
        assert!((WHITE.relative_luminance() - 1.0).abs() < 0.001);
    }

    #[test]
    fn display_formats() {
        assert_eq!(Rgb::new(1, 2, 3).to_string(), "rgb(1, 2, 3)");
        assert_eq!(Hsl::new(120.0, 50.0, 25.0).to_string(), "hsl(120.0, 50.0%, 25.0%)");
    }
}
