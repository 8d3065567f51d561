//! Color-harmony rules.
//!
//! Every scheme starts with the base color and appends members derived from
//! the base's HSL form by hue rotation (or, for monochromatic, lightness
//! offsets at fixed hue and saturation).

use std::fmt;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::color::{Hsl, HexColor};
use crate::error::ColorError;
use crate::naming::{get_color_name, Lang};

/// Lightness offset, in percentage points, of the monochromatic variants.
pub const MONOCHROMATIC_STEP: f64 = 20.0;

/// The closed set of harmony rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemeKind {
    #[default]
    Complementary,
    Analogous,
    Triadic,
    Tetradic,
    Monochromatic,
}

impl SchemeKind {
    pub const ALL: [SchemeKind; 5] = [
        Self::Complementary,
        Self::Analogous,
        Self::Triadic,
        Self::Tetradic,
        Self::Monochromatic,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Complementary => "complementary",
            Self::Analogous => "analogous",
            Self::Triadic => "triadic",
            Self::Tetradic => "tetradic",
            Self::Monochromatic => "monochromatic",
        }
    }

    /// Case-insensitive lookup by name. `None` for anything outside the set.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(name.trim()))
    }

    /// Hue offsets in degrees for the rotation-based kinds.
    /// Monochromatic has none; its members vary lightness instead.
    pub fn hue_offsets(self) -> &'static [f64] {
        match self {
            Self::Complementary => &[180.0],
            Self::Analogous => &[30.0, -30.0],
            Self::Triadic => &[120.0, -120.0],
            Self::Tetradic => &[90.0, 180.0, 270.0],
            Self::Monochromatic => &[],
        }
    }

    /// Number of colors in the scheme, base included.
    pub fn color_count(self) -> usize {
        match self {
            Self::Monochromatic => 3,
            kind => 1 + kind.hue_offsets().len(),
        }
    }

    /// The next kind in `ALL`, wrapping around.
    pub fn next(self) -> Self {
        let i = Self::ALL.iter().position(|k| *k == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }
}

impl fmt::Display for SchemeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// A scheme member: its canonical hex and a display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorInfo {
    pub hex: HexColor,
    pub name: String,
}

impl ColorInfo {
    /// Build a member whose name comes from the naming table.
    pub fn named(hex: HexColor, lang: Lang) -> Self {
        let name = get_color_name(hex.as_str(), lang);
        Self { hex, name }
    }
}

fn rotated(base: Hsl, offsets: &[f64], lang: Lang) -> Vec<ColorInfo> {
    offsets
        .iter()
        .map(|&offset| ColorInfo::named(HexColor::from(base.rotate_hue(offset)), lang))
        .collect()
}

pub fn get_complementary_color(base: &HexColor, lang: Lang) -> ColorInfo {
    let hsl = base.to_hsl().rotate_hue(180.0);
    ColorInfo::named(HexColor::from(hsl), lang)
}

pub fn get_analogous_colors(base: &HexColor, lang: Lang) -> Vec<ColorInfo> {
    rotated(base.to_hsl(), SchemeKind::Analogous.hue_offsets(), lang)
}

pub fn get_triadic_colors(base: &HexColor, lang: Lang) -> Vec<ColorInfo> {
    rotated(base.to_hsl(), SchemeKind::Triadic.hue_offsets(), lang)
}

pub fn get_tetradic_colors(base: &HexColor, lang: Lang) -> Vec<ColorInfo> {
    rotated(base.to_hsl(), SchemeKind::Tetradic.hue_offsets(), lang)
}

/// Darker then lighter variant. Names are the base name plus a direction
/// label, not a lookup of the derived hex.
pub fn get_monochromatic_colors(base: &HexColor, lang: Lang) -> Vec<ColorInfo> {
    let hsl = base.to_hsl();
    let base_name = get_color_name(base.as_str(), lang);

    [
        (-MONOCHROMATIC_STEP, lang.darker_label()),
        (MONOCHROMATIC_STEP, lang.lighter_label()),
    ]
    .into_iter()
    .map(|(delta, label)| ColorInfo {
        hex: HexColor::from(hsl.offset_lightness(delta)),
        name: format!("{base_name} {label}"),
    })
    .collect()
}

/// Compute the full scheme for `base`, base color first.
pub fn get_color_scheme(base: &HexColor, kind: SchemeKind, lang: Lang) -> Vec<ColorInfo> {
    let mut colors = vec![ColorInfo::named(base.clone(), lang)];
    match kind {
        SchemeKind::Complementary => colors.push(get_complementary_color(base, lang)),
        SchemeKind::Analogous => colors.extend(get_analogous_colors(base, lang)),
        SchemeKind::Triadic => colors.extend(get_triadic_colors(base, lang)),
        SchemeKind::Tetradic => colors.extend(get_tetradic_colors(base, lang)),
        SchemeKind::Monochromatic => colors.extend(get_monochromatic_colors(base, lang)),
    }
    colors
}

/// Like [`get_color_scheme`] but takes raw text for both inputs.
///
/// Malformed hex is an error. An unrecognized scheme name is not: the result
/// is just the base color.
pub fn get_color_scheme_by_name(
    base_hex: &str,
    kind: &str,
    lang: Lang,
) -> Result<Vec<ColorInfo>, ColorError> {
    let base = HexColor::parse(base_hex)?;
    Ok(match SchemeKind::from_name(kind) {
        Some(kind) => get_color_scheme(&base, kind, lang),
        None => {
            debug!("unrecognized scheme kind {kind:?}, returning base color only");
            vec![ColorInfo::named(base, lang)]
        }
    })
}
