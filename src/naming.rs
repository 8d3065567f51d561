use std::fmt;

use serde::{Deserialize, Serialize};

/// Display language for color names.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    Es,
    En,
}

impl Lang {
    /// The two-letter language tag.
    pub fn tag(self) -> &'static str {
        match self {
            Lang::Es => "es",
            Lang::En => "en",
        }
    }

    pub fn toggle(self) -> Lang {
        match self {
            Lang::Es => Lang::En,
            Lang::En => Lang::Es,
        }
    }

    /// Label appended to a color name for its darker monochromatic variant.
    pub fn darker_label(self) -> &'static str {
        match self {
            Lang::Es => "Oscuro",
            Lang::En => "Dark",
        }
    }

    /// Label appended to a color name for its lighter monochromatic variant.
    pub fn lighter_label(self) -> &'static str {
        match self {
            Lang::Es => "Claro",
            Lang::En => "Light",
        }
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.tag())
    }
}

/// (canonical hex, es, en)
const COLOR_NAMES: [(&str, &str, &str); 12] = [
    ("#FF0000", "Rojo", "Red"),
    ("#00FF00", "Verde", "Green"),
    ("#0000FF", "Azul", "Blue"),
    ("#FFFF00", "Amarillo", "Yellow"),
    ("#FF00FF", "Magenta", "Magenta"),
    ("#00FFFF", "Cian", "Cyan"),
    ("#FFA500", "Naranja", "Orange"),
    ("#800080", "Morado", "Purple"),
    ("#008000", "Verde Oscuro", "Dark Green"),
    ("#000080", "Azul Marino", "Navy"),
    ("#FFC0CB", "Rosa", "Pink"),
    ("#A52A2A", "Marrón", "Brown"),
];

/// Uppercase the input and make sure it carries a leading `#`.
fn normalize(hex: &str) -> String {
    let upper = hex.to_uppercase();
    if upper.starts_with('#') {
        upper
    } else {
        format!("#{upper}")
    }
}

/// Look up the display name of a color.
///
/// Falls back to the normalized hex string for anything outside the fixed
/// table, which is most generated colors.
pub fn get_color_name(hex: &str, lang: Lang) -> String {
    let normalized = normalize(hex);
    COLOR_NAMES
        .iter()
        .find(|(key, _, _)| *key == normalized)
        .map(|&(_, es, en)| match lang {
            Lang::Es => es.to_string(),
            Lang::En => en.to_string(),
        })
        .unwrap_or(normalized)
}
