use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::naming::Lang;

/// Compute color-harmony schemes from a base color.
#[derive(Parser, Debug)]
#[command(name = "color-harmony", version, about)]
pub struct Args {
    /// Directory holding the session history (defaults to
    /// $COLOR_HARMONY_SESSION_DIR, then $XDG_RUNTIME_DIR/color-harmony)
    #[arg(long, global = true)]
    pub session_dir: Option<PathBuf>,

    /// Language for color names
    #[arg(long, value_enum, global = true, default_value_t = Lang::Es)]
    pub lang: Lang,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the scheme derived from a base color
    Scheme {
        /// Base color as #rgb or #rrggbb
        color: String,

        /// complementary, analogous, triadic, tetradic or monochromatic.
        /// Anything else yields the base color alone.
        #[arg(short, long, default_value = "complementary")]
        kind: String,

        /// Print the scheme as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a color as hex, RGB and HSL
    Convert {
        /// Color as #rgb or #rrggbb
        color: String,
    },

    /// Print the display name of a color
    Name {
        /// Color as #rgb or #rrggbb
        color: String,
    },

    /// List or clear the recent history of this session
    History {
        /// Remove the stored history
        #[arg(long)]
        clear: bool,

        /// Print the history as JSON
        #[arg(long, conflicts_with = "clear")]
        json: bool,
    },

    /// Launch the interactive terminal UI
    Tui,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_scheme_with_defaults() {
        let args = Args::try_parse_from(["color-harmony", "scheme", "#ff0000"]).unwrap();
        assert_eq!(args.lang, Lang::Es);
        assert!(args.session_dir.is_none());
        match args.command {
            Command::Scheme { color, kind, json } => {
                assert_eq!(color, "#ff0000");
                assert_eq!(kind, "complementary");
                assert!(!json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn global_options_after_subcommand() {
        let args = Args::try_parse_from([
            "color-harmony",
            "name",
            "#00ff00",
            "--lang",
            "en",
            "--session-dir",
            "/tmp/s",
        ])
        .unwrap();
        assert_eq!(args.lang, Lang::En);
        assert_eq!(args.session_dir, Some(PathBuf::from("/tmp/s")));
    }

    #[test]
    fn history_clear_conflicts_with_json() {
        assert!(Args::try_parse_from(["color-harmony", "history", "--clear", "--json"]).is_err());
    }

    #[test]
    fn rejects_unknown_language() {
        assert!(Args::try_parse_from(["color-harmony", "--lang", "fr", "tui"]).is_err());
    }
}
