use anyhow::{Context, Result};
use clap::Parser;

use color_harmony::cli::{Args, Command};
use color_harmony::color::HexColor;
use color_harmony::naming::get_color_name;
use color_harmony::scheme::get_color_scheme_by_name;
use color_harmony::state::{load_history, SchemeState, HISTORY_KEY};
use color_harmony::storage::{default_session_dir, FileStorage, SessionStorage};
use color_harmony::tui::{self, TuiApp};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let session_dir = args.session_dir.clone().unwrap_or_else(default_session_dir);
    log::debug!("session directory: {}", session_dir.display());
    let mut storage = FileStorage::new(session_dir);

    match args.command {
        Command::Scheme { color, kind, json } => {
            let colors = get_color_scheme_by_name(&color, &kind, args.lang)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&colors)?);
            } else {
                for info in &colors {
                    println!("{}  {}", info.hex, info.name);
                }
            }
        }
        Command::Convert { color } => {
            let hex = HexColor::parse(&color)?;
            println!("hex  {hex}");
            println!("rgb  {}", hex.to_rgb());
            println!("hsl  {}", hex.to_hsl());
        }
        Command::Name { color } => {
            let hex = HexColor::parse(&color)?;
            println!("{}", get_color_name(hex.as_str(), args.lang));
        }
        Command::History { clear, json } => {
            if clear {
                storage
                    .remove(HISTORY_KEY)
                    .context("failed to clear session history")?;
                eprintln!("history cleared");
                return Ok(());
            }
            let history = load_history(&storage);
            if json {
                println!("{}", serde_json::to_string_pretty(&history)?);
            } else if history.is_empty() {
                eprintln!("no history in {}", storage.dir().display());
            } else {
                for entry in &history {
                    let members: Vec<&str> = entry.colors.iter().map(|c| c.hex.as_str()).collect();
                    println!(
                        "{}  {:<14} {}",
                        entry.base_color,
                        entry.scheme,
                        members.join(" ")
                    );
                }
            }
        }
        Command::Tui => {
            let state = SchemeState::with_lang(storage, args.lang);
            tui::run(TuiApp::new(state))?;
        }
    }

    Ok(())
}
