pub mod widgets;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use log::debug;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use ratatui::DefaultTerminal;

use crate::color::HexColor;
use crate::naming::Lang;
use crate::scheme::SchemeKind;
use crate::state::{now_millis, SchemeState};
use crate::storage::SessionStorage;

use widgets::{HistoryWidget, PresetWidget, SchemeWidget};

/// Swatches offered for one-key selection.
pub const PRESET_COLORS: [&str; 12] = [
    "#FF0000", "#00FF00", "#0000FF", "#FFFF00", "#FF00FF", "#00FFFF", "#FFA500", "#800080",
    "#008000", "#000080", "#FFC0CB", "#A52A2A",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Browse,
    /// Typing a hex value into the input line.
    Editing,
}

/// State for the interactive TUI application.
pub struct TuiApp<S: SessionStorage> {
    pub state: SchemeState<S>,
    pub presets: Vec<HexColor>,
    pub selected_preset: usize,
    pub mode: InputMode,
    pub input: String,
    pub status: Option<String>,
    pub should_quit: bool,
}

impl<S: SessionStorage> TuiApp<S> {
    pub fn new(state: SchemeState<S>) -> Self {
        let presets = PRESET_COLORS
            .iter()
            .filter_map(|hex| HexColor::parse(hex).ok())
            .collect();
        Self {
            state,
            presets,
            selected_preset: 0,
            mode: InputMode::Browse,
            input: String::new(),
            status: None,
            should_quit: false,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        match self.mode {
            InputMode::Browse => self.handle_browse_key(key.code),
            InputMode::Editing => self.handle_edit_key(key.code),
        }
    }

    fn handle_browse_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Left => {
                let n = self.presets.len();
                self.selected_preset = (self.selected_preset + n - 1) % n;
            }
            KeyCode::Right => {
                self.selected_preset = (self.selected_preset + 1) % self.presets.len();
            }
            KeyCode::Enter => {
                let hex = self.presets[self.selected_preset].clone();
                self.apply_color(hex.as_str());
            }
            KeyCode::Tab => {
                let next = self.state.scheme().next();
                self.state.set_scheme_kind(next);
            }
            KeyCode::Char(c @ '1'..='5') => {
                let index = c as usize - '1' as usize;
                self.state.set_scheme_kind(SchemeKind::ALL[index]);
            }
            KeyCode::Char('l') => {
                let lang = self.state.lang().toggle();
                self.state.set_lang(lang);
            }
            KeyCode::Char('c') => {
                self.state.clear_history();
                self.status = Some("history cleared".to_string());
            }
            KeyCode::Char('e') | KeyCode::Char('#') => {
                self.mode = InputMode::Editing;
                self.input = String::from("#");
                self.status = None;
            }
            _ => {}
        }
    }

    fn handle_edit_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc => {
                self.mode = InputMode::Browse;
                self.input.clear();
            }
            KeyCode::Enter => {
                let input = std::mem::take(&mut self.input);
                self.mode = InputMode::Browse;
                self.apply_color(&input);
            }
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Char(c) if c.is_ascii_hexdigit() || c == '#' => {
                if self.input.len() < 7 {
                    self.input.push(c);
                }
            }
            _ => {}
        }
    }

    /// Invalid input keeps the previous color and only sets the status line.
    fn apply_color(&mut self, hex: &str) {
        match self.state.set_base_color(hex) {
            Ok(()) => self.status = None,
            Err(e) => {
                debug!("ignoring color input: {e}");
                self.status = Some(e.to_string());
            }
        }
    }
}

/// Launch the TUI application.
pub fn run<S: SessionStorage>(mut app: TuiApp<S>) -> Result<()> {
    let mut terminal = ratatui::init();
    let result = event_loop(&mut terminal, &mut app);
    ratatui::restore();
    result
}

fn event_loop<S: SessionStorage>(terminal: &mut DefaultTerminal, app: &mut TuiApp<S>) -> Result<()> {
    while !app.should_quit {
        terminal.draw(|frame| draw(frame, app))?;
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                app.handle_key(key);
            }
        }
    }
    Ok(())
}

fn draw<S: SessionStorage>(frame: &mut Frame, app: &TuiApp<S>) {
    let [presets_area, scheme_area, history_area, footer_area] = Layout::vertical([
        Constraint::Length(4),
        Constraint::Length(4),
        Constraint::Min(3),
        Constraint::Length(2),
    ])
    .areas(frame.area());

    frame.render_widget(
        PresetWidget::new(&app.presets, app.selected_preset, app.state.base_color()),
        presets_area,
    );
    frame.render_widget(
        SchemeWidget::new(app.state.colors(), app.state.scheme()),
        scheme_area,
    );
    frame.render_widget(
        HistoryWidget::new(app.state.history(), now_millis()),
        history_area,
    );
    frame.render_widget(footer(app), footer_area);
}

fn footer<S: SessionStorage>(app: &TuiApp<S>) -> Paragraph<'static> {
    let first = match app.mode {
        InputMode::Editing => Line::from(vec![
            Span::styled("hex> ", Style::default().fg(Color::Yellow)),
            Span::raw(app.input.clone()),
        ]),
        InputMode::Browse => Line::styled(
            format!(
                " ←/→ preset  enter apply  e hex  tab/1-5 scheme  l lang ({})  c clear  q quit",
                lang_switch_label(app.state.lang())
            ),
            Style::default().fg(Color::DarkGray),
        ),
    };
    let second = match &app.status {
        Some(msg) => Line::styled(format!(" {msg}"), Style::default().fg(Color::Red)),
        None => Line::from(""),
    };
    Paragraph::new(vec![first, second])
}

/// Name of the language the toggle switches to, written in that language.
fn lang_switch_label(current: Lang) -> &'static str {
    match current.toggle() {
        Lang::En => "English",
        Lang::Es => "Español",
    }
}
