use ratatui::prelude::*;
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::color::{HexColor, Rgb};
use crate::scheme::{ColorInfo, SchemeKind};
use crate::state::HistoryEntry;

const SWATCH_WIDTH: usize = 9;

fn to_color(c: Rgb) -> Color {
    Color::Rgb(c.r, c.g, c.b)
}

/// Choose black or white foreground for readable text on the given background.
fn contrast_fg(c: Rgb) -> Color {
    if c.relative_luminance() > 0.4 {
        Color::Black
    } else {
        Color::White
    }
}

fn swatch(hex: &HexColor, label: String) -> Span<'static> {
    let rgb = hex.to_rgb();
    Span::styled(
        format!("{label:^SWATCH_WIDTH$}"),
        Style::default().bg(to_color(rgb)).fg(contrast_fg(rgb)),
    )
}

/// Human-friendly age of a history entry.
pub fn format_age(elapsed_ms: i64) -> String {
    let secs = elapsed_ms.max(0) / 1000;
    match secs {
        0..=59 => format!("{secs}s ago"),
        60..=3599 => format!("{}m ago", secs / 60),
        _ => format!("{}h ago", secs / 3600),
    }
}

/// The fixed preset palette with a marker under the highlighted swatch.
pub struct PresetWidget<'a> {
    presets: &'a [HexColor],
    selected: usize,
    current: &'a HexColor,
}

impl<'a> PresetWidget<'a> {
    pub fn new(presets: &'a [HexColor], selected: usize, current: &'a HexColor) -> Self {
        Self {
            presets,
            selected,
            current,
        }
    }
}

impl Widget for PresetWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered().title(format!("Base {}", self.current));
        let inner = block.inner(area);
        block.render(area, buf);

        let mut swatches = vec![Span::raw(" ")];
        let mut markers = vec![Span::raw(" ")];
        for (i, hex) in self.presets.iter().enumerate() {
            let label = if hex == self.current { "*" } else { "" };
            swatches.push(swatch(hex, label.to_string()));
            swatches.push(Span::raw(" "));

            let marker = if i == self.selected { "^" } else { "" };
            markers.push(Span::styled(
                format!("{marker:^SWATCH_WIDTH$}"),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ));
            markers.push(Span::raw(" "));
        }

        Paragraph::new(vec![Line::from(swatches), Line::from(markers)]).render(inner, buf);
    }
}

/// Result swatches for the current scheme, with names underneath.
pub struct SchemeWidget<'a> {
    colors: &'a [ColorInfo],
    kind: SchemeKind,
}

impl<'a> SchemeWidget<'a> {
    pub fn new(colors: &'a [ColorInfo], kind: SchemeKind) -> Self {
        Self { colors, kind }
    }
}

impl Widget for SchemeWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered().title(format!("Scheme: {}", self.kind));
        let inner = block.inner(area);
        block.render(area, buf);

        let mut swatches = vec![Span::raw(" ")];
        let mut names = vec![Span::raw(" ")];
        for color in self.colors {
            swatches.push(swatch(&color.hex, color.hex.to_string()));
            swatches.push(Span::raw("  "));
            names.push(Span::raw(format!("{:<width$}", color.name, width = SWATCH_WIDTH + 2)));
        }

        Paragraph::new(vec![Line::from(swatches), Line::from(names)]).render(inner, buf);
    }
}

/// Recent selections, newest first.
pub struct HistoryWidget<'a> {
    history: &'a [HistoryEntry],
    now_ms: i64,
}

impl<'a> HistoryWidget<'a> {
    pub fn new(history: &'a [HistoryEntry], now_ms: i64) -> Self {
        Self { history, now_ms }
    }
}

impl Widget for HistoryWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered().title("Recent Combinations");
        let inner = block.inner(area);
        block.render(area, buf);

        if self.history.is_empty() {
            Paragraph::new(Line::styled("  (empty)", Style::default().fg(Color::DarkGray)))
                .render(inner, buf);
            return;
        }

        let lines: Vec<Line> = self
            .history
            .iter()
            .map(|entry| {
                let mut spans = vec![Span::raw(" ")];
                for color in &entry.colors {
                    let rgb = color.hex.to_rgb();
                    spans.push(Span::styled("   ", Style::default().bg(to_color(rgb))));
                    spans.push(Span::raw(" "));
                }
                spans.push(Span::raw(format!(
                    " {} {:<14} {}",
                    entry.base_color,
                    entry.scheme,
                    format_age(self.now_ms.saturating_sub(entry.timestamp))
                )));
                Line::from(spans)
            })
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }
}
