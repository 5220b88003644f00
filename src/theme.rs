//! Design tokens and styles for the table widget.
//!
//! [`TableTheme`] is an immutable configuration struct: applications build
//! or deserialize one once and pass it to every table. The widget never
//! mutates it. The default palette keeps to named terminal colors so it
//! degrades cleanly on 16-color terminals.

use std::sync::OnceLock;

use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};

/// Loader animation frames (braille spinner).
const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Color and glyph tokens for the table widget.
///
/// All fields have defaults, so a partial config deserializes cleanly and
/// unspecified fields keep the built-in palette.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableTheme {
    // Colors
    pub text: Color,
    pub text_dim: Color,
    pub header_fg: Color,
    pub header_bg: Color,
    /// Background for rows flagged as highlighted.
    pub highlight_bg: Color,
    /// Background for the expandable auxiliary region.
    pub card_bg: Color,
    pub skeleton_fg: Color,
    pub footer_fg: Color,
    pub title_fg: Color,
    pub border_fg: Color,

    // Glyphs
    /// Fill glyph for skeleton placeholder cells.
    pub skeleton_glyph: String,
    /// Loader animation frames, advanced by the state's tick counter.
    pub spinner_frames: Vec<String>,
    /// Sort indicator for ascending order.
    pub sort_ascending: String,
    /// Sort indicator for descending order.
    pub sort_descending: String,
}

impl Default for TableTheme {
    fn default() -> Self {
        Self {
            text: Color::White,
            text_dim: Color::DarkGray,
            header_fg: Color::White,
            header_bg: Color::Blue,
            highlight_bg: Color::Blue,
            card_bg: Color::DarkGray,
            skeleton_fg: Color::DarkGray,
            footer_fg: Color::White,
            title_fg: Color::White,
            border_fg: Color::DarkGray,
            skeleton_glyph: "░".to_string(),
            spinner_frames: SPINNER_FRAMES.iter().map(|f| f.to_string()).collect(),
            sort_ascending: "▲".to_string(),
            sort_descending: "▼".to_string(),
        }
    }
}

impl TableTheme {
    /// Default text style.
    pub fn base(&self) -> Style {
        Style::default().fg(self.text)
    }

    /// Dimmed text style (empty state, secondary content).
    pub fn dim(&self) -> Style {
        Style::default().fg(self.text_dim)
    }

    /// Header row style.
    pub fn header(&self) -> Style {
        Style::default()
            .fg(self.header_fg)
            .bg(self.header_bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Title region style.
    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.title_fg)
            .add_modifier(Modifier::BOLD)
    }

    /// Highlighted row style.
    pub fn highlight(&self) -> Style {
        Style::default().fg(self.text).bg(self.highlight_bg)
    }

    /// Expandable auxiliary region style.
    pub fn card(&self) -> Style {
        Style::default().fg(self.text).bg(self.card_bg)
    }

    /// Skeleton placeholder style.
    pub fn skeleton(&self) -> Style {
        Style::default().fg(self.skeleton_fg)
    }

    /// Load-more footer style.
    pub fn footer(&self) -> Style {
        Style::default().fg(self.footer_fg)
    }

    /// Border style for the surrounding block.
    pub fn border(&self) -> Style {
        Style::default().fg(self.border_fg)
    }

    /// Current loader animation frame for a tick counter.
    pub fn spinner_frame(&self, tick: usize) -> &str {
        if self.spinner_frames.is_empty() {
            return "";
        }
        &self.spinner_frames[tick % self.spinner_frames.len()]
    }
}

/// The process-wide default theme, created on first use.
pub fn default_theme() -> &'static TableTheme {
    static DEFAULT: OnceLock<TableTheme> = OnceLock::new();
    DEFAULT.get_or_init(TableTheme::default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spinner_frames_cycle() {
        let theme = TableTheme::default();
        let n = theme.spinner_frames.len();
        assert!(n > 0);
        assert_eq!(theme.spinner_frame(0), theme.spinner_frame(n));
        assert_ne!(theme.spinner_frame(0), theme.spinner_frame(1));
    }

    #[test]
    fn empty_spinner_frames_do_not_panic() {
        let theme = TableTheme {
            spinner_frames: Vec::new(),
            ..Default::default()
        };
        assert_eq!(theme.spinner_frame(7), "");
    }

    #[test]
    fn header_style_is_bold() {
        let style = TableTheme::default().header();
        assert!(style.add_modifier.contains(Modifier::BOLD));
        assert_eq!(style.bg, Some(Color::Blue));
    }

    #[test]
    fn partial_config_deserializes_over_defaults() {
        let theme: TableTheme =
            serde_json::from_str(r##"{"header_bg": "#1e293b", "sort_ascending": "^"}"##).unwrap();
        assert_eq!(theme.header_bg, Color::Rgb(0x1e, 0x29, 0x3b));
        assert_eq!(theme.sort_ascending, "^");
        // Everything else keeps the built-in palette.
        assert_eq!(theme.text, Color::White);
        assert_eq!(theme.skeleton_glyph, "░");
    }

    #[test]
    fn default_theme_is_shared() {
        let a = default_theme() as *const TableTheme;
        let b = default_theme() as *const TableTheme;
        assert_eq!(a, b);
    }
}
