use ratatui::style::Color;

use crate::model::UiConfig;

/// Parsed color theme for the TUI
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub background: Color,
    pub header_bg: Color,
    pub text: Color,
    pub text_bright: Color,
    pub highlight: Color,
    pub dim: Color,
    pub done: Color,
    pub danger: Color,
    pub selection_bg: Color,
    pub border: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            background: Color::Rgb(0x1B, 0x1B, 0x1F),
            header_bg: Color::Rgb(0x82, 0x57, 0xE5),
            text: Color::Rgb(0xD0, 0xD0, 0xD6),
            text_bright: Color::Rgb(0xFF, 0xFF, 0xFF),
            highlight: Color::Rgb(0x82, 0x57, 0xE5),
            dim: Color::Rgb(0xB2, 0xB2, 0xB2),
            done: Color::Rgb(0x1D, 0xB8, 0x63),
            danger: Color::Rgb(0xE8, 0x3F, 0x5B),
            selection_bg: Color::Rgb(0x2E, 0x25, 0x4A),
            border: Color::Rgb(0x66, 0x66, 0x66),
        }
    }
}

/// Parse a hex color string like "#8257E5" into an RGB Color
fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

impl Theme {
    /// Create a theme from UI config, falling back to defaults.
    /// Unknown slots and malformed colors are ignored.
    pub fn from_config(ui: &UiConfig) -> Self {
        let mut theme = Theme::default();

        for (key, value) in &ui.colors {
            let Some(color) = parse_hex_color(value) else {
                continue;
            };
            match key.as_str() {
                "background" => theme.background = color,
                "header_bg" => theme.header_bg = color,
                "text" => theme.text = color,
                "text_bright" => theme.text_bright = color,
                "highlight" => theme.highlight = color,
                "dim" => theme.dim = color,
                "done" => theme.done = color,
                "danger" => theme.danger = color,
                "selection_bg" => theme.selection_bg = color,
                "border" => theme.border = color,
                _ => {}
            }
        }

        theme
    }

    /// Checkbox color for a row
    pub fn checkbox_color(&self, done: bool) -> Color {
        if done { self.done } else { self.dim }
    }
}
