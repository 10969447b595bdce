//! Dark and light palettes for the chart and chrome.

use ratatui::style::Color;
use wavescope::config::Theme;

/// Resolved colors for one theme.
pub struct Palette {
    pub text: Color,
    pub dimmed: Color,
    pub border: Color,
    pub accent: Color,
    pub selected: Color,
    pub disabled: Color,
    pub max_env: Color,
    pub min_env: Color,
    pub rms_env: Color,
    pub axis: Color,
    pub success: Color,
    pub error: Color,
}

pub fn palette(theme: Theme) -> Palette {
    match theme {
        Theme::Dark => Palette {
            text: Color::White,
            dimmed: Color::DarkGray,
            border: Color::DarkGray,
            accent: Color::Cyan,
            selected: Color::Yellow,
            disabled: Color::DarkGray,
            max_env: Color::LightRed,
            min_env: Color::LightBlue,
            rms_env: Color::LightMagenta,
            axis: Color::DarkGray,
            success: Color::Green,
            error: Color::Red,
        },
        Theme::Light => Palette {
            text: Color::Black,
            dimmed: Color::Gray,
            border: Color::Gray,
            accent: Color::Blue,
            selected: Color::Magenta,
            disabled: Color::Gray,
            max_env: Color::Red,
            min_env: Color::Blue,
            rms_env: Color::Magenta,
            axis: Color::Gray,
            success: Color::Green,
            error: Color::Red,
        },
    }
}
