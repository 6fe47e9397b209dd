//! Centralized theme module for TUI color constants and styles

use ratatui::prelude::*;

use crate::config::ThemeSetting;
use crate::scoring::engine::CLASSIFY_THRESHOLD;

/// Complete color palette for the TUI
#[derive(Debug, Clone)]
pub struct ThemeColors {
    // Pole colors: scores at/above the threshold vs below
    pub high_pole: Color,
    pub low_pole: Color,

    // Slider bar colors
    pub bar_empty: Color,

    // Radar chart colors
    pub polygon: Color,
    pub grid: Color,
    pub label: Color,

    pub row_selected: Style,

    // General colors
    pub muted: Color,
    pub title_color: Color,

    // Status bar colors
    pub status_bar_bg: Color,
    pub status_key_color: Color,
    pub flash_info: Color,
    pub flash_success: Color,
    pub flash_error: Color,

    // Popup overlay colors
    pub popup_border: Color,
    pub popup_title: Style,
}

impl ThemeColors {
    /// Dark theme palette
    pub fn dark() -> Self {
        Self {
            high_pole: Color::Cyan,
            low_pole: Color::Magenta,
            bar_empty: Color::DarkGray,
            polygon: Color::Yellow,
            grid: Color::Indexed(238),
            label: Color::Gray,
            row_selected: Style::new().reversed(),
            muted: Color::Gray,
            title_color: Color::Cyan,
            status_bar_bg: Color::Indexed(236),
            status_key_color: Color::Cyan,
            flash_info: Color::White,
            flash_success: Color::Green,
            flash_error: Color::Red,
            popup_border: Color::Cyan,
            popup_title: Style::new().fg(Color::Cyan).bold(),
        }
    }

    /// Light theme palette (darker accents for pale backgrounds)
    pub fn light() -> Self {
        Self {
            high_pole: Color::Blue,
            low_pole: Color::Rgb(150, 0, 120),
            bar_empty: Color::Indexed(250),
            polygon: Color::Rgb(180, 90, 0),
            grid: Color::Indexed(252),
            label: Color::Indexed(238),
            row_selected: Style::new().reversed(),
            muted: Color::Indexed(242),
            title_color: Color::Blue,
            status_bar_bg: Color::Indexed(254),
            status_key_color: Color::Blue,
            flash_info: Color::Indexed(236),
            flash_success: Color::Rgb(0, 120, 0),
            flash_error: Color::Rgb(170, 0, 0),
            popup_border: Color::Blue,
            popup_title: Style::new().fg(Color::Blue).bold(),
        }
    }

    /// Color for a raw score: high-pole color at/above the classify threshold
    pub fn pole_color(&self, score: u8) -> Color {
        if score >= CLASSIFY_THRESHOLD {
            self.high_pole
        } else {
            self.low_pole
        }
    }
}

/// Theme resolved from config. `Auto` probes terminal background luminance,
/// so call this before the terminal enters raw mode.
pub fn resolve_theme(setting: ThemeSetting) -> ThemeColors {
    match setting {
        ThemeSetting::Dark => ThemeColors::dark(),
        ThemeSetting::Light => ThemeColors::light(),
        ThemeSetting::Auto => match terminal_light::luma() {
            Ok(luma) if luma > 0.6 => ThemeColors::light(),
            Ok(_) => ThemeColors::dark(),
            Err(e) => {
                tracing::debug!("terminal background detection failed: {:?}", e);
                ThemeColors::dark()
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pole_color_threshold() {
        let theme = ThemeColors::dark();
        assert_eq!(theme.pole_color(50), theme.high_pole);
        assert_eq!(theme.pole_color(49), theme.low_pole);
    }

    #[test]
    fn test_info_flash_differs_from_status_bar() {
        for theme in [ThemeColors::dark(), ThemeColors::light()] {
            assert_ne!(theme.flash_info, theme.status_bar_bg);
        }
        assert_ne!(ThemeColors::light().flash_info, Color::White);
    }

    #[test]
    fn test_explicit_settings_skip_detection() {
        assert_eq!(resolve_theme(ThemeSetting::Light).title_color, Color::Blue);
        assert_eq!(resolve_theme(ThemeSetting::Dark).title_color, Color::Cyan);
    }
}
