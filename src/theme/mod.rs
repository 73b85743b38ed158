pub mod presets;

use iced::Color;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Complete theme definition with semantic color naming
#[derive(Debug, Clone, PartialEq)]
pub struct AppTheme {
    pub name: String,

    // === Background Layers (progressive depth) ===
    pub bg_base: Color,     // App background (deepest)
    pub bg_surface: Color,  // Cards, table, toolbar
    pub bg_elevated: Color, // Inputs, buttons
    pub bg_hover: Color,    // Hover states, zebra rows
    pub bg_active: Color,   // Active/selected states

    // === Foreground/Text ===
    pub fg_primary: Color,
    pub fg_secondary: Color,
    pub fg_muted: Color, // Disabled/placeholder text
    pub fg_on_accent: Color,

    // === Semantic Colors ===
    pub accent: Color,
    pub accent_hover: Color,
    pub success: Color,
    pub warning: Color,
    pub danger: Color,
    pub info: Color,

    // === Borders & Dividers ===
    pub border: Color,
    pub border_strong: Color,
    pub divider: Color,

    // === Shadows ===
    pub shadow_color: Color,
    pub shadow_strong: Color, // Modals and toasts
}

impl AppTheme {
    /// Creates a theme from RGB hex values for easier definition
    #[allow(clippy::too_many_arguments)]
    pub fn from_hex(
        name: &str,
        bg_base: u32,
        bg_surface: u32,
        bg_elevated: u32,
        bg_hover: u32,
        bg_active: u32,
        fg_primary: u32,
        fg_secondary: u32,
        fg_muted: u32,
        fg_on_accent: u32,
        accent: u32,
        accent_hover: u32,
        success: u32,
        warning: u32,
        danger: u32,
        info: u32,
        border: u32,
        border_strong: u32,
        divider: u32,
    ) -> Self {
        Self {
            name: name.to_string(),
            bg_base: hex_to_color(bg_base),
            bg_surface: hex_to_color(bg_surface),
            bg_elevated: hex_to_color(bg_elevated),
            bg_hover: hex_to_color(bg_hover),
            bg_active: hex_to_color(bg_active),
            fg_primary: hex_to_color(fg_primary),
            fg_secondary: hex_to_color(fg_secondary),
            fg_muted: hex_to_color(fg_muted),
            fg_on_accent: hex_to_color(fg_on_accent),
            accent: hex_to_color(accent),
            accent_hover: hex_to_color(accent_hover),
            success: hex_to_color(success),
            warning: hex_to_color(warning),
            danger: hex_to_color(danger),
            info: hex_to_color(info),
            border: hex_to_color(border),
            border_strong: hex_to_color(border_strong),
            divider: hex_to_color(divider),
            shadow_color: Color::from_rgba(0.0, 0.0, 0.0, 0.25),
            shadow_strong: Color::from_rgba(0.0, 0.0, 0.0, 0.6),
        }
    }

    /// Whether this palette has a light background
    pub fn is_light(&self) -> bool {
        let c = self.bg_base;
        (0.299 * c.r + 0.587 * c.g + 0.114 * c.b) > 0.5
    }
}

/// Converts hex color (0xRRGGBB) to iced Color
#[allow(clippy::cast_precision_loss)]
fn hex_to_color(hex: u32) -> Color {
    Color::from_rgb(
        ((hex >> 16) & 0xFF) as f32 / 255.0,
        ((hex >> 8) & 0xFF) as f32 / 255.0,
        (hex & 0xFF) as f32 / 255.0,
    )
}

/// Light or dark mode, persisted in the config
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, Display, EnumIter,
)]
pub enum ThemeChoice {
    #[default]
    Light,
    Dark,
}

impl ThemeChoice {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn to_theme(self) -> AppTheme {
        match self {
            Self::Light => presets::light(),
            Self::Dark => presets::dark(),
        }
    }

    /// Label for the toolbar toggle, naming the mode it switches to
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Light => "☾ Dark",
            Self::Dark => "☀ Light",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_default_is_light() {
        assert_eq!(ThemeChoice::default(), ThemeChoice::Light);
        assert!(ThemeChoice::default().to_theme().is_light());
    }

    #[test]
    fn test_toggle_round_trips() {
        for choice in ThemeChoice::iter() {
            assert_ne!(choice.toggled(), choice);
            assert_eq!(choice.toggled().toggled(), choice);
        }
    }

    #[test]
    fn test_dark_palette_is_dark() {
        assert!(!ThemeChoice::Dark.to_theme().is_light());
    }

    #[test]
    fn test_serialized_as_variant_name() {
        let json = serde_json::to_string(&ThemeChoice::Dark).unwrap();
        assert_eq!(json, r#""Dark""#);
    }

    #[test]
    fn test_hex_to_color() {
        let c = hex_to_color(0x00FF_0000);
        assert!((c.r - 1.0).abs() < f32::EPSILON);
        assert!(c.g.abs() < f32::EPSILON);
    }
}
