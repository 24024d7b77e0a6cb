//! Theme support for the gallery
//!
//! Provides the named color palettes used by the page shell and the cards,
//! plus a small manager to look them up and apply them to egui visuals.
//!
//! # Examples
//!
//! ```
//! use bloomgrid::theme::ThemeManager;
//!
//! let manager = ThemeManager::new();
//! let stone = manager.get_theme("Stone").unwrap();
//! println!("Stone background: {:?}", stone.colors.background);
//! ```

use egui::Color32;
use std::collections::HashMap;

/// Theme used when none is configured or the configured one is unknown.
pub const DEFAULT_THEME: &str = "Stone";

/// Color palette covering the page shell and the flower cards
#[derive(Debug, Clone)]
pub struct ThemeColors {
    // Page
    pub background: Color32,
    pub footer_background: Color32,

    // Text
    pub text: Color32,
    /// Page title in the header
    pub title: Color32,
    /// Footer address and links
    pub accent: Color32,
    /// Halo painted behind the title so it reads over cards
    pub title_glow: Color32,

    // Header pill buttons
    pub pill_fill: Color32,
    pub pill_hover: Color32,
    pub pill_border: Color32,
    pub pill_text: Color32,

    // Cards
    pub caption: Color32,
    pub placeholder: Color32,
    pub placeholder_petal: Color32,
}

/// A named palette
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

/// Registry of the built-in themes
pub struct ThemeManager {
    themes: HashMap<String, Theme>,
    /// Copy of the default theme returned for unknown names
    fallback: Theme,
}

impl ThemeManager {
    /// Creates a ThemeManager holding every built-in theme
    pub fn new() -> Self {
        let mut themes = HashMap::new();
        for theme in [stone_theme(), dusk_theme()] {
            themes.insert(theme.name.clone(), theme);
        }
        Self {
            themes,
            fallback: stone_theme(),
        }
    }

    /// Retrieves a theme by name
    pub fn get_theme(&self, name: &str) -> Option<&Theme> {
        self.themes.get(name)
    }

    /// Retrieves a theme by name, falling back to [`DEFAULT_THEME`]
    pub fn theme_or_default(&self, name: &str) -> &Theme {
        self.themes.get(name).unwrap_or(&self.fallback)
    }

    /// Returns all theme names, sorted
    pub fn list_themes(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.themes.keys().map(|s| s.as_str()).collect();
        names.sort();
        names
    }

    /// Applies a theme's colors to egui visuals
    pub fn apply_theme(&self, theme: &Theme, visuals: &mut egui::Visuals) {
        let colors = &theme.colors;

        visuals.panel_fill = colors.background;
        visuals.window_fill = colors.background;
        visuals.extreme_bg_color = colors.footer_background;

        visuals.override_text_color = Some(colors.text);

        visuals.widgets.inactive.weak_bg_fill = colors.pill_fill;
        visuals.widgets.inactive.bg_fill = colors.pill_fill;
        visuals.widgets.hovered.weak_bg_fill = colors.pill_hover;
        visuals.widgets.hovered.bg_fill = colors.pill_hover;
        visuals.widgets.inactive.bg_stroke.color = colors.pill_border;
        visuals.widgets.hovered.bg_stroke.color = colors.pill_border;

        visuals.hyperlink_color = colors.accent;
    }
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Warm light theme: stone background with plum lettering
fn stone_theme() -> Theme {
    Theme {
        name: "Stone".to_string(),
        colors: ThemeColors {
            background: hex_to_color32("#fafaf9"),
            footer_background: Color32::WHITE,

            text: hex_to_color32("#44403c"),
            title: hex_to_color32("#581c3c"),
            accent: hex_to_color32("#4c1d58"),
            title_glow: Color32::WHITE,

            pill_fill: with_alpha(Color32::WHITE, 178),
            pill_hover: with_alpha(Color32::WHITE, 230),
            pill_border: hex_to_color32("#d6d3d1"),
            pill_text: hex_to_color32("#44403c"),

            caption: hex_to_color32("#292524"),
            placeholder: hex_to_color32("#e7e5e4"),
            placeholder_petal: hex_to_color32("#f5d0e0"),
        },
    }
}

/// Dark variant for dim rooms
fn dusk_theme() -> Theme {
    Theme {
        name: "Dusk".to_string(),
        colors: ThemeColors {
            background: hex_to_color32("#1c1917"),
            footer_background: hex_to_color32("#292524"),

            text: hex_to_color32("#e7e5e4"),
            title: hex_to_color32("#f5c2dc"),
            accent: hex_to_color32("#e9d5ff"),
            title_glow: hex_to_color32("#1c1917"),

            pill_fill: with_alpha(hex_to_color32("#292524"), 178),
            pill_hover: with_alpha(hex_to_color32("#44403c"), 230),
            pill_border: hex_to_color32("#57534e"),
            pill_text: hex_to_color32("#e7e5e4"),

            caption: hex_to_color32("#f5f5f4"),
            placeholder: hex_to_color32("#292524"),
            placeholder_petal: hex_to_color32("#6b2149"),
        },
    }
}

/// Converts a hex color string (like "#581c3c") to Color32
pub fn hex_to_color32(hex: &str) -> Color32 {
    let hex = hex.trim_start_matches('#');

    if hex.len() == 6 && hex.is_ascii() {
        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(0);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(0);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(0);
        Color32::from_rgb(r, g, b)
    } else {
        Color32::from_rgb(0, 0, 0) // Fallback to black
    }
}

/// Returns the color with its alpha replaced (unmultiplied)
pub fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_themes_listed() {
        let manager = ThemeManager::new();
        assert_eq!(manager.list_themes(), vec!["Dusk", "Stone"]);
    }

    #[test]
    fn test_unknown_theme_falls_back() {
        let manager = ThemeManager::new();
        assert!(manager.get_theme("Neon").is_none());
        assert_eq!(manager.theme_or_default("Neon").name, DEFAULT_THEME);
    }

    #[test]
    fn test_hex_to_color32() {
        assert_eq!(hex_to_color32("#581c3c"), Color32::from_rgb(0x58, 0x1c, 0x3c));
        assert_eq!(hex_to_color32("bad"), Color32::from_rgb(0, 0, 0));
    }

    #[test]
    fn test_hex_to_color32_non_ascii_falls_back() {
        // Six bytes, but a two-byte char straddles the first channel boundary
        assert_eq!("#aé123".len() - 1, 6);
        assert_eq!(hex_to_color32("#aé123"), Color32::from_rgb(0, 0, 0));
    }
}
