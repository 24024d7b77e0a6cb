//! Theme and styling state management.
//!
//! This module encapsulates all state related to visual theming,
//! including the theme registry and the active theme.

use bloomgrid::{ThemeColors, ThemeManager};

/// State related to visual theme and styling.
///
/// Responsibilities:
/// - Owning the theme registry
/// - Tracking the active theme name
/// - Resolving the active palette (unknown names fall back to the default)
pub struct ThemeState {
    /// Theme manager instance
    theme_manager: ThemeManager,
    /// Name of the active theme
    current_theme_name: String,
}

impl std::fmt::Debug for ThemeState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeState")
            .field("current_theme_name", &self.current_theme_name)
            .finish_non_exhaustive()
    }
}

impl ThemeState {
    /// Creates a theme state for the named theme.
    ///
    /// An unknown name is kept as requested but resolves to the default
    /// palette; a warning is logged once here.
    pub fn with_theme(theme_name: String) -> Self {
        let theme_manager = ThemeManager::new();
        if theme_manager.get_theme(&theme_name).is_none() {
            tracing::warn!(
                theme = %theme_name,
                available = ?theme_manager.list_themes(),
                "unknown theme, using default"
            );
        }

        Self {
            theme_manager,
            current_theme_name: theme_name,
        }
    }

    // ===== Theme Queries =====

    /// Returns a reference to the theme manager.
    pub fn theme_manager(&self) -> &ThemeManager {
        &self.theme_manager
    }

    /// Returns the name of the active theme.
    pub fn current_theme_name(&self) -> &str {
        &self.current_theme_name
    }

    /// Returns the palette of the active theme.
    pub fn colors(&self) -> &ThemeColors {
        &self.theme_manager.theme_or_default(&self.current_theme_name).colors
    }

    /// Returns true if the active palette is a light one.
    pub fn is_light(&self) -> bool {
        let bg = self.colors().background;
        (bg.r() as u32 + bg.g() as u32 + bg.b() as u32) > 3 * 128
    }
}
