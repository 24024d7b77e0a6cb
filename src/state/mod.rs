//! State management modules for the gallery viewer.
//!
//! Interaction, viewport and layout state live in the library next to the
//! scroll surface; this module holds the UI-only pieces:
//! - Theme state (theme manager, active theme)

mod theme_state;

pub use theme_state::ThemeState;
