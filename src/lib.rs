pub mod error;
pub mod catalog;
pub mod config;
pub mod scheduler;
pub mod viewport;
pub mod interaction;
pub mod scroll_surface;
pub mod grid_layout;
pub mod theme;

// Export catalog and configuration
pub use catalog::{Catalog, Flower};
pub use config::GalleryConfig;
pub use error::{CatalogError, ConfigError};

// Export scrolling core
pub use scheduler::{FrameHandle, FrameQueue, FrameScheduler};
pub use viewport::Viewport;
pub use interaction::InteractionState;
pub use scroll_surface::{PointerCapture, ScrollSurface, FRICTION, STOP_THRESHOLD, WHEEL_GAIN};

// Export layout
pub use grid_layout::GridLayout;

// Export theme support
pub use theme::{Theme, ThemeColors, ThemeManager, hex_to_color32, with_alpha};
