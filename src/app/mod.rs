//! Application-level modules for the gallery viewer.
//!
//! This module contains the coordinators, the centralized state and the
//! egui-backed frame scheduler that drives momentum scrolling.

mod app_state;
mod gallery_coordinator;
mod repaint_scheduler;
mod theme_coordinator;

pub use app_state::AppState;
pub use gallery_coordinator::GalleryCoordinator;
pub use repaint_scheduler::RepaintScheduler;
pub use theme_coordinator::ThemeCoordinator;
