//! UI panel rendering subsystem
//!
//! This module contains all UI rendering for the gallery page:
//! - Header (logo, title, navigation pills)
//! - Footer (logo, address, links)
//! - Gem logo painting shared by header and footer
//! - Gallery panel (scrollable flower grid)
//! - Flower card painting
//! - Panel manager (page composition)
//! - Input handling (pointer drag, wheel)

pub mod header;
pub mod footer;
pub mod gem_logo;
pub mod gallery_panel;
pub mod flower_card;
pub mod panel_manager;
pub mod input;
